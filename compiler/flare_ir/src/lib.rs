//! Flare IR - shared syntax data
//!
//! This crate contains the data structures exchanged between the lexer,
//! the parser and the hosts that drive them:
//! - Spans for source locations
//! - Tokens, token flags and `TokenList` for lexer output
//! - Node kinds and the arena-backed concrete syntax tree
//!
//! # Design Philosophy
//!
//! - **Lossless**: every token of the input, trivia included, is kept
//! - **Flatten Everything**: tree nodes live in one arena, addressed by `NodeId(u32)`
//! - **Fieldless kinds**: `TokenKind` and `NodeKind` are `Copy` bytes; text is
//!   always recovered from the source through spans

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
pub mod syntax;
mod token;

pub use span::{Span, SpanError};
pub use syntax::{Element, NodeId, NodeKind, SyntaxTree, TreeBuilder};
pub use token::{Token, TokenFlags, TokenKind, TokenList};
