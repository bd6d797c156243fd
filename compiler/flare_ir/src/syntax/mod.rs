//! Concrete syntax tree.
//!
//! The parser never builds this directly: it emits events that a sink
//! replays into a [`TreeBuilder`]. The resulting [`SyntaxTree`] keeps every
//! token of the input exactly once, so the source text can be reconstructed
//! from its leaves.

mod kind;
mod tree;

pub use kind::NodeKind;
pub use tree::{Descendants, Element, NodeId, SyntaxTree, TreeBuilder};

#[cfg(test)]
mod tests;
