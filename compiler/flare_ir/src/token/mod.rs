//! Tokens produced by the lexer.

mod flags;
mod kind;
mod list;

pub use flags::TokenFlags;
pub use kind::TokenKind;
pub use list::TokenList;

use crate::Span;

/// A token: kind plus the byte range of its text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// The token's text within `source`.
    ///
    /// Returns an empty string if the span does not fit the source.
    #[inline]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.to_range()).unwrap_or_default()
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Token;
    crate::static_assert_size!(Token, 12);
}
