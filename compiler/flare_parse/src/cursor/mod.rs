//! Token cursor for navigating the token stream.
//!
//! The cursor walks the lexer's lossless token list but only ever stops on
//! significant tokens: trivia are skipped here and re-attached to the tree
//! by the sink. Positions are raw indices into the token list, so a saved
//! position can be restored exactly on rollback.

use flare_ir::{Span, TokenFlags, TokenKind, TokenList};
use tracing::trace;

use crate::recovery::TokenSet;

/// A `>`-started operator recognised from adjacent tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GtOperator {
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `>>`
    Shr,
    /// `>>=`
    ShrEq,
    /// `>>>`
    UShr,
    /// `>>>=`
    UShrEq,
}

impl GtOperator {
    /// Number of `>`/`=` tokens making up the operator.
    pub const fn token_count(self) -> usize {
        match self {
            GtOperator::Gt => 1,
            GtOperator::GtEq | GtOperator::Shr => 2,
            GtOperator::ShrEq | GtOperator::UShr => 3,
            GtOperator::UShrEq => 4,
        }
    }

    pub const fn is_assignment(self) -> bool {
        matches!(self, GtOperator::ShrEq | GtOperator::UShrEq)
    }
}

/// Cursor for navigating tokens.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    source: &'a str,
    /// Raw index of the current token; never a trivia token.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the first significant token.
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        let mut cursor = Cursor {
            tokens,
            source,
            pos: 0,
        };
        cursor.skip_trivia();
        cursor
    }

    /// Get the current position in the token stream.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the cursor position directly.
    ///
    /// Used by rollback. `pos` must be a position previously returned by
    /// [`Cursor::position`].
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(
            pos < self.tokens.len().max(1),
            "cursor position {pos} out of bounds"
        );
        self.pos = pos;
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.tokens.kind(self.pos)
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .map_or(Span::point(self.source_len()), |t| t.span)
    }

    /// Text of the current token.
    #[inline]
    pub fn current_text(&self) -> &'a str {
        self.tokens
            .get(self.pos)
            .map_or("", |t| t.text(self.source))
    }

    fn source_len(&self) -> u32 {
        u32::try_from(self.source.len()).unwrap_or(u32::MAX)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn check_set(&self, set: TokenSet) -> bool {
        set.contains(self.current_kind())
    }

    /// Raw index of the `n`-th significant token ahead (0 is the current one).
    fn nth_index(&self, n: usize) -> usize {
        let mut index = self.pos;
        for _ in 0..n {
            if self.tokens.kind(index) == TokenKind::Eof {
                return index;
            }
            index += 1;
            while self.tokens.kind(index).is_trivia() {
                index += 1;
            }
        }
        index
    }

    /// Kind of the `n`-th significant token ahead; `Eof` past the end.
    #[inline]
    pub fn peek_kind_at(&self, n: usize) -> TokenKind {
        self.tokens.kind(self.nth_index(n))
    }

    #[inline]
    pub fn peek_next_kind(&self) -> TokenKind {
        self.peek_kind_at(1)
    }

    /// True if a line terminator occurs in the trivia before the current token.
    #[inline]
    pub fn has_newline_before(&self) -> bool {
        self.tokens
            .flags(self.pos)
            .contains(TokenFlags::NEWLINE_BEFORE)
    }

    /// True if a line terminator separates the current token from the next one.
    #[inline]
    pub fn has_newline_after(&self) -> bool {
        self.tokens
            .flags(self.nth_index(1))
            .contains(TokenFlags::NEWLINE_BEFORE)
    }

    /// Check if the next token follows the current one with no trivia between.
    #[inline]
    pub fn next_is_adjacent(&self) -> bool {
        let next = self.pos + 1;
        self.tokens.kind(next) != TokenKind::Eof
            && self.tokens.flags(next).contains(TokenFlags::ADJACENT)
    }

    /// Recognise a compound operator starting at the current `>`.
    ///
    /// The lexer emits every `>` on its own so that `>>` can close two
    /// generic signatures; in expressions adjacent `>` and `=` tokens are
    /// merged back here.
    pub fn gt_operator(&self) -> Option<GtOperator> {
        if !self.check(TokenKind::Gt) {
            return None;
        }
        let adjacent_at = |offset: usize, kind: TokenKind| {
            let index = self.pos + offset;
            self.tokens.kind(index) == kind
                && self.tokens.flags(index).contains(TokenFlags::ADJACENT)
        };
        let op = if adjacent_at(1, TokenKind::Gt) {
            if adjacent_at(2, TokenKind::Gt) {
                if adjacent_at(3, TokenKind::Eq) {
                    GtOperator::UShrEq
                } else {
                    GtOperator::UShr
                }
            } else if adjacent_at(2, TokenKind::Eq) {
                GtOperator::ShrEq
            } else {
                GtOperator::Shr
            }
        } else if adjacent_at(1, TokenKind::Eq) {
            GtOperator::GtEq
        } else {
            GtOperator::Gt
        };
        Some(op)
    }

    /// Source text from the token at raw index `start` through the last
    /// token before the current one, trailing trivia excluded.
    pub fn text_since(&self, start: usize) -> &'a str {
        let mut end = self.pos;
        while end > start && self.tokens.kind(end - 1).is_trivia() {
            end -= 1;
        }
        if end <= start {
            return "";
        }
        match (self.tokens.get(start), self.tokens.get(end - 1)) {
            (Some(first), Some(last)) => self
                .source
                .get(first.span.merge(last.span).to_range())
                .unwrap_or(""),
            _ => "",
        }
    }

    /// Consume the current token and return its raw index.
    ///
    /// Never moves past `Eof`: advancing at the end returns the `Eof`
    /// index and leaves the cursor in place.
    pub fn advance(&mut self) -> usize {
        let current = self.pos;
        let kind = self.current_kind();
        trace!(
            pos = current,
            kind = %kind.display_name(),
            "advance"
        );
        if kind != TokenKind::Eof {
            self.pos += 1;
            self.skip_trivia();
        }
        current
    }

    fn skip_trivia(&mut self) {
        while self.tokens.kind(self.pos).is_trivia() {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests;
