//! Per-token trivia context.

use bitflags::bitflags;

bitflags! {
    /// Trivia context of a significant token, computed by the lexer.
    ///
    /// Lets the parser answer "line break before?" and "adjacent to the
    /// previous token?" in O(1) without rescanning trivia.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenFlags: u8 {
        /// A line terminator occurs in the trivia before this token.
        const NEWLINE_BEFORE = 1 << 0;
        /// Any trivia (whitespace or comment) precedes this token.
        const TRIVIA_BEFORE = 1 << 1;
        /// No trivia separates this token from the previous one.
        const ADJACENT = 1 << 2;
    }
}
