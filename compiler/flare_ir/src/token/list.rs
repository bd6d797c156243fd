//! Token list with parallel trivia flags.

use std::fmt;

use super::{Token, TokenFlags, TokenKind};

/// All tokens of a source file, trivia included, ending with `Eof`.
///
/// Keeps a parallel array of [`TokenFlags`], one per token, describing the
/// trivia in front of it. Flags of trivia tokens themselves are empty.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
    /// `flags[i]` describes the trivia before `tokens[i]`.
    flags: Vec<TokenFlags>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList {
            tokens: Vec::new(),
            flags: Vec::new(),
        }
    }

    /// Create a new token list with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
            flags: Vec::with_capacity(capacity),
        }
    }

    /// Build a list from bare tokens, deriving flags from the trivia between them.
    pub fn from_tokens(tokens: Vec<Token>, source: &str) -> Self {
        let mut list = TokenList::with_capacity(tokens.len());
        for token in tokens {
            list.push(token, source);
        }
        list
    }

    /// Push a token, computing its flags from the preceding trivia run.
    ///
    /// `source` must be the text the spans point into.
    pub fn push(&mut self, token: Token, source: &str) {
        let flags = if token.kind.is_trivia() {
            TokenFlags::empty()
        } else {
            self.trivia_flags(source)
        };
        self.tokens.push(token);
        self.flags.push(flags);
    }

    fn trivia_flags(&self, source: &str) -> TokenFlags {
        let mut flags = TokenFlags::empty();
        let mut saw_trivia = false;
        for token in self.tokens.iter().rev() {
            if !token.kind.is_trivia() {
                break;
            }
            saw_trivia = true;
            let text = token.text(source);
            if token.kind == TokenKind::LineComment || text.contains(['\n', '\r']) {
                flags |= TokenFlags::NEWLINE_BEFORE;
            }
        }
        if saw_trivia {
            flags |= TokenFlags::TRIVIA_BEFORE;
        } else {
            flags |= TokenFlags::ADJACENT;
        }
        flags
    }

    /// Get the number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get a token by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Kind of the token at `index`, `Eof` when out of range.
    #[inline]
    pub fn kind(&self, index: usize) -> TokenKind {
        self.tokens.get(index).map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Flags of the token at `index`, empty when out of range.
    #[inline]
    pub fn flags(&self, index: usize) -> TokenFlags {
        self.flags.get(index).copied().unwrap_or_default()
    }

    /// Iterate over tokens.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Get tokens as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens that are neither trivia nor `Eof`.
    pub fn significant_len(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| !t.kind.is_trivia() && t.kind != TokenKind::Eof)
            .count()
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}
