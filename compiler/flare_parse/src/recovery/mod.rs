//! Token sets used for lookahead decisions and error recovery.
//!
//! Uses bitset-based O(1) membership testing. `TokenKind` has more than
//! 128 variants, so the set is two `u128` words.

use flare_ir::TokenKind;

const _: () = assert!(
    TokenKind::COUNT <= 256,
    "TokenSet uses two u128 words; all discriminant indices must be < 256"
);

/// A set of token kinds using bitset representation for O(1) membership testing.
///
/// # Example
/// ```ignore
/// const BLOCK_END: TokenSet = TokenSet::new()
///     .with(TokenKind::RBrace)
///     .with(TokenKind::Eof);
///
/// if BLOCK_END.contains(TokenKind::RBrace) {
///     // O(1) lookup
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet([u128; 2]);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self([0, 0])
    }

    /// Create a token set containing a single token kind.
    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        Self::new().with(kind)
    }

    /// Build a set from a list of kinds.
    pub const fn of(kinds: &[TokenKind]) -> Self {
        let mut set = Self::new();
        let mut i = 0;
        while i < kinds.len() {
            set = set.with(kinds[i]);
            i += 1;
        }
        set
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        let (word, bit) = Self::slot(kind);
        let [lo, hi] = self.0;
        if word == 0 {
            Self([lo | bit, hi])
        } else {
            Self([lo, hi | bit])
        }
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self([self.0[0] | other.0[0], self.0[1] | other.0[1]])
    }

    /// Check if this set contains a token kind.
    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        let (word, bit) = Self::slot(kind);
        self.0[word] & bit != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0[0] == 0 && self.0[1] == 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0[0].count_ones() + self.0[1].count_ones()
    }

    #[inline]
    const fn slot(kind: TokenKind) -> (usize, u128) {
        let index = kind.discriminant_index() as usize;
        (index / 128, 1u128 << (index % 128))
    }
}

/// Tokens that may be used where an identifier is expected.
///
/// Contextual keywords are ordinary names outside the few positions where
/// they carry meaning.
pub const IDENTIFIER_TOKENS: TokenSet = TokenSet::of(&[
    TokenKind::Identifier,
    TokenKind::Get,
    TokenKind::Set,
    TokenKind::Each,
    TokenKind::Namespace,
    TokenKind::Include,
    TokenKind::Goto,
    TokenKind::Dynamic,
    TokenKind::Final,
    TokenKind::Native,
    TokenKind::Override,
    TokenKind::Static,
]);

/// Every keyword, usable as a member or property name after `.`.
const KEYWORDS: TokenSet = TokenSet::of(&[
    TokenKind::As,
    TokenKind::Break,
    TokenKind::Case,
    TokenKind::Catch,
    TokenKind::Class,
    TokenKind::Const,
    TokenKind::Continue,
    TokenKind::Debugger,
    TokenKind::Default,
    TokenKind::Delete,
    TokenKind::Do,
    TokenKind::Else,
    TokenKind::Extends,
    TokenKind::False,
    TokenKind::Finally,
    TokenKind::For,
    TokenKind::Function,
    TokenKind::If,
    TokenKind::Implements,
    TokenKind::Import,
    TokenKind::In,
    TokenKind::Instanceof,
    TokenKind::Int,
    TokenKind::Interface,
    TokenKind::Internal,
    TokenKind::Is,
    TokenKind::New,
    TokenKind::Null,
    TokenKind::Package,
    TokenKind::Private,
    TokenKind::Protected,
    TokenKind::Public,
    TokenKind::Return,
    TokenKind::Super,
    TokenKind::Switch,
    TokenKind::This,
    TokenKind::Throw,
    TokenKind::True,
    TokenKind::Try,
    TokenKind::Typeof,
    TokenKind::Uint,
    TokenKind::Undefined,
    TokenKind::Use,
    TokenKind::Var,
    TokenKind::Void,
    TokenKind::While,
    TokenKind::With,
]);

/// Identifiers plus every keyword.
pub const IDENTIFIER_NAMES: TokenSet = IDENTIFIER_TOKENS.union(KEYWORDS);

/// Anything that can name an object-literal property.
pub const PROPERTY_NAMES: TokenSet = IDENTIFIER_NAMES
    .with(TokenKind::StringLiteral)
    .with(TokenKind::NumericLiteral);

pub const ACCESS_MODIFIERS: TokenSet = TokenSet::of(&[
    TokenKind::Public,
    TokenKind::Private,
    TokenKind::Protected,
    TokenKind::Internal,
]);

/// Declaration modifiers accepted in an attribute list.
pub const MODIFIERS: TokenSet = ACCESS_MODIFIERS.union(TokenSet::of(&[
    TokenKind::Static,
    TokenKind::Dynamic,
    TokenKind::Final,
    TokenKind::Native,
    TokenKind::Override,
]));

/// Keywords that start a variable statement.
pub const VAR_MODIFIERS: TokenSet = TokenSet::of(&[TokenKind::Var, TokenKind::Const]);

/// Type keywords that are not ordinary identifiers.
pub const PRIMITIVE_TYPES: TokenSet =
    TokenSet::of(&[TokenKind::Int, TokenKind::Uint, TokenKind::Void]);

/// Assignment operators made of a single token.
///
/// The composed `>>=`, `>>>=` and `>=`-like forms are recognised from
/// adjacent `>` tokens by the cursor.
pub const ASSIGNMENT_OPERATORS: TokenSet = TokenSet::of(&[
    TokenKind::Eq,
    TokenKind::PlusEq,
    TokenKind::MinusEq,
    TokenKind::StarEq,
    TokenKind::StarStarEq,
    TokenKind::SlashEq,
    TokenKind::PercentEq,
    TokenKind::ShlEq,
    TokenKind::AmpEq,
    TokenKind::PipeEq,
    TokenKind::CaretEq,
    TokenKind::AmpAmpEq,
    TokenKind::PipePipeEq,
    TokenKind::QuestionQuestionEq,
]);

pub const UNARY_OPERATORS: TokenSet = TokenSet::of(&[
    TokenKind::Delete,
    TokenKind::Void,
    TokenKind::Typeof,
    TokenKind::PlusPlus,
    TokenKind::MinusMinus,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Tilde,
    TokenKind::Bang,
]);

pub const LITERALS: TokenSet = TokenSet::of(&[
    TokenKind::NumericLiteral,
    TokenKind::StringLiteral,
    TokenKind::RegexpLiteral,
    TokenKind::Null,
    TokenKind::Undefined,
    TokenKind::True,
    TokenKind::False,
]);

/// Tokens that begin a new statement; used to stop skipping after errors.
pub const STATEMENT_RECOVERY: TokenSet = TokenSet::of(&[
    TokenKind::Semicolon,
    TokenKind::RBrace,
    TokenKind::Var,
    TokenKind::Const,
    TokenKind::Function,
    TokenKind::Class,
    TokenKind::Interface,
    TokenKind::If,
    TokenKind::For,
    TokenKind::While,
    TokenKind::Do,
    TokenKind::Return,
    TokenKind::Switch,
    TokenKind::Try,
    TokenKind::Throw,
    TokenKind::Import,
    TokenKind::Package,
    TokenKind::Eof,
]);
