//! Token kinds.

use std::fmt;

/// Token kinds for ActionScript with E4X.
///
/// Fieldless so that it is one byte, `Copy`, and usable as a bit index in
/// recovery sets. Token text is always read back from the source via the
/// token's span.
///
/// The lexer never produces compound `>` operators (`>>`, `>>>`, `>=`, `>>=`,
/// `>>>=`); the parser recognises them from adjacent tokens so that nested
/// generic signatures close correctly.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // Trivia
    Whitespace,
    LineComment,
    BlockComment,
    DocComment,

    // Names and literals
    Identifier,
    NumericLiteral,
    StringLiteral,
    RegexpLiteral,

    // Keywords
    As,
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Dynamic,
    Each,
    Else,
    Extends,
    False,
    Final,
    Finally,
    For,
    Function,
    Get,
    Goto,
    If,
    Implements,
    Import,
    In,
    Include,
    Instanceof,
    Int,
    Interface,
    Internal,
    Is,
    Namespace,
    Native,
    New,
    Null,
    Override,
    Package,
    Private,
    Protected,
    Public,
    Return,
    Set,
    Static,
    Super,
    Switch,
    This,
    Throw,
    True,
    Try,
    Typeof,
    Uint,
    Undefined,
    Use,
    Var,
    Void,
    While,
    With,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Dot,
    DotDot,
    DotDotDot,
    Colon,
    ColonColon,
    Question,
    QuestionQuestion,
    At,

    // Operators
    Eq,
    EqEq,
    EqEqEq,
    NotEq,
    NotEqEq,
    Lt,
    LtEq,
    Gt,
    Shl,
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    Percent,
    PlusPlus,
    MinusMinus,
    Amp,
    Pipe,
    Caret,
    Bang,
    Tilde,
    AmpAmp,
    PipePipe,
    PlusEq,
    MinusEq,
    StarEq,
    StarStarEq,
    SlashEq,
    PercentEq,
    ShlEq,
    AmpEq,
    PipeEq,
    CaretEq,
    AmpAmpEq,
    PipePipeEq,
    QuestionQuestionEq,

    // E4X
    XmlStartTagStart,
    XmlEndTagStart,
    XmlName,
    XmlEq,
    XmlAttrValue,
    XmlTagEnd,
    XmlEmptyTagEnd,
    XmlText,
    XmlLBrace,
    XmlRBrace,
    XmlComment,
    XmlCdata,
    XmlPi,

    // Special
    Error,
    Eof,
}

impl TokenKind {
    /// Number of token kinds; every discriminant is below this.
    pub const COUNT: usize = TokenKind::Eof as usize + 1;

    /// Discriminant as a dense index (for bitsets and tables).
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Whitespace and comments: kept in the tree, skipped by the parser.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::LineComment
                | TokenKind::BlockComment
                | TokenKind::DocComment
        )
    }

    /// Tokens that only exist inside an XML literal.
    #[inline]
    pub const fn is_xml(self) -> bool {
        (self as u8) >= (TokenKind::XmlStartTagStart as u8)
            && (self as u8) <= (TokenKind::XmlPi as u8)
    }

    /// Reserved and contextual keywords.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        (self as u8) >= (TokenKind::As as u8) && (self as u8) <= (TokenKind::With as u8)
    }

    /// Human-readable name used in diagnostics and tree dumps.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::LineComment | TokenKind::BlockComment => "comment",
            TokenKind::DocComment => "doc comment",
            TokenKind::Identifier => "identifier",
            TokenKind::NumericLiteral => "number",
            TokenKind::StringLiteral => "string literal",
            TokenKind::RegexpLiteral => "regular expression",
            TokenKind::As => "as",
            TokenKind::Break => "break",
            TokenKind::Case => "case",
            TokenKind::Catch => "catch",
            TokenKind::Class => "class",
            TokenKind::Const => "const",
            TokenKind::Continue => "continue",
            TokenKind::Debugger => "debugger",
            TokenKind::Default => "default",
            TokenKind::Delete => "delete",
            TokenKind::Do => "do",
            TokenKind::Dynamic => "dynamic",
            TokenKind::Each => "each",
            TokenKind::Else => "else",
            TokenKind::Extends => "extends",
            TokenKind::False => "false",
            TokenKind::Final => "final",
            TokenKind::Finally => "finally",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::Get => "get",
            TokenKind::Goto => "goto",
            TokenKind::If => "if",
            TokenKind::Implements => "implements",
            TokenKind::Import => "import",
            TokenKind::In => "in",
            TokenKind::Include => "include",
            TokenKind::Instanceof => "instanceof",
            TokenKind::Int => "int",
            TokenKind::Interface => "interface",
            TokenKind::Internal => "internal",
            TokenKind::Is => "is",
            TokenKind::Namespace => "namespace",
            TokenKind::Native => "native",
            TokenKind::New => "new",
            TokenKind::Null => "null",
            TokenKind::Override => "override",
            TokenKind::Package => "package",
            TokenKind::Private => "private",
            TokenKind::Protected => "protected",
            TokenKind::Public => "public",
            TokenKind::Return => "return",
            TokenKind::Set => "set",
            TokenKind::Static => "static",
            TokenKind::Super => "super",
            TokenKind::Switch => "switch",
            TokenKind::This => "this",
            TokenKind::Throw => "throw",
            TokenKind::True => "true",
            TokenKind::Try => "try",
            TokenKind::Typeof => "typeof",
            TokenKind::Uint => "uint",
            TokenKind::Undefined => "undefined",
            TokenKind::Use => "use",
            TokenKind::Var => "var",
            TokenKind::Void => "void",
            TokenKind::While => "while",
            TokenKind::With => "with",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace | TokenKind::XmlLBrace => "{",
            TokenKind::RBrace | TokenKind::XmlRBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::DotDotDot => "...",
            TokenKind::Colon => ":",
            TokenKind::ColonColon => "::",
            TokenKind::Question => "?",
            TokenKind::QuestionQuestion => "??",
            TokenKind::At => "@",
            TokenKind::Eq | TokenKind::XmlEq => "=",
            TokenKind::EqEq => "==",
            TokenKind::EqEqEq => "===",
            TokenKind::NotEq => "!=",
            TokenKind::NotEqEq => "!==",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt | TokenKind::XmlTagEnd => ">",
            TokenKind::Shl => "<<",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::StarStar => "**",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::Amp => "&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Bang => "!",
            TokenKind::Tilde => "~",
            TokenKind::AmpAmp => "&&",
            TokenKind::PipePipe => "||",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::StarEq => "*=",
            TokenKind::StarStarEq => "**=",
            TokenKind::SlashEq => "/=",
            TokenKind::PercentEq => "%=",
            TokenKind::ShlEq => "<<=",
            TokenKind::AmpEq => "&=",
            TokenKind::PipeEq => "|=",
            TokenKind::CaretEq => "^=",
            TokenKind::AmpAmpEq => "&&=",
            TokenKind::PipePipeEq => "||=",
            TokenKind::QuestionQuestionEq => "??=",
            TokenKind::XmlStartTagStart => "<",
            TokenKind::XmlEndTagStart => "</",
            TokenKind::XmlName => "XML name",
            TokenKind::XmlAttrValue => "XML attribute value",
            TokenKind::XmlEmptyTagEnd => "/>",
            TokenKind::XmlText => "XML text",
            TokenKind::XmlComment => "XML comment",
            TokenKind::XmlCdata => "CDATA section",
            TokenKind::XmlPi => "processing instruction",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
