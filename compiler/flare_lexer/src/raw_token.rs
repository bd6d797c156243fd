//! Raw token definitions.
//!
//! Three logos-derived tokenizers, one per lexer mode: script code, the
//! inside of an XML tag, and XML element content. The driver in `lib.rs`
//! switches between them and converts their output to `TokenKind`.

use flare_ir::TokenKind;
use logos::{Lexer, Logos};

/// Consume up to and including `terminator`, or to the end of input.
fn bump_until<'s, T>(lex: &mut Lexer<'s, T>, terminator: &str) -> bool
where
    T: Logos<'s, Source = str>,
{
    let rest = lex.remainder();
    let len = rest
        .find(terminator)
        .map_or(rest.len(), |i| i + terminator.len());
    lex.bump(len);
    true
}

/// Script-mode token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\r\n\f\u{a0}\u{feff}]+")]
    Whitespace,

    #[regex(r"//[^\r\n]*")]
    LineComment,

    #[token("/*", |lex| bump_until(lex, "*/"))]
    BlockComment,

    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,

    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    Number,

    // Unterminated strings are still strings; the parser reports them.
    #[regex(r#""([^"\\\r\n]|\\[^\r\n])*"?"#)]
    #[regex(r#"'([^'\\\r\n]|\\[^\r\n])*'?"#)]
    String,

    #[token("as")]
    As,
    #[token("break")]
    Break,
    #[token("case")]
    Case,
    #[token("catch")]
    Catch,
    #[token("class")]
    Class,
    #[token("const")]
    Const,
    #[token("continue")]
    Continue,
    #[token("debugger")]
    Debugger,
    #[token("default")]
    Default,
    #[token("delete")]
    Delete,
    #[token("do")]
    Do,
    #[token("dynamic")]
    Dynamic,
    #[token("each")]
    Each,
    #[token("else")]
    Else,
    #[token("extends")]
    Extends,
    #[token("false")]
    False,
    #[token("final")]
    Final,
    #[token("finally")]
    Finally,
    #[token("for")]
    For,
    #[token("function")]
    Function,
    #[token("get")]
    Get,
    #[token("goto")]
    Goto,
    #[token("if")]
    If,
    #[token("implements")]
    Implements,
    #[token("import")]
    Import,
    #[token("in")]
    In,
    #[token("include")]
    Include,
    #[token("instanceof")]
    Instanceof,
    #[token("int")]
    Int,
    #[token("interface")]
    Interface,
    #[token("internal")]
    Internal,
    #[token("is")]
    Is,
    #[token("namespace")]
    Namespace,
    #[token("native")]
    Native,
    #[token("new")]
    New,
    #[token("null")]
    Null,
    #[token("override")]
    Override,
    #[token("package")]
    Package,
    #[token("private")]
    Private,
    #[token("protected")]
    Protected,
    #[token("public")]
    Public,
    #[token("return")]
    Return,
    #[token("set")]
    Set,
    #[token("static")]
    Static,
    #[token("super")]
    Super,
    #[token("switch")]
    Switch,
    #[token("this")]
    This,
    #[token("throw")]
    Throw,
    #[token("true")]
    True,
    #[token("try")]
    Try,
    #[token("typeof")]
    Typeof,
    #[token("uint")]
    Uint,
    #[token("undefined")]
    Undefined,
    #[token("use")]
    Use,
    #[token("var")]
    Var,
    #[token("void")]
    Void,
    #[token("while")]
    While,
    #[token("with")]
    With,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("..")]
    DotDot,
    #[token("...")]
    DotDotDot,
    #[token(":")]
    Colon,
    #[token("::")]
    ColonColon,
    #[token("?")]
    Question,
    #[token("??")]
    QuestionQuestion,
    #[token("@")]
    At,

    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("===")]
    EqEqEq,
    #[token("!=")]
    NotEq,
    #[token("!==")]
    NotEqEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token("<<")]
    Shl,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("**")]
    StarStar,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("**=")]
    StarStarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("<<=")]
    ShlEq,
    #[token("&=")]
    AmpEq,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,
    #[token("&&=")]
    AmpAmpEq,
    #[token("||=")]
    PipePipeEq,
    #[token("??=")]
    QuestionQuestionEq,
}

/// Token inside `<...>` of an XML tag.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum XmlTagToken {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
    #[regex(r"[a-zA-Z_:][a-zA-Z0-9_:.\-]*")]
    Name,
    #[token("=")]
    Eq,
    #[regex(r#""[^"]*"?"#)]
    #[regex(r"'[^']*'?")]
    AttrValue,
    #[token(">")]
    TagEnd,
    #[token("/>")]
    EmptyTagEnd,
    #[token("{")]
    LBrace,
}

/// Token between the tags of an XML element.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum XmlContentToken {
    #[regex(r"[^<{]+")]
    Text,
    #[token("<")]
    StartTagStart,
    #[token("</")]
    EndTagStart,
    #[token("<!--", |lex| bump_until(lex, "-->"))]
    Comment,
    #[token("<![CDATA[", |lex| bump_until(lex, "]]>"))]
    Cdata,
    #[token("<?", |lex| bump_until(lex, "?>"))]
    Pi,
    #[token("{")]
    LBrace,
}

impl RawToken {
    /// Convert to the shared token kind.
    ///
    /// Block comments starting with `/**` (but not the empty `/**/`) are
    /// doc comments.
    pub(crate) fn kind(self, slice: &str) -> TokenKind {
        match self {
            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::LineComment => TokenKind::LineComment,
            RawToken::BlockComment => {
                if slice.starts_with("/**") && slice != "/**/" {
                    TokenKind::DocComment
                } else {
                    TokenKind::BlockComment
                }
            }
            RawToken::Ident => TokenKind::Identifier,
            RawToken::Number => TokenKind::NumericLiteral,
            RawToken::String => TokenKind::StringLiteral,
            RawToken::As => TokenKind::As,
            RawToken::Break => TokenKind::Break,
            RawToken::Case => TokenKind::Case,
            RawToken::Catch => TokenKind::Catch,
            RawToken::Class => TokenKind::Class,
            RawToken::Const => TokenKind::Const,
            RawToken::Continue => TokenKind::Continue,
            RawToken::Debugger => TokenKind::Debugger,
            RawToken::Default => TokenKind::Default,
            RawToken::Delete => TokenKind::Delete,
            RawToken::Do => TokenKind::Do,
            RawToken::Dynamic => TokenKind::Dynamic,
            RawToken::Each => TokenKind::Each,
            RawToken::Else => TokenKind::Else,
            RawToken::Extends => TokenKind::Extends,
            RawToken::False => TokenKind::False,
            RawToken::Final => TokenKind::Final,
            RawToken::Finally => TokenKind::Finally,
            RawToken::For => TokenKind::For,
            RawToken::Function => TokenKind::Function,
            RawToken::Get => TokenKind::Get,
            RawToken::Goto => TokenKind::Goto,
            RawToken::If => TokenKind::If,
            RawToken::Implements => TokenKind::Implements,
            RawToken::Import => TokenKind::Import,
            RawToken::In => TokenKind::In,
            RawToken::Include => TokenKind::Include,
            RawToken::Instanceof => TokenKind::Instanceof,
            RawToken::Int => TokenKind::Int,
            RawToken::Interface => TokenKind::Interface,
            RawToken::Internal => TokenKind::Internal,
            RawToken::Is => TokenKind::Is,
            RawToken::Namespace => TokenKind::Namespace,
            RawToken::Native => TokenKind::Native,
            RawToken::New => TokenKind::New,
            RawToken::Null => TokenKind::Null,
            RawToken::Override => TokenKind::Override,
            RawToken::Package => TokenKind::Package,
            RawToken::Private => TokenKind::Private,
            RawToken::Protected => TokenKind::Protected,
            RawToken::Public => TokenKind::Public,
            RawToken::Return => TokenKind::Return,
            RawToken::Set => TokenKind::Set,
            RawToken::Static => TokenKind::Static,
            RawToken::Super => TokenKind::Super,
            RawToken::Switch => TokenKind::Switch,
            RawToken::This => TokenKind::This,
            RawToken::Throw => TokenKind::Throw,
            RawToken::True => TokenKind::True,
            RawToken::Try => TokenKind::Try,
            RawToken::Typeof => TokenKind::Typeof,
            RawToken::Uint => TokenKind::Uint,
            RawToken::Undefined => TokenKind::Undefined,
            RawToken::Use => TokenKind::Use,
            RawToken::Var => TokenKind::Var,
            RawToken::Void => TokenKind::Void,
            RawToken::While => TokenKind::While,
            RawToken::With => TokenKind::With,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Dot => TokenKind::Dot,
            RawToken::DotDot => TokenKind::DotDot,
            RawToken::DotDotDot => TokenKind::DotDotDot,
            RawToken::Colon => TokenKind::Colon,
            RawToken::ColonColon => TokenKind::ColonColon,
            RawToken::Question => TokenKind::Question,
            RawToken::QuestionQuestion => TokenKind::QuestionQuestion,
            RawToken::At => TokenKind::At,
            RawToken::Eq => TokenKind::Eq,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::EqEqEq => TokenKind::EqEqEq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::NotEqEq => TokenKind::NotEqEq,
            RawToken::Lt => TokenKind::Lt,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Shl => TokenKind::Shl,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::StarStar => TokenKind::StarStar,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Percent => TokenKind::Percent,
            RawToken::PlusPlus => TokenKind::PlusPlus,
            RawToken::MinusMinus => TokenKind::MinusMinus,
            RawToken::Amp => TokenKind::Amp,
            RawToken::Pipe => TokenKind::Pipe,
            RawToken::Caret => TokenKind::Caret,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Tilde => TokenKind::Tilde,
            RawToken::AmpAmp => TokenKind::AmpAmp,
            RawToken::PipePipe => TokenKind::PipePipe,
            RawToken::PlusEq => TokenKind::PlusEq,
            RawToken::MinusEq => TokenKind::MinusEq,
            RawToken::StarEq => TokenKind::StarEq,
            RawToken::StarStarEq => TokenKind::StarStarEq,
            RawToken::SlashEq => TokenKind::SlashEq,
            RawToken::PercentEq => TokenKind::PercentEq,
            RawToken::ShlEq => TokenKind::ShlEq,
            RawToken::AmpEq => TokenKind::AmpEq,
            RawToken::PipeEq => TokenKind::PipeEq,
            RawToken::CaretEq => TokenKind::CaretEq,
            RawToken::AmpAmpEq => TokenKind::AmpAmpEq,
            RawToken::PipePipeEq => TokenKind::PipePipeEq,
            RawToken::QuestionQuestionEq => TokenKind::QuestionQuestionEq,
        }
    }
}

impl XmlTagToken {
    pub(crate) fn kind(self) -> TokenKind {
        match self {
            XmlTagToken::Whitespace => TokenKind::Whitespace,
            XmlTagToken::Name => TokenKind::XmlName,
            XmlTagToken::Eq => TokenKind::XmlEq,
            XmlTagToken::AttrValue => TokenKind::XmlAttrValue,
            XmlTagToken::TagEnd => TokenKind::XmlTagEnd,
            XmlTagToken::EmptyTagEnd => TokenKind::XmlEmptyTagEnd,
            XmlTagToken::LBrace => TokenKind::XmlLBrace,
        }
    }
}

impl XmlContentToken {
    pub(crate) fn kind(self) -> TokenKind {
        match self {
            XmlContentToken::Text => TokenKind::XmlText,
            XmlContentToken::StartTagStart => TokenKind::XmlStartTagStart,
            XmlContentToken::EndTagStart => TokenKind::XmlEndTagStart,
            XmlContentToken::Comment => TokenKind::XmlComment,
            XmlContentToken::Cdata => TokenKind::XmlCdata,
            XmlContentToken::Pi => TokenKind::XmlPi,
            XmlContentToken::LBrace => TokenKind::XmlLBrace,
        }
    }
}
