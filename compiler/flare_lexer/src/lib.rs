//! Lexer for ActionScript with E4X literals.
//!
//! Produces a lossless `TokenList`: whitespace and comments are kept as
//! trivia tokens, and the list always ends with `Eof`. Lexing never fails;
//! characters that start no token become `Error` tokens.
//!
//! # Modes
//!
//! Script code, XML tags and XML element content have different token
//! sets, so the lexer keeps a stack of modes:
//!
//! - `Script`: ordinary code, the bottom of the stack
//! - `Xml`: inside an XML literal, either within a tag or between tags
//! - `Splice`: a `{...}` expression embedded in XML, lexed as script code
//!   until its matching `}`
//!
//! A closing tag that names an open ancestor closes every element above
//! it, as the parser does, so code after a mismatched literal is lexed as
//! script again.
//!
//! Two constructs depend on the previous significant token: a `/` starts a
//! regular expression and a `<` starts an XML literal only where an
//! expression may begin.

mod raw_token;

use flare_ir::{Span, Token, TokenKind, TokenList};
use logos::Logos;
use smallvec::SmallVec;
use tracing::{debug, trace};

use raw_token::{RawToken, XmlContentToken, XmlTagToken};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum XmlState {
    Tag { closing: bool },
    Content,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mode {
    Script,
    /// Embedded expression; `braces` counts unclosed `{` inside it.
    Splice { braces: u32 },
    /// XML literal; `depth` counts the entries it owns on top of the
    /// lexer's open element names.
    Xml { depth: u32, state: XmlState },
}

/// Lex source code into a `TokenList`.
pub fn lex(source: &str) -> TokenList {
    let mut lexer = Lexer::new(source);
    lexer.run();
    debug!(
        tokens = lexer.tokens.len(),
        significant = lexer.tokens.significant_len(),
        "lexed source"
    );
    lexer.tokens
}

struct Lexer<'s> {
    source: &'s str,
    pos: usize,
    modes: SmallVec<[Mode; 8]>,
    tokens: TokenList,
    /// Last significant token kind, `None` at the start of input.
    prev: Option<TokenKind>,
    /// Names of open XML elements, innermost last. `None` is a computed
    /// name, which matches any closing tag.
    open_names: SmallVec<[Option<&'s str>; 8]>,
    /// Name of the tag being lexed; `""` for `<>` and `</>`.
    tag_name: Option<&'s str>,
    /// No token other than whitespace has been lexed in the current tag.
    tag_fresh: bool,
    /// Tag state saved while lexing a splice, restored at its `}`.
    saved_tags: SmallVec<[(Option<&'s str>, bool); 4]>,
}

impl<'s> Lexer<'s> {
    fn new(source: &'s str) -> Self {
        let mut modes = SmallVec::new();
        modes.push(Mode::Script);
        Lexer {
            source,
            pos: 0,
            modes,
            tokens: TokenList::with_capacity(source.len() / 4 + 1),
            prev: None,
            open_names: SmallVec::new(),
            tag_name: Some(""),
            tag_fresh: true,
            saved_tags: SmallVec::new(),
        }
    }

    fn run(&mut self) {
        let source = self.source;
        while self.pos < source.len() {
            let rest = &source[self.pos..];
            let (kind, len) = match self.mode() {
                Mode::Script | Mode::Splice { .. } => self.lex_script(rest),
                Mode::Xml {
                    state: XmlState::Tag { .. },
                    ..
                } => self.lex_tag(rest),
                Mode::Xml {
                    state: XmlState::Content,
                    ..
                } => self.lex_content(rest),
            };
            self.emit(kind, len.max(1));
        }
        let eof = to_offset(self.source.len());
        self.tokens
            .push(Token::new(TokenKind::Eof, Span::point(eof)), self.source);
    }

    fn mode(&self) -> Mode {
        self.modes.last().copied().unwrap_or(Mode::Script)
    }

    fn set_mode(&mut self, mode: Mode) {
        if let Some(top) = self.modes.last_mut() {
            *top = mode;
        }
    }

    fn push_mode(&mut self, mode: Mode) {
        trace!(?mode, pos = self.pos, "push lexer mode");
        self.modes.push(mode);
    }

    fn pop_mode(&mut self) {
        if self.modes.len() > 1 {
            let mode = self.modes.pop();
            trace!(?mode, pos = self.pos, "pop lexer mode");
        }
    }

    fn enter_splice(&mut self) {
        self.saved_tags.push((self.tag_name, self.tag_fresh));
        self.push_mode(Mode::Splice { braces: 0 });
    }

    fn leave_splice(&mut self) {
        self.pop_mode();
        if let Some((name, fresh)) = self.saved_tags.pop() {
            self.tag_name = name;
            self.tag_fresh = fresh;
        }
    }

    fn begin_tag(&mut self) {
        self.tag_name = Some("");
        self.tag_fresh = true;
    }

    /// Close elements for the tag just lexed and return the new depth.
    ///
    /// A closing tag naming an open ancestor closes everything above it;
    /// any other name closes the innermost element.
    fn close_elements(&mut self, depth: u32) -> u32 {
        let len = self.open_names.len();
        let own = len.saturating_sub(depth as usize);
        if len == own {
            return 0;
        }
        let innermost = len - 1;
        let target = match self.tag_name {
            Some(name) => self.open_names[own..]
                .iter()
                .rposition(|&open| open == Some(name))
                .map_or(innermost, |i| own + i),
            None => innermost,
        };
        self.open_names.truncate(target);
        trace!(closed = len - target, pos = self.pos, "close xml elements");
        depth.saturating_sub(to_offset(len - target))
    }

    fn emit(&mut self, kind: TokenKind, len: usize) {
        let mut end = (self.pos + len).min(self.source.len());
        while !self.source.is_char_boundary(end) {
            end += 1;
        }
        let span = Span::new(to_offset(self.pos), to_offset(end));
        self.tokens.push(Token::new(kind, span), self.source);
        if !kind.is_trivia() {
            self.prev = Some(kind);
        }
        self.pos = end;
    }

    /// Whether an expression may start at the current position.
    fn expression_allowed(&self) -> bool {
        let Some(prev) = self.prev else {
            return true;
        };
        !matches!(
            prev,
            TokenKind::Identifier
                | TokenKind::NumericLiteral
                | TokenKind::StringLiteral
                | TokenKind::RegexpLiteral
                | TokenKind::RParen
                | TokenKind::RBracket
                | TokenKind::This
                | TokenKind::Super
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
                | TokenKind::Undefined
                | TokenKind::PlusPlus
                | TokenKind::MinusMinus
                | TokenKind::XmlTagEnd
                | TokenKind::XmlEmptyTagEnd
                | TokenKind::Get
                | TokenKind::Set
                | TokenKind::Each
                | TokenKind::Namespace
                | TokenKind::Include
                | TokenKind::Goto
                | TokenKind::Dynamic
                | TokenKind::Final
                | TokenKind::Native
                | TokenKind::Override
                | TokenKind::Static
                | TokenKind::Int
                | TokenKind::Uint
        )
    }

    /// Whether a `<` here may open an XML literal. After `.` and `new` it
    /// opens a generic signature instead (`Vector.<int>`, `new <int>[]`).
    fn xml_allowed(&self) -> bool {
        self.expression_allowed()
            && !matches!(self.prev, Some(TokenKind::Dot | TokenKind::New))
    }

    fn lex_script(&mut self, rest: &str) -> (TokenKind, usize) {
        let mut logos = RawToken::lexer(rest);
        let Some(result) = logos.next() else {
            return (TokenKind::Error, 1);
        };
        let len = logos.span().end;
        let Ok(raw) = result else {
            return (TokenKind::Error, len);
        };

        match raw {
            RawToken::Slash | RawToken::SlashEq if self.expression_allowed() => {
                (TokenKind::RegexpLiteral, regexp_len(rest))
            }
            RawToken::Lt if self.xml_allowed() && starts_xml(&rest[1..]) => {
                self.begin_tag();
                self.push_mode(Mode::Xml {
                    depth: 0,
                    state: XmlState::Tag { closing: false },
                });
                (TokenKind::XmlStartTagStart, 1)
            }
            RawToken::LBrace => {
                if let Mode::Splice { braces } = self.mode() {
                    self.set_mode(Mode::Splice { braces: braces + 1 });
                }
                (TokenKind::LBrace, len)
            }
            RawToken::RBrace => match self.mode() {
                Mode::Splice { braces: 0 } => {
                    self.leave_splice();
                    (TokenKind::XmlRBrace, len)
                }
                Mode::Splice { braces } => {
                    self.set_mode(Mode::Splice { braces: braces - 1 });
                    (TokenKind::RBrace, len)
                }
                _ => (TokenKind::RBrace, len),
            },
            _ => (raw.kind(logos.slice()), len),
        }
    }

    fn lex_tag(&mut self, rest: &'s str) -> (TokenKind, usize) {
        let Mode::Xml {
            depth,
            state: XmlState::Tag { closing },
        } = self.mode()
        else {
            return (TokenKind::Error, 1);
        };
        let mut logos = XmlTagToken::lexer(rest);
        let Some(result) = logos.next() else {
            return (TokenKind::Error, 1);
        };
        let len = logos.span().end;
        let Ok(raw) = result else {
            return (TokenKind::Error, len);
        };

        if self.tag_fresh {
            match raw {
                XmlTagToken::Name => self.tag_name = Some(logos.slice()),
                XmlTagToken::LBrace => self.tag_name = None,
                _ => {}
            }
            self.tag_fresh = raw == XmlTagToken::Whitespace;
        }

        match raw {
            XmlTagToken::TagEnd if closing => {
                let depth = self.close_elements(depth);
                if depth == 0 {
                    self.pop_mode();
                } else {
                    self.set_mode(Mode::Xml {
                        depth,
                        state: XmlState::Content,
                    });
                }
            }
            XmlTagToken::TagEnd => {
                self.open_names.push(self.tag_name);
                self.set_mode(Mode::Xml {
                    depth: depth + 1,
                    state: XmlState::Content,
                });
            }
            XmlTagToken::EmptyTagEnd => {
                if depth == 0 {
                    self.pop_mode();
                } else {
                    self.set_mode(Mode::Xml {
                        depth,
                        state: XmlState::Content,
                    });
                }
            }
            XmlTagToken::LBrace => self.enter_splice(),
            XmlTagToken::Whitespace
            | XmlTagToken::Name
            | XmlTagToken::Eq
            | XmlTagToken::AttrValue => {}
        }
        (raw.kind(), len)
    }

    fn lex_content(&mut self, rest: &str) -> (TokenKind, usize) {
        let Mode::Xml { depth, .. } = self.mode() else {
            return (TokenKind::Error, 1);
        };
        let mut logos = XmlContentToken::lexer(rest);
        let Some(result) = logos.next() else {
            return (TokenKind::Error, 1);
        };
        let len = logos.span().end;
        let Ok(raw) = result else {
            return (TokenKind::Error, len);
        };

        match raw {
            XmlContentToken::StartTagStart => {
                self.begin_tag();
                self.set_mode(Mode::Xml {
                    depth,
                    state: XmlState::Tag { closing: false },
                });
            }
            XmlContentToken::EndTagStart => {
                self.begin_tag();
                self.set_mode(Mode::Xml {
                    depth,
                    state: XmlState::Tag { closing: true },
                });
            }
            XmlContentToken::LBrace => self.enter_splice(),
            XmlContentToken::Text
            | XmlContentToken::Comment
            | XmlContentToken::Cdata
            | XmlContentToken::Pi => {}
        }
        (raw.kind(), len)
    }
}

/// Whether the text after a `<` looks like the start of an XML tag.
fn starts_xml(after_lt: &str) -> bool {
    after_lt
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '_' | ':' | '{' | '>'))
}

/// Length of a regular expression literal starting at `/`, flags included.
///
/// A literal that reaches a line break or the end of input without its
/// closing `/` ends there.
fn regexp_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 1;
    let mut in_class = false;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' | b'\r' => return i,
            b'\\' => {
                if matches!(bytes.get(i + 1), Some(b'\n' | b'\r') | None) {
                    return i + 1;
                }
                i += 2;
                continue;
            }
            b'[' => in_class = true,
            b']' => in_class = false,
            b'/' if !in_class => {
                i += 1;
                while bytes
                    .get(i)
                    .is_some_and(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'$'))
                {
                    i += 1;
                }
                return i;
            }
            _ => {}
        }
        i += 1;
    }
    bytes.len()
}

fn to_offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
