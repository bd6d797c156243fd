//! E4X literal parsing.
//!
//! The lexer has already split the literal into tag and content tokens, so
//! this module only matches tags. Open tag names are kept on a stack: a
//! closing tag naming an ancestor closes every tag above it, each with an
//! "is not closed" error.
//!
//! Computed names (`<{tag}>`) are compared by their source text.

use flare_ir::{NodeKind, TokenKind};
use smallvec::SmallVec;
use tracing::trace;

use crate::builder::{LeftBinder, RightBinder};
use crate::error::ParseErrorKind;
use crate::Parser;

type OpenTags<'a> = SmallVec<[&'a str; 8]>;

impl<'a> Parser<'a> {
    /// Parse an XML literal starting at `<`.
    pub(crate) fn parse_xml_literal(&mut self) {
        let mut open = OpenTags::new();
        self.parse_xml_tag(&mut open, NodeKind::XmlLiteralExpression);
    }

    fn parse_xml_tag(&mut self, open: &mut OpenTags<'a>, kind: NodeKind) {
        let tag = self.start();
        self.bump();

        let name = if self.at(TokenKind::XmlTagEnd) {
            // `<>..</>` list
            ""
        } else {
            self.parse_xml_tag_name().unwrap_or("")
        };
        trace!(name, depth = open.len(), "xml tag");
        self.parse_xml_attributes();

        if self.eat(TokenKind::XmlEmptyTagEnd) {
            tag.done(self, kind);
            return;
        }
        if !self.eat(TokenKind::XmlTagEnd) {
            self.error(ParseErrorKind::Expected(TokenKind::XmlTagEnd));
            tag.done(self, kind)
                .bind_edges(self, LeftBinder::Default, RightBinder::XmlIncompleteTag);
            return;
        }

        open.push(name);
        self.parse_xml_content(open);
        open.pop();
        tag.done(self, kind);
    }

    /// A plain or computed tag name. Returns the name used for matching,
    /// `None` if there is none.
    fn parse_xml_tag_name(&mut self) -> Option<&'a str> {
        match self.current_kind() {
            TokenKind::XmlName => {
                let name = self.current_text();
                self.bump();
                Some(name)
            }
            TokenKind::XmlLBrace => {
                let start = self.cursor.position();
                self.parse_xml_splice();
                Some(self.cursor.text_since(start))
            }
            _ => {
                self.error(ParseErrorKind::ExpectedTagName);
                None
            }
        }
    }

    fn parse_xml_attributes(&mut self) {
        loop {
            match self.current_kind() {
                TokenKind::XmlTagEnd | TokenKind::XmlEmptyTagEnd | TokenKind::Eof => return,
                TokenKind::XmlName => self.parse_xml_attribute(),
                TokenKind::XmlLBrace => self.parse_xml_splice(),
                _ => self.error_bump(ParseErrorKind::UnexpectedInTag),
            }
        }
    }

    /// `name="value"` or `name={expr}`.
    fn parse_xml_attribute(&mut self) {
        let attribute = self.start();
        self.bump();
        if self.expect(TokenKind::XmlEq) {
            match self.current_kind() {
                TokenKind::XmlAttrValue => {
                    self.token_node(NodeKind::XmlAttributeValue);
                }
                TokenKind::XmlLBrace => self.parse_xml_splice(),
                _ => self.error(ParseErrorKind::ExpectedValue),
            }
        }
        attribute.done(self, NodeKind::XmlAttribute);
    }

    /// Children of the innermost open tag, up to and including its
    /// closing tag.
    fn parse_xml_content(&mut self, open: &mut OpenTags<'a>) {
        loop {
            match self.current_kind() {
                TokenKind::XmlText => {
                    self.token_node(NodeKind::XmlText);
                }
                TokenKind::XmlComment | TokenKind::XmlCdata | TokenKind::XmlPi => self.bump(),
                TokenKind::XmlLBrace => self.parse_xml_splice(),
                TokenKind::XmlStartTagStart => {
                    self.with_depth((), |p| p.parse_xml_tag(open, NodeKind::XmlTag));
                }
                TokenKind::XmlEndTagStart => {
                    self.parse_xml_closing_tag(open);
                    return;
                }
                TokenKind::Eof => {
                    let name = open.last().copied().unwrap_or_default();
                    self.error(ParseErrorKind::UnclosedElement(name.to_owned()));
                    return;
                }
                _ => self.error_bump(ParseErrorKind::UnexpectedInTag),
            }
        }
    }

    /// `</name>`, ending the innermost open tag.
    ///
    /// A name that belongs to an ancestor is left for that ancestor to
    /// consume; one that matches no open tag is reported and then treated
    /// as if it closed the innermost tag.
    fn parse_xml_closing_tag(&mut self, open: &OpenTags<'a>) {
        let current = open.last().copied().unwrap_or_default();
        let closing = self.start();
        self.bump();

        let name = if self.at(TokenKind::XmlTagEnd) {
            Some("")
        } else {
            self.parse_xml_tag_name()
        };

        match name {
            Some(name) if name != current => {
                let ancestors = &open[..open.len().saturating_sub(1)];
                if ancestors.contains(&name) {
                    closing.rollback_to(self);
                    self.error(ParseErrorKind::UnclosedElement(current.to_owned()));
                    return;
                }
                closing.abandon(self);
                self.error(ParseErrorKind::UnmatchedClosingTag);
            }
            _ => closing.abandon(self),
        }
        self.expect(TokenKind::XmlTagEnd);
    }

    /// `{ expr }` inside a tag or between tags.
    fn parse_xml_splice(&mut self) {
        let splice = self.start();
        self.bump();
        self.parse_expression();
        if !self.eat(TokenKind::XmlRBrace) {
            self.error(ParseErrorKind::Expected(TokenKind::XmlRBrace));
            while !self.at_end() {
                let closes = self.at(TokenKind::XmlRBrace);
                self.bump();
                if closes {
                    break;
                }
            }
        }
        splice.done(self, NodeKind::EmbeddedExpression);
    }
}

#[cfg(test)]
mod tests;
