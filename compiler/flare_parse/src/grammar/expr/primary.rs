//! Primary expression parsing.
//!
//! Literals, `this`/`super`, name references (optionally namespace
//! qualified), parenthesized expressions, array/object/function/XML
//! literals, and `@` attribute references.

use flare_ir::{NodeKind, TokenKind};
use tracing::trace;

use crate::builder::{CompletedMarker, Marker};
use crate::context::ParseContext;
use crate::error::ParseErrorKind;
use crate::recovery::{ACCESS_MODIFIERS, IDENTIFIER_TOKENS, LITERALS};
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn parse_primary_expression(&mut self) -> bool {
        let kind = self.current_kind();
        trace!(kind = %kind, "primary");
        match kind {
            TokenKind::At => {
                self.parse_attribute_reference();
                true
            }
            TokenKind::This => {
                self.token_node(NodeKind::ThisExpression);
                true
            }
            TokenKind::Super => {
                self.token_node(NodeKind::SuperExpression);
                true
            }
            TokenKind::Star => {
                self.parse_name_reference();
                true
            }
            kind if IDENTIFIER_TOKENS.contains(kind) => {
                self.parse_name_reference();
                true
            }
            kind if LITERALS.contains(kind) => {
                let unclosed =
                    kind == TokenKind::StringLiteral && is_unclosed_string(self.current_text());
                self.token_node(NodeKind::LiteralExpression);
                if unclosed {
                    self.error(ParseErrorKind::UnclosedString);
                }
                true
            }
            TokenKind::LParen => {
                self.parse_parenthesized_expression();
                true
            }
            TokenKind::LBracket => {
                self.parse_array_literal(true);
                true
            }
            TokenKind::LBrace => {
                self.parse_object_literal();
                true
            }
            TokenKind::Function => {
                self.parse_function_expression();
                true
            }
            kind if ACCESS_MODIFIERS.contains(kind) => self.parse_access_modifier_reference(),
            TokenKind::XmlStartTagStart => {
                self.parse_xml_literal();
                true
            }
            TokenKind::Int | TokenKind::Uint => {
                self.token_node(NodeKind::ReferenceExpression);
                true
            }
            _ => false,
        }
    }

    /// Wrap the current token in a node of `kind`.
    pub(crate) fn token_node(&mut self, kind: NodeKind) -> CompletedMarker {
        let m = self.start();
        self.bump();
        m.done(self, kind)
    }

    /// `name`, `*`, `ns::name`, `ns::*` or `ns::[expr]`.
    fn parse_name_reference(&mut self) {
        let start = self.start();
        self.token_node(NodeKind::ReferenceExpression);
        if let Some(namespace) = self.proceed_with_namespace_reference(start, true) {
            let reference = namespace.precede(self);
            reference.done(self, NodeKind::ReferenceExpression);
        }
    }

    /// `public::name`; anything else after the modifier is not an expression.
    fn parse_access_modifier_reference(&mut self) -> bool {
        let m = self.start();
        self.bump();
        if self.eat(TokenKind::ColonColon) {
            if self.at_set(IDENTIFIER_TOKENS) {
                self.bump();
            }
            m.done(self, NodeKind::ReferenceExpression);
            true
        } else {
            m.rollback_to(self);
            false
        }
    }

    /// Complete a namespace qualifier if `::` follows.
    ///
    /// `qualifier` was opened before the namespace name. With `::` it is
    /// closed as a `NamespaceReference` and the qualified name is consumed
    /// after it; otherwise it is abandoned. In expressions, `ns::[expr]`
    /// leaves the `[` for the caller.
    pub(crate) fn proceed_with_namespace_reference(
        &mut self,
        qualifier: Marker,
        expression_context: bool,
    ) -> Option<CompletedMarker> {
        if !self.at(TokenKind::ColonColon) {
            qualifier.abandon(self);
            return None;
        }
        self.bump();
        let namespace = qualifier.done(self, NodeKind::NamespaceReference);
        if self.at(TokenKind::Star) || self.at_set(IDENTIFIER_TOKENS) {
            self.bump();
        } else if !expression_context || !self.at(TokenKind::LBracket) {
            self.error(ParseErrorKind::ExpectedName);
        }
        Some(namespace)
    }

    /// `@name`, `@*`, `@ns::name` or `@[expr]`.
    ///
    /// Always produces a `ReferenceExpression`, with errors inside when the
    /// attribute name is missing.
    fn parse_attribute_reference(&mut self) {
        let reference = self.start();
        self.bump();

        if self.at(TokenKind::Star) || self.at_set(IDENTIFIER_TOKENS) {
            let name = self.start();
            self.bump();
            if self.at(TokenKind::ColonColon) {
                let qualifier = name.done(self, NodeKind::ReferenceExpression).precede(self);
                self.proceed_with_namespace_reference(qualifier, true);
            } else {
                name.abandon(self);
            }
        } else if self.eat(TokenKind::LBracket) {
            self.parse_expression();
            self.expect(TokenKind::RBracket);
        } else if !self.at_end() {
            self.error(ParseErrorKind::ExpectedIdentifier);
        }

        reference.done(self, NodeKind::ReferenceExpression);
    }

    pub(crate) fn parse_parenthesized_expression(&mut self) {
        let expr = self.start();
        self.bump();
        let parsed = self.without_context(ParseContext::NO_IN, Self::parse_expression_optional);
        if !parsed {
            self.error(ParseErrorKind::ExpectedExpression);
        }
        self.expect(TokenKind::RParen);
        expr.done(self, NodeKind::ParenthesizedExpression);
    }
}

/// Whether a string literal token is missing its closing quote.
///
/// The lexer ends an unterminated literal at the line end, which may leave
/// a trailing backslash or a lone quote.
pub(crate) fn is_unclosed_string(text: &str) -> bool {
    let unbalanced = |quote: char| {
        text.starts_with(quote) && (text.len() == 1 || !text.ends_with(quote))
    };
    ends_with_escape(text) || unbalanced('"') || unbalanced('\'')
}

/// True if the last character is escaped by a backslash or is one.
fn ends_with_escape(text: &str) -> bool {
    let mut escaping = false;
    let mut escaped = true;
    for c in text.chars() {
        if escaping {
            escaping = false;
            escaped = true;
            continue;
        }
        escaping = c == '\\';
        escaped = false;
    }
    escaping || escaped
}
