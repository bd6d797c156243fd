//! Array and object literals.

use flare_ir::{NodeKind, TokenKind};

use crate::builder::{LeftBinder, Marker, RightBinder};
use crate::error::ParseErrorKind;
use crate::recovery::{IDENTIFIER_NAMES, PROPERTY_NAMES};
use crate::Parser;

use super::primary::is_unclosed_string;

impl Parser<'_> {
    /// `[a, , b]`. Holes become zero-width `EmptyExpression` nodes; with
    /// `allow_holes` unset (`new <T>[..]`) they are also errors.
    pub(crate) fn parse_array_literal(&mut self, allow_holes: bool) {
        let array = self.start();
        self.bump();
        let mut comma_expected = false;

        while !self.at(TokenKind::RBracket) && !self.at_end() {
            if comma_expected {
                self.expect(TokenKind::Comma);
            }

            if self.at(TokenKind::Comma) {
                if !allow_holes {
                    self.error(ParseErrorKind::ExpectedExpression);
                }
                while self.at(TokenKind::Comma) {
                    let hole = self.start();
                    hole.done(self, NodeKind::EmptyExpression);
                    self.bump();
                }
            }

            comma_expected = false;
            if !self.at(TokenKind::RBracket) {
                if !self.parse_nested_assignment() {
                    self.error(ParseErrorKind::ExpectedExpression);
                    break;
                }
                comma_expected = true;
            }
        }

        self.expect(TokenKind::RBracket);
        array.done(self, NodeKind::ArrayLiteralExpression);
    }

    /// `{ name: value, "key": value, (computed): value, [computed]: value,
    /// shorthand, method() {}, get prop() {}, ...spread }`.
    pub(crate) fn parse_object_literal(&mut self) {
        let object = self.start();
        self.bump();

        while !self.at(TokenKind::RBrace) && !self.at_end() {
            if !self.is_property_start() {
                self.error(ParseErrorKind::ExpectedPropertyStart);
                break;
            }
            self.parse_property();

            match self.current_kind() {
                TokenKind::RBrace => break,
                TokenKind::Comma => self.bump(),
                TokenKind::Semicolon => {
                    self.error(ParseErrorKind::Expected(TokenKind::Comma));
                    self.bump();
                }
                _ => {
                    self.error(ParseErrorKind::Expected(TokenKind::Comma));
                    if !self.is_property_start() {
                        break;
                    }
                }
            }
        }

        self.expect(TokenKind::RBrace);
        object.done(self, NodeKind::ObjectLiteralExpression);
    }

    fn is_property_start(&self) -> bool {
        self.at_set(PROPERTY_NAMES)
            || matches!(
                self.current_kind(),
                TokenKind::LParen | TokenKind::LBracket | TokenKind::DotDotDot
            )
    }

    /// `name(`, `get name`, `set [computed]`: a method or accessor property.
    fn is_function_property_start(&self) -> bool {
        let next = self.nth(1);
        match self.current_kind() {
            TokenKind::Get | TokenKind::Set
                if PROPERTY_NAMES.contains(next) || next == TokenKind::LBracket =>
            {
                true
            }
            kind => PROPERTY_NAMES.contains(kind) && next == TokenKind::LParen,
        }
    }

    fn parse_property(&mut self) {
        let property = self.start();
        let first = self.current_kind();
        let second = self.nth(1);

        match first {
            TokenKind::LParen => {
                self.parse_parenthesized_expression();
                self.parse_property_initializer(false);
                property
                    .done(self, NodeKind::Property)
                    .bind_edges(self, LeftBinder::IncludeDocComment, RightBinder::Default);
            }
            TokenKind::LBracket => {
                self.parse_property_name();
                if self.at(TokenKind::LParen) {
                    self.parse_parameter_list_and_body(property, NodeKind::FunctionProperty);
                } else {
                    self.parse_property_initializer(false);
                    property.done(self, NodeKind::Property);
                }
            }
            TokenKind::DotDotDot => {
                self.bump();
                if !self.parse_nested_assignment() {
                    self.error(ParseErrorKind::ExpectedExpression);
                }
                property.done(self, NodeKind::SpreadExpression);
            }
            _ if self.is_function_property_start() => self.parse_function_property(property),
            _ if IDENTIFIER_NAMES.contains(first)
                && (matches!(second, TokenKind::Comma | TokenKind::RBrace)
                    || self.can_be_incomplete_property(second)) =>
            {
                self.token_node(NodeKind::ReferenceExpression);
                property.done(self, NodeKind::Property);
            }
            _ if IDENTIFIER_NAMES.contains(first) && second == TokenKind::Eq => {
                self.token_node(NodeKind::ReferenceExpression);
                self.bump();
                if !self.parse_nested_assignment() {
                    self.error(ParseErrorKind::ExpectedExpression);
                }
                property.done(self, NodeKind::Property);
            }
            _ => {
                let unclosed = first == TokenKind::StringLiteral
                    && is_unclosed_string(self.current_text());
                self.bump();
                if unclosed {
                    self.error(ParseErrorKind::UnclosedString);
                }
                self.parse_property_initializer(IDENTIFIER_NAMES.contains(first));
                property
                    .done(self, NodeKind::Property)
                    .bind_edges(self, LeftBinder::IncludeDocComment, RightBinder::Default);
            }
        }
    }

    /// A name on its own line, not followed by `:` or `=`: the user is
    /// still typing the next property.
    fn can_be_incomplete_property(&self, second: TokenKind) -> bool {
        self.has_newline_after() && second != TokenKind::Colon && second != TokenKind::Eq
    }

    fn parse_function_property(&mut self, property: Marker) {
        if matches!(self.current_kind(), TokenKind::Get | TokenKind::Set)
            && self.nth(1) != TokenKind::LParen
        {
            self.parse_function_expression_attribute_list();
        }
        self.parse_property_name();
        self.parse_parameter_list_and_body(property, NodeKind::FunctionProperty);
    }

    /// `name`, `"key"`, `42` or `[computed]`.
    fn parse_property_name(&mut self) -> bool {
        if self.at(TokenKind::LBracket) {
            let computed = self.start();
            self.bump();
            if !self.parse_nested_assignment() {
                self.error(ParseErrorKind::ExpectedExpression);
            }
            self.expect(TokenKind::RBracket);
            computed.done(self, NodeKind::ComputedName);
            true
        } else if self.at_set(PROPERTY_NAMES) {
            self.bump();
            true
        } else {
            self.error(ParseErrorKind::ExpectedPropertyName);
            false
        }
    }

    fn parse_property_initializer(&mut self, could_be_shorthand: bool) {
        let expected = if could_be_shorthand {
            ParseErrorKind::ExpectedColonOrComma
        } else {
            ParseErrorKind::Expected(TokenKind::Colon)
        };
        if !self.expect_or(TokenKind::Colon, expected) && self.has_newline_before() {
            return;
        }
        if !self.parse_nested_assignment() {
            self.error(ParseErrorKind::ExpectedExpression);
        }
    }
}
