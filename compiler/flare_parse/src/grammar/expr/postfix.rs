//! Member access, E4X filters, indexing, calls and `new`.

use flare_ir::{NodeKind, TokenKind};

use crate::error::ParseErrorKind;
use crate::recovery::IDENTIFIER_NAMES;
use crate::Parser;

impl Parser<'_> {
    /// Parse a primary expression followed by any number of `.name`,
    /// `..name`, `::name`, `.@attr`, `.(filter)`, `[index]` and `(args)`
    /// suffixes. With `member_only`, calls end the expression (the callee
    /// of `new`).
    pub(crate) fn parse_left_hand_side_expression(&mut self, member_only: bool) -> bool {
        let mut expr = self.start();
        let mut is_new = false;

        match self.current_kind() {
            TokenKind::New => {
                is_new = self.with_depth(false, Self::parse_new_expression);
            }
            TokenKind::ColonColon => {
                self.bump();
                self.with_depth(false, |p| p.parse_left_hand_side_expression(true));
                expr = expr.done(self, NodeKind::BindExpression).precede(self);
            }
            _ => {
                if !self.parse_primary_expression() {
                    expr.abandon(self);
                    return false;
                }
            }
        }

        let mut chain = 0;
        loop {
            let kind = self.current_kind();
            if !self.within_depth(chain) {
                expr.abandon(self);
                return true;
            }
            chain += 1;

            match kind {
                TokenKind::Dot | TokenKind::DotDot | TokenKind::ColonColon => {
                    self.bump();
                    let has_at = self.eat(TokenKind::At);
                    if has_at && self.at(TokenKind::LBracket) {
                        continue;
                    }

                    if self.at(TokenKind::LParen) {
                        let filter = self.start();
                        self.parse_argument_list_no_marker();
                        filter.done(self, NodeKind::FilterQueryArgumentList);
                        expr = expr.done(self, NodeKind::CallExpression).precede(self);
                        continue;
                    }

                    if kind == TokenKind::Dot && !has_at && self.at(TokenKind::Lt) {
                        self.parse_generic_signature();
                    } else if self.at(TokenKind::Star) || self.at_set(IDENTIFIER_NAMES) {
                        let name = self.start();
                        self.bump();
                        if self.at(TokenKind::ColonColon) {
                            let qualifier =
                                name.done(self, NodeKind::ReferenceExpression).precede(self);
                            self.proceed_with_namespace_reference(qualifier, true);
                        } else {
                            name.abandon(self);
                        }
                    } else {
                        self.error(ParseErrorKind::ExpectedName);
                    }
                    expr = expr.done(self, NodeKind::ReferenceExpression).precede(self);
                }
                TokenKind::LBracket => {
                    self.bump();
                    self.parse_expression();
                    self.expect(TokenKind::RBracket);
                    expr = expr
                        .done(self, NodeKind::IndexedPropertyAccessExpression)
                        .precede(self);
                }
                TokenKind::LParen if !member_only => {
                    self.parse_argument_list();
                    let call = if is_new {
                        NodeKind::NewExpression
                    } else {
                        NodeKind::CallExpression
                    };
                    expr = expr.done(self, call).precede(self);
                    is_new = false;
                }
                _ => {
                    if is_new {
                        if kind == TokenKind::Lt {
                            self.error(ParseErrorKind::DotExpected);
                        }
                        expr.done(self, NodeKind::NewExpression);
                    } else {
                        expr.abandon(self);
                    }
                    return true;
                }
            }
        }
    }

    /// Parse `new` and its callee. Returns whether the caller still has to
    /// close a `NewExpression` around the callee and its arguments.
    fn parse_new_expression(&mut self) -> bool {
        if self.nth(1) == TokenKind::Function {
            let m = self.start();
            self.bump();
            self.parse_function_expression();
            m.done(self, NodeKind::NewExpression);
            return false;
        }

        self.bump();
        if self.at(TokenKind::Lt) {
            self.parse_generic_signature();
            if self.at(TokenKind::LBracket) {
                self.parse_array_literal(false);
            } else {
                self.error(ParseErrorKind::Expected(TokenKind::LBracket));
            }
            return true;
        }

        if !self.parse_left_hand_side_expression(true) {
            self.error(ParseErrorKind::ExpectedExpression);
        }
        while self.eat(TokenKind::LBracket) {
            if !self.at(TokenKind::RBracket) {
                self.error(ParseErrorKind::Expected(TokenKind::RBracket));
                break;
            }
            self.bump();
        }
        true
    }

    pub(crate) fn parse_argument_list(&mut self) {
        let args = self.start();
        self.parse_argument_list_no_marker();
        args.done(self, NodeKind::ArgumentList);
    }

    fn parse_argument_list_no_marker(&mut self) {
        self.bump();
        let mut first = true;
        while !self.at(TokenKind::RParen) {
            if first {
                first = false;
            } else if !self.eat(TokenKind::Comma) {
                self.error(ParseErrorKind::ExpectedCommaOrRParen);
                break;
            }
            if !self.parse_nested_assignment() {
                self.error(ParseErrorKind::ExpectedExpression);
            }
        }
        self.expect(TokenKind::RParen);
    }
}
