//! Expression parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: comma, assignment, conditional and binary precedence chain
//! - `operators.rs`: operator tables (binary priorities, assignment operators)
//! - `primary.rs`: literals, references, `@` attribute references, namespaces
//! - `postfix.rs`: member access, filters, indexing, calls, `new`
//! - `literal.rs`: array and object literals
//!
//! Every production returns `true` when it parsed something. Returning
//! `false` means no token was consumed and no node was left behind, so the
//! caller decides which error to record.

mod literal;
mod operators;
mod postfix;
mod primary;

use flare_ir::{NodeKind, TokenKind};

use crate::context::ParseContext;
use crate::error::ParseErrorKind;
use crate::recovery::UNARY_OPERATORS;
use crate::Parser;

impl Parser<'_> {
    /// Parse an expression, recording "expected expression" if there is none.
    ///
    /// `in` is always a relational operator here.
    pub(crate) fn parse_expression(&mut self) {
        let parsed = self.without_context(ParseContext::NO_IN, Self::parse_expression_optional);
        if !parsed {
            self.error(ParseErrorKind::ExpectedExpression);
        }
    }

    /// Parse a comma expression.
    ///
    /// When `in` is excluded by the context and follows the first operand,
    /// that operand becomes the target of a `for .. in` loop and is wrapped
    /// in a `DefinitionExpression`.
    pub(crate) fn parse_expression_optional(&mut self) -> bool {
        let mut expr = self.start();
        if !self.parse_assignment_expression() {
            expr.abandon(self);
            return false;
        }

        if self.at(TokenKind::In) {
            expr.done(self, NodeKind::DefinitionExpression);
            return true;
        }

        let mut nesting = 0;
        while self.eat(TokenKind::Comma) {
            if !self.parse_assignment_expression() {
                self.error(ParseErrorKind::ExpectedExpression);
            }
            if self.within_depth(nesting) {
                expr = expr.done(self, NodeKind::CommaExpression).precede(self);
            }
            nesting += 1;
        }
        expr.abandon(self);
        true
    }

    /// Parse an assignment expression with `in` allowed regardless of the
    /// enclosing context (array elements, arguments, property values).
    pub(crate) fn parse_nested_assignment(&mut self) -> bool {
        self.without_context(ParseContext::NO_IN, Self::parse_assignment_expression)
    }

    pub(crate) fn parse_assignment_expression(&mut self) -> bool {
        self.with_depth(true, Self::parse_assignment_inner)
    }

    fn parse_assignment_inner(&mut self) -> bool {
        let expr = self.start();
        if let Some(len) = self.assignment_operator_len() {
            self.error(ParseErrorKind::ExpectedExpression);
            self.bump_n(len);
            if !self.parse_assignment_expression() {
                self.error(ParseErrorKind::ExpectedExpression);
            }
            expr.done(self, NodeKind::AssignmentExpression);
            return true;
        }

        let definition = self.start();
        if !self.parse_conditional_expression() {
            definition.abandon(self);
            expr.abandon(self);
            return false;
        }

        if let Some(len) = self.assignment_operator_len() {
            definition.done(self, NodeKind::DefinitionExpression);
            self.bump_n(len);
            if !self.parse_assignment_expression() {
                self.error(ParseErrorKind::ExpectedExpression);
            }
            expr.done(self, NodeKind::AssignmentExpression);
        } else {
            definition.abandon(self);
            expr.abandon(self);
        }
        true
    }

    fn parse_conditional_expression(&mut self) -> bool {
        let expr = self.start();
        if !self.parse_binary_expression(0) {
            if self.at(TokenKind::Question) {
                self.error(ParseErrorKind::ExpectedExpression);
            } else {
                expr.abandon(self);
                return false;
            }
        }

        if self.eat(TokenKind::Question) {
            if !self.parse_assignment_expression() {
                self.error(ParseErrorKind::ExpectedExpression);
            }
            self.expect(TokenKind::Colon);
            if !self.parse_assignment_expression() {
                self.error(ParseErrorKind::ExpectedExpression);
            }
            expr.done(self, NodeKind::ConditionalExpression);
        } else {
            expr.abandon(self);
        }
        true
    }

    /// Precedence climbing over operators of at least `min_priority`.
    ///
    /// Operators of equal priority associate to the left. Once a chain is
    /// as long as the depth limit allows, further operands are attached
    /// flat instead of nesting deeper.
    fn parse_binary_expression(&mut self, min_priority: u8) -> bool {
        let mut expr = self.start();
        if !self.parse_exponential_expression() {
            expr.abandon(self);
            return false;
        }

        let mut chain = 0;
        while let Some(priority) = self.binary_priority() {
            if priority < min_priority {
                break;
            }
            self.bump_binary_operator();
            if !self.parse_binary_expression(priority + 1) {
                self.error(ParseErrorKind::ExpectedExpression);
            }
            if self.within_depth(chain) {
                expr = expr.done(self, NodeKind::BinaryExpression).precede(self);
            }
            chain += 1;
        }
        expr.abandon(self);
        true
    }

    /// `**` binds tighter than every other binary operator and associates
    /// to the right.
    fn parse_exponential_expression(&mut self) -> bool {
        let expr = self.start();
        let parsed = self.parse_unary_expression();
        if self.eat(TokenKind::StarStar) {
            let rhs = self.with_depth(true, Self::parse_exponential_expression);
            if !rhs {
                self.error(ParseErrorKind::ExpectedExpression);
            }
            expr.done(self, NodeKind::BinaryExpression);
        } else {
            expr.abandon(self);
        }
        parsed
    }

    /// Parse an operand without binary operators (`delete x`, `-y`, `z++`).
    pub(crate) fn parse_unary_expression(&mut self) -> bool {
        if !self.at_set(UNARY_OPERATORS) {
            return self.parse_postfix_expression();
        }
        self.with_depth(true, |p| {
            let expr = p.start();
            p.bump();
            if !p.parse_unary_expression() {
                p.error(ParseErrorKind::ExpectedExpression);
            }
            expr.done(p, NodeKind::PrefixExpression);
            true
        })
    }

    fn parse_postfix_expression(&mut self) -> bool {
        let expr = self.start();
        if !self.parse_left_hand_side_expression(false) {
            expr.abandon(self);
            return false;
        }

        let postfix = self.at(TokenKind::PlusPlus) || self.at(TokenKind::MinusMinus);
        if postfix && !self.has_newline_before() {
            self.bump();
            expr.done(self, NodeKind::PostfixExpression);
        } else {
            expr.abandon(self);
        }
        true
    }
}

#[cfg(test)]
mod tests;
