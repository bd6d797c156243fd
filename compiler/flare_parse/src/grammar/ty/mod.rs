//! Type parsing.
//!
//! Types are `int`, `uint`, `void`, `*`, or a dotted name such as
//! `flash.display.Sprite`, optionally with a single-argument generic
//! signature (`Vector.<String>`).

use flare_ir::{NodeKind, TokenKind};

use crate::error::ParseErrorKind;
use crate::recovery::{IDENTIFIER_NAMES, IDENTIFIER_TOKENS, PRIMITIVE_TYPES};
use crate::Parser;

impl Parser<'_> {
    /// Parse a type into a `Type` node.
    ///
    /// Always returns `true`: a missing type becomes an error inside the
    /// node so the caller can carry on.
    pub(crate) fn parse_type(&mut self) -> bool {
        self.with_depth(true, |p| {
            let ty = p.start();
            if p.at_set(PRIMITIVE_TYPES) || p.at(TokenKind::Star) {
                p.bump();
            } else if !p.parse_qualified_type_name(false) {
                p.error(ParseErrorKind::ExpectedTypeNameOrStar);
            }
            ty.done(p, NodeKind::Type);
            true
        })
    }

    /// Parse `a.b.c`, `a.b.*` (with `allow_star`) or `Vector.<T>`.
    ///
    /// Each segment wraps the reference before it, so `a.b.c` becomes
    /// `((a).b).c`. Returns `false` without consuming if no name starts here.
    pub(crate) fn parse_qualified_type_name(&mut self, allow_star: bool) -> bool {
        if !self.at_set(IDENTIFIER_TOKENS) {
            return false;
        }
        let mut reference = self.token_node(NodeKind::ReferenceExpression);

        let mut chain = 0;
        loop {
            if !self.within_depth(chain) {
                break;
            }
            chain += 1;

            if self.at(TokenKind::Dot) {
                let next = self.nth(1);
                let qualified = reference.precede(self);
                self.bump();
                if next == TokenKind::Lt {
                    self.parse_generic_signature();
                } else if next == TokenKind::Star && allow_star {
                    self.bump();
                    qualified.done(self, NodeKind::ReferenceExpression);
                    break;
                } else if IDENTIFIER_NAMES.contains(next) {
                    self.bump();
                } else {
                    self.error(ParseErrorKind::ExpectedName);
                    qualified.done(self, NodeKind::ReferenceExpression);
                    break;
                }
                reference = qualified.done(self, NodeKind::ReferenceExpression);
            } else if self.at(TokenKind::Lt) {
                // `Vector<int>`: still read the signature, but the dot is missing.
                self.error(ParseErrorKind::DotExpected);
                let qualified = reference.precede(self);
                self.parse_generic_signature();
                reference = qualified.done(self, NodeKind::ReferenceExpression);
            } else {
                break;
            }
        }
        true
    }

    /// `: Type`, optionally followed by `?` or `!`. Returns `false` if there
    /// is no `:`.
    pub(crate) fn try_parse_type(&mut self) -> bool {
        if !self.eat(TokenKind::Colon) {
            return false;
        }
        self.parse_type();
        if self.at(TokenKind::Question) || self.at(TokenKind::Bang) {
            self.bump();
        }
        true
    }

    /// `<T>`. Only one type argument is accepted; a `,` after it is
    /// reported as a missing `>`.
    pub(crate) fn parse_generic_signature(&mut self) {
        let signature = self.start();
        self.bump();
        self.parse_type();
        self.expect(TokenKind::Gt);
        signature.done(self, NodeKind::GenericSignature);
    }
}

#[cfg(test)]
mod tests;
