//! Class and interface declarations.

use flare_ir::{NodeKind, TokenKind};

use crate::builder::{LeftBinder, Marker, RightBinder};
use crate::context::{MethodEmptiness, ParseContext};
use crate::error::ParseErrorKind;
use crate::recovery::IDENTIFIER_TOKENS;
use crate::Parser;

impl Parser<'_> {
    /// `class C extends B implements I, J { members }` closing `owner`.
    ///
    /// Interfaces use the same node kind. Their members are parsed with
    /// bodies forbidden and variables reported.
    pub(super) fn parse_class_or_interface(&mut self, owner: Marker) {
        let interface = self.at(TokenKind::Interface);
        let emptiness = if interface {
            Some(MethodEmptiness::Always)
        } else {
            self.method_emptiness()
        };

        self.with_method_emptiness(emptiness, |p| {
            p.bump();
            if p.at_set(IDENTIFIER_TOKENS) {
                p.parse_possibly_qualified_name();
            } else {
                p.error(ParseErrorKind::ExpectedTypeNameOrStar);
            }

            if p.at(TokenKind::Extends) {
                p.parse_reference_list(NodeKind::ExtendsList);
            }
            if p.at(TokenKind::Implements) {
                p.parse_reference_list(NodeKind::ImplementsList);
            }

            let members = ParseContext::IN_BLOCK_BODY.with(ParseContext::IN_INTERFACE);
            p.without_context(members, |p| {
                if interface {
                    p.with_context(ParseContext::IN_INTERFACE, Self::parse_block_and_attach);
                } else {
                    p.parse_block_and_attach();
                }
            });
        });

        owner
            .done(self, NodeKind::Class)
            .bind_edges(self, LeftBinder::IncludeDocComment, RightBinder::Default);
    }

    /// `extends A, B` or `implements A, B`.
    fn parse_reference_list(&mut self, kind: NodeKind) {
        let list = self.start();
        self.bump();

        if self.parse_reference_list_member() {
            while self.eat(TokenKind::Comma) {
                if !self.at_set(IDENTIFIER_TOKENS) || !self.parse_reference_list_member() {
                    self.error(ParseErrorKind::ExpectedTypeName);
                    break;
                }
            }
        } else {
            self.error(ParseErrorKind::ExpectedTypeName);
        }
        list.done(self, kind);
    }

    fn parse_reference_list_member(&mut self) -> bool {
        let member = self.start();
        if self.parse_qualified_type_name(false) {
            member.done(self, NodeKind::ReferenceListMember);
            true
        } else {
            member.abandon(self);
            false
        }
    }
}
