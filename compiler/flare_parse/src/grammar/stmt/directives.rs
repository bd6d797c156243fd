//! Package-level directives: `package`, `import`, `use namespace`,
//! `include`, `namespace` declarations and `default xml namespace`.

use flare_ir::{NodeKind, TokenKind};

use crate::builder::{LeftBinder, Marker, RightBinder};
use crate::error::ParseErrorKind;
use crate::recovery::IDENTIFIER_TOKENS;
use crate::Parser;

impl Parser<'_> {
    /// `package a.b { .. }`; the package body is not a block.
    pub(super) fn parse_package(&mut self) {
        let package = self.start();
        self.bump();
        if self.at(TokenKind::Identifier) {
            self.parse_qualified_type_name(false);
        }
        if self.at(TokenKind::LBrace) {
            self.parse_block_and_attach();
        } else {
            self.error(ParseErrorKind::ExpectedNameOrLBrace);
        }
        package.done(self, NodeKind::PackageStatement);
    }

    /// `import a.b.C;`, `import a.b.*;` or `import ns = a.b;`
    pub(super) fn parse_import(&mut self) {
        let import = self.start();
        self.bump();

        let assignment = self.start();
        if !self.parse_qualified_type_name(true) {
            self.error(ParseErrorKind::ExpectedTypeNameOrStar);
            assignment.abandon(self);
            import.done(self, NodeKind::ImportStatement);
            return;
        }

        if self.eat(TokenKind::Eq) {
            if !self.parse_qualified_type_name(false) {
                self.error(ParseErrorKind::ExpectedTypeNameOrStar);
            }
            assignment.done(self, NodeKind::AssignmentExpression);
        } else {
            assignment.abandon(self);
        }
        self.eat(TokenKind::Semicolon);
        import.done(self, NodeKind::ImportStatement);
    }

    /// `use namespace a, b.c;`
    pub(crate) fn parse_use_namespace_directive(&mut self) {
        let directive = self.start();
        self.bump();

        if self.eat(TokenKind::Namespace) {
            if !self.parse_qualified_type_name(false) {
                self.error(ParseErrorKind::ExpectedTypeNameOrStar);
            }
            while self.eat(TokenKind::Comma) {
                if !self.parse_qualified_type_name(false) {
                    self.error(ParseErrorKind::ExpectedTypeNameOrStar);
                    break;
                }
            }
        } else {
            self.error(ParseErrorKind::Expected(TokenKind::Namespace));
        }
        self.eat(TokenKind::Semicolon);
        directive.done(self, NodeKind::UseNamespaceDirective);
    }

    /// `include "file.as";`
    pub(crate) fn parse_include_directive(&mut self) {
        let directive = self.start();
        self.bump();
        self.expect_or(TokenKind::StringLiteral, ParseErrorKind::ExpectedStringLiteral);
        self.eat(TokenKind::Semicolon);
        directive.done(self, NodeKind::IncludeDirective);
    }

    /// `namespace ns = "uri";` closing `owner`, which holds the attributes.
    ///
    /// If no name follows `namespace`, `owner` is rolled back and `false`
    /// returned; the keyword is then an ordinary identifier.
    pub(super) fn parse_namespace_declaration(&mut self, owner: Marker) -> bool {
        self.bump();
        if !self.at_set(IDENTIFIER_TOKENS) {
            owner.rollback_to(self);
            return false;
        }

        self.parse_qualified_type_name(false);
        if self.eat(TokenKind::Eq) {
            match self.current_kind() {
                TokenKind::Public => self.bump(),
                TokenKind::StringLiteral | TokenKind::Identifier => self.parse_expression(),
                _ => self.error(ParseErrorKind::ExpectedStringLiteral),
            }
        }
        self.eat(TokenKind::Semicolon);
        owner
            .done(self, NodeKind::NamespaceDeclaration)
            .bind_edges(self, LeftBinder::IncludeDocComment, RightBinder::Default);
        true
    }

    /// `default xml namespace = expr;`, an assignment statement.
    pub(super) fn parse_default_xml_namespace(&mut self) {
        let statement = self.start();
        let assignment = self.start();
        self.bump();

        if self.at(TokenKind::Identifier) && self.current_text() == "xml" {
            self.bump();
            if self.expect(TokenKind::Namespace) && self.expect(TokenKind::Eq) {
                self.parse_expression();
            }
        } else {
            self.error(ParseErrorKind::ExpectedXml);
        }
        assignment.done(self, NodeKind::AssignmentExpression);
        self.eat(TokenKind::Semicolon);
        statement.done(self, NodeKind::ExpressionStatement);
    }
}
