//! Statement parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: statement dispatch, blocks, control flow, variables
//! - `directives.rs`: `package`, `import`, `use namespace`, `include`,
//!   `namespace` declarations, `default xml namespace`
//! - `class.rs`: class and interface declarations
//!
//! Every statement consumes at least one token unless it stands at a `}`
//! closing the enclosing block, so statement loops always terminate.

mod class;
mod directives;

use flare_ir::{NodeKind, TokenKind};
use tracing::trace;

use crate::builder::{LeftBinder, Marker, RightBinder};
use crate::context::ParseContext;
use crate::error::ParseErrorKind;
use crate::recovery::{IDENTIFIER_TOKENS, MODIFIERS, STATEMENT_RECOVERY, VAR_MODIFIERS};
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) {
        self.with_depth((), Self::parse_statement_inner);
    }

    fn parse_statement_inner(&mut self) {
        let kind = self.current_kind();
        trace!(kind = %kind, "statement");
        match kind {
            TokenKind::Package => self.parse_package(),
            TokenKind::Default => self.parse_default_xml_namespace(),
            TokenKind::Import => self.parse_import(),
            TokenKind::Use => self.parse_use_namespace_directive(),
            TokenKind::Goto if IDENTIFIER_TOKENS.contains(self.nth(1)) => {
                let statement = self.start();
                self.bump_n(2);
                self.eat(TokenKind::Semicolon);
                statement.done(self, NodeKind::GotoStatement);
            }
            TokenKind::Include => self.parse_include_directive(),
            TokenKind::Namespace => {
                let owner = self.start_attribute_list_owner();
                if !self.parse_namespace_declaration(owner) {
                    self.parse_statement_base();
                }
            }
            _ => self.parse_statement_base(),
        }
    }

    fn parse_statement_base(&mut self) {
        let start = self.cursor.position();
        let first = self.current_kind();

        match first {
            TokenKind::Eof => {
                self.error(ParseErrorKind::ExpectedStatement);
                return;
            }
            TokenKind::LBrace => {
                self.parse_block();
                return;
            }
            TokenKind::Semicolon => {
                self.token_node(NodeKind::EmptyStatement);
                return;
            }
            TokenKind::If => return self.parse_if_statement(),
            TokenKind::Do => return self.parse_do_while_statement(),
            TokenKind::While => return self.parse_while_statement(),
            TokenKind::For => return self.parse_for_statement(),
            TokenKind::Continue => return self.parse_jump(NodeKind::ContinueStatement),
            TokenKind::Break => return self.parse_jump(NodeKind::BreakStatement),
            TokenKind::Return => return self.parse_return_statement(),
            TokenKind::With => return self.parse_with_statement(),
            TokenKind::Switch => return self.parse_switch_statement(),
            TokenKind::Throw => return self.parse_throw_statement(),
            TokenKind::Try => return self.parse_try_statement(),
            TokenKind::Debugger => {
                let statement = self.start();
                self.bump();
                self.force_semicolon();
                statement.done(self, NodeKind::DebuggerStatement);
                return;
            }
            _ => {}
        }

        if first == TokenKind::Identifier || MODIFIERS.contains(first) || first == TokenKind::LBracket
        {
            if self.parse_attributed_declaration(first) {
                return;
            }
        } else if matches!(first, TokenKind::Class | TokenKind::Interface) {
            let owner = self.start_attribute_list_owner();
            self.parse_class_or_interface(owner);
            return;
        } else if VAR_MODIFIERS.contains(first) {
            let owner = self.start_attribute_list_owner();
            self.parse_var_statement(false, owner);
            return;
        } else if first == TokenKind::Function {
            let owner = self.start_attribute_list_owner();
            self.parse_function_no_marker(false, owner);
            return;
        }

        if self.at_set(IDENTIFIER_TOKENS) && self.nth(1) == TokenKind::Colon {
            let statement = self.start();
            self.bump_n(2);
            self.parse_statement();
            statement.done(self, NodeKind::LabeledStatement);
            return;
        }

        if self.parse_expression_statement() {
            return;
        }

        let consumed = self.cursor.position() != start;
        let closes_block = self.at(TokenKind::RBrace) && self.context().in_block_body();
        if consumed || closes_block {
            self.error(ParseErrorKind::ExpectedStatement);
        } else {
            self.error_bump(ParseErrorKind::ExpectedStatement);
        }
    }

    /// Try a declaration behind an attribute list. Returns `false` when the
    /// tokens turned out to be something else and the caller should go on.
    fn parse_attributed_declaration(&mut self, first: TokenKind) -> bool {
        let emptiness = self.method_emptiness();
        self.with_method_emptiness(emptiness, |p| {
            let owner = p.start();
            if !p.parse_attribute_list() {
                // `[` was an array literal after all.
                owner.rollback_to(p);
                return false;
            }
            if p.at_end() {
                owner.abandon(p);
                return true;
            }

            match p.current_kind() {
                TokenKind::Function => p.parse_function_no_marker(false, owner),
                TokenKind::Var | TokenKind::Const => p.parse_var_statement(false, owner),
                TokenKind::LBrace => {
                    p.parse_block_and_attach();
                    owner.done(p, NodeKind::ConditionalCompileBlock);
                }
                TokenKind::Namespace => {
                    if !p.parse_namespace_declaration(owner) {
                        p.error_bump(ParseErrorKind::ExpectedDeclaration);
                    }
                }
                TokenKind::Class | TokenKind::Interface => p.parse_class_or_interface(owner),
                _ => {
                    p.set_method_emptiness(None);
                    if first == TokenKind::Identifier {
                        owner.rollback_to(p);
                        return false;
                    }
                    if p.at(TokenKind::ColonColon) {
                        owner.rollback_to(p);
                        return p.parse_expression_statement();
                    }
                    p.error(ParseErrorKind::ExpectedDeclaration);
                    owner.abandon(p);
                    return false;
                }
            }
            true
        })
    }

    /// Open the marker of a declaration without explicit attributes. Outside
    /// of block bodies the declaration still gets an empty `AttributeList`.
    pub(crate) fn start_attribute_list_owner(&mut self) -> Marker {
        let owner = self.start();
        if !self.context().in_block_body() {
            let list = self.start();
            list.done(self, NodeKind::AttributeList);
        }
        owner
    }

    fn parse_expression_statement(&mut self) -> bool {
        let statement = self.start();
        if !self.parse_expression_optional() {
            statement.abandon(self);
            return false;
        }
        self.force_semicolon();
        statement.done(self, NodeKind::ExpressionStatement).bind_edges(
            self,
            LeftBinder::IncludeDocCommentNoExtraLinebreak,
            RightBinder::Default,
        );
        true
    }

    /// A statement ends at `;`, a line break, a `}` or the end of input.
    fn force_semicolon(&mut self) {
        if !self.eat(TokenKind::Semicolon)
            && !self.has_newline_before()
            && !self.at(TokenKind::RBrace)
            && !self.at_end()
        {
            self.error(ParseErrorKind::ExpectedNewlineOrSemicolon);
        }
    }

    // Blocks

    /// `{ statements }` as a `BlockStatement`. Variables directly inside are
    /// locals.
    pub(crate) fn parse_block(&mut self) -> bool {
        if !self.at(TokenKind::LBrace) {
            self.error(ParseErrorKind::Expected(TokenKind::LBrace));
            return false;
        }
        let block = self.start();
        self.with_context(ParseContext::IN_BLOCK_BODY, |p| {
            p.without_context(ParseContext::NO_IN, Self::parse_block_and_attach);
        });
        block.done(self, NodeKind::BlockStatement);
        true
    }

    /// `{ statements }` whose statements belong to the enclosing node.
    fn parse_block_and_attach(&mut self) {
        if !self.expect(TokenKind::LBrace) {
            return;
        }
        while !self.at(TokenKind::RBrace) {
            if self.at_end() {
                self.error(ParseErrorKind::MissingRBrace);
                return;
            }
            self.parse_statement();
        }
        self.bump();
    }

    // Control flow

    /// `if (..) .. else if (..) .. else ..`, looping over `else if` so long
    /// chains do not recurse.
    fn parse_if_statement(&mut self) {
        let mut pending: Vec<Marker> = Vec::new();
        loop {
            let statement = self.start();
            self.parse_if_header();
            self.parse_statement();

            if self.eat(TokenKind::Else) {
                if self.at(TokenKind::If) {
                    if self.within_depth(pending.len()) {
                        pending.push(statement);
                    } else {
                        statement.abandon(self);
                    }
                    continue;
                }
                self.parse_statement();
            }
            statement.done(self, NodeKind::IfStatement);
            break;
        }
        while let Some(statement) = pending.pop() {
            statement.done(self, NodeKind::IfStatement);
        }
    }

    fn parse_if_header(&mut self) {
        self.bump();
        if !self.expect_paren_before_block() {
            return;
        }
        self.parse_expression();
        // `if (a ||)` and `if (a ==)` while typing
        while self.at(TokenKind::PipePipe) || self.at(TokenKind::EqEq) {
            self.bump();
        }
        self.expect(TokenKind::RParen);
    }

    /// Expect `(`. Returns `false` if it is missing and a `{` follows, so
    /// the condition should be skipped.
    fn expect_paren_before_block(&mut self) -> bool {
        self.expect(TokenKind::LParen) || !self.at(TokenKind::LBrace)
    }

    fn parse_do_while_statement(&mut self) {
        let statement = self.start();
        self.bump();
        self.parse_statement();
        self.expect(TokenKind::While);
        self.expect(TokenKind::LParen);
        self.parse_expression();
        self.expect(TokenKind::RParen);
        self.eat(TokenKind::Semicolon);
        statement.done(self, NodeKind::DoWhileStatement);
    }

    fn parse_while_statement(&mut self) {
        let statement = self.start();
        self.bump();
        if self.expect_paren_before_block() {
            self.parse_expression();
            self.expect(TokenKind::RParen);
        }
        self.parse_statement();
        statement.done(self, NodeKind::WhileStatement);
    }

    /// `for (..;..;..)`, `for (x in o)` and `for each (x in o)`.
    fn parse_for_statement(&mut self) {
        let statement = self.start();
        self.bump();
        self.eat(TokenKind::Each);
        let for_in = self.parse_for_head();
        self.parse_statement();
        let kind = if for_in {
            NodeKind::ForInStatement
        } else {
            NodeKind::ForStatement
        };
        statement.done(self, kind);
    }

    /// Returns whether the loop is a `for .. in`.
    fn parse_for_head(&mut self) -> bool {
        if !self.expect_paren_before_block() {
            return false;
        }

        let empty = if self.at_set(VAR_MODIFIERS) {
            let owner = self.start_attribute_list_owner();
            self.with_context(ParseContext::NO_IN, |p| p.parse_var_statement(true, owner));
            false
        } else {
            !self.with_context(ParseContext::NO_IN, Self::parse_expression_optional)
        };

        let mut for_in = false;
        if self.eat(TokenKind::Semicolon) {
            self.without_context(ParseContext::NO_IN, |p| {
                p.parse_expression_optional();
                if !p.eat(TokenKind::Semicolon) {
                    p.error(ParseErrorKind::Expected(TokenKind::Semicolon));
                }
                p.parse_expression_optional();
            });
        } else if self.at(TokenKind::In) {
            for_in = true;
            if empty {
                self.error(ParseErrorKind::ExpectedForLoopTarget);
            }
            self.bump();
            self.parse_expression();
        } else {
            self.error(ParseErrorKind::ExpectedInOrSemicolon);
        }

        self.expect(TokenKind::RParen);
        for_in
    }

    /// `break` or `continue` with an optional label on the same line.
    fn parse_jump(&mut self, kind: NodeKind) {
        let statement = self.start();
        self.bump();
        if !self.has_newline_before() && self.at_set(IDENTIFIER_TOKENS) {
            self.bump();
        }
        self.force_semicolon();
        statement.done(self, kind);
    }

    fn parse_return_statement(&mut self) {
        let statement = self.start();
        self.bump();
        if !self.has_newline_before() {
            self.parse_expression_optional();
        }
        self.force_semicolon();
        statement.done(self, NodeKind::ReturnStatement);
    }

    fn parse_with_statement(&mut self) {
        let statement = self.start();
        self.bump();
        self.expect(TokenKind::LParen);
        self.parse_expression();
        self.expect(TokenKind::RParen);
        self.parse_statement();
        statement.done(self, NodeKind::WithStatement);
    }

    fn parse_switch_statement(&mut self) {
        let statement = self.start();
        self.bump();
        if self.expect_paren_before_block() {
            self.parse_expression();
            self.expect(TokenKind::RParen);
        }

        let has_brace = self.expect(TokenKind::LBrace);
        while !self.at(TokenKind::RBrace) {
            if self.at_end() {
                self.error(ParseErrorKind::UnexpectedEof);
                statement.done(self, NodeKind::SwitchStatement);
                return;
            }
            self.parse_case_clause();
        }
        if has_brace {
            self.bump();
        }
        statement.done(self, NodeKind::SwitchStatement);
    }

    fn parse_case_clause(&mut self) {
        let first = self.current_kind();
        let clause = self.start();
        if !matches!(first, TokenKind::Case | TokenKind::Default) {
            self.error(ParseErrorKind::ExpectedCaseOrDefault);
        }
        self.bump();
        if first == TokenKind::Case {
            self.parse_expression();
        }
        self.expect(TokenKind::Colon);

        while !matches!(
            self.current_kind(),
            TokenKind::Case | TokenKind::Default | TokenKind::RBrace | TokenKind::Eof
        ) {
            self.parse_statement();
        }
        clause.done(self, NodeKind::CaseClause);
    }

    fn parse_throw_statement(&mut self) {
        let statement = self.start();
        self.bump();
        if self.has_newline_before() {
            self.error(ParseErrorKind::ExpectedExpression);
        } else {
            self.parse_expression();
            self.eat(TokenKind::Semicolon);
        }
        statement.done(self, NodeKind::ThrowStatement);
    }

    fn parse_try_statement(&mut self) {
        let statement = self.start();
        self.bump();
        self.parse_block();
        while self.at(TokenKind::Catch) {
            self.parse_catch_block();
        }
        if self.eat(TokenKind::Finally) {
            self.parse_block();
        }
        statement.done(self, NodeKind::TryStatement);
    }

    /// `catch (e:Error) { .. }`
    fn parse_catch_block(&mut self) {
        let block = self.start();
        self.bump();
        if self.eat(TokenKind::LParen) {
            if self.at_set(IDENTIFIER_TOKENS) {
                let parameter = self.start();
                self.bump();
                self.try_parse_type();
                parameter.done(self, NodeKind::Parameter);
            } else {
                self.error(ParseErrorKind::ExpectedParameterName);
            }
            self.expect(TokenKind::RParen);
        }
        self.parse_block();
        block.done(self, NodeKind::CatchBlock);
    }

    // Variables

    /// `var a:int = 1, b;` after its attribute list; closes `owner`.
    ///
    /// In the head of a `for` loop there is no terminating semicolon and
    /// `in` ends the initializer.
    pub(crate) fn parse_var_statement(&mut self, in_for_init: bool, owner: Marker) {
        if self.context().in_interface() {
            self.error(ParseErrorKind::InterfaceVariable);
        }
        self.bump();

        loop {
            self.parse_var_declaration(!in_for_init);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        if !in_for_init {
            self.force_semicolon();
        }
        owner
            .done(self, NodeKind::VarStatement)
            .bind_edges(self, LeftBinder::IncludeDocComment, RightBinder::Default);
    }

    fn parse_var_declaration(&mut self, allow_in: bool) {
        if !self.at_set(IDENTIFIER_TOKENS) {
            if self.at_set(STATEMENT_RECOVERY) {
                self.error(ParseErrorKind::ExpectedVariableName);
            } else {
                self.error_bump(ParseErrorKind::ExpectedVariableName);
            }
            return;
        }

        let variable = self.start();
        self.parse_qualified_type_name(false);
        self.try_parse_type();
        if self.eat(TokenKind::Eq) {
            let parsed = if allow_in {
                self.parse_nested_assignment()
            } else {
                self.parse_assignment_expression()
            };
            if !parsed {
                self.error(ParseErrorKind::ExpectedExpression);
            }
        }

        let kind = if self.context().in_block_body() {
            NodeKind::LocalVariable
        } else {
            NodeKind::Variable
        };
        variable
            .done(self, kind)
            .bind_edges(self, LeftBinder::IncludeDocComment, RightBinder::Default);
    }
}
