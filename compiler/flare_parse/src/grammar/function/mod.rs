//! Function declarations, function expressions and attribute lists.
//!
//! An attribute list is everything that may precede a declaration keyword:
//! `[Metadata(key="value")]` blocks, inline `include`/`use namespace`
//! directives, one namespace qualifier (`mx_internal`, `CONFIG::debug`,
//! `a.b`) and modifiers (`public static override ...`).

use flare_ir::{NodeKind, TokenKind};

use crate::builder::{LeftBinder, Marker, RightBinder};
use crate::context::MethodEmptiness;
use crate::error::ParseErrorKind;
use crate::recovery::{IDENTIFIER_NAMES, IDENTIFIER_TOKENS, MODIFIERS, PROPERTY_NAMES};
use crate::Parser;

/// What an attribute list scan has seen so far.
#[derive(Default)]
struct AttributeScan {
    /// A bare namespace identifier was consumed.
    namespace: bool,
    /// The namespace identifier is the last token on its line.
    detached: bool,
    /// At least one modifier keyword was consumed.
    modifiers: bool,
}

/// Tokens that can follow an attribute list made of a namespace alone.
fn is_attribute_list_owner(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Var
            | TokenKind::Const
            | TokenKind::Function
            | TokenKind::Class
            | TokenKind::Interface
            | TokenKind::Namespace
    )
}

impl Parser<'_> {
    /// Parse the attribute list of a declaration into an `AttributeList`.
    ///
    /// Returns `false` when a `[` turned out not to start metadata (an array
    /// literal); the caller must then roll back. A list that holds only a
    /// namespace-looking identifier not followed by a declaration keyword,
    /// or one that ends its line, is rolled back here: the identifier
    /// belongs to the next statement.
    pub(crate) fn parse_attribute_list(&mut self) -> bool {
        let list = self.start();
        let mut scan = AttributeScan::default();
        let complete = self.scan_attribute_list(&mut scan);

        if scan.namespace
            && !scan.modifiers
            && (scan.detached || !is_attribute_list_owner(self.current_kind()))
        {
            list.rollback_to(self);
        } else {
            list.done(self, NodeKind::AttributeList);
        }
        complete
    }

    fn scan_attribute_list(&mut self, scan: &mut AttributeScan) -> bool {
        let mut conditional_compile = false;
        let mut metadata_closed = false;

        loop {
            let mut progressed = false;

            while self.at(TokenKind::LBracket) {
                if metadata_closed {
                    self.error(ParseErrorKind::ExpectedDeclaration);
                    break;
                }
                let attribute = self.start();
                self.bump();
                if self.at(TokenKind::RBracket) {
                    self.error(ParseErrorKind::ExpectedIdentifier);
                } else if self.at_set(IDENTIFIER_TOKENS) {
                    self.bump();
                } else {
                    attribute.abandon(self);
                    return false;
                }

                while !self.at(TokenKind::RBracket) {
                    self.parse_attribute_body();
                    if self.at_end() {
                        attribute.done(self, NodeKind::Attribute);
                        self.error(ParseErrorKind::Expected(TokenKind::RBracket));
                        return true;
                    }
                }
                self.bump();
                attribute.done(self, NodeKind::Attribute);
                progressed = true;
            }

            if self.at(TokenKind::Include) {
                progressed = true;
                self.parse_include_directive();
            }

            if self.at(TokenKind::Use) && !metadata_closed {
                progressed = true;
                self.parse_use_namespace_directive();
            }

            if self.at(TokenKind::Identifier) && !scan.namespace && !self.at_declare_modifier() {
                progressed = true;
                scan.namespace = true;
                let qualifier = self.start();
                self.token_node(NodeKind::ReferenceExpression);

                if !conditional_compile && self.at(TokenKind::ColonColon) {
                    if let Some(namespace) = self.proceed_with_namespace_reference(qualifier, false)
                    {
                        let reference = namespace
                            .precede(self)
                            .done(self, NodeKind::ReferenceExpression);
                        reference
                            .precede(self)
                            .done(self, NodeKind::ConditionalCompileVariableReference);
                        conditional_compile = true;
                        scan.namespace = false;
                    }
                } else if !conditional_compile && self.at(TokenKind::Dot) {
                    self.parse_dotted_qualifier(qualifier);
                    scan.detached = self.has_newline_before();
                } else {
                    qualifier.abandon(self);
                    scan.detached = self.has_newline_before();
                }
            }

            while self.at_set(MODIFIERS)
                || self.at(TokenKind::Get)
                || self.at(TokenKind::Set)
                || self.at_declare_modifier()
            {
                metadata_closed = true;
                scan.modifiers = true;
                progressed = true;
                if self.at(TokenKind::Native) || self.at_declare_modifier() {
                    self.set_method_emptiness(Some(MethodEmptiness::Always));
                }
                self.bump();
            }

            if self.at_end() || !progressed {
                return true;
            }
        }
    }

    /// `declare` is a plain identifier unless another modifier or a
    /// declaration keyword follows it.
    fn at_declare_modifier(&self) -> bool {
        self.at(TokenKind::Identifier)
            && self.current_text() == "declare"
            && (MODIFIERS.contains(self.nth(1)) || is_attribute_list_owner(self.nth(1)))
    }

    /// `a.b.c` as a namespace qualifier; `qualifier` is open before `a`,
    /// which is already consumed.
    fn parse_dotted_qualifier(&mut self, mut qualifier: Marker) {
        while self.eat(TokenKind::Dot) {
            let named = self.at_set(IDENTIFIER_TOKENS);
            if named {
                self.bump();
            }
            qualifier = qualifier
                .done(self, NodeKind::ReferenceExpression)
                .precede(self);
            if !named {
                self.error(ParseErrorKind::ExpectedName);
                break;
            }
        }
        qualifier.abandon(self);
    }

    /// The arguments of a metadata attribute: `(name = value, "value", ..)`.
    ///
    /// A name directly followed by a string forms a pair without `=`, as in
    /// `[Event(click "handler")]`.
    fn parse_attribute_body(&mut self) {
        if !self.expect(TokenKind::LParen) {
            self.bump();
            return;
        }

        loop {
            if self.at(TokenKind::Comma) {
                self.error(ParseErrorKind::ExpectedIdentifierOrValue);
                break;
            }
            if self.at(TokenKind::RBracket) || self.at(TokenKind::RParen) {
                break;
            }

            let pair = self.start();
            let has_name = self.at_set(IDENTIFIER_NAMES);
            if has_name && self.nth(1) == TokenKind::StringLiteral {
                self.bump_n(2);
            } else {
                self.bump();
                if has_name && !self.at(TokenKind::Comma) && !self.at(TokenKind::RParen) {
                    self.expect(TokenKind::Eq);
                    self.parse_attribute_value();
                }
            }
            pair.done(self, NodeKind::AttributeNameValuePair);

            if !self.eat(TokenKind::Comma) {
                break;
            }
            if self.at_end() {
                self.error(ParseErrorKind::Expected(TokenKind::RParen));
                return;
            }
        }

        self.expect(TokenKind::RParen);
    }

    fn parse_attribute_value(&mut self) {
        match self.current_kind() {
            TokenKind::Comma | TokenKind::RBracket | TokenKind::RParen => {
                self.error(ParseErrorKind::ExpectedValue);
            }
            TokenKind::Identifier if self.nth(1) != TokenKind::StringLiteral => {
                if !self.parse_unary_expression() {
                    self.error(ParseErrorKind::ExpectedExpression);
                }
            }
            _ => self.bump(),
        }
    }

    /// `function name(params):Type { body }` after its attribute list.
    ///
    /// `function` itself may be absent for `get`/`set` accessors. Whether a
    /// body is required depends on the current method emptiness.
    pub(crate) fn parse_function_no_marker(&mut self, is_expression: bool, function: Marker) {
        let keyword_omitted = !self.eat(TokenKind::Function);

        if !self.parse_function_name(keyword_omitted, is_expression) {
            self.error(ParseErrorKind::ExpectedFunctionName);
        }
        self.parse_parameter_list(is_expression);
        self.try_parse_type();

        match self.method_emptiness() {
            None => {
                self.parse_block();
            }
            Some(MethodEmptiness::Always) => {
                if !self.eat(TokenKind::Semicolon) && self.at(TokenKind::LBrace) {
                    let error = if self.context().in_interface() {
                        ParseErrorKind::InterfaceFunctionBody
                    } else {
                        ParseErrorKind::AmbientFunctionBody
                    };
                    self.error(error);
                }
            }
            Some(MethodEmptiness::Possibly) => {
                if !self.eat(TokenKind::Semicolon) && self.at(TokenKind::LBrace) {
                    self.parse_block();
                }
            }
        }

        let kind = if is_expression {
            NodeKind::FunctionExpression
        } else {
            NodeKind::Function
        };
        function
            .done(self, kind)
            .bind_edges(self, LeftBinder::IncludeDocComment, RightBinder::Default);
    }

    /// Returns `false` if a required name is missing. Function expressions
    /// may be anonymous.
    fn parse_function_name(&mut self, keyword_omitted: bool, is_expression: bool) -> bool {
        if !is_expression
            && (self.at(TokenKind::Get) || self.at(TokenKind::Set))
            && PROPERTY_NAMES.contains(self.nth(1))
        {
            self.bump();
        }

        if self.at_set(IDENTIFIER_TOKENS) || (keyword_omitted && self.at_set(PROPERTY_NAMES)) {
            self.parse_possibly_qualified_name();
            true
        } else {
            is_expression
        }
    }

    /// A declaration name, possibly dotted (`a.b.f`).
    pub(crate) fn parse_possibly_qualified_name(&mut self) {
        let mut valid = self.at_set(IDENTIFIER_NAMES);
        let mut qualifier = self.start();
        self.bump();

        let mut chain = 0;
        while valid && self.at(TokenKind::Dot) {
            if self.within_depth(chain) {
                qualifier = qualifier
                    .done(self, NodeKind::ReferenceExpression)
                    .precede(self);
            }
            chain += 1;
            self.bump();
            valid = self.at_set(IDENTIFIER_NAMES);
            if !valid {
                self.error(ParseErrorKind::ExpectedIdentifier);
            }
            self.bump();
        }
        qualifier.abandon(self);
    }

    pub(crate) fn parse_function_expression(&mut self) {
        let function = self.start();
        self.parse_function_expression_attribute_list();
        self.parse_function_no_marker(true, function);
    }

    /// The attribute list of a function expression or accessor property:
    /// at most a `get` or `set`.
    pub(crate) fn parse_function_expression_attribute_list(&mut self) {
        let list = self.start();
        if self.at(TokenKind::Get) || self.at(TokenKind::Set) {
            self.bump();
        }
        list.done(self, NodeKind::AttributeList);
    }

    /// `(a, b:int = 1, ...rest)`. A function expression without `(` gets
    /// no `ParameterList` node.
    fn parse_parameter_list(&mut self, is_expression: bool) {
        if !self.at(TokenKind::LParen) {
            self.error(ParseErrorKind::Expected(TokenKind::LParen));
            if !is_expression {
                let list = self.start();
                list.done(self, NodeKind::ParameterList);
            }
            return;
        }

        let list = self.start();
        self.bump();
        let mut first = true;
        while !self.at(TokenKind::RParen) {
            if first {
                first = false;
            } else if !self.eat(TokenKind::Comma) {
                self.error(ParseErrorKind::ExpectedCommaOrRParen);
                break;
            }

            let parameter = self.start();
            if !self.eat(TokenKind::DotDotDot)
                && (self.at(TokenKind::Dot) || self.at(TokenKind::DotDot))
            {
                // `..args` or `.args`: an incomplete rest parameter.
                self.error(ParseErrorKind::ExpectedParameterName);
                while self.at(TokenKind::Dot) || self.at(TokenKind::DotDot) {
                    self.bump();
                }
            }
            self.parse_single_parameter(parameter);
        }
        self.eat(TokenKind::RParen);
        list.done(self, NodeKind::ParameterList);
    }

    fn parse_single_parameter(&mut self, parameter: Marker) {
        if self.at_set(IDENTIFIER_TOKENS) {
            self.bump();
            self.try_parse_type();
            if self.eat(TokenKind::Eq) && !self.parse_nested_assignment() {
                self.error(ParseErrorKind::ExpectedExpression);
            }
            parameter.done(self, NodeKind::Parameter);
        } else {
            self.error(ParseErrorKind::ExpectedFormalParameterName);
            if self.eat(TokenKind::Eq) {
                self.parse_nested_assignment();
            } else {
                self.try_parse_type();
            }
            parameter.abandon(self);
        }
    }

    /// A lone parameter, for fragment parsing.
    pub(crate) fn parse_parameter(&mut self) {
        let parameter = self.start();
        self.eat(TokenKind::DotDotDot);
        self.parse_single_parameter(parameter);
    }

    /// Parameters, return type and body of a method property; closes
    /// `marker` as `kind`.
    pub(crate) fn parse_parameter_list_and_body(&mut self, marker: Marker, kind: NodeKind) {
        self.parse_parameter_list(false);
        self.try_parse_type();
        self.parse_block();
        marker
            .done(self, kind)
            .bind_edges(self, LeftBinder::IncludeDocComment, RightBinder::Default);
    }
}
