//! Parse error types.
//!
//! The parser never fails: every problem becomes an `Error` node in the
//! tree carrying one of the messages below. [`SyntaxError`] is the
//! host-facing view of those nodes, collected after the tree is built.

use flare_ir::{Span, SyntaxTree, TokenKind};
use thiserror::Error;

/// What went wrong at an error node.
///
/// Rendered to the fixed message stored in the tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A specific punctuation or keyword token is missing.
    #[error("expected '{0}'")]
    Expected(TokenKind),
    #[error("expected expression")]
    ExpectedExpression,
    #[error("expected statement")]
    ExpectedStatement,
    #[error("expected declaration")]
    ExpectedDeclaration,
    #[error("expected identifier")]
    ExpectedIdentifier,
    #[error("expected name")]
    ExpectedName,
    #[error("expected type name")]
    ExpectedTypeName,
    #[error("expected type name or *")]
    ExpectedTypeNameOrStar,
    #[error("dot expected")]
    DotExpected,
    #[error("expected function name")]
    ExpectedFunctionName,
    #[error("expected parameter name")]
    ExpectedParameterName,
    #[error("expected formal parameter name")]
    ExpectedFormalParameterName,
    #[error("expected ',' or ')'")]
    ExpectedCommaOrRParen,
    #[error("expected variable name")]
    ExpectedVariableName,
    #[error("expected newline or semicolon")]
    ExpectedNewlineOrSemicolon,
    #[error("expected property name")]
    ExpectedPropertyName,
    #[error("expected identifier, string literal or numeric literal")]
    ExpectedPropertyStart,
    #[error("expected ':' or ','")]
    ExpectedColonOrComma,
    #[error("expected case or default")]
    ExpectedCaseOrDefault,
    #[error("expected left-hand side expression or variable declaration")]
    ExpectedForLoopTarget,
    #[error("expected 'in' or ';'")]
    ExpectedInOrSemicolon,
    #[error("expected xml")]
    ExpectedXml,
    #[error("expected string literal")]
    ExpectedStringLiteral,
    #[error("expected name or '{{'")]
    ExpectedNameOrLBrace,
    #[error("expected identifier or value")]
    ExpectedIdentifierOrValue,
    #[error("expected value")]
    ExpectedValue,
    #[error("expected tag name")]
    ExpectedTagName,
    #[error("unexpected token in tag")]
    UnexpectedInTag,
    #[error("unexpected end of file")]
    UnexpectedEof,
    #[error("missing '}}'")]
    MissingRBrace,
    #[error("unexpected tokens")]
    UnexpectedTokens,
    #[error("unclosed string literal")]
    UnclosedString,
    #[error("interface should have no variable declarations")]
    InterfaceVariable,
    #[error("interface function declaration should have no body")]
    InterfaceFunctionBody,
    #[error("ambient declaration should have no body")]
    AmbientFunctionBody,
    #[error("maximum nesting depth exceeded")]
    DepthExceeded,
    #[error("element '{0}' is not closed")]
    UnclosedElement(String),
    #[error("closing tag matches nothing")]
    UnmatchedClosingTag,
}

/// A syntax error reported to the host.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub message: String,
    /// Range of the tokens the error node wraps; empty for errors that
    /// only mark a position.
    pub span: Span,
}

impl SyntaxError {
    /// Collect the error nodes of `tree`, in source order.
    pub fn collect(tree: &SyntaxTree) -> Vec<SyntaxError> {
        tree.errors()
            .map(|(message, span)| SyntaxError {
                message: message.to_owned(),
                span,
            })
            .collect()
    }
}
