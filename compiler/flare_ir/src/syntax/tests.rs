use pretty_assertions::assert_eq;

use super::*;
use crate::{Span, Token, TokenKind, TokenList};

/// `x = 1` with trivia, built by hand.
fn sample() -> SyntaxTree {
    let source = "x = 1";
    let tokens = TokenList::from_tokens(
        vec![
            Token::new(TokenKind::Identifier, Span::new(0, 1)),
            Token::new(TokenKind::Whitespace, Span::new(1, 2)),
            Token::new(TokenKind::Eq, Span::new(2, 3)),
            Token::new(TokenKind::Whitespace, Span::new(3, 4)),
            Token::new(TokenKind::NumericLiteral, Span::new(4, 5)),
            Token::new(TokenKind::Eof, Span::new(5, 5)),
        ],
        source,
    );
    let mut builder = TreeBuilder::new(source, &tokens);
    builder.start_node(NodeKind::File);
    builder.start_node(NodeKind::AssignmentExpression);
    builder.start_node(NodeKind::ReferenceExpression);
    builder.token(0);
    builder.finish_node();
    builder.token(1);
    builder.token(2);
    builder.token(3);
    builder.start_node(NodeKind::LiteralExpression);
    builder.token(4);
    builder.finish_node();
    builder.start_error("expected ';'");
    builder.finish_node();
    builder.finish_node();
    builder.token(5);
    builder.finish_node();
    builder.finish()
}

#[test]
fn test_text_is_lossless() {
    let tree = sample();
    assert_eq!(tree.text(tree.root()), "x = 1");
    assert_eq!(tree.token_leaf_count(), 6);
}

#[test]
fn test_ranges() {
    let tree = sample();
    let assign = tree.find_all(NodeKind::AssignmentExpression)[0];
    assert_eq!(tree.text_range(assign), Span::new(0, 5));
    let error = tree.find_all(NodeKind::Error)[0];
    assert_eq!(tree.text_range(error), Span::point(5));
}

#[test]
fn test_errors_in_source_order() {
    let tree = sample();
    let errors: Vec<_> = tree.errors().collect();
    assert_eq!(errors, vec![("expected ';'", Span::point(5))]);
}

#[test]
fn test_compact_dump_skips_trivia() {
    let tree = sample();
    let expected = "\
File
  AssignmentExpression
    ReferenceExpression
      \"x\"
    \"=\"
    LiteralExpression
      \"1\"
    Error \"expected ';'\"
  \"\"
";
    assert_eq!(tree.compact_dump(), expected);
}

#[test]
fn test_debug_dump_has_spans_and_trivia() {
    let tree = sample();
    let dump = tree.debug_dump();
    assert!(dump.starts_with("File@0..5\n"));
    assert!(dump.contains("Whitespace@1..2 \" \""));
}

#[test]
fn test_descendants_preorder() {
    let tree = sample();
    let kinds: Vec<_> = tree
        .descendants(tree.root())
        .map(|id| tree.kind(id))
        .collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::File,
            NodeKind::AssignmentExpression,
            NodeKind::ReferenceExpression,
            NodeKind::LiteralExpression,
            NodeKind::Error,
        ]
    );
}

#[test]
fn test_empty_builder_yields_file_root() {
    let tokens = TokenList::new();
    let tree = TreeBuilder::new("", &tokens).finish();
    assert_eq!(tree.kind(tree.root()), NodeKind::File);
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.text(tree.root()), "");
}
