#![allow(clippy::unwrap_used, clippy::expect_used)]

use flare_ir::NodeKind;
use pretty_assertions::assert_eq;

use crate::{parse_source, ForceContext, ParseOptions, ParseOutput};

fn parse_type(source: &str) -> ParseOutput {
    parse_source(
        source,
        &ParseOptions::default().with_force_context(ForceContext::Type),
    )
}

fn messages(output: &ParseOutput) -> Vec<&str> {
    output.errors.iter().map(|e| e.message.as_str()).collect()
}

#[test]
fn test_primitive_and_any_types() {
    for source in ["int", "uint", "void", "*"] {
        let output = parse_type(source);
        assert!(!output.has_errors(), "{source}");
        let expected = format!("File\n  Type\n    {source:?}\n  \"\"\n");
        assert_eq!(output.tree.compact_dump(), expected);
    }
}

#[test]
fn test_qualified_name_nests_left() {
    let output = parse_type("a.b.c");
    assert!(!output.has_errors());
    let expected = "\
File
  Type
    ReferenceExpression
      ReferenceExpression
        ReferenceExpression
          \"a\"
        \".\"
        \"b\"
      \".\"
      \"c\"
  \"\"
";
    assert_eq!(output.tree.compact_dump(), expected);
}

#[test]
fn test_generic_signature() {
    let output = parse_type("Vector.<int>");
    assert!(!output.has_errors());
    let expected = "\
File
  Type
    ReferenceExpression
      ReferenceExpression
        \"Vector\"
      \".\"
      GenericSignature
        \"<\"
        Type
          \"int\"
        \">\"
  \"\"
";
    assert_eq!(output.tree.compact_dump(), expected);
}

#[test]
fn test_nested_generic_signatures_split_closing_angles() {
    let output = parse_type("Vector.<Vector.<String>>");
    assert!(!output.has_errors());
    assert_eq!(output.tree.find_all(NodeKind::GenericSignature).len(), 2);
}

#[test]
fn test_generic_signature_takes_one_argument() {
    let output = parse_type("Vector.<int, String>");
    let signature = output.tree.find_all(NodeKind::GenericSignature)[0];
    let types: Vec<_> = output
        .tree
        .child_nodes(signature)
        .filter(|&n| output.tree.kind(n) == NodeKind::Type)
        .collect();
    assert_eq!(types.len(), 1);

    let comma = output.tree.source().find(',').unwrap() as u32;
    assert_eq!(output.errors[0].message, "expected '>'");
    assert_eq!(output.errors[0].span.start, comma);
}

#[test]
fn test_missing_dot_before_generic() {
    let output = parse_type("Vector<int>");
    assert_eq!(messages(&output), vec!["dot expected"]);
    assert_eq!(output.tree.find_all(NodeKind::GenericSignature).len(), 1);
}

#[test]
fn test_missing_type() {
    let output = parse_type("");
    assert_eq!(messages(&output), vec!["expected type name or *"]);
    assert_eq!(output.tree.find_all(NodeKind::Type).len(), 1);
}

#[test]
fn test_type_allow_empty() {
    let output = parse_source(
        "",
        &ParseOptions::default().with_force_context(ForceContext::TypeAllowEmpty),
    );
    assert!(!output.has_errors());
    assert_eq!(output.tree.compact_dump(), "File\n  \"\"\n");
}

#[test]
fn test_trailing_tokens_after_type() {
    let output = parse_type("int x y");
    assert_eq!(messages(&output), vec!["unexpected tokens"]);
    let error = output.tree.find_all(NodeKind::Error)[0];
    assert_eq!(output.tree.text(error), "x y");
}

#[test]
fn test_dot_without_name() {
    let output = parse_type("a.");
    assert_eq!(messages(&output), vec!["expected name"]);
}

#[test]
fn test_nullable_suffix_in_annotation() {
    let output = parse_source("var x:String? = null;", &ParseOptions::default());
    assert!(!output.has_errors(), "{:?}", output.errors);
    assert_eq!(output.tree.find_all(NodeKind::Type).len(), 1);
}
