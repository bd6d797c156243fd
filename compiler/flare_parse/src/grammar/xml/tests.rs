#![allow(clippy::unwrap_used, clippy::expect_used)]

use flare_ir::NodeKind;
use pretty_assertions::assert_eq;

use crate::{parse_source, ParseOptions, ParseOutput};

fn parse(source: &str) -> ParseOutput {
    parse_source(source, &ParseOptions::default())
}

fn messages(output: &ParseOutput) -> Vec<&str> {
    output.errors.iter().map(|e| e.message.as_str()).collect()
}

#[test]
fn test_element_with_attribute_and_text() {
    let output = parse(r#"x = <a b="1">hi</a>;"#);
    assert!(!output.has_errors(), "{:?}", output.errors);
    let expected = r#"File
  ExpressionStatement
    AssignmentExpression
      DefinitionExpression
        ReferenceExpression
          "x"
      "="
      XmlLiteralExpression
        "<"
        "a"
        XmlAttribute
          "b"
          "="
          XmlAttributeValue
            "\"1\""
        ">"
        XmlText
          "hi"
        "</"
        "a"
        ">"
    ";"
  ""
"#;
    assert_eq!(output.tree.compact_dump(), expected);
}

#[test]
fn test_nested_tags() {
    let output = parse("x = <a><b/><c>t</c></a>;");
    assert!(!output.has_errors(), "{:?}", output.errors);
    assert_eq!(output.tree.find_all(NodeKind::XmlLiteralExpression).len(), 1);
    assert_eq!(output.tree.find_all(NodeKind::XmlTag).len(), 2);
}

#[test]
fn test_xml_list() {
    let output = parse("x = <><a/><b/></>;");
    assert!(!output.has_errors(), "{:?}", output.errors);
    let literal = output.tree.find_all(NodeKind::XmlLiteralExpression)[0];
    assert_eq!(output.tree.text(literal), "<><a/><b/></>");
}

#[test]
fn test_splices() {
    let output = parse("x = <{tag} id={n + 1}>{value}</{tag}>;");
    assert!(!output.has_errors(), "{:?}", output.errors);
    assert_eq!(output.tree.find_all(NodeKind::EmbeddedExpression).len(), 4);
    assert_eq!(output.tree.find_all(NodeKind::XmlAttribute).len(), 1);
}

#[test]
fn test_comments_cdata_and_instructions_stay_leaves() {
    let output = parse("x = <a><!-- c --><![CDATA[<raw>]]><?pi x?></a>;");
    assert!(!output.has_errors(), "{:?}", output.errors);
    assert!(output.tree.find_all(NodeKind::XmlText).is_empty());
    assert!(output.tree.find_all(NodeKind::XmlTag).is_empty());
}

#[test]
fn test_unclosed_child_closed_by_ancestor() {
    let output = parse("x = <a><b></a>");
    assert_eq!(messages(&output), vec!["element 'b' is not closed"]);

    let a = output.tree.find_all(NodeKind::XmlLiteralExpression)[0];
    let b = output.tree.find_all(NodeKind::XmlTag)[0];
    assert_eq!(output.tree.text(a), "<a><b></a>");
    assert_eq!(output.tree.text(b), "<b>");
}

#[test]
fn test_code_after_ancestor_close_still_parses() {
    let output = parse("x = <a><b></a>; var y = 1;");
    assert_eq!(messages(&output), vec!["element 'b' is not closed"]);
    assert_eq!(output.tree.find_all(NodeKind::VarStatement).len(), 1);
}

#[test]
fn test_closing_tag_matching_nothing() {
    let output = parse("x = <a></b>;");
    assert_eq!(messages(&output), vec!["closing tag matches nothing"]);
    let a = output.tree.find_all(NodeKind::XmlLiteralExpression)[0];
    assert_eq!(output.tree.text(a), "<a></b>");
}

#[test]
fn test_unterminated_element_at_eof() {
    let output = parse("x = <a>text");
    assert_eq!(messages(&output), vec!["element 'a' is not closed"]);
    assert_eq!(output.tree.find_all(NodeKind::XmlText).len(), 1);
}

#[test]
fn test_incomplete_start_tag() {
    let output = parse("x = <a b=\"1\"");
    assert_eq!(messages(&output), vec!["expected '>'"]);
    assert_eq!(output.tree.find_all(NodeKind::XmlAttribute).len(), 1);
}

#[test]
fn test_attribute_without_value() {
    let output = parse("x = <a b=/>;");
    assert_eq!(messages(&output), vec!["expected value"]);
}

#[test]
fn test_attribute_without_eq() {
    let output = parse("x = <a b/>;");
    assert_eq!(messages(&output), vec!["expected '='"]);
}

#[test]
fn test_unclosed_splice_skips_to_closing_brace() {
    let output = parse("x = <a>{b c}</a>;");
    assert_eq!(messages(&output), vec!["expected '}'"]);
    let splice = output.tree.find_all(NodeKind::EmbeddedExpression)[0];
    assert_eq!(output.tree.text(splice), "{b c}");
    assert_eq!(output.tree.find_all(NodeKind::XmlLiteralExpression).len(), 1);
}

#[test]
fn test_xml_after_return() {
    let output = parse("function f() { return <a/>; }");
    assert!(!output.has_errors(), "{:?}", output.errors);
    assert_eq!(output.tree.find_all(NodeKind::XmlLiteralExpression).len(), 1);
}

#[test]
fn test_less_than_is_not_xml() {
    let output = parse("if (a <b) c();");
    assert!(!output.has_errors(), "{:?}", output.errors);
    assert!(output.tree.find_all(NodeKind::XmlLiteralExpression).is_empty());
}

#[test]
fn test_deep_nesting_hits_depth_limit() {
    let open = "<a>".repeat(40);
    let close = "</a>".repeat(40);
    let source = format!("x = {open}{close};");
    let output = parse_source(&source, &ParseOptions::default().with_max_tree_depth(20));
    assert!(messages(&output).contains(&"maximum nesting depth exceeded"));
    assert_eq!(output.tree.text(output.tree.root()), source);
}
