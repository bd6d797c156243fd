#![allow(clippy::unwrap_used, clippy::expect_used)]

use flare_ir::NodeKind;
use pretty_assertions::assert_eq;

use crate::{parse_source, ParseOptions, ParseOutput};

fn parse(source: &str) -> ParseOutput {
    parse_source(source, &ParseOptions::default())
}

fn parse_ok(source: &str) -> ParseOutput {
    let output = parse(source);
    assert!(!output.has_errors(), "{source}: {:?}", output.errors);
    output
}

fn messages(output: &ParseOutput) -> Vec<&str> {
    output.errors.iter().map(|e| e.message.as_str()).collect()
}

fn count(output: &ParseOutput, kind: NodeKind) -> usize {
    output.tree.find_all(kind).len()
}

fn texts(output: &ParseOutput, kind: NodeKind) -> Vec<String> {
    output
        .tree
        .find_all(kind)
        .into_iter()
        .map(|n| output.tree.text(n))
        .collect()
}

// Operators

#[test]
fn test_multiplication_binds_tighter() {
    let output = parse_ok("a + b * c;");
    let expected = "\
File
  ExpressionStatement
    BinaryExpression
      ReferenceExpression
        \"a\"
      \"+\"
      BinaryExpression
        ReferenceExpression
          \"b\"
        \"*\"
        ReferenceExpression
          \"c\"
    \";\"
  \"\"
";
    assert_eq!(output.tree.compact_dump(), expected);
}

#[test]
fn test_binary_operators_associate_left() {
    let output = parse_ok("a - b - c;");
    assert_eq!(texts(&output, NodeKind::BinaryExpression), vec!["a - b - c", "a - b"]);
}

#[test]
fn test_exponent_associates_right() {
    let output = parse_ok("a ** b ** c;");
    assert_eq!(texts(&output, NodeKind::BinaryExpression), vec!["a ** b ** c", "b ** c"]);
}

#[test]
fn test_shift_operators_from_split_angles() {
    let output = parse_ok("a >>> b >> c;");
    assert_eq!(
        texts(&output, NodeKind::BinaryExpression),
        vec!["a >>> b >> c", "a >>> b"]
    );

    let output = parse_ok("a >= b;");
    assert_eq!(count(&output, NodeKind::BinaryExpression), 1);
}

#[test]
fn test_type_operators() {
    let output = parse_ok("ok = x is Foo && y as Bar != null && z instanceof Baz;");
    assert_eq!(count(&output, NodeKind::AssignmentExpression), 1);
    assert_eq!(count(&output, NodeKind::BinaryExpression), 5);
}

#[test]
fn test_assignments() {
    let output = parse_ok("a = b = 1;");
    assert_eq!(
        texts(&output, NodeKind::AssignmentExpression),
        vec!["a = b = 1", "b = 1"]
    );
    assert_eq!(texts(&output, NodeKind::DefinitionExpression), vec!["a", "b"]);

    let output = parse_ok("a >>= 2; b >>>= 3; c ||= d; e ??= f;");
    assert_eq!(count(&output, NodeKind::AssignmentExpression), 4);
    assert_eq!(count(&output, NodeKind::BinaryExpression), 0);
}

#[test]
fn test_assignment_without_target() {
    let output = parse("= 1;");
    assert_eq!(messages(&output), vec!["expected expression"]);
    assert_eq!(count(&output, NodeKind::AssignmentExpression), 1);
}

#[test]
fn test_conditional() {
    let output = parse_ok("x = a ? b : c;");
    assert_eq!(texts(&output, NodeKind::ConditionalExpression), vec!["a ? b : c"]);

    let output = parse("a ? b;");
    assert_eq!(messages(&output), vec!["expected ':'", "expected expression"]);
}

#[test]
fn test_comma_expression() {
    let output = parse_ok("a, b, c;");
    assert_eq!(
        texts(&output, NodeKind::CommaExpression),
        vec!["a, b, c", "a, b"]
    );
}

#[test]
fn test_prefix_and_postfix() {
    let output = parse_ok("delete o.p; typeof x; !a; -b; --j; i++;");
    assert_eq!(count(&output, NodeKind::PrefixExpression), 5);
    assert_eq!(count(&output, NodeKind::PostfixExpression), 1);
}

#[test]
fn test_increment_on_next_line_is_prefix() {
    let output = parse_ok("a\n++b");
    assert_eq!(count(&output, NodeKind::PostfixExpression), 0);
    assert_eq!(texts(&output, NodeKind::PrefixExpression), vec!["++b"]);
}

#[test]
fn test_missing_operand() {
    let output = parse("a + ;");
    assert_eq!(messages(&output), vec!["expected expression"]);
}

// Primaries

#[test]
fn test_literals() {
    let output = parse_ok("x = [1, \"s\", 'c', /re+/g, null, undefined, true, 0x1F];");
    assert_eq!(count(&output, NodeKind::LiteralExpression), 8);
}

#[test]
fn test_unclosed_string() {
    let output = parse("x = \"abc");
    assert_eq!(messages(&output), vec!["unclosed string literal"]);
}

#[test]
fn test_this_super_and_parentheses() {
    let output = parse_ok("this.x = super.y + (a, b);");
    assert_eq!(count(&output, NodeKind::ThisExpression), 1);
    assert_eq!(count(&output, NodeKind::SuperExpression), 1);
    assert_eq!(texts(&output, NodeKind::ParenthesizedExpression), vec!["(a, b)"]);

    let output = parse("();");
    assert_eq!(messages(&output), vec!["expected expression"]);
}

#[test]
fn test_namespace_qualified_names() {
    let output = parse_ok("ns::name; public::x; ns::*;");
    assert_eq!(count(&output, NodeKind::NamespaceReference), 2);
    assert_eq!(count(&output, NodeKind::ExpressionStatement), 3);
}

#[test]
fn test_attribute_references() {
    let output = parse_ok("x = @id; y = @ns::name; z = @[k]; w = @*;");
    assert_eq!(count(&output, NodeKind::NamespaceReference), 1);

    let output = parse("x = @;");
    assert_eq!(messages(&output), vec!["expected identifier"]);
}

// Postfix

#[test]
fn test_member_access_calls_and_indexing() {
    let output = parse_ok("a.b.c(1, 2)[0];");
    assert_eq!(texts(&output, NodeKind::CallExpression), vec!["a.b.c(1, 2)"]);
    assert_eq!(count(&output, NodeKind::IndexedPropertyAccessExpression), 1);
    assert_eq!(count(&output, NodeKind::ArgumentList), 1);
    assert_eq!(count(&output, NodeKind::ReferenceExpression), 3);
}

#[test]
fn test_e4x_accessors() {
    let output = parse_ok("x.@id; x..item; x.(@id == 1); x.ns::name; x.@[k]; x.*;");
    assert_eq!(count(&output, NodeKind::FilterQueryArgumentList), 1);
    assert_eq!(texts(&output, NodeKind::CallExpression), vec!["x.(@id == 1)"]);
    assert_eq!(count(&output, NodeKind::NamespaceReference), 1);
    assert_eq!(count(&output, NodeKind::IndexedPropertyAccessExpression), 1);
}

#[test]
fn test_missing_member_name() {
    let output = parse("a.;");
    assert_eq!(messages(&output), vec!["expected name"]);
}

#[test]
fn test_argument_errors() {
    let output = parse("f(a b);");
    assert_eq!(messages(&output)[0], "expected ',' or ')'");

    let output = parse("f(a,);");
    assert_eq!(messages(&output), vec!["expected expression"]);
}

#[test]
fn test_new_expressions() {
    let output = parse_ok("new Foo(); new a.b.C; new Vector.<int>();");
    assert_eq!(
        texts(&output, NodeKind::NewExpression),
        vec!["new Foo()", "new a.b.C", "new Vector.<int>()"]
    );
    assert_eq!(count(&output, NodeKind::GenericSignature), 1);
}

#[test]
fn test_vector_literal() {
    let output = parse_ok("v = new <int>[1, 2];");
    assert_eq!(texts(&output, NodeKind::NewExpression), vec!["new <int>[1, 2]"]);
    assert_eq!(count(&output, NodeKind::ArrayLiteralExpression), 1);

    let output = parse("v = new <int>[, 1];");
    assert_eq!(messages(&output), vec!["expected expression"]);

    let output = parse("v = new <int>;");
    assert_eq!(messages(&output), vec!["expected '['"]);
}

#[test]
fn test_new_function() {
    let output = parse_ok("o = new function() {};");
    assert_eq!(count(&output, NodeKind::NewExpression), 1);
    assert_eq!(count(&output, NodeKind::FunctionExpression), 1);
}

// Array and object literals

#[test]
fn test_array_holes() {
    let output = parse_ok("x = [1, , 2];");
    assert_eq!(count(&output, NodeKind::EmptyExpression), 1);

    let output = parse("x = [1 2];");
    assert_eq!(messages(&output), vec!["expected ','"]);
}

#[test]
fn test_object_literal_properties() {
    let output = parse_ok(
        "x = {a: 1, \"b\": 2, 3: c, [k]: v, m() {}, get p() { return 1; }, ...rest, short};",
    );
    assert_eq!(count(&output, NodeKind::Property), 5);
    assert_eq!(count(&output, NodeKind::FunctionProperty), 2);
    assert_eq!(count(&output, NodeKind::SpreadExpression), 1);
    assert_eq!(count(&output, NodeKind::ComputedName), 1);
}

#[test]
fn test_object_literal_missing_comma() {
    let output = parse("x = {a: 1 b: 2};");
    assert_eq!(messages(&output), vec!["expected ','"]);
    assert_eq!(count(&output, NodeKind::Property), 2);
}

#[test]
fn test_object_literal_bad_property() {
    let output = parse("x = {a: 1, +};");
    assert_eq!(
        messages(&output)[0],
        "expected identifier, string literal or numeric literal"
    );
}

#[test]
fn test_incomplete_property_on_its_own_line() {
    let output = parse("x = {\n    a\n    b: 1\n};");
    assert_eq!(messages(&output), vec!["expected ','"]);
    assert_eq!(count(&output, NodeKind::Property), 2);
}

// Depth

#[test]
fn test_deep_parentheses_are_bounded() {
    let source = format!("x = {}1{};", "(".repeat(1000), ")".repeat(1000));
    let output = parse(&source);
    assert!(messages(&output).contains(&"maximum nesting depth exceeded"));
    assert_eq!(output.tree.text(output.tree.root()), source);
}
