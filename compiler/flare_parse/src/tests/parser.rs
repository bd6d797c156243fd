#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use flare_ir::NodeKind;
use pretty_assertions::assert_eq;

use crate::{parse, parse_source, ForceContext, ParseOptions, ParseOutput};

fn parse_file(source: &str) -> ParseOutput {
    parse_source(source, &ParseOptions::default())
}

fn count(output: &ParseOutput, kind: NodeKind) -> usize {
    output.tree.find_all(kind).len()
}

fn assert_lossless(source: &str, output: &ParseOutput) {
    assert_eq!(output.tree.text(output.tree.root()), source);
    assert_eq!(
        output.tree.token_leaf_count(),
        output.tree.tokens().len(),
        "every token is a leaf exactly once: {source:?}"
    );
}

const WIDGET: &str = r#"package com.example.ui {
    import flash.events.Event;
    import mx.core.*;

    use namespace mx_internal;

    [Event(name="change", type="flash.events.Event")]
    /**
     * A labelled widget.
     */
    public class Widget extends Base implements IOne, ITwo {
        private static const MAX:int = 10;
        protected var items:Vector.<String> = new Vector.<String>();

        public function Widget(name:String = "w", ...rest) {
            super(name);
            for each (var item:* in rest) {
                items.push(String(item));
            }
        }

        override public function get label():String {
            return items.length > 0 ? items[0] : "";
        }

        mx_internal function render():XML {
            var x:XML = <widget id={MAX}><label>{label}</label></widget>;
            return x;
        }
    }
}
"#;

#[test]
fn test_class_file() {
    let output = parse_file(WIDGET);
    assert!(!output.has_errors(), "{:?}", output.errors);
    assert_lossless(WIDGET, &output);

    assert_eq!(count(&output, NodeKind::PackageStatement), 1);
    assert_eq!(count(&output, NodeKind::ImportStatement), 2);
    assert_eq!(count(&output, NodeKind::UseNamespaceDirective), 1);
    assert_eq!(count(&output, NodeKind::Class), 1);
    assert_eq!(count(&output, NodeKind::Function), 3);
    assert_eq!(count(&output, NodeKind::ForInStatement), 1);
    assert_eq!(count(&output, NodeKind::XmlLiteralExpression), 1);

    let class = output.tree.find_all(NodeKind::Class)[0];
    let text = output.tree.text(class);
    assert!(text.starts_with("[Event"), "{text}");
    assert_eq!(count(&output, NodeKind::ReferenceListMember), 3);
}

#[test]
fn test_interface_file() {
    let source = "package {\n    public interface IShape extends IBase {\n        function area():Number;\n        function get name():String;\n    }\n}\n";
    let output = parse_file(source);
    assert!(!output.has_errors(), "{:?}", output.errors);
    assert_lossless(source, &output);
    assert_eq!(count(&output, NodeKind::Function), 2);
    assert_eq!(count(&output, NodeKind::BlockStatement), 1);
}

#[test]
fn test_script_statements() {
    let source = "\
var total:int = 0;
for (var i:int = 0; i < 10; i++) {
    if (i % 2 == 0) continue;
    total += i;
}
outer: while (true) {
    switch (total) {
        case 0:
            break outer;
        default:
            total--;
    }
}
try {
    risky();
} catch (e:Error) {
    trace(e.message);
} finally {
    done = true;
}
";
    let output = parse_file(source);
    assert!(!output.has_errors(), "{:?}", output.errors);
    assert_lossless(source, &output);
    assert_eq!(count(&output, NodeKind::ForStatement), 1);
    assert_eq!(count(&output, NodeKind::LabeledStatement), 1);
    assert_eq!(count(&output, NodeKind::CaseClause), 2);
    assert_eq!(count(&output, NodeKind::CatchBlock), 1);
}

#[test]
fn test_recovery_continues_with_next_declaration() {
    let source = "var = 1;\nfunction f() {}\nclass A { ) }\nvar ok = 2;";
    let output = parse_file(source);
    assert!(output.has_errors());
    assert_lossless(source, &output);
    assert_eq!(count(&output, NodeKind::Function), 1);
    assert_eq!(count(&output, NodeKind::Class), 1);
    let last = output.tree.find_all(NodeKind::VarStatement).pop().unwrap();
    assert_eq!(output.tree.text(last), "var ok = 2;");
}

#[test]
fn test_malformed_inputs_stay_lossless() {
    let inputs = [
        "",
        "}",
        ")))",
        "{{{",
        "class",
        "class {",
        "function",
        "function f(",
        "function f(a:, b",
        "var x:Vector.<",
        "if (",
        "for (var i in",
        "for (;;",
        "switch (x) { foo }",
        "x = <a><b></a>",
        "x = <a b=",
        "x = <a>{",
        "x = {a: ,}",
        "[Meta(",
        "CONFIG::",
        "package a. {",
        "import ;",
        "namespace",
        "a.@",
        "new <int>",
        "/* unterminated",
        "\"unterminated",
        "@@@ ### $$$",
        "\u{feff}var x;",
        "var \u{e9}l\u{e8}ve = \"caf\u{e9}\";",
    ];
    for source in inputs {
        let output = parse_file(source);
        assert_lossless(source, &output);
        for error in &output.errors {
            assert!(
                error.span.to_range().end <= source.len(),
                "{source:?}: {error:?}"
            );
        }
    }
}

#[test]
fn test_errors_follow_source_order() {
    let source = "var = 1;\nx = (;\nif a {}";
    let output = parse_file(source);
    let starts: Vec<_> = output.errors.iter().map(|e| e.span.to_range().start).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted);
    assert!(output.errors.len() >= 3, "{:?}", output.errors);
}

#[test]
fn test_wrapped_error_span_covers_token() {
    let source = "var x; )";
    let output = parse_file(source);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].span.to_range(), 7..8);
    assert_eq!(output.errors[0].to_string(), output.errors[0].message);
}

#[test]
fn test_parse_with_prelexed_tokens() {
    let source = "var x = <a/>;";
    let tokens = flare_lexer::lex(source);
    let output = parse(source, &tokens, &ParseOptions::default());
    assert_eq!(
        output.tree.compact_dump(),
        parse_file(source).tree.compact_dump()
    );
}

#[test]
fn test_root_kind_option() {
    let options = ParseOptions::default().with_root_kind(NodeKind::BlockStatement);
    let output = parse_source("x = 1;", &options);
    assert_eq!(output.tree.kind(output.tree.root()), NodeKind::BlockStatement);
    assert_eq!(count(&output, NodeKind::ExpressionStatement), 1);
}

#[test]
fn test_type_fragments() {
    let options = ParseOptions::default().with_force_context(ForceContext::Type);
    let output = parse_source("Vector.<int> extra", &options);
    let messages: Vec<_> = output.errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["unexpected tokens"]);
    assert_eq!(count(&output, NodeKind::GenericSignature), 1);

    let options = ParseOptions::default().with_force_context(ForceContext::TypeAllowEmpty);
    let output = parse_source("", &options);
    assert!(!output.has_errors());
    assert_eq!(count(&output, NodeKind::Type), 0);
}

#[test]
fn test_explicit_depth_overrides_default() {
    let source = format!("x = {}1{};", "[".repeat(15), "]".repeat(15));
    assert!(!parse_file(&source).has_errors());

    let output = parse_source(&source, &ParseOptions::default().with_max_tree_depth(10));
    assert!(output
        .errors
        .iter()
        .any(|e| e.message == "maximum nesting depth exceeded"));
    assert_lossless(&source, &output);
}

#[test]
fn test_deeply_nested_blocks_do_not_overflow() {
    let source = format!("{}{}", "{".repeat(5000), "}".repeat(5000));
    let output = parse_file(&source);
    assert!(output.has_errors());
    assert_lossless(&source, &output);
}

#[test]
fn test_large_generated_file() {
    let source = "x = a.b.c(d) + e[f] * g;\n".repeat(20_000);
    let output = parse_file(&source);
    assert!(!output.has_errors(), "{:?}", &output.errors[..1]);
    assert_lossless(&source, &output);
    assert_eq!(count(&output, NodeKind::ExpressionStatement), 20_000);
}
