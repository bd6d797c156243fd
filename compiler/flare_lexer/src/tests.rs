use flare_ir::{TokenFlags, TokenKind};
use pretty_assertions::assert_eq;

use super::lex;

/// Significant token kinds, without trivia and the trailing `Eof`.
fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source)
        .iter()
        .map(|t| t.kind)
        .filter(|k| !k.is_trivia() && *k != TokenKind::Eof)
        .collect()
}

fn texts(source: &str) -> Vec<&str> {
    lex(source)
        .iter()
        .filter(|t| !t.kind.is_trivia() && t.kind != TokenKind::Eof)
        .map(|t| t.text(source))
        .collect()
}

#[test]
fn test_simple_statement() {
    use TokenKind::*;
    assert_eq!(
        kinds("var x = 1;"),
        vec![Var, Identifier, Eq, NumericLiteral, Semicolon]
    );
}

#[test]
fn test_empty_source_is_just_eof() {
    let tokens = lex("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens.kind(0), TokenKind::Eof);
}

#[test]
fn test_eof_is_point_at_end() {
    let source = "a + b ";
    let tokens = lex(source);
    let last = tokens[tokens.len() - 1];
    assert_eq!(last.kind, TokenKind::Eof);
    assert_eq!(last.span.start, 6);
    assert!(last.span.is_empty());
}

#[test]
fn test_lossless_concatenation() {
    let source = "/** doc */\npackage a.b {\n  // line\n  public class C extends D {\n    var x:int = 0x1F; /* c */\n    function f() { return <a b=\"1\">t{x}</a>; }\n  }\n}\n#";
    let tokens = lex(source);
    let joined: String = tokens.iter().map(|t| t.text(source)).collect();
    assert_eq!(joined, source);
}

#[test]
fn test_comment_kinds() {
    let source = "/** doc */ /* block */ /**/ // line";
    let trivia: Vec<TokenKind> = lex(source)
        .iter()
        .map(|t| t.kind)
        .filter(|k| *k != TokenKind::Whitespace && *k != TokenKind::Eof)
        .collect();
    assert_eq!(
        trivia,
        vec![
            TokenKind::DocComment,
            TokenKind::BlockComment,
            TokenKind::BlockComment,
            TokenKind::LineComment,
        ]
    );
}

#[test]
fn test_unterminated_block_comment_runs_to_end() {
    let source = "a /* never closed";
    let tokens = lex(source);
    assert_eq!(tokens.kind(2), TokenKind::BlockComment);
    assert_eq!(tokens[2].text(source), "/* never closed");
}

#[test]
fn test_keywords_and_identifiers() {
    use TokenKind::*;
    assert_eq!(
        kinds("function get set each $x _y instanceof"),
        vec![Function, Get, Set, Each, Identifier, Identifier, Instanceof]
    );
}

#[test]
fn test_regexp_where_expression_allowed() {
    let source = "x = /ab+c/gi;";
    use TokenKind::*;
    assert_eq!(kinds(source), vec![Identifier, Eq, RegexpLiteral, Semicolon]);
    assert_eq!(texts(source)[2], "/ab+c/gi");
}

#[test]
fn test_regexp_class_may_contain_slash() {
    let source = "(/[/]x/)";
    assert_eq!(texts(source), vec!["(", "/[/]x/", ")"]);
}

#[test]
fn test_regexp_stops_at_newline() {
    let source = "= /abc\nd";
    assert_eq!(texts(source), vec!["=", "/abc", "d"]);
}

#[test]
fn test_division_after_operand() {
    use TokenKind::*;
    assert_eq!(kinds("a / b"), vec![Identifier, Slash, Identifier]);
    assert_eq!(kinds("a /= 2"), vec![Identifier, SlashEq, NumericLiteral]);
    assert_eq!(kinds("f() / 2"), vec![Identifier, LParen, RParen, Slash, NumericLiteral]);
    assert_eq!(kinds("get / 2"), vec![Get, Slash, NumericLiteral]);
}

#[test]
fn test_greater_than_is_never_merged() {
    let source = "a >>>= b";
    let tokens = lex(source);
    use TokenKind::*;
    assert_eq!(kinds(source), vec![Identifier, Gt, Gt, Gt, Eq, Identifier]);
    // a, ws, >, >, >, =
    assert!(tokens.flags(2).contains(TokenFlags::TRIVIA_BEFORE));
    assert!(tokens.flags(3).contains(TokenFlags::ADJACENT));
    assert!(tokens.flags(4).contains(TokenFlags::ADJACENT));
    assert!(tokens.flags(5).contains(TokenFlags::ADJACENT));
}

#[test]
fn test_newline_flag() {
    let tokens = lex("a\nb");
    assert!(tokens.flags(2).contains(TokenFlags::NEWLINE_BEFORE));
    assert!(!tokens.flags(0).contains(TokenFlags::NEWLINE_BEFORE));
}

#[test]
fn test_strings_and_unterminated_string() {
    use TokenKind::*;
    assert_eq!(kinds(r#"'a\'b' "c""#), vec![StringLiteral, StringLiteral]);
    let source = "\"abc\nx";
    assert_eq!(texts(source), vec!["\"abc", "x"]);
    assert_eq!(kinds(source), vec![StringLiteral, Identifier]);
}

#[test]
fn test_numbers() {
    assert_eq!(texts("1 2.5 .5 1e10 0xFF"), vec!["1", "2.5", ".5", "1e10", "0xFF"]);
}

#[test]
fn test_unknown_characters_are_errors() {
    let source = "a # é";
    use TokenKind::*;
    assert_eq!(kinds(source), vec![Identifier, Error, Error]);
    assert_eq!(texts(source), vec!["a", "#", "é"]);
}

#[test]
fn test_less_than_after_operand() {
    use TokenKind::*;
    assert_eq!(kinds("a < b"), vec![Identifier, Lt, Identifier]);
    assert_eq!(kinds("a <b"), vec![Identifier, Lt, Identifier]);
}

#[test]
fn test_generic_signature_is_not_xml() {
    use TokenKind::*;
    assert_eq!(
        kinds("Vector.<int>"),
        vec![Identifier, Dot, Lt, Int, Gt]
    );
    assert_eq!(
        kinds("new <int>[1]"),
        vec![New, Lt, Int, Gt, LBracket, NumericLiteral, RBracket]
    );
}

#[test]
fn test_xml_literal_with_splice() {
    use TokenKind::*;
    assert_eq!(
        kinds(r#"x = <a b="1">t{y}</a>;"#),
        vec![
            Identifier,
            Eq,
            XmlStartTagStart,
            XmlName,
            XmlName,
            XmlEq,
            XmlAttrValue,
            XmlTagEnd,
            XmlText,
            XmlLBrace,
            Identifier,
            XmlRBrace,
            XmlEndTagStart,
            XmlName,
            XmlTagEnd,
            Semicolon,
        ]
    );
}

#[test]
fn test_xml_empty_tag_returns_to_script() {
    use TokenKind::*;
    assert_eq!(
        kinds("return <a/> + 1"),
        vec![Return, XmlStartTagStart, XmlName, XmlEmptyTagEnd, Plus, NumericLiteral]
    );
}

#[test]
fn test_xml_nested_elements() {
    use TokenKind::*;
    assert_eq!(
        kinds("(<a><b/><c>x</c></a>)"),
        vec![
            LParen,
            XmlStartTagStart,
            XmlName,
            XmlTagEnd,
            XmlStartTagStart,
            XmlName,
            XmlEmptyTagEnd,
            XmlStartTagStart,
            XmlName,
            XmlTagEnd,
            XmlText,
            XmlEndTagStart,
            XmlName,
            XmlTagEnd,
            XmlEndTagStart,
            XmlName,
            XmlTagEnd,
            RParen,
        ]
    );
}

#[test]
fn test_xml_splice_counts_braces() {
    use TokenKind::*;
    assert_eq!(
        kinds("=<a>{ {k: 1} }</a>"),
        vec![
            Eq,
            XmlStartTagStart,
            XmlName,
            XmlTagEnd,
            XmlLBrace,
            LBrace,
            Identifier,
            Colon,
            NumericLiteral,
            RBrace,
            XmlRBrace,
            XmlEndTagStart,
            XmlName,
            XmlTagEnd,
        ]
    );
}

#[test]
fn test_xml_list_and_special_content() {
    use TokenKind::*;
    assert_eq!(
        kinds("=<><!-- c --><![CDATA[<x>]]><?pi?></>"),
        vec![
            Eq,
            XmlStartTagStart,
            XmlTagEnd,
            XmlComment,
            XmlCdata,
            XmlPi,
            XmlEndTagStart,
            XmlTagEnd,
        ]
    );
}

#[test]
fn test_xml_splice_as_tag_name() {
    use TokenKind::*;
    assert_eq!(
        kinds("=<{n}/>"),
        vec![Eq, XmlStartTagStart, XmlLBrace, Identifier, XmlRBrace, XmlEmptyTagEnd]
    );
}

#[test]
fn test_closing_tag_of_ancestor_returns_to_script() {
    use TokenKind::*;
    assert_eq!(
        kinds("x = <a><b></a>; var y = 1;"),
        vec![
            Identifier,
            Eq,
            XmlStartTagStart,
            XmlName,
            XmlTagEnd,
            XmlStartTagStart,
            XmlName,
            XmlTagEnd,
            XmlEndTagStart,
            XmlName,
            XmlTagEnd,
            Semicolon,
            Var,
            Identifier,
            Eq,
            NumericLiteral,
            Semicolon,
        ]
    );
}

#[test]
fn test_unknown_closing_tag_closes_innermost() {
    for source in ["x = <a><b></c></a>;", "x = <a></c>;"] {
        assert_eq!(kinds(source).last(), Some(&TokenKind::Semicolon), "{source}");
    }
}

#[test]
fn test_xml_in_attribute_splice_keeps_outer_tag_name() {
    let source = "x = <a k={<b/>}><c></a>;";
    assert_eq!(kinds(source).last(), Some(&TokenKind::Semicolon));
    assert_eq!(texts(source).last(), Some(&";"));
}

#[test]
fn test_unclosed_xml_is_still_lossless() {
    let source = "x = <a>text { y";
    let tokens = lex(source);
    let joined: String = tokens.iter().map(|t| t.text(source)).collect();
    assert_eq!(joined, source);
    assert_eq!(tokens.kind(tokens.len() - 1), TokenKind::Eof);
}
