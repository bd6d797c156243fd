use super::*;

fn with_cursor(source: &str, f: impl FnOnce(&mut Cursor<'_>)) {
    let tokens = flare_lexer::lex(source);
    let mut cursor = Cursor::new(&tokens, source);
    f(&mut cursor);
}

#[test]
fn test_cursor_skips_trivia() {
    with_cursor("  /* c */ var x", |cursor| {
        assert!(cursor.check(TokenKind::Var));
        cursor.advance();
        assert!(cursor.check(TokenKind::Identifier));
        assert_eq!(cursor.current_text(), "x");
        cursor.advance();
        assert!(cursor.is_at_end());
    });
}

#[test]
fn test_advance_returns_raw_index() {
    with_cursor("a b", |cursor| {
        assert_eq!(cursor.advance(), 0);
        assert_eq!(cursor.advance(), 2);
        assert!(cursor.is_at_end());
    });
}

#[test]
fn test_advance_stops_at_eof() {
    with_cursor("", |cursor| {
        assert!(cursor.is_at_end());
        let eof = cursor.advance();
        assert_eq!(cursor.advance(), eof);
        assert!(cursor.is_at_end());
    });
}

#[test]
fn test_lookahead() {
    with_cursor("a . b ( )", |cursor| {
        assert_eq!(cursor.peek_kind_at(0), TokenKind::Identifier);
        assert_eq!(cursor.peek_next_kind(), TokenKind::Dot);
        assert_eq!(cursor.peek_kind_at(3), TokenKind::LParen);
        assert_eq!(cursor.peek_kind_at(10), TokenKind::Eof);
    });
}

#[test]
fn test_set_position_restores() {
    with_cursor("a b c", |cursor| {
        let start = cursor.position();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.current_text(), "c");
        cursor.set_position(start);
        assert_eq!(cursor.current_text(), "a");
    });
}

#[test]
fn test_newline_queries() {
    with_cursor("a\nb c", |cursor| {
        assert!(!cursor.has_newline_before());
        assert!(cursor.has_newline_after());
        cursor.advance();
        assert!(cursor.has_newline_before());
        assert!(!cursor.has_newline_after());
    });
}

#[test]
fn test_line_comment_counts_as_newline() {
    with_cursor("a // c\nb", |cursor| {
        cursor.advance();
        assert!(cursor.has_newline_before());
    });
}

#[test]
fn test_gt_operators() {
    let cases = [
        ("a > b", GtOperator::Gt),
        ("a >= b", GtOperator::GtEq),
        ("a >> b", GtOperator::Shr),
        ("a >>= b", GtOperator::ShrEq),
        ("a >>> b", GtOperator::UShr),
        ("a >>>= b", GtOperator::UShrEq),
        ("a > > b", GtOperator::Gt),
        ("a > = b", GtOperator::Gt),
    ];
    for (source, expected) in cases {
        with_cursor(source, |cursor| {
            cursor.advance();
            assert_eq!(cursor.gt_operator(), Some(expected), "{source}");
        });
    }
}

#[test]
fn test_gt_operator_token_counts() {
    assert_eq!(GtOperator::Gt.token_count(), 1);
    assert_eq!(GtOperator::UShrEq.token_count(), 4);
    assert!(GtOperator::ShrEq.is_assignment());
    assert!(!GtOperator::GtEq.is_assignment());
}

#[test]
fn test_next_is_adjacent() {
    with_cursor("a(b (", |cursor| {
        assert!(cursor.next_is_adjacent());
        cursor.advance();
        cursor.advance();
        assert!(!cursor.next_is_adjacent());
    });
}

#[test]
fn test_text_since() {
    with_cursor("{ a . b } c", |cursor| {
        let start = cursor.position();
        assert_eq!(cursor.text_since(start), "");
        for _ in 0..5 {
            cursor.advance();
        }
        assert!(cursor.check(TokenKind::Identifier));
        assert_eq!(cursor.text_since(start), "{ a . b }");
    });
}
