//! The process-wide depth limit.
//!
//! Kept in its own test binary: changing the global limit would race with
//! any other test parsing in parallel.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use flare_parse::{
    max_tree_depth, parse_source, set_max_tree_depth, ParseOptions, DEFAULT_MAX_TREE_DEPTH,
};

fn depth_errors(source: &str, options: &ParseOptions) -> usize {
    parse_source(source, options)
        .errors
        .iter()
        .filter(|e| e.message == "maximum nesting depth exceeded")
        .count()
}

#[test]
fn global_limit_applies_without_explicit_option() {
    assert_eq!(max_tree_depth(), DEFAULT_MAX_TREE_DEPTH);
    let source = "if (a) { if (b) { if (c) { if (d) { x(); } } } }";
    assert_eq!(depth_errors(source, &ParseOptions::default()), 0);

    set_max_tree_depth(3);
    assert_eq!(max_tree_depth(), 3);
    assert!(depth_errors(source, &ParseOptions::default()) > 0);

    // An explicit limit wins over the global one.
    let options = ParseOptions::default().with_max_tree_depth(DEFAULT_MAX_TREE_DEPTH);
    assert_eq!(depth_errors(source, &options), 0);

    set_max_tree_depth(DEFAULT_MAX_TREE_DEPTH);
    assert_eq!(depth_errors(source, &ParseOptions::default()), 0);
}
