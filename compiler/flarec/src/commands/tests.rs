#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use std::fs;

use flare_parse::{parse_source, ForceContext, ParseOptions};
use pretty_assertions::assert_eq;

use super::check::{check_file, collect_sources};
use super::{render_errors, FlagError, ParseFlags};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn test_flags_and_paths() {
    let raw = args(&["--tree", "a.as", "--force=type", "--max-depth=20", "b.as"]);
    let (flags, paths) = ParseFlags::from_args(&raw).unwrap();
    assert!(flags.tree);
    assert_eq!(flags.options.force_context, ForceContext::Type);
    assert_eq!(flags.options.max_tree_depth, Some(20));
    assert_eq!(paths, vec!["a.as", "b.as"]);
}

#[test]
fn test_default_flags() {
    let (flags, paths) = ParseFlags::from_args(&[]).unwrap();
    assert_eq!(flags, ParseFlags::default());
    assert_eq!(flags.options, ParseOptions::default());
    assert!(paths.is_empty());
}

#[test]
fn test_force_contexts() {
    for (value, expected) in [
        ("none", ForceContext::None),
        ("type", ForceContext::Type),
        ("type-allow-empty", ForceContext::TypeAllowEmpty),
        ("parameter", ForceContext::Parameter),
    ] {
        let (flags, _) = ParseFlags::from_args(&args(&[&format!("--force={value}")])).unwrap();
        assert_eq!(flags.options.force_context, expected);
    }
}

#[test]
fn test_flag_errors() {
    assert_eq!(
        ParseFlags::from_args(&args(&["--force=expression"])).unwrap_err(),
        FlagError::UnknownForceContext("expression".to_owned())
    );
    assert_eq!(
        ParseFlags::from_args(&args(&["--max-depth=0"])).unwrap_err(),
        FlagError::InvalidDepth("0".to_owned())
    );
    assert_eq!(
        ParseFlags::from_args(&args(&["--max-depth=deep"])).unwrap_err(),
        FlagError::InvalidDepth("deep".to_owned())
    );
    assert_eq!(
        ParseFlags::from_args(&args(&["-x"])).unwrap_err().to_string(),
        "unknown option '-x'"
    );
}

#[test]
fn test_rendered_diagnostics_name_file_and_message() {
    let source = "var x = ;\n";
    let output = parse_source(source, &ParseOptions::default());
    let mut out = Vec::new();
    render_errors("Main.as", source, &output.errors, false, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Main.as"), "{text}");
    assert!(text.contains("expected expression"), "{text}");
}

#[test]
fn test_collect_sources_walks_directories() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::create_dir_all(root.join(".hidden")).unwrap();
    fs::write(root.join("A.as"), "").unwrap();
    fs::write(root.join("notes.txt"), "").unwrap();
    fs::write(root.join("sub/B.mxml-script"), "").unwrap();
    fs::write(root.join(".hidden/C.as"), "").unwrap();
    let explicit = root.join("notes.txt");

    let root_arg = root.to_str().unwrap();
    let explicit_arg = explicit.to_str().unwrap();
    let files = collect_sources(&[root_arg, explicit_arg]);
    assert_eq!(
        files,
        vec![
            root.join("A.as"),
            root.join("notes.txt"),
            root.join("sub/B.mxml-script"),
        ]
    );
}

#[test]
fn test_check_file_reports() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("Good.as");
    let bad = dir.path().join("Bad.as");
    fs::write(&good, "package { public class Good {} }").unwrap();
    fs::write(&bad, "function f( {").unwrap();

    let options = ParseOptions::default();
    let report = check_file(&good, &options, false);
    assert_eq!(report.error_count, 0);
    assert!(report.rendered.is_empty());

    let report = check_file(&bad, &options, false);
    assert!(report.error_count > 0);
    let text = String::from_utf8(report.rendered).unwrap();
    assert!(text.contains("Bad.as"), "{text}");

    let missing = dir.path().join("Missing.as");
    let report = check_file(&missing, &options, false);
    assert_eq!(report.error_count, 1);
    let text = String::from_utf8(report.rendered).unwrap();
    assert!(text.contains("cannot find file"), "{text}");
}
