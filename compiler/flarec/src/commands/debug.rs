//! Debug commands: `parse` and `lex` for inspecting parser output.

use std::io::Write;

use flare_parse::parse_source;
use tracing::debug;

use super::{read_file, render_errors, stderr_is_terminal, ParseFlags};

/// Parse a file and print its tree followed by its diagnostics.
pub fn parse_file(path: &str, flags: &ParseFlags) {
    let content = read_file(path);
    let output = parse_source(&content, &flags.options);
    debug!(path, errors = output.errors.len(), "parsed");

    if flags.tree {
        print!("{}", output.tree.debug_dump());
    } else {
        print!("{}", output.tree.compact_dump());
    }

    if output.has_errors() {
        println!();
        println!("{} error(s)", output.errors.len());
        let mut stderr = std::io::stderr().lock();
        if let Err(e) = render_errors(
            path,
            &content,
            &output.errors,
            stderr_is_terminal(),
            &mut stderr,
        ) {
            eprintln!("error writing diagnostics: {e}");
        }
        let _ = stderr.flush();
    }
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let tokens = flare_lexer::lex(&content);

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in tokens.iter() {
        println!(
            "  {:?} @ {} {:?}",
            token.kind,
            token.span,
            token.text(&content)
        );
    }
}
