//! Command handlers for the Flare CLI.
//!
//! Shared pieces live here: option parsing, source reading and diagnostic
//! rendering with `ariadne`.

use std::io::{self, Write};
use std::path::Path;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use flare_parse::{ForceContext, ParseOptions, SyntaxError};
use thiserror::Error;

mod check;
mod debug;

pub use check::check_paths;
pub use debug::{lex_file, parse_file};

/// Options shared by `parse` and `check`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseFlags {
    /// Print the full tree (spans and trivia) instead of the compact one.
    pub tree: bool,
    pub options: ParseOptions,
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum FlagError {
    #[error("unknown force context '{0}' (expected type, type-allow-empty or parameter)")]
    UnknownForceContext(String),
    #[error("invalid maximum depth '{0}'")]
    InvalidDepth(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

impl ParseFlags {
    /// Split `args` into flags and positional paths.
    pub fn from_args(args: &[String]) -> Result<(Self, Vec<&str>), FlagError> {
        let mut flags = ParseFlags::default();
        let mut paths = Vec::new();

        for arg in args {
            if arg == "--tree" {
                flags.tree = true;
            } else if let Some(value) = arg.strip_prefix("--force=") {
                let force = parse_force_context(value)?;
                flags.options = flags.options.with_force_context(force);
            } else if let Some(value) = arg.strip_prefix("--max-depth=") {
                let depth = value
                    .parse::<usize>()
                    .ok()
                    .filter(|&depth| depth > 0)
                    .ok_or_else(|| FlagError::InvalidDepth(value.to_owned()))?;
                flags.options = flags.options.with_max_tree_depth(depth);
            } else if arg.starts_with('-') {
                return Err(FlagError::UnknownOption(arg.clone()));
            } else {
                paths.push(arg.as_str());
            }
        }

        Ok((flags, paths))
    }
}

fn parse_force_context(value: &str) -> Result<ForceContext, FlagError> {
    match value {
        "none" => Ok(ForceContext::None),
        "type" => Ok(ForceContext::Type),
        "type-allow-empty" => Ok(ForceContext::TypeAllowEmpty),
        "parameter" => Ok(ForceContext::Parameter),
        _ => Err(FlagError::UnknownForceContext(value.to_owned())),
    }
}

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot find file '{0}'")]
    NotFound(String),
    #[error("permission denied reading '{0}'")]
    PermissionDenied(String),
    #[error("'{0}' contains invalid UTF-8 data")]
    InvalidUtf8(String),
    #[error("error reading '{path}': {source}")]
    Io { path: String, source: io::Error },
}

pub(crate) fn read_source(path: &Path) -> Result<String, ReadError> {
    std::fs::read_to_string(path).map_err(|e| {
        let path = path.display().to_string();
        match e.kind() {
            io::ErrorKind::NotFound => ReadError::NotFound(path),
            io::ErrorKind::PermissionDenied => ReadError::PermissionDenied(path),
            io::ErrorKind::InvalidData => ReadError::InvalidUtf8(path),
            _ => ReadError::Io { path, source: e },
        }
    })
}

/// Read a file named on the command line, exiting on failure.
pub(crate) fn read_file(path: &str) -> String {
    match read_source(Path::new(path)) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Whether diagnostics written to stderr should be colored.
pub(crate) fn stderr_is_terminal() -> bool {
    io::IsTerminal::is_terminal(&io::stderr())
}

/// Render `errors` against `source` as `ariadne` reports.
pub(crate) fn render_errors(
    path: &str,
    source: &str,
    errors: &[SyntaxError],
    color: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    for error in errors {
        let range = error.span.to_range();
        let config = Config::default()
            .with_index_type(IndexType::Byte)
            .with_color(color);
        Report::build(ReportKind::Error, path, range.start)
            .with_config(config)
            .with_message(&error.message)
            .with_label(Label::new((path, range)).with_color(Color::Red))
            .finish()
            .write((path, Source::from(source)), &mut *out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
