//! The `check` command: parse every source file under the given paths and
//! report syntax errors.

use std::io::Write;
use std::path::{Path, PathBuf};

use flare_parse::{parse_source, ParseOptions};
use rayon::prelude::*;
use tracing::debug;

use super::{read_source, render_errors, stderr_is_terminal};

/// Extensions of files `check` picks up when walking directories.
const SOURCE_EXTENSIONS: &[&str] = &["as", "mxml-script"];

/// Outcome of checking one file.
#[derive(Debug)]
pub(crate) struct FileReport {
    pub path: PathBuf,
    pub error_count: usize,
    /// Rendered diagnostics, written out in path order once all files are done.
    pub rendered: Vec<u8>,
}

/// Check every source file named by `paths`. Returns `true` when no file
/// has errors.
pub fn check_paths(paths: &[&str], options: &ParseOptions) -> bool {
    let files = collect_sources(paths);
    debug!(files = files.len(), "checking");

    let color = stderr_is_terminal();
    let reports: Vec<FileReport> = files
        .par_iter()
        .map(|path| check_file(path, options, color))
        .collect();

    let mut stderr = std::io::stderr().lock();
    let mut failed = 0usize;
    for report in &reports {
        if report.error_count > 0 {
            debug!(path = %report.path.display(), errors = report.error_count, "file has errors");
            failed += 1;
            let _ = stderr.write_all(&report.rendered);
        }
    }
    let _ = stderr.flush();

    let errors: usize = reports.iter().map(|r| r.error_count).sum();
    println!(
        "checked {} file(s): {} error(s) in {} file(s)",
        reports.len(),
        errors,
        failed
    );
    failed == 0
}

pub(crate) fn check_file(path: &Path, options: &ParseOptions, color: bool) -> FileReport {
    let display = path.display().to_string();
    let mut rendered = Vec::new();

    let source = match read_source(path) {
        Ok(source) => source,
        Err(e) => {
            let _ = writeln!(rendered, "error: {e}");
            return FileReport {
                path: path.to_path_buf(),
                error_count: 1,
                rendered,
            };
        }
    };

    let output = parse_source(&source, options);
    debug!(path = %path.display(), errors = output.errors.len(), "checked file");
    if let Err(e) = render_errors(&display, &source, &output.errors, color, &mut rendered) {
        let _ = writeln!(rendered, "error: cannot render diagnostics for '{display}': {e}");
    }

    FileReport {
        path: path.to_path_buf(),
        error_count: output.errors.len(),
        rendered,
    }
}

/// Expand `paths` into source files, sorted by path. Files named directly
/// are kept whatever their extension; directories are walked recursively.
pub(crate) fn collect_sources(paths: &[&str]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        let path = Path::new(path);
        if path.is_dir() {
            collect_recursive(path, &mut files);
        } else {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    files.dedup();
    files
}

fn collect_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        // Skip hidden files and directories
        if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.starts_with('.'))
        {
            continue;
        }

        if path.is_dir() {
            collect_recursive(&path, files);
        } else if path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| SOURCE_EXTENSIONS.contains(&e))
        {
            files.push(path);
        }
    }
}
