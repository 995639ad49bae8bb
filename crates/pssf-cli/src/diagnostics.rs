//! Diagnostics: PSSF parse errors → source-located reports.
//!
//! Parser line numbers count content lines only (blank separator lines are
//! skipped), so they are mapped back to physical lines before display.

use std::fmt::Write;
use std::path::Path;

use pssf_core::ParseError;

/// A parse failure located in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based physical line, when the error has one.
    pub line: Option<usize>,
    /// The offending source line as written.
    pub snippet: Option<String>,
    pub message: String,
}

/// Locate a parse error in `source`.
pub fn compute_diagnostic(source: &str, err: &ParseError) -> Diagnostic {
    let located = err
        .line()
        .and_then(|content_line| physical_line(source, content_line));

    Diagnostic {
        line: located.map(|(line, _)| line),
        snippet: located.map(|(_, text)| text.to_string()),
        message: err.to_string(),
    }
}

/// Render a diagnostic for the terminal.
pub fn render(path: &Path, diag: &Diagnostic) -> String {
    let mut out = format!("error: {}\n", diag.message);
    match diag.line {
        Some(line) => {
            let _ = writeln!(out, "  --> {}:{line}", path.display());
            if let Some(snippet) = &diag.snippet {
                let _ = writeln!(out, "   | {snippet}");
            }
        }
        None => {
            let _ = writeln!(out, "  --> {}", path.display());
        }
    }
    out
}

/// Map a content-line number (non-empty lines, 1-based) to the physical
/// line number and its text.
fn physical_line(source: &str, content_line: usize) -> Option<(usize, &str)> {
    source
        .lines()
        .flat_map(|line| line.split('\r'))
        .enumerate()
        .filter(|(_, text)| !text.is_empty())
        .nth(content_line.checked_sub(1)?)
        .map(|(index, text)| (index + 1, text))
}
