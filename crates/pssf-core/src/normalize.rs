//! Line normalization: raw source line → whitespace-free token.
//!
//! Zero-length lines are separators and are skipped without counting.
//! A line holding only whitespace is *not* skipped: it becomes an empty
//! token, counts toward the line number, and fails every matcher.

/// Outcome of normalizing one raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// Zero-length line; ignored.
    Skip,
    /// Content line with every whitespace character removed.
    Line { token: String, number: usize },
}

/// Strips whitespace and numbers content lines starting at 1.
#[derive(Debug, Default)]
pub struct LineNormalizer {
    line_number: usize,
}

impl LineNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize the next raw line (without its line terminator).
    pub fn normalize(&mut self, raw: &str) -> Normalized {
        if raw.is_empty() {
            return Normalized::Skip;
        }
        self.line_number += 1;
        Normalized::Line {
            token: strip_whitespace(raw),
            number: self.line_number,
        }
    }

    /// Number of content lines seen so far (0 before the first).
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

/// Remove every whitespace character from `raw`.
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}
