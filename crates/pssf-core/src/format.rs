//! Document formatting pipeline: parse → emit.
//!
//! Rewrites any valid PSSF text into one canonical layout. Consumed by the
//! `pssf` command-line tool and by anything that saves a `Document`.

use crate::emitter::emit_document_with;
use crate::error::ParseError;
use crate::parser::parse_document;
use std::fmt;
use std::str::FromStr;

// ─── Config ───────────────────────────────────────────────────────────────

/// Indentation of shape fields (one level) and points (two levels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tab,
    /// Spaces per level, at most [`Indent::MAX_SPACES`] when parsed.
    Spaces(u8),
    None,
}

impl Indent {
    /// Widest space indentation accepted from text.
    pub const MAX_SPACES: u8 = 16;
}

impl FromStr for Indent {
    type Err = String;

    /// Accepts `tab`, `none`, or a space count such as `4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tab" | "tabs" => Ok(Indent::Tab),
            "none" | "0" => Ok(Indent::None),
            n => match n.parse::<u8>() {
                Ok(width) if width <= Indent::MAX_SPACES => Ok(Indent::Spaces(width)),
                _ => Err(format!(
                    "invalid indent `{s}` (expected tab, none, or 1..={} spaces)",
                    Indent::MAX_SPACES
                )),
            },
        }
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indent::Tab => f.write_str("tab"),
            Indent::Spaces(n) => write!(f, "{n}"),
            Indent::None => f.write_str("none"),
        }
    }
}

/// How multi-word keywords are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordStyle {
    /// `Paint Save File Version 1.0`, `End Circle`, `end points`.
    #[default]
    Spaced,
    /// `PaintSaveFileVersion1.0`, `EndCircle`, `endpoints`.
    Compact,
}

/// Layout used when emitting a document.
///
/// Layout is cosmetic: the parser strips all whitespace, so every
/// combination re-parses to the same document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatConfig {
    /// Default: **tab**.
    pub indent: Indent,
    /// Default: **spaced**.
    pub keywords: KeywordStyle,
}

// ─── Pipeline ─────────────────────────────────────────────────────────────

/// Parse a PSSF document and re-emit it in canonical layout.
///
/// The output is idempotent: `format_document(format_document(s, c), c) == format_document(s, c)`.
///
/// # Errors
/// Returns the parse error if the input is not valid PSSF.
pub fn format_document(text: &str, config: &FormatConfig) -> Result<String, ParseError> {
    let document = parse_document(text)?;
    Ok(emit_document_with(&document, config))
}

// ─── Tests ────────────────────────────────────────────────────────────────
