//! Error types for PSSF parsing.
//!
//! Grammar failures carry the 1-based line number of the offending
//! (normalized) line. Resource failures carry no line number.

use crate::model::{PathKind, ShapeKind};
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// What the parser was waiting for when it rejected a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// `Paint Save File Version 1.0`
    Header,
    /// A shape keyword or `End Paint Save File`.
    ShapeOrFooter,
    Color(ShapeKind),
    Filled(ShapeKind),
    Center,
    Radius,
    P1,
    P2,
    Points(PathKind),
    PointOrEndPoints(PathKind),
    End(ShapeKind),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Header => f.write_str("Expected Start of Paint Save File"),
            Expected::ShapeOrFooter => {
                f.write_str("Expected Start of Shape or End Paint Save File")
            }
            Expected::Color(kind) => write!(f, "Expected {kind} color"),
            Expected::Filled(kind) => write!(f, "Expected {kind} filled"),
            Expected::Center => f.write_str("Expected Circle center"),
            Expected::Radius => f.write_str("Expected Circle Radius"),
            Expected::P1 => f.write_str("Expected Rectangle p1"),
            Expected::P2 => f.write_str("Expected Rectangle p2"),
            Expected::Points(kind) => write!(f, "Expected {} points", ShapeKind::from(*kind)),
            Expected::PointOrEndPoints(kind) => {
                write!(f, "Expected {} point or end points", ShapeKind::from(*kind))
            }
            Expected::End(kind) => write!(f, "Expected End {kind}"),
        }
    }
}

/// Why a parse attempt failed. The first error encountered is reported;
/// nothing parsed before it is returned.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The line does not match what the current state requires.
    #[error("Error in line {line}: {expected} (found `{found}`)")]
    Unexpected {
        line: usize,
        expected: Expected,
        found: String,
    },

    /// Input ended before `End Paint Save File`.
    #[error("Error in line {line}: Unexpected end of file")]
    UnexpectedEof { line: usize },

    /// Content follows `End Paint Save File`.
    #[error("Error in line {line}: Extra content after End of File")]
    TrailingContent { line: usize },

    #[error("Could not open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ParseError {
    /// Line of a grammar error; `None` for resource errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Unexpected { line, .. }
            | ParseError::UnexpectedEof { line }
            | ParseError::TrailingContent { line } => Some(*line),
            ParseError::Open { .. } | ParseError::Io(_) => None,
        }
    }

    /// `true` when the input was readable but not valid PSSF.
    pub fn is_grammar(&self) -> bool {
        self.line().is_some()
    }
}
