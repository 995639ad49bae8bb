//! Command-line argument definitions for the `pssf` tool.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pssf_core::{FormatConfig, Indent, KeywordStyle};

/// What to produce from a successfully parsed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Emit {
    /// Reformatted PSSF text
    #[default]
    Pssf,
    /// The shape list as JSON
    Json,
    /// Validate only
    Check,
}

/// Validate, reformat, or convert a Paint Save File
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input PSSF file
    pub input: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output kind
    #[arg(long, value_enum, default_value_t = Emit::Pssf)]
    pub emit: Emit,

    /// Field indentation: `tab`, `none`, or 1-16 spaces
    #[arg(long, default_value = "tab")]
    pub indent: Indent,

    /// Write keywords without spaces (`EndCircle` instead of `End Circle`)
    #[arg(long)]
    pub compact: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Layout for PSSF output.
    pub fn format_config(&self) -> FormatConfig {
        FormatConfig {
            indent: self.indent,
            keywords: if self.compact {
                KeywordStyle::Compact
            } else {
                KeywordStyle::Spaced
            },
        }
    }
}
