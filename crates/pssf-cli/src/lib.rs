//! CLI logic for the `pssf` tool.
//!
//! Reads one Paint Save File, validates it, and writes it back out as
//! canonical PSSF text or JSON.

pub mod diagnostics;

mod args;

pub use args::{Args, Emit};

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use log::info;
use thiserror::Error;

use pssf_core::{Document, ParseError, parse_document};

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input could not be read or is not valid PSSF. `src` holds the text
    /// that was read (empty when the file could not be opened).
    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// Terminal report for this error.
    pub fn report(&self, input: &Path) -> String {
        match self {
            CliError::Parse { err, src } => {
                diagnostics::render(input, &diagnostics::compute_diagnostic(src, err))
            }
            other => format!("error: {other}\n"),
        }
    }
}

/// Run the `pssf` tool.
///
/// # Errors
///
/// Returns `CliError` for:
/// - an unreadable input file
/// - invalid PSSF input
/// - failure writing the output
pub fn run(args: &Args) -> Result<(), CliError> {
    info!("Processing {}", args.input.display());

    let document = load(&args.input)?;
    info!("Parsed {} shape(s)", document.len());

    match args.emit {
        Emit::Check => {
            println!("{}: ok ({} shapes)", args.input.display(), document.len());
        }
        Emit::Pssf => {
            let text = document.serialize_with(&args.format_config());
            write_output(args.output.as_deref(), &text)?;
        }
        Emit::Json => {
            let mut json = serde_json::to_string_pretty(&document)?;
            json.push('\n');
            write_output(args.output.as_deref(), &json)?;
        }
    }

    Ok(())
}

/// Read and parse a PSSF file.
///
/// Only a failure to open the file is an `Open` error; a read that fails
/// afterwards (including invalid UTF-8) is `Io`.
pub fn load(path: &Path) -> Result<Document, CliError> {
    let mut file = File::open(path).map_err(|source| {
        CliError::new_parse_error(
            ParseError::Open {
                path: path.to_path_buf(),
                source,
            },
            String::new(),
        )
    })?;

    let mut source = String::new();
    file.read_to_string(&mut source)
        .map_err(|err| CliError::new_parse_error(ParseError::Io(err), String::new()))?;

    match parse_document(&source) {
        Ok(document) => Ok(document),
        Err(err) => {
            log::debug!("parse failed: {err}");
            Err(CliError::new_parse_error(err, source))
        }
    }
}

fn write_output(output: Option<&Path>, text: &str) -> Result<(), CliError> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            info!("Wrote {}", path.display());
        }
        None => io::stdout().lock().write_all(text.as_bytes())?,
    }
    Ok(())
}
