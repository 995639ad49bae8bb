pub mod emitter;
pub mod error;
pub mod format;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod token;

pub use emitter::{emit_document, emit_document_with};
pub use error::{Expected, ParseError};
pub use format::{FormatConfig, Indent, KeywordStyle, format_document};
pub use model::*;
pub use parser::{parse_document, parse_file, parse_into, parse_reader};
