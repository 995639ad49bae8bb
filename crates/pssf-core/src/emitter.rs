//! Emitter: Document → PSSF text.
//!
//! Output mirrors the parser's field order exactly, so every emitted
//! document round-trips. Layout (indentation, spaced or compact keywords)
//! comes from `FormatConfig`; it never affects what the parser sees.

use crate::format::{FormatConfig, Indent, KeywordStyle};
use crate::model::*;
use std::fmt::Write;

/// Emit a `Document` with the default layout (tabs, spaced keywords).
#[must_use]
pub fn emit_document(document: &Document) -> String {
    emit_document_with(document, &FormatConfig::default())
}

/// Emit a `Document` with an explicit layout.
#[must_use]
pub fn emit_document_with(document: &Document, config: &FormatConfig) -> String {
    let mut out = String::with_capacity(64 + document.len() * 96);

    out.push_str(header(config.keywords));
    out.push('\n');
    for shape in document {
        emit_shape(&mut out, shape, config);
    }
    out.push_str(footer(config.keywords));
    out.push('\n');

    out
}

/// Emit a single shape block (start keyword through end keyword).
#[must_use]
pub fn emit_shape_block(shape: &Shape, config: &FormatConfig) -> String {
    let mut out = String::new();
    emit_shape(&mut out, shape, config);
    out
}

fn header(keywords: KeywordStyle) -> &'static str {
    match keywords {
        KeywordStyle::Spaced => "Paint Save File Version 1.0",
        KeywordStyle::Compact => crate::token::HEADER,
    }
}

fn footer(keywords: KeywordStyle) -> &'static str {
    match keywords {
        KeywordStyle::Spaced => "End Paint Save File",
        KeywordStyle::Compact => crate::token::FOOTER,
    }
}

fn indent(out: &mut String, config: &FormatConfig, depth: usize) {
    match config.indent {
        Indent::Tab => out.push_str(&"\t".repeat(depth)),
        Indent::Spaces(width) => out.push_str(&" ".repeat(depth * usize::from(width))),
        Indent::None => {}
    }
}

fn emit_shape(out: &mut String, shape: &Shape, config: &FormatConfig) {
    let kind = shape.kind();
    writeln!(out, "{kind}").unwrap();

    let style = shape.style();
    indent(out, config, 1);
    writeln!(out, "color:{}", style.color).unwrap();
    indent(out, config, 1);
    writeln!(out, "filled:{}", style.filled).unwrap();

    match shape {
        Shape::Circle { center, radius, .. } => {
            indent(out, config, 1);
            writeln!(out, "center:{center}").unwrap();
            indent(out, config, 1);
            writeln!(out, "radius:{radius}").unwrap();
        }
        Shape::Rectangle { p1, p2, .. } => {
            indent(out, config, 1);
            writeln!(out, "p1:{p1}").unwrap();
            indent(out, config, 1);
            writeln!(out, "p2:{p2}").unwrap();
        }
        Shape::Polyline { points, .. } | Shape::Squiggle { points, .. } => {
            emit_points(out, points, config);
        }
    }

    match config.keywords {
        KeywordStyle::Spaced => writeln!(out, "End {kind}").unwrap(),
        KeywordStyle::Compact => writeln!(out, "End{kind}").unwrap(),
    }
}

fn emit_points(out: &mut String, points: &[Coordinate], config: &FormatConfig) {
    indent(out, config, 1);
    out.push_str("points\n");
    for point in points {
        indent(out, config, 2);
        writeln!(out, "point:{point}").unwrap();
    }
    indent(out, config, 1);
    match config.keywords {
        KeywordStyle::Spaced => out.push_str("end points\n"),
        KeywordStyle::Compact => out.push_str("endpoints\n"),
    }
}
