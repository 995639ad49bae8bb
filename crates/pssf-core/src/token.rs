//! Token matchers for normalized PSSF lines.
//!
//! Every matcher is anchored on both ends: [`classify`] only succeeds when
//! the whole token is consumed, so `radius:5x` or `Circlee` match nothing.
//!
//! Built on `winnow` 0.7.

use crate::model::{Color, Coordinate, PathKind, ShapeKind};
use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, opt, preceded, separated_pair};
use winnow::prelude::*;

/// File header in normalized form (`Paint Save File Version 1.0`).
pub const HEADER: &str = "PaintSaveFileVersion1.0";
/// File footer in normalized form (`End Paint Save File`).
pub const FOOTER: &str = "EndPaintSaveFile";

/// A recognized grammar construct with its extracted fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    Header,
    Footer,
    ShapeStart(ShapeKind),
    ShapeEnd(ShapeKind),
    Color(Color),
    Filled(bool),
    Center(Coordinate),
    Radius(u32),
    P1(Coordinate),
    P2(Coordinate),
    PointsOpen,
    Point(Coordinate),
    PointsClose,
}

/// Match a normalized token against the grammar. `None` when the token is
/// not exactly one construct (including out-of-range numbers).
pub fn classify(token: &str) -> Option<Construct> {
    construct.parse(token).ok()
}

fn construct(input: &mut &str) -> ModalResult<Construct> {
    alt((
        HEADER.value(Construct::Header),
        FOOTER.value(Construct::Footer),
        shape_keyword.map(Construct::ShapeStart),
        preceded("End", shape_keyword).map(Construct::ShapeEnd),
        preceded("color:", color).map(Construct::Color),
        preceded("filled:", boolean).map(Construct::Filled),
        preceded("center:", coordinate).map(Construct::Center),
        preceded("radius:", unsigned).map(Construct::Radius),
        preceded("p1:", coordinate).map(Construct::P1),
        preceded("p2:", coordinate).map(Construct::P2),
        "points".value(Construct::PointsOpen),
        preceded("point:", coordinate).map(Construct::Point),
        "endpoints".value(Construct::PointsClose),
    ))
    .parse_next(input)
}

// ─── Field parsers ──────────────────────────────────────────────────────

fn shape_keyword(input: &mut &str) -> ModalResult<ShapeKind> {
    alt((
        "Circle".value(ShapeKind::Circle),
        "Rectangle".value(ShapeKind::Rectangle),
        "Squiggle".value(ShapeKind::Path(PathKind::Squiggle)),
        "Polyline".value(ShapeKind::Path(PathKind::Polyline)),
    ))
    .parse_next(input)
}

fn boolean(input: &mut &str) -> ModalResult<bool> {
    alt(("true".value(true), "false".value(false))).parse_next(input)
}

/// `R,G,B` with each channel in 0..=255 and no leading zeros.
fn color(input: &mut &str) -> ModalResult<Color> {
    (
        color_channel,
        preceded(',', color_channel),
        preceded(',', color_channel),
    )
        .map(|(r, g, b)| Color::rgb(r, g, b))
        .parse_next(input)
}

fn color_channel(input: &mut &str) -> ModalResult<u8> {
    digit1
        .verify(|digits: &str| digits.len() == 1 || !digits.starts_with('0'))
        .try_map(|digits: &str| digits.parse::<u8>())
        .parse_next(input)
}

/// `(x,y)` with signed 32-bit components.
fn coordinate(input: &mut &str) -> ModalResult<Coordinate> {
    delimited('(', separated_pair(signed, ',', signed), ')')
        .map(|(x, y)| Coordinate::new(x, y))
        .parse_next(input)
}

fn signed(input: &mut &str) -> ModalResult<i32> {
    (opt('-'), digit1)
        .take()
        .try_map(|number: &str| number.parse::<i32>())
        .parse_next(input)
}

fn unsigned(input: &mut &str) -> ModalResult<u32> {
    digit1
        .try_map(|digits: &str| digits.parse::<u32>())
        .parse_next(input)
}
