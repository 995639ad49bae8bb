//! Parser for the PSSF text format → `Document`.
//!
//! Each source line is normalized (whitespace removed), classified into a
//! grammar construct, and fed to a finite state machine. Fields inside a
//! shape block are strictly ordered; a shape is appended to the document
//! only when its end keyword is matched. The first mismatch aborts the
//! parse and nothing parsed so far is returned.

use crate::error::{Expected, ParseError};
use crate::model::*;
use crate::normalize::{LineNormalizer, Normalized};
use crate::token::{Construct, classify};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a PSSF document held in memory.
#[must_use = "parsing result should be used"]
pub fn parse_document(input: &str) -> Result<Document, ParseError> {
    parse_reader(input.as_bytes())
}

/// Parse a PSSF document from any buffered reader. Lines may end in `\n`,
/// `\r\n`, or a lone `\r`.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Document, ParseError> {
    let mut parser = Parser::new();
    for line in reader.lines() {
        for segment in line?.split('\r') {
            parser.feed(segment)?;
        }
    }
    parser.finish()
}

/// Open and parse a PSSF file. The file is closed on every return path.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document, ParseError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("parsing {}", path.display());
    parse_reader(BufReader::new(file))
}

/// Parse into an existing document, replacing its contents.
///
/// The target is reset first. On failure it stays empty: shapes read
/// before the error are discarded.
pub fn parse_into<R: BufRead>(reader: R, document: &mut Document) -> Result<(), ParseError> {
    document.reset();
    *document = parse_reader(reader)?;
    Ok(())
}

// ─── State machine ──────────────────────────────────────────────────────

/// Parser position. Field states carry the values accumulated so far for
/// the shape under construction.
#[derive(Debug)]
enum State {
    /// Waiting for the file header.
    Initial,
    /// Between shapes: a shape keyword or the footer.
    Standby,
    Color(ShapeKind),
    Filled(ShapeKind, Color),
    Center(Style),
    Radius(Style, Coordinate),
    EndCircle(Style, Coordinate, u32),
    P1(Style),
    P2(Style, Coordinate),
    EndRectangle(Style, Coordinate, Coordinate),
    Points(PathKind, Style),
    /// Inside `points … endpoints`.
    Point(PathKind, Style, Vec<Coordinate>),
    EndPath(PathKind, Style, Vec<Coordinate>),
    /// Footer seen; only end of input is accepted.
    Terminal,
}

impl State {
    /// Error for a line this state cannot accept.
    fn reject(self, line: usize, found: &str) -> ParseError {
        let expected = match self {
            State::Terminal => return ParseError::TrailingContent { line },
            State::Initial => Expected::Header,
            State::Standby => Expected::ShapeOrFooter,
            State::Color(kind) => Expected::Color(kind),
            State::Filled(kind, _) => Expected::Filled(kind),
            State::Center(_) => Expected::Center,
            State::Radius(..) => Expected::Radius,
            State::EndCircle(..) => Expected::End(ShapeKind::Circle),
            State::P1(_) => Expected::P1,
            State::P2(..) => Expected::P2,
            State::EndRectangle(..) => Expected::End(ShapeKind::Rectangle),
            State::Points(kind, _) => Expected::Points(kind),
            State::Point(kind, ..) => Expected::PointOrEndPoints(kind),
            State::EndPath(kind, ..) => Expected::End(ShapeKind::Path(kind)),
        };
        ParseError::Unexpected {
            line,
            expected,
            found: found.to_string(),
        }
    }
}

/// Line-at-a-time driver. Private: callers only get whole-document parses.
struct Parser {
    normalizer: LineNormalizer,
    state: State,
    document: Document,
}

impl Parser {
    fn new() -> Self {
        Self {
            normalizer: LineNormalizer::new(),
            state: State::Initial,
            document: Document::new(),
        }
    }

    fn feed(&mut self, raw: &str) -> Result<(), ParseError> {
        match self.normalizer.normalize(raw) {
            Normalized::Skip => Ok(()),
            Normalized::Line { token, number } => self.advance(&token, number),
        }
    }

    fn advance(&mut self, token: &str, line: usize) -> Result<(), ParseError> {
        log::trace!("{line} {token} {:?}", self.state);

        let state = std::mem::replace(&mut self.state, State::Terminal);
        self.state = match (state, classify(token)) {
            (State::Initial, Some(Construct::Header)) => State::Standby,

            (State::Standby, Some(Construct::ShapeStart(kind))) => State::Color(kind),
            (State::Standby, Some(Construct::Footer)) => State::Terminal,

            (State::Color(kind), Some(Construct::Color(color))) => State::Filled(kind, color),
            (State::Filled(kind, color), Some(Construct::Filled(filled))) => {
                let style = Style::new(color, filled);
                match kind {
                    ShapeKind::Circle => State::Center(style),
                    ShapeKind::Rectangle => State::P1(style),
                    ShapeKind::Path(path) => State::Points(path, style),
                }
            }

            (State::Center(style), Some(Construct::Center(center))) => {
                State::Radius(style, center)
            }
            (State::Radius(style, center), Some(Construct::Radius(radius))) => {
                State::EndCircle(style, center, radius)
            }
            (
                State::EndCircle(style, center, radius),
                Some(Construct::ShapeEnd(ShapeKind::Circle)),
            ) => self.commit(
                Shape::Circle {
                    style,
                    center,
                    radius,
                },
                line,
            ),

            (State::P1(style), Some(Construct::P1(p1))) => State::P2(style, p1),
            (State::P2(style, p1), Some(Construct::P2(p2))) => State::EndRectangle(style, p1, p2),
            (State::EndRectangle(style, p1, p2), Some(Construct::ShapeEnd(ShapeKind::Rectangle))) => {
                self.commit(Shape::Rectangle { style, p1, p2 }, line)
            }

            (State::Points(kind, style), Some(Construct::PointsOpen)) => {
                State::Point(kind, style, Vec::new())
            }
            (State::Point(kind, style, mut points), Some(Construct::Point(point))) => {
                points.push(point);
                State::Point(kind, style, points)
            }
            (State::Point(kind, style, points), Some(Construct::PointsClose)) => {
                State::EndPath(kind, style, points)
            }
            (State::EndPath(kind, style, points), Some(Construct::ShapeEnd(ShapeKind::Path(end))))
                if end == kind =>
            {
                self.commit(Shape::path(kind, style, points), line)
            }

            (state, _) => return Err(state.reject(line, token)),
        };
        Ok(())
    }

    fn commit(&mut self, shape: Shape, line: usize) -> State {
        log::debug!("line {line}: {} #{}", shape.kind(), self.document.len());
        self.document.append(shape);
        State::Standby
    }

    fn finish(self) -> Result<Document, ParseError> {
        match self.state {
            State::Terminal => {
                log::debug!("parsed {} shape(s)", self.document.len());
                Ok(self.document)
            }
            _ => Err(ParseError::UnexpectedEof {
                line: self.normalizer.line_number(),
            }),
        }
    }
}
