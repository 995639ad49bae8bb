//! Integration tests: grammar violations are reported at the right line
//! with the right expectation, and nothing is returned on failure.

use pssf_core::error::{Expected, ParseError};
use pssf_core::model::{PathKind, ShapeKind};
use pssf_core::parser::parse_document;

const CIRCLE: ShapeKind = ShapeKind::Circle;
const RECTANGLE: ShapeKind = ShapeKind::Rectangle;
const SQUIGGLE: PathKind = PathKind::Squiggle;
const POLYLINE: PathKind = PathKind::Polyline;

fn unexpected(input: &str) -> (usize, Expected) {
    match parse_document(input) {
        Err(ParseError::Unexpected { line, expected, .. }) => (line, expected),
        other => panic!("expected a structural error for:\n{input}\ngot {other:?}"),
    }
}

/// Wrap field lines in a header and an opening keyword.
fn block(keyword: &str, fields: &[&str]) -> String {
    let mut text = format!("PaintSaveFileVersion1.0\n{keyword}\n");
    for field in fields {
        text.push_str(field);
        text.push('\n');
    }
    text
}

// ─── File structure ─────────────────────────────────────────────────────

#[test]
fn header_must_come_first() {
    assert_eq!(unexpected("Circle\n"), (1, Expected::Header));
    assert_eq!(unexpected("PaintSaveFile\n"), (1, Expected::Header));
    assert_eq!(unexpected("EndPaintSaveFile\n"), (1, Expected::Header));
}

#[test]
fn header_error_message() {
    let err = parse_document("Paint Save File Version 9\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error in line 1: Expected Start of Paint Save File (found `PaintSaveFileVersion9`)"
    );
}

#[test]
fn standby_rejects_fields() {
    assert_eq!(
        unexpected("PaintSaveFileVersion1.0\ncolor:1,2,3\n"),
        (2, Expected::ShapeOrFooter)
    );
    assert_eq!(
        unexpected("PaintSaveFileVersion1.0\nEndCircle\n"),
        (2, Expected::ShapeOrFooter)
    );
}

#[test]
fn missing_footer_is_unexpected_eof() {
    match parse_document("PaintSaveFileVersion1.0\n\n") {
        Err(ParseError::UnexpectedEof { line }) => assert_eq!(line, 1),
        other => panic!("expected UnexpectedEof, got {other:?}"),
    }
}

#[test]
fn eof_inside_shape() {
    let err = parse_document(&block("Circle", &["color:1,2,3"])).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEof { line: 3 }));
    assert_eq!(err.to_string(), "Error in line 3: Unexpected end of file");
}

#[test]
fn anything_after_footer_is_trailing_content() {
    for extra in ["EndPaintSaveFile", "Circle", "garbage", "  "] {
        let input = format!("PaintSaveFileVersion1.0\nEndPaintSaveFile\n{extra}\n");
        match parse_document(&input) {
            Err(ParseError::TrailingContent { line }) => assert_eq!(line, 3),
            other => panic!("expected TrailingContent for {extra:?}, got {other:?}"),
        }
    }
}

// ─── Circle ─────────────────────────────────────────────────────────────

#[test]
fn circle_field_errors() {
    assert_eq!(
        unexpected(&block("Circle", &["filled:true"])),
        (3, Expected::Color(CIRCLE))
    );
    assert_eq!(
        unexpected(&block("Circle", &["color:1,2,3", "center:(0,0)"])),
        (4, Expected::Filled(CIRCLE))
    );
    assert_eq!(
        unexpected(&block("Circle", &["color:1,2,3", "filled:true", "p1:(0,0)"])),
        (5, Expected::Center)
    );
    assert_eq!(
        unexpected(&block(
            "Circle",
            &["color:1,2,3", "filled:true", "center:(0,0)", "radius:5", "EndRectangle"]
        )),
        (7, Expected::End(CIRCLE))
    );
}

#[test]
fn circle_missing_radius() {
    let input = block(
        "Circle",
        &["color:1,2,3", "filled:true", "center:(0,0)", "EndCircle"],
    );
    let err = parse_document(&input).unwrap_err();
    assert_eq!(err.line(), Some(6));
    assert!(err.to_string().contains("Radius"), "{err}");
}

#[test]
fn circle_color_out_of_range() {
    assert_eq!(
        unexpected(&block("Circle", &["color:256,0,0"])),
        (3, Expected::Color(CIRCLE))
    );
}

#[test]
fn circle_negative_radius() {
    assert_eq!(
        unexpected(&block(
            "Circle",
            &["color:1,2,3", "filled:false", "center:(0,0)", "radius:-1"]
        )),
        (6, Expected::Radius)
    );
}

// ─── Rectangle ──────────────────────────────────────────────────────────

#[test]
fn rectangle_field_errors() {
    assert_eq!(
        unexpected(&block("Rectangle", &["filled:true"])),
        (3, Expected::Color(RECTANGLE))
    );
    assert_eq!(
        unexpected(&block("Rectangle", &["color:1,2,3", "filled:maybe"])),
        (4, Expected::Filled(RECTANGLE))
    );
    assert_eq!(
        unexpected(&block("Rectangle", &["color:1,2,3", "filled:true", "p2:(1,1)"])),
        (5, Expected::P1)
    );
    assert_eq!(
        unexpected(&block(
            "Rectangle",
            &["color:1,2,3", "filled:true", "p1:(1,1)", "p1:(2,2)"]
        )),
        (6, Expected::P2)
    );
    assert_eq!(
        unexpected(&block(
            "Rectangle",
            &["color:1,2,3", "filled:true", "p1:(1,1)", "p2:(2,2)", "EndCircle"]
        )),
        (7, Expected::End(RECTANGLE))
    );
}

// ─── Squiggle / Polyline ────────────────────────────────────────────────

#[test]
fn path_field_errors() {
    for (keyword, kind) in [("Squiggle", SQUIGGLE), ("Polyline", POLYLINE)] {
        assert_eq!(
            unexpected(&block(keyword, &["points"])),
            (3, Expected::Color(ShapeKind::Path(kind)))
        );
        assert_eq!(
            unexpected(&block(keyword, &["color:1,2,3", "points"])),
            (4, Expected::Filled(ShapeKind::Path(kind)))
        );
        assert_eq!(
            unexpected(&block(keyword, &["color:1,2,3", "filled:true", "point:(1,1)"])),
            (5, Expected::Points(kind))
        );
        assert_eq!(
            unexpected(&block(
                keyword,
                &["color:1,2,3", "filled:true", "points", "point:(1,1)", "center:(1,1)"]
            )),
            (7, Expected::PointOrEndPoints(kind))
        );
        assert_eq!(
            unexpected(&block(
                keyword,
                &["color:1,2,3", "filled:true", "points", "endpoints", "points"]
            )),
            (7, Expected::End(ShapeKind::Path(kind)))
        );
    }
}

#[test]
fn path_error_messages() {
    let err = parse_document(&block(
        "Squiggle",
        &["color:1,2,3", "filled:true", "points", "oops"],
    ))
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error in line 6: Expected Squiggle point or end points (found `oops`)"
    );
}

// ─── Failure discards earlier shapes ────────────────────────────────────

#[test]
fn failure_after_complete_shapes_returns_no_document() {
    let input = "\
Paint Save File Version 1.0
Circle
  color:1,2,3
  filled:true
  center:(0,0)
  radius:1
End Circle
Rectangle
  color:1,2,3
End Paint Save File
";
    assert_eq!(unexpected(input), (10, Expected::Filled(RECTANGLE)));
}
