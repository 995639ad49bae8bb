//! Core shape model for PSSF documents.
//!
//! A document is a flat, ordered list of shapes. Order is paint order:
//! later shapes sit on top of earlier ones. Every shape carries a shared
//! `Style` plus its own geometry. Geometry is stored exactly as it was
//! parsed (rectangle corners are never normalized); derived values such as
//! `Bounds` are computed on demand.

use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Geometry ────────────────────────────────────────────────────────────

/// Integer canvas position. Negative values are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Axis-aligned box derived from a shape's geometry.
///
/// Computed in 64-bit so that e.g. a circle at `i32::MIN` with a large
/// radius still has a representable origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i64,
    pub y: i64,
    pub width: u64,
    pub height: u64,
}

impl Bounds {
    /// Box spanned by two opposite corners given in any order.
    pub fn from_corners(a: Coordinate, b: Coordinate) -> Self {
        Self {
            x: i64::from(a.x.min(b.x)),
            y: i64::from(a.y.min(b.y)),
            width: u64::from(a.x.abs_diff(b.x)),
            height: u64::from(a.y.abs_diff(b.y)),
        }
    }

    /// Smallest box containing every point, or `None` for an empty slice.
    pub fn enclosing(points: &[Coordinate]) -> Option<Self> {
        let first = *points.first()?;
        let (mut min, mut max) = (first, first);
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self::from_corners(min, max))
    }

    pub fn top_left(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    pub fn contains(&self, px: i64, py: i64) -> bool {
        px >= self.x
            && py >= self.y
            && px - self.x <= self.width as i64
            && py - self.y <= self.height as i64
    }
}

// ─── Style ───────────────────────────────────────────────────────────────

/// 8-bit RGB color. Each channel is in `[0, 255]` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// Style shared by every shape. `filled` only matters to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Style {
    pub color: Color,
    pub filled: bool,
}

impl Style {
    pub const fn new(color: Color, filled: bool) -> Self {
        Self { color, filled }
    }
}

// ─── Shapes ──────────────────────────────────────────────────────────────

/// Point-sequence shapes. Squiggles are free-hand strokes, polylines are
/// click-placed segments; both store an ordered list of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathKind {
    Squiggle,
    Polyline,
}

/// Shape tag without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Path(PathKind),
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Path(PathKind::Squiggle),
        ShapeKind::Path(PathKind::Polyline),
    ];

    /// Keyword that opens a block of this kind (`Circle`, `Rectangle`, …).
    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Path(PathKind::Squiggle) => "Squiggle",
            ShapeKind::Path(PathKind::Polyline) => "Polyline",
        }
    }
}

impl From<PathKind> for ShapeKind {
    fn from(kind: PathKind) -> Self {
        ShapeKind::Path(kind)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A paint command: one shape with its style and geometry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Circle {
        style: Style,
        center: Coordinate,
        radius: u32,
    },
    /// `p1` and `p2` are opposite corners in whatever order they were drawn.
    Rectangle {
        style: Style,
        p1: Coordinate,
        p2: Coordinate,
    },
    Polyline {
        style: Style,
        points: Vec<Coordinate>,
    },
    Squiggle {
        style: Style,
        points: Vec<Coordinate>,
    },
}

impl Shape {
    /// Build a point-sequence shape of the given kind.
    pub fn path(kind: PathKind, style: Style, points: Vec<Coordinate>) -> Self {
        match kind {
            PathKind::Squiggle => Shape::Squiggle { style, points },
            PathKind::Polyline => Shape::Polyline { style, points },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Polyline { .. } => ShapeKind::Path(PathKind::Polyline),
            Shape::Squiggle { .. } => ShapeKind::Path(PathKind::Squiggle),
        }
    }

    pub fn style(&self) -> &Style {
        match self {
            Shape::Circle { style, .. }
            | Shape::Rectangle { style, .. }
            | Shape::Polyline { style, .. }
            | Shape::Squiggle { style, .. } => style,
        }
    }

    pub fn style_mut(&mut self) -> &mut Style {
        match self {
            Shape::Circle { style, .. }
            | Shape::Rectangle { style, .. }
            | Shape::Polyline { style, .. }
            | Shape::Squiggle { style, .. } => style,
        }
    }

    /// Points of a polyline or squiggle; `None` for other shapes.
    pub fn points(&self) -> Option<&[Coordinate]> {
        match self {
            Shape::Polyline { points, .. } | Shape::Squiggle { points, .. } => Some(points),
            Shape::Circle { .. } | Shape::Rectangle { .. } => None,
        }
    }

    /// Derived bounding box. Rectangles use the min corner and absolute
    /// extents of `p1`/`p2`; circles span `center ± radius`; point shapes
    /// enclose their points and have no bounds when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Shape::Circle { center, radius, .. } => {
                let r = i64::from(*radius);
                Some(Bounds {
                    x: i64::from(center.x) - r,
                    y: i64::from(center.y) - r,
                    width: 2 * u64::from(*radius),
                    height: 2 * u64::from(*radius),
                })
            }
            Shape::Rectangle { p1, p2, .. } => Some(Bounds::from_corners(*p1, *p2)),
            Shape::Polyline { points, .. } | Shape::Squiggle { points, .. } => {
                Bounds::enclosing(points)
            }
        }
    }
}

// ─── Document ────────────────────────────────────────────────────────────

/// Ordered list of shapes making up one PSSF file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape on top of all existing shapes.
    pub fn append(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Shapes in paint order.
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Remove every shape.
    pub fn reset(&mut self) {
        self.shapes.clear();
    }

    /// Render as PSSF text with the default layout.
    #[must_use]
    pub fn serialize(&self) -> String {
        crate::emitter::emit_document(self)
    }

    #[must_use]
    pub fn serialize_with(&self, config: &crate::format::FormatConfig) -> String {
        crate::emitter::emit_document_with(self, config)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Shape> for Document {
    fn from_iter<T: IntoIterator<Item = Shape>>(iter: T) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Style {
        Style::new(Color::rgb(255, 0, 0), true)
    }

    #[test]
    fn rectangle_bounds_do_not_normalize_corners() {
        let rect = Shape::Rectangle {
            style: red(),
            p1: Coordinate::new(50, 80),
            p2: Coordinate::new(10, 20),
        };
        let bounds = rect.bounds().unwrap();
        assert_eq!(bounds.top_left(), (10, 20));
        assert_eq!((bounds.width, bounds.height), (40, 60));

        match &rect {
            Shape::Rectangle { p1, p2, .. } => {
                assert_eq!(*p1, Coordinate::new(50, 80));
                assert_eq!(*p2, Coordinate::new(10, 20));
            }
            _ => panic!("expected Rectangle"),
        }
    }

    #[test]
    fn rectangle_bounds_extreme_corners() {
        let bounds = Bounds::from_corners(
            Coordinate::new(i32::MIN, i32::MIN),
            Coordinate::new(i32::MAX, i32::MAX),
        );
        assert_eq!(bounds.width, u64::from(u32::MAX));
        assert_eq!(bounds.x, i64::from(i32::MIN));
    }

    #[test]
    fn circle_bounds() {
        let circle = Shape::Circle {
            style: red(),
            center: Coordinate::new(100, 100),
            radius: 25,
        };
        let bounds = circle.bounds().unwrap();
        assert_eq!(bounds.top_left(), (75, 75));
        assert_eq!(bounds.width, 50);
        assert!(bounds.contains(100, 100));
        assert!(!bounds.contains(126, 100));
    }

    #[test]
    fn empty_path_has_no_bounds() {
        let line = Shape::path(PathKind::Polyline, red(), Vec::new());
        assert_eq!(line.bounds(), None);
        assert_eq!(line.points(), Some(&[][..]));
    }

    #[test]
    fn path_bounds_enclose_points() {
        let squiggle = Shape::path(
            PathKind::Squiggle,
            red(),
            vec![
                Coordinate::new(5, -3),
                Coordinate::new(-2, 9),
                Coordinate::new(1, 1),
            ],
        );
        let bounds = squiggle.bounds().unwrap();
        assert_eq!(bounds.top_left(), (-2, -3));
        assert_eq!((bounds.width, bounds.height), (7, 12));
    }

    #[test]
    fn shape_kind_matches_variant() {
        let poly = Shape::path(PathKind::Polyline, red(), vec![]);
        let squig = Shape::path(PathKind::Squiggle, red(), vec![]);
        assert_eq!(poly.kind(), ShapeKind::Path(PathKind::Polyline));
        assert_eq!(squig.kind(), ShapeKind::Path(PathKind::Squiggle));
        assert_eq!(poly.kind().name(), "Polyline");
        assert_ne!(poly, squig);
    }

    #[test]
    fn style_mut_updates_in_place() {
        let mut circle = Shape::Circle {
            style: red(),
            center: Coordinate::default(),
            radius: 1,
        };
        circle.style_mut().filled = false;
        assert!(!circle.style().filled);
    }

    #[test]
    fn document_preserves_append_order() {
        let mut doc = Document::new();
        doc.append(Shape::Circle {
            style: red(),
            center: Coordinate::new(1, 1),
            radius: 1,
        });
        doc.append(Shape::Rectangle {
            style: red(),
            p1: Coordinate::new(0, 0),
            p2: Coordinate::new(1, 1),
        });
        doc.append(Shape::Circle {
            style: red(),
            center: Coordinate::new(2, 2),
            radius: 2,
        });

        let kinds: Vec<_> = doc.iter().map(Shape::kind).collect();
        assert_eq!(
            kinds,
            vec![ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Circle]
        );

        doc.reset();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }
}
