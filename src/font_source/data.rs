//! Stroke skeleton data
//!
//! Strokes arrive as loosely typed JSON arrays. They are normalized once, on
//! the way in, into [`Stroke`] values that are guaranteed non-empty, and are
//! read-only from then on.

use kurbo::Point;
use tracing::debug;

/// A point as authored: an array of numbers, of which only `x` and `y` are
/// used. Shorter arrays are dropped during normalization.
pub type RawPoint = Vec<f64>;

/// A stroke as authored
pub type RawStroke = Vec<RawPoint>;

/// An ordered run of design-space points
///
/// Two or more points form a polyline; a single point is a dot.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Build a stroke from already-typed points. Returns `None` for an empty
    /// point list.
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A lone point, rendered as a dot cap
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }

    /// Two or more points, rendered as segments and vertex caps
    pub fn is_polyline(&self) -> bool {
        self.points.len() >= 2
    }

    /// Consecutive point pairs
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// Drop unusable points and strokes
///
/// Points with fewer than two coordinates are removed first; strokes left
/// without points are then removed. What remains keeps its authored order.
pub fn normalize_strokes(raw: &[RawStroke]) -> Vec<Stroke> {
    raw.iter()
        .filter_map(|raw_stroke| {
            let points: Vec<Point> = raw_stroke
                .iter()
                .filter_map(|coords| match coords.as_slice() {
                    [x, y, ..] => Some(Point::new(*x, *y)),
                    _ => {
                        debug!("Dropping point with {} coordinate(s)", coords.len());
                        None
                    }
                })
                .collect();
            let stroke = Stroke::new(points);
            if stroke.is_none() {
                debug!("Dropping empty stroke");
            }
            stroke
        })
        .collect()
}

/// The strokes authored for one character
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphSource {
    character: char,
    strokes: Vec<Stroke>,
}

impl GlyphSource {
    pub fn new(character: char, strokes: Vec<Stroke>) -> Self {
        Self { character, strokes }
    }

    /// Build from authored JSON strokes, normalizing them
    pub fn from_raw(character: char, raw: &[RawStroke]) -> Self {
        Self::new(character, normalize_strokes(raw))
    }

    /// A composite glyph: the constituents' strokes concatenated in order
    pub fn composite(character: char, parts: &[&GlyphSource]) -> Self {
        let strokes = parts
            .iter()
            .flat_map(|part| part.strokes.iter().cloned())
            .collect();
        Self::new(character, strokes)
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn codepoint(&self) -> u32 {
        self.character as u32
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn polylines(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter().filter(|s| s.is_polyline())
    }

    pub fn dots(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter().filter(|s| s.is_dot())
    }
}
