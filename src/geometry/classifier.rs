//! Vertex classifier
//!
//! Decides which polyline points need a round cap. A point that sits strictly
//! inside some straight segment of the same glyph is already covered by that
//! segment's rectangle and is left alone; every other point is exposed.
//!
//! All polylines of the glyph are scanned for every point, so a stroke that
//! ends in the middle of another stroke's segment gets no cap there. The scan
//! is O(points x segments), which is fine at the size of one glyph.

use super::point::UniquePoints;
use super::utilities::{nearly_equal, strictly_between};
use crate::font_source::Stroke;
use kurbo::Point;

/// How a polyline point relates to the rest of the glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexClass {
    /// Lies strictly inside a collinear segment
    Interior,
    /// Needs a cap
    Exposed,
}

/// Whether `point` lies strictly between `a` and `b` on the line through them
///
/// Vertical and horizontal segments compare coordinates exactly. Diagonal
/// segments interpolate along x and compare the resulting y against `point`,
/// exactly unless `tolerance` is positive.
pub fn lies_inside_segment(point: Point, a: Point, b: Point, tolerance: f64) -> bool {
    if a.x == b.x && b.x == point.x && strictly_between(point.y, a.y, b.y) {
        return true;
    }

    if a.y == b.y && b.y == point.y && strictly_between(point.x, a.x, b.x) {
        return true;
    }

    if a.x != b.x && a.y != b.y && strictly_between(point.x, a.x, b.x) {
        let t = (point.x - a.x) / (b.x - a.x);
        return nearly_equal(t * (b.y - a.y), point.y - a.y, tolerance);
    }

    false
}

/// Classify one point against every polyline segment of the glyph
pub fn classify_vertex(point: Point, strokes: &[Stroke], tolerance: f64) -> VertexClass {
    let interior = strokes
        .iter()
        .filter(|stroke| stroke.is_polyline())
        .flat_map(Stroke::segments)
        .any(|(a, b)| lies_inside_segment(point, a, b, tolerance));

    if interior {
        VertexClass::Interior
    } else {
        VertexClass::Exposed
    }
}

/// Every distinct exposed polyline point of the glyph, in first-seen order
pub fn exposed_vertices(strokes: &[Stroke], tolerance: f64) -> UniquePoints {
    let mut exposed = UniquePoints::new();
    for stroke in strokes.iter().filter(|stroke| stroke.is_polyline()) {
        for &point in stroke.points() {
            if classify_vertex(point, strokes, tolerance) == VertexClass::Exposed {
                exposed.insert(point);
            }
        }
    }
    exposed
}
