//! Coordinate keys for deduplicating cap centers
//!
//! Caps are keyed by position, not by which stroke produced them. Keys are
//! built from rounded integer coordinates so that equality never depends on
//! float formatting, and `0.0` and `-0.0` collapse to the same key.

use kurbo::Point;
use std::collections::HashSet;

/// Number of key steps per design unit
const KEY_RESOLUTION: f64 = 1_000_000.0;

/// Quantized design-space coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointKey {
    x: i64,
    y: i64,
}

impl PointKey {
    pub fn from_point(point: Point) -> Self {
        Self {
            x: quantize(point.x),
            y: quantize(point.y),
        }
    }
}

fn quantize(value: f64) -> i64 {
    // `as` saturates, and -0.0 rounds to 0
    (value * KEY_RESOLUTION).round() as i64
}

/// Points kept in first-seen order, one per [`PointKey`]
#[derive(Debug, Clone, Default)]
pub struct UniquePoints {
    seen: HashSet<PointKey>,
    points: Vec<Point>,
}

impl UniquePoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a point. Returns `false` if its key was already present.
    pub fn insert(&mut self, point: Point) -> bool {
        if self.seen.insert(PointKey::from_point(point)) {
            self.points.push(point);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }
}

impl Extend<Point> for UniquePoints {
    fn extend<T: IntoIterator<Item = Point>>(&mut self, iter: T) {
        for point in iter {
            self.insert(point);
        }
    }
}
