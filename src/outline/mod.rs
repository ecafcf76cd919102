//! Glyph outlines in font units
//!
//! An outline is a flat list of closed polygons. Each polygon remembers what
//! produced it so tests and the run summary can count quads and caps.

pub mod assembler;

pub use assembler::assemble_glyph;

use kurbo::{BezPath, Point};

/// What a subpath was generated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubpathKind {
    /// Filled rectangle around one stroke segment
    Quad,
    /// Round cap on an exposed stroke vertex
    VertexCap,
    /// Round cap for an isolated point
    DotCap,
}

/// One closed polygon in font units
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineSubpath {
    pub kind: SubpathKind,
    pub points: Vec<Point>,
}

impl OutlineSubpath {
    pub fn new(kind: SubpathKind, points: Vec<Point>) -> Self {
        Self { kind, points }
    }

    /// Closed kurbo path through the subpath's points
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut points = self.points.iter();
        if let Some(first) = points.next() {
            path.move_to(*first);
            for point in points {
                path.line_to(*point);
            }
            path.close_path();
        }
        path
    }
}

/// The complete outline of one glyph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphOutline {
    subpaths: Vec<OutlineSubpath>,
}

/// Subpath counts by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutlineStats {
    pub quads: usize,
    pub vertex_caps: usize,
    pub dot_caps: usize,
}

impl OutlineStats {
    pub fn total(&self) -> usize {
        self.quads + self.vertex_caps + self.dot_caps
    }
}

impl std::ops::AddAssign for OutlineStats {
    fn add_assign(&mut self, other: Self) {
        self.quads += other.quads;
        self.vertex_caps += other.vertex_caps;
        self.dot_caps += other.dot_caps;
    }
}

impl GlyphOutline {
    pub fn new(subpaths: Vec<OutlineSubpath>) -> Self {
        Self { subpaths }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn subpaths(&self) -> &[OutlineSubpath] {
        &self.subpaths
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    /// Subpaths of a single kind, in emission order
    pub fn of_kind(&self, kind: SubpathKind) -> impl Iterator<Item = &OutlineSubpath> {
        self.subpaths.iter().filter(move |s| s.kind == kind)
    }

    pub fn stats(&self) -> OutlineStats {
        let mut stats = OutlineStats::default();
        for subpath in &self.subpaths {
            match subpath.kind {
                SubpathKind::Quad => stats.quads += 1,
                SubpathKind::VertexCap => stats.vertex_caps += 1,
                SubpathKind::DotCap => stats.dot_caps += 1,
            }
        }
        stats
    }

    pub fn to_bezpaths(&self) -> Vec<BezPath> {
        self.subpaths.iter().map(OutlineSubpath::to_bezpath).collect()
    }
}
