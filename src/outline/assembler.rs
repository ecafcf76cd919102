//! Glyph assembler
//!
//! Collects the quads and caps for every stroke of one glyph into a single
//! [`GlyphOutline`]. Output order is all quads (stroke by stroke), then
//! vertex caps, then dot caps, each cap list in first-seen order.

use super::GlyphOutline;
use crate::core::settings::StrokeSettings;
use crate::font_source::GlyphSource;
use crate::geometry::caps::{dot_caps, vertex_caps};
use crate::geometry::classifier::exposed_vertices;
use crate::geometry::outliner::outline_polyline;
use crate::geometry::point::UniquePoints;
use tracing::debug;

/// Build the outline for one glyph
///
/// The source's strokes are already normalized; composites must be resolved
/// before calling this.
pub fn assemble_glyph(source: &GlyphSource, settings: &StrokeSettings) -> GlyphOutline {
    let strokes = source.strokes();

    let mut subpaths: Vec<_> = source
        .polylines()
        .flat_map(|stroke| outline_polyline(stroke.points(), settings))
        .collect();

    let vertices = exposed_vertices(strokes, settings.collinear_tolerance);
    subpaths.extend(vertex_caps(&vertices, settings));

    let mut dots = UniquePoints::new();
    for stroke in source.dots() {
        dots.extend(stroke.points().iter().copied());
    }
    subpaths.extend(dot_caps(&dots, settings));

    let outline = GlyphOutline::new(subpaths);
    let stats = outline.stats();
    debug!(
        "Assembled '{}' (U+{:04X}): {} quads, {} vertex caps, {} dot caps",
        source.character(),
        source.codepoint(),
        stats.quads,
        stats.vertex_caps,
        stats.dot_caps
    );
    outline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_source::RawStroke;
    use crate::outline::SubpathKind;
    use kurbo::Point;

    fn glyph(character: char, raw: &[RawStroke]) -> GlyphSource {
        GlyphSource::from_raw(character, raw)
    }

    #[test]
    fn test_single_segment_glyph() {
        let settings = StrokeSettings::default();
        let outline = assemble_glyph(
            &glyph('a', &[vec![vec![0.0, 0.0], vec![1.0, 0.0]]]),
            &settings,
        );
        let stats = outline.stats();

        assert_eq!(stats.quads, 1);
        assert_eq!(stats.vertex_caps, 2);
        assert_eq!(stats.dot_caps, 0);
        // quads come first
        assert_eq!(outline.subpaths()[0].kind, SubpathKind::Quad);
    }

    #[test]
    fn test_repeated_dots_collapse() {
        let settings = StrokeSettings::default();
        let dot = vec![vec![0.5, 0.5]];
        let outline = assemble_glyph(
            &glyph('.', &[dot.clone(), dot.clone(), dot]),
            &settings,
        );
        let stats = outline.stats();

        assert_eq!(stats.dot_caps, 1);
        assert_eq!(stats.total(), 1);
    }

    #[test]
    fn test_dot_and_vertex_at_same_point_are_separate() {
        let settings = StrokeSettings::default();
        let outline = assemble_glyph(
            &glyph(
                'i',
                &[vec![vec![0.0, 1.0], vec![0.0, 3.0]], vec![vec![0.0, 1.0]]],
            ),
            &settings,
        );
        let stats = outline.stats();

        assert_eq!(stats.vertex_caps, 2);
        assert_eq!(stats.dot_caps, 1);
    }

    #[test]
    fn test_empty_glyph_has_empty_outline() {
        let settings = StrokeSettings::default();
        let outline = assemble_glyph(&glyph(' ', &[vec![], vec![vec![]]]), &settings);
        assert!(outline.is_empty());
    }

    #[test]
    fn test_repeated_point_stroke_renders_as_vertex_cap() {
        let settings = StrokeSettings::default();
        let outline = assemble_glyph(
            &glyph('x', &[vec![vec![1.0, 1.0], vec![1.0, 1.0]]]),
            &settings,
        );
        let stats = outline.stats();

        assert_eq!(stats.quads, 0);
        assert_eq!(stats.vertex_caps, 1);
        assert!(outline
            .subpaths()
            .iter()
            .flat_map(|s| s.points.iter())
            .all(|p| p.is_finite()));
    }

    #[test]
    fn test_dot_cap_centered_in_font_units() {
        let settings = StrokeSettings::default();
        let outline = assemble_glyph(&glyph('.', &[vec![vec![0.0, 0.0]]]), &settings);
        let cap = &outline.subpaths()[0];

        let sum = cap
            .points
            .iter()
            .fold(Point::ZERO, |acc, p| acc + p.to_vec2());
        let center = Point::new(sum.x / 16.0, sum.y / 16.0);
        assert!((center - Point::new(100.0, 720.0)).hypot() < 1e-9);
    }
}
