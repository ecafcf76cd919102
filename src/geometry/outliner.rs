//! Stroke outliner
//!
//! Turns one zero-width segment into a filled rectangle by offsetting both
//! endpoints perpendicular to the segment by the stroke weight.

use super::transform::{to_cartesian, to_font_units, to_polar};
use crate::core::settings::StrokeSettings;
use crate::outline::{OutlineSubpath, SubpathKind};
use kurbo::Point;
use std::f64::consts::FRAC_PI_2;
use tracing::debug;

/// Outline the segment from `start` to `end`
///
/// Corners are emitted as `start - offset`, `start + offset`, `end + offset`,
/// `end - offset`, where `offset` is the weight rotated a quarter turn
/// clockwise from the segment direction.
///
/// Returns `None` for a zero-length segment, which has no direction.
pub fn outline_segment(
    start: Point,
    end: Point,
    settings: &StrokeSettings,
) -> Option<OutlineSubpath> {
    if start == end {
        debug!("Skipping zero-length segment at ({}, {})", start.x, start.y);
        return None;
    }

    let direction = to_polar(end - start);
    let offset = to_cartesian(settings.weight, direction.angle - FRAC_PI_2);

    let corners = [start - offset, start + offset, end + offset, end - offset]
        .into_iter()
        .map(|corner| to_font_units(corner, &settings.transform))
        .collect();

    Some(OutlineSubpath::new(SubpathKind::Quad, corners))
}

/// Outline every consecutive pair of a polyline
pub fn outline_polyline(points: &[Point], settings: &StrokeSettings) -> Vec<OutlineSubpath> {
    points
        .windows(2)
        .filter_map(|pair| outline_segment(pair[0], pair[1], settings))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    fn assert_point_close(actual: Point, expected: Point) {
        assert!(
            (actual - expected).hypot() < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_vertical_segment_corners() {
        let settings = StrokeSettings::default();
        let quad = outline_segment(Point::new(0.0, 0.0), Point::new(0.0, 1.0), &settings)
            .expect("segment has length");

        assert_eq!(quad.kind, SubpathKind::Quad);
        assert_eq!(quad.points.len(), 4);
        let expected = [
            Point::new(55.0, 720.0),
            Point::new(145.0, 720.0),
            Point::new(145.0, 550.0),
            Point::new(55.0, 550.0),
        ];
        for (actual, expected) in quad.points.iter().zip(expected) {
            assert_point_close(*actual, expected);
        }
    }

    #[test]
    fn test_rectangle_shape_under_rotation() {
        // Identity transform so the rectangle can be checked in design units
        let mut settings = StrokeSettings::default();
        settings.transform.scale_x = 1.0;
        settings.transform.scale_y = 1.0;
        settings.transform.drift_x = 0.0;
        settings.transform.drift_y = 0.0;
        let weight = settings.weight;

        let start = Point::new(0.3, -0.7);
        for step in 0..12 {
            let angle = step as f64 * std::f64::consts::PI / 6.0 + 0.1;
            let length = 1.0 + step as f64 * 0.25;
            let end = start + Vec2::new(length * angle.cos(), length * angle.sin());

            let quad = outline_segment(start, end, &settings).unwrap();
            let [a, b, c, d] = [quad.points[0], quad.points[1], quad.points[2], quad.points[3]];

            // short sides are 2W and perpendicular to the segment
            assert!(((b - a).hypot() - 2.0 * weight).abs() < 1e-9);
            assert!(((c - d).hypot() - 2.0 * weight).abs() < 1e-9);
            assert!((b - a).dot(end - start).abs() < 1e-9);

            // long sides are parallel to the segment and as long as it
            assert!(((c - b).hypot() - length).abs() < 1e-9);
            assert!((c - b).cross(end - start).abs() < 1e-9);
            assert!(((d - a).hypot() - length).abs() < 1e-9);

            // centered on the segment
            assert_point_close(a.midpoint(b), start);
            assert_point_close(d.midpoint(c), end);
        }
    }

    #[test]
    fn test_zero_length_segment_is_skipped() {
        let settings = StrokeSettings::default();
        let point = Point::new(2.0, 3.0);
        assert!(outline_segment(point, point, &settings).is_none());
    }

    #[test]
    fn test_polyline_yields_one_quad_per_segment() {
        let settings = StrokeSettings::default();
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 2.0),
        ];
        let quads = outline_polyline(&points, &settings);

        // the repeated point contributes no quad
        assert_eq!(quads.len(), 2);
        assert!(quads.iter().all(|q| q.points.iter().all(|p| p.is_finite())));
    }
}
