//! Coordinate transforms
//!
//! Polar/cartesian conversion for offset and cap construction, and the
//! design-space to font-unit mapping. Geometry is always computed in design
//! space; [`to_font_units`] is only applied when an outline point is emitted.

use crate::core::settings::FontTransform;
use kurbo::{Affine, Point, Vec2};

/// A vector expressed as a length and a direction in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    pub distance: f64,
    pub angle: f64,
}

/// Convert a cartesian delta to polar form
pub fn to_polar(delta: Vec2) -> Polar {
    Polar {
        distance: delta.x.hypot(delta.y),
        angle: delta.y.atan2(delta.x),
    }
}

/// Convert a polar vector back to a cartesian delta
pub fn to_cartesian(distance: f64, angle: f64) -> Vec2 {
    Vec2::new(distance * angle.cos(), distance * angle.sin())
}

/// Map a design-space point into font units
pub fn to_font_units(point: Point, transform: &FontTransform) -> Point {
    Point::new(
        point.x * transform.scale_x + transform.drift_x,
        point.y * transform.scale_y + transform.drift_y,
    )
}

impl FontTransform {
    /// The same mapping as [`to_font_units`], for transforming whole paths
    pub fn to_affine(&self) -> Affine {
        Affine::new([
            self.scale_x,
            0.0,
            0.0,
            self.scale_y,
            self.drift_x,
            self.drift_y,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_to_polar() {
        let polar = to_polar(Vec2::new(3.0, 4.0));
        assert_close(polar.distance, 5.0);
        assert_close(polar.angle, 4.0f64.atan2(3.0));

        let up = to_polar(Vec2::new(0.0, 2.0));
        assert_close(up.angle, FRAC_PI_2);

        let left = to_polar(Vec2::new(-1.0, 0.0));
        assert_close(left.angle, PI);
    }

    #[test]
    fn test_polar_cartesian_agree() {
        let delta = Vec2::new(-2.5, 1.25);
        let polar = to_polar(delta);
        let back = to_cartesian(polar.distance, polar.angle);
        assert_close(back.x, delta.x);
        assert_close(back.y, delta.y);
    }

    #[test]
    fn test_to_font_units_flips_y() {
        let transform = FontTransform::default();

        assert_eq!(
            to_font_units(Point::new(0.0, 0.0), &transform),
            Point::new(100.0, 720.0)
        );
        assert_eq!(
            to_font_units(Point::new(1.0, 1.0), &transform),
            Point::new(280.0, 550.0)
        );
    }

    #[test]
    fn test_affine_matches_point_mapping() {
        let transform = FontTransform::default();
        let affine = transform.to_affine();

        for point in [
            Point::new(0.0, 0.0),
            Point::new(1.5, -2.0),
            Point::new(-0.25, 3.75),
        ] {
            let expected = to_font_units(point, &transform);
            let actual = affine * point;
            assert_close(actual.x, expected.x);
            assert_close(actual.y, expected.y);
        }
    }
}
