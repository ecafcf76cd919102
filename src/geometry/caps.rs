//! Cap renderer
//!
//! Round caps are regular polygons centered on a point. Vertex caps and dot
//! caps come from the same generator and differ only in radius.

use super::point::UniquePoints;
use super::transform::{to_cartesian, to_font_units};
use crate::core::settings::StrokeSettings;
use crate::outline::{OutlineSubpath, SubpathKind};
use kurbo::Point;
use std::f64::consts::TAU;

/// Regular polygon of `settings.circle_segments` vertices around `center`,
/// starting at angle zero and stepping evenly through a full turn
pub fn cap_polygon(
    center: Point,
    radius: f64,
    kind: SubpathKind,
    settings: &StrokeSettings,
) -> OutlineSubpath {
    let segments = settings.circle_segments;
    let points = (0..segments)
        .map(|k| {
            let angle = TAU * k as f64 / segments as f64;
            to_font_units(center + to_cartesian(radius, angle), &settings.transform)
        })
        .collect();
    OutlineSubpath::new(kind, points)
}

/// Cap for an exposed polyline vertex
pub fn vertex_cap(center: Point, settings: &StrokeSettings) -> OutlineSubpath {
    cap_polygon(
        center,
        settings.vertex_cap_radius(),
        SubpathKind::VertexCap,
        settings,
    )
}

/// Cap for an isolated point
pub fn dot_cap(center: Point, settings: &StrokeSettings) -> OutlineSubpath {
    cap_polygon(center, settings.dot_cap_radius(), SubpathKind::DotCap, settings)
}

/// One vertex cap per distinct exposed vertex
pub fn vertex_caps(vertices: &UniquePoints, settings: &StrokeSettings) -> Vec<OutlineSubpath> {
    vertices.iter().map(|v| vertex_cap(v, settings)).collect()
}

/// One dot cap per distinct dot position
pub fn dot_caps(dots: &UniquePoints, settings: &StrokeSettings) -> Vec<OutlineSubpath> {
    dots.iter().map(|d| dot_cap(d, settings)).collect()
}
