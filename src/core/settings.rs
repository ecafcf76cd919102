//! Build settings
//!
//! Every constant the geometry pipeline and the font boundary depend on lives
//! here. A single [`BrutalitaSettings`] value is built once per run (defaults,
//! then the user config file, then CLI flags) and is passed by reference to
//! everything downstream. Nothing in the pipeline reads global state.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Stroke half-width in design units
pub const DEFAULT_WEIGHT: f64 = 0.25;
/// Vertex cap radius as a fraction of the weight
pub const DEFAULT_VERTEX_CAP_FACTOR: f64 = 0.96;
/// Dot cap radius as a fraction of the weight
pub const DEFAULT_DOT_CAP_FACTOR: f64 = 1.5;
/// Number of vertices in a cap polygon
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 16;

pub const DEFAULT_FAMILY_NAME: &str = "Brutalita";
pub const DEFAULT_CUSTOM_FAMILY_NAME: &str = "Brutalita Custom";
pub const DEFAULT_STYLE_NAME: &str = "Regular";
pub const DEFAULT_UNITS_PER_EM: f64 = 1000.0;
pub const DEFAULT_ASCENDER: f64 = 1000.0;
pub const DEFAULT_DESCENDER: f64 = -200.0;
pub const DEFAULT_ADVANCE_WIDTH: f64 = 600.0;

/// Affine mapping from the design grid to font units
///
/// `font = design * scale + drift` on each axis. The y scale is negative: the
/// design grid grows downwards, font units grow upwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub drift_x: f64,
    pub drift_y: f64,
}

impl Default for FontTransform {
    fn default() -> Self {
        Self {
            scale_x: 180.0,
            scale_y: -170.0,
            drift_x: 100.0,
            drift_y: 720.0,
        }
    }
}

/// Geometry constants shared by every glyph of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeSettings {
    /// Perpendicular offset applied on each side of a segment
    pub weight: f64,
    pub vertex_cap_factor: f64,
    pub dot_cap_factor: f64,
    pub circle_segments: usize,
    /// Absolute tolerance for the diagonal collinearity test.
    /// `0.0` means exact comparison.
    pub collinear_tolerance: f64,
    pub transform: FontTransform,
}

impl Default for StrokeSettings {
    fn default() -> Self {
        Self {
            weight: DEFAULT_WEIGHT,
            vertex_cap_factor: DEFAULT_VERTEX_CAP_FACTOR,
            dot_cap_factor: DEFAULT_DOT_CAP_FACTOR,
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
            collinear_tolerance: 0.0,
            transform: FontTransform::default(),
        }
    }
}

impl StrokeSettings {
    /// Radius of the cap drawn on an exposed vertex
    pub fn vertex_cap_radius(&self) -> f64 {
        self.weight * self.vertex_cap_factor
    }

    /// Radius of the cap drawn for an isolated point
    pub fn dot_cap_radius(&self) -> f64 {
        self.weight * self.dot_cap_factor
    }

    /// Reject values that cannot produce a closed outline
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.weight.is_finite() && self.weight > 0.0,
            "Stroke weight must be positive, got {}",
            self.weight
        );
        ensure!(
            self.vertex_cap_factor.is_finite() && self.vertex_cap_factor > 0.0,
            "Vertex cap factor must be positive, got {}",
            self.vertex_cap_factor
        );
        ensure!(
            self.dot_cap_factor.is_finite() && self.dot_cap_factor > 0.0,
            "Dot cap factor must be positive, got {}",
            self.dot_cap_factor
        );
        ensure!(
            self.circle_segments >= 3,
            "Caps need at least 3 circle segments, got {}",
            self.circle_segments
        );
        ensure!(
            self.collinear_tolerance.is_finite() && self.collinear_tolerance >= 0.0,
            "Collinear tolerance must be zero or positive, got {}",
            self.collinear_tolerance
        );
        Ok(())
    }
}

/// Font-level metadata handed to the encoder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    /// Family name used for production builds
    pub family_name: String,
    /// Family name used for every other build
    pub custom_family_name: String,
    pub style_name: String,
    pub units_per_em: f64,
    pub ascender: f64,
    pub descender: f64,
    pub advance_width: f64,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            family_name: DEFAULT_FAMILY_NAME.to_string(),
            custom_family_name: DEFAULT_CUSTOM_FAMILY_NAME.to_string(),
            style_name: DEFAULT_STYLE_NAME.to_string(),
            units_per_em: DEFAULT_UNITS_PER_EM,
            ascender: DEFAULT_ASCENDER,
            descender: DEFAULT_DESCENDER,
            advance_width: DEFAULT_ADVANCE_WIDTH,
        }
    }
}

impl FontSettings {
    /// Pick the family name for the given build mode
    pub fn family_name_for(&self, production: bool) -> &str {
        if production {
            &self.family_name
        } else {
            &self.custom_family_name
        }
    }
}

/// All settings for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrutalitaSettings {
    pub stroke: StrokeSettings,
    pub font: FontSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cap_radii() {
        let settings = StrokeSettings::default();
        assert!((settings.vertex_cap_radius() - 0.24).abs() < 1e-12);
        assert!((settings.dot_cap_radius() - 0.375).abs() < 1e-12);
    }

    #[test]
    fn test_family_name_by_build_mode() {
        let font = FontSettings::default();
        assert_eq!(font.family_name_for(true), "Brutalita");
        assert_eq!(font.family_name_for(false), "Brutalita Custom");
    }

    #[test]
    fn test_partial_settings_fill_in_defaults() {
        let json = r#"{ "stroke": { "weight": 0.3, "transform": { "drift_x": 50 } } }"#;
        let settings: BrutalitaSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.stroke.weight, 0.3);
        assert_eq!(settings.stroke.circle_segments, DEFAULT_CIRCLE_SEGMENTS);
        assert_eq!(settings.stroke.transform.drift_x, 50.0);
        assert_eq!(settings.stroke.transform.scale_y, -170.0);
        assert_eq!(settings.font, FontSettings::default());
    }

    #[test]
    fn test_validate_stroke_settings() {
        assert!(StrokeSettings::default().validate().is_ok());

        let cases = [
            StrokeSettings {
                weight: -0.5,
                ..StrokeSettings::default()
            },
            StrokeSettings {
                weight: f64::NAN,
                ..StrokeSettings::default()
            },
            StrokeSettings {
                circle_segments: 0,
                ..StrokeSettings::default()
            },
            StrokeSettings {
                dot_cap_factor: 0.0,
                ..StrokeSettings::default()
            },
            StrokeSettings {
                collinear_tolerance: -1e-3,
                ..StrokeSettings::default()
            },
            StrokeSettings {
                collinear_tolerance: f64::INFINITY,
                ..StrokeSettings::default()
            },
        ];
        for settings in cases {
            assert!(settings.validate().is_err(), "{settings:?} should be rejected");
        }
    }
}
