//! Stroke geometry
//!
//! Everything here works on design-space points and emits font-unit
//! polygons. All functions are pure and take their constants from
//! [`StrokeSettings`](crate::core::settings::StrokeSettings).

pub mod caps;
pub mod classifier;
pub mod outliner;
pub mod point;
pub mod transform;
pub mod utilities;

// Re-export commonly used items
pub use caps::{cap_polygon, dot_cap, vertex_cap};
pub use classifier::{exposed_vertices, VertexClass};
pub use outliner::{outline_polyline, outline_segment};
pub use point::{PointKey, UniquePoints};
pub use transform::{to_cartesian, to_font_units, to_polar, Polar};
