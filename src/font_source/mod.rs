//! Font source data
//!
//! Everything the font is built from: the authored stroke skeletons, the
//! composite table that derives accented letters from them, and the optional
//! codepoint name table.

pub mod char_names;
pub mod composites;
pub mod data;
pub mod stroke_file;

// Explicit re-exports for public API
pub use char_names::CharNames;
pub use composites::{CompositeTable, DEFAULT_COMPOSITES};
pub use data::{normalize_strokes, GlyphSource, RawPoint, RawStroke, Stroke};
pub use stroke_file::StrokeFontSource;
