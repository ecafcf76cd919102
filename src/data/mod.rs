//! UFO data conversion and file I/O

pub mod conversions;
pub mod ufo;

pub use conversions::GLYPH_ORDER_KEY;
pub use ufo::{load_ufo_from_path, save_document_as_ufo};
