//! Font document
//!
//! The finished font before encoding: metadata plus an ordered glyph list
//! that always starts with `.notdef`.

pub mod builder;
pub mod naming;

pub use builder::build_font_document;
pub use naming::GlyphNamer;

use crate::outline::{GlyphOutline, OutlineStats};

/// Name of the reserved fallback glyph
pub const NOTDEF_NAME: &str = ".notdef";

/// One glyph ready for encoding
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentGlyph {
    pub name: String,
    pub codepoint: u32,
    pub advance_width: f64,
    pub outline: GlyphOutline,
}

impl DocumentGlyph {
    /// The reserved `.notdef` glyph: codepoint 0, no outline
    pub fn notdef(advance_width: f64) -> Self {
        Self {
            name: NOTDEF_NAME.to_string(),
            codepoint: 0,
            advance_width,
            outline: GlyphOutline::empty(),
        }
    }

    pub fn is_notdef(&self) -> bool {
        self.name == NOTDEF_NAME
    }
}

/// A complete font, in glyph order
#[derive(Debug, Clone, PartialEq)]
pub struct FontDocument {
    pub family_name: String,
    pub style_name: String,
    pub units_per_em: f64,
    pub ascender: f64,
    pub descender: f64,
    pub glyphs: Vec<DocumentGlyph>,
}

impl FontDocument {
    pub fn glyph(&self, name: &str) -> Option<&DocumentGlyph> {
        self.glyphs.iter().find(|g| g.name == name)
    }

    /// Subpath counts summed over all glyphs
    pub fn stats(&self) -> OutlineStats {
        let mut stats = OutlineStats::default();
        for glyph in &self.glyphs {
            stats += glyph.outline.stats();
        }
        stats
    }
}
