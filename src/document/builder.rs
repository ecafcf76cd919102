//! Font assembler
//!
//! Outlines every resolved glyph and wraps the results, behind `.notdef`,
//! into a [`FontDocument`].

use super::{DocumentGlyph, FontDocument, GlyphNamer};
use crate::core::settings::BrutalitaSettings;
use crate::font_source::{CharNames, GlyphSource};
use crate::outline::assemble_glyph;
use tracing::{debug, info};

/// Build the font document for `glyphs`, in the given order
pub fn build_font_document(
    glyphs: &[GlyphSource],
    names: &CharNames,
    settings: &BrutalitaSettings,
    production: bool,
) -> FontDocument {
    let font = &settings.font;
    let mut namer = GlyphNamer::new(names);

    let mut document_glyphs = Vec::with_capacity(glyphs.len() + 1);
    document_glyphs.push(DocumentGlyph::notdef(font.advance_width));

    for source in glyphs {
        let name = namer.name(source.character());
        debug!("Making glyph '{}' as {}", source.character(), name);
        document_glyphs.push(DocumentGlyph {
            name,
            codepoint: source.codepoint(),
            advance_width: font.advance_width,
            outline: assemble_glyph(source, &settings.stroke),
        });
    }

    let family_name = font.family_name_for(production).to_string();
    info!(
        "Assembled {} glyphs for \"{} {}\"",
        document_glyphs.len(),
        family_name,
        font.style_name
    );

    FontDocument {
        family_name,
        style_name: font.style_name.clone(),
        units_per_em: font.units_per_em,
        ascender: font.ascender,
        descender: font.descender,
        glyphs: document_glyphs,
    }
}
