//! Glyph naming
//!
//! Names come from the codepoint name table, then the literal character.
//! Anything the UFO format would reject, and any name already used by an
//! earlier glyph, falls back to `uniXXXX`.

use super::NOTDEF_NAME;
use crate::font_source::CharNames;
use std::collections::HashSet;
use tracing::debug;

/// Hands out unique, valid glyph names in glyph order
#[derive(Debug)]
pub struct GlyphNamer<'a> {
    names: &'a CharNames,
    used: HashSet<String>,
}

impl<'a> GlyphNamer<'a> {
    pub fn new(names: &'a CharNames) -> Self {
        let mut used = HashSet::new();
        used.insert(NOTDEF_NAME.to_string());
        Self { names, used }
    }

    /// Name for `character`, reserving it
    pub fn name(&mut self, character: char) -> String {
        let preferred = self.names.name_for(character);
        let name = if !is_valid_glyph_name(&preferred) {
            debug!("Glyph name {:?} is not valid in a UFO", preferred);
            fallback_name(character)
        } else if self.used.contains(&preferred) {
            debug!("Glyph name {:?} is already taken", preferred);
            fallback_name(character)
        } else {
            preferred
        };
        self.used.insert(name.clone());
        name
    }
}

/// Whether norad accepts `name` as a glyph name
pub fn is_valid_glyph_name(name: &str) -> bool {
    name.parse::<norad::Name>().is_ok()
}

/// `uniXXXX` name for a character
pub fn fallback_name(character: char) -> String {
    format!("uni{:04X}", character as u32)
}
