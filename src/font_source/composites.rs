//! Composite characters
//!
//! Accented letters are not drawn by hand. Each composite maps to an ordered
//! list of constituent characters whose strokes are concatenated, base first.

use super::data::GlyphSource;
use anyhow::{bail, Result};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Composites built into every font: acute vowels
pub const DEFAULT_COMPOSITES: &[(char, &[char])] = &[
    ('á', &['a', '\u{b4}']),
    ('é', &['e', '\u{b4}']),
    ('í', &['i', '\u{b4}']),
    ('ó', &['o', '\u{b4}']),
    ('ú', &['u', '\u{b4}']),
];

/// Ordered mapping from a composite character to its constituents
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeTable {
    entries: Vec<(char, Vec<char>)>,
}

impl Default for CompositeTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_COMPOSITES
                .iter()
                .map(|(composite, parts)| (*composite, parts.to_vec()))
                .collect(),
        }
    }
}

impl CompositeTable {
    /// A table with no entries
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[(char, Vec<char>)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add or replace an entry. A replaced entry keeps its position.
    pub fn insert(&mut self, composite: char, parts: Vec<char>) {
        match self.entries.iter_mut().find(|(c, _)| *c == composite) {
            Some(entry) => entry.1 = parts,
            None => self.entries.push((composite, parts)),
        }
    }

    /// Merge entries authored in a stroke source, keyed and valued by
    /// single-character strings
    pub fn merge_authored(&mut self, authored: &BTreeMap<String, Vec<String>>) -> Result<()> {
        for (key, parts) in authored {
            let composite = single_char(key)?;
            let parts = parts
                .iter()
                .map(|part| single_char(part))
                .collect::<Result<Vec<_>>>()?;
            self.insert(composite, parts);
        }
        Ok(())
    }

    /// Add every composite whose constituents are all present
    ///
    /// Constituents are looked up among the authored glyphs only, so one
    /// composite cannot be built out of another. A composite replaces an
    /// authored glyph for the same character.
    pub fn resolve(&self, glyphs: &mut BTreeMap<char, GlyphSource>) {
        let mut resolved = Vec::with_capacity(self.entries.len());

        for (composite, parts) in &self.entries {
            let found: Option<Vec<&GlyphSource>> =
                parts.iter().map(|part| glyphs.get(part)).collect();

            match found {
                Some(sources) if !sources.is_empty() => {
                    debug!("Composing '{}' from {:?}", composite, parts);
                    resolved.push(GlyphSource::composite(*composite, &sources));
                }
                _ => {
                    let missing: Vec<_> =
                        parts.iter().filter(|p| !glyphs.contains_key(*p)).collect();
                    warn!(
                        "Skipping composite '{}': missing constituents {:?}",
                        composite, missing
                    );
                }
            }
        }

        for source in resolved {
            if glyphs.contains_key(&source.character()) {
                debug!("Composite replaces authored glyph '{}'", source.character());
            }
            glyphs.insert(source.character(), source);
        }
    }
}

fn single_char(text: &str) -> Result<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("Composite entries must be single characters, got {:?}", text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyphs(entries: &[(char, &[Vec<Vec<f64>>])]) -> BTreeMap<char, GlyphSource> {
        entries
            .iter()
            .map(|(c, raw)| (*c, GlyphSource::from_raw(*c, raw)))
            .collect()
    }

    #[test]
    fn test_default_table_has_acute_vowels() {
        let table = CompositeTable::default();
        assert_eq!(table.len(), 5);
        assert_eq!(table.entries()[0], ('á', vec!['a', '\u{b4}']));
    }

    #[test]
    fn test_resolve_concatenates_constituents() {
        let mut source = glyphs(&[
            ('a', &[vec![vec![0.0, 0.0], vec![1.0, 0.0]]]),
            ('\u{b4}', &[vec![vec![0.5, -1.0], vec![0.7, -1.4]]]),
        ]);
        CompositeTable::default().resolve(&mut source);

        let composite = &source[&'á'];
        assert_eq!(composite.strokes().len(), 2);
        assert_eq!(composite.strokes()[0], source[&'a'].strokes()[0]);
        assert_eq!(composite.strokes()[1], source[&'\u{b4}'].strokes()[0]);
        // no base letters for the other vowels
        assert!(!source.contains_key(&'é'));
    }

    #[test]
    fn test_composite_replaces_authored_glyph() {
        let mut source = glyphs(&[
            ('a', &[vec![vec![0.0, 0.0]]]),
            ('\u{b4}', &[vec![vec![1.0, 1.0]]]),
            ('á', &[vec![vec![5.0, 5.0], vec![6.0, 6.0]]]),
        ]);
        CompositeTable::default().resolve(&mut source);
        assert_eq!(source[&'á'].strokes().len(), 2);
        assert!(source[&'á'].strokes().iter().all(|s| s.is_dot()));
    }

    #[test]
    fn test_merge_authored_entries() {
        let mut table = CompositeTable::default();
        let mut authored = BTreeMap::new();
        authored.insert("ñ".to_string(), vec!["n".to_string(), "~".to_string()]);
        authored.insert("á".to_string(), vec!["a".to_string(), "`".to_string()]);
        table.merge_authored(&authored).unwrap();

        assert_eq!(table.len(), 6);
        assert_eq!(table.entries()[0], ('á', vec!['a', '`']));
        assert_eq!(table.entries()[5], ('ñ', vec!['n', '~']));
    }

    #[test]
    fn test_merge_rejects_multi_char_entries() {
        let mut table = CompositeTable::empty();
        let mut authored = BTreeMap::new();
        authored.insert("ae".to_string(), vec!["a".to_string()]);
        assert!(table.merge_authored(&authored).is_err());
    }
}
