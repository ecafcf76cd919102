//! Stroke source files
//!
//! Two JSON shapes are accepted. The bare shape maps each character straight
//! to its strokes:
//!
//! ```json
//! { "a": [[[0, 0], [1, 0]]], ".": [[[0.5, 2]]] }
//! ```
//!
//! The structured shape wraps that map and may add composites:
//!
//! ```json
//! { "glyphs": { "n": [...], "~": [...] }, "composites": { "ñ": ["n", "~"] } }
//! ```

use super::composites::CompositeTable;
use super::data::{GlyphSource, RawStroke};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

type RawGlyphs = BTreeMap<String, Vec<RawStroke>>;

#[derive(Debug, Deserialize)]
struct StructuredSource {
    glyphs: RawGlyphs,
    #[serde(default)]
    composites: BTreeMap<String, Vec<String>>,
}

/// The structured shape is recognized by a top-level `glyphs` object
fn is_structured(value: &serde_json::Value) -> bool {
    value.get("glyphs").is_some_and(serde_json::Value::is_object)
}

/// Every authored glyph plus the composite table to apply to them
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeFontSource {
    glyphs: BTreeMap<char, GlyphSource>,
    composites: CompositeTable,
}

impl StrokeFontSource {
    pub fn new(glyphs: BTreeMap<char, GlyphSource>, composites: CompositeTable) -> Self {
        Self { glyphs, composites }
    }

    /// Parse a source from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        let shape: serde_json::Value =
            serde_json::from_str(text).context("Stroke source is not valid JSON")?;

        // Parse the text again as the concrete shape so errors keep their position
        let (raw_glyphs, authored_composites) = if is_structured(&shape) {
            let source: StructuredSource = serde_json::from_str(text)
                .context("Stroke source does not match the structured glyphs/composites shape")?;
            (source.glyphs, source.composites)
        } else {
            let glyphs: RawGlyphs = serde_json::from_str(text)
                .context("Stroke source does not map characters to strokes")?;
            (glyphs, BTreeMap::new())
        };

        // Keys sort as strings, so an exact single-character key is seen before
        // any longer key sharing its first character
        let mut glyphs: BTreeMap<char, GlyphSource> = BTreeMap::new();
        for (key, strokes) in &raw_glyphs {
            let mut chars = key.chars();
            let Some(character) = chars.next() else {
                warn!("Skipping glyph with an empty key");
                continue;
            };
            if chars.next().is_some() {
                warn!("Glyph key {:?} has several characters, using '{}'", key, character);
            }
            if glyphs.contains_key(&character) {
                warn!(
                    "Skipping glyph key {:?}: '{}' is already defined by an earlier key",
                    key, character
                );
                continue;
            }
            glyphs.insert(character, GlyphSource::from_raw(character, strokes));
        }

        let mut composites = CompositeTable::default();
        composites
            .merge_authored(&authored_composites)
            .context("Invalid composite table")?;

        debug!(
            "Parsed {} glyphs and {} composites",
            glyphs.len(),
            composites.len()
        );
        Ok(Self { glyphs, composites })
    }

    /// Read and parse a source file
    pub async fn load(path: &Path) -> Result<Self> {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read stroke source {}", path.display()))?;
        let source = Self::from_json_str(&text)
            .with_context(|| format!("Failed to parse stroke source {}", path.display()))?;
        info!(
            "Loaded {} glyphs from {}",
            source.glyphs.len(),
            path.display()
        );
        Ok(source)
    }

    pub fn glyphs(&self) -> &BTreeMap<char, GlyphSource> {
        &self.glyphs
    }

    pub fn composites(&self) -> &CompositeTable {
        &self.composites
    }

    /// The final glyph list, composites applied, ordered by codepoint
    pub fn resolved_glyphs(&self) -> Vec<GlyphSource> {
        let mut glyphs = self.glyphs.clone();
        self.composites.resolve(&mut glyphs);
        glyphs.into_values().collect()
    }
}
