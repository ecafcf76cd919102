//! Codepoint name table
//!
//! Glyph names are looked up in a CSV of `name,hex-codepoint[,...]` rows.
//! The table is optional: any row that does not parse is skipped, and a table
//! that cannot be read at all leaves every glyph on its fallback name.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Mapping from codepoint to display name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharNames {
    names: HashMap<u32, String>,
}

impl CharNames {
    /// An empty table; every lookup falls back
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse CSV text. Later rows win for duplicate codepoints.
    pub fn parse(text: &str) -> Self {
        let mut names = HashMap::new();
        let mut skipped = 0usize;

        for line in text.trim().lines() {
            match parse_row(line) {
                Some((codepoint, name)) => {
                    names.insert(codepoint, name);
                }
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!("Skipped {} unparseable name table row(s)", skipped);
        }
        Self { names }
    }

    /// Read and parse a table from disk
    pub async fn load(path: &Path) -> Result<Self> {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read name table {}", path.display()))?;
        let names = Self::parse(&text);
        info!("Loaded {} glyph names from {}", names.len(), path.display());
        Ok(names)
    }

    /// Load a table if a path was given, degrading to an empty table on any
    /// failure
    pub async fn load_or_empty(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            debug!("No name table given, using literal characters as names");
            return Self::empty();
        };

        match Self::load(path).await {
            Ok(names) => names,
            Err(e) => {
                warn!("{:#}; falling back to literal characters", e);
                Self::empty()
            }
        }
    }

    pub fn get(&self, codepoint: u32) -> Option<&str> {
        self.names.get(&codepoint).map(String::as_str)
    }

    /// The table's name for `character`, or the character itself
    pub fn name_for(&self, character: char) -> String {
        self.get(character as u32)
            .map(str::to_string)
            .unwrap_or_else(|| character.to_string())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn parse_row(line: &str) -> Option<(u32, String)> {
    let mut fields = line.split(',');
    let name = fields.next()?.trim();
    let hex = fields.next()?.trim();
    if name.is_empty() {
        return None;
    }
    let hex = hex
        .trim_start_matches("U+")
        .trim_start_matches("0x")
        .trim_start_matches("0X");
    let codepoint = u32::from_str_radix(hex, 16).ok()?;
    Some((codepoint, name.to_string()))
}
