//! UFO file I/O operations

use crate::document::FontDocument;
use anyhow::{Context, Result};
use norad::Font;
use std::fs;
use std::path::Path;
use tracing::info;

/// Write a font document to disk as a UFO directory
///
/// An existing UFO at `path` is replaced. Missing parent directories are
/// created.
pub fn save_document_as_ufo(document: &FontDocument, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let font = document.to_norad_font()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    font.save(path)
        .with_context(|| format!("Failed to write UFO {}", path.display()))?;
    info!("Wrote {} glyphs to {}", document.glyphs.len(), path.display());
    Ok(())
}

/// Load a UFO font file from disk
pub fn load_ufo_from_path(path: impl AsRef<Path>) -> Result<Font> {
    let path = path.as_ref();
    let font = Font::load(path).with_context(|| format!("Failed to load UFO {}", path.display()))?;
    Ok(font)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::BrutalitaSettings;
    use crate::document::build_font_document;
    use crate::font_source::{CharNames, GlyphSource};

    #[test]
    fn test_save_and_reload() {
        let sources = vec![
            GlyphSource::from_raw('l', &[vec![vec![0.0, 0.0], vec![0.0, 2.0]]]),
            GlyphSource::from_raw('.', &[vec![vec![0.0, 2.0]]]),
        ];
        let document = build_font_document(
            &sources,
            &CharNames::empty(),
            &BrutalitaSettings::default(),
            false,
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Brutalita.ufo");
        save_document_as_ufo(&document, &path).unwrap();

        let font = load_ufo_from_path(&path).unwrap();
        assert_eq!(font.font_info.family_name.as_deref(), Some("Brutalita Custom"));
        assert_eq!(font.default_layer().len(), 3);

        let l = font.default_layer().get_glyph("l").unwrap();
        assert_eq!(l.contours.len(), 3);
        let first = &l.contours[0].points[0];
        assert!((first.x - 55.0).abs() < 1e-9);
        assert!((first.y - 720.0).abs() < 1e-9);

        let period = font.default_layer().get_glyph(".").unwrap();
        assert_eq!(period.contours.len(), 1);
        assert_eq!(period.contours[0].points.len(), 16);
    }

    #[test]
    fn test_save_creates_missing_parent_directories() {
        let document = build_font_document(
            &[GlyphSource::from_raw('i', &[vec![vec![0.0, 0.0], vec![0.0, 1.0]]])],
            &CharNames::empty(),
            &BrutalitaSettings::default(),
            true,
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build").join("fonts").join("Brutalita.ufo");
        save_document_as_ufo(&document, &path).unwrap();

        let font = load_ufo_from_path(&path).unwrap();
        assert!(font.default_layer().get_glyph("i").is_some());
    }

    #[test]
    fn test_load_missing_ufo_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_ufo_from_path(dir.path().join("missing.ufo")).is_err());
    }
}
