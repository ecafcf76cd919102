//! Font export
//!
//! The output path's extension picks the format. A `.ufo` target is written
//! directly; `.ttf` targets are staged as a UFO in a temporary directory and
//! compiled with `fontc`. Any failure here fails the whole run.

pub mod compiler;

pub use compiler::FontCompiler;

use crate::data::save_document_as_ufo;
use crate::document::FontDocument;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Ufo,
    TrueType,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("ufo") => Ok(Self::Ufo),
            Some("ttf") => Ok(Self::TrueType),
            // fontc only writes glyf outlines, so a .otf would hold TrueType data
            Some("otf") => bail!(
                "Cannot write {}: fontc produces TrueType outlines only\nUse .ufo or .ttf",
                path.display()
            ),
            Some(other) => bail!(
                "Unsupported output extension '.{}' for {}\nUse .ufo or .ttf",
                other,
                path.display()
            ),
            None => bail!(
                "Output path has no extension: {}\nUse .ufo or .ttf",
                path.display()
            ),
        }
    }

    pub fn needs_compiler(&self) -> bool {
        !matches!(self, Self::Ufo)
    }
}

/// Write `document` to `output` in the format its extension names
pub async fn export_document(
    document: &FontDocument,
    output: &Path,
    compiler: &FontCompiler,
) -> Result<PathBuf> {
    let format = OutputFormat::from_path(output)?;

    if !format.needs_compiler() {
        save_document_as_ufo(document, output)?;
        return Ok(output.to_path_buf());
    }

    let staging = tempfile::Builder::new()
        .prefix("brutalita-")
        .tempdir()
        .context("Failed to create staging directory")?;
    let ufo_path = staging.path().join(staged_ufo_name(document));
    debug!("Staging UFO at {}", ufo_path.display());

    save_document_as_ufo(document, &ufo_path)?;
    compiler.compile(&ufo_path, output).await
}

fn staged_ufo_name(document: &FontDocument) -> String {
    let stem: String = format!("{}-{}", document.family_name, document.style_name)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("{stem}.ufo")
}
