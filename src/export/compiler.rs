use anyhow::{anyhow, Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info};

/// Name of the compiler binary looked up on `PATH`
pub const DEFAULT_FONTC: &str = "fontc";

/// Runs the external `fontc` compiler on a UFO
#[derive(Debug, Clone)]
pub struct FontCompiler {
    program: OsString,
}

impl Default for FontCompiler {
    fn default() -> Self {
        Self::new(DEFAULT_FONTC)
    }
}

impl FontCompiler {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Compile `ufo_path` into a binary font at `output_path`
    pub async fn compile(&self, ufo_path: &Path, output_path: &Path) -> Result<PathBuf> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create output directory {}", parent.display())
                })?;
            }
        }

        let mut cmd = Command::new(&self.program);
        cmd.arg(ufo_path).arg("--output").arg(output_path);
        debug!("Running {:?}", cmd);

        let output = cmd.output().await.with_context(|| {
            format!(
                "Failed to run {}; is it installed and on PATH?",
                self.program.to_string_lossy()
            )
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("FontC compilation failed: {}", stderr.trim()));
        }

        info!("Compiled {}", output_path.display());
        Ok(output_path.to_path_buf())
    }
}
