//! Application runner logic
//!
//! Loads the inputs, builds the font document and exports it.

use super::cli::CliArgs;
use super::config_file::ConfigFile;
use super::settings::BrutalitaSettings;
use crate::document::{build_font_document, FontDocument};
use crate::export::{export_document, FontCompiler};
use crate::font_source::{CharNames, StrokeFontSource};
use crate::logging;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Run the application with the given CLI arguments.
/// Handles special CLI flags and delegates to the build.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory();
    }

    let _log_guard = logging::init(cli_args.verbose, cli_args.log_file)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(build_font(&cli_args))?;
    Ok(())
}

/// Everything one build needs, resolved from the CLI
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub source: PathBuf,
    pub names: Option<PathBuf>,
    pub output: PathBuf,
    pub production: bool,
    pub settings: BrutalitaSettings,
}

impl BuildRequest {
    pub fn from_cli(cli_args: &CliArgs) -> Result<Self> {
        let source = cli_args
            .source
            .clone()
            .context("No stroke source given")?;
        let settings = cli_args.resolve_settings()?;
        let output = cli_args.output_path(&settings);

        Ok(Self {
            source,
            names: cli_args.names.clone(),
            output,
            production: cli_args.production,
            settings,
        })
    }
}

async fn build_font(cli_args: &CliArgs) -> Result<PathBuf> {
    let request = BuildRequest::from_cli(cli_args)?;
    let compiler = FontCompiler::new(cli_args.fontc.as_os_str());
    run_build(&request, &compiler).await
}

/// Load, outline and export one font
pub async fn run_build(request: &BuildRequest, compiler: &FontCompiler) -> Result<PathBuf> {
    // The name table must settle before any glyph is named
    let (source, names) = tokio::join!(
        StrokeFontSource::load(&request.source),
        CharNames::load_or_empty(request.names.as_deref()),
    );
    let source = source?;

    let document = assemble_document(&source, &names, request);
    let written = export_document(&document, &request.output, compiler).await?;
    log_summary(&document, &written);
    Ok(written)
}

/// Resolve composites and outline every glyph
pub fn assemble_document(
    source: &StrokeFontSource,
    names: &CharNames,
    request: &BuildRequest,
) -> FontDocument {
    let glyphs = source.resolved_glyphs();
    build_font_document(&glyphs, names, &request.settings, request.production)
}

fn log_summary(document: &FontDocument, written: &Path) {
    let stats = document.stats();
    info!(
        "Built \"{} {}\" with {} glyphs ({} quads, {} vertex caps, {} dot caps) at {}",
        document.family_name,
        document.style_name,
        document.glyphs.len(),
        stats.quads,
        stats.vertex_caps,
        stats.dot_caps,
        written.display()
    );
}
