//! Command line interface for the Brutalita font builder
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs.

use super::config_file::ConfigFile;
use super::settings::BrutalitaSettings;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

/// Brutalita CLI arguments
///
/// Examples:
///   brutalita strokes.json                          # Build Brutalita Custom.ufo
///   brutalita strokes.json -o Brutalita.ttf         # Compile with fontc
///   brutalita strokes.json --names names.csv        # Use named glyphs
///   brutalita strokes.json --production             # Production family name
///   brutalita --new-config                          # Write default settings
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "brutalita",
    version,
    about = "Build the Brutalita stroke font from stroke skeletons",
    long_about = "Brutalita turns hand-authored stroke skeletons (polylines and dots on a design grid) into closed glyph outlines with a constant stroke weight, and writes them out as a UFO or, through fontc, as a binary font."
)]
pub struct CliArgs {
    /// Stroke source JSON file
    #[clap(
        required_unless_present = "new_config",
        help = "Stroke source JSON file",
        long_help = "Stroke source JSON file. Either a map from character to strokes, or an object with \"glyphs\" and optional \"composites\" maps."
    )]
    pub source: Option<PathBuf>,

    /// Output path; the extension selects the format
    #[clap(
        long = "output",
        short = 'o',
        help = "Output font (.ufo or .ttf)",
        long_help = "Output path. A .ufo path is written directly; a .ttf is compiled with fontc, which writes TrueType outlines only, so .otf is not accepted. Defaults to '<family name>.ufo' in the current directory."
    )]
    pub output: Option<PathBuf>,

    /// Codepoint name table
    #[clap(
        long = "names",
        short = 'n',
        help = "CSV of name,hex-codepoint rows used for glyph names",
        long_help = "CSV file of name,hex-codepoint rows used to name glyphs. If missing or unreadable, glyphs are named after their character."
    )]
    pub names: Option<PathBuf>,

    /// Settings file to use instead of ~/.config/brutalita/settings.json
    #[clap(long = "config", short = 'c', help = "Settings JSON file")]
    pub config: Option<PathBuf>,

    /// Production build
    #[clap(
        long = "production",
        help = "Use the production family name",
        long_help = "Use the production family name instead of the custom variant. Has no effect on outlines."
    )]
    pub production: bool,

    /// Override the stroke weight
    #[clap(long = "weight", short = 'w', help = "Stroke weight in design units")]
    pub weight: Option<f64>,

    /// fontc binary used for binary output
    #[clap(long = "fontc", default_value = "fontc", help = "fontc binary for .ttf output")]
    pub fontc: PathBuf,

    /// Enable debug logging
    #[clap(long = "verbose", short = 'v', help = "Enable debug logging")]
    pub verbose: bool,

    /// Also log to ~/.config/brutalita/logs/
    #[clap(long = "log-file", help = "Also write logs to the config directory")]
    pub log_file: bool,

    /// Initialize user configuration directory with default settings
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with default settings",
        long_help = "Initialize the ~/.config/brutalita directory with a settings.json file holding every default value, then exit."
    )]
    pub new_config: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures that input paths exist and values are usable before any
    /// work starts, with clear error messages for common mistakes.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(source) = &self.source {
            if !source.is_file() {
                return Err(format!(
                    "Stroke source does not exist: {}\nMake sure the path is correct and the file exists.",
                    source.display()
                ));
            }
        }

        if let Some(config) = &self.config {
            if !config.is_file() {
                return Err(format!("Config file does not exist: {}", config.display()));
            }
        }

        if let Some(weight) = self.weight {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(format!("Stroke weight must be positive, got {weight}"));
            }
        }

        if let Some(output) = &self.output {
            crate::export::OutputFormat::from_path(output).map_err(|e| e.to_string())?;
        }

        Ok(())
    }

    /// Build the settings for this run
    ///
    /// Priority order:
    /// 1. CLI arguments (--weight)
    /// 2. Config file (--config, else ~/.config/brutalita/settings.json)
    /// 3. Built-in defaults
    pub fn resolve_settings(&self) -> anyhow::Result<BrutalitaSettings> {
        let mut settings = BrutalitaSettings::default();

        let config = match &self.config {
            Some(path) => Some(ConfigFile::load_from(path)?),
            None => ConfigFile::load(),
        };
        if let Some(config) = config {
            config.apply_to(&mut settings);
        }

        if let Some(weight) = self.weight {
            debug!("Using stroke weight from CLI: {}", weight);
            settings.stroke.weight = weight;
        }

        settings
            .stroke
            .validate()
            .context("Invalid stroke settings")?;
        Ok(settings)
    }

    /// The output path, defaulting to `<family name>.ufo`
    pub fn output_path(&self, settings: &BrutalitaSettings) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!(
                "{}.ufo",
                settings.font.family_name_for(self.production)
            ))
        })
    }
}
