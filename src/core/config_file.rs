//! User configuration file handling
//!
//! Manages settings from ~/.config/brutalita/settings.json

use super::settings::{BrutalitaSettings, FontSettings, StrokeSettings};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User configuration from ~/.config/brutalita/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments.
/// A section that is present replaces the defaults for that section; fields
/// missing inside it keep their default values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontSettings>,
}

impl ConfigFile {
    /// Get the path to the brutalita config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("brutalita")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from an explicit path. A missing or malformed file
    /// is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        debug!("Loaded settings from {:?}", path);
        Ok(config)
    }

    /// Load configuration from the user config file, if there is a usable one
    pub fn load() -> Option<Self> {
        let path = Self::config_path();

        if !path.exists() {
            return None;
        }

        match Self::load_from(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Ignoring user settings: {:#}", e);
                None
            }
        }
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Layer this file's sections over `settings`
    pub fn apply_to(&self, settings: &mut BrutalitaSettings) {
        if let Some(stroke) = &self.stroke {
            settings.stroke = stroke.clone();
        }
        if let Some(font) = &self.font {
            settings.font = font.clone();
        }
    }

    /// A config file spelling out every default, for users to edit
    pub fn with_defaults() -> Self {
        let defaults = BrutalitaSettings::default();
        Self {
            stroke: Some(defaults.stroke),
            font: Some(defaults.font),
        }
    }

    /// Initialize the user configuration directory
    ///
    /// Creates ~/.config/brutalita with a settings.json holding every default
    /// value and an empty logs/ directory. An existing settings file is left
    /// untouched.
    pub fn initialize_config_directory() -> Result<()> {
        let config_dir = Self::config_dir();
        fs::create_dir_all(&config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = config_dir.join("logs");
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = Self::config_path();
        if !settings_path.exists() {
            Self::with_defaults().save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        Ok(())
    }
}
