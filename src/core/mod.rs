//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - CLI handling
//! - User configuration file and build settings
//! - Platform error reporting
//! - The build runner

pub mod cli;
pub mod config_file;
pub mod platform;
pub mod runner;
pub mod settings;

// Re-export commonly used items
pub use cli::CliArgs;
pub use config_file::ConfigFile;
pub use runner::{run_app, run_build, BuildRequest};
pub use settings::{BrutalitaSettings, FontSettings, FontTransform, StrokeSettings};
