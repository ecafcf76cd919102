//! Application logging
//!
//! Logs go to stderr through `tracing-subscriber`. With `--log-file` they are
//! also written to a daily log file under ~/.config/brutalita/logs/.

use crate::core::config_file::ConfigFile;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Prefix of the rolling log files
const LOG_FILE_PREFIX: &str = "brutalita.log";

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// Initialize the logs directory
pub fn initialize_logs_directory() -> anyhow::Result<PathBuf> {
    let logs_dir = logs_dir();
    fs::create_dir_all(&logs_dir)?;
    Ok(logs_dir)
}

/// Default filter directive: `RUST_LOG` wins, then `--verbose`
fn env_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber
///
/// The returned guard flushes the log file when dropped and must be kept
/// alive for the whole run.
pub fn init(verbose: bool, log_to_file: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter(verbose));

    let (file_layer, guard) = if log_to_file {
        let logs_dir = initialize_logs_directory()?;
        let appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(env_filter(verbose));
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
