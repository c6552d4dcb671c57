//! Logging Infrastructure
//!
//! `tracing` subscriber setup: console output by default, daily rolling
//! files when a log directory is configured and exists.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::Config;

/// File name prefix of rolling log files
pub const LOG_FILE_PREFIX: &str = "pos-console";

/// Initialize the logger with defaults
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger from configuration
pub fn init_from_config(config: &Config) {
    init_logger_with_file(Some(&config.log_level), config.log_json, config.log_dir.as_deref());
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level`. A second call is a no-op.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_dir = resolve_log_dir(log_dir);
    let installed = match (file_dir, json) {
        (Some(dir), true) => builder
            .json()
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
            .try_init(),
        (Some(dir), false) => builder
            .with_ansi(false)
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
            .try_init(),
        (None, true) => builder.json().try_init(),
        (None, false) => builder.try_init(),
    };

    if installed.is_ok() && log_dir.is_some() && file_dir.is_none() {
        tracing::warn!(log_dir = ?log_dir, "Log directory does not exist, logging to stdout");
    }
}

/// Configured log directory, if it exists
pub fn resolve_log_dir(log_dir: Option<&str>) -> Option<&Path> {
    log_dir.map(Path::new).filter(|p| p.is_dir())
}
