//! Logging setup for the `log` facade.
//!
//! Log lines go to a file in the platform data directory and, optionally,
//! to stderr. Nothing is installed when logging is disabled.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};

/// Path of the log file written when logging is enabled
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Build the dispatch for `config`, writing to `log_path` when given
pub fn build_dispatch(config: &LoggingConfig, log_path: Option<&Path>) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("sqlx", LevelFilter::Warn)
        .level_for("sea_orm", LevelFilter::Warn);

    if let Some(path) = log_path {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    if config.log_to_stderr {
        dispatch = dispatch.chain(std::io::stderr());
    }

    Ok(dispatch)
}

/// Install the global logger according to `config`
///
/// # Returns
/// `true` if a logger was installed
pub fn init(config: &LoggingConfig) -> Result<bool> {
    if !config.enabled {
        return Ok(false);
    }

    let log_path = get_log_file_path()?;
    build_dispatch(config, Some(&log_path))?
        .apply()
        .context("Failed to install logger")?;

    Ok(true)
}
