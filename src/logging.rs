//! File logging.
//!
//! The terminal is in raw mode while editing, so log lines never go to the
//! console. They are written to `hexe.log` in the data directory with daily
//! rotation.
//!
//! The filter comes from the `HEXE_LOG` environment variable when set
//! (`HEXE_LOG=hexe::session=debug`), else from the configured level.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "HEXE_LOG";

/// Directory the log files are written to.
pub fn logs_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("hexe").join("logs"))
}

/// Filter from `HEXE_LOG`, falling back to `level`.
fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Does nothing when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let dir = logs_dir().context("Could not determine the data directory")?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(dir, "hexe.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter(&config.level));

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;
    Ok(())
}
