//! File logging for hosts embedding the engine

use anyhow::{anyhow, Context, Result};
use std::str::FromStr;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, APP_VERSION};

/// Install a global subscriber writing to the configured log file.
///
/// Keep the returned guard alive for as long as logs should be flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let level = Level::from_str(config.level.trim())
        .with_context(|| format!("invalid log level {:?}", config.level))?;

    let file_appender = tracing_appender::rolling::never(&config.directory, &config.file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;

    tracing::info!(app = APP_NAME, version = APP_VERSION, "Logging initialized");
    Ok(guard)
}
