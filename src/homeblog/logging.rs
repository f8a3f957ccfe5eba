//! Logging setup.
//!
//! The library only emits `tracing` events. The binary installs a subscriber here:
//! human-readable or JSON lines on stderr, so stdout stays clean for command output.
//! `HOMEBLOG_LOG` takes precedence over the configured level.

use crate::error::{BlogError, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "HOMEBLOG_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

pub fn build_filter(default_level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level).map_err(|e| {
            BlogError::Config(format!("invalid log level {:?}: {}", default_level, e))
        }),
    }
}

pub fn init_logging(default_level: &str, format: LogFormat) -> Result<()> {
    let filter = build_filter(default_level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.compact().try_init(),
    };
    installed.map_err(|e| BlogError::Config(format!("failed to install logger: {}", e)))
}
