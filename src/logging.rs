//! Logging setup for applications embedding the Kilo Index.
//!
//! The library itself only emits `tracing` events. This module installs a
//! global `tracing_subscriber` driven by [`LogConfig`] for callers that do not
//! bring their own subscriber.

use crate::config::LogConfig;
use crate::error::{KiloError, KiloResult};
use tracing_subscriber::EnvFilter;

/// Builds the event filter: `RUST_LOG` when set, the configured level otherwise.
pub fn env_filter(config: &LogConfig) -> KiloResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| KiloError::Custom(format!("Invalid log filter {:?}: {e}", config.level))),
    }
}

/// Initialize the logging system.
///
/// # Errors
///
/// Fails if the filter cannot be parsed or a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> KiloResult<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_thread_names(true);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| KiloError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}
