//! Structured logging setup.
//!
//! The codec itself only emits `tracing` events. Binaries and tests that want
//! to see them can install a subscriber from a [`LoggingConfig`] here.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::constants::ERR_LOGGING_INIT;
use crate::error::{ProtocolError, Result};

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this when a
/// global subscriber is already set is not an error; the first one stays.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = config.parsed_level().ok_or_else(|| {
        ProtocolError::ConfigError(format!(
            "{ERR_LOGGING_INIT}: unknown level '{}'",
            config.level
        ))
    })?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if installed.is_err() {
        tracing::debug!("global subscriber already installed; keeping it");
    }
    Ok(())
}
