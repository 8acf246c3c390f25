//! # Configuration Management
//!
//! Protocol constants plus the small amount of runtime configuration the codec
//! takes: which side of the connection is decoding, and how logging is set up.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()` / `from_toml()`
//! - Environment variables via `from_env()`
//! - Direct instantiation with defaults

use crate::error::constants::{
    ERR_CONFIG_OPEN, ERR_CONFIG_PARSE, ERR_CONFIG_READ, ERR_CONFIG_SERIALIZE, ERR_CONFIG_WRITE,
};
use crate::error::{ProtocolError, Result};
use crate::protocol::packet::Direction;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Protocol revision implemented by this codec, for handshake comparison.
pub const PROTOCOL_VERSION: i32 = 11;

/// Byte that ends a metadata collection on the wire.
pub const METADATA_TERMINATOR: u8 = 0x7F;

/// Highest index representable in the 5 low bits of a packed metadata byte.
pub const MAX_METADATA_INDEX: u8 = 0x1F;

/// Top-level codec configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodecConfig {
    /// Which peer the decoded packets come from
    #[serde(default = "default_direction")]
    pub direction: Direction,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_direction() -> Direction {
    Direction::Clientbound
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            direction: default_direction(),
            logging: LoggingConfig::default(),
        }
    }
}

impl CodecConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| ProtocolError::ConfigError(format!("{ERR_CONFIG_OPEN}: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ProtocolError::ConfigError(format!("{ERR_CONFIG_READ}: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| ProtocolError::ConfigError(format!("{ERR_CONFIG_PARSE}: {e}")))
    }

    /// Load configuration from environment variables, starting from defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(direction) = std::env::var("BETA_PROTOCOL_DIRECTION") {
            config.direction = match direction.to_ascii_lowercase().as_str() {
                "serverbound" => Direction::Serverbound,
                "clientbound" => Direction::Clientbound,
                other => {
                    return Err(ProtocolError::ConfigError(format!(
                        "Invalid BETA_PROTOCOL_DIRECTION: {other}"
                    )))
                }
            };
        }

        if let Ok(level) = std::env::var("BETA_PROTOCOL_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(json) = std::env::var("BETA_PROTOCOL_LOG_JSON") {
            if let Ok(val) = json.parse::<bool>() {
                config.logging.json = val;
            }
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ProtocolError::ConfigError(format!("{ERR_CONFIG_SERIALIZE}: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| ProtocolError::ConfigError(format!("{ERR_CONFIG_WRITE}: {e}")))?;

        Ok(())
    }

    /// Validate the configuration.
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.logging.parsed_level().is_none() {
            errors.push(format!(
                "logging.level '{}' is not one of trace, debug, info, warn, error",
                self.logging.level
            ));
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level name
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// The configured level as a `tracing::Level`, if it names one
    pub fn parsed_level(&self) -> Option<Level> {
        self.level.parse::<Level>().ok()
    }
}
