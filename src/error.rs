//! # Error Types
//!
//! Error handling for the packet codec.
//!
//! Every failure is surfaced to the caller immediately. The codec never retries
//! a read and never hands back a partially decoded packet; the caller owns the
//! channel and decides whether to drop the connection or resynchronise.
//!
//! ## Error Categories
//! - **Short reads**: the channel ran dry in the middle of a field or string
//! - **Registry errors**: unknown packet tags
//! - **Metadata errors**: unsupported kinds, out-of-range indices
//! - **String errors**: negative or oversized lengths
//! - **I/O and configuration errors**
//!
//! ## Example Usage
//! ```rust
//! use beta_protocol::error::ProtocolError;
//! use beta_protocol::protocol::dispatcher::decode_packet;
//! use beta_protocol::protocol::packet::Direction;
//! use tracing::{error, info};
//!
//! let mut bytes: &[u8] = &[0xAB];
//! match decode_packet(&mut bytes, Direction::Clientbound) {
//!     Ok(packet) => info!(?packet, "decoded"),
//!     Err(ProtocolError::UnknownPacketTag(tag)) => error!(tag, "unknown tag"),
//!     Err(e) => error!(error = %e, "decode failed"),
//! }
//! ```

use std::io;
use thiserror::Error;

/// Error message constants for the configuration layer.
pub mod constants {
    pub const ERR_CONFIG_OPEN: &str = "Failed to open config file";
    pub const ERR_CONFIG_READ: &str = "Failed to read config file";
    pub const ERR_CONFIG_PARSE: &str = "Failed to parse TOML";
    pub const ERR_CONFIG_SERIALIZE: &str = "Failed to serialize config";
    pub const ERR_CONFIG_WRITE: &str = "Failed to write config file";
    pub const ERR_LOGGING_INIT: &str = "Failed to initialise logging";
}

// ProtocolError is the primary error type for all codec operations
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Short read: channel ended before {needed} byte field")]
    ShortRead { needed: usize },

    #[error("Unknown packet tag: {0:#04x}")]
    UnknownPacketTag(u8),

    #[error("Unrecognized metadata type {0}")]
    UnrecognizedMetadataKind(u8),

    #[error("Malformed string: declared {declared} bytes, only {available} available")]
    MalformedString { declared: usize, available: usize },

    #[error("Negative string length: {0}")]
    NegativeStringLength(i16),

    #[error("String too long for a 16-bit length prefix: {0}")]
    StringTooLong(usize),

    #[error("Metadata index out of range: {0}")]
    MetadataIndexOutOfRange(u8),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ProtocolError {
    /// True when the channel simply ran out of bytes.
    ///
    /// A buffered caller can treat these as "wait for more input"; any other
    /// error means the stream itself is bad.
    pub fn is_short_read(&self) -> bool {
        matches!(
            self,
            ProtocolError::ShortRead { .. } | ProtocolError::MalformedString { .. }
        )
    }
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
