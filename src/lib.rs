//! # beta-protocol
//!
//! Byte-exact packet codec for revision 11 of the multiplayer game protocol.
//!
//! The crate turns a byte stream into typed [`Packet`] values and back without
//! changing a single byte of the layout. It works over any `std::io::Read` /
//! `std::io::Write` channel, and ships a Tokio [`PacketCodec`] for async
//! transports. Socket handling and game state are the caller's business.
//!
//! ## Layers
//! - [`crate::core::wire`]: scalars and strings
//! - [`crate::core::metadata`]: the terminated key/value block
//! - [`crate::protocol::variants`]: per-packet layouts
//! - [`crate::protocol::dispatcher`]: tag registry
//!
//! ## Example
//! ```rust
//! use beta_protocol::protocol::variants::ChatMessage;
//! use beta_protocol::{decode_packet, encode_packet, Direction, Packet};
//!
//! let packet = Packet::ChatMessage(ChatMessage {
//!     message: "hello".to_string(),
//! });
//!
//! let mut bytes = Vec::new();
//! encode_packet(&packet, &mut bytes).unwrap();
//! assert_eq!(bytes[0], 0x03);
//!
//! let decoded = decode_packet(&mut bytes.as_slice(), Direction::Clientbound).unwrap();
//! assert_eq!(decoded, packet);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod utils;

pub use crate::config::PROTOCOL_VERSION;
pub use crate::core::codec::PacketCodec;
pub use crate::core::metadata::{Metadata, MetadataEntry, MetadataValue};
pub use crate::error::{ProtocolError, Result};
pub use crate::protocol::dispatcher::{decode_packet, encode_packet};
pub use crate::protocol::packet::{Direction, Packet, PacketKind};
