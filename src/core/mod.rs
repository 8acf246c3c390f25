//! # Core Codec Components
//!
//! The layers every packet is built from.
//!
//! ## Components
//! - **Wire**: big-endian integers, little-endian floats, String8/String16
//! - **Metadata**: the 0x7F-terminated typed key/value block
//! - **Codec**: Tokio framing that drives the packet dispatcher over a `BytesMut`
//!
//! ## Wire Format
//! ```text
//! [Tag(1)] [Body(N)]
//! ```
//!
//! There is no length prefix; each body's size follows from its layout.

pub mod codec;
pub mod metadata;
pub mod wire;
