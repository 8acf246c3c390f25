//! # Packet Layer
//!
//! Packet definitions, per-variant field layouts and the tag registry.
//!
//! ## Components
//! - **Packet**: the closed `Packet` enum, `PacketKind` tag table and `Direction`
//! - **Variants**: one struct per packet shape with its body codec
//! - **Enums**: byte-valued enumerations used inside packet bodies
//! - **Dispatcher**: `decode_packet` / `encode_packet`
//!
//! ## Layout Patterns
//! - Plain fixed layouts, read and written strictly in order
//! - A value-gated tail (`PlayerBlockPlacement`)
//! - A shared entity-id prefix embedded by composition (`Entity`)
//! - Embedded metadata (`MobSpawn`, `EntityMetadata`)

pub mod dispatcher;
pub mod enums;
pub mod packet;
pub mod variants;

#[cfg(test)]
mod tests;
