//! Connection-level packets: login, chat, clock and health.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::core::wire::{WireRead, WireWrite};
use crate::error::Result;
use crate::protocol::packet::{PacketBody, PacketKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeepAlive;

impl PacketBody for KeepAlive {
    const KIND: PacketKind = PacketKind::KeepAlive;

    fn decode_body<R: Read + ?Sized>(_r: &mut R) -> Result<Self> {
        Ok(KeepAlive)
    }

    fn encode_body<W: Write + ?Sized>(&self, _w: &mut W) -> Result<()> {
        Ok(())
    }
}

/// Login exchange.
///
/// `map_seed` and `dimension` are read from the wire but always written as
/// zero, whatever the struct holds. Encoding does not round-trip them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub entity_id: i32,
    pub user_name: String,
    pub map_seed: i64,
    pub dimension: u8,
}

impl PacketBody for LoginRequest {
    const KIND: PacketKind = PacketKind::LoginRequest;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity_id: r.read_i32()?,
            user_name: r.read_string16()?,
            map_seed: r.read_i64()?,
            dimension: r.read_u8()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i32(self.entity_id)?;
        w.write_string16(&self.user_name)?;
        w.write_i64(0)?;
        w.write_u8(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handshake {
    pub user_name: String,
}

impl PacketBody for Handshake {
    const KIND: PacketKind = PacketKind::Handshake;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            user_name: r.read_string16()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_string16(&self.user_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub message: String,
}

impl PacketBody for ChatMessage {
    const KIND: PacketKind = PacketKind::ChatMessage;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            message: r.read_string16()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_string16(&self.message)
    }
}

/// World time in ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeUpdate {
    pub time: i64,
}

impl PacketBody for TimeUpdate {
    const KIND: PacketKind = PacketKind::TimeUpdate;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self { time: r.read_i64()? })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i64(self.time)
    }
}

/// Compass target, in block coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl PacketBody for SpawnPosition {
    const KIND: PacketKind = PacketKind::SpawnPosition;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            x: r.read_i32()?,
            y: r.read_i32()?,
            z: r.read_i32()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i32(self.x)?;
        w.write_i32(self.y)?;
        w.write_i32(self.z)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateHealth {
    pub health: i16,
}

impl PacketBody for UpdateHealth {
    const KIND: PacketKind = PacketKind::UpdateHealth;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            health: r.read_i16()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i16(self.health)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Respawn;

impl PacketBody for Respawn {
    const KIND: PacketKind = PacketKind::Respawn;

    fn decode_body<R: Read + ?Sized>(_r: &mut R) -> Result<Self> {
        Ok(Respawn)
    }

    fn encode_body<W: Write + ?Sized>(&self, _w: &mut W) -> Result<()> {
        Ok(())
    }
}
