//! Packets describing what the local player is doing.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::core::wire::{WireRead, WireWrite};
use crate::error::Result;
use crate::protocol::enums::{DigStatus, FaceOffset};
use crate::protocol::packet::{PacketBody, PacketKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseEntity {
    pub user_id: i32,
    pub target_id: i32,
    pub left_click: bool,
}

impl PacketBody for UseEntity {
    const KIND: PacketKind = PacketKind::UseEntity;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            user_id: r.read_i32()?,
            target_id: r.read_i32()?,
            left_click: r.read_bool()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i32(self.user_id)?;
        w.write_i32(self.target_id)?;
        w.write_bool(self.left_click)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub on_ground: bool,
}

impl PacketBody for Player {
    const KIND: PacketKind = PacketKind::Player;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            on_ground: r.read_bool()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_bool(self.on_ground)
    }
}

/// Position update. Note the wire order: x, y, stance, z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub stance: f64,
    pub on_ground: bool,
}

impl PacketBody for PlayerPosition {
    const KIND: PacketKind = PacketKind::PlayerPosition;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        let x = r.read_f64()?;
        let y = r.read_f64()?;
        let stance = r.read_f64()?;
        let z = r.read_f64()?;
        Ok(Self {
            x,
            y,
            z,
            stance,
            on_ground: r.read_bool()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_f64(self.x)?;
        w.write_f64(self.y)?;
        w.write_f64(self.stance)?;
        w.write_f64(self.z)?;
        w.write_bool(self.on_ground)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerLook {
    pub yaw: f32,
    pub pitch: f32,
    pub on_ground: bool,
}

impl PacketBody for PlayerLook {
    const KIND: PacketKind = PacketKind::PlayerLook;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            yaw: r.read_f32()?,
            pitch: r.read_f32()?,
            on_ground: r.read_bool()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_f32(self.yaw)?;
        w.write_f32(self.pitch)?;
        w.write_bool(self.on_ground)
    }
}

/// Fields shared by both directions of the position-and-look packet.
///
/// Only the order of `y` and `stance` on the wire differs between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionLook {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub stance: f64,
    pub yaw: f32,
    pub pitch: f32,
    pub on_ground: bool,
}

impl PositionLook {
    /// Everything after the y/stance pair.
    fn read_tail<R: Read + ?Sized>(r: &mut R, x: f64, y: f64, stance: f64) -> Result<Self> {
        Ok(Self {
            x,
            y,
            stance,
            z: r.read_f64()?,
            yaw: r.read_f32()?,
            pitch: r.read_f32()?,
            on_ground: r.read_bool()?,
        })
    }

    fn write_tail<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_f64(self.z)?;
        w.write_f32(self.yaw)?;
        w.write_f32(self.pitch)?;
        w.write_bool(self.on_ground)
    }
}

/// Sent by the client: x, y, stance, z, yaw, pitch, on_ground.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerPositionLookToServer(pub PositionLook);

impl PacketBody for PlayerPositionLookToServer {
    const KIND: PacketKind = PacketKind::PlayerPositionLook;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        let x = r.read_f64()?;
        let y = r.read_f64()?;
        let stance = r.read_f64()?;
        PositionLook::read_tail(r, x, y, stance).map(Self)
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_f64(self.0.x)?;
        w.write_f64(self.0.y)?;
        w.write_f64(self.0.stance)?;
        self.0.write_tail(w)
    }
}

/// Sent by the server: x, stance, y, z, yaw, pitch, on_ground.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerPositionLookToClient(pub PositionLook);

impl PacketBody for PlayerPositionLookToClient {
    const KIND: PacketKind = PacketKind::PlayerPositionLook;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        let x = r.read_f64()?;
        let stance = r.read_f64()?;
        let y = r.read_f64()?;
        PositionLook::read_tail(r, x, y, stance).map(Self)
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_f64(self.0.x)?;
        w.write_f64(self.0.stance)?;
        w.write_f64(self.0.y)?;
        self.0.write_tail(w)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDigging {
    pub status: DigStatus,
    pub x: i32,
    pub y: u8,
    pub z: i32,
    pub face: FaceOffset,
}

impl PacketBody for PlayerDigging {
    const KIND: PacketKind = PacketKind::PlayerDigging;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            status: DigStatus::from_byte(r.read_u8()?),
            x: r.read_i32()?,
            y: r.read_u8()?,
            z: r.read_i32()?,
            face: FaceOffset::from_byte(r.read_u8()?),
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_u8(self.status.as_byte())?;
        w.write_i32(self.x)?;
        w.write_u8(self.y)?;
        w.write_i32(self.z)?;
        w.write_u8(self.face.as_byte())
    }
}

/// Block placement or item use.
///
/// `amount` and `damage` are only on the wire when `item_id` is non-negative;
/// an empty hand (`item_id == -1`) leaves them at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBlockPlacement {
    pub x: i32,
    pub y: u8,
    pub z: i32,
    pub direction: FaceOffset,
    pub item_id: i16,
    pub amount: u8,
    pub damage: i16,
}

impl PlayerBlockPlacement {
    pub fn carries_item(&self) -> bool {
        self.item_id >= 0
    }
}

impl PacketBody for PlayerBlockPlacement {
    const KIND: PacketKind = PacketKind::PlayerBlockPlacement;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        let mut packet = Self {
            x: r.read_i32()?,
            y: r.read_u8()?,
            z: r.read_i32()?,
            direction: FaceOffset::from_byte(r.read_u8()?),
            item_id: r.read_i16()?,
            amount: 0,
            damage: 0,
        };
        if packet.carries_item() {
            packet.amount = r.read_u8()?;
            packet.damage = r.read_i16()?;
        }
        Ok(packet)
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i32(self.x)?;
        w.write_u8(self.y)?;
        w.write_i32(self.z)?;
        w.write_u8(self.direction.as_byte())?;
        w.write_i16(self.item_id)?;
        if self.carries_item() {
            w.write_u8(self.amount)?;
            w.write_i16(self.damage)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingChange {
    pub slot_id: i16,
}

impl PacketBody for HoldingChange {
    const KIND: PacketKind = PacketKind::HoldingChange;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            slot_id: r.read_i16()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i16(self.slot_id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseBed {
    pub entity_id: i32,
    pub in_bed: u8,
    pub x: i32,
    pub y: u8,
    pub z: i32,
}

impl PacketBody for UseBed {
    const KIND: PacketKind = PacketKind::UseBed;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity_id: r.read_i32()?,
            in_bed: r.read_u8()?,
            x: r.read_i32()?,
            y: r.read_u8()?,
            z: r.read_i32()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i32(self.entity_id)?;
        w.write_u8(self.in_bed)?;
        w.write_i32(self.x)?;
        w.write_u8(self.y)?;
        w.write_i32(self.z)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    pub entity_id: i32,
    pub animate: u8,
}

impl PacketBody for Animation {
    const KIND: PacketKind = PacketKind::Animation;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity_id: r.read_i32()?,
            animate: r.read_u8()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i32(self.entity_id)?;
        w.write_u8(self.animate)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAction {
    pub entity_id: i32,
    pub action: u8,
}

impl PacketBody for EntityAction {
    const KIND: PacketKind = PacketKind::EntityAction;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity_id: r.read_i32()?,
            action: r.read_u8()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i32(self.entity_id)?;
        w.write_u8(self.action)
    }
}

// Field meanings are unknown; the layout is float, float, bool, bool, float, float.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StanceUpdate {
    pub a: f32,
    pub b: f32,
    pub c: bool,
    pub d: bool,
    pub e: f32,
    pub f: f32,
}

impl PacketBody for StanceUpdate {
    const KIND: PacketKind = PacketKind::StanceUpdate;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            a: r.read_f32()?,
            b: r.read_f32()?,
            c: r.read_bool()?,
            d: r.read_bool()?,
            e: r.read_f32()?,
            f: r.read_f32()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_f32(self.a)?;
        w.write_f32(self.b)?;
        w.write_bool(self.c)?;
        w.write_bool(self.d)?;
        w.write_f32(self.e)?;
        w.write_f32(self.f)
    }
}
