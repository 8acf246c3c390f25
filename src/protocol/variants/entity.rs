//! Entity spawning, movement and state packets.
//!
//! The movement family (`EntityRelativeMove` through `EntityMetadata`) shares
//! a leading entity id. Each of them embeds an [`Entity`] as its first field
//! and delegates the prefix to it before handling its own fields.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::core::metadata::Metadata;
use crate::core::wire::{WireRead, WireWrite};
use crate::error::Result;
use crate::protocol::enums::{MobType, MovingObject};
use crate::protocol::packet::{PacketBody, PacketKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityEquipment {
    pub entity_id: i32,
    pub slot: i16,
    pub item_id: i16,
    pub damage: i16,
}

impl PacketBody for EntityEquipment {
    const KIND: PacketKind = PacketKind::EntityEquipment;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity_id: r.read_i32()?,
            slot: r.read_i16()?,
            item_id: r.read_i16()?,
            damage: r.read_i16()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i32(self.entity_id)?;
        w.write_i16(self.slot)?;
        w.write_i16(self.item_id)?;
        w.write_i16(self.damage)
    }
}

/// Another player coming into view. Positions are absolute integers (block * 32).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntitySpawn {
    pub entity_id: i32,
    pub player_name: String,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub rotation: u8,
    pub pitch: u8,
    pub current_item: i16,
}

impl PacketBody for NamedEntitySpawn {
    const KIND: PacketKind = PacketKind::NamedEntitySpawn;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity_id: r.read_i32()?,
            player_name: r.read_string16()?,
            x: r.read_i32()?,
            y: r.read_i32()?,
            z: r.read_i32()?,
            rotation: r.read_u8()?,
            pitch: r.read_u8()?,
            current_item: r.read_i16()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i32(self.entity_id)?;
        w.write_string16(&self.player_name)?;
        w.write_i32(self.x)?;
        w.write_i32(self.y)?;
        w.write_i32(self.z)?;
        w.write_u8(self.rotation)?;
        w.write_u8(self.pitch)?;
        w.write_i16(self.current_item)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupSpawn {
    pub entity_id: i32,
    pub item_id: i16,
    pub count: u8,
    pub damage: i16,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub rotation: u8,
    pub pitch: u8,
    pub roll: u8,
}

impl PacketBody for PickupSpawn {
    const KIND: PacketKind = PacketKind::PickupSpawn;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity_id: r.read_i32()?,
            item_id: r.read_i16()?,
            count: r.read_u8()?,
            damage: r.read_i16()?,
            x: r.read_i32()?,
            y: r.read_i32()?,
            z: r.read_i32()?,
            rotation: r.read_u8()?,
            pitch: r.read_u8()?,
            roll: r.read_u8()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i32(self.entity_id)?;
        w.write_i16(self.item_id)?;
        w.write_u8(self.count)?;
        w.write_i16(self.damage)?;
        w.write_i32(self.x)?;
        w.write_i32(self.y)?;
        w.write_i32(self.z)?;
        w.write_u8(self.rotation)?;
        w.write_u8(self.pitch)?;
        w.write_u8(self.roll)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectItem {
    pub collected_id: i32,
    pub collector_id: i32,
}

impl PacketBody for CollectItem {
    const KIND: PacketKind = PacketKind::CollectItem;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            collected_id: r.read_i32()?,
            collector_id: r.read_i32()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i32(self.collected_id)?;
        w.write_i32(self.collector_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddObjectVehicle {
    pub entity_id: i32,
    pub object_type: MovingObject,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl PacketBody for AddObjectVehicle {
    const KIND: PacketKind = PacketKind::AddObjectVehicle;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity_id: r.read_i32()?,
            object_type: MovingObject::from_byte(r.read_u8()?),
            x: r.read_i32()?,
            y: r.read_i32()?,
            z: r.read_i32()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i32(self.entity_id)?;
        w.write_u8(self.object_type.as_byte())?;
        w.write_i32(self.x)?;
        w.write_i32(self.y)?;
        w.write_i32(self.z)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobSpawn {
    pub entity_id: i32,
    pub mob_type: MobType,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub yaw: u8,
    pub pitch: u8,
    pub metadata: Metadata,
}

impl PacketBody for MobSpawn {
    const KIND: PacketKind = PacketKind::MobSpawn;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity_id: r.read_i32()?,
            mob_type: MobType::from_byte(r.read_u8()?),
            x: r.read_i32()?,
            y: r.read_i32()?,
            z: r.read_i32()?,
            yaw: r.read_u8()?,
            pitch: r.read_u8()?,
            metadata: Metadata::read_from(r)?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i32(self.entity_id)?;
        w.write_u8(self.mob_type.as_byte())?;
        w.write_i32(self.x)?;
        w.write_i32(self.y)?;
        w.write_i32(self.z)?;
        w.write_u8(self.yaw)?;
        w.write_u8(self.pitch)?;
        self.metadata.write_to(w)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityPainting {
    pub entity_id: i32,
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub direction: i32,
}

impl PacketBody for EntityPainting {
    const KIND: PacketKind = PacketKind::EntityPainting;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity_id: r.read_i32()?,
            title: r.read_string16()?,
            x: r.read_i32()?,
            y: r.read_i32()?,
            z: r.read_i32()?,
            direction: r.read_i32()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i32(self.entity_id)?;
        w.write_string16(&self.title)?;
        w.write_i32(self.x)?;
        w.write_i32(self.y)?;
        w.write_i32(self.z)?;
        w.write_i32(self.direction)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityVelocity {
    pub entity_id: i32,
    pub velocity_x: i16,
    pub velocity_y: i16,
    pub velocity_z: i16,
}

impl PacketBody for EntityVelocity {
    const KIND: PacketKind = PacketKind::EntityVelocity;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity_id: r.read_i32()?,
            velocity_x: r.read_i16()?,
            velocity_y: r.read_i16()?,
            velocity_z: r.read_i16()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i32(self.entity_id)?;
        w.write_i16(self.velocity_x)?;
        w.write_i16(self.velocity_y)?;
        w.write_i16(self.velocity_z)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestroyEntity {
    pub entity_id: i32,
}

impl PacketBody for DestroyEntity {
    const KIND: PacketKind = PacketKind::DestroyEntity;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity_id: r.read_i32()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i32(self.entity_id)
    }
}

/// The bare entity packet, and the shared prefix of every entity-addressed
/// packet below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub entity_id: i32,
}

impl Entity {
    pub fn new(entity_id: i32) -> Self {
        Self { entity_id }
    }
}

impl PacketBody for Entity {
    const KIND: PacketKind = PacketKind::Entity;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity_id: r.read_i32()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i32(self.entity_id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRelativeMove {
    pub entity: Entity,
    pub dx: i8,
    pub dy: i8,
    pub dz: i8,
}

impl PacketBody for EntityRelativeMove {
    const KIND: PacketKind = PacketKind::EntityRelativeMove;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity: Entity::decode_body(r)?,
            dx: r.read_i8()?,
            dy: r.read_i8()?,
            dz: r.read_i8()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        self.entity.encode_body(w)?;
        w.write_i8(self.dx)?;
        w.write_i8(self.dy)?;
        w.write_i8(self.dz)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityLook {
    pub entity: Entity,
    pub yaw: u8,
    pub pitch: u8,
}

impl PacketBody for EntityLook {
    const KIND: PacketKind = PacketKind::EntityLook;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity: Entity::decode_body(r)?,
            yaw: r.read_u8()?,
            pitch: r.read_u8()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        self.entity.encode_body(w)?;
        w.write_u8(self.yaw)?;
        w.write_u8(self.pitch)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityLookRelativeMove {
    pub entity: Entity,
    pub dx: i8,
    pub dy: i8,
    pub dz: i8,
    pub yaw: u8,
    pub pitch: u8,
}

impl PacketBody for EntityLookRelativeMove {
    const KIND: PacketKind = PacketKind::EntityLookRelativeMove;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity: Entity::decode_body(r)?,
            dx: r.read_i8()?,
            dy: r.read_i8()?,
            dz: r.read_i8()?,
            yaw: r.read_u8()?,
            pitch: r.read_u8()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        self.entity.encode_body(w)?;
        w.write_i8(self.dx)?;
        w.write_i8(self.dy)?;
        w.write_i8(self.dz)?;
        w.write_u8(self.yaw)?;
        w.write_u8(self.pitch)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTeleport {
    pub entity: Entity,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub yaw: u8,
    pub pitch: u8,
}

impl PacketBody for EntityTeleport {
    const KIND: PacketKind = PacketKind::EntityTeleport;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity: Entity::decode_body(r)?,
            x: r.read_i32()?,
            y: r.read_i32()?,
            z: r.read_i32()?,
            yaw: r.read_u8()?,
            pitch: r.read_u8()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        self.entity.encode_body(w)?;
        w.write_i32(self.x)?;
        w.write_i32(self.y)?;
        w.write_i32(self.z)?;
        w.write_u8(self.yaw)?;
        w.write_u8(self.pitch)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityStatus {
    pub entity: Entity,
    pub status: u8,
}

impl PacketBody for EntityStatus {
    const KIND: PacketKind = PacketKind::EntityStatus;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity: Entity::decode_body(r)?,
            status: r.read_u8()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        self.entity.encode_body(w)?;
        w.write_u8(self.status)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachEntity {
    pub entity: Entity,
    pub vehicle_id: i32,
}

impl PacketBody for AttachEntity {
    const KIND: PacketKind = PacketKind::AttachEntity;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity: Entity::decode_body(r)?,
            vehicle_id: r.read_i32()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        self.entity.encode_body(w)?;
        w.write_i32(self.vehicle_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    pub entity: Entity,
    pub metadata: Metadata,
}

impl PacketBody for EntityMetadata {
    const KIND: PacketKind = PacketKind::EntityMetadata;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            entity: Entity::decode_body(r)?,
            metadata: Metadata::read_from(r)?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        self.entity.encode_body(w)?;
        self.metadata.write_to(w)
    }
}
