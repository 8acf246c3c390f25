//! # Packet
//!
//! The closed set of packets this codec understands, and the one-byte tags
//! that identify them on the wire.
//!
//! ```text
//! [tag: u8] [body: variant-specific]
//! ```
//!
//! [`Packet`] is plain data: it holds no reference to the channel it was read
//! from and can be cloned, compared, mutated and re-encoded freely.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::protocol::variants::*;

/// Which peer sent the bytes being decoded.
///
/// Only tag 0x0D (position and look) has a direction-dependent layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Client to server
    Serverbound,
    /// Server to client
    Clientbound,
}

/// Body codec of a single packet variant.
///
/// Implementations read and write their fields in wire order; the tag byte is
/// handled by the dispatcher.
pub trait PacketBody: Sized {
    const KIND: PacketKind;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self>;

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()>;
}

/// Packet type tags. The discriminants are the wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PacketKind {
    KeepAlive = 0x00,
    LoginRequest = 0x01,
    Handshake = 0x02,
    ChatMessage = 0x03,
    TimeUpdate = 0x04,
    EntityEquipment = 0x05,
    SpawnPosition = 0x06,
    UseEntity = 0x07,
    UpdateHealth = 0x08,
    Respawn = 0x09,
    Player = 0x0A,
    PlayerPosition = 0x0B,
    PlayerLook = 0x0C,
    PlayerPositionLook = 0x0D,
    PlayerDigging = 0x0E,
    PlayerBlockPlacement = 0x0F,
    HoldingChange = 0x10,
    UseBed = 0x11,
    Animation = 0x12,
    EntityAction = 0x13,
    NamedEntitySpawn = 0x14,
    PickupSpawn = 0x15,
    CollectItem = 0x16,
    AddObjectVehicle = 0x17,
    MobSpawn = 0x18,
    EntityPainting = 0x19,
    StanceUpdate = 0x1B,
    EntityVelocity = 0x1C,
    DestroyEntity = 0x1D,
    Entity = 0x1E,
    EntityRelativeMove = 0x1F,
    EntityLook = 0x20,
    EntityLookRelativeMove = 0x21,
    EntityTeleport = 0x22,
    EntityStatus = 0x26,
    AttachEntity = 0x27,
    EntityMetadata = 0x28,
    PreChunk = 0x32,
    MapChunk = 0x33,
    MultiBlockChange = 0x34,
    BlockChange = 0x35,
    PlayNoteBlock = 0x36,
    Explosion = 0x3C,
    OpenWindow = 0x64,
    CloseWindow = 0x65,
    WindowClick = 0x66,
    SetSlot = 0x67,
    WindowItems = 0x68,
    UpdateProgressBar = 0x69,
    Transaction = 0x6A,
    UpdateSign = 0x82,
    DisconnectKick = 0xFF,
}

impl PacketKind {
    /// Every registered tag, in wire order.
    pub const ALL: [PacketKind; 52] = [
        PacketKind::KeepAlive,
        PacketKind::LoginRequest,
        PacketKind::Handshake,
        PacketKind::ChatMessage,
        PacketKind::TimeUpdate,
        PacketKind::EntityEquipment,
        PacketKind::SpawnPosition,
        PacketKind::UseEntity,
        PacketKind::UpdateHealth,
        PacketKind::Respawn,
        PacketKind::Player,
        PacketKind::PlayerPosition,
        PacketKind::PlayerLook,
        PacketKind::PlayerPositionLook,
        PacketKind::PlayerDigging,
        PacketKind::PlayerBlockPlacement,
        PacketKind::HoldingChange,
        PacketKind::UseBed,
        PacketKind::Animation,
        PacketKind::EntityAction,
        PacketKind::NamedEntitySpawn,
        PacketKind::PickupSpawn,
        PacketKind::CollectItem,
        PacketKind::AddObjectVehicle,
        PacketKind::MobSpawn,
        PacketKind::EntityPainting,
        PacketKind::StanceUpdate,
        PacketKind::EntityVelocity,
        PacketKind::DestroyEntity,
        PacketKind::Entity,
        PacketKind::EntityRelativeMove,
        PacketKind::EntityLook,
        PacketKind::EntityLookRelativeMove,
        PacketKind::EntityTeleport,
        PacketKind::EntityStatus,
        PacketKind::AttachEntity,
        PacketKind::EntityMetadata,
        PacketKind::PreChunk,
        PacketKind::MapChunk,
        PacketKind::MultiBlockChange,
        PacketKind::BlockChange,
        PacketKind::PlayNoteBlock,
        PacketKind::Explosion,
        PacketKind::OpenWindow,
        PacketKind::CloseWindow,
        PacketKind::WindowClick,
        PacketKind::SetSlot,
        PacketKind::WindowItems,
        PacketKind::UpdateProgressBar,
        PacketKind::Transaction,
        PacketKind::UpdateSign,
        PacketKind::DisconnectKick,
    ];

    /// Get the tag byte written on the wire
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Look up a tag byte; `None` if nothing is registered for it
    pub fn from_byte(byte: u8) -> Option<Self> {
        let kind = match byte {
            0x00 => PacketKind::KeepAlive,
            0x01 => PacketKind::LoginRequest,
            0x02 => PacketKind::Handshake,
            0x03 => PacketKind::ChatMessage,
            0x04 => PacketKind::TimeUpdate,
            0x05 => PacketKind::EntityEquipment,
            0x06 => PacketKind::SpawnPosition,
            0x07 => PacketKind::UseEntity,
            0x08 => PacketKind::UpdateHealth,
            0x09 => PacketKind::Respawn,
            0x0A => PacketKind::Player,
            0x0B => PacketKind::PlayerPosition,
            0x0C => PacketKind::PlayerLook,
            0x0D => PacketKind::PlayerPositionLook,
            0x0E => PacketKind::PlayerDigging,
            0x0F => PacketKind::PlayerBlockPlacement,
            0x10 => PacketKind::HoldingChange,
            0x11 => PacketKind::UseBed,
            0x12 => PacketKind::Animation,
            0x13 => PacketKind::EntityAction,
            0x14 => PacketKind::NamedEntitySpawn,
            0x15 => PacketKind::PickupSpawn,
            0x16 => PacketKind::CollectItem,
            0x17 => PacketKind::AddObjectVehicle,
            0x18 => PacketKind::MobSpawn,
            0x19 => PacketKind::EntityPainting,
            0x1B => PacketKind::StanceUpdate,
            0x1C => PacketKind::EntityVelocity,
            0x1D => PacketKind::DestroyEntity,
            0x1E => PacketKind::Entity,
            0x1F => PacketKind::EntityRelativeMove,
            0x20 => PacketKind::EntityLook,
            0x21 => PacketKind::EntityLookRelativeMove,
            0x22 => PacketKind::EntityTeleport,
            0x26 => PacketKind::EntityStatus,
            0x27 => PacketKind::AttachEntity,
            0x28 => PacketKind::EntityMetadata,
            0x32 => PacketKind::PreChunk,
            0x33 => PacketKind::MapChunk,
            0x34 => PacketKind::MultiBlockChange,
            0x35 => PacketKind::BlockChange,
            0x36 => PacketKind::PlayNoteBlock,
            0x3C => PacketKind::Explosion,
            0x64 => PacketKind::OpenWindow,
            0x65 => PacketKind::CloseWindow,
            0x66 => PacketKind::WindowClick,
            0x67 => PacketKind::SetSlot,
            0x68 => PacketKind::WindowItems,
            0x69 => PacketKind::UpdateProgressBar,
            0x6A => PacketKind::Transaction,
            0x82 => PacketKind::UpdateSign,
            0xFF => PacketKind::DisconnectKick,
            _ => return None,
        };
        Some(kind)
    }

    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            PacketKind::KeepAlive => "KeepAlive",
            PacketKind::LoginRequest => "LoginRequest",
            PacketKind::Handshake => "Handshake",
            PacketKind::ChatMessage => "ChatMessage",
            PacketKind::TimeUpdate => "TimeUpdate",
            PacketKind::EntityEquipment => "EntityEquipment",
            PacketKind::SpawnPosition => "SpawnPosition",
            PacketKind::UseEntity => "UseEntity",
            PacketKind::UpdateHealth => "UpdateHealth",
            PacketKind::Respawn => "Respawn",
            PacketKind::Player => "Player",
            PacketKind::PlayerPosition => "PlayerPosition",
            PacketKind::PlayerLook => "PlayerLook",
            PacketKind::PlayerPositionLook => "PlayerPositionLook",
            PacketKind::PlayerDigging => "PlayerDigging",
            PacketKind::PlayerBlockPlacement => "PlayerBlockPlacement",
            PacketKind::HoldingChange => "HoldingChange",
            PacketKind::UseBed => "UseBed",
            PacketKind::Animation => "Animation",
            PacketKind::EntityAction => "EntityAction",
            PacketKind::NamedEntitySpawn => "NamedEntitySpawn",
            PacketKind::PickupSpawn => "PickupSpawn",
            PacketKind::CollectItem => "CollectItem",
            PacketKind::AddObjectVehicle => "AddObjectVehicle",
            PacketKind::MobSpawn => "MobSpawn",
            PacketKind::EntityPainting => "EntityPainting",
            PacketKind::StanceUpdate => "StanceUpdate",
            PacketKind::EntityVelocity => "EntityVelocity",
            PacketKind::DestroyEntity => "DestroyEntity",
            PacketKind::Entity => "Entity",
            PacketKind::EntityRelativeMove => "EntityRelativeMove",
            PacketKind::EntityLook => "EntityLook",
            PacketKind::EntityLookRelativeMove => "EntityLookRelativeMove",
            PacketKind::EntityTeleport => "EntityTeleport",
            PacketKind::EntityStatus => "EntityStatus",
            PacketKind::AttachEntity => "AttachEntity",
            PacketKind::EntityMetadata => "EntityMetadata",
            PacketKind::PreChunk => "PreChunk",
            PacketKind::MapChunk => "MapChunk",
            PacketKind::MultiBlockChange => "MultiBlockChange",
            PacketKind::BlockChange => "BlockChange",
            PacketKind::PlayNoteBlock => "PlayNoteBlock",
            PacketKind::Explosion => "Explosion",
            PacketKind::OpenWindow => "OpenWindow",
            PacketKind::CloseWindow => "CloseWindow",
            PacketKind::WindowClick => "WindowClick",
            PacketKind::SetSlot => "SetSlot",
            PacketKind::WindowItems => "WindowItems",
            PacketKind::UpdateProgressBar => "UpdateProgressBar",
            PacketKind::Transaction => "Transaction",
            PacketKind::UpdateSign => "UpdateSign",
            PacketKind::DisconnectKick => "DisconnectKick",
        }
    }
}

/// A decoded packet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Packet {
    KeepAlive(KeepAlive),
    LoginRequest(LoginRequest),
    Handshake(Handshake),
    ChatMessage(ChatMessage),
    TimeUpdate(TimeUpdate),
    EntityEquipment(EntityEquipment),
    SpawnPosition(SpawnPosition),
    UseEntity(UseEntity),
    UpdateHealth(UpdateHealth),
    Respawn(Respawn),
    Player(Player),
    PlayerPosition(PlayerPosition),
    PlayerLook(PlayerLook),
    PlayerPositionLookToServer(PlayerPositionLookToServer),
    PlayerPositionLookToClient(PlayerPositionLookToClient),
    PlayerDigging(PlayerDigging),
    PlayerBlockPlacement(PlayerBlockPlacement),
    HoldingChange(HoldingChange),
    UseBed(UseBed),
    Animation(Animation),
    EntityAction(EntityAction),
    NamedEntitySpawn(NamedEntitySpawn),
    PickupSpawn(PickupSpawn),
    CollectItem(CollectItem),
    AddObjectVehicle(AddObjectVehicle),
    MobSpawn(MobSpawn),
    EntityPainting(EntityPainting),
    StanceUpdate(StanceUpdate),
    EntityVelocity(EntityVelocity),
    DestroyEntity(DestroyEntity),
    Entity(Entity),
    EntityRelativeMove(EntityRelativeMove),
    EntityLook(EntityLook),
    EntityLookRelativeMove(EntityLookRelativeMove),
    EntityTeleport(EntityTeleport),
    EntityStatus(EntityStatus),
    AttachEntity(AttachEntity),
    EntityMetadata(EntityMetadata),
    PreChunk(PreChunk),
    MapChunk(MapChunk),
    MultiBlockChange(MultiBlockChange),
    BlockChange(BlockChange),
    PlayNoteBlock(PlayNoteBlock),
    Explosion(Explosion),
    OpenWindow(OpenWindow),
    CloseWindow(CloseWindow),
    WindowClick(WindowClick),
    SetSlot(SetSlot),
    WindowItems(WindowItems),
    UpdateProgressBar(UpdateProgressBar),
    Transaction(Transaction),
    UpdateSign(UpdateSign),
    DisconnectKick(DisconnectKick),
}

impl Packet {
    /// The tag this packet is written with
    pub fn kind(&self) -> PacketKind {
        match self {
            Packet::KeepAlive(_) => KeepAlive::KIND,
            Packet::LoginRequest(_) => LoginRequest::KIND,
            Packet::Handshake(_) => Handshake::KIND,
            Packet::ChatMessage(_) => ChatMessage::KIND,
            Packet::TimeUpdate(_) => TimeUpdate::KIND,
            Packet::EntityEquipment(_) => EntityEquipment::KIND,
            Packet::SpawnPosition(_) => SpawnPosition::KIND,
            Packet::UseEntity(_) => UseEntity::KIND,
            Packet::UpdateHealth(_) => UpdateHealth::KIND,
            Packet::Respawn(_) => Respawn::KIND,
            Packet::Player(_) => Player::KIND,
            Packet::PlayerPosition(_) => PlayerPosition::KIND,
            Packet::PlayerLook(_) => PlayerLook::KIND,
            Packet::PlayerPositionLookToServer(_) => PlayerPositionLookToServer::KIND,
            Packet::PlayerPositionLookToClient(_) => PlayerPositionLookToClient::KIND,
            Packet::PlayerDigging(_) => PlayerDigging::KIND,
            Packet::PlayerBlockPlacement(_) => PlayerBlockPlacement::KIND,
            Packet::HoldingChange(_) => HoldingChange::KIND,
            Packet::UseBed(_) => UseBed::KIND,
            Packet::Animation(_) => Animation::KIND,
            Packet::EntityAction(_) => EntityAction::KIND,
            Packet::NamedEntitySpawn(_) => NamedEntitySpawn::KIND,
            Packet::PickupSpawn(_) => PickupSpawn::KIND,
            Packet::CollectItem(_) => CollectItem::KIND,
            Packet::AddObjectVehicle(_) => AddObjectVehicle::KIND,
            Packet::MobSpawn(_) => MobSpawn::KIND,
            Packet::EntityPainting(_) => EntityPainting::KIND,
            Packet::StanceUpdate(_) => StanceUpdate::KIND,
            Packet::EntityVelocity(_) => EntityVelocity::KIND,
            Packet::DestroyEntity(_) => DestroyEntity::KIND,
            Packet::Entity(_) => Entity::KIND,
            Packet::EntityRelativeMove(_) => EntityRelativeMove::KIND,
            Packet::EntityLook(_) => EntityLook::KIND,
            Packet::EntityLookRelativeMove(_) => EntityLookRelativeMove::KIND,
            Packet::EntityTeleport(_) => EntityTeleport::KIND,
            Packet::EntityStatus(_) => EntityStatus::KIND,
            Packet::AttachEntity(_) => AttachEntity::KIND,
            Packet::EntityMetadata(_) => EntityMetadata::KIND,
            Packet::PreChunk(_) => PreChunk::KIND,
            Packet::MapChunk(_) => MapChunk::KIND,
            Packet::MultiBlockChange(_) => MultiBlockChange::KIND,
            Packet::BlockChange(_) => BlockChange::KIND,
            Packet::PlayNoteBlock(_) => PlayNoteBlock::KIND,
            Packet::Explosion(_) => Explosion::KIND,
            Packet::OpenWindow(_) => OpenWindow::KIND,
            Packet::CloseWindow(_) => CloseWindow::KIND,
            Packet::WindowClick(_) => WindowClick::KIND,
            Packet::SetSlot(_) => SetSlot::KIND,
            Packet::WindowItems(_) => WindowItems::KIND,
            Packet::UpdateProgressBar(_) => UpdateProgressBar::KIND,
            Packet::Transaction(_) => Transaction::KIND,
            Packet::UpdateSign(_) => UpdateSign::KIND,
            Packet::DisconnectKick(_) => DisconnectKick::KIND,
        }
    }

    /// The entity id, for packets addressed to a single entity
    pub fn entity_id(&self) -> Option<i32> {
        match self {
            Packet::EntityEquipment(p) => Some(p.entity_id),
            Packet::UseBed(p) => Some(p.entity_id),
            Packet::Animation(p) => Some(p.entity_id),
            Packet::EntityAction(p) => Some(p.entity_id),
            Packet::NamedEntitySpawn(p) => Some(p.entity_id),
            Packet::PickupSpawn(p) => Some(p.entity_id),
            Packet::AddObjectVehicle(p) => Some(p.entity_id),
            Packet::MobSpawn(p) => Some(p.entity_id),
            Packet::EntityPainting(p) => Some(p.entity_id),
            Packet::EntityVelocity(p) => Some(p.entity_id),
            Packet::DestroyEntity(p) => Some(p.entity_id),
            Packet::Entity(p) => Some(p.entity_id),
            Packet::EntityRelativeMove(p) => Some(p.entity.entity_id),
            Packet::EntityLook(p) => Some(p.entity.entity_id),
            Packet::EntityLookRelativeMove(p) => Some(p.entity.entity_id),
            Packet::EntityTeleport(p) => Some(p.entity.entity_id),
            Packet::EntityStatus(p) => Some(p.entity.entity_id),
            Packet::AttachEntity(p) => Some(p.entity.entity_id),
            Packet::EntityMetadata(p) => Some(p.entity.entity_id),
            _ => None,
        }
    }

    /// Serialize a packet to a byte vector (tag + body)
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        crate::protocol::dispatcher::encode_packet(self, &mut out)?;
        Ok(out)
    }

    /// Parse one packet from the front of `buf`; trailing bytes are ignored
    pub fn from_bytes(buf: &[u8], direction: Direction) -> Result<Self> {
        let mut cursor = buf;
        crate::protocol::dispatcher::decode_packet(&mut cursor, direction)
    }
}
