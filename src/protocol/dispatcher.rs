//! Tag-based packet registry.
//!
//! Decode reads one tag byte, resolves it against the fixed tag table and
//! decodes the matching body. Encode writes the packet's own tag, then its
//! body. Both directions are exhaustive matches over the closed [`Packet`]
//! set, so a new variant cannot be added without wiring it here.

use std::io::{Read, Write};

use tracing::{debug, trace};

use crate::core::wire::{WireRead, WireWrite};
use crate::error::{ProtocolError, Result};
use crate::protocol::packet::{Direction, Packet, PacketBody, PacketKind};
use crate::protocol::variants::*;

/// Read a single packet from `r`.
///
/// Fails with [`ProtocolError::UnknownPacketTag`] after consuming only the tag
/// byte if nothing is registered for it. Any other error may leave the channel
/// part-way through a body.
pub fn decode_packet<R: Read + ?Sized>(r: &mut R, direction: Direction) -> Result<Packet> {
    let tag = r.read_u8()?;
    let kind = PacketKind::from_byte(tag).ok_or_else(|| {
        debug!(tag, "unknown packet tag");
        ProtocolError::UnknownPacketTag(tag)
    })?;

    let packet = decode_body(kind, r, direction)?;
    trace!(packet = kind.name(), ?direction, "decoded packet");
    Ok(packet)
}

fn decode_body<R: Read + ?Sized>(kind: PacketKind, r: &mut R, direction: Direction) -> Result<Packet> {
    let packet = match kind {
        PacketKind::KeepAlive => Packet::KeepAlive(KeepAlive::decode_body(r)?),
        PacketKind::LoginRequest => Packet::LoginRequest(LoginRequest::decode_body(r)?),
        PacketKind::Handshake => Packet::Handshake(Handshake::decode_body(r)?),
        PacketKind::ChatMessage => Packet::ChatMessage(ChatMessage::decode_body(r)?),
        PacketKind::TimeUpdate => Packet::TimeUpdate(TimeUpdate::decode_body(r)?),
        PacketKind::EntityEquipment => Packet::EntityEquipment(EntityEquipment::decode_body(r)?),
        PacketKind::SpawnPosition => Packet::SpawnPosition(SpawnPosition::decode_body(r)?),
        PacketKind::UseEntity => Packet::UseEntity(UseEntity::decode_body(r)?),
        PacketKind::UpdateHealth => Packet::UpdateHealth(UpdateHealth::decode_body(r)?),
        PacketKind::Respawn => Packet::Respawn(Respawn::decode_body(r)?),
        PacketKind::Player => Packet::Player(Player::decode_body(r)?),
        PacketKind::PlayerPosition => Packet::PlayerPosition(PlayerPosition::decode_body(r)?),
        PacketKind::PlayerLook => Packet::PlayerLook(PlayerLook::decode_body(r)?),
        PacketKind::PlayerPositionLook => match direction {
            Direction::Serverbound => {
                Packet::PlayerPositionLookToServer(PlayerPositionLookToServer::decode_body(r)?)
            }
            Direction::Clientbound => {
                Packet::PlayerPositionLookToClient(PlayerPositionLookToClient::decode_body(r)?)
            }
        },
        PacketKind::PlayerDigging => Packet::PlayerDigging(PlayerDigging::decode_body(r)?),
        PacketKind::PlayerBlockPlacement => {
            Packet::PlayerBlockPlacement(PlayerBlockPlacement::decode_body(r)?)
        }
        PacketKind::HoldingChange => Packet::HoldingChange(HoldingChange::decode_body(r)?),
        PacketKind::UseBed => Packet::UseBed(UseBed::decode_body(r)?),
        PacketKind::Animation => Packet::Animation(Animation::decode_body(r)?),
        PacketKind::EntityAction => Packet::EntityAction(EntityAction::decode_body(r)?),
        PacketKind::NamedEntitySpawn => Packet::NamedEntitySpawn(NamedEntitySpawn::decode_body(r)?),
        PacketKind::PickupSpawn => Packet::PickupSpawn(PickupSpawn::decode_body(r)?),
        PacketKind::CollectItem => Packet::CollectItem(CollectItem::decode_body(r)?),
        PacketKind::AddObjectVehicle => Packet::AddObjectVehicle(AddObjectVehicle::decode_body(r)?),
        PacketKind::MobSpawn => Packet::MobSpawn(MobSpawn::decode_body(r)?),
        PacketKind::EntityPainting => Packet::EntityPainting(EntityPainting::decode_body(r)?),
        PacketKind::StanceUpdate => Packet::StanceUpdate(StanceUpdate::decode_body(r)?),
        PacketKind::EntityVelocity => Packet::EntityVelocity(EntityVelocity::decode_body(r)?),
        PacketKind::DestroyEntity => Packet::DestroyEntity(DestroyEntity::decode_body(r)?),
        PacketKind::Entity => Packet::Entity(Entity::decode_body(r)?),
        PacketKind::EntityRelativeMove => {
            Packet::EntityRelativeMove(EntityRelativeMove::decode_body(r)?)
        }
        PacketKind::EntityLook => Packet::EntityLook(EntityLook::decode_body(r)?),
        PacketKind::EntityLookRelativeMove => {
            Packet::EntityLookRelativeMove(EntityLookRelativeMove::decode_body(r)?)
        }
        PacketKind::EntityTeleport => Packet::EntityTeleport(EntityTeleport::decode_body(r)?),
        PacketKind::EntityStatus => Packet::EntityStatus(EntityStatus::decode_body(r)?),
        PacketKind::AttachEntity => Packet::AttachEntity(AttachEntity::decode_body(r)?),
        PacketKind::EntityMetadata => Packet::EntityMetadata(EntityMetadata::decode_body(r)?),
        PacketKind::PreChunk => Packet::PreChunk(PreChunk::decode_body(r)?),
        PacketKind::MapChunk => Packet::MapChunk(MapChunk::decode_body(r)?),
        PacketKind::MultiBlockChange => Packet::MultiBlockChange(MultiBlockChange::decode_body(r)?),
        PacketKind::BlockChange => Packet::BlockChange(BlockChange::decode_body(r)?),
        PacketKind::PlayNoteBlock => Packet::PlayNoteBlock(PlayNoteBlock::decode_body(r)?),
        PacketKind::Explosion => Packet::Explosion(Explosion::decode_body(r)?),
        PacketKind::OpenWindow => Packet::OpenWindow(OpenWindow::decode_body(r)?),
        PacketKind::CloseWindow => Packet::CloseWindow(CloseWindow::decode_body(r)?),
        PacketKind::WindowClick => Packet::WindowClick(WindowClick::decode_body(r)?),
        PacketKind::SetSlot => Packet::SetSlot(SetSlot::decode_body(r)?),
        PacketKind::WindowItems => Packet::WindowItems(WindowItems::decode_body(r)?),
        PacketKind::UpdateProgressBar => {
            Packet::UpdateProgressBar(UpdateProgressBar::decode_body(r)?)
        }
        PacketKind::Transaction => Packet::Transaction(Transaction::decode_body(r)?),
        PacketKind::UpdateSign => Packet::UpdateSign(UpdateSign::decode_body(r)?),
        PacketKind::DisconnectKick => Packet::DisconnectKick(DisconnectKick::decode_body(r)?),
    };
    Ok(packet)
}

/// Write `packet` to `w`: tag byte first, then the body.
///
/// The frame is assembled in memory and handed to `w` in a single
/// `write_all`, so a body that fails to encode leaves `w` untouched.
pub fn encode_packet<W: Write + ?Sized>(packet: &Packet, w: &mut W) -> Result<()> {
    let kind = packet.kind();
    let mut frame = Vec::with_capacity(32);
    frame.write_u8(kind.as_byte())?;

    let body = match packet {
        Packet::KeepAlive(p) => p.encode_body(&mut frame),
        Packet::LoginRequest(p) => p.encode_body(&mut frame),
        Packet::Handshake(p) => p.encode_body(&mut frame),
        Packet::ChatMessage(p) => p.encode_body(&mut frame),
        Packet::TimeUpdate(p) => p.encode_body(&mut frame),
        Packet::EntityEquipment(p) => p.encode_body(&mut frame),
        Packet::SpawnPosition(p) => p.encode_body(&mut frame),
        Packet::UseEntity(p) => p.encode_body(&mut frame),
        Packet::UpdateHealth(p) => p.encode_body(&mut frame),
        Packet::Respawn(p) => p.encode_body(&mut frame),
        Packet::Player(p) => p.encode_body(&mut frame),
        Packet::PlayerPosition(p) => p.encode_body(&mut frame),
        Packet::PlayerLook(p) => p.encode_body(&mut frame),
        Packet::PlayerPositionLookToServer(p) => p.encode_body(&mut frame),
        Packet::PlayerPositionLookToClient(p) => p.encode_body(&mut frame),
        Packet::PlayerDigging(p) => p.encode_body(&mut frame),
        Packet::PlayerBlockPlacement(p) => p.encode_body(&mut frame),
        Packet::HoldingChange(p) => p.encode_body(&mut frame),
        Packet::UseBed(p) => p.encode_body(&mut frame),
        Packet::Animation(p) => p.encode_body(&mut frame),
        Packet::EntityAction(p) => p.encode_body(&mut frame),
        Packet::NamedEntitySpawn(p) => p.encode_body(&mut frame),
        Packet::PickupSpawn(p) => p.encode_body(&mut frame),
        Packet::CollectItem(p) => p.encode_body(&mut frame),
        Packet::AddObjectVehicle(p) => p.encode_body(&mut frame),
        Packet::MobSpawn(p) => p.encode_body(&mut frame),
        Packet::EntityPainting(p) => p.encode_body(&mut frame),
        Packet::StanceUpdate(p) => p.encode_body(&mut frame),
        Packet::EntityVelocity(p) => p.encode_body(&mut frame),
        Packet::DestroyEntity(p) => p.encode_body(&mut frame),
        Packet::Entity(p) => p.encode_body(&mut frame),
        Packet::EntityRelativeMove(p) => p.encode_body(&mut frame),
        Packet::EntityLook(p) => p.encode_body(&mut frame),
        Packet::EntityLookRelativeMove(p) => p.encode_body(&mut frame),
        Packet::EntityTeleport(p) => p.encode_body(&mut frame),
        Packet::EntityStatus(p) => p.encode_body(&mut frame),
        Packet::AttachEntity(p) => p.encode_body(&mut frame),
        Packet::EntityMetadata(p) => p.encode_body(&mut frame),
        Packet::PreChunk(p) => p.encode_body(&mut frame),
        Packet::MapChunk(p) => p.encode_body(&mut frame),
        Packet::MultiBlockChange(p) => p.encode_body(&mut frame),
        Packet::BlockChange(p) => p.encode_body(&mut frame),
        Packet::PlayNoteBlock(p) => p.encode_body(&mut frame),
        Packet::Explosion(p) => p.encode_body(&mut frame),
        Packet::OpenWindow(p) => p.encode_body(&mut frame),
        Packet::CloseWindow(p) => p.encode_body(&mut frame),
        Packet::WindowClick(p) => p.encode_body(&mut frame),
        Packet::SetSlot(p) => p.encode_body(&mut frame),
        Packet::WindowItems(p) => p.encode_body(&mut frame),
        Packet::UpdateProgressBar(p) => p.encode_body(&mut frame),
        Packet::Transaction(p) => p.encode_body(&mut frame),
        Packet::UpdateSign(p) => p.encode_body(&mut frame),
        Packet::DisconnectKick(p) => p.encode_body(&mut frame),
    };
    body?;

    w.write_all(&frame)?;
    trace!(packet = kind.name(), bytes = frame.len(), "encoded packet");
    Ok(())
}
