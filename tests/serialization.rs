//! Integration tests for the serde representation of decoded packets
//!
//! Packets are plain data, so they can be logged or stored as JSON and turned
//! back into the exact same wire bytes later.

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    clippy::uninlined_format_args
)]

use beta_protocol::protocol::enums::{MobType, WoolColor};
use beta_protocol::protocol::variants::*;
use beta_protocol::{Direction, Metadata, MetadataValue, Packet};

#[test]
fn test_json_roundtrip_preserves_wire_bytes() {
    let mut metadata = Metadata::new();
    metadata
        .insert(16, MetadataValue::Byte(WoolColor::Lime.as_byte()))
        .unwrap();

    let packet = Packet::MobSpawn(MobSpawn {
        entity_id: 301,
        mob_type: MobType::Sheep,
        x: 4000,
        y: 2100,
        z: -900,
        yaw: 64,
        pitch: 0,
        metadata,
    });

    let json = serde_json::to_string(&packet).expect("Failed to serialize");
    println!("JSON representation: {}", json);
    assert!(json.contains("MobSpawn"));
    assert!(json.contains("Sheep"));

    let recovered: Packet = serde_json::from_str(&json).expect("Failed to deserialize");
    assert_eq!(recovered, packet);
    assert_eq!(recovered.to_bytes().unwrap(), packet.to_bytes().unwrap());
}

#[test]
fn test_json_unknown_enum_value() {
    let packet = Packet::MobSpawn(MobSpawn {
        entity_id: 1,
        mob_type: MobType::Unknown(200),
        x: 0,
        y: 0,
        z: 0,
        yaw: 0,
        pitch: 0,
        metadata: Metadata::new(),
    });

    let json = serde_json::to_string(&packet).unwrap();
    assert!(json.contains("Unknown"));
    let recovered: Packet = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, packet);
}

#[test]
fn test_json_direction_is_lowercase() {
    assert_eq!(
        serde_json::to_string(&Direction::Serverbound).unwrap(),
        "\"serverbound\""
    );
    let parsed: Direction = serde_json::from_str("\"clientbound\"").unwrap();
    assert_eq!(parsed, Direction::Clientbound);
}

#[test]
fn test_json_position_look_variants_stay_distinct() {
    let look = PositionLook {
        x: 1.0,
        y: 2.0,
        z: 3.0,
        stance: 3.5,
        yaw: 0.0,
        pitch: 0.0,
        on_ground: true,
    };
    let to_server = Packet::PlayerPositionLookToServer(PlayerPositionLookToServer(look));
    let to_client = Packet::PlayerPositionLookToClient(PlayerPositionLookToClient(look));

    let a = serde_json::to_string(&to_server).unwrap();
    let b = serde_json::to_string(&to_client).unwrap();
    assert_ne!(a, b);

    let back: Packet = serde_json::from_str(&b).unwrap();
    assert_eq!(back, to_client);
}

#[test]
fn test_json_tag_only_packet() {
    let json = serde_json::to_string(&Packet::KeepAlive(KeepAlive)).unwrap();
    let back: Packet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Packet::KeepAlive(KeepAlive));
}

#[test]
fn test_decoded_packet_serializes() {
    let bytes = [0x03, 0x00, 0x02, 0x00, b'o', 0x00, b'k'];
    let packet = Packet::from_bytes(&bytes, Direction::Clientbound).unwrap();
    let value = serde_json::to_value(&packet).unwrap();
    assert_eq!(value["ChatMessage"]["message"], "ok");
}
