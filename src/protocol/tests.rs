// test-only module included via protocol/mod.rs
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::core::metadata::{Metadata, MetadataValue};
use crate::error::ProtocolError;
use crate::protocol::dispatcher::{decode_packet, encode_packet};
use crate::protocol::enums::{DigStatus, FaceOffset, MobType, MovingObject};
use crate::protocol::packet::{Direction, Packet, PacketKind};
use crate::protocol::variants::*;

fn encode(packet: &Packet) -> Vec<u8> {
    let mut out = Vec::new();
    encode_packet(packet, &mut out).expect("encode should succeed");
    out
}

fn roundtrip(packet: Packet, direction: Direction) {
    let bytes = encode(&packet);
    let mut input: &[u8] = &bytes;
    let decoded = decode_packet(&mut input, direction).expect("decode should succeed");
    assert_eq!(decoded, packet);
    assert!(input.is_empty(), "decoder left {} bytes", input.len());
}

#[test]
fn test_tag_table_is_consistent() {
    for kind in PacketKind::ALL {
        assert_eq!(PacketKind::from_byte(kind.as_byte()), Some(kind));
    }
    let registered = (0u8..=255)
        .filter(|b| PacketKind::from_byte(*b).is_some())
        .count();
    assert_eq!(registered, PacketKind::ALL.len());
}

#[test]
fn test_unknown_tag_consumes_one_byte() {
    let mut input: &[u8] = &[0xAB, 0x01, 0x02, 0x03];
    match decode_packet(&mut input, Direction::Clientbound) {
        Err(ProtocolError::UnknownPacketTag(0xAB)) => {}
        other => panic!("Unexpected result: {other:?}"),
    }
    assert_eq!(input, &[0x01, 0x02, 0x03]);
}

#[test]
fn test_empty_channel_is_short_read() {
    let mut input: &[u8] = &[];
    let err = decode_packet(&mut input, Direction::Clientbound).unwrap_err();
    assert!(matches!(err, ProtocolError::ShortRead { needed: 1 }));
}

#[test]
fn test_body_less_packets_emit_tag() {
    assert_eq!(encode(&Packet::KeepAlive(KeepAlive)), vec![0x00]);
    assert_eq!(encode(&Packet::Respawn(Respawn)), vec![0x09]);
    assert_eq!(encode(&Packet::DisconnectKick(DisconnectKick)), vec![0xFF]);
    assert_eq!(encode(&Packet::MapChunk(MapChunk)), vec![0x33]);
}

#[test]
fn test_placeholders_decode_tag_only() {
    let mut input: &[u8] = &[0x35, 0x09];
    let first = decode_packet(&mut input, Direction::Clientbound).unwrap();
    assert_eq!(first, Packet::BlockChange(BlockChange));
    let second = decode_packet(&mut input, Direction::Clientbound).unwrap();
    assert_eq!(second, Packet::Respawn(Respawn));
    assert!(input.is_empty());
}

#[test]
fn test_login_request_layout() {
    let bytes = encode(&Packet::LoginRequest(LoginRequest {
        entity_id: 11,
        user_name: "Ab".to_string(),
        map_seed: 0,
        dimension: 0,
    }));
    assert_eq!(
        bytes,
        vec![
            0x01, // tag
            0x00, 0x00, 0x00, 0x0B, // entity id
            0x00, 0x02, 0x00, b'A', 0x00, b'b', // user name
            0, 0, 0, 0, 0, 0, 0, 0, // map seed
            0, // dimension
        ]
    );
}

// Known quirk: map_seed and dimension are always written as zero.
#[test]
fn test_login_request_zeroes_seed_and_dimension() {
    let packet = Packet::LoginRequest(LoginRequest {
        entity_id: 1,
        user_name: "Notch".to_string(),
        map_seed: 0x1234_5678_9ABC_DEF0,
        dimension: 255,
    });
    let bytes = encode(&packet);
    let tail = &bytes[bytes.len() - 9..];
    assert_eq!(tail, &[0u8; 9]);

    let decoded = Packet::from_bytes(&bytes, Direction::Serverbound).unwrap();
    match decoded {
        Packet::LoginRequest(login) => {
            assert_eq!(login.entity_id, 1);
            assert_eq!(login.user_name, "Notch");
            assert_eq!(login.map_seed, 0);
            assert_eq!(login.dimension, 0);
        }
        other => panic!("Expected LoginRequest, got {other:?}"),
    }
}

#[test]
fn test_login_request_reads_seed_and_dimension() {
    let mut bytes = vec![0x01, 0, 0, 0, 7, 0, 0];
    bytes.extend_from_slice(&(-5i64).to_be_bytes());
    bytes.push(0xFF);

    let decoded = Packet::from_bytes(&bytes, Direction::Clientbound).unwrap();
    assert_eq!(
        decoded,
        Packet::LoginRequest(LoginRequest {
            entity_id: 7,
            user_name: String::new(),
            map_seed: -5,
            dimension: 0xFF,
        })
    );
}

#[test]
fn test_block_placement_without_item() {
    let packet = Packet::PlayerBlockPlacement(PlayerBlockPlacement {
        x: 100,
        y: 64,
        z: -20,
        direction: FaceOffset::PlusY,
        item_id: -1,
        amount: 9,
        damage: 3,
    });
    let bytes = encode(&packet);
    assert_eq!(bytes.len(), 11 + 2);
    assert_eq!(&bytes[11..], &[0xFF, 0xFF]);

    // trailing garbage must not be read
    let mut stream = bytes.clone();
    stream.extend_from_slice(&[0xEE, 0xEE, 0xEE]);
    let mut input: &[u8] = &stream;
    let decoded = decode_packet(&mut input, Direction::Serverbound).unwrap();
    assert_eq!(input.len(), 3);
    assert_eq!(
        decoded,
        Packet::PlayerBlockPlacement(PlayerBlockPlacement {
            x: 100,
            y: 64,
            z: -20,
            direction: FaceOffset::PlusY,
            item_id: -1,
            amount: 0,
            damage: 0,
        })
    );
}

#[test]
fn test_block_placement_with_item() {
    let packet = Packet::PlayerBlockPlacement(PlayerBlockPlacement {
        x: 1,
        y: 2,
        z: 3,
        direction: FaceOffset::MinusX,
        item_id: 0,
        amount: 64,
        damage: 12,
    });
    let bytes = encode(&packet);
    assert_eq!(bytes.len(), 11 + 2 + 1 + 2);
    roundtrip(packet, Direction::Serverbound);
}

#[test]
fn test_position_look_field_order_by_direction() {
    let look = PositionLook {
        x: 1.0,
        y: 2.0,
        z: 3.0,
        stance: 3.62,
        yaw: 90.0,
        pitch: -10.0,
        on_ground: true,
    };

    let to_server = encode(&Packet::PlayerPositionLookToServer(
        PlayerPositionLookToServer(look),
    ));
    let to_client = encode(&Packet::PlayerPositionLookToClient(
        PlayerPositionLookToClient(look),
    ));

    assert_eq!(to_server[0], 0x0D);
    assert_eq!(to_client[0], 0x0D);
    assert_eq!(to_server.len(), 1 + 8 * 4 + 4 * 2 + 1);

    // serverbound: x, y, stance, z
    assert_eq!(&to_server[9..17], &2.0f64.to_le_bytes());
    assert_eq!(&to_server[17..25], &3.62f64.to_le_bytes());
    // clientbound: x, stance, y, z
    assert_eq!(&to_client[9..17], &3.62f64.to_le_bytes());
    assert_eq!(&to_client[17..25], &2.0f64.to_le_bytes());

    roundtrip(
        Packet::PlayerPositionLookToServer(PlayerPositionLookToServer(look)),
        Direction::Serverbound,
    );
    roundtrip(
        Packet::PlayerPositionLookToClient(PlayerPositionLookToClient(look)),
        Direction::Clientbound,
    );
}

#[test]
fn test_player_position_stance_before_z() {
    let bytes = encode(&Packet::PlayerPosition(PlayerPosition {
        x: 0.5,
        y: 70.0,
        z: -0.5,
        stance: 71.62,
        on_ground: false,
    }));
    assert_eq!(&bytes[17..25], &71.62f64.to_le_bytes());
    assert_eq!(&bytes[25..33], &(-0.5f64).to_le_bytes());
    assert_eq!(bytes[33], 0);
}

#[test]
fn test_entity_prefix_written_first() {
    let packets = vec![
        Packet::EntityRelativeMove(EntityRelativeMove {
            entity: Entity::new(0x0102_0304),
            dx: -1,
            dy: 2,
            dz: -3,
        }),
        Packet::EntityLook(EntityLook {
            entity: Entity::new(0x0102_0304),
            yaw: 10,
            pitch: 20,
        }),
        Packet::EntityLookRelativeMove(EntityLookRelativeMove {
            entity: Entity::new(0x0102_0304),
            dx: 1,
            dy: 1,
            dz: 1,
            yaw: 0,
            pitch: 255,
        }),
        Packet::EntityTeleport(EntityTeleport {
            entity: Entity::new(0x0102_0304),
            x: 320,
            y: 2048,
            z: -320,
            yaw: 1,
            pitch: 2,
        }),
        Packet::EntityStatus(EntityStatus {
            entity: Entity::new(0x0102_0304),
            status: 3,
        }),
        Packet::AttachEntity(AttachEntity {
            entity: Entity::new(0x0102_0304),
            vehicle_id: -1,
        }),
        Packet::EntityMetadata(EntityMetadata {
            entity: Entity::new(0x0102_0304),
            metadata: Metadata::new(),
        }),
    ];

    for packet in packets {
        let bytes = encode(&packet);
        assert_eq!(&bytes[1..5], &[0x01, 0x02, 0x03, 0x04], "{:?}", packet.kind());
        assert_eq!(packet.entity_id(), Some(0x0102_0304));
        roundtrip(packet, Direction::Clientbound);
    }
}

#[test]
fn test_relative_move_bytes() {
    let bytes = encode(&Packet::EntityRelativeMove(EntityRelativeMove {
        entity: Entity::new(5),
        dx: -1,
        dy: 0,
        dz: 127,
    }));
    assert_eq!(bytes, vec![0x1F, 0, 0, 0, 5, 0xFF, 0x00, 0x7F]);
}

#[test]
fn test_mob_spawn_with_metadata() {
    let mut metadata = Metadata::new();
    metadata.insert(0, MetadataValue::Byte(0)).unwrap();
    metadata.insert(16, MetadataValue::Byte(0x12)).unwrap();

    let packet = Packet::MobSpawn(MobSpawn {
        entity_id: 42,
        mob_type: MobType::Sheep,
        x: 10,
        y: 64,
        z: -10,
        yaw: 128,
        pitch: 0,
        metadata,
    });

    let bytes = encode(&packet);
    assert_eq!(bytes[0], 0x18);
    assert_eq!(bytes[5], 91);
    assert_eq!(&bytes[bytes.len() - 5..], &[0x00, 0x00, 0x10, 0x12, 0x7F]);
    roundtrip(packet, Direction::Clientbound);
}

#[test]
fn test_mob_spawn_with_unsupported_metadata_kind_fails() {
    let mut bytes = vec![0x18, 0, 0, 0, 1, 50];
    bytes.extend_from_slice(&[0u8; 12]);
    bytes.extend_from_slice(&[0, 0]);
    bytes.extend_from_slice(&[0x21, 0x00, 0x05, 0x7F]);

    let err = Packet::from_bytes(&bytes, Direction::Clientbound).unwrap_err();
    assert!(matches!(err, ProtocolError::UnrecognizedMetadataKind(1)));
}

#[test]
fn test_enum_fields_roundtrip() {
    roundtrip(
        Packet::PlayerDigging(PlayerDigging {
            status: DigStatus::Finished,
            x: -7,
            y: 12,
            z: 99,
            face: FaceOffset::PlusZ,
        }),
        Direction::Serverbound,
    );
    roundtrip(
        Packet::AddObjectVehicle(AddObjectVehicle {
            entity_id: 3,
            object_type: MovingObject::Arrow,
            x: 1,
            y: 2,
            z: 3,
        }),
        Direction::Clientbound,
    );
    // an unlisted object id passes straight through
    roundtrip(
        Packet::AddObjectVehicle(AddObjectVehicle {
            entity_id: 3,
            object_type: MovingObject::Unknown(200),
            x: 1,
            y: 2,
            z: 3,
        }),
        Direction::Clientbound,
    );
}

#[test]
fn test_truncated_body_is_short_read() {
    let bytes = encode(&Packet::SpawnPosition(SpawnPosition { x: 1, y: 2, z: 3 }));
    for cut in 1..bytes.len() {
        let err = Packet::from_bytes(&bytes[..cut], Direction::Clientbound).unwrap_err();
        assert!(err.is_short_read(), "cut at {cut}: {err:?}");
    }
}

#[test]
fn test_truncated_chat_is_malformed_string() {
    let bytes = encode(&Packet::ChatMessage(ChatMessage {
        message: "hello".to_string(),
    }));
    let err = Packet::from_bytes(&bytes[..6], Direction::Clientbound).unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::MalformedString {
            declared: 10,
            available: 3
        }
    ));
}

#[test]
fn test_to_bytes_matches_encode_packet() {
    let packet = Packet::TimeUpdate(TimeUpdate { time: 24000 });
    assert_eq!(packet.to_bytes().unwrap(), encode(&packet));
    assert_eq!(
        packet.to_bytes().unwrap(),
        vec![0x04, 0, 0, 0, 0, 0, 0, 0x5D, 0xC0]
    );
}

#[test]
fn test_failed_encode_writes_nothing() {
    let packet = Packet::ChatMessage(ChatMessage {
        message: "y".repeat(40_000),
    });
    let mut out = vec![0xEE];
    match encode_packet(&packet, &mut out) {
        Err(ProtocolError::StringTooLong(40_000)) => {}
        other => panic!("Unexpected result: {other:?}"),
    }
    assert_eq!(out, vec![0xEE]);
}

#[test]
fn test_pickup_spawn_layout() {
    let packet = Packet::PickupSpawn(PickupSpawn {
        entity_id: 0x0A0B_0C0D,
        item_id: 264,
        count: 3,
        damage: -1,
        x: 100,
        y: -2,
        z: 0x0102_0304,
        rotation: 0x40,
        pitch: 0x80,
        roll: 0xC0,
    });
    let bytes = encode(&packet);
    assert_eq!(
        bytes,
        vec![
            0x15, // tag
            0x0A, 0x0B, 0x0C, 0x0D, // entity id
            0x01, 0x08, // item id
            0x03, // count
            0xFF, 0xFF, // damage
            0x00, 0x00, 0x00, 0x64, // x
            0xFF, 0xFF, 0xFF, 0xFE, // y
            0x01, 0x02, 0x03, 0x04, // z
            0x40, 0x80, 0xC0, // rotation, pitch, roll
        ]
    );
    assert_eq!(packet.entity_id(), Some(0x0A0B_0C0D));
    roundtrip(packet, Direction::Clientbound);
}

#[test]
fn test_collect_item_and_use_bed_layouts() {
    let collect = Packet::CollectItem(CollectItem {
        collected_id: 5,
        collector_id: -1,
    });
    assert_eq!(
        encode(&collect),
        vec![0x16, 0, 0, 0, 5, 0xFF, 0xFF, 0xFF, 0xFF]
    );
    roundtrip(collect, Direction::Clientbound);

    let bed = Packet::UseBed(UseBed {
        entity_id: 2,
        in_bed: 0,
        x: -8,
        y: 70,
        z: 16,
    });
    assert_eq!(
        encode(&bed),
        vec![0x11, 0, 0, 0, 2, 0, 0xFF, 0xFF, 0xFF, 0xF8, 70, 0, 0, 0, 16]
    );
    roundtrip(bed, Direction::Clientbound);
}

#[test]
fn test_every_unknown_enum_byte_roundtrips() {
    for byte in 0u8..=255 {
        let packet = Packet::PlayerDigging(PlayerDigging {
            status: DigStatus::Unknown(byte),
            x: 1,
            y: 2,
            z: 3,
            face: FaceOffset::Unknown(byte),
        });
        let bytes = encode(&packet);
        let back = Packet::from_bytes(&bytes, Direction::Serverbound).unwrap();
        assert_eq!(back, packet, "byte {byte:#04x}");

        let spawn = Packet::AddObjectVehicle(AddObjectVehicle {
            entity_id: 1,
            object_type: MovingObject::Unknown(byte),
            x: 0,
            y: 0,
            z: 0,
        });
        let back = Packet::from_bytes(&encode(&spawn), Direction::Clientbound).unwrap();
        assert_eq!(back, spawn, "byte {byte:#04x}");

        let mob = Packet::MobSpawn(MobSpawn {
            entity_id: 1,
            mob_type: MobType::Unknown(byte),
            x: 0,
            y: 0,
            z: 0,
            yaw: 0,
            pitch: 0,
            metadata: Metadata::new(),
        });
        let back = Packet::from_bytes(&encode(&mob), Direction::Clientbound).unwrap();
        assert_eq!(back, mob, "byte {byte:#04x}");
    }
}

#[test]
fn test_unknown_with_named_byte_decodes_to_named_variant() {
    let packet = Packet::PlayerDigging(PlayerDigging {
        status: DigStatus::Unknown(0),
        x: 0,
        y: 0,
        z: 0,
        face: FaceOffset::Unknown(5),
    });
    let back = Packet::from_bytes(&encode(&packet), Direction::Serverbound).unwrap();
    match back {
        Packet::PlayerDigging(digging) => {
            assert!(matches!(digging.status, DigStatus::Started));
            assert!(matches!(digging.face, FaceOffset::PlusX));
        }
        other => panic!("Expected PlayerDigging, got {other:?}"),
    }
}
