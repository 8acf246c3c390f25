//! Chunk, block, window and disconnect packets.
//!
//! Apart from `PreChunk`, these have no body layout yet: they decode nothing
//! past the tag and encode only the tag.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::core::wire::{WireRead, WireWrite};
use crate::error::Result;
use crate::protocol::packet::{PacketBody, PacketKind};

/// Tells the client to allocate (`mode == true`) or drop a chunk column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreChunk {
    pub x: i32,
    pub z: i32,
    pub mode: bool,
}

impl PacketBody for PreChunk {
    const KIND: PacketKind = PacketKind::PreChunk;

    fn decode_body<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(Self {
            x: r.read_i32()?,
            z: r.read_i32()?,
            mode: r.read_bool()?,
        })
    }

    fn encode_body<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.write_i32(self.x)?;
        w.write_i32(self.z)?;
        w.write_bool(self.mode)
    }
}

macro_rules! tag_only {
    ($($name:ident),+ $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
            pub struct $name;

            impl PacketBody for $name {
                const KIND: PacketKind = PacketKind::$name;

                fn decode_body<R: Read + ?Sized>(_r: &mut R) -> Result<Self> {
                    Ok($name)
                }

                fn encode_body<W: Write + ?Sized>(&self, _w: &mut W) -> Result<()> {
                    Ok(())
                }
            }
        )+
    };
}

tag_only!(
    MapChunk,
    MultiBlockChange,
    BlockChange,
    PlayNoteBlock,
    Explosion,
    OpenWindow,
    CloseWindow,
    WindowClick,
    SetSlot,
    WindowItems,
    UpdateProgressBar,
    Transaction,
    UpdateSign,
    DisconnectKick,
);
