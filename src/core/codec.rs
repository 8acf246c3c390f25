//! Tokio framing for the packet stream.
//!
//! Packets carry no length prefix, so a frame ends wherever the variant's
//! layout says it does. The decoder runs the blocking dispatcher over a
//! cursor on the buffered bytes; a short read just means the frame is not
//! complete yet, and the buffer is left untouched until more data arrives.

use std::io::Cursor;

use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::trace;

use crate::config::CodecConfig;
use crate::error::ProtocolError;
use crate::protocol::dispatcher::{decode_packet, encode_packet};
use crate::protocol::packet::{Direction, Packet};

/// `Decoder`/`Encoder` pair for use with `Framed`, `FramedRead` and `FramedWrite`.
#[derive(Debug, Clone, Copy)]
pub struct PacketCodec {
    direction: Direction,
}

impl PacketCodec {
    /// `direction` is the direction of the packets this codec will decode
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub fn from_config(config: &CodecConfig) -> Self {
        Self::new(config.direction)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Decoder for PacketCodec {
    type Item = Packet;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }

        let mut cursor = Cursor::new(&src[..]);
        match decode_packet(&mut cursor, self.direction) {
            Ok(packet) => {
                let consumed = cursor.position() as usize;
                src.advance(consumed);
                Ok(Some(packet))
            }
            Err(e) if e.is_short_read() => {
                trace!(buffered = src.len(), "incomplete packet, waiting for more bytes");
                src.reserve(64);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

impl Encoder<Packet> for PacketCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: Packet, dst: &mut BytesMut) -> Result<(), Self::Error> {
        encode_into(&item, dst)
    }
}

impl Encoder<&Packet> for PacketCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: &Packet, dst: &mut BytesMut) -> Result<(), Self::Error> {
        encode_into(item, dst)
    }
}

// On error `dst` is restored to its previous length.
fn encode_into(item: &Packet, dst: &mut BytesMut) -> Result<(), ProtocolError> {
    let start = dst.len();
    let mut writer = (&mut *dst).writer();
    let result = encode_packet(item, &mut writer);
    if result.is_err() {
        dst.truncate(start);
    }
    result
}
