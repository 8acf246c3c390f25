//! # Entity Metadata
//!
//! A small typed key/value side channel embedded at the end of some packets
//! (mob spawns, metadata updates).
//!
//! ## Wire Format
//! ```text
//! ([packed: u8][value])* [0x7F]
//!
//! packed = (kind << 5) | index      kind: 0..=3, index: 0..=31
//! ```
//!
//! | kind | value  | encoding    |
//! |------|--------|-------------|
//! | 0    | byte   | u8          |
//! | 1    | short  | i16 BE      |
//! | 2    | int    | i32 BE      |
//! | 3    | float  | f32 LE      |
//!
//! Only kind 0 has a decoder; the other kinds are rejected on read but can be
//! written.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{MAX_METADATA_INDEX, METADATA_TERMINATOR};
use crate::core::wire::{WireRead, WireWrite};
use crate::error::{ProtocolError, Result};

/// A single typed metadata value. The variant determines the wire kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MetadataValue {
    Byte(u8),
    Short(i16),
    Int(i32),
    Float(f32),
}

impl MetadataValue {
    /// The 3-bit kind written in the upper bits of the packed byte.
    pub fn kind(&self) -> u8 {
        match self {
            MetadataValue::Byte(_) => 0,
            MetadataValue::Short(_) => 1,
            MetadataValue::Int(_) => 2,
            MetadataValue::Float(_) => 3,
        }
    }

    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        match *self {
            MetadataValue::Byte(v) => w.write_u8(v),
            MetadataValue::Short(v) => w.write_i16(v),
            MetadataValue::Int(v) => w.write_i32(v),
            MetadataValue::Float(v) => w.write_f32(v),
        }
    }
}

/// One indexed metadata value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub index: u8,
    pub value: MetadataValue,
}

impl MetadataEntry {
    pub fn packed(&self) -> u8 {
        (self.value.kind() << 5) + self.index
    }
}

/// Insertion-ordered metadata collection keyed by index.
///
/// Indices are unique; inserting an existing index overwrites the value in
/// place, so iteration (and therefore write) order stays stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    entries: Vec<MetadataEntry>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the value at `index`, returning the old value.
    pub fn insert(&mut self, index: u8, value: MetadataValue) -> Result<Option<MetadataValue>> {
        // kind 3 at index 31 would pack to the terminator byte
        if index > MAX_METADATA_INDEX || (value.kind() << 5) + index == METADATA_TERMINATOR {
            return Err(ProtocolError::MetadataIndexOutOfRange(index));
        }
        match self.entries.iter_mut().find(|e| e.index == index) {
            Some(entry) => Ok(Some(std::mem::replace(&mut entry.value, value))),
            None => {
                self.entries.push(MetadataEntry { index, value });
                Ok(None)
            }
        }
    }

    pub fn get(&self, index: u8) -> Option<&MetadataValue> {
        self.entries
            .iter()
            .find(|e| e.index == index)
            .map(|e| &e.value)
    }

    pub fn remove(&mut self, index: u8) -> Option<MetadataValue> {
        let pos = self.entries.iter().position(|e| e.index == index)?;
        Some(self.entries.remove(pos).value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetadataEntry> {
        self.entries.iter()
    }

    /// Decode entries until the 0x7F terminator.
    pub fn read_from<R: Read + ?Sized>(r: &mut R) -> Result<Self> {
        let mut metadata = Metadata::new();
        loop {
            let packed = r.read_u8()?;
            if packed == METADATA_TERMINATOR {
                return Ok(metadata);
            }
            let index = packed & 0x1F;
            match packed >> 5 {
                0 => {
                    let value = MetadataValue::Byte(r.read_u8()?);
                    metadata.insert(index, value)?;
                }
                kind => {
                    debug!(kind, index, "unrecognized metadata kind");
                    return Err(ProtocolError::UnrecognizedMetadataKind(kind));
                }
            }
        }
    }

    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        for entry in &self.entries {
            w.write_u8(entry.packed())?;
            entry.value.write_to(w)?;
        }
        w.write_u8(METADATA_TERMINATOR)
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = &'a MetadataEntry;
    type IntoIter = std::slice::Iter<'a, MetadataEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl TryFrom<Vec<MetadataEntry>> for Metadata {
    type Error = ProtocolError;

    /// Later duplicates overwrite earlier ones; any unrepresentable entry fails.
    fn try_from(entries: Vec<MetadataEntry>) -> Result<Self> {
        let mut metadata = Metadata::new();
        for entry in entries {
            metadata.insert(entry.index, entry.value)?;
        }
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_roundtrip_preserves_order() {
        let mut metadata = Metadata::new();
        metadata.insert(0, MetadataValue::Byte(5)).unwrap();
        metadata.insert(3, MetadataValue::Byte(200)).unwrap();

        let mut out = Vec::new();
        metadata.write_to(&mut out).unwrap();
        assert_eq!(out, vec![0x00, 5, 0x03, 200, 0x7F]);
        assert_eq!(out.last(), Some(&0x7F));

        let mut input: &[u8] = &out;
        let decoded = Metadata::read_from(&mut input).unwrap();
        assert_eq!(decoded, metadata);
        let indices: Vec<u8> = decoded.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 3]);
    }

    #[test]
    fn test_terminator_only_is_empty() {
        let mut input: &[u8] = &[0x7F, 0x01, 0x02];
        let decoded = Metadata::read_from(&mut input).unwrap();
        assert!(decoded.is_empty());
        assert_eq!(input, &[0x01, 0x02]);
    }

    #[test]
    fn test_unimplemented_kinds_fail_decode() {
        for kind in 1u8..=3 {
            let packed = (kind << 5) | 2;
            let bytes = [packed, 0x00, 0x01, 0x7F];
            let mut input: &[u8] = &bytes;
            match Metadata::read_from(&mut input) {
                Err(ProtocolError::UnrecognizedMetadataKind(k)) => assert_eq!(k, kind),
                other => panic!("Unexpected result: {other:?}"),
            }
        }
    }

    #[test]
    fn test_wider_kinds_encode() {
        let mut metadata = Metadata::new();
        metadata.insert(1, MetadataValue::Short(-2)).unwrap();
        metadata.insert(2, MetadataValue::Int(0x0102_0304)).unwrap();
        metadata.insert(30, MetadataValue::Float(1.0)).unwrap();

        let mut out = Vec::new();
        metadata.write_to(&mut out).unwrap();

        let mut expected = vec![0x21, 0xFF, 0xFE, 0x42, 0x01, 0x02, 0x03, 0x04, 0x7E];
        expected.extend_from_slice(&1.0f32.to_le_bytes());
        expected.push(0x7F);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_missing_terminator_is_short_read() {
        let mut input: &[u8] = &[0x00, 0x05];
        let err = Metadata::read_from(&mut input).unwrap_err();
        assert!(err.is_short_read());
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut metadata = Metadata::new();
        metadata.insert(4, MetadataValue::Byte(1)).unwrap();
        metadata.insert(9, MetadataValue::Byte(2)).unwrap();
        let old = metadata.insert(4, MetadataValue::Short(7)).unwrap();

        assert_eq!(old, Some(MetadataValue::Byte(1)));
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata.iter().next().map(|e| e.index), Some(4));
        assert_eq!(metadata.get(4), Some(&MetadataValue::Short(7)));
    }

    #[test]
    fn test_index_out_of_range() {
        let mut metadata = Metadata::new();
        assert!(matches!(
            metadata.insert(32, MetadataValue::Byte(0)),
            Err(ProtocolError::MetadataIndexOutOfRange(32))
        ));
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_float_at_last_index_would_alias_terminator() {
        let mut metadata = Metadata::new();
        assert!(metadata.insert(31, MetadataValue::Float(0.5)).is_err());
        assert!(metadata.insert(31, MetadataValue::Byte(1)).is_ok());
    }

    #[test]
    fn test_duplicate_index_on_wire_keeps_last() {
        let mut input: &[u8] = &[0x02, 1, 0x05, 9, 0x02, 3, 0x7F];
        let decoded = Metadata::read_from(&mut input).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded.get(2), Some(&MetadataValue::Byte(3)));
    }

    #[test]
    fn test_try_from_entries() {
        let metadata = Metadata::try_from(vec![
            MetadataEntry {
                index: 4,
                value: MetadataValue::Byte(1),
            },
            MetadataEntry {
                index: 2,
                value: MetadataValue::Short(9),
            },
            MetadataEntry {
                index: 4,
                value: MetadataValue::Byte(7),
            },
        ])
        .unwrap();

        let indices: Vec<u8> = metadata.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![4, 2]);
        assert_eq!(metadata.get(4), Some(&MetadataValue::Byte(7)));
    }

    #[test]
    fn test_try_from_rejects_out_of_range_entry() {
        let result = Metadata::try_from(vec![
            MetadataEntry {
                index: 0,
                value: MetadataValue::Byte(1),
            },
            MetadataEntry {
                index: 40,
                value: MetadataValue::Byte(2),
            },
        ]);
        assert!(matches!(
            result,
            Err(ProtocolError::MetadataIndexOutOfRange(40))
        ));
    }
}
