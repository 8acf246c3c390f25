//! # Primitive Wire Codec
//!
//! Fixed-width scalars and the two string encodings, read from any
//! [`std::io::Read`] and written to any [`std::io::Write`].
//!
//! ## Byte Order
//! Integers travel in network (big-endian) order. Floats and booleans are
//! written the way the reference client's binary writer emits them: host
//! little-endian, no swap. The asymmetry is part of the wire format.
//!
//! ```text
//! i16/i32/i64   big-endian
//! f32/f64       little-endian
//! bool          1 byte, 0 or 1 (any non-zero reads as true)
//! String8       [len: i16 BE][len UTF-8 bytes]
//! String16      [len: i16 BE][len * 2 bytes UTF-16BE]
//! ```

use std::io::{self, Read, Write};

use crate::error::{ProtocolError, Result};

/// Read exactly `N` bytes, mapping end-of-stream to [`ProtocolError::ShortRead`].
fn read_array<R: Read + ?Sized, const N: usize>(r: &mut R) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    r.read_exact(&mut buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => ProtocolError::ShortRead { needed: N },
        _ => ProtocolError::Io(e),
    })?;
    Ok(buf)
}

/// Read up to `len` bytes; fewer than `len` means the string was cut short.
fn read_string_body<R: Read + ?Sized>(r: &mut R, len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(len);
    Read::take(&mut *r, len as u64).read_to_end(&mut buf)?;
    if buf.len() < len {
        return Err(ProtocolError::MalformedString {
            declared: len,
            available: buf.len(),
        });
    }
    Ok(buf)
}

fn read_length<R: WireRead + ?Sized>(r: &mut R) -> Result<usize> {
    let len = r.read_i16()?;
    if len < 0 {
        return Err(ProtocolError::NegativeStringLength(len));
    }
    Ok(len as usize)
}

fn length_prefix(len: usize) -> Result<i16> {
    i16::try_from(len).map_err(|_| ProtocolError::StringTooLong(len))
}

/// Reading half of the primitive codec.
///
/// Implemented for every [`Read`], so packet bodies decode from a socket,
/// a `Cursor` or a plain `&[u8]` alike.
pub trait WireRead: Read {
    fn read_u8(&mut self) -> Result<u8> {
        Ok(read_array::<_, 1>(self)?[0])
    }

    fn read_i8(&mut self) -> Result<i8> {
        Ok(read_array::<_, 1>(self)?[0] as i8)
    }

    fn read_i16(&mut self) -> Result<i16> {
        Ok(i16::from_be_bytes(read_array(self)?))
    }

    fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(read_array(self)?))
    }

    fn read_i64(&mut self) -> Result<i64> {
        Ok(i64::from_be_bytes(read_array(self)?))
    }

    fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_le_bytes(read_array(self)?))
    }

    fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_le_bytes(read_array(self)?))
    }

    fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Length-prefixed UTF-8; the prefix counts bytes. Invalid sequences are
    /// replaced, not rejected.
    fn read_string8(&mut self) -> Result<String> {
        let len = read_length(self)?;
        let bytes = read_string_body(self, len)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Length-prefixed UTF-16BE; the prefix counts code units.
    fn read_string16(&mut self) -> Result<String> {
        let units = read_length(self)?;
        let bytes = read_string_body(self, units * 2)?;
        let utf16: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        Ok(String::from_utf16_lossy(&utf16))
    }
}

impl<R: Read + ?Sized> WireRead for R {}

/// Writing half of the primitive codec.
pub trait WireWrite: Write {
    fn write_u8(&mut self, v: u8) -> Result<()> {
        self.write_all(&[v])?;
        Ok(())
    }

    fn write_i8(&mut self, v: i8) -> Result<()> {
        self.write_all(&v.to_be_bytes())?;
        Ok(())
    }

    fn write_i16(&mut self, v: i16) -> Result<()> {
        self.write_all(&v.to_be_bytes())?;
        Ok(())
    }

    fn write_i32(&mut self, v: i32) -> Result<()> {
        self.write_all(&v.to_be_bytes())?;
        Ok(())
    }

    fn write_i64(&mut self, v: i64) -> Result<()> {
        self.write_all(&v.to_be_bytes())?;
        Ok(())
    }

    fn write_f32(&mut self, v: f32) -> Result<()> {
        self.write_all(&v.to_le_bytes())?;
        Ok(())
    }

    fn write_f64(&mut self, v: f64) -> Result<()> {
        self.write_all(&v.to_le_bytes())?;
        Ok(())
    }

    fn write_bool(&mut self, v: bool) -> Result<()> {
        self.write_u8(v as u8)
    }

    /// Length-prefixed UTF-8.
    ///
    /// The prefix is the UTF-8 byte count, not the character count. The two
    /// agree for ASCII; for anything else a character count would cut the body
    /// short, so `"héllo"` is written with a prefix of 6, not 5.
    fn write_string8(&mut self, s: &str) -> Result<()> {
        self.write_i16(length_prefix(s.len())?)?;
        self.write_all(s.as_bytes())?;
        Ok(())
    }

    fn write_string16(&mut self, s: &str) -> Result<()> {
        let units: Vec<u16> = s.encode_utf16().collect();
        self.write_i16(length_prefix(units.len())?)?;
        let mut body = Vec::with_capacity(units.len() * 2);
        for unit in units {
            body.extend_from_slice(&unit.to_be_bytes());
        }
        self.write_all(&body)?;
        Ok(())
    }
}

impl<W: Write + ?Sized> WireWrite for W {}
