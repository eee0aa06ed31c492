//! Bounds-checked little-endian reader over a flat payload.

use crate::error::{Error, Result};

/// Cursor over an in-memory payload.
///
/// Every read checks the remaining length first; running off the end is
/// reported as [`Error::MalformedPayload`] rather than a panic.
pub struct PayloadReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> PayloadReader<'a> {
    /// Create a reader positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current offset from the start of the payload.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Check if every byte has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Consume exactly `len` bytes.
    pub fn read_bytes(&mut self, len: usize, what: &str) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(Error::malformed(format!(
                "{} needs {} bytes at offset {}, only {} remain",
                what,
                len,
                self.pos,
                self.remaining()
            )));
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self, what: &str) -> Result<[u8; N]> {
        let bytes = self.read_bytes(N, what)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self, what: &str) -> Result<u8> {
        Ok(self.read_array::<1>(what)?[0])
    }

    /// Read a one-byte boolean; only 0 and 1 are accepted.
    pub fn read_bool(&mut self, what: &str) -> Result<bool> {
        let offset = self.pos;
        match self.read_u8(what)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(Error::malformed(format!(
                "{} has invalid boolean byte {:#04x} at offset {}",
                what, other, offset
            ))),
        }
    }

    /// Read a signed 32-bit integer.
    pub fn read_i32(&mut self, what: &str) -> Result<i32> {
        self.read_array::<4>(what).map(i32::from_le_bytes)
    }

    /// Read a 32-bit float, bit for bit.
    pub fn read_f32(&mut self, what: &str) -> Result<f32> {
        self.read_array::<4>(what).map(f32::from_le_bytes)
    }

    /// Read a signed 32-bit count or length that must not be negative.
    pub fn read_len(&mut self, what: &str) -> Result<usize> {
        let offset = self.pos;
        let value = self.read_i32(what)?;
        usize::try_from(value).map_err(|_| {
            Error::malformed(format!(
                "{} is negative ({}) at offset {}",
                what, value, offset
            ))
        })
    }

    /// Read a length-prefixed byte blob.
    pub fn read_blob(&mut self, what: &str) -> Result<&'a [u8]> {
        let len = self.read_len(what)?;
        self.read_bytes(len, what)
    }
}
