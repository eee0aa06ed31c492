//! Append-only little-endian writer for the flat payload.

use crate::error::{Error, Result};

/// Growable output buffer.
pub struct PayloadWriter {
    buf: Vec<u8>,
}

impl PayloadWriter {
    /// Create a writer with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_bool(&mut self, value: bool) {
        self.buf.push(u8::from(value));
    }

    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_f32(&mut self, value: f32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Write a count or length as a signed 32-bit integer.
    pub fn write_len(&mut self, len: usize) -> Result<()> {
        let value = i32::try_from(len).map_err(|_| Error::PayloadTooLarge {
            limit: i32::MAX as usize,
        })?;
        self.write_i32(value);
        Ok(())
    }

    /// Write a length-prefixed byte blob.
    pub fn write_blob(&mut self, data: &[u8]) -> Result<()> {
        self.write_len(data.len())?;
        self.buf.extend_from_slice(data);
        Ok(())
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the writer and return the bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
