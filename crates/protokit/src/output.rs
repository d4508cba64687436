//! Primitive encoding into a buffered [`Write`] sink

use std::io::Write;

use crate::errors::Result;
use crate::primitives::{
    encode_varint, write_u32_le, write_u64_le, zigzag_encode32, zigzag_encode64, MAX_VARINT_SIZE,
};

/// Encoder for the primitive protobuf encodings
///
/// Bytes are staged in an internal buffer and handed to the sink whenever it
/// fills up. Call [`ProtoOutput::flush`] or [`ProtoOutput::into_inner`] to
/// push out the tail.
#[derive(Debug)]
pub struct ProtoOutput<W: Write> {
    output: W,
    buffer: Vec<u8>,
    capacity: usize,
    written: u64,
}

impl<W: Write> ProtoOutput<W> {
    /// Encode into `output`, staging up to `capacity` bytes between writes
    pub fn new(output: W, capacity: usize) -> Self {
        let capacity = capacity.max(MAX_VARINT_SIZE);
        Self {
            output,
            buffer: Vec::with_capacity(capacity),
            capacity,
            written: 0,
        }
    }

    /// Write raw bytes
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        if self.buffer.len() + bytes.len() > self.capacity {
            self.flush_buffer()?;
        }
        if bytes.len() >= self.capacity {
            self.output.write_all(bytes)?;
        } else {
            self.buffer.extend_from_slice(bytes);
        }
        self.written += bytes.len() as u64;
        Ok(())
    }

    /// Write `value` as a varint
    #[inline]
    pub fn write_varint64(&mut self, value: u64) -> Result<()> {
        let mut bytes = [0u8; MAX_VARINT_SIZE];
        let len = encode_varint(value, &mut bytes);
        self.write_raw(&bytes[..len])
    }

    /// Write an `int32`, sign-extending negatives to 64 bits
    #[inline]
    pub fn write_varint32(&mut self, value: i32) -> Result<()> {
        self.write_varint64(value as i64 as u64)
    }

    /// Write a zigzag encoded `sint32`
    #[inline]
    pub fn write_zigzag32(&mut self, value: i32) -> Result<()> {
        self.write_varint64(zigzag_encode32(value) as u64)
    }

    /// Write a zigzag encoded `sint64`
    #[inline]
    pub fn write_zigzag64(&mut self, value: i64) -> Result<()> {
        self.write_varint64(zigzag_encode64(value))
    }

    /// Write 4 little-endian bytes
    #[inline]
    pub fn write_fixed32(&mut self, value: u32) -> Result<()> {
        self.write_raw(&write_u32_le(value))
    }

    /// Write 8 little-endian bytes
    #[inline]
    pub fn write_fixed64(&mut self, value: u64) -> Result<()> {
        self.write_raw(&write_u64_le(value))
    }

    /// Write an IEEE 754 single precision float
    #[inline]
    pub fn write_float(&mut self, value: f32) -> Result<()> {
        self.write_fixed32(value.to_bits())
    }

    /// Write an IEEE 754 double precision float
    #[inline]
    pub fn write_double(&mut self, value: f64) -> Result<()> {
        self.write_fixed64(value.to_bits())
    }

    /// Write a bool as a single-byte varint
    #[inline]
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_raw(&[value as u8])
    }

    /// Write a length-prefixed UTF-8 string
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.write_bytes(value.as_bytes())
    }

    /// Write a length-prefixed byte sequence
    pub fn write_bytes(&mut self, value: &[u8]) -> Result<()> {
        self.write_varint64(value.len() as u64)?;
        self.write_raw(value)
    }

    /// Total number of bytes accepted so far, flushed or not
    #[inline]
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Push buffered bytes to the sink and flush it
    pub fn flush(&mut self) -> Result<()> {
        self.flush_buffer()?;
        self.output.flush()?;
        Ok(())
    }

    /// Flush and give back the sink
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.output)
    }

    fn flush_buffer(&mut self) -> Result<()> {
        if !self.buffer.is_empty() {
            self.output.write_all(&self.buffer)?;
            self.buffer.clear();
        }
        Ok(())
    }
}
