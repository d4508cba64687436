//! Primitive decoding on top of [`ReadBuffer`]

use std::io::Read;

use crate::buffer::ReadBuffer;
use crate::errors::{Error, Result};
use crate::primitives::{
    has_continuation, payload, read_u32_le, read_u64_le, zigzag_decode32, zigzag_decode64,
    MAX_VARINT_SIZE,
};

/// Decoder for the primitive protobuf encodings
///
/// Wraps a [`ReadBuffer`] and knows nothing about tags or fields.
#[derive(Debug)]
pub struct ProtoInput<R> {
    buffer: ReadBuffer<R>,
}

impl<R: Read> ProtoInput<R> {
    /// Decode from `input` through a window of `capacity` bytes
    pub fn new(input: R, capacity: usize) -> Self {
        Self {
            buffer: ReadBuffer::new(input, capacity),
        }
    }

    /// Read a varint of up to 10 bytes
    ///
    /// The tenth byte may only contribute the single top bit of the value.
    pub fn read_varint64(&mut self) -> Result<u64> {
        let mut value = 0u64;
        for index in 0..MAX_VARINT_SIZE {
            self.buffer.ensure_available(1)?;
            let byte = self.buffer.read_byte();
            if index == MAX_VARINT_SIZE - 1 && byte > 1 {
                return Err(Error::MalformedVarint);
            }

            value |= payload(byte) << (7 * index);
            if !has_continuation(byte) {
                return Ok(value);
            }
        }
        Err(Error::MalformedVarint)
    }

    /// Read a varint truncated to its low 32 bits
    #[inline]
    pub fn read_varint32(&mut self) -> Result<i32> {
        Ok(self.read_varint64()? as i32)
    }

    /// Read a zigzag encoded `sint32`
    #[inline]
    pub fn read_zigzag32(&mut self) -> Result<i32> {
        Ok(zigzag_decode32(self.read_varint64()? as u32))
    }

    /// Read a zigzag encoded `sint64`
    #[inline]
    pub fn read_zigzag64(&mut self) -> Result<i64> {
        Ok(zigzag_decode64(self.read_varint64()?))
    }

    /// Read 4 little-endian bytes
    #[inline]
    pub fn read_fixed32(&mut self) -> Result<u32> {
        self.buffer.ensure_available(4)?;
        Ok(read_u32_le(self.buffer.read_array()))
    }

    /// Read 8 little-endian bytes
    #[inline]
    pub fn read_fixed64(&mut self) -> Result<u64> {
        self.buffer.ensure_available(8)?;
        Ok(read_u64_le(self.buffer.read_array()))
    }

    /// Read an IEEE 754 single precision float
    #[inline]
    pub fn read_float(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_fixed32()?))
    }

    /// Read an IEEE 754 double precision float
    #[inline]
    pub fn read_double(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_fixed64()?))
    }

    /// Read a bool; any non-zero varint is `true`
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_varint64()? != 0)
    }

    /// Read the varint length prefix of a `LEN` payload
    pub fn read_length(&mut self) -> Result<u64> {
        let length = self.read_varint64()?;
        if length > self.buffer.limit() {
            return Err(Error::LimitExceeded);
        }
        Ok(length)
    }

    /// Read a length-prefixed UTF-8 string
    pub fn read_string(&mut self) -> Result<String> {
        let length = self.read_length()?;
        self.buffer.read_string(length as usize)
    }

    /// Read a length-prefixed byte sequence
    pub fn read_bytes(&mut self) -> Result<Vec<u8>> {
        let length = self.read_length()?;
        self.buffer.read(length as usize)
    }

    /// Discard `size` bytes
    #[inline]
    pub fn skip(&mut self, size: u64) -> Result<()> {
        self.buffer.skip(size)
    }

    /// Whether more bytes can be read within the current limit
    #[inline]
    pub fn has_remaining(&mut self) -> Result<bool> {
        self.buffer.has_remaining()
    }

    /// Install a new remaining-byte budget, returning the previous one
    #[inline]
    pub fn set_limit(&mut self, limit: u64) -> u64 {
        self.buffer.set_limit(limit)
    }

    /// Remaining-byte budget
    #[inline]
    pub fn limit(&self) -> u64 {
        self.buffer.limit()
    }

    /// Give back the underlying source
    pub fn into_inner(self) -> R {
        self.buffer.into_inner()
    }
}
