//! Primitive encodings shared by the codec and the size calculator
//!
//! Fixed-width values are assembled from explicit byte shifts so the result
//! never depends on the platform byte order.

/// Maximum number of bytes a varint may occupy
pub const MAX_VARINT_SIZE: usize = 10;

const PAYLOAD_MASK: u64 = 0b0111_1111;
const CONTINUATION_BIT: u8 = 0b1000_0000;

/// Map a signed 32-bit value onto an unsigned one, small magnitudes first
#[inline]
pub const fn zigzag_encode32(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

/// Inverse of [`zigzag_encode32`]
#[inline]
pub const fn zigzag_decode32(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

/// Map a signed 64-bit value onto an unsigned one, small magnitudes first
#[inline]
pub const fn zigzag_encode64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag_encode64`]
#[inline]
pub const fn zigzag_decode64(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

/// Number of bytes the varint encoding of `value` occupies (1 to 10)
#[inline]
pub const fn varint_size(value: u64) -> usize {
    let bits = 64 - (value | 1).leading_zeros() as usize;
    (bits + 6) / 7
}

/// Varint size of an `int32`, which is sign-extended to 64 bits on the wire
#[inline]
pub const fn varint32_size(value: i32) -> usize {
    varint_size(value as i64 as u64)
}

/// Encode `value` as a varint into `buf`, returning the number of bytes used
#[inline]
pub fn encode_varint(mut value: u64, buf: &mut [u8; MAX_VARINT_SIZE]) -> usize {
    let mut i = 0;
    loop {
        let byte = (value & PAYLOAD_MASK) as u8;
        value >>= 7;
        if value == 0 {
            buf[i] = byte;
            return i + 1;
        }
        buf[i] = byte | CONTINUATION_BIT;
        i += 1;
    }
}

/// Whether a varint byte is followed by another one
#[inline]
pub const fn has_continuation(byte: u8) -> bool {
    byte & CONTINUATION_BIT != 0
}

/// Payload bits of a varint byte
#[inline]
pub const fn payload(byte: u8) -> u64 {
    byte as u64 & PAYLOAD_MASK
}

/// Decode 4 little-endian bytes
#[inline]
pub const fn read_u32_le(bytes: [u8; 4]) -> u32 {
    (bytes[0] as u32)
        | (bytes[1] as u32) << 8
        | (bytes[2] as u32) << 16
        | (bytes[3] as u32) << 24
}

/// Decode 8 little-endian bytes
#[inline]
pub const fn read_u64_le(bytes: [u8; 8]) -> u64 {
    (bytes[0] as u64)
        | (bytes[1] as u64) << 8
        | (bytes[2] as u64) << 16
        | (bytes[3] as u64) << 24
        | (bytes[4] as u64) << 32
        | (bytes[5] as u64) << 40
        | (bytes[6] as u64) << 48
        | (bytes[7] as u64) << 56
}

/// Encode as 4 little-endian bytes
#[inline]
pub const fn write_u32_le(value: u32) -> [u8; 4] {
    [
        value as u8,
        (value >> 8) as u8,
        (value >> 16) as u8,
        (value >> 24) as u8,
    ]
}

/// Encode as 8 little-endian bytes
#[inline]
pub const fn write_u64_le(value: u64) -> [u8; 8] {
    [
        value as u8,
        (value >> 8) as u8,
        (value >> 16) as u8,
        (value >> 24) as u8,
        (value >> 32) as u8,
        (value >> 40) as u8,
        (value >> 48) as u8,
        (value >> 56) as u8,
    ]
}
