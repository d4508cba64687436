//! Wire types and tags

use core::fmt;

use crate::errors::{Error, Result};

/// Number of low tag bits holding the wire type
pub const WIRE_BITS: u32 = 3;

/// Mask selecting the wire type bits of a tag
pub const WIRE_MASK: u32 = (1 << WIRE_BITS) - 1;

/// Smallest valid field number
pub const MIN_FIELD_NUMBER: u32 = 1;

/// Largest valid field number
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// How a field's payload is framed on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireType {
    /// Variable length integer
    Varint = 0,
    /// 8 little-endian bytes
    I64 = 1,
    /// Varint length followed by that many bytes
    Len = 2,
    /// Group start (unsupported)
    StartGroup = 3,
    /// Group end (unsupported)
    EndGroup = 4,
    /// 4 little-endian bytes
    I32 = 5,
}

impl WireType {
    /// Look up a wire type by its id
    pub fn from_id(id: u8) -> Result<Self> {
        match id {
            0 => Ok(WireType::Varint),
            1 => Ok(WireType::I64),
            2 => Ok(WireType::Len),
            3 => Ok(WireType::StartGroup),
            4 => Ok(WireType::EndGroup),
            5 => Ok(WireType::I32),
            _ => Err(Error::UnknownWireType(id)),
        }
    }

    /// Numeric id of this wire type
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Create a tag for the given field number with this wire type
    #[inline]
    pub const fn tag_from(self, number: u32) -> Tag {
        Tag::new(number, self)
    }

    /// Protobuf documentation name of this wire type
    pub const fn name(self) -> &'static str {
        match self {
            WireType::Varint => "VARINT",
            WireType::I64 => "I64",
            WireType::Len => "LEN",
            WireType::StartGroup => "SGROUP",
            WireType::EndGroup => "EGROUP",
            WireType::I32 => "I32",
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field number paired with a raw wire type id
///
/// The wire type is kept as the raw 3-bit id so that tags carrying the
/// undefined ids 6 and 7 can be represented until something acts on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    number: u32,
    wire_type: u8,
}

impl Tag {
    /// Create a tag from a field number and wire type
    #[inline]
    pub const fn new(number: u32, wire_type: WireType) -> Self {
        Self {
            number,
            wire_type: wire_type as u8,
        }
    }

    /// Create a tag from its full integer representation
    #[inline]
    pub const fn from_value(value: u32) -> Self {
        Self {
            number: value >> WIRE_BITS,
            wire_type: (value & WIRE_MASK) as u8,
        }
    }

    /// Full integer representation, `number << 3 | wire_type`
    #[inline]
    pub const fn value(self) -> u32 {
        self.number << WIRE_BITS | self.wire_type as u32
    }

    /// Field number
    #[inline]
    pub const fn number(self) -> u32 {
        self.number
    }

    /// Raw wire type id
    #[inline]
    pub const fn wire_type_id(self) -> u8 {
        self.wire_type
    }

    /// Wire type, failing for ids outside the defined six
    #[inline]
    pub fn wire_type(self) -> Result<WireType> {
        WireType::from_id(self.wire_type)
    }

    /// Whether this tag carries the given wire type
    #[inline]
    pub fn is(self, wire_type: WireType) -> bool {
        self.wire_type == wire_type as u8
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.number, self.wire_type)
    }
}
