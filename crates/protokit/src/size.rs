//! Size calculator
//!
//! Exact encoded sizes of fields, computed without encoding anything. Every
//! function applies the same omission rules as [`ProtobufWriter`], which
//! writes the length prefixes of sub-messages and packed blocks from these
//! numbers before streaming their contents.
//!
//! [`ProtobufWriter`]: crate::ProtobufWriter

use crate::kind::{self, Kind, Packable};
use crate::message::Message;
use crate::primitives::varint_size;
use crate::unknown::UnknownField;
use crate::wire::WIRE_BITS;

/// Size of the tag of field `number`
#[inline]
pub const fn tag(number: u32) -> usize {
    varint_size((number as u64) << WIRE_BITS)
}

/// Size of a varint holding `length` plus `length` itself
#[inline]
pub const fn length_delimited(length: usize) -> usize {
    varint_size(length as u64) + length
}

/// Size of a singular field, `0` when `value` is the kind's default
#[inline]
pub fn of<K: Kind>(number: u32, value: &K::Value) -> usize {
    if K::is_default(value) {
        0
    } else {
        tag(number) + K::payload_size(value)
    }
}

/// Size of a repeated field written one tag per element
///
/// Elements are never omitted, even when they hold the default value.
pub fn unpacked<K: Kind>(number: u32, values: &[K::Value]) -> usize {
    values.len() * tag(number) + values.iter().map(K::payload_size).sum::<usize>()
}

/// Payload size of a packed block, without its tag and length prefix
pub fn packed_payload<K: Packable>(values: &[K::Value]) -> usize {
    values.iter().map(K::payload_size).sum()
}

/// Size of a repeated field written as one packed block, `0` when empty
pub fn packed<K: Packable>(number: u32, values: &[K::Value]) -> usize {
    if values.is_empty() {
        0
    } else {
        tag(number) + length_delimited(packed_payload::<K>(values))
    }
}

/// Size of a message field, `0` when absent
pub fn message<M: Message>(number: u32, value: Option<&M>) -> usize {
    value.map_or(0, |value| tag(number) + length_delimited(value.protobuf_size()))
}

/// Size of a repeated message field
pub fn messages<M: Message>(number: u32, values: &[M]) -> usize {
    values
        .iter()
        .map(|value| tag(number) + length_delimited(value.protobuf_size()))
        .sum()
}

/// Size of captured unknown fields, written verbatim
pub fn unknown_fields(fields: &[UnknownField]) -> usize {
    fields.iter().map(UnknownField::protobuf_size).sum()
}

macro_rules! named_sizes {
    ($($kind:ident => $single:ident, $unpacked:ident, $packed:ident;)*) => {
        $(
            #[doc = concat!("Size of a singular `", stringify!($kind), "` field")]
            #[inline]
            pub fn $single(number: u32, value: &<kind::$kind as Kind>::Value) -> usize {
                of::<kind::$kind>(number, value)
            }

            #[doc = concat!("Size of an unpacked repeated `", stringify!($kind), "` field")]
            #[inline]
            pub fn $unpacked(number: u32, values: &[<kind::$kind as Kind>::Value]) -> usize {
                unpacked::<kind::$kind>(number, values)
            }

            #[doc = concat!("Size of a packed repeated `", stringify!($kind), "` field")]
            #[inline]
            pub fn $packed(number: u32, values: &[<kind::$kind as Kind>::Value]) -> usize {
                packed::<kind::$kind>(number, values)
            }
        )*
    };
}

named_sizes! {
    Double => of_double, of_double_unpacked, of_double_packed;
    Float => of_float, of_float_unpacked, of_float_packed;
    Int32 => of_int32, of_int32_unpacked, of_int32_packed;
    Int64 => of_int64, of_int64_unpacked, of_int64_packed;
    Uint32 => of_uint32, of_uint32_unpacked, of_uint32_packed;
    Uint64 => of_uint64, of_uint64_unpacked, of_uint64_packed;
    Sint32 => of_sint32, of_sint32_unpacked, of_sint32_packed;
    Sint64 => of_sint64, of_sint64_unpacked, of_sint64_packed;
    Fixed32 => of_fixed32, of_fixed32_unpacked, of_fixed32_packed;
    Fixed64 => of_fixed64, of_fixed64_unpacked, of_fixed64_packed;
    Sfixed32 => of_sfixed32, of_sfixed32_unpacked, of_sfixed32_packed;
    Sfixed64 => of_sfixed64, of_sfixed64_unpacked, of_sfixed64_packed;
    Bool => of_bool, of_bool_unpacked, of_bool_packed;
    Enum => of_enum, of_enum_unpacked, of_enum_packed;
}

/// Size of a singular `string` field
#[inline]
pub fn of_string(number: u32, value: &str) -> usize {
    if value.is_empty() {
        0
    } else {
        tag(number) + length_delimited(value.len())
    }
}

/// Size of a repeated `string` field
pub fn of_string_unpacked(number: u32, values: &[String]) -> usize {
    unpacked::<kind::Str>(number, values)
}

/// Size of a singular `bytes` field
#[inline]
pub fn of_bytes(number: u32, value: &[u8]) -> usize {
    if value.is_empty() {
        0
    } else {
        tag(number) + length_delimited(value.len())
    }
}

/// Size of a repeated `bytes` field
pub fn of_bytes_unpacked(number: u32, values: &[Vec<u8>]) -> usize {
    unpacked::<kind::Bytes>(number, values)
}
