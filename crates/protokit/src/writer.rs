//! Field-level writer
//!
//! Every write applies the omission rule before touching the output: a
//! singular field holding its default value, an empty packed list, and an
//! absent message produce no bytes at all. Length prefixes come from the
//! [`size`](crate::size) calculator, so nothing is encoded twice.

use std::io::Write;

use crate::constants::DEFAULT_BUFFER_SIZE;
use crate::errors::Result;
use crate::kind::{self, Kind, Packable};
use crate::message::Message;
use crate::output::ProtoOutput;
use crate::size;
use crate::unknown::UnknownField;
use crate::wire::{Tag, WireType};

/// Encoder of tagged fields into a byte sink
///
/// Writes are buffered; [`ProtobufWriter::finish`] flushes and returns the
/// sink. Dropping a writer without finishing it discards the buffered tail.
#[derive(Debug)]
pub struct ProtobufWriter<W: Write> {
    output: ProtoOutput<W>,
}

impl<W: Write> ProtobufWriter<W> {
    /// Write into `output` with the default buffer size
    pub fn new(output: W) -> Self {
        Self::with_buffer_size(output, DEFAULT_BUFFER_SIZE)
    }

    /// Write into `output`, staging up to `size` bytes between writes
    pub fn with_buffer_size(output: W, size: usize) -> Self {
        Self {
            output: ProtoOutput::new(output, size),
        }
    }

    /// Write a singular value of kind `K`, omitted when default
    pub fn write<K: Kind>(&mut self, number: u32, value: &K::Value) -> Result<&mut Self> {
        if !K::is_default(value) {
            self.tag(number, K::KIND.wire_type())?;
            K::write(&mut self.output, value)?;
        }
        Ok(self)
    }

    /// Write every element with its own tag, defaults included
    pub fn write_unpacked<K: Kind>(&mut self, number: u32, values: &[K::Value]) -> Result<&mut Self> {
        for value in values {
            self.tag(number, K::KIND.wire_type())?;
            K::write(&mut self.output, value)?;
        }
        Ok(self)
    }

    /// Write all elements in one `LEN` block, omitted when empty
    pub fn write_packed<K: Packable>(&mut self, number: u32, values: &[K::Value]) -> Result<&mut Self> {
        if values.is_empty() {
            return Ok(self);
        }

        self.tag(number, WireType::Len)?;
        self.output
            .write_varint64(size::packed_payload::<K>(values) as u64)?;
        for value in values {
            K::write(&mut self.output, value)?;
        }
        Ok(self)
    }

    /// Write a nested message, omitted when absent
    pub fn write_message<M: Message>(&mut self, number: u32, value: Option<&M>) -> Result<&mut Self> {
        if let Some(value) = value {
            self.nested(number, value)?;
        }
        Ok(self)
    }

    /// Write every message with its own tag
    pub fn write_messages<M: Message>(&mut self, number: u32, values: &[M]) -> Result<&mut Self> {
        for value in values {
            self.nested(number, value)?;
        }
        Ok(self)
    }

    /// Write captured unknown fields as they were read
    pub fn write_unknown_fields(&mut self, fields: &[UnknownField]) -> Result<&mut Self> {
        for field in fields {
            field.write_to(&mut self.output)?;
        }
        Ok(self)
    }

    /// Total number of bytes written so far
    pub fn written(&self) -> u64 {
        self.output.written()
    }

    /// Flush buffered bytes to the sink
    pub fn flush(&mut self) -> Result<()> {
        self.output.flush()
    }

    /// Flush and give back the sink
    pub fn finish(self) -> Result<W> {
        self.output.into_inner()
    }

    fn tag(&mut self, number: u32, wire_type: WireType) -> Result<()> {
        self.output
            .write_varint64(Tag::new(number, wire_type).value() as u64)
    }

    fn nested<M: Message>(&mut self, number: u32, value: &M) -> Result<()> {
        self.tag(number, WireType::Len)?;
        self.output.write_varint64(value.protobuf_size() as u64)?;
        value.write_to(self)
    }
}

macro_rules! named_writes {
    ($($kind:ident => $single:ident, $unpacked:ident, $packed:ident;)*) => {
        impl<W: Write> ProtobufWriter<W> {
            $(
                #[doc = concat!("Write a `", stringify!($kind), "` field, omitted when default")]
                #[inline]
                pub fn $single(&mut self, number: u32, value: <kind::$kind as Kind>::Value) -> Result<&mut Self> {
                    self.write::<kind::$kind>(number, &value)
                }

                #[doc = concat!("Write a repeated `", stringify!($kind), "` field, one tag per element")]
                #[inline]
                pub fn $unpacked(&mut self, number: u32, values: &[<kind::$kind as Kind>::Value]) -> Result<&mut Self> {
                    self.write_unpacked::<kind::$kind>(number, values)
                }

                #[doc = concat!("Write a repeated `", stringify!($kind), "` field as a packed block")]
                #[inline]
                pub fn $packed(&mut self, number: u32, values: &[<kind::$kind as Kind>::Value]) -> Result<&mut Self> {
                    self.write_packed::<kind::$kind>(number, values)
                }
            )*
        }
    };
}

named_writes! {
    Double => write_double, write_double_unpacked, write_double_packed;
    Float => write_float, write_float_unpacked, write_float_packed;
    Int32 => write_int32, write_int32_unpacked, write_int32_packed;
    Int64 => write_int64, write_int64_unpacked, write_int64_packed;
    Uint32 => write_uint32, write_uint32_unpacked, write_uint32_packed;
    Uint64 => write_uint64, write_uint64_unpacked, write_uint64_packed;
    Sint32 => write_sint32, write_sint32_unpacked, write_sint32_packed;
    Sint64 => write_sint64, write_sint64_unpacked, write_sint64_packed;
    Fixed32 => write_fixed32, write_fixed32_unpacked, write_fixed32_packed;
    Fixed64 => write_fixed64, write_fixed64_unpacked, write_fixed64_packed;
    Sfixed32 => write_sfixed32, write_sfixed32_unpacked, write_sfixed32_packed;
    Sfixed64 => write_sfixed64, write_sfixed64_unpacked, write_sfixed64_packed;
    Bool => write_bool, write_bool_unpacked, write_bool_packed;
    Enum => write_enum, write_enum_unpacked, write_enum_packed;
}

impl<W: Write> ProtobufWriter<W> {
    /// Write a `string` field, omitted when empty
    pub fn write_string(&mut self, number: u32, value: &str) -> Result<&mut Self> {
        if !value.is_empty() {
            self.tag(number, WireType::Len)?;
            self.output.write_string(value)?;
        }
        Ok(self)
    }

    /// Write a repeated `string` field
    pub fn write_string_unpacked(&mut self, number: u32, values: &[String]) -> Result<&mut Self> {
        self.write_unpacked::<kind::Str>(number, values)
    }

    /// Write a `bytes` field, omitted when empty
    pub fn write_bytes(&mut self, number: u32, value: &[u8]) -> Result<&mut Self> {
        if !value.is_empty() {
            self.tag(number, WireType::Len)?;
            self.output.write_bytes(value)?;
        }
        Ok(self)
    }

    /// Write a repeated `bytes` field
    pub fn write_bytes_unpacked(&mut self, number: u32, values: &[Vec<u8>]) -> Result<&mut Self> {
        self.write_unpacked::<kind::Bytes>(number, values)
    }
}
