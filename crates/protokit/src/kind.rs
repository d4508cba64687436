//! Field kinds
//!
//! [`FieldKind`] is the closed set of protobuf field types, and
//! [`FieldDescriptor`] is what a generated message declares per field. The
//! zero-sized markers implementing [`Kind`] carry the per-kind encode, decode
//! and size rules, so the reader, writer and size calculator are written once
//! and instantiated per kind.

use core::fmt;
use std::io::{Read, Write};

use crate::errors::Result;
use crate::input::ProtoInput;
use crate::output::ProtoOutput;
use crate::primitives::{varint32_size, varint_size, zigzag_encode32, zigzag_encode64};
use crate::wire::{Tag, WireType};

/// Protobuf field type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `double`
    Double,
    /// `float`
    Float,
    /// `int32`
    Int32,
    /// `int64`
    Int64,
    /// `uint32`
    Uint32,
    /// `uint64`
    Uint64,
    /// `sint32`
    Sint32,
    /// `sint64`
    Sint64,
    /// `fixed32`
    Fixed32,
    /// `fixed64`
    Fixed64,
    /// `sfixed32`
    Sfixed32,
    /// `sfixed64`
    Sfixed64,
    /// `bool`
    Bool,
    /// `string`
    String,
    /// `bytes`
    Bytes,
    /// Enumeration, stored as its `int32` number
    Enum,
    /// Nested message
    Message,
}

impl FieldKind {
    /// Wire type a single value of this kind is framed with
    pub const fn wire_type(self) -> WireType {
        match self {
            FieldKind::Double | FieldKind::Fixed64 | FieldKind::Sfixed64 => WireType::I64,
            FieldKind::Float | FieldKind::Fixed32 | FieldKind::Sfixed32 => WireType::I32,
            FieldKind::String | FieldKind::Bytes | FieldKind::Message => WireType::Len,
            FieldKind::Int32
            | FieldKind::Int64
            | FieldKind::Uint32
            | FieldKind::Uint64
            | FieldKind::Sint32
            | FieldKind::Sint64
            | FieldKind::Bool
            | FieldKind::Enum => WireType::Varint,
        }
    }

    /// Whether repeated values of this kind may use the packed encoding
    pub const fn is_packable(self) -> bool {
        !matches!(self.wire_type(), WireType::Len)
    }

    /// Name of the kind in `.proto` syntax
    pub const fn name(self) -> &'static str {
        match self {
            FieldKind::Double => "double",
            FieldKind::Float => "float",
            FieldKind::Int32 => "int32",
            FieldKind::Int64 => "int64",
            FieldKind::Uint32 => "uint32",
            FieldKind::Uint64 => "uint64",
            FieldKind::Sint32 => "sint32",
            FieldKind::Sint64 => "sint64",
            FieldKind::Fixed32 => "fixed32",
            FieldKind::Fixed64 => "fixed64",
            FieldKind::Sfixed32 => "sfixed32",
            FieldKind::Sfixed64 => "sfixed64",
            FieldKind::Bool => "bool",
            FieldKind::String => "string",
            FieldKind::Bytes => "bytes",
            FieldKind::Enum => "enum",
            FieldKind::Message => "message",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a field repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repetition {
    /// At most one value
    Single,
    /// One tag per element
    Unpacked,
    /// All elements in one `LEN` block
    Packed,
}

/// Static description of one message field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Field number
    pub number: u32,
    /// Field name, used in diagnostics
    pub name: &'static str,
    /// Field type
    pub kind: FieldKind,
    /// Repetition and packing
    pub repetition: Repetition,
}

impl FieldDescriptor {
    /// Describe a singular field
    pub const fn single(number: u32, name: &'static str, kind: FieldKind) -> Self {
        Self {
            number,
            name,
            kind,
            repetition: Repetition::Single,
        }
    }

    /// Describe a repeated field written one tag per element
    pub const fn unpacked(number: u32, name: &'static str, kind: FieldKind) -> Self {
        Self {
            number,
            name,
            kind,
            repetition: Repetition::Unpacked,
        }
    }

    /// Describe a repeated field written as one packed block
    pub const fn packed(number: u32, name: &'static str, kind: FieldKind) -> Self {
        Self {
            number,
            name,
            kind,
            repetition: Repetition::Packed,
        }
    }

    /// Whether the field holds a sequence of values
    pub const fn is_repeated(&self) -> bool {
        !matches!(self.repetition, Repetition::Single)
    }

    /// Whether `tag` can be decoded into this field
    ///
    /// Repeated packable fields accept both the packed and unpacked framing,
    /// whichever way they are declared.
    pub fn accepts(&self, tag: Tag) -> bool {
        if tag.number() != self.number {
            return false;
        }
        tag.is(self.kind.wire_type())
            || (self.is_repeated() && self.kind.is_packable() && tag.is(WireType::Len))
    }
}

/// Encoding rules of one scalar field kind
///
/// Implemented by zero-sized markers such as [`Int32`] or [`Str`]; the
/// reader, writer and size calculator are generic over it.
pub trait Kind {
    /// Rust type holding a value of this kind
    type Value: Clone + PartialEq + Default + fmt::Debug;

    /// Kind this marker stands for
    const KIND: FieldKind;

    /// Whether `value` is the zero value that is omitted from the wire
    #[inline]
    fn is_default(value: &Self::Value) -> bool {
        *value == Self::Value::default()
    }

    /// Encoded size of `value` without its tag
    fn payload_size(value: &Self::Value) -> usize;

    /// Encode `value` without its tag
    fn write<W: Write>(output: &mut ProtoOutput<W>, value: &Self::Value) -> Result<()>;

    /// Decode one value whose tag has already been consumed
    fn read<R: Read>(input: &mut ProtoInput<R>) -> Result<Self::Value>;
}

/// Kinds whose repeated values may be packed into a single `LEN` block
pub trait Packable: Kind {}

macro_rules! kind {
    (
        $(#[$doc:meta])*
        packable $name:ident: $ty:ty => $kind:ident,
        size: |$sv:ident| $size:expr,
        write: |$out:ident, $wv:ident| $write:expr,
        read: |$input:ident| $read:expr
    ) => {
        kind! {
            $(#[$doc])*
            $name: $ty => $kind,
            size: |$sv| $size,
            write: |$out, $wv| $write,
            read: |$input| $read
        }

        impl Packable for $name {}
    };
    (
        $(#[$doc:meta])*
        $name:ident: $ty:ty => $kind:ident,
        size: |$sv:ident| $size:expr,
        write: |$out:ident, $wv:ident| $write:expr,
        read: |$input:ident| $read:expr
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Kind for $name {
            type Value = $ty;

            const KIND: FieldKind = FieldKind::$kind;

            #[inline]
            fn payload_size($sv: &$ty) -> usize {
                $size
            }

            #[inline]
            fn write<W: Write>($out: &mut ProtoOutput<W>, $wv: &$ty) -> Result<()> {
                $write
            }

            #[inline]
            fn read<R: Read>($input: &mut ProtoInput<R>) -> Result<$ty> {
                $read
            }
        }
    };
}

kind! {
    /// `double` as [`f64`]
    packable Double: f64 => Double,
    size: |_v| 8,
    write: |out, v| out.write_double(*v),
    read: |input| input.read_double()
}

kind! {
    /// `float` as [`f32`]
    packable Float: f32 => Float,
    size: |_v| 4,
    write: |out, v| out.write_float(*v),
    read: |input| input.read_float()
}

kind! {
    /// `int32` as [`i32`], negatives take 10 bytes
    packable Int32: i32 => Int32,
    size: |v| varint32_size(*v),
    write: |out, v| out.write_varint32(*v),
    read: |input| input.read_varint32()
}

kind! {
    /// `int64` as [`i64`]
    packable Int64: i64 => Int64,
    size: |v| varint_size(*v as u64),
    write: |out, v| out.write_varint64(*v as u64),
    read: |input| Ok(input.read_varint64()? as i64)
}

kind! {
    /// `uint32` as [`u32`]
    packable Uint32: u32 => Uint32,
    size: |v| varint_size(*v as u64),
    write: |out, v| out.write_varint64(*v as u64),
    read: |input| Ok(input.read_varint64()? as u32)
}

kind! {
    /// `uint64` as [`u64`]
    packable Uint64: u64 => Uint64,
    size: |v| varint_size(*v),
    write: |out, v| out.write_varint64(*v),
    read: |input| input.read_varint64()
}

kind! {
    /// `sint32` as [`i32`], zigzag encoded
    packable Sint32: i32 => Sint32,
    size: |v| varint_size(zigzag_encode32(*v) as u64),
    write: |out, v| out.write_zigzag32(*v),
    read: |input| input.read_zigzag32()
}

kind! {
    /// `sint64` as [`i64`], zigzag encoded
    packable Sint64: i64 => Sint64,
    size: |v| varint_size(zigzag_encode64(*v)),
    write: |out, v| out.write_zigzag64(*v),
    read: |input| input.read_zigzag64()
}

kind! {
    /// `fixed32` as [`u32`]
    packable Fixed32: u32 => Fixed32,
    size: |_v| 4,
    write: |out, v| out.write_fixed32(*v),
    read: |input| input.read_fixed32()
}

kind! {
    /// `fixed64` as [`u64`]
    packable Fixed64: u64 => Fixed64,
    size: |_v| 8,
    write: |out, v| out.write_fixed64(*v),
    read: |input| input.read_fixed64()
}

kind! {
    /// `sfixed32` as [`i32`]
    packable Sfixed32: i32 => Sfixed32,
    size: |_v| 4,
    write: |out, v| out.write_fixed32(*v as u32),
    read: |input| Ok(input.read_fixed32()? as i32)
}

kind! {
    /// `sfixed64` as [`i64`]
    packable Sfixed64: i64 => Sfixed64,
    size: |_v| 8,
    write: |out, v| out.write_fixed64(*v as u64),
    read: |input| Ok(input.read_fixed64()? as i64)
}

kind! {
    /// `bool`
    packable Bool: bool => Bool,
    size: |_v| 1,
    write: |out, v| out.write_bool(*v),
    read: |input| input.read_bool()
}

kind! {
    /// Enumeration number as [`i32`], encoded like `int32`
    packable Enum: i32 => Enum,
    size: |v| varint32_size(*v),
    write: |out, v| out.write_varint32(*v),
    read: |input| input.read_varint32()
}

kind! {
    /// `string` as [`String`]
    Str: String => String,
    size: |v| varint_size(v.len() as u64) + v.len(),
    write: |out, v| out.write_string(v),
    read: |input| input.read_string()
}

kind! {
    /// `bytes` as [`Vec<u8>`]
    Bytes: Vec<u8> => Bytes,
    size: |v| varint_size(v.len() as u64) + v.len(),
    write: |out, v| out.write_bytes(v),
    read: |input| input.read_bytes()
}
