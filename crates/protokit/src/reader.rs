//! Field-level reader
//!
//! Generated `read_from` implementations drive a [`ProtobufReader`] in a loop:
//! fetch the next tag, look it up in the message's field table with
//! [`ProtobufReader::field`], and call the typed read for that field. Anything
//! not declared goes to [`ProtobufReader::unknown`] or [`ProtobufReader::skip`].
//!
//! ```rust
//! use protokit::{kind, ProtobufReader, Result};
//!
//! # fn main() -> Result<()> {
//! let mut reader = ProtobufReader::from_slice(&[0b0000_1000, 150, 1]);
//! let mut amount = 0;
//! while let Some(tag) = reader.tag()? {
//!     match tag.number() {
//!         1 => amount = reader.read::<kind::Int32>(tag, "amount")?,
//!         _ => reader.skip(tag)?,
//!     }
//! }
//! assert_eq!(amount, 150);
//! # Ok(())
//! # }
//! ```

use std::io::Read;

use tracing::trace;

use crate::constants::{DEFAULT_BUFFER_SIZE, MAX_NESTING_DEPTH};
use crate::errors::{Error, Result};
use crate::input::ProtoInput;
use crate::kind::{self, FieldDescriptor, Kind};
use crate::message::Message;
use crate::unknown::UnknownField;
use crate::wire::{Tag, WireType};

/// Decoder of tagged fields over a byte source
#[derive(Debug)]
pub struct ProtobufReader<R> {
    input: ProtoInput<R>,
    depth: usize,
}

impl<'a> ProtobufReader<&'a [u8]> {
    /// Read from an in-memory payload
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self::with_buffer_size(bytes, bytes.len().min(DEFAULT_BUFFER_SIZE))
    }
}

impl<R: Read> ProtobufReader<R> {
    /// Read from `input` with the default buffer size
    pub fn new(input: R) -> Self {
        Self::with_buffer_size(input, DEFAULT_BUFFER_SIZE)
    }

    /// Read from `input` through a window of `size` bytes
    pub fn with_buffer_size(input: R, size: usize) -> Self {
        Self {
            input: ProtoInput::new(input, size),
            depth: 0,
        }
    }

    /// Next tag, or `None` when the current message is finished
    ///
    /// The top-level message ends with the input. A nested message ends
    /// exactly at its declared length; running out of input before that
    /// fails with [`Error::InputEnded`].
    pub fn tag(&mut self) -> Result<Option<Tag>> {
        if !self.input.has_remaining()? {
            if self.depth > 0 && self.input.limit() > 0 {
                return Err(Error::InputEnded);
            }
            return Ok(None);
        }

        let value = self.input.read_varint64()?;
        let value = u32::try_from(value).map_err(|_| Error::MalformedVarint)?;
        Ok(Some(Tag::from_value(value)))
    }

    /// Declared field of `M` that `tag` belongs to
    ///
    /// Returns `None` for numbers `M` does not declare. A declared field
    /// arriving with a framing it cannot be decoded from fails with
    /// [`Error::WireTypeMismatch`].
    pub fn field<M: Message>(&self, tag: Tag) -> Result<Option<&'static FieldDescriptor>> {
        let Some(field) = M::field(tag.number()) else {
            return Ok(None);
        };
        if !field.accepts(tag) {
            return Err(Error::WireTypeMismatch {
                field: field.name.to_owned(),
                number: tag.number(),
                expected: field.kind.wire_type(),
                actual: tag.wire_type_id(),
            });
        }
        Ok(Some(field))
    }

    /// Read a singular value of kind `K`
    pub fn read<K: Kind>(&mut self, tag: Tag, field: &str) -> Result<K::Value> {
        check(tag, field, K::KIND.wire_type())?;
        K::read(&mut self.input)
    }

    /// Read one occurrence of a repeated field into `values`
    ///
    /// For packable kinds a `LEN` tag carries a packed block and every
    /// element in it is appended; otherwise a single element is appended.
    /// Both framings are accepted regardless of how the field is declared.
    pub fn read_repeated<K: Kind>(
        &mut self,
        tag: Tag,
        field: &str,
        values: &mut Vec<K::Value>,
    ) -> Result<()> {
        if K::KIND.is_packable() && tag.is(WireType::Len) {
            return self.read_packed::<K>(values);
        }

        values.push(self.read::<K>(tag, field)?);
        Ok(())
    }

    /// Read a nested message
    ///
    /// The message is parsed in place, bounded by its length prefix, on the
    /// same buffer as the enclosing one.
    pub fn message<M: Message>(&mut self, tag: Tag, field: &str) -> Result<M> {
        check(tag, field, WireType::Len)?;
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::NestingTooDeep(MAX_NESTING_DEPTH));
        }

        let length = self.input.read_length()?;
        let outer = self.input.set_limit(length);
        trace!(field, number = tag.number(), length, depth = self.depth + 1, "entering message");

        self.depth += 1;
        let message = M::read_from(self);
        self.depth -= 1;

        let message = message?;
        self.input.set_limit(outer - length);
        Ok(message)
    }

    /// Capture a field no declaration matched
    pub fn unknown(&mut self, tag: Tag) -> Result<UnknownField> {
        trace!(number = tag.number(), wire_type = tag.wire_type_id(), "capturing unknown field");
        UnknownField::read(tag, &mut self.input)
    }

    /// Discard a field no declaration matched
    pub fn skip(&mut self, tag: Tag) -> Result<()> {
        trace!(number = tag.number(), wire_type = tag.wire_type_id(), "skipping unknown field");
        match tag.wire_type()? {
            WireType::Varint => self.input.read_varint64().map(drop),
            WireType::I64 => self.input.skip(8),
            WireType::Len => {
                let length = self.input.read_length()?;
                self.input.skip(length)
            }
            WireType::I32 => self.input.skip(4),
            group @ (WireType::StartGroup | WireType::EndGroup) => {
                Err(Error::UnsupportedWireType(group))
            }
        }
    }

    /// Number of enclosing messages of the field being read
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Give back the underlying source
    pub fn into_inner(self) -> R {
        self.input.into_inner()
    }

    fn read_packed<K: Kind>(&mut self, values: &mut Vec<K::Value>) -> Result<()> {
        let length = self.input.read_length()?;
        let outer = self.input.set_limit(length);

        while self.input.limit() > 0 {
            values.push(K::read(&mut self.input)?);
        }

        self.input.set_limit(outer - length);
        Ok(())
    }
}

fn check(tag: Tag, field: &str, expected: WireType) -> Result<()> {
    if !tag.is(expected) {
        return Err(Error::WireTypeMismatch {
            field: field.to_owned(),
            number: tag.number(),
            expected,
            actual: tag.wire_type_id(),
        });
    }
    Ok(())
}

macro_rules! named_reads {
    ($($kind:ident => $single:ident, $repeated:ident;)*) => {
        impl<R: Read> ProtobufReader<R> {
            $(
                #[doc = concat!("Read a `", stringify!($kind), "` field")]
                #[inline]
                pub fn $single(&mut self, tag: Tag, field: &str) -> Result<<kind::$kind as Kind>::Value> {
                    self.read::<kind::$kind>(tag, field)
                }

                #[doc = concat!("Read one occurrence of a repeated `", stringify!($kind), "` field")]
                #[inline]
                pub fn $repeated(
                    &mut self,
                    tag: Tag,
                    field: &str,
                    values: &mut Vec<<kind::$kind as Kind>::Value>,
                ) -> Result<()> {
                    self.read_repeated::<kind::$kind>(tag, field, values)
                }
            )*
        }
    };
}

named_reads! {
    Double => double, double_repeated;
    Float => float, float_repeated;
    Int32 => int32, int32_repeated;
    Int64 => int64, int64_repeated;
    Uint32 => uint32, uint32_repeated;
    Uint64 => uint64, uint64_repeated;
    Sint32 => sint32, sint32_repeated;
    Sint64 => sint64, sint64_repeated;
    Fixed32 => fixed32, fixed32_repeated;
    Fixed64 => fixed64, fixed64_repeated;
    Sfixed32 => sfixed32, sfixed32_repeated;
    Sfixed64 => sfixed64, sfixed64_repeated;
    Bool => bool, bool_repeated;
    Enum => enumeration, enumeration_repeated;
    Str => string, string_repeated;
    Bytes => bytes, bytes_repeated;
}
