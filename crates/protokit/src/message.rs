//! Message and builder value model
//!
//! A message is an immutable value type with structural equality, paired
//! with a mutable builder that accumulates fields and snapshots them with
//! [`MessageBuilder::build`]. Generated code implements [`Message`] with
//! `read_from`, `write_to` and `protobuf_size` driven by the field-level
//! [`ProtobufReader`] and [`ProtobufWriter`]; everything else is provided.

use core::fmt;
use std::io::{Read, Write};

use tracing::debug;

use crate::errors::{Error, Result};
use crate::kind::FieldDescriptor;
use crate::reader::ProtobufReader;
use crate::writer::ProtobufWriter;

/// A protobuf message type
pub trait Message: Sized + Clone + PartialEq + Default + fmt::Debug + 'static {
    /// Builder accumulating fields of this message
    type Builder: MessageBuilder<Message = Self>;

    /// Declared fields, in declaration order
    const FIELDS: &'static [FieldDescriptor];

    /// The canonical empty instance
    fn empty() -> &'static Self;

    /// Read fields until the reader reports the end of this message
    fn read_from<R: Read>(reader: &mut ProtobufReader<R>) -> Result<Self>;

    /// Write all non-default fields
    fn write_to<W: Write>(&self, writer: &mut ProtobufWriter<W>) -> Result<()>;

    /// Exact number of bytes [`Message::write_to`] produces
    fn protobuf_size(&self) -> usize;

    /// Combine with `other`, field by field
    ///
    /// Non-default scalars of `other` win, nested messages are merged
    /// recursively, and non-empty repeated fields of `other` replace the
    /// ones in `self`.
    fn merge(&self, other: &Self) -> Self {
        let mut builder = self.to_builder();
        builder.merge(other);
        builder.build()
    }

    /// Whether every field holds its default value
    fn is_empty(&self) -> bool {
        self == Self::empty()
    }

    /// Look up a declared field by number
    fn field(number: u32) -> Option<&'static FieldDescriptor> {
        Self::FIELDS.iter().find(|field| field.number == number)
    }

    /// Decode a message from a complete payload
    fn parse(bytes: &[u8]) -> Result<Self> {
        let mut reader = ProtobufReader::from_slice(bytes);
        Self::read_from(&mut reader)
    }

    /// Decode a message from a stream, reading it to the end
    fn parse_from<R: Read>(input: R) -> Result<Self> {
        let mut reader = ProtobufReader::new(input);
        let message = Self::read_from(&mut reader)?;
        debug!(message = core::any::type_name::<Self>(), "parsed message from stream");
        Ok(message)
    }

    /// Encode into `output` and return it once flushed
    fn write_to_stream<W: Write>(&self, output: W) -> Result<W> {
        let mut writer = ProtobufWriter::new(output);
        self.write_to(&mut writer)?;
        debug!(
            message = core::any::type_name::<Self>(),
            bytes = writer.written(),
            "wrote message to stream"
        );
        writer.finish()
    }

    /// Encode into a new byte vector
    fn to_bytes(&self) -> Result<Vec<u8>> {
        let size = self.protobuf_size();
        let mut writer = ProtobufWriter::with_buffer_size(Vec::with_capacity(size), size);
        self.write_to(&mut writer)?;
        writer.finish()
    }

    /// A fresh builder holding default values
    fn builder() -> Self::Builder {
        Self::Builder::default()
    }

    /// A builder initialized with this message's fields
    fn to_builder(&self) -> Self::Builder {
        let mut builder = Self::builder();
        builder.merge(self);
        builder
    }
}

/// Mutable twin of a [`Message`]
pub trait MessageBuilder: Default {
    /// Message type this builder produces
    type Message: Message<Builder = Self>;

    /// Merge `message` into the fields collected so far
    fn merge(&mut self, message: &Self::Message) -> &mut Self;

    /// Snapshot the collected fields; the builder stays usable
    fn build(&self) -> Self::Message;
}

/// A protobuf enumeration with a sentinel for undeclared numbers
///
/// Messages store enum fields as their raw `i32` number so that values
/// unknown to this schema survive a round trip. The typed view maps every
/// undeclared number to the sentinel, which has no number of its own.
///
/// With the `derive` feature enabled this can be derived:
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, protokit::ProtobufEnumeration)]
/// enum Color {
///     #[proto(number = 0)]
///     Red,
///     #[proto(number = 1)]
///     Green,
///     #[proto(unrecognized)]
///     Unrecognized,
/// }
/// ```
pub trait ProtobufEnumeration: Copy + Sized {
    /// Declared element with `number`, or the sentinel
    fn for_number(number: i32) -> Self;

    /// Number of a declared element, `None` for the sentinel
    fn try_number(self) -> Option<i32>;

    /// Number of a declared element
    ///
    /// Fails with [`Error::IllegalArgument`] for the sentinel.
    fn number(self) -> Result<i32> {
        self.try_number()
            .ok_or(Error::IllegalArgument("unrecognized enum has no number"))
    }

    /// Whether this is the sentinel for undeclared numbers
    fn is_unrecognized(self) -> bool {
        self.try_number().is_none()
    }
}
