//! Unknown field store
//!
//! Fields whose number a message does not declare are captured as
//! [`UnknownField`]s and written back verbatim, so a message passing through
//! an older schema loses nothing. [`RawMessage`] captures every field this
//! way and can decode any payload without a schema.

use std::io::{Read, Write};

use crate::errors::{Error, Result};
use crate::input::ProtoInput;
use crate::kind::FieldDescriptor;
use crate::merge;
use crate::message::{Message, MessageBuilder};
use crate::output::ProtoOutput;
use crate::primitives::varint_size;
use crate::reader::ProtobufReader;
use crate::size;
use crate::writer::ProtobufWriter;
use crate::wire::{Tag, WireType};

/// A field read without a matching declaration
///
/// Each variant holds the field number and the payload as it was framed on
/// the wire. A packed block is indistinguishable from bytes and is kept as
/// [`UnknownField::Bytes`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnknownField {
    /// `I32` payload
    I32(u32, i32),
    /// `I64` payload
    I64(u32, i64),
    /// `VARINT` payload
    Varint(u32, i64),
    /// `LEN` payload
    Bytes(u32, Vec<u8>),
}

impl UnknownField {
    /// Field number
    pub fn number(&self) -> u32 {
        match self {
            UnknownField::I32(number, _)
            | UnknownField::I64(number, _)
            | UnknownField::Varint(number, _)
            | UnknownField::Bytes(number, _) => *number,
        }
    }

    /// Wire type the payload is framed with
    pub fn wire_type(&self) -> WireType {
        match self {
            UnknownField::I32(..) => WireType::I32,
            UnknownField::I64(..) => WireType::I64,
            UnknownField::Varint(..) => WireType::Varint,
            UnknownField::Bytes(..) => WireType::Len,
        }
    }

    /// Tag this field is written with
    pub fn tag(&self) -> Tag {
        Tag::new(self.number(), self.wire_type())
    }

    /// Encoded size including the tag
    pub fn protobuf_size(&self) -> usize {
        let payload = match self {
            UnknownField::I32(..) => 4,
            UnknownField::I64(..) => 8,
            UnknownField::Varint(_, value) => varint_size(*value as u64),
            UnknownField::Bytes(_, value) => size::length_delimited(value.len()),
        };
        size::tag(self.number()) + payload
    }

    /// Write tag and payload; default payloads are written too
    pub(crate) fn write_to<W: Write>(&self, output: &mut ProtoOutput<W>) -> Result<()> {
        output.write_varint64(self.tag().value() as u64)?;
        match self {
            UnknownField::I32(_, value) => output.write_fixed32(*value as u32),
            UnknownField::I64(_, value) => output.write_fixed64(*value as u64),
            UnknownField::Varint(_, value) => output.write_varint64(*value as u64),
            UnknownField::Bytes(_, value) => output.write_bytes(value),
        }
    }

    /// Read the payload of an already consumed `tag`
    pub(crate) fn read<R: Read>(tag: Tag, input: &mut ProtoInput<R>) -> Result<Self> {
        let number = tag.number();
        match tag.wire_type()? {
            WireType::Varint => Ok(UnknownField::Varint(number, input.read_varint64()? as i64)),
            WireType::I64 => Ok(UnknownField::I64(number, input.read_fixed64()? as i64)),
            WireType::Len => Ok(UnknownField::Bytes(number, input.read_bytes()?)),
            WireType::I32 => Ok(UnknownField::I32(number, input.read_fixed32()? as i32)),
            group @ (WireType::StartGroup | WireType::EndGroup) => {
                Err(Error::UnsupportedWireType(group))
            }
        }
    }
}

/// A message that declares no fields and keeps everything it reads
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RawMessage {
    fields: Vec<UnknownField>,
}

static EMPTY_RAW_MESSAGE: RawMessage = RawMessage { fields: Vec::new() };

impl RawMessage {
    /// Wrap already captured fields
    pub fn new(fields: Vec<UnknownField>) -> Self {
        Self { fields }
    }

    /// Captured fields in wire order
    pub fn fields(&self) -> &[UnknownField] {
        &self.fields
    }

    /// Take the captured fields
    pub fn into_fields(self) -> Vec<UnknownField> {
        self.fields
    }
}

impl Message for RawMessage {
    type Builder = RawMessageBuilder;

    const FIELDS: &'static [FieldDescriptor] = &[];

    fn empty() -> &'static Self {
        &EMPTY_RAW_MESSAGE
    }

    fn read_from<R: Read>(reader: &mut ProtobufReader<R>) -> Result<Self> {
        let mut builder = RawMessageBuilder::default();
        while let Some(tag) = reader.tag()? {
            builder.add_field(reader.unknown(tag)?);
        }
        Ok(builder.build())
    }

    fn write_to<W: Write>(&self, writer: &mut ProtobufWriter<W>) -> Result<()> {
        writer.write_unknown_fields(&self.fields)?;
        Ok(())
    }

    fn protobuf_size(&self) -> usize {
        size::unknown_fields(&self.fields)
    }
}

/// Builder of [`RawMessage`]
#[derive(Debug, Clone, Default)]
pub struct RawMessageBuilder {
    fields: Vec<UnknownField>,
}

impl RawMessageBuilder {
    /// Append one field
    pub fn add_field(&mut self, field: UnknownField) -> &mut Self {
        self.fields.push(field);
        self
    }

    /// Append many fields
    pub fn add_fields(&mut self, fields: impl IntoIterator<Item = UnknownField>) -> &mut Self {
        self.fields.extend(fields);
        self
    }

    /// Replace all fields
    pub fn set_fields(&mut self, fields: Vec<UnknownField>) -> &mut Self {
        self.fields = fields;
        self
    }
}

impl MessageBuilder for RawMessageBuilder {
    type Message = RawMessage;

    fn merge(&mut self, message: &RawMessage) -> &mut Self {
        merge::repeated(&mut self.fields, &message.fields);
        self
    }

    fn build(&self) -> RawMessage {
        RawMessage {
            fields: self.fields.clone(),
        }
    }
}
