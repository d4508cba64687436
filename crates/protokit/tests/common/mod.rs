//! Message types written the way generated code looks
#![allow(dead_code)]

use std::io::{Read, Write};

use protokit::{
    merge, size, Error, FieldDescriptor, FieldKind, Message, MessageBuilder, ProtobufEnumeration,
    ProtobufReader, ProtobufWriter, Result, UnknownField,
};

/// Encode with a callback on a raw writer
pub fn encode(
    write: impl FnOnce(&mut ProtobufWriter<Vec<u8>>) -> Result<&mut ProtobufWriter<Vec<u8>>>,
) -> Vec<u8> {
    let mut writer = ProtobufWriter::new(Vec::new());
    write(&mut writer).unwrap();
    writer.finish().unwrap()
}

// ---------------------------------------------------------------------------
// FullRecord: one field of every scalar kind

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FullRecord {
    pub double: f64,
    pub float: f32,
    pub int32: i32,
    pub int64: i64,
    pub uint32: u32,
    pub uint64: u64,
    pub sint32: i32,
    pub sint64: i64,
    pub fixed32: u32,
    pub fixed64: u64,
    pub sfixed32: i32,
    pub sfixed64: i64,
    pub bool: bool,
    pub string: String,
    pub bytes: Vec<u8>,
}

static EMPTY_FULL_RECORD: FullRecord = FullRecord {
    double: 0.0,
    float: 0.0,
    int32: 0,
    int64: 0,
    uint32: 0,
    uint64: 0,
    sint32: 0,
    sint64: 0,
    fixed32: 0,
    fixed64: 0,
    sfixed32: 0,
    sfixed64: 0,
    bool: false,
    string: String::new(),
    bytes: Vec::new(),
};

impl Message for FullRecord {
    type Builder = FullRecordBuilder;

    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::single(1, "double", FieldKind::Double),
        FieldDescriptor::single(2, "float", FieldKind::Float),
        FieldDescriptor::single(3, "int32", FieldKind::Int32),
        FieldDescriptor::single(4, "int64", FieldKind::Int64),
        FieldDescriptor::single(5, "uint32", FieldKind::Uint32),
        FieldDescriptor::single(6, "uint64", FieldKind::Uint64),
        FieldDescriptor::single(7, "sint32", FieldKind::Sint32),
        FieldDescriptor::single(8, "sint64", FieldKind::Sint64),
        FieldDescriptor::single(9, "fixed32", FieldKind::Fixed32),
        FieldDescriptor::single(10, "fixed64", FieldKind::Fixed64),
        FieldDescriptor::single(11, "sfixed32", FieldKind::Sfixed32),
        FieldDescriptor::single(12, "sfixed64", FieldKind::Sfixed64),
        FieldDescriptor::single(13, "bool", FieldKind::Bool),
        FieldDescriptor::single(14, "string", FieldKind::String),
        FieldDescriptor::single(15, "bytes", FieldKind::Bytes),
    ];

    fn empty() -> &'static Self {
        &EMPTY_FULL_RECORD
    }

    fn read_from<R: Read>(reader: &mut ProtobufReader<R>) -> Result<Self> {
        let mut builder = Self::builder();
        while let Some(tag) = reader.tag()? {
            let Some(field) = reader.field::<Self>(tag)? else {
                reader.skip(tag)?;
                continue;
            };
            match field.number {
                1 => builder.double = reader.double(tag, field.name)?,
                2 => builder.float = reader.float(tag, field.name)?,
                3 => builder.int32 = reader.int32(tag, field.name)?,
                4 => builder.int64 = reader.int64(tag, field.name)?,
                5 => builder.uint32 = reader.uint32(tag, field.name)?,
                6 => builder.uint64 = reader.uint64(tag, field.name)?,
                7 => builder.sint32 = reader.sint32(tag, field.name)?,
                8 => builder.sint64 = reader.sint64(tag, field.name)?,
                9 => builder.fixed32 = reader.fixed32(tag, field.name)?,
                10 => builder.fixed64 = reader.fixed64(tag, field.name)?,
                11 => builder.sfixed32 = reader.sfixed32(tag, field.name)?,
                12 => builder.sfixed64 = reader.sfixed64(tag, field.name)?,
                13 => builder.bool = reader.bool(tag, field.name)?,
                14 => builder.string = reader.string(tag, field.name)?,
                15 => builder.bytes = reader.bytes(tag, field.name)?,
                _ => reader.skip(tag)?,
            }
        }
        Ok(builder.build())
    }

    fn write_to<W: Write>(&self, writer: &mut ProtobufWriter<W>) -> Result<()> {
        writer
            .write_double(1, self.double)?
            .write_float(2, self.float)?
            .write_int32(3, self.int32)?
            .write_int64(4, self.int64)?
            .write_uint32(5, self.uint32)?
            .write_uint64(6, self.uint64)?
            .write_sint32(7, self.sint32)?
            .write_sint64(8, self.sint64)?
            .write_fixed32(9, self.fixed32)?
            .write_fixed64(10, self.fixed64)?
            .write_sfixed32(11, self.sfixed32)?
            .write_sfixed64(12, self.sfixed64)?
            .write_bool(13, self.bool)?
            .write_string(14, &self.string)?
            .write_bytes(15, &self.bytes)?;
        Ok(())
    }

    fn protobuf_size(&self) -> usize {
        size::of_double(1, &self.double)
            + size::of_float(2, &self.float)
            + size::of_int32(3, &self.int32)
            + size::of_int64(4, &self.int64)
            + size::of_uint32(5, &self.uint32)
            + size::of_uint64(6, &self.uint64)
            + size::of_sint32(7, &self.sint32)
            + size::of_sint64(8, &self.sint64)
            + size::of_fixed32(9, &self.fixed32)
            + size::of_fixed64(10, &self.fixed64)
            + size::of_sfixed32(11, &self.sfixed32)
            + size::of_sfixed64(12, &self.sfixed64)
            + size::of_bool(13, &self.bool)
            + size::of_string(14, &self.string)
            + size::of_bytes(15, &self.bytes)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FullRecordBuilder {
    double: f64,
    float: f32,
    int32: i32,
    int64: i64,
    uint32: u32,
    uint64: u64,
    sint32: i32,
    sint64: i64,
    fixed32: u32,
    fixed64: u64,
    sfixed32: i32,
    sfixed64: i64,
    bool: bool,
    string: String,
    bytes: Vec<u8>,
}

impl FullRecordBuilder {
    pub fn double(&mut self, value: f64) -> &mut Self {
        self.double = value;
        self
    }

    pub fn int64(&mut self, value: i64) -> &mut Self {
        self.int64 = value;
        self
    }

    pub fn sint32(&mut self, value: i32) -> &mut Self {
        self.sint32 = value;
        self
    }

    pub fn sfixed32(&mut self, value: i32) -> &mut Self {
        self.sfixed32 = value;
        self
    }

    pub fn bool(&mut self, value: bool) -> &mut Self {
        self.bool = value;
        self
    }

    pub fn string(&mut self, value: impl Into<String>) -> &mut Self {
        self.string = value.into();
        self
    }

    pub fn bytes(&mut self, value: impl Into<Vec<u8>>) -> &mut Self {
        self.bytes = value.into();
        self
    }
}

impl MessageBuilder for FullRecordBuilder {
    type Message = FullRecord;

    fn merge(&mut self, message: &FullRecord) -> &mut Self {
        merge::value(&mut self.double, &message.double);
        merge::value(&mut self.float, &message.float);
        merge::value(&mut self.int32, &message.int32);
        merge::value(&mut self.int64, &message.int64);
        merge::value(&mut self.uint32, &message.uint32);
        merge::value(&mut self.uint64, &message.uint64);
        merge::value(&mut self.sint32, &message.sint32);
        merge::value(&mut self.sint64, &message.sint64);
        merge::value(&mut self.fixed32, &message.fixed32);
        merge::value(&mut self.fixed64, &message.fixed64);
        merge::value(&mut self.sfixed32, &message.sfixed32);
        merge::value(&mut self.sfixed64, &message.sfixed64);
        merge::value(&mut self.bool, &message.bool);
        merge::value(&mut self.string, &message.string);
        merge::value(&mut self.bytes, &message.bytes);
        self
    }

    fn build(&self) -> FullRecord {
        FullRecord {
            double: self.double,
            float: self.float,
            int32: self.int32,
            int64: self.int64,
            uint32: self.uint32,
            uint64: self.uint64,
            sint32: self.sint32,
            sint64: self.sint64,
            fixed32: self.fixed32,
            fixed64: self.fixed64,
            sfixed32: self.sfixed32,
            sfixed64: self.sfixed64,
            bool: self.bool,
            string: self.string.clone(),
            bytes: self.bytes.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// RepeatableUnpacked: repeated fields written one tag per element

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RepeatableUnpacked {
    pub doubles: Vec<f64>,
    pub int32s: Vec<i32>,
    pub sint64s: Vec<i64>,
    pub fixed32s: Vec<u32>,
    pub bools: Vec<bool>,
    pub strings: Vec<String>,
    pub bytes: Vec<Vec<u8>>,
}

static EMPTY_REPEATABLE_UNPACKED: RepeatableUnpacked = RepeatableUnpacked {
    doubles: Vec::new(),
    int32s: Vec::new(),
    sint64s: Vec::new(),
    fixed32s: Vec::new(),
    bools: Vec::new(),
    strings: Vec::new(),
    bytes: Vec::new(),
};

impl Message for RepeatableUnpacked {
    type Builder = RepeatableUnpackedBuilder;

    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::unpacked(1, "doubles", FieldKind::Double),
        FieldDescriptor::unpacked(3, "int32s", FieldKind::Int32),
        FieldDescriptor::unpacked(8, "sint64s", FieldKind::Sint64),
        FieldDescriptor::unpacked(9, "fixed32s", FieldKind::Fixed32),
        FieldDescriptor::unpacked(13, "bools", FieldKind::Bool),
        FieldDescriptor::unpacked(14, "strings", FieldKind::String),
        FieldDescriptor::unpacked(15, "bytes", FieldKind::Bytes),
    ];

    fn empty() -> &'static Self {
        &EMPTY_REPEATABLE_UNPACKED
    }

    fn read_from<R: Read>(reader: &mut ProtobufReader<R>) -> Result<Self> {
        let mut builder = Self::builder();
        while let Some(tag) = reader.tag()? {
            let Some(field) = reader.field::<Self>(tag)? else {
                reader.skip(tag)?;
                continue;
            };
            match field.number {
                1 => reader.double_repeated(tag, field.name, &mut builder.doubles)?,
                3 => reader.int32_repeated(tag, field.name, &mut builder.int32s)?,
                8 => reader.sint64_repeated(tag, field.name, &mut builder.sint64s)?,
                9 => reader.fixed32_repeated(tag, field.name, &mut builder.fixed32s)?,
                13 => reader.bool_repeated(tag, field.name, &mut builder.bools)?,
                14 => reader.string_repeated(tag, field.name, &mut builder.strings)?,
                15 => reader.bytes_repeated(tag, field.name, &mut builder.bytes)?,
                _ => reader.skip(tag)?,
            }
        }
        Ok(builder.build())
    }

    fn write_to<W: Write>(&self, writer: &mut ProtobufWriter<W>) -> Result<()> {
        writer
            .write_double_unpacked(1, &self.doubles)?
            .write_int32_unpacked(3, &self.int32s)?
            .write_sint64_unpacked(8, &self.sint64s)?
            .write_fixed32_unpacked(9, &self.fixed32s)?
            .write_bool_unpacked(13, &self.bools)?
            .write_string_unpacked(14, &self.strings)?
            .write_bytes_unpacked(15, &self.bytes)?;
        Ok(())
    }

    fn protobuf_size(&self) -> usize {
        size::of_double_unpacked(1, &self.doubles)
            + size::of_int32_unpacked(3, &self.int32s)
            + size::of_sint64_unpacked(8, &self.sint64s)
            + size::of_fixed32_unpacked(9, &self.fixed32s)
            + size::of_bool_unpacked(13, &self.bools)
            + size::of_string_unpacked(14, &self.strings)
            + size::of_bytes_unpacked(15, &self.bytes)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RepeatableUnpackedBuilder {
    doubles: Vec<f64>,
    int32s: Vec<i32>,
    sint64s: Vec<i64>,
    fixed32s: Vec<u32>,
    bools: Vec<bool>,
    strings: Vec<String>,
    bytes: Vec<Vec<u8>>,
}

impl RepeatableUnpackedBuilder {
    pub fn int32s(&mut self, values: Vec<i32>) -> &mut Self {
        self.int32s = values;
        self
    }

    pub fn add_int32s(&mut self, value: i32) -> &mut Self {
        self.int32s.push(value);
        self
    }

    pub fn add_all_int32s(&mut self, values: impl IntoIterator<Item = i32>) -> &mut Self {
        self.int32s.extend(values);
        self
    }

    pub fn doubles(&mut self, values: Vec<f64>) -> &mut Self {
        self.doubles = values;
        self
    }

    pub fn add_strings(&mut self, value: impl Into<String>) -> &mut Self {
        self.strings.push(value.into());
        self
    }

    pub fn add_bytes(&mut self, value: impl Into<Vec<u8>>) -> &mut Self {
        self.bytes.push(value.into());
        self
    }
}

impl MessageBuilder for RepeatableUnpackedBuilder {
    type Message = RepeatableUnpacked;

    fn merge(&mut self, message: &RepeatableUnpacked) -> &mut Self {
        merge::repeated(&mut self.doubles, &message.doubles);
        merge::repeated(&mut self.int32s, &message.int32s);
        merge::repeated(&mut self.sint64s, &message.sint64s);
        merge::repeated(&mut self.fixed32s, &message.fixed32s);
        merge::repeated(&mut self.bools, &message.bools);
        merge::repeated(&mut self.strings, &message.strings);
        merge::repeated(&mut self.bytes, &message.bytes);
        self
    }

    fn build(&self) -> RepeatableUnpacked {
        RepeatableUnpacked {
            doubles: self.doubles.clone(),
            int32s: self.int32s.clone(),
            sint64s: self.sint64s.clone(),
            fixed32s: self.fixed32s.clone(),
            bools: self.bools.clone(),
            strings: self.strings.clone(),
            bytes: self.bytes.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// RepeatablePacked: every packable kind as a packed list

#[derive(Debug, Clone, Copy, PartialEq, Eq, protokit_macros::ProtobufEnumeration)]
pub enum RepeatableEnum {
    #[proto(number = 0)]
    First,
    #[proto(number = 1)]
    Second,
    #[proto(number = 2)]
    Third,
    #[proto(unrecognized)]
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RepeatablePacked {
    pub doubles: Vec<f64>,
    pub floats: Vec<f32>,
    pub int32s: Vec<i32>,
    pub int64s: Vec<i64>,
    pub uint32s: Vec<u32>,
    pub uint64s: Vec<u64>,
    pub sint32s: Vec<i32>,
    pub sint64s: Vec<i64>,
    pub fixed32s: Vec<u32>,
    pub fixed64s: Vec<u64>,
    pub sfixed32s: Vec<i32>,
    pub sfixed64s: Vec<i64>,
    pub bools: Vec<bool>,
    pub orders_value: Vec<i32>,
}

static EMPTY_REPEATABLE_PACKED: RepeatablePacked = RepeatablePacked {
    doubles: Vec::new(),
    floats: Vec::new(),
    int32s: Vec::new(),
    int64s: Vec::new(),
    uint32s: Vec::new(),
    uint64s: Vec::new(),
    sint32s: Vec::new(),
    sint64s: Vec::new(),
    fixed32s: Vec::new(),
    fixed64s: Vec::new(),
    sfixed32s: Vec::new(),
    sfixed64s: Vec::new(),
    bools: Vec::new(),
    orders_value: Vec::new(),
};

impl RepeatablePacked {
    pub fn orders(&self) -> Vec<RepeatableEnum> {
        self.orders_value.iter().copied().map(RepeatableEnum::for_number).collect()
    }
}

impl Message for RepeatablePacked {
    type Builder = RepeatablePackedBuilder;

    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::packed(1, "doubles", FieldKind::Double),
        FieldDescriptor::packed(2, "floats", FieldKind::Float),
        FieldDescriptor::packed(3, "int32s", FieldKind::Int32),
        FieldDescriptor::packed(4, "int64s", FieldKind::Int64),
        FieldDescriptor::packed(5, "uint32s", FieldKind::Uint32),
        FieldDescriptor::packed(6, "uint64s", FieldKind::Uint64),
        FieldDescriptor::packed(7, "sint32s", FieldKind::Sint32),
        FieldDescriptor::packed(8, "sint64s", FieldKind::Sint64),
        FieldDescriptor::packed(9, "fixed32s", FieldKind::Fixed32),
        FieldDescriptor::packed(10, "fixed64s", FieldKind::Fixed64),
        FieldDescriptor::packed(11, "sfixed32s", FieldKind::Sfixed32),
        FieldDescriptor::packed(12, "sfixed64s", FieldKind::Sfixed64),
        FieldDescriptor::packed(13, "bools", FieldKind::Bool),
        FieldDescriptor::packed(14, "orders", FieldKind::Enum),
    ];

    fn empty() -> &'static Self {
        &EMPTY_REPEATABLE_PACKED
    }

    fn read_from<R: Read>(reader: &mut ProtobufReader<R>) -> Result<Self> {
        let mut b = Self::builder();
        while let Some(tag) = reader.tag()? {
            let Some(field) = reader.field::<Self>(tag)? else {
                reader.skip(tag)?;
                continue;
            };
            match field.number {
                1 => reader.double_repeated(tag, field.name, &mut b.doubles)?,
                2 => reader.float_repeated(tag, field.name, &mut b.floats)?,
                3 => reader.int32_repeated(tag, field.name, &mut b.int32s)?,
                4 => reader.int64_repeated(tag, field.name, &mut b.int64s)?,
                5 => reader.uint32_repeated(tag, field.name, &mut b.uint32s)?,
                6 => reader.uint64_repeated(tag, field.name, &mut b.uint64s)?,
                7 => reader.sint32_repeated(tag, field.name, &mut b.sint32s)?,
                8 => reader.sint64_repeated(tag, field.name, &mut b.sint64s)?,
                9 => reader.fixed32_repeated(tag, field.name, &mut b.fixed32s)?,
                10 => reader.fixed64_repeated(tag, field.name, &mut b.fixed64s)?,
                11 => reader.sfixed32_repeated(tag, field.name, &mut b.sfixed32s)?,
                12 => reader.sfixed64_repeated(tag, field.name, &mut b.sfixed64s)?,
                13 => reader.bool_repeated(tag, field.name, &mut b.bools)?,
                14 => reader.enumeration_repeated(tag, field.name, &mut b.orders_value)?,
                _ => reader.skip(tag)?,
            }
        }
        Ok(b.build())
    }

    fn write_to<W: Write>(&self, writer: &mut ProtobufWriter<W>) -> Result<()> {
        writer
            .write_double_packed(1, &self.doubles)?
            .write_float_packed(2, &self.floats)?
            .write_int32_packed(3, &self.int32s)?
            .write_int64_packed(4, &self.int64s)?
            .write_uint32_packed(5, &self.uint32s)?
            .write_uint64_packed(6, &self.uint64s)?
            .write_sint32_packed(7, &self.sint32s)?
            .write_sint64_packed(8, &self.sint64s)?
            .write_fixed32_packed(9, &self.fixed32s)?
            .write_fixed64_packed(10, &self.fixed64s)?
            .write_sfixed32_packed(11, &self.sfixed32s)?
            .write_sfixed64_packed(12, &self.sfixed64s)?
            .write_bool_packed(13, &self.bools)?
            .write_enum_packed(14, &self.orders_value)?;
        Ok(())
    }

    fn protobuf_size(&self) -> usize {
        size::of_double_packed(1, &self.doubles)
            + size::of_float_packed(2, &self.floats)
            + size::of_int32_packed(3, &self.int32s)
            + size::of_int64_packed(4, &self.int64s)
            + size::of_uint32_packed(5, &self.uint32s)
            + size::of_uint64_packed(6, &self.uint64s)
            + size::of_sint32_packed(7, &self.sint32s)
            + size::of_sint64_packed(8, &self.sint64s)
            + size::of_fixed32_packed(9, &self.fixed32s)
            + size::of_fixed64_packed(10, &self.fixed64s)
            + size::of_sfixed32_packed(11, &self.sfixed32s)
            + size::of_sfixed64_packed(12, &self.sfixed64s)
            + size::of_bool_packed(13, &self.bools)
            + size::of_enum_packed(14, &self.orders_value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RepeatablePackedBuilder {
    pub doubles: Vec<f64>,
    pub floats: Vec<f32>,
    pub int32s: Vec<i32>,
    pub int64s: Vec<i64>,
    pub uint32s: Vec<u32>,
    pub uint64s: Vec<u64>,
    pub sint32s: Vec<i32>,
    pub sint64s: Vec<i64>,
    pub fixed32s: Vec<u32>,
    pub fixed64s: Vec<u64>,
    pub sfixed32s: Vec<i32>,
    pub sfixed64s: Vec<i64>,
    pub bools: Vec<bool>,
    pub orders_value: Vec<i32>,
}

impl RepeatablePackedBuilder {
    pub fn add_orders(&mut self, value: RepeatableEnum) -> Result<&mut Self> {
        self.orders_value.push(value.number()?);
        Ok(self)
    }

    pub fn add_orders_value(&mut self, value: i32) -> &mut Self {
        self.orders_value.push(value);
        self
    }
}

impl MessageBuilder for RepeatablePackedBuilder {
    type Message = RepeatablePacked;

    fn merge(&mut self, message: &RepeatablePacked) -> &mut Self {
        merge::repeated(&mut self.doubles, &message.doubles);
        merge::repeated(&mut self.floats, &message.floats);
        merge::repeated(&mut self.int32s, &message.int32s);
        merge::repeated(&mut self.int64s, &message.int64s);
        merge::repeated(&mut self.uint32s, &message.uint32s);
        merge::repeated(&mut self.uint64s, &message.uint64s);
        merge::repeated(&mut self.sint32s, &message.sint32s);
        merge::repeated(&mut self.sint64s, &message.sint64s);
        merge::repeated(&mut self.fixed32s, &message.fixed32s);
        merge::repeated(&mut self.fixed64s, &message.fixed64s);
        merge::repeated(&mut self.sfixed32s, &message.sfixed32s);
        merge::repeated(&mut self.sfixed64s, &message.sfixed64s);
        merge::repeated(&mut self.bools, &message.bools);
        merge::repeated(&mut self.orders_value, &message.orders_value);
        self
    }

    fn build(&self) -> RepeatablePacked {
        RepeatablePacked {
            doubles: self.doubles.clone(),
            floats: self.floats.clone(),
            int32s: self.int32s.clone(),
            int64s: self.int64s.clone(),
            uint32s: self.uint32s.clone(),
            uint64s: self.uint64s.clone(),
            sint32s: self.sint32s.clone(),
            sint64s: self.sint64s.clone(),
            fixed32s: self.fixed32s.clone(),
            fixed64s: self.fixed64s.clone(),
            sfixed32s: self.sfixed32s.clone(),
            sfixed64s: self.sfixed64s.clone(),
            bools: self.bools.clone(),
            orders_value: self.orders_value.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// SimpleEnumMessage: a single enum field

#[derive(Debug, Clone, Copy, PartialEq, Eq, protokit_macros::ProtobufEnumeration)]
pub enum SimpleEnum {
    #[proto(number = 0)]
    First,
    #[proto(number = 1)]
    Second,
    #[proto(number = 2)]
    Third,
    #[proto(unrecognized)]
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimpleEnumMessage {
    pub order_value: i32,
}

static EMPTY_SIMPLE_ENUM_MESSAGE: SimpleEnumMessage = SimpleEnumMessage { order_value: 0 };

impl SimpleEnumMessage {
    pub fn order(&self) -> SimpleEnum {
        SimpleEnum::for_number(self.order_value)
    }
}

impl Message for SimpleEnumMessage {
    type Builder = SimpleEnumMessageBuilder;

    const FIELDS: &'static [FieldDescriptor] =
        &[FieldDescriptor::single(1, "order", FieldKind::Enum)];

    fn empty() -> &'static Self {
        &EMPTY_SIMPLE_ENUM_MESSAGE
    }

    fn read_from<R: Read>(reader: &mut ProtobufReader<R>) -> Result<Self> {
        let mut builder = Self::builder();
        while let Some(tag) = reader.tag()? {
            let Some(field) = reader.field::<Self>(tag)? else {
                reader.skip(tag)?;
                continue;
            };
            match field.number {
                1 => {
                    builder.order_value(reader.enumeration(tag, field.name)?);
                }
                _ => reader.skip(tag)?,
            }
        }
        Ok(builder.build())
    }

    fn write_to<W: Write>(&self, writer: &mut ProtobufWriter<W>) -> Result<()> {
        writer.write_enum(1, self.order_value)?;
        Ok(())
    }

    fn protobuf_size(&self) -> usize {
        size::of_enum(1, &self.order_value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimpleEnumMessageBuilder {
    order_value: i32,
}

impl SimpleEnumMessageBuilder {
    pub fn order(&mut self, value: SimpleEnum) -> Result<&mut Self> {
        self.order_value = value.number()?;
        Ok(self)
    }

    pub fn order_value(&mut self, value: i32) -> &mut Self {
        self.order_value = value;
        self
    }
}

impl MessageBuilder for SimpleEnumMessageBuilder {
    type Message = SimpleEnumMessage;

    fn merge(&mut self, message: &SimpleEnumMessage) -> &mut Self {
        merge::value(&mut self.order_value, &message.order_value);
        self
    }

    fn build(&self) -> SimpleEnumMessage {
        SimpleEnumMessage {
            order_value: self.order_value,
        }
    }
}

// ---------------------------------------------------------------------------
// OtherMessageRecord: nested messages two levels deep

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Address {
    pub street: String,
    pub number: i32,
}

static EMPTY_ADDRESS: Address = Address {
    street: String::new(),
    number: 0,
};

impl Address {
    pub fn new(street: impl Into<String>, number: i32) -> Self {
        Self {
            street: street.into(),
            number,
        }
    }
}

impl Message for Address {
    type Builder = AddressBuilder;

    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::single(1, "street", FieldKind::String),
        FieldDescriptor::single(2, "number", FieldKind::Int32),
    ];

    fn empty() -> &'static Self {
        &EMPTY_ADDRESS
    }

    fn read_from<R: Read>(reader: &mut ProtobufReader<R>) -> Result<Self> {
        let mut builder = Self::builder();
        while let Some(tag) = reader.tag()? {
            let Some(field) = reader.field::<Self>(tag)? else {
                reader.skip(tag)?;
                continue;
            };
            match field.number {
                1 => {
                    builder.street(reader.string(tag, field.name)?);
                }
                2 => {
                    builder.number(reader.int32(tag, field.name)?);
                }
                _ => reader.skip(tag)?,
            }
        }
        Ok(builder.build())
    }

    fn write_to<W: Write>(&self, writer: &mut ProtobufWriter<W>) -> Result<()> {
        writer.write_string(1, &self.street)?.write_int32(2, self.number)?;
        Ok(())
    }

    fn protobuf_size(&self) -> usize {
        size::of_string(1, &self.street) + size::of_int32(2, &self.number)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AddressBuilder {
    street: String,
    number: i32,
}

impl AddressBuilder {
    pub fn street(&mut self, value: impl Into<String>) -> &mut Self {
        self.street = value.into();
        self
    }

    pub fn number(&mut self, value: i32) -> &mut Self {
        self.number = value;
        self
    }
}

impl MessageBuilder for AddressBuilder {
    type Message = Address;

    fn merge(&mut self, message: &Address) -> &mut Self {
        merge::value(&mut self.street, &message.street);
        merge::value(&mut self.number, &message.number);
        self
    }

    fn build(&self) -> Address {
        Address {
            street: self.street.clone(),
            number: self.number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Work {
    pub address: Option<Address>,
    pub name: String,
    pub year: u32,
}

static EMPTY_WORK: Work = Work {
    address: None,
    name: String::new(),
    year: 0,
};

impl Work {
    pub fn new(address: Address, name: impl Into<String>, year: u32) -> Self {
        Self {
            address: merge::present(address),
            name: name.into(),
            year,
        }
    }
}

impl Message for Work {
    type Builder = WorkBuilder;

    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::single(1, "address", FieldKind::Message),
        FieldDescriptor::single(2, "name", FieldKind::String),
        FieldDescriptor::single(3, "year", FieldKind::Fixed32),
    ];

    fn empty() -> &'static Self {
        &EMPTY_WORK
    }

    fn read_from<R: Read>(reader: &mut ProtobufReader<R>) -> Result<Self> {
        let mut builder = Self::builder();
        while let Some(tag) = reader.tag()? {
            let Some(field) = reader.field::<Self>(tag)? else {
                reader.skip(tag)?;
                continue;
            };
            match field.number {
                1 => {
                    builder.merge_address(&reader.message(tag, field.name)?);
                }
                2 => {
                    builder.name(reader.string(tag, field.name)?);
                }
                3 => {
                    builder.year(reader.fixed32(tag, field.name)?);
                }
                _ => reader.skip(tag)?,
            }
        }
        Ok(builder.build())
    }

    fn write_to<W: Write>(&self, writer: &mut ProtobufWriter<W>) -> Result<()> {
        writer
            .write_message(1, self.address.as_ref())?
            .write_string(2, &self.name)?
            .write_fixed32(3, self.year)?;
        Ok(())
    }

    fn protobuf_size(&self) -> usize {
        size::message(1, self.address.as_ref())
            + size::of_string(2, &self.name)
            + size::of_fixed32(3, &self.year)
    }
}

#[derive(Debug, Clone, Default)]
pub struct WorkBuilder {
    address: Option<Address>,
    name: String,
    year: u32,
}

impl WorkBuilder {
    pub fn address(&mut self, value: Address) -> &mut Self {
        self.address = merge::present(value);
        self
    }

    pub fn merge_address(&mut self, value: &Address) -> &mut Self {
        merge::message(&mut self.address, Some(value));
        self
    }

    pub fn name(&mut self, value: impl Into<String>) -> &mut Self {
        self.name = value.into();
        self
    }

    pub fn year(&mut self, value: u32) -> &mut Self {
        self.year = value;
        self
    }
}

impl MessageBuilder for WorkBuilder {
    type Message = Work;

    fn merge(&mut self, message: &Work) -> &mut Self {
        merge::message(&mut self.address, message.address.as_ref());
        merge::value(&mut self.name, &message.name);
        merge::value(&mut self.year, &message.year);
        self
    }

    fn build(&self) -> Work {
        Work {
            address: self.address.clone(),
            name: self.name.clone(),
            year: self.year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OtherMessageRecord {
    pub name: String,
    pub age: i32,
    pub address: Option<Address>,
    pub work: Option<Work>,
}

static EMPTY_OTHER_MESSAGE_RECORD: OtherMessageRecord = OtherMessageRecord {
    name: String::new(),
    age: 0,
    address: None,
    work: None,
};

impl OtherMessageRecord {
    pub fn new(name: impl Into<String>, age: i32, address: Address, work: Work) -> Self {
        Self {
            name: name.into(),
            age,
            address: merge::present(address),
            work: merge::present(work),
        }
    }
}

impl Message for OtherMessageRecord {
    type Builder = OtherMessageRecordBuilder;

    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::single(1, "name", FieldKind::String),
        FieldDescriptor::single(2, "age", FieldKind::Int32),
        FieldDescriptor::single(3, "address", FieldKind::Message),
        FieldDescriptor::single(4, "work", FieldKind::Message),
    ];

    fn empty() -> &'static Self {
        &EMPTY_OTHER_MESSAGE_RECORD
    }

    fn read_from<R: Read>(reader: &mut ProtobufReader<R>) -> Result<Self> {
        let mut builder = Self::builder();
        while let Some(tag) = reader.tag()? {
            let Some(field) = reader.field::<Self>(tag)? else {
                reader.skip(tag)?;
                continue;
            };
            match field.number {
                1 => {
                    builder.name(reader.string(tag, field.name)?);
                }
                2 => {
                    builder.age(reader.int32(tag, field.name)?);
                }
                3 => {
                    builder.merge_address(&reader.message(tag, field.name)?);
                }
                4 => {
                    builder.merge_work(&reader.message(tag, field.name)?);
                }
                _ => reader.skip(tag)?,
            }
        }
        Ok(builder.build())
    }

    fn write_to<W: Write>(&self, writer: &mut ProtobufWriter<W>) -> Result<()> {
        writer
            .write_string(1, &self.name)?
            .write_int32(2, self.age)?
            .write_message(3, self.address.as_ref())?
            .write_message(4, self.work.as_ref())?;
        Ok(())
    }

    fn protobuf_size(&self) -> usize {
        size::of_string(1, &self.name)
            + size::of_int32(2, &self.age)
            + size::message(3, self.address.as_ref())
            + size::message(4, self.work.as_ref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct OtherMessageRecordBuilder {
    name: String,
    age: i32,
    address: Option<Address>,
    work: Option<Work>,
}

impl OtherMessageRecordBuilder {
    pub fn name(&mut self, value: impl Into<String>) -> &mut Self {
        self.name = value.into();
        self
    }

    pub fn age(&mut self, value: i32) -> &mut Self {
        self.age = value;
        self
    }

    pub fn address(&mut self, value: Address) -> &mut Self {
        self.address = merge::present(value);
        self
    }

    pub fn merge_address(&mut self, value: &Address) -> &mut Self {
        merge::message(&mut self.address, Some(value));
        self
    }

    pub fn work(&mut self, value: Work) -> &mut Self {
        self.work = merge::present(value);
        self
    }

    pub fn merge_work(&mut self, value: &Work) -> &mut Self {
        merge::message(&mut self.work, Some(value));
        self
    }
}

impl MessageBuilder for OtherMessageRecordBuilder {
    type Message = OtherMessageRecord;

    fn merge(&mut self, message: &OtherMessageRecord) -> &mut Self {
        merge::value(&mut self.name, &message.name);
        merge::value(&mut self.age, &message.age);
        merge::message(&mut self.address, message.address.as_ref());
        merge::message(&mut self.work, message.work.as_ref());
        self
    }

    fn build(&self) -> OtherMessageRecord {
        OtherMessageRecord {
            name: self.name.clone(),
            age: self.age,
            address: self.address.clone(),
            work: self.work.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// RepeatableOtherWork: a repeated message field

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RepeatableOtherWork {
    pub addresses: Vec<Address>,
}

static EMPTY_REPEATABLE_OTHER_WORK: RepeatableOtherWork = RepeatableOtherWork {
    addresses: Vec::new(),
};

impl Message for RepeatableOtherWork {
    type Builder = RepeatableOtherWorkBuilder;

    const FIELDS: &'static [FieldDescriptor] =
        &[FieldDescriptor::unpacked(1, "addresses", FieldKind::Message)];

    fn empty() -> &'static Self {
        &EMPTY_REPEATABLE_OTHER_WORK
    }

    fn read_from<R: Read>(reader: &mut ProtobufReader<R>) -> Result<Self> {
        let mut builder = Self::builder();
        while let Some(tag) = reader.tag()? {
            let Some(field) = reader.field::<Self>(tag)? else {
                reader.skip(tag)?;
                continue;
            };
            match field.number {
                1 => {
                    builder.add_addresses(reader.message(tag, field.name)?);
                }
                _ => reader.skip(tag)?,
            }
        }
        Ok(builder.build())
    }

    fn write_to<W: Write>(&self, writer: &mut ProtobufWriter<W>) -> Result<()> {
        writer.write_messages(1, &self.addresses)?;
        Ok(())
    }

    fn protobuf_size(&self) -> usize {
        size::messages(1, &self.addresses)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RepeatableOtherWorkBuilder {
    addresses: Vec<Address>,
}

impl RepeatableOtherWorkBuilder {
    pub fn addresses(&mut self, values: Vec<Address>) -> &mut Self {
        self.addresses = values;
        self
    }

    pub fn add_addresses(&mut self, value: Address) -> &mut Self {
        self.addresses.push(value);
        self
    }

    pub fn add_all_addresses(&mut self, values: impl IntoIterator<Item = Address>) -> &mut Self {
        self.addresses.extend(values);
        self
    }
}

impl MessageBuilder for RepeatableOtherWorkBuilder {
    type Message = RepeatableOtherWork;

    fn merge(&mut self, message: &RepeatableOtherWork) -> &mut Self {
        merge::repeated(&mut self.addresses, &message.addresses);
        self
    }

    fn build(&self) -> RepeatableOtherWork {
        RepeatableOtherWork {
            addresses: self.addresses.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// SelfReference: a recursive message

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelfReference {
    pub value: i32,
    pub next: Option<Box<SelfReference>>,
}

static EMPTY_SELF_REFERENCE: SelfReference = SelfReference {
    value: 0,
    next: None,
};

impl SelfReference {
    /// Chain of `depth` links, values counting down to 1
    pub fn chain(depth: i32) -> Self {
        let mut current = Self {
            value: 1,
            next: None,
        };
        for value in 2..=depth {
            current = Self {
                value,
                next: Some(Box::new(current)),
            };
        }
        current
    }
}

impl Message for SelfReference {
    type Builder = SelfReferenceBuilder;

    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::single(1, "value", FieldKind::Int32),
        FieldDescriptor::single(2, "next", FieldKind::Message),
    ];

    fn empty() -> &'static Self {
        &EMPTY_SELF_REFERENCE
    }

    fn read_from<R: Read>(reader: &mut ProtobufReader<R>) -> Result<Self> {
        let mut builder = Self::builder();
        while let Some(tag) = reader.tag()? {
            let Some(field) = reader.field::<Self>(tag)? else {
                reader.skip(tag)?;
                continue;
            };
            match field.number {
                1 => {
                    builder.value(reader.int32(tag, field.name)?);
                }
                2 => {
                    builder.merge_next(&reader.message(tag, field.name)?);
                }
                _ => reader.skip(tag)?,
            }
        }
        Ok(builder.build())
    }

    fn write_to<W: Write>(&self, writer: &mut ProtobufWriter<W>) -> Result<()> {
        writer
            .write_int32(1, self.value)?
            .write_message(2, self.next.as_deref())?;
        Ok(())
    }

    fn protobuf_size(&self) -> usize {
        size::of_int32(1, &self.value) + size::message(2, self.next.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelfReferenceBuilder {
    value: i32,
    next: Option<Box<SelfReference>>,
}

impl SelfReferenceBuilder {
    pub fn value(&mut self, value: i32) -> &mut Self {
        self.value = value;
        self
    }

    pub fn next(&mut self, value: SelfReference) -> &mut Self {
        self.next = merge::present(value).map(Box::new);
        self
    }

    pub fn merge_next(&mut self, value: &SelfReference) -> &mut Self {
        merge::boxed_message(&mut self.next, Some(value));
        self
    }
}

impl MessageBuilder for SelfReferenceBuilder {
    type Message = SelfReference;

    fn merge(&mut self, message: &SelfReference) -> &mut Self {
        merge::value(&mut self.value, &message.value);
        merge::boxed_message(&mut self.next, message.next.as_deref());
        self
    }

    fn build(&self) -> SelfReference {
        SelfReference {
            value: self.value,
            next: self.next.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// UnknownFieldsRecord: keeps fields it does not declare

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnknownFieldsRecord {
    pub amount: i32,
    pub unknown_fields: Vec<UnknownField>,
}

static EMPTY_UNKNOWN_FIELDS_RECORD: UnknownFieldsRecord = UnknownFieldsRecord {
    amount: 0,
    unknown_fields: Vec::new(),
};

impl Message for UnknownFieldsRecord {
    type Builder = UnknownFieldsRecordBuilder;

    const FIELDS: &'static [FieldDescriptor] =
        &[FieldDescriptor::single(1, "amount", FieldKind::Int32)];

    fn empty() -> &'static Self {
        &EMPTY_UNKNOWN_FIELDS_RECORD
    }

    fn read_from<R: Read>(reader: &mut ProtobufReader<R>) -> Result<Self> {
        let mut builder = Self::builder();
        while let Some(tag) = reader.tag()? {
            let Some(field) = reader.field::<Self>(tag)? else {
                builder.add_unknown_fields(reader.unknown(tag)?);
                continue;
            };
            match field.number {
                1 => {
                    builder.amount(reader.int32(tag, field.name)?);
                }
                _ => {
                    builder.add_unknown_fields(reader.unknown(tag)?);
                }
            }
        }
        Ok(builder.build())
    }

    fn write_to<W: Write>(&self, writer: &mut ProtobufWriter<W>) -> Result<()> {
        writer
            .write_int32(1, self.amount)?
            .write_unknown_fields(&self.unknown_fields)?;
        Ok(())
    }

    fn protobuf_size(&self) -> usize {
        size::of_int32(1, &self.amount) + size::unknown_fields(&self.unknown_fields)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UnknownFieldsRecordBuilder {
    amount: i32,
    unknown_fields: Vec<UnknownField>,
}

impl UnknownFieldsRecordBuilder {
    pub fn amount(&mut self, value: i32) -> &mut Self {
        self.amount = value;
        self
    }

    pub fn add_unknown_fields(&mut self, value: UnknownField) -> &mut Self {
        self.unknown_fields.push(value);
        self
    }
}

impl MessageBuilder for UnknownFieldsRecordBuilder {
    type Message = UnknownFieldsRecord;

    fn merge(&mut self, message: &UnknownFieldsRecord) -> &mut Self {
        merge::value(&mut self.amount, &message.amount);
        merge::repeated(&mut self.unknown_fields, &message.unknown_fields);
        self
    }

    fn build(&self) -> UnknownFieldsRecord {
        UnknownFieldsRecord {
            amount: self.amount,
            unknown_fields: self.unknown_fields.clone(),
        }
    }
}

/// The error a typed enum setter reports for the sentinel
pub fn is_unrecognized_error(error: &Error) -> bool {
    matches!(error, Error::IllegalArgument(message) if *message == "unrecognized enum has no number")
}
