//! Protokit - Protocol Buffers binary wire-format runtime
//!
//! This crate provides everything generated message code needs to speak the
//! protobuf binary format, bit-exact with the reference encoding:
//! - Primitive codecs for varints, zigzag, fixed-width and length-prefixed values
//! - A size calculator so every length prefix is known before writing
//! - Field-level [`ProtobufReader`] and [`ProtobufWriter`] with default omission
//! - Unknown-field capture for lossless round trips
//! - The [`Message`] / [`MessageBuilder`] value model and merge rules
//!
//! # Quick Start
//!
//! ```rust
//! use protokit::{ProtobufReader, ProtobufWriter, Result};
//!
//! # fn main() -> Result<()> {
//! // Serialize
//! let mut writer = ProtobufWriter::new(Vec::new());
//! writer.write_uint64(1, 42)?.write_string(2, "hello")?;
//! let data = writer.finish()?;
//!
//! // Deserialize
//! let mut reader = ProtobufReader::from_slice(&data);
//! let mut id = 0;
//! let mut name = String::new();
//! while let Some(tag) = reader.tag()? {
//!     match tag.number() {
//!         1 => id = reader.uint64(tag, "id")?,
//!         2 => name = reader.string(tag, "name")?,
//!         _ => reader.skip(tag)?,
//!     }
//! }
//! assert_eq!((id, name.as_str()), (42, "hello"));
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod buffer;
mod errors;
mod input;
mod message;
mod output;
mod reader;
mod unknown;
mod writer;

pub mod kind;
pub mod merge;
pub mod primitives;
pub mod size;
pub mod wire;

pub use buffer::ReadBuffer;
pub use errors::{Error, Result};
pub use input::ProtoInput;
pub use kind::{FieldDescriptor, FieldKind, Kind, Packable, Repetition};
pub use message::{Message, MessageBuilder, ProtobufEnumeration};
pub use output::ProtoOutput;
pub use reader::ProtobufReader;
pub use unknown::{RawMessage, RawMessageBuilder, UnknownField};
pub use wire::{Tag, WireType};
pub use writer::ProtobufWriter;

#[cfg(feature = "derive")]
#[cfg_attr(docsrs, doc(cfg(feature = "derive")))]
pub use protokit_macros::ProtobufEnumeration;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        errors::{Error, Result},
        message::{Message, MessageBuilder, ProtobufEnumeration},
        reader::ProtobufReader,
        unknown::{RawMessage, UnknownField},
        wire::{Tag, WireType},
        writer::ProtobufWriter,
    };
}

/// Core constants for the protokit runtime
pub mod constants {
    /// Buffer size of readers and writers unless configured otherwise
    pub const DEFAULT_BUFFER_SIZE: usize = 4096;

    /// Smallest accepted reader buffer
    pub const MIN_BUFFER_SIZE: usize = crate::buffer::MIN_BUFFER_SIZE;

    /// Deepest message nesting a reader descends into
    pub const MAX_NESTING_DEPTH: usize = 100;

    /// Maximum encoded length of a varint
    pub const MAX_VARINT_SIZE: usize = crate::primitives::MAX_VARINT_SIZE;
}
