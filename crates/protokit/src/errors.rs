//! Error types for protokit

use crate::wire::WireType;

/// Result type for protokit operations
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while encoding or decoding protobuf data
///
/// Every variant is fatal to the current encode/decode call. A failed parse
/// never yields a partial message.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fewer bytes were available than requested and the source is exhausted
    #[error("Unexpected end of the input data")]
    InputEnded,
    /// A read would cross the currently scoped length boundary
    #[error("Reading over limit")]
    LimitExceeded,
    /// A varint did not terminate within 10 bytes
    #[error("Malformed varint")]
    MalformedVarint,
    /// Group wire types are recognized but not supported
    #[error("Unsupported wire type {0}")]
    UnsupportedWireType(WireType),
    /// The low 3 bits of a tag are not a defined wire type
    #[error("Unknown wire type {0}")]
    UnknownWireType(u8),
    /// A declared field arrived with an incompatible wire type
    #[error("Field [name={field}, number={number}] incorrect wire type. Expected {expected}, got {actual}")]
    WireTypeMismatch {
        /// Field name, for diagnostics
        field: String,
        /// Field number
        number: u32,
        /// Wire type the field is declared with
        expected: WireType,
        /// Raw wire type id found on the wire
        actual: u8,
    },
    /// Invalid UTF-8 in string field
    #[error("Invalid UTF-8 string")]
    InvalidUtf8,
    /// Sub-messages are nested deeper than the reader allows
    #[error("Message nesting exceeds {0} levels")]
    NestingTooDeep(usize),
    /// A value was rejected while constructing a message
    #[error("{0}")]
    IllegalArgument(&'static str),
    /// The underlying stream failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(_: std::string::FromUtf8Error) -> Self {
        Error::InvalidUtf8
    }
}

impl From<core::str::Utf8Error> for Error {
    fn from(_: core::str::Utf8Error) -> Self {
        Error::InvalidUtf8
    }
}
