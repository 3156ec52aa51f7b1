//! Decode and encode error types.

use bindec_buffers::BufferError;
use thiserror::Error;

/// Coarse classification of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The buffer failed size or length validation: truncated or malformed.
    InvalidInput,
    /// A cursor primitive was asked to read past the end of the buffer.
    OutOfBounds,
}

/// Error returned when a buffer does not hold a valid record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("buffer of {actual} bytes is shorter than the minimum packet size of {minimum}")]
    Truncated { minimum: usize, actual: usize },
    #[error("declared packet length {declared} exceeds the {actual} bytes available")]
    LengthMismatch { declared: usize, actual: usize },
    #[error(
        "declared packet length {declared} is smaller than the {consumed} bytes of fixed fields"
    )]
    LengthUnderflow { declared: usize, consumed: usize },
    #[error("invalid field `{field}`: {detail}")]
    InvalidField { field: &'static str, detail: String },
    #[error(transparent)]
    Buffer(#[from] BufferError),
}

impl DecodeError {
    /// Which of the two failure kinds this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Buffer(BufferError::OutOfBounds { .. }) => ErrorKind::OutOfBounds,
            Self::Truncated { .. }
            | Self::LengthMismatch { .. }
            | Self::LengthUnderflow { .. }
            | Self::InvalidField { .. }
            | Self::Buffer(BufferError::InvalidUtf8 { .. }) => ErrorKind::InvalidInput,
        }
    }
}

/// Error returned when a value cannot be represented on the wire.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("encoded packet of {len} bytes does not fit a {width}-byte length field")]
    TooLong { len: usize, width: usize },
}
