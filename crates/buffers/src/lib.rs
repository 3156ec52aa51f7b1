//! Bounds-checked byte cursor primitives.
//!
//! This crate provides the read and write halves that record decoders and
//! encoders are built from. Every read is checked against the end of the
//! borrowed buffer and reports [`BufferError::OutOfBounds`] instead of reading
//! past it. Multi-byte integers are big-endian.
//!
//! # Overview
//!
//! - [`Reader`] - Reads values from a borrowed byte slice with cursor tracking
//! - [`Writer`] - Writes values to an auto-growing buffer
//! - [`Integral`] - Integer types that can be assembled from big-endian bytes
//! - [`print_octets`] - Hex excerpt of a byte run, for diagnostics
//!
//! # Example
//!
//! ```
//! use bindec_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.u16(0x0203);
//! writer.utf8("hello");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.peek::<u8>().unwrap(), 0x01);
//! assert_eq!(reader.take::<u8>().unwrap(), 0x01);
//! assert_eq!(reader.take::<u16>().unwrap(), 0x0203);
//! assert_eq!(reader.take_bytes(5).unwrap(), b"hello");
//! assert!(reader.take::<u8>().is_err());
//! ```

mod integral;
mod print_octets;
mod reader;
mod writer;

pub use integral::Integral;
pub use print_octets::{print_octets, Octets};
pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// A read asked for more bytes than remain between the cursor and the end.
    #[error("read of {requested} bytes at offset {offset} exceeds the {remaining} bytes remaining")]
    OutOfBounds {
        offset: usize,
        requested: usize,
        remaining: usize,
    },
    /// A byte run taken as text is not valid UTF-8.
    #[error("invalid UTF-8 sequence in {len} bytes at offset {offset}")]
    InvalidUtf8 { offset: usize, len: usize },
}
