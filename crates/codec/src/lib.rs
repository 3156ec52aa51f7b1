//! Static per-type decode and encode dispatch.
//!
//! A record type opts in by implementing [`Decode`] (and optionally
//! [`Encode`]); callers then use [`decode::<Item>`](decode) and [`encode`].
//! The binding between a type and its routine is resolved at compile time by
//! trait dispatch; there is no runtime registry and no inspection of the
//! buffer to pick a decoder.
//!
//! Decoding is all-or-nothing: any failed check surfaces as a
//! [`DecodeError`] whose [`kind`](DecodeError::kind) is either
//! [`ErrorKind::InvalidInput`] or [`ErrorKind::OutOfBounds`].
//!
//! # Example
//!
//! ```
//! use bindec_codec::{
//!     decode, declared_length, encode, peek_declared_length, remainder, Decode, DecodeError,
//!     Encode, EncodeError, ErrorKind, Reader, Writer,
//! };
//!
//! // [len: u8][seq: u16][payload: len - 3 bytes]
//! #[derive(Debug, PartialEq)]
//! struct Ping {
//!     seq: u16,
//!     payload: Vec<u8>,
//! }
//!
//! impl Decode for Ping {
//!     const MINIMUM_PACKET_SIZE: usize = 3;
//!
//!     fn read(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
//!         peek_declared_length::<u8>(reader)?;
//!         let len = reader.take::<u8>()?;
//!         let seq = reader.take::<u16>()?;
//!         let payload = reader.take_bytes(remainder(len as usize, 3)?)?;
//!         Ok(Self { seq, payload })
//!     }
//! }
//!
//! impl Encode for Ping {
//!     fn write(&self, writer: &mut Writer) -> Result<(), EncodeError> {
//!         writer.u8(declared_length::<u8>(3 + self.payload.len())?);
//!         writer.u16(self.seq);
//!         writer.buf(&self.payload);
//!         Ok(())
//!     }
//! }
//!
//! let ping: Ping = decode(&[5, 0x01, 0x02, 0xAA, 0xBB]).unwrap();
//! assert_eq!(ping, Ping { seq: 0x0102, payload: vec![0xAA, 0xBB] });
//! assert_eq!(encode(&ping).unwrap(), [5u8, 0x01, 0x02, 0xAA, 0xBB]);
//!
//! let err = decode::<Ping>(&[9, 0x01, 0x02]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidInput);
//! ```

mod decode;
mod encode;
mod error;
mod length;

pub use decode::{decode, Decode};
pub use encode::{encode, Encode};
pub use error::{DecodeError, EncodeError, ErrorKind};
pub use length::{declared_length, ensure_minimum, peek_declared_length, remainder};

pub use bindec_buffers::{BufferError, Integral, Reader, Writer};
