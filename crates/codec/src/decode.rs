//! Per-type decode dispatch.

use bindec_buffers::Reader;

use crate::length::ensure_minimum;
use crate::DecodeError;

/// A record type that can be decoded from a complete in-memory buffer.
///
/// There is no blanket implementation: each record type hand-encodes its own
/// field order and sizes in [`Decode::read`]. The `'static` bound keeps
/// decoded values from borrowing the source buffer; variable-length fields
/// must be copied out with [`Reader::take_bytes`] or similar.
///
/// Implementations are expected to:
///
/// - peek any self-declared total length before consuming it and reject a
///   buffer shorter than declared
///   ([`peek_declared_length`](crate::peek_declared_length));
/// - take fields in wire order;
/// - size the trailing variable-length field from the declared length only
///   ([`remainder`](crate::remainder)).
pub trait Decode: Sized + 'static {
    /// Smallest buffer that can hold a record. Shorter buffers are rejected
    /// by [`decode`] before [`Decode::read`] runs.
    const MINIMUM_PACKET_SIZE: usize;

    /// Reads one record starting at the reader's cursor.
    fn read(reader: &mut Reader<'_>) -> Result<Self, DecodeError>;
}

/// Decodes one `Item` from the start of `buffer`.
///
/// Fails with [`DecodeError::Truncated`] when the buffer is shorter than
/// `Item::MINIMUM_PACKET_SIZE`; no byte is read in that case. Bytes past the
/// record's end are ignored.
pub fn decode<Item: Decode>(buffer: &[u8]) -> Result<Item, DecodeError> {
    ensure_minimum(buffer.len(), Item::MINIMUM_PACKET_SIZE)?;
    let mut reader = Reader::new(buffer);
    Item::read(&mut reader)
}
