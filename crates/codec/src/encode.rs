//! Per-type encode dispatch, the mirror of [`decode`](crate::decode).

use bindec_buffers::Writer;

use crate::EncodeError;

/// A record type that can be written to the wire.
///
/// Like [`Decode`](crate::Decode), there is no blanket implementation. An
/// implementation must be the exact structural inverse of the type's decoder
/// so that decoding the output yields the original value.
pub trait Encode {
    /// Appends the encoded record to `writer`.
    fn write(&self, writer: &mut Writer) -> Result<(), EncodeError>;
}

/// Encodes `item` into a fresh byte vector.
pub fn encode<Item: Encode + ?Sized>(item: &Item) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::new();
    item.write(&mut writer)?;
    Ok(writer.flush())
}
