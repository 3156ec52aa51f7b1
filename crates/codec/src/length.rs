//! Packet length validation shared by record decoders.
//!
//! A record that carries its own total length is decoded in three steps:
//! peek the declared length, check it against the bytes actually present,
//! then derive the trailing variable-length field from it. These helpers
//! implement each step so that every decoder reports the same errors.

use std::fmt::Display;

use bindec_buffers::{Integral, Reader};

use crate::{DecodeError, EncodeError};

/// Fails with [`DecodeError::Truncated`] when `len < minimum`.
#[inline]
pub fn ensure_minimum(len: usize, minimum: usize) -> Result<(), DecodeError> {
    if len < minimum {
        return Err(DecodeError::Truncated {
            minimum,
            actual: len,
        });
    }
    Ok(())
}

/// Peeks a length header of type `N` at the cursor and validates it against
/// the bytes available from the cursor to the end.
///
/// The header is not consumed; the caller takes it as a regular field
/// afterwards. The declared length counts the header itself.
pub fn peek_declared_length<N>(reader: &Reader<'_>) -> Result<usize, DecodeError>
where
    N: Integral + TryInto<usize> + Display,
{
    let raw = reader.peek::<N>()?;
    let declared = TryInto::<usize>::try_into(raw).map_err(|_| DecodeError::InvalidField {
        field: "length",
        detail: format!("declared length {raw} is not a valid size"),
    })?;
    let actual = reader.remaining();
    if declared > actual {
        return Err(DecodeError::LengthMismatch { declared, actual });
    }
    Ok(declared)
}

/// Size of the trailing variable-length field: `declared - consumed`.
///
/// `consumed` is the sum of every fixed field already taken, the length
/// header included. A declared length smaller than that fails with
/// [`DecodeError::LengthUnderflow`].
#[inline]
pub fn remainder(declared: usize, consumed: usize) -> Result<usize, DecodeError> {
    declared
        .checked_sub(consumed)
        .ok_or(DecodeError::LengthUnderflow { declared, consumed })
}

/// Converts a total packet length to the integer type of its length header.
pub fn declared_length<N>(total: usize) -> Result<N, EncodeError>
where
    N: Integral + TryFrom<usize>,
{
    N::try_from(total).map_err(|_| EncodeError::TooLong {
        len: total,
        width: N::WIDTH,
    })
}
