//! Binary buffer reader with cursor tracking.

use std::str;

use crate::{BufferError, Integral};

/// A bounds-checked reader over a borrowed byte slice.
///
/// The reader keeps a cursor position and an end boundary. Every read checks
/// that the requested bytes lie between the two before touching the buffer;
/// a read that does not fit fails with [`BufferError::OutOfBounds`] and leaves
/// the cursor where it was.
///
/// # Example
///
/// ```
/// use bindec_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.take::<u8>().unwrap(), 0x01);
/// assert_eq!(reader.peek::<u16>().unwrap(), 0x0203);
/// assert_eq!(reader.take::<u16>().unwrap(), 0x0203);
/// assert_eq!(reader.remaining(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    uint8: &'a [u8],
    x: usize,
    end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a reader positioned at the start of `uint8`.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self {
            uint8,
            x: 0,
            end: uint8.len(),
        }
    }

    /// Current cursor position, as an offset from the start of the buffer.
    #[inline]
    pub fn position(&self) -> usize {
        self.x
    }

    /// Number of bytes between the cursor and the end boundary.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.end - self.x
    }

    /// Returns `true` when no bytes remain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x == self.end
    }

    /// Checks that `requested` bytes fit before the end boundary and returns
    /// them without advancing.
    fn window(&self, requested: usize) -> Result<&'a [u8], BufferError> {
        let next = self
            .x
            .checked_add(requested)
            .filter(|&next| next <= self.end)
            .ok_or(BufferError::OutOfBounds {
                offset: self.x,
                requested,
                remaining: self.remaining(),
            })?;
        self.uint8
            .get(self.x..next)
            .ok_or(BufferError::OutOfBounds {
                offset: self.x,
                requested,
                remaining: self.remaining(),
            })
    }

    /// Reads an integer of type `N` at the cursor without advancing it.
    #[inline]
    pub fn peek<N: Integral>(&self) -> Result<N, BufferError> {
        let bytes = self.window(N::WIDTH)?;
        N::from_be_slice(bytes).ok_or(BufferError::OutOfBounds {
            offset: self.x,
            requested: N::WIDTH,
            remaining: self.remaining(),
        })
    }

    /// Reads an integer of type `N` and advances past it.
    #[inline]
    pub fn take<N: Integral>(&mut self) -> Result<N, BufferError> {
        let value = self.peek::<N>()?;
        self.x += N::WIDTH;
        Ok(value)
    }

    /// Copies exactly `SIZE` raw bytes into an array and advances past them.
    pub fn take_array<const SIZE: usize>(&mut self) -> Result<[u8; SIZE], BufferError> {
        let mut arr = [0u8; SIZE];
        arr.copy_from_slice(self.buf(SIZE)?);
        Ok(arr)
    }

    /// Copies exactly `size` bytes into an owned vector and advances past them.
    pub fn take_bytes(&mut self, size: usize) -> Result<Vec<u8>, BufferError> {
        self.buf(size).map(<[u8]>::to_vec)
    }

    /// Advances the cursor by `length` bytes without reading.
    pub fn advance(&mut self, length: usize) -> Result<(), BufferError> {
        self.window(length)?;
        self.x += length;
        Ok(())
    }

    /// Returns a borrowed subslice of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        let bin = self.window(size)?;
        self.x += size;
        Ok(bin)
    }

    /// Splits off a reader bounded to the next `size` bytes and advances past
    /// them.
    ///
    /// The returned reader reports positions relative to the same buffer, so
    /// error offsets stay meaningful to the caller.
    pub fn cut(&mut self, size: usize) -> Result<Reader<'a>, BufferError> {
        self.window(size)?;
        let sub = Reader {
            uint8: self.uint8,
            x: self.x,
            end: self.x + size,
        };
        self.x += size;
        Ok(sub)
    }

    /// Reads a UTF-8 string of the given size.
    ///
    /// On invalid UTF-8 the cursor is not moved.
    pub fn utf8(&mut self, size: usize) -> Result<&'a str, BufferError> {
        let bytes = self.window(size)?;
        let s = str::from_utf8(bytes).map_err(|_| BufferError::InvalidUtf8 {
            offset: self.x,
            len: size,
        })?;
        self.x += size;
        Ok(s)
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        self.take()
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self) -> Result<i8, BufferError> {
        self.take()
    }

    /// Reads an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self) -> Result<u16, BufferError> {
        self.take()
    }

    /// Reads a signed 16-bit integer (big-endian).
    #[inline]
    pub fn i16(&mut self) -> Result<i16, BufferError> {
        self.take()
    }

    /// Reads an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self) -> Result<u32, BufferError> {
        self.take()
    }

    /// Reads a signed 32-bit integer (big-endian).
    #[inline]
    pub fn i32(&mut self) -> Result<i32, BufferError> {
        self.take()
    }

    /// Reads an unsigned 64-bit integer (big-endian).
    #[inline]
    pub fn u64(&mut self) -> Result<u64, BufferError> {
        self.take()
    }

    /// Reads a signed 64-bit integer (big-endian).
    #[inline]
    pub fn i64(&mut self) -> Result<i64, BufferError> {
        self.take()
    }
}
