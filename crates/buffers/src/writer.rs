//! Binary buffer writer, the mirror of [`Reader`](crate::Reader).

use crate::Integral;

/// Writes values to an auto-growing byte buffer.
///
/// Integers are written big-endian, the same layout
/// [`Reader::take`](crate::Reader::take) reads back.
#[derive(Debug, Default, Clone)]
pub struct Writer {
    uint8: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Bytes written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.uint8
    }

    /// Takes the written bytes, leaving the writer empty for reuse.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }

    /// Writes an integer of any width, most significant byte first.
    #[inline]
    pub fn put<N: Integral>(&mut self, value: N) {
        value.extend_be(&mut self.uint8);
    }

    #[inline]
    pub fn u8(&mut self, value: u8) {
        self.uint8.push(value);
    }

    #[inline]
    pub fn i8(&mut self, value: i8) {
        self.put(value);
    }

    #[inline]
    pub fn u16(&mut self, value: u16) {
        self.put(value);
    }

    #[inline]
    pub fn i16(&mut self, value: i16) {
        self.put(value);
    }

    #[inline]
    pub fn u32(&mut self, value: u32) {
        self.put(value);
    }

    #[inline]
    pub fn i32(&mut self, value: i32) {
        self.put(value);
    }

    #[inline]
    pub fn u64(&mut self, value: u64) {
        self.put(value);
    }

    #[inline]
    pub fn i64(&mut self, value: i64) {
        self.put(value);
    }

    /// Writes raw bytes.
    pub fn buf(&mut self, bytes: &[u8]) {
        self.uint8.extend_from_slice(bytes);
    }

    /// Writes the UTF-8 bytes of `s` with no length prefix.
    pub fn utf8(&mut self, s: &str) {
        self.buf(s.as_bytes());
    }
}
