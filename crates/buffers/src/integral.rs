//! Fixed-width integers readable from and writable to big-endian bytes.

/// An integer type with a fixed byte width and big-endian byte conversions.
///
/// Implemented for every primitive integer from `u8`/`i8` up to
/// `u128`/`i128`. Signed types reinterpret the assembled bit pattern as two's
/// complement, so `[0xFF]` reads as `255u8` or `-1i8`.
pub trait Integral: Copy {
    /// Number of bytes the value occupies on the wire.
    const WIDTH: usize;

    /// Assembles a value from exactly [`Self::WIDTH`] big-endian bytes.
    ///
    /// Returns `None` when `bytes` has any other length.
    fn from_be_slice(bytes: &[u8]) -> Option<Self>;

    /// Appends the big-endian bytes of `self` to `out`.
    fn extend_be(self, out: &mut Vec<u8>);
}

macro_rules! impl_integral {
    ($($t:ty),* $(,)?) => {
        $(
            impl Integral for $t {
                const WIDTH: usize = core::mem::size_of::<$t>();

                #[inline]
                fn from_be_slice(bytes: &[u8]) -> Option<Self> {
                    let arr: [u8; core::mem::size_of::<$t>()] = bytes.try_into().ok()?;
                    Some(<$t>::from_be_bytes(arr))
                }

                #[inline]
                fn extend_be(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_be_bytes());
                }
            }
        )*
    };
}

impl_integral!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
