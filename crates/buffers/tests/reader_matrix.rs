//! Cursor laws for the reader: peek/take equivalence, big-endian assembly and
//! bounds checking, plus Writer/Reader agreement.

use bindec_buffers::{BufferError, Integral, Reader, Writer};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Fixed cases
// ---------------------------------------------------------------------------

#[test]
fn big_endian_u16() {
    assert_eq!(Reader::new(&[0x01, 0x02]).take::<u16>(), Ok(0x0102));
    assert_eq!(Reader::new(&[0xFF, 0x00]).take::<u16>(), Ok(0xFF00));
}

#[test]
fn big_endian_wide_types() {
    let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
    let mut r = Reader::new(&data);
    assert_eq!(r.peek::<u64>(), Ok(0x0102030405060708));
    assert_eq!(r.peek::<u32>(), Ok(0x01020304));
    assert_eq!(r.take::<i64>(), Ok(0x0102030405060708));
    assert!(r.is_empty());
}

#[test]
fn u128_reads_sixteen_bytes() {
    let mut data = [0u8; 16];
    data[0] = 0x80;
    data[15] = 0x01;
    let mut r = Reader::new(&data);
    assert_eq!(r.take::<u128>(), Ok((1u128 << 127) | 1));
    assert_eq!(Reader::new(&data).take::<i128>(), Ok(i128::MIN | 1));
}

#[test]
fn single_byte_signedness_follows_target_type() {
    let data = [0x80];
    assert_eq!(Reader::new(&data).take::<u8>(), Ok(0x80));
    assert_eq!(Reader::new(&data).take::<i8>(), Ok(-128));
}

#[test]
fn empty_buffer_rejects_every_read() {
    let mut r = Reader::new(&[]);
    assert!(r.is_empty());
    assert!(matches!(r.peek::<u8>(), Err(BufferError::OutOfBounds { .. })));
    assert!(matches!(r.take_array::<1>(), Err(BufferError::OutOfBounds { .. })));
    assert!(matches!(r.take_bytes(1), Err(BufferError::OutOfBounds { .. })));
    assert!(matches!(r.advance(1), Err(BufferError::OutOfBounds { .. })));
    assert_eq!(r.take_bytes(0), Ok(Vec::new()));
}

#[test]
fn mixed_field_walk() {
    let mut w = Writer::new();
    w.u8(11);
    w.buf(b"TAG!");
    w.i16(-300);
    w.utf8("tail");
    let data = w.flush();

    let mut r = Reader::new(&data);
    assert_eq!(r.u8(), Ok(11));
    assert_eq!(r.take_array::<4>(), Ok(*b"TAG!"));
    assert_eq!(r.i16(), Ok(-300));
    let rest = r.remaining();
    assert_eq!(r.utf8(rest), Ok("tail"));
    assert!(r.is_empty());
}

// ---------------------------------------------------------------------------
// Laws
// ---------------------------------------------------------------------------

fn peek_advance_matches_take<N>(bytes: &[u8]) -> Result<(), TestCaseError>
where
    N: Integral + PartialEq + std::fmt::Debug,
{
    let mut a = Reader::new(bytes);
    let mut b = Reader::new(bytes);

    let peeked = a.peek::<N>();
    let peeked_again = a.peek::<N>();
    prop_assert_eq!(&peeked, &peeked_again);
    prop_assert_eq!(a.position(), 0);

    let taken = b.take::<N>();
    prop_assert_eq!(&peeked, &taken);
    if peeked.is_ok() {
        a.advance(N::WIDTH).map_err(|e| TestCaseError::fail(e.to_string()))?;
    }
    prop_assert_eq!(a.position(), b.position());
    Ok(())
}

proptest! {
    #[test]
    fn peek_then_advance_equals_take(bytes in proptest::collection::vec(any::<u8>(), 0..20)) {
        peek_advance_matches_take::<u8>(&bytes)?;
        peek_advance_matches_take::<i8>(&bytes)?;
        peek_advance_matches_take::<u16>(&bytes)?;
        peek_advance_matches_take::<i16>(&bytes)?;
        peek_advance_matches_take::<u32>(&bytes)?;
        peek_advance_matches_take::<i32>(&bytes)?;
        peek_advance_matches_take::<u64>(&bytes)?;
        peek_advance_matches_take::<i64>(&bytes)?;
        peek_advance_matches_take::<u128>(&bytes)?;
    }

    #[test]
    fn take_u32_matches_shift_sum(bytes in proptest::array::uniform4(any::<u8>())) {
        let expected = bytes
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, &b)| acc + ((b as u32) << ((4 - 1 - i) * 8)));
        prop_assert_eq!(Reader::new(&bytes).take::<u32>(), Ok(expected));
    }

    #[test]
    fn reads_past_end_fail_without_moving(
        bytes in proptest::collection::vec(any::<u8>(), 0..16),
        skip in 0usize..16,
        extra in 1usize..8,
    ) {
        let skip = skip.min(bytes.len());
        let mut r = Reader::new(&bytes);
        r.advance(skip).unwrap();
        let remaining = r.remaining();
        let want = remaining + extra;

        let expected = BufferError::OutOfBounds { offset: skip, requested: want, remaining };
        prop_assert_eq!(r.take_bytes(want), Err(expected.clone()));
        prop_assert_eq!(r.buf(want), Err(expected.clone()));
        prop_assert_eq!(r.advance(want), Err(expected));
        prop_assert_eq!(r.position(), skip);
        prop_assert_eq!(r.take_bytes(remaining).map(|v| v.len()), Ok(remaining));
    }

    #[test]
    fn writer_output_reads_back(a in any::<u8>(), b in any::<i16>(), c in any::<u32>(), d in any::<i64>()) {
        let mut w = Writer::new();
        w.u8(a);
        w.i16(b);
        w.u32(c);
        w.i64(d);
        let data = w.flush();
        prop_assert_eq!(data.len(), 15);

        let mut r = Reader::new(&data);
        prop_assert_eq!(r.u8(), Ok(a));
        prop_assert_eq!(r.i16(), Ok(b));
        prop_assert_eq!(r.u32(), Ok(c));
        prop_assert_eq!(r.i64(), Ok(d));
        prop_assert!(r.is_empty());
    }
}
