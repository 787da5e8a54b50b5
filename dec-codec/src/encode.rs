//! Unsigned integer → decimal text, written into a caller-owned buffer.
//!
//! The canonical representation is built back-to-front in a stack scratch
//! area, then its prefix is copied out. A destination shorter than the
//! representation keeps the most significant digits.

use crate::constants::{pair, MAX_DIGITS_ANY, SMALLS_MAX};
use crate::width::Uint;

/// Write a value of at most 99 to the front of a non-empty `dst`.
#[inline]
fn copy_small(dst: &mut [u8], u: usize) -> usize {
    if u < 10 {
        dst[0] = b'0' + u as u8;
        return 1;
    }

    let digits = pair(u);
    let n = dst.len().min(2);
    dst[..n].copy_from_slice(&digits[..n]);
    n
}

/// Fill `scratch` from the end with the digits of `u` (`u > 99`) and return
/// the index of the first digit.
fn fill_backward<T: Uint>(scratch: &mut [u8], mut u: T) -> usize {
    let mut i = scratch.len();

    while u.to_u64() >= 10_000 {
        let (q, r) = u.div_rem_10000();
        u = q;
        i -= 4;
        scratch[i..i + 2].copy_from_slice(&pair(r / 100));
        scratch[i + 2..i + 4].copy_from_slice(&pair(r % 100));
    }

    while u.to_u64() > SMALLS_MAX {
        let (q, r) = u.div_rem_100();
        u = q;
        i -= 2;
        scratch[i..i + 2].copy_from_slice(&pair(r));
    }

    let rest = u.to_u64() as usize;
    if rest < 10 {
        i -= 1;
        scratch[i] = b'0' + rest as u8;
    } else {
        i -= 2;
        scratch[i..i + 2].copy_from_slice(&pair(rest));
    }
    i
}

/// Copy the decimal representation of `u` into `dst`, up to `dst.len()`
/// bytes, discarding the least significant digits that do not fit.
///
/// Returns the number of bytes written. Nothing is written to an empty `dst`.
pub fn copy_uint<T: Uint>(dst: &mut [u8], u: T) -> usize {
    if dst.is_empty() {
        return 0;
    }

    if u.to_u64() <= SMALLS_MAX {
        return copy_small(dst, u.to_u64() as usize);
    }

    let mut scratch = [0u8; MAX_DIGITS_ANY];
    let scratch = &mut scratch[..T::MAX_DIGITS];
    let start = fill_backward(scratch, u);
    let digits = &scratch[start..];

    let n = digits.len().min(dst.len());
    dst[..n].copy_from_slice(&digits[..n]);
    n
}

/// Encode an 8-bit value; at most 3 bytes are written.
pub fn copy_uint8(dst: &mut [u8], u: u8) -> usize {
    copy_uint(dst, u)
}

/// Encode a 16-bit value; at most 5 bytes are written.
pub fn copy_uint16(dst: &mut [u8], u: u16) -> usize {
    copy_uint(dst, u)
}

/// Encode a 32-bit value; at most 10 bytes are written.
pub fn copy_uint32(dst: &mut [u8], u: u32) -> usize {
    copy_uint(dst, u)
}

/// Encode a 64-bit value; at most 20 bytes are written.
pub fn copy_uint64(dst: &mut [u8], u: u64) -> usize {
    copy_uint(dst, u)
}

/// Length of the canonical decimal representation of `v`.
pub fn digit_count<T: Uint>(v: T) -> usize {
    crate::constants::decimal_digits(v.to_u64())
}
