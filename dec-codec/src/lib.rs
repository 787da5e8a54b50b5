//! Allocation-free decimal codec for fixed-width unsigned integers.
//!
//! Two independent directions, each available for `u8`, `u16`, `u32` and `u64`:
//!
//! - **Decode** ([`parse_uint`], [`decode`]): ASCII digits → integer. Any byte
//!   slice is accepted; failures come back as `ok = false` with a saturated
//!   value (`0` for syntax errors, `T::MAX` for overflow), or as a typed
//!   [`ParseError`] from [`decode`].
//! - **Encode** ([`copy_uint`]): integer → ASCII digits written to the front of
//!   a caller-owned slice. A short slice receives the most significant digits
//!   only; the return value is the number of bytes written.
//!
//! No locale, no signs, no bases other than ten, and no heap allocation on
//! either path.
//!
//! ```
//! use dec_codec::{copy_uint32, parse_uint16, parse_uint8};
//!
//! assert_eq!(parse_uint16(b"65535"), (65535, true));
//! assert_eq!(parse_uint8(b"300"), (255, false));
//! assert_eq!(parse_uint8(b"2a6"), (0, false));
//!
//! let mut buf = [0u8; 3];
//! assert_eq!(copy_uint32(&mut buf, u32::MAX), 3);
//! assert_eq!(&buf, b"429");
//! ```
//!
//! # Sizing buffers
//!
//! [`Uint::MAX_DIGITS`] and [`WidthInfo`] expose the per-width limits;
//! [`MAX_DIGITS_ANY`] fits every width and [`digit_count`] gives the exact
//! length for a given value.

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod buffer;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod width;

pub use buffer::DecimalBuf;
pub use constants::{
    MAX_DIGITS_ANY, U16_MAX_DIGITS, U32_MAX_DIGITS, U64_MAX_DIGITS, U8_MAX_DIGITS,
};
pub use decode::{
    decode, parse_digit, parse_uint, parse_uint16, parse_uint32, parse_uint64, parse_uint8,
};
pub use encode::{copy_uint, copy_uint16, copy_uint32, copy_uint64, copy_uint8, digit_count};
pub use error::ParseError;
pub use width::{Uint, WidthInfo};

#[cfg(test)]
mod tests {
    use super::*;

    /// Encode into a full-size buffer, then decode that exact slice.
    fn agree<T: Uint>(v: T) {
        let mut buf = [0u8; MAX_DIGITS_ANY];
        let len = copy_uint(&mut buf, v);
        assert_eq!(len, digit_count(v));
        assert_eq!(parse_uint::<T>(&buf[..len]), (v, true));
    }

    #[test]
    fn test_encode_decode_agreement_boundaries() {
        for v in [0u8, 9, 10, 99, 100, 254, 255] {
            agree(v);
        }
        for v in [0u16, 99, 100, 9_999, 10_000, 65_534, 65_535] {
            agree(v);
        }
        for v in [0u32, 99, 100, 9_999, 10_000, 429_496_729, u32::MAX] {
            agree(v);
        }
        for v in [0u64, 99, 100, 10_000, 1_844_674_407_370_955_161, u64::MAX - 1, u64::MAX] {
            agree(v);
        }
    }

    #[test]
    fn test_exhaustive_u8_and_u16() {
        for v in 0..=u8::MAX {
            agree(v);
        }
        for v in 0..=u16::MAX {
            agree(v);
        }
    }

    #[test]
    fn test_powers_of_ten() {
        let mut p = 1u64;
        loop {
            agree(p);
            agree(p - 1);
            match p.checked_mul(10) {
                Some(next) => p = next,
                None => break,
            }
        }
    }

    #[test]
    fn test_parse_digit_matches_width_parsers() {
        for b in 0..=u8::MAX {
            let (d, ok) = parse_digit(b);
            assert_eq!(parse_uint8(&[b]), (d, ok));
            assert_eq!(parse_uint64(&[b]), (d as u64, ok));
        }
    }
}
