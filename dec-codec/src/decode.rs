//! Decimal text → unsigned integer.
//!
//! Overflow is only possible when the input is exactly `MAX_DIGITS` long, so
//! the last digit of such input is folded separately: the running total of the
//! leading digits is compared against the width's cutoff first, and the final
//! multiply-add is checked. Shorter input goes through the plain loop.
//! Input longer than `MAX_DIGITS` is rejected on length alone.

use crate::error::ParseError;
use crate::width::Uint;

/// Decode a single ASCII digit.
///
/// Returns `(0, false)` for anything outside `'0'..='9'`.
#[inline]
pub fn parse_digit(b: u8) -> (u8, bool) {
    let d = b.wrapping_sub(b'0');
    if d < 10 {
        (d, true)
    } else {
        (0, false)
    }
}

#[inline]
fn digit_at(index: usize, byte: u8) -> Result<u8, ParseError> {
    match parse_digit(byte) {
        (d, true) => Ok(d),
        _ => Err(ParseError::InvalidDigit { index, byte }),
    }
}

/// Decode `s` as a base-10 unsigned integer of width `T`.
///
/// Leading zeros are accepted. A non-digit byte inside an input of valid
/// length is reported even when the digits before it would already overflow.
pub fn decode<T: Uint>(s: &[u8]) -> Result<T, ParseError> {
    let Some((&last, head)) = s.split_last() else {
        return Err(ParseError::Empty);
    };

    if head.is_empty() {
        return digit_at(0, last).map(T::from_digit);
    }

    if s.len() > T::MAX_DIGITS {
        return Err(ParseError::TooLong {
            len: s.len(),
            max: T::MAX_DIGITS,
        });
    }

    let at_limit = s.len() == T::MAX_DIGITS;
    let body = if at_limit { head } else { s };

    let mut r = T::ZERO;
    for (index, &byte) in body.iter().enumerate() {
        r = r.push_digit(digit_at(index, byte)?);
    }

    if !at_limit {
        return Ok(r);
    }

    let d = digit_at(head.len(), last)?;
    if r >= T::CUTOFF {
        return Err(ParseError::Overflow);
    }
    r.checked_push_digit(d).ok_or(ParseError::Overflow)
}

/// Decode `s` as width `T`, reporting failure through the flag.
///
/// On failure the value is `0` for a syntax error and `T::MAX` for overflow.
#[inline]
pub fn parse_uint<T: Uint>(s: &[u8]) -> (T, bool) {
    match decode::<T>(s) {
        Ok(v) => (v, true),
        Err(e) => (e.fallback(), false),
    }
}

/// Decode an 8-bit value (at most 3 digits, max 255).
pub fn parse_uint8(s: &[u8]) -> (u8, bool) {
    parse_uint(s)
}

/// Decode a 16-bit value (at most 5 digits, max 65535).
pub fn parse_uint16(s: &[u8]) -> (u16, bool) {
    parse_uint(s)
}

/// Decode a 32-bit value (at most 10 digits, max 4294967295).
pub fn parse_uint32(s: &[u8]) -> (u32, bool) {
    parse_uint(s)
}

/// Decode a 64-bit value (at most 20 digits, max 18446744073709551615).
pub fn parse_uint64(s: &[u8]) -> (u64, bool) {
    parse_uint(s)
}
