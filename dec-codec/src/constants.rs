//! Width parameters and the two-digit lookup table shared by the decoder and
//! the encoder.

// ─── Width Parameters ────────────────────────────────────────────────────────

/// Number of decimal digits in `value`, with `0` counting as one digit.
pub const fn decimal_digits(mut value: u64) -> usize {
    let mut n = 1;
    while value >= 10 {
        value /= 10;
        n += 1;
    }
    n
}

/// Decimal digits in `u8::MAX` (255).
pub const U8_MAX_DIGITS: usize = decimal_digits(u8::MAX as u64);

/// Decimal digits in `u16::MAX` (65535).
pub const U16_MAX_DIGITS: usize = decimal_digits(u16::MAX as u64);

/// Decimal digits in `u32::MAX` (4294967295).
pub const U32_MAX_DIGITS: usize = decimal_digits(u32::MAX as u64);

/// Decimal digits in `u64::MAX` (18446744073709551615).
pub const U64_MAX_DIGITS: usize = decimal_digits(u64::MAX);

/// A buffer of this many bytes holds the canonical form of any supported width.
pub const MAX_DIGITS_ANY: usize = U64_MAX_DIGITS;

// ─── Two-digit Table ─────────────────────────────────────────────────────────

/// Largest value the two-digit table encodes directly.
pub const SMALLS_MAX: u64 = 99;

/// ASCII pairs "00".."99"; `SMALLS[2v]` and `SMALLS[2v + 1]` are the digits of `v`.
pub static SMALLS: [u8; 200] = build_smalls();

const fn build_smalls() -> [u8; 200] {
    let mut table = [0u8; 200];
    let mut v = 0;
    while v < 100 {
        table[v * 2] = b'0' + (v / 10) as u8;
        table[v * 2 + 1] = b'0' + (v % 10) as u8;
        v += 1;
    }
    table
}

/// The two ASCII digits of `v`, zero-padded. `v` must be at most 99.
#[inline]
pub(crate) fn pair(v: usize) -> [u8; 2] {
    [SMALLS[v * 2], SMALLS[v * 2 + 1]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_digits_per_width() {
        assert_eq!(U8_MAX_DIGITS, 3);
        assert_eq!(U16_MAX_DIGITS, 5);
        assert_eq!(U32_MAX_DIGITS, 10);
        assert_eq!(U64_MAX_DIGITS, 20);
        assert_eq!(MAX_DIGITS_ANY, 20);
    }

    #[test]
    fn test_decimal_digits_boundaries() {
        assert_eq!(decimal_digits(0), 1);
        assert_eq!(decimal_digits(9), 1);
        assert_eq!(decimal_digits(10), 2);
        assert_eq!(decimal_digits(99), 2);
        assert_eq!(decimal_digits(100), 3);
        assert_eq!(decimal_digits(10_000_000_000_000_000_000), 20);
    }

    #[test]
    fn test_smalls_table_layout() {
        assert_eq!(&SMALLS[..4], b"0001");
        assert_eq!(&SMALLS[198..], b"99");
        for v in 0..100usize {
            let [hi, lo] = pair(v);
            assert_eq!((hi - b'0') as usize, v / 10);
            assert_eq!((lo - b'0') as usize, v % 10);
        }
    }
}
