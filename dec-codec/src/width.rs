//! Width descriptors and the [`Uint`] trait tying the four supported unsigned
//! integer types to their constants.

use core::fmt;

use crate::constants::{U16_MAX_DIGITS, U32_MAX_DIGITS, U64_MAX_DIGITS, U8_MAX_DIGITS};

/// Runtime description of one supported width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidthInfo {
    /// Bit width: 8, 16, 32 or 64.
    pub bits: u32,
    /// Largest representable value, widened to `u64`.
    pub max_value: u64,
    /// Decimal digits in `max_value`.
    pub max_digits: usize,
    /// `max_value / 10 + 1`: a running total at or above this overflows on the next digit.
    pub cutoff: u64,
}

impl WidthInfo {
    pub const U8: Self = Self::new(8, u8::MAX as u64, U8_MAX_DIGITS);
    pub const U16: Self = Self::new(16, u16::MAX as u64, U16_MAX_DIGITS);
    pub const U32: Self = Self::new(32, u32::MAX as u64, U32_MAX_DIGITS);
    pub const U64: Self = Self::new(64, u64::MAX, U64_MAX_DIGITS);

    /// Every supported width, narrowest first.
    pub const ALL: [Self; 4] = [Self::U8, Self::U16, Self::U32, Self::U64];

    const fn new(bits: u32, max_value: u64, max_digits: usize) -> Self {
        Self {
            bits,
            max_value,
            max_digits,
            cutoff: max_value / 10 + 1,
        }
    }

    /// Look up the descriptor for a bit width. Returns `None` for anything
    /// other than 8, 16, 32 or 64.
    pub const fn for_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::U8),
            16 => Some(Self::U16),
            32 => Some(Self::U32),
            64 => Some(Self::U64),
            _ => None,
        }
    }
}

impl fmt::Display for WidthInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u{}", self.bits)
    }
}

mod private {
    pub trait Sealed {}
}

/// An unsigned integer width the codec supports.
///
/// This trait is sealed; it is implemented for `u8`, `u16`, `u32` and `u64`
/// only. The digit primitives are public so generic callers can name them,
/// but they carry preconditions the decoder and encoder uphold.
pub trait Uint:
    private::Sealed + Copy + Ord + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    const BITS: u32;
    const ZERO: Self;
    const MAX: Self;
    const MAX_DIGITS: usize;
    const CUTOFF: Self;
    const INFO: WidthInfo;

    /// Convert a single decimal digit (0..=9).
    fn from_digit(d: u8) -> Self;

    /// `self * 10 + d`. The caller guarantees the result fits.
    fn push_digit(self, d: u8) -> Self;

    /// `self * 10 + d`, or `None` if the result exceeds [`Uint::MAX`].
    fn checked_push_digit(self, d: u8) -> Option<Self>;

    /// Split off the lowest four decimal digits: `(self / 10000, self % 10000)`.
    fn div_rem_10000(self) -> (Self, usize);

    /// Split off the lowest two decimal digits: `(self / 100, self % 100)`.
    fn div_rem_100(self) -> (Self, usize);

    /// Widen to `u64`.
    fn to_u64(self) -> u64;

    /// Decode `s` as this width. See [`crate::parse_uint`].
    #[inline]
    fn parse_decimal(s: &[u8]) -> (Self, bool) {
        crate::decode::parse_uint(s)
    }

    /// Encode `self` into `dst`. See [`crate::copy_uint`].
    #[inline]
    fn copy_decimal(self, dst: &mut [u8]) -> usize {
        crate::encode::copy_uint(dst, self)
    }
}

// The division helpers run in `$wide` so that `10000` is representable for the
// narrow widths.
macro_rules! impl_uint {
    ($t:ty, $wide:ty, $info:expr) => {
        impl private::Sealed for $t {}

        impl Uint for $t {
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;
            const MAX: Self = <$t>::MAX;
            const MAX_DIGITS: usize = $info.max_digits;
            const CUTOFF: Self = <$t>::MAX / 10 + 1;
            const INFO: WidthInfo = $info;

            #[inline]
            fn from_digit(d: u8) -> Self {
                d as Self
            }

            #[inline]
            fn push_digit(self, d: u8) -> Self {
                self * 10 + d as Self
            }

            #[inline]
            fn checked_push_digit(self, d: u8) -> Option<Self> {
                self.checked_mul(10)?.checked_add(d as Self)
            }

            #[inline]
            fn div_rem_10000(self) -> (Self, usize) {
                let w = self as $wide;
                ((w / 10_000) as Self, (w % 10_000) as usize)
            }

            #[inline]
            fn div_rem_100(self) -> (Self, usize) {
                (self / 100, (self % 100) as usize)
            }

            #[inline]
            fn to_u64(self) -> u64 {
                self as u64
            }
        }
    };
}

impl_uint!(u8, u32, WidthInfo::U8);
impl_uint!(u16, u32, WidthInfo::U16);
impl_uint!(u32, u32, WidthInfo::U32);
impl_uint!(u64, u64, WidthInfo::U64);
