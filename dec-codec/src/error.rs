use thiserror::Error;

use crate::width::Uint;

/// Why a decimal token failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseError {
    // ─── Syntax Errors ───────────────────────────────────────────────────────
    #[error("empty input")]
    Empty,

    #[error("invalid digit {byte:#04x} at index {index}")]
    InvalidDigit { index: usize, byte: u8 },

    // ─── Overflow Errors ─────────────────────────────────────────────────────
    #[error("input too long: {len} digits > {max}")]
    TooLong { len: usize, max: usize },

    #[error("value exceeds the width maximum")]
    Overflow,
}

impl ParseError {
    /// True for empty input and non-digit bytes.
    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Empty | ParseError::InvalidDigit { .. })
    }

    /// True for both length and magnitude overflow.
    pub fn is_overflow(&self) -> bool {
        !self.is_syntax()
    }

    /// The value reported alongside `ok = false`: zero for syntax errors,
    /// the width maximum for overflow.
    pub fn fallback<T: Uint>(&self) -> T {
        if self.is_syntax() {
            T::ZERO
        } else {
            T::MAX
        }
    }
}
