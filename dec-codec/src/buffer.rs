use crate::constants::MAX_DIGITS_ANY;
use crate::encode::copy_uint;
use crate::width::Uint;

/// A stack buffer large enough for the canonical form of any supported width.
///
/// ```
/// use dec_codec::DecimalBuf;
///
/// let mut buf = DecimalBuf::new();
/// assert_eq!(buf.format(65535u16), "65535");
/// assert_eq!(buf.format(u64::MAX), "18446744073709551615");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecimalBuf {
    bytes: [u8; MAX_DIGITS_ANY],
}

impl DecimalBuf {
    pub const fn new() -> Self {
        Self {
            bytes: [b'0'; MAX_DIGITS_ANY],
        }
    }

    /// Format `v` and borrow the result.
    pub fn format<T: Uint>(&mut self, v: T) -> &str {
        let n = copy_uint(&mut self.bytes, v);
        // Only ASCII digits are ever written.
        core::str::from_utf8(&self.bytes[..n]).unwrap_or_default()
    }

    /// Format `v` and borrow the raw bytes.
    pub fn format_bytes<T: Uint>(&mut self, v: T) -> &[u8] {
        let n = copy_uint(&mut self.bytes, v);
        &self.bytes[..n]
    }
}

impl Default for DecimalBuf {
    fn default() -> Self {
        Self::new()
    }
}
