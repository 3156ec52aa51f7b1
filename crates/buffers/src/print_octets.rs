//! Hex excerpts of byte runs for error messages.

use std::fmt;

/// Display adapter rendering at most `max` bytes as space-separated hex.
///
/// Bytes beyond `max` are summarised as `... (N more)`.
#[derive(Debug, Clone, Copy)]
pub struct Octets<'a> {
    pub bytes: &'a [u8],
    pub max: usize,
}

impl fmt::Display for Octets<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().take(self.max).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        if self.bytes.len() > self.max {
            write!(f, "... ({} more)", self.bytes.len() - self.max)?;
        }
        Ok(())
    }
}

/// Formats a byte slice as a hex string.
///
/// # Example
///
/// ```
/// use bindec_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0x01, 0x02, 0x0a, 0xff], 16), "01 02 0a ff");
/// assert_eq!(print_octets(&[0x01, 0x02, 0x03], 2), "01 02... (1 more)");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(bytes: &[u8], max: usize) -> String {
    Octets { bytes, max }.to_string()
}
