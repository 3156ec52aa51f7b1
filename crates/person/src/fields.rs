//! Single-byte person fields.

use std::fmt;

/// Age in years, one unsigned byte on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age(pub u8);

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gender marker, a single character byte on the wire (`b'M'`, `b'F'`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gender(pub u8);

impl Gender {
    pub fn as_char(self) -> char {
        char::from(self.0)
    }
}

impl From<u8> for Gender {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

impl TryFrom<char> for Gender {
    type Error = char;

    /// Accepts characters that fit in one byte (U+0000..=U+00FF).
    fn try_from(c: char) -> Result<Self, char> {
        u8::try_from(c).map(Self).map_err(|_| c)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
