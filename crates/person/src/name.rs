//! Person name: stored as sent, split into first and last name on display.

use std::fmt;

/// Full name text as carried on the wire.
///
/// The text is kept verbatim; [`Name::first`] and [`Name::last`] split it at
/// the first space when asked. Text with no space is all first name. An
/// empty name is allowed.
///
/// `{}` renders `"First Last"`, `{:#}` renders `"Last, First"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Name {
    text: String,
}

impl Name {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Encoded size in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Text before the first space, or the whole text when there is none.
    pub fn first(&self) -> &str {
        self.text
            .split_once(' ')
            .map_or(self.text.as_str(), |(first, _)| first)
    }

    /// Text after the first space, or `""` when there is none.
    pub fn last(&self) -> &str {
        self.text.split_once(' ').map_or("", |(_, last)| last)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, last) = (self.first(), self.last());
        if last.is_empty() {
            return f.write_str(first);
        }
        if f.alternate() {
            write!(f, "{last}, {first}")
        } else {
            write!(f, "{first} {last}")
        }
    }
}
