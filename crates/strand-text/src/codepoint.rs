//! Unicode scalar values.

use std::fmt;

use crate::utf8;

/// A single Unicode scalar value.
///
/// Deliberately a distinct type from `u32` so that arbitrary integers do
/// not get pushed into a string by accident. Every `Codepoint` is a valid
/// scalar value: construction from `u32` goes through [`from_u32`], which
/// rejects surrogates and anything above U+10FFFF.
///
/// [`from_u32`]: Codepoint::from_u32
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codepoint(u32);

impl Codepoint {
    /// U+FFFD REPLACEMENT CHARACTER.
    pub const REPLACEMENT: Codepoint = Codepoint(utf8::REPLACEMENT);

    /// U+10FFFF, the largest scalar value.
    pub const MAX: Codepoint = Codepoint(utf8::MAX_SCALAR);

    /// The scalar value `value`, or `None` for surrogates and values past
    /// U+10FFFF.
    pub const fn from_u32(value: u32) -> Option<Self> {
        match char::from_u32(value) {
            Some(_) => Some(Self(value)),
            None => None,
        }
    }

    /// A value produced by the structural decoder. Anything that is not a
    /// scalar value becomes U+FFFD.
    pub(crate) fn from_decoded(value: u32) -> Self {
        Self::from_u32(value).unwrap_or(Self::REPLACEMENT)
    }

    /// The numeric value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Number of bytes in the UTF-8 encoding (1 to 4).
    pub const fn len_utf8(self) -> usize {
        utf8::encoded_len(self.0)
    }

    /// The same value as a `char`.
    pub fn to_char(self) -> char {
        char::from_u32(self.0).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl From<char> for Codepoint {
    fn from(c: char) -> Self {
        Self(u32::from(c))
    }
}

impl From<Codepoint> for char {
    fn from(cp: Codepoint) -> Self {
        cp.to_char()
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}
