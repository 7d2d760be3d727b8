//! Borrowed UTF-8 views and codepoint iteration.

use std::fmt::{self, Write as _};
use std::iter::FusedIterator;

use strand_core::Slice;

use crate::codepoint::Codepoint;
use crate::error::Utf8Error;
use crate::utf8;

/// A borrowed byte range that is valid UTF-8.
///
/// Indexing is by byte, through the same bounds-checked path as
/// [`Slice::get`]. There is no `count()`: walking the [`codepoints`]
/// is O(n) and callers should see that cost.
///
/// [`codepoints`]: Str::codepoints
#[derive(Clone, Copy)]
pub struct Str<'a> {
    slice: Slice<'a, u8>,
}

impl<'a> Str<'a> {
    /// View `bytes` as a string, validating them first.
    pub fn new(bytes: &'a [u8]) -> Result<Self, Utf8Error> {
        utf8::validate(bytes)?;
        Ok(Self::from_valid(bytes))
    }

    /// Wrap bytes already known to be UTF-8.
    ///
    /// Not re-validated; every entry point has checked the bytes already.
    pub(crate) fn from_valid(bytes: &'a [u8]) -> Self {
        Self {
            slice: Slice::new(bytes),
        }
    }

    /// Pointer to the first byte.
    pub fn begin(&self) -> *const u8 {
        self.slice.begin()
    }

    /// Pointer one past the last byte.
    pub fn end(&self) -> *const u8 {
        self.slice.end()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.slice.len()
    }

    /// Whether the string is empty.
    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// Bounds-checked byte access.
    ///
    /// # Panics
    ///
    /// Terminates if `index >= self.len()`.
    #[track_caller]
    pub fn get(&self, index: usize) -> u8 {
        *self.slice.get(index)
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.slice.elements()
    }

    /// The underlying byte slice view.
    pub fn as_slice(&self) -> Slice<'a, u8> {
        self.slice
    }

    /// Iterate over the decoded codepoints.
    pub fn codepoints(&self) -> Codepoints<'a> {
        Codepoints { iter: self.slice }
    }
}

impl<'a> From<&'a str> for Str<'a> {
    fn from(s: &'a str) -> Self {
        Self::from_valid(s.as_bytes())
    }
}

impl PartialEq for Str<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.slice.memeq(&other.slice)
    }
}

impl Eq for Str<'_> {}

impl PartialEq<str> for Str<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Str<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl fmt::Display for Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cp in self.codepoints() {
            f.write_char(cp.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for cp in self.codepoints() {
            for c in cp.to_char().escape_debug() {
                f.write_char(c)?;
            }
        }
        f.write_char('"')
    }
}

/// Forward-only iterator over the codepoints of a [`Str`].
///
/// Each step decodes one sequence and advances the front of the remaining
/// range by its byte length. Once [`has_next`](Codepoints::has_next) is
/// false, `next` keeps returning `None`.
#[derive(Clone)]
pub struct Codepoints<'a> {
    iter: Slice<'a, u8>,
}

impl<'a> Codepoints<'a> {
    /// Whether another codepoint remains.
    pub fn has_next(&self) -> bool {
        !self.iter.is_empty()
    }

    /// The not-yet-decoded rest of the string.
    pub fn remaining(&self) -> Str<'a> {
        Str { slice: self.iter }
    }
}

impl Iterator for Codepoints<'_> {
    type Item = Codepoint;

    fn next(&mut self) -> Option<Codepoint> {
        let (value, width) = utf8::decode(self.iter.elements())?;
        self.iter = self.iter.tail(width);
        Some(Codepoint::from_decoded(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.iter.len();
        (len.div_ceil(4), Some(len))
    }
}

impl FusedIterator for Codepoints<'_> {}

impl fmt::Debug for Codepoints<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Codepoints").field(&self.remaining()).finish()
    }
}
