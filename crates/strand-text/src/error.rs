//! Text-layer error types.

use std::error::Error;
use std::fmt;

/// Bytes that were expected to be UTF-8 but are not.
///
/// Returned wherever raw bytes enter the string layer ([`Str::new`],
/// [`Cstring::from_cstr`], [`Cstring::extend_cstr`]). Those calls leave
/// their target untouched on error.
///
/// [`Str::new`]: crate::Str::new
/// [`Cstring::from_cstr`]: crate::Cstring::from_cstr
/// [`Cstring::extend_cstr`]: crate::Cstring::extend_cstr
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Utf8Error {
    valid_up_to: usize,
    error_len: Option<u8>,
}

impl Utf8Error {
    pub(crate) const fn new(valid_up_to: usize, error_len: Option<u8>) -> Self {
        Self {
            valid_up_to,
            error_len,
        }
    }

    /// Length of the valid prefix.
    pub fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }

    /// Length of the invalid sequence, or `None` if the input ended in the
    /// middle of an otherwise valid sequence.
    pub fn error_len(&self) -> Option<usize> {
        self.error_len.map(usize::from)
    }
}

impl fmt::Display for Utf8Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = self.valid_up_to;
        match self.error_len {
            Some(len) => write!(
                f,
                "invalid utf-8 sequence of {len} bytes from index {index}"
            ),
            None => write!(f, "incomplete utf-8 byte sequence from index {index}"),
        }
    }
}

impl Error for Utf8Error {}
