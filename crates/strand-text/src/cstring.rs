//! Owned, null-terminated UTF-8 strings.

use std::ffi::{c_char, CStr};
use std::fmt;

use strand_core::Dynarray;

use crate::codepoint::Codepoint;
use crate::error::Utf8Error;
use crate::str::{Codepoints, Str};
use crate::utf8;

/// An owned UTF-8 string that always ends in a null byte.
///
/// Two invariants hold after every public call:
///
/// 1. the content is valid UTF-8;
/// 2. the last byte of the backing buffer is `0x00`, and that byte is not
///    part of the content seen through [`as_str`](Cstring::as_str).
///
/// So the buffer can be handed to anything expecting a C string via
/// [`as_cstr`](Cstring::as_cstr) without copying.
///
/// Convenience operations with hidden costs (a character count, for one)
/// are left out on purpose; walk [`codepoints`](Cstring::codepoints)
/// instead.
///
/// # Example
///
/// ```
/// use strand_text::{Codepoint, Cstring};
///
/// let mut greeting = Cstring::is("Hello, ");
/// greeting.push(Codepoint::from('世'));
/// greeting.extend_str("界!");
/// assert_eq!(greeting.as_cstr().to_bytes(), "Hello, 世界!".as_bytes());
/// ```
#[derive(Clone)]
pub struct Cstring {
    /// Content bytes followed by exactly one trailing `0x00`.
    buf: Dynarray<u8>,
}

impl Cstring {
    /// An empty string. The backing buffer holds just the terminator.
    pub fn new() -> Self {
        let mut buf = Dynarray::new();
        buf.push(0);
        Self { buf }
    }

    /// A new string with the content of `source`.
    pub fn is(source: &str) -> Self {
        let mut s = Self::new();
        s.extend_str(source);
        s
    }

    /// A new string with the content of a C string, which must be UTF-8.
    pub fn from_cstr(source: &CStr) -> Result<Self, Utf8Error> {
        let mut s = Self::new();
        s.extend_cstr(source)?;
        Ok(s)
    }

    /// Append the bytes of a C string, excluding its terminator.
    ///
    /// The bytes are validated first; on error `self` is unchanged.
    pub fn extend_cstr(&mut self, source: &CStr) -> Result<(), Utf8Error> {
        let bytes = source.to_bytes();
        utf8::validate(bytes)?;
        self.extend_bytes(bytes);
        Ok(())
    }

    /// Append a string slice.
    pub fn extend_str(&mut self, source: &str) {
        self.extend_bytes(source.as_bytes());
    }

    /// Append a borrowed UTF-8 view.
    pub fn extend(&mut self, source: Str<'_>) {
        self.extend_bytes(source.as_bytes());
    }

    /// Encode `ch` as UTF-8 and append it.
    ///
    /// Each encoded byte goes through the buffer's single-element growth.
    pub fn push(&mut self, ch: Codepoint) {
        let mut encoded = [0; 4];
        let n = utf8::encode(ch.value(), &mut encoded);
        self.unterminate();
        for &byte in &encoded[..n] {
            self.buf.push(byte);
        }
        self.buf.push(0);
    }

    /// Bounds-checked byte access into the content.
    ///
    /// # Panics
    ///
    /// Terminates if `index >= self.len()`; the terminator is not
    /// addressable.
    #[track_caller]
    pub fn get(&self, index: usize) -> u8 {
        self.as_str().get(index)
    }

    /// Length of the content in bytes, excluding the terminator.
    pub fn len(&self) -> usize {
        self.buf.len() - 1
    }

    /// Whether the content is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The buffer as a C string.
    ///
    /// A pushed U+0000 ends the C string early, as it would for any
    /// consumer of null-terminated data.
    pub fn as_cstr(&self) -> &CStr {
        CStr::from_bytes_until_nul(self.as_bytes_with_nul()).unwrap_or_default()
    }

    /// Raw pointer to the null-terminated buffer.
    ///
    /// Valid until `self` is mutated or dropped.
    pub fn as_ptr(&self) -> *const c_char {
        self.buf.as_ptr().cast()
    }

    /// The content, excluding the terminator.
    pub fn as_str(&self) -> Str<'_> {
        Str::from_valid(&self.as_bytes_with_nul()[..self.len()])
    }

    /// The content followed by the terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.buf.as_slice().elements()
    }

    /// Iterate over the codepoints of the content.
    pub fn codepoints(&self) -> Codepoints<'_> {
        self.as_str().codepoints()
    }

    /// Remove the terminator, re-append it after `bytes`.
    fn extend_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        self.unterminate();
        self.buf.extend(bytes);
        self.buf.push(0);
    }

    fn unterminate(&mut self) {
        let terminator = self.buf.pop();
        debug_assert_eq!(terminator, Some(0));
    }
}

impl Default for Cstring {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for Cstring {
    fn from(source: &str) -> Self {
        Self::is(source)
    }
}

impl FromIterator<Codepoint> for Cstring {
    fn from_iter<I: IntoIterator<Item = Codepoint>>(iter: I) -> Self {
        let mut s = Self::new();
        for cp in iter {
            s.push(cp);
        }
        s
    }
}

impl PartialEq for Cstring {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Cstring {}

impl PartialEq<str> for Cstring {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<&str> for Cstring {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Write for Cstring {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.extend_str(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.push(Codepoint::from(c));
        Ok(())
    }
}

impl fmt::Display for Cstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_str(), f)
    }
}

impl fmt::Debug for Cstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_str(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strand_test_utils::assert_terminated;

    #[test]
    fn new_holds_only_the_terminator() {
        let s = Cstring::new();
        assert_terminated(s.as_bytes_with_nul(), b"");
        assert!(s.is_empty());
        assert_eq!(s.as_str().len(), 0);
    }

    #[test]
    fn is_copies_content() {
        let s = Cstring::is("abc");
        assert_terminated(s.as_bytes_with_nul(), b"abc");
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn extend_keeps_one_terminator() {
        let mut s = Cstring::is("Hello, ");
        s.extend_str("世界!");
        assert_terminated(s.as_bytes_with_nul(), "Hello, 世界!".as_bytes());
        assert_eq!(s, Cstring::is("Hello, 世界!"));
    }

    #[test]
    fn extend_with_nothing_changes_nothing() {
        let mut s = Cstring::is("x");
        let cap = s.buf.capacity_bytes();
        s.extend_str("");
        assert_terminated(s.as_bytes_with_nul(), b"x");
        assert_eq!(s.buf.capacity_bytes(), cap);
    }

    #[test]
    fn extend_cstr_rejects_invalid_bytes() {
        let mut s = Cstring::is("ok");
        let bad = CStr::from_bytes_with_nul(&[b'a', 0xC3, 0x28, 0]).unwrap();
        let err = s.extend_cstr(bad).unwrap_err();
        assert_eq!(err.valid_up_to(), 1);
        assert_terminated(s.as_bytes_with_nul(), b"ok");
    }

    #[test]
    fn extend_cstr_appends_valid_bytes() {
        let mut s = Cstring::is("Hello, ");
        s.extend_cstr(c"世界!").unwrap();
        assert_eq!(s, "Hello, 世界!");
    }

    #[test]
    fn push_encodes_each_width() {
        let mut s = Cstring::new();
        for c in ['a', 'é', '世', '😀'] {
            s.push(Codepoint::from(c));
        }
        assert_terminated(s.as_bytes_with_nul(), "aé世😀".as_bytes());
    }

    #[test]
    fn push_grows_by_doubling() {
        let mut s = Cstring::new();
        assert_eq!(s.buf.capacity_bytes(), 4);
        s.push(Codepoint::from('界'));
        // 3 content bytes + terminator fill 4 exactly.
        assert_eq!(s.buf.capacity_bytes(), 4);
        s.push(Codepoint::from('!'));
        assert_eq!(s.buf.capacity_bytes(), 8);
    }

    #[test]
    fn get_excludes_terminator() {
        let s = Cstring::is("ab");
        assert_eq!(s.get(1), b'b');
    }

    #[test]
    fn byte_loop_over_long_string_stays_linear() {
        let text = "ab世".repeat(20_000);
        let s = Cstring::is(&text);
        let sum: u64 = (0..s.len()).map(|i| u64::from(s.get(i))).sum();
        let expected: u64 = text.bytes().map(u64::from).sum();
        assert_eq!(sum, expected);
    }

    #[test]
    #[should_panic(expected = "index out of bounds: the length is 2 but the index is 2")]
    fn get_at_terminator_is_fatal() {
        Cstring::is("ab").get(2);
    }

    #[test]
    fn as_cstr_stops_at_interior_nul() {
        let mut s = Cstring::is("ab");
        s.push(Codepoint::from('\0'));
        s.extend_str("cd");
        assert_eq!(s.as_cstr().to_bytes(), b"ab");
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn as_ptr_points_at_content() {
        let s = Cstring::is("z");
        assert_eq!(s.as_ptr().cast::<u8>(), s.as_str().begin());
    }

    #[test]
    fn write_macro_appends() {
        use std::fmt::Write;
        let mut s = Cstring::is("n = ");
        write!(s, "{}", 42).unwrap();
        assert_eq!(s, "n = 42");
        assert_terminated(s.as_bytes_with_nul(), b"n = 42");
    }

    #[test]
    fn collects_codepoints() {
        let s: Cstring = "héllo".chars().map(Codepoint::from).collect();
        assert_eq!(s, Cstring::is("héllo"));
        assert_eq!(s.codepoints().count(), 5);
    }
}
