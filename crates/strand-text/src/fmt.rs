//! Rendering values into a [`Cstring`].
//!
//! Every helper appends to an existing string and never clears it, so
//! output can be built up across several calls. The element formatters
//! plug into [`fmt_dynarray`] as its per-element callback.
//!
//! Writing into a `Cstring` itself never fails. An error can only come from
//! a value's own formatting impl; it is returned to the caller, and the
//! output written before it stays in place (still null-terminated).

use std::fmt::{self, Write as _};

use strand_core::Dynarray;

use crate::cstring::Cstring;

/// Append `{ e0, e1, ... }` to `out`, rendering each element with `each`.
///
/// An empty array renders as `{ }`. Stops at the first element whose
/// callback fails and returns that error.
///
/// ```
/// use strand_core::dynarray;
/// use strand_text::fmt::{fmt_display, fmt_dynarray};
/// use strand_text::Cstring;
///
/// let arr = dynarray![1, 2, 3];
/// let mut out = Cstring::new();
/// fmt_dynarray(&mut out, &arr, fmt_display).unwrap();
/// assert_eq!(out, "{ 1, 2, 3 }");
/// ```
pub fn fmt_dynarray<T, F>(out: &mut Cstring, arr: &Dynarray<T>, mut each: F) -> fmt::Result
where
    F: FnMut(&mut Cstring, &T) -> fmt::Result,
{
    out.extend_str("{ ");
    for (i, element) in arr.iter().enumerate() {
        if i > 0 {
            out.extend_str(", ");
        }
        each(out, element)?;
    }
    out.extend_str(if arr.is_empty() { "}" } else { " }" });
    Ok(())
}

/// Append `value` using its [`Display`](fmt::Display) impl.
pub fn fmt_display<T: fmt::Display + ?Sized>(out: &mut Cstring, value: &T) -> fmt::Result {
    write!(out, "{value}")
}

/// Append `value` using its [`Debug`](fmt::Debug) impl.
pub fn fmt_debug<T: fmt::Debug + ?Sized>(out: &mut Cstring, value: &T) -> fmt::Result {
    write!(out, "{value:?}")
}

/// Append `value` as `0x`-prefixed lowercase hex.
pub fn fmt_hex<T: fmt::LowerHex>(out: &mut Cstring, value: &T) -> fmt::Result {
    write!(out, "{value:#x}")
}

/// Append `value` as `0x`-prefixed uppercase hex.
pub fn fmt_upper_hex<T: fmt::UpperHex>(out: &mut Cstring, value: &T) -> fmt::Result {
    write!(out, "{value:#X}")
}

/// Append `value` as `0o`-prefixed octal.
pub fn fmt_octal<T: fmt::Octal>(out: &mut Cstring, value: &T) -> fmt::Result {
    write!(out, "{value:#o}")
}
