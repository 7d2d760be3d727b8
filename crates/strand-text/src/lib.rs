//! Null-terminated UTF-8 strings on top of strand buffers.
//!
//! [`Cstring`] owns a `Dynarray<u8>` whose last byte is always `0x00`, so
//! it can be passed to C APIs as-is while being appended to like any other
//! growable buffer. [`Str`] is the borrowed counterpart: a byte [`Slice`]
//! known to hold UTF-8, walked one [`Codepoint`] at a time.
//!
//! ```text
//! Cstring ── Dynarray<u8> ── content bytes + 0x00
//!    │ as_str()
//!    ▼
//! Str<'_> ── Slice<'_, u8> ── Codepoints (decode, advance)
//! ```
//!
//! The [`utf8`] module holds the bit-level encoder and decoder; [`fmt`]
//! renders values and whole dynarrays into a `Cstring`.
//!
//! # Validation
//!
//! Text from Rust (`&str`, `char`) is already UTF-8 and is appended without
//! checks. Bytes from anywhere else (a `&[u8]`, a `CStr`) are validated on
//! the way in and rejected with a [`Utf8Error`].
//!
//! [`Slice`]: strand_core::Slice

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codepoint;
pub mod cstring;
pub mod error;
pub mod fmt;
pub mod str;
pub mod utf8;

// Public re-exports for the primary API surface.
pub use codepoint::Codepoint;
pub use cstring::Cstring;
pub use error::Utf8Error;
pub use str::{Codepoints, Str};
