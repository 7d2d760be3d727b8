//! Strand: growable buffers, bounds-checked slices and null-terminated
//! UTF-8 strings.
//!
//! This is the facade crate that re-exports the public API of the strand
//! sub-crates. For most users, adding `strand` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strand::prelude::*;
//!
//! let mut numbers = dynarray![1, 2, 3];
//! numbers.push(4);
//! assert_eq!(*numbers.as_slice().get(3), 4);
//!
//! let mut text = Cstring::is("Hello, ");
//! text.extend(Str::from("世界"));
//! text.push(Codepoint::from('!'));
//! assert_eq!(text.as_cstr(), c"Hello, 世界!");
//!
//! use strand::text::fmt::{fmt_display, fmt_dynarray};
//! let mut rendered = Cstring::new();
//! fmt_dynarray(&mut rendered, &numbers, fmt_display).unwrap();
//! assert_eq!(rendered, "{ 1, 2, 3, 4 }");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`buffer`] | `strand-core` | `Dynarray`, `Slice`, growth policy, fatal paths |
//! | [`text`] | `strand-text` | `Cstring`, `Str`, `Codepoint`, UTF-8 codec, formatting |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Growable buffers and bounds-checked views (`strand-core`).
///
/// [`buffer::Dynarray`] is the owning array; [`buffer::Slice`] is the
/// borrowed view handed out by [`buffer::Dynarray::as_slice`].
pub use strand_core as buffer;

/// Null-terminated UTF-8 strings (`strand-text`).
///
/// [`text::Cstring`] for owned strings, [`text::Str`] for borrowed ones.
pub use strand_text as text;

pub use strand_core::dynarray;

/// Common imports for typical strand usage.
///
/// ```rust
/// use strand::prelude::*;
/// ```
pub mod prelude {
    // Buffers
    pub use strand_core::{dynarray, Dynarray, Slice};

    // Text
    pub use strand_text::{Codepoint, Codepoints, Cstring, Str, Utf8Error};
}
