//! Growable buffers and bounds-checked views.
//!
//! This is the leaf crate of the strand workspace. It provides the owning
//! [`Dynarray`] and the borrowed [`Slice`] that every higher layer (notably
//! the UTF-8 strings in `strand-text`) is built on.
//!
//! # Architecture
//!
//! ```text
//! Dynarray<T> (length in bytes, element type via T)
//! ├── RawBuf<T>   (owned heap block, capacity in bytes; raw.rs)
//! ├── growth      (doubling for push, power-of-two fit for extend)
//! └── Slice<'_, T> (bounds-checked view, tied to the dynarray's borrow)
//! ```
//!
//! # Failure model
//!
//! There is no recoverable error type here. Out-of-bounds indexing and
//! capacity overflow terminate through [`fatal`]; allocator failure is
//! reported there too, naming the operation, before
//! [`std::alloc::handle_alloc_error`] aborts. Everything else (popping an
//! empty array, extending with nothing) is an ordinary return value.
//!
//! # Unsafe code
//!
//! Only `raw.rs` (allocation) and `dynarray.rs` (initialisation tracking)
//! may contain `unsafe`; every block carries a `// SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod dynarray;
pub mod fatal;
pub mod growth;
mod raw;
pub mod slice;

// Public re-exports for the primary API surface.
pub use dynarray::Dynarray;
pub use growth::MIN_CAPACITY;
pub use slice::Slice;
