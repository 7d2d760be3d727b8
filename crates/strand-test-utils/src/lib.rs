//! Test fixtures and invariant helpers for strand development.
//!
//! Provides padding-free record types for byte-wise comparison tests, an
//! independently transcribed UTF-8 boundary table, drop-tracking elements,
//! and proptest strategies shared by the buffer and string crates.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    arb_codepoint_value, arb_text, assert_terminated, DropTracker, Pixel, Sample, Tracked,
    UTF8_BOUNDARIES,
};
