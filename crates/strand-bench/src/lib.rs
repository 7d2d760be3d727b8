//! Input builders shared by the strand benchmarks.
//!
//! - [`ramp`]: `0..n` as a dynarray, for bulk-copy benchmarks
//! - [`mixed_text`]: text cycling through every UTF-8 encoding width
//! - [`mixed_codepoints`]: the same text as codepoints, for push loops

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strand_core::Dynarray;
use strand_text::Codepoint;

/// One character of each encoded width: 1, 2, 3 and 4 bytes.
const WIDTHS: [char; 4] = ['a', 'é', '世', '😀'];

/// `0..n` pushed one at a time.
pub fn ramp(n: u32) -> Dynarray<u32> {
    (0..n).collect()
}

/// `chars` characters cycling through 1- to 4-byte encodings.
pub fn mixed_text(chars: usize) -> String {
    WIDTHS.iter().cycle().take(chars).collect()
}

/// [`mixed_text`] as codepoints.
pub fn mixed_codepoints(chars: usize) -> Vec<Codepoint> {
    WIDTHS
        .iter()
        .cycle()
        .take(chars)
        .map(|&c| Codepoint::from(c))
        .collect()
}
