//! Reusable test fixtures.
//!
//! - [`Pixel`] and [`Sample`]: `#[repr(C)]` records without padding, usable
//!   with the byte-wise `memcmp`/`memeq` comparisons.
//! - [`UTF8_BOUNDARIES`]: the encoding of every length boundary, written out
//!   by hand from the Unicode standard rather than computed.
//! - [`Tracked`] / [`DropTracker`]: elements that count their drops.
//! - [`arb_codepoint_value`] / [`arb_text`]: proptest strategies.

use std::cell::Cell;
use std::rc::Rc;

use bytemuck::{Pod, Zeroable};
use proptest::prelude::*;

/// Four-byte RGBA pixel. No padding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn grey(level: u8) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
            a: 0xFF,
        }
    }
}

/// Twelve-byte record with 4-byte alignment. Its size is not a power of
/// two, which exercises byte capacities that are not element multiples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Sample {
    pub id: u32,
    pub tick: u32,
    pub value: i32,
}

impl Sample {
    pub const fn new(id: u32) -> Self {
        Self {
            id,
            tick: id * 10,
            value: -(id as i32),
        }
    }
}

/// `(scalar value, UTF-8 bytes)` at each encoding-length boundary.
pub const UTF8_BOUNDARIES: &[(u32, &[u8])] = &[
    (0x00, &[0x00]),
    (0x7F, &[0x7F]),
    (0x80, &[0xC2, 0x80]),
    (0x7FF, &[0xDF, 0xBF]),
    (0x800, &[0xE0, 0xA0, 0x80]),
    (0xFFFF, &[0xEF, 0xBF, 0xBF]),
    (0x10000, &[0xF0, 0x90, 0x80, 0x80]),
    (0x10FFFF, &[0xF4, 0x8F, 0xBF, 0xBF]),
];

/// Shared drop counter for [`Tracked`] elements.
#[derive(Clone, Default)]
pub struct DropTracker {
    drops: Rc<Cell<usize>>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new element reporting to this tracker.
    pub fn track(&self, id: u32) -> Tracked {
        Tracked {
            id,
            drops: Rc::clone(&self.drops),
        }
    }

    /// Number of tracked elements dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

/// An element that bumps its [`DropTracker`] when dropped.
#[derive(Debug)]
pub struct Tracked {
    pub id: u32,
    drops: Rc<Cell<usize>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Any Unicode scalar value, with the encoding boundaries over-weighted.
pub fn arb_codepoint_value() -> impl Strategy<Value = u32> {
    prop_oneof![
        1 => proptest::sample::select(
            UTF8_BOUNDARIES.iter().map(|&(v, _)| v).collect::<Vec<_>>()
        ),
        4 => any::<char>().prop_map(u32::from),
    ]
}

/// Arbitrary text without interior NUL bytes.
pub fn arb_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<char>().prop_filter("no NUL", |c| *c != '\0'), 0..64)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Assert that `buffer` is exactly `content` followed by one `0x00`.
#[track_caller]
pub fn assert_terminated(buffer: &[u8], content: &[u8]) {
    assert_eq!(
        buffer.last(),
        Some(&0x00),
        "buffer must end in a null byte: {buffer:?}"
    );
    assert_eq!(&buffer[..buffer.len() - 1], content);
}
