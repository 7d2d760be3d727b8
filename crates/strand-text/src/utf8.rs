//! UTF-8 bit packing.
//!
//! Three layers with deliberately different strictness:
//!
//! - [`encode`] packs any value below `0x200000` into 1–4 bytes using the
//!   standard layout and rejects nothing, surrogates included.
//! - [`decode`] is its structural inverse. It checks only the lead/continuation
//!   tags, and answers malformed input with U+FFFD and a one-byte advance so
//!   that iteration always makes progress.
//! - [`validate`] is the strict checker (no overlong forms, no surrogates,
//!   nothing above U+10FFFF) used wherever untrusted bytes become a string.

use crate::error::Utf8Error;

/// Largest Unicode scalar value.
pub const MAX_SCALAR: u32 = 0x10_FFFF;

/// U+FFFD REPLACEMENT CHARACTER, produced by [`decode`] for malformed input.
pub const REPLACEMENT: u32 = 0xFFFD;

const MAX_ONE_BYTE: u32 = 0x80;
const MAX_TWO_BYTE: u32 = 0x800;
const MAX_THREE_BYTE: u32 = 0x1_0000;

const TAG_CONT: u8 = 0b1000_0000;
const TAG_TWO: u8 = 0b1100_0000;
const TAG_THREE: u8 = 0b1110_0000;
const TAG_FOUR: u8 = 0b1111_0000;
const CONT_MASK: u8 = 0b0011_1111;

/// Number of bytes [`encode`] produces for `value`.
#[inline]
pub const fn encoded_len(value: u32) -> usize {
    if value < MAX_ONE_BYTE {
        1
    } else if value < MAX_TWO_BYTE {
        2
    } else if value < MAX_THREE_BYTE {
        3
    } else {
        4
    }
}

/// Encode `value` into `out`, returning the number of bytes written.
///
/// The most significant bits go into the lead byte (`0xxxxxxx`, `110xxxxx`,
/// `1110xxxx` or `11110xxx`), followed by `10xxxxxx` continuation bytes of
/// six bits each. No validation is performed: surrogates encode to their
/// three-byte pattern, and bits above the 21st are discarded.
pub fn encode(value: u32, out: &mut [u8; 4]) -> usize {
    let cont = |shift: u32| TAG_CONT | ((value >> shift) as u8 & CONT_MASK);
    match encoded_len(value) {
        1 => {
            out[0] = value as u8;
            1
        }
        2 => {
            out[0] = TAG_TWO | (value >> 6) as u8;
            out[1] = cont(0);
            2
        }
        3 => {
            out[0] = TAG_THREE | (value >> 12) as u8;
            out[1] = cont(6);
            out[2] = cont(0);
            3
        }
        _ => {
            out[0] = TAG_FOUR | ((value >> 18) as u8 & 0b0000_0111);
            out[1] = cont(12);
            out[2] = cont(6);
            out[3] = cont(0);
            4
        }
    }
}

/// Decode the first sequence of `bytes`.
///
/// Returns the value and the number of bytes it occupied, or `None` for
/// empty input. A sequence with a bad lead byte, a missing byte or a
/// continuation byte without the `10` tag yields `(REPLACEMENT, 1)`.
pub fn decode(bytes: &[u8]) -> Option<(u32, usize)> {
    let lead = *bytes.first()?;
    let (width, mut value) = match lead {
        0x00..=0x7F => return Some((u32::from(lead), 1)),
        0xC0..=0xDF => (2, u32::from(lead & 0b0001_1111)),
        0xE0..=0xEF => (3, u32::from(lead & 0b0000_1111)),
        0xF0..=0xF7 => (4, u32::from(lead & 0b0000_0111)),
        _ => return Some((REPLACEMENT, 1)),
    };
    let Some(tail) = bytes.get(1..width) else {
        return Some((REPLACEMENT, 1));
    };
    for &byte in tail {
        if byte & !CONT_MASK != TAG_CONT {
            return Some((REPLACEMENT, 1));
        }
        value = (value << 6) | u32::from(byte & CONT_MASK);
    }
    Some((value, width))
}

/// Check that `bytes` is well-formed UTF-8.
///
/// On failure the error reports how many leading bytes were valid and how
/// long the offending sequence is (`None` when the input simply ends in the
/// middle of a sequence), matching `core::str::from_utf8`.
pub fn validate(bytes: &[u8]) -> Result<(), Utf8Error> {
    let mut index = 0;
    while index < bytes.len() {
        let lead = bytes[index];
        let width = match lead {
            0x00..=0x7F => {
                index += 1;
                continue;
            }
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Err(Utf8Error::new(index, Some(1))),
        };
        for offset in 1..width {
            let Some(&byte) = bytes.get(index + offset) else {
                return Err(Utf8Error::new(index, None));
            };
            let ok = if offset == 1 {
                second_byte_ok(lead, byte)
            } else {
                byte & !CONT_MASK == TAG_CONT
            };
            if !ok {
                return Err(Utf8Error::new(index, Some(offset as u8)));
            }
        }
        index += width;
    }
    Ok(())
}

/// The second byte carries the range restrictions that exclude overlong
/// forms, surrogates and values past U+10FFFF.
fn second_byte_ok(lead: u8, byte: u8) -> bool {
    matches!(
        (lead, byte),
        (0xC2..=0xDF, 0x80..=0xBF)
            | (0xE0, 0xA0..=0xBF)
            | (0xE1..=0xEC, 0x80..=0xBF)
            | (0xED, 0x80..=0x9F)
            | (0xEE..=0xEF, 0x80..=0xBF)
            | (0xF0, 0x90..=0xBF)
            | (0xF1..=0xF3, 0x80..=0xBF)
            | (0xF4, 0x80..=0x8F)
    )
}
