//! Capacity arithmetic for [`Dynarray`](crate::Dynarray).
//!
//! Two growth strategies coexist because they serve different call sites:
//!
//! - **Doubling** ([`doubled`]) backs single-element appends. Starting from
//!   [`MIN_CAPACITY`] elements, each growth doubles the byte capacity, which
//!   amortises `push` to O(1).
//! - **Fit** ([`fit`]) backs bulk appends. It jumps straight to the smallest
//!   power of two that holds the old capacity plus the incoming bytes, so a
//!   large `extend` costs one reallocation instead of a chain of doublings.
//!
//! Everything here is pure `usize` arithmetic on byte counts. Overflow is
//! reported as `None` and turned into a fatal diagnostic by the caller.

/// Number of elements allocated by the first doubling growth.
pub const MIN_CAPACITY: usize = 4;

/// Byte capacity after one doubling step.
///
/// From zero this is `MIN_CAPACITY * element_size`; otherwise it is twice
/// the current capacity. Returns `None` if the result does not fit in
/// `usize`.
#[must_use]
pub fn doubled(cap_bytes: usize, element_size: usize) -> Option<usize> {
    if cap_bytes == 0 {
        MIN_CAPACITY.checked_mul(element_size)
    } else {
        cap_bytes.checked_mul(2)
    }
}

/// Byte capacity that fits `additional` more bytes in a single step.
///
/// The result is the smallest power of two that is at least
/// `cap_bytes + additional`. A sum that is already a power of two is
/// returned unchanged.
#[must_use]
pub fn fit(cap_bytes: usize, additional: usize) -> Option<usize> {
    min_pow2(cap_bytes.checked_add(additional)?)
}

/// The smallest power of two that is greater than or equal to `n`.
///
/// `min_pow2(0)` is `Some(1)`. Returns `None` when the next power of two
/// is not representable.
#[must_use]
pub fn min_pow2(n: usize) -> Option<usize> {
    n.checked_next_power_of_two()
}

/// Whether `remaining` bytes can take one more element of `element_size`.
#[inline]
pub(crate) fn has_room(cap_bytes: usize, len_bytes: usize, element_size: usize) -> bool {
    cap_bytes - len_bytes >= element_size
}
