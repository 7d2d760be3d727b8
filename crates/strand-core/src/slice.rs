//! Non-owning, bounds-checked views over contiguous elements.
//!
//! A [`Slice`] is the `[begin, end)` range of some buffer owned elsewhere.
//! It never allocates and is never freed. Its lifetime is the borrow of the
//! owner, so a view taken from a [`Dynarray`](crate::Dynarray) cannot be
//! used after the dynarray grows, shrinks or is dropped.

use std::cmp::Ordering;
use std::fmt;

use crate::fatal;

/// A borrowed `[begin, end)` range of `T`.
///
/// Indexing through [`get`](Slice::get) is bounds-checked; an index at or
/// past the end terminates with a diagnostic naming both the length and
/// the index.
pub struct Slice<'a, T> {
    elements: &'a [T],
}

impl<'a, T> Slice<'a, T> {
    /// View `elements` as a slice.
    #[inline]
    pub const fn new(elements: &'a [T]) -> Self {
        Self { elements }
    }

    /// Pointer to the first element (inclusive bound).
    #[inline]
    pub fn begin(&self) -> *const T {
        self.elements.as_ptr_range().start
    }

    /// Pointer one past the last element (exclusive bound).
    #[inline]
    pub fn end(&self) -> *const T {
        self.elements.as_ptr_range().end
    }

    /// Number of elements between the bounds.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the range is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Bounds-checked element access.
    ///
    /// # Panics
    ///
    /// Terminates if `index >= self.len()`.
    #[inline]
    #[track_caller]
    pub fn get(&self, index: usize) -> &'a T {
        match self.elements.get(index) {
            Some(element) => element,
            None => fatal::out_of_bounds(self.len(), index),
        }
    }

    /// The view from element `from` to the end.
    ///
    /// `from == self.len()` yields an empty view.
    ///
    /// # Panics
    ///
    /// Terminates if `from > self.len()`.
    #[track_caller]
    pub fn tail(&self, from: usize) -> Self {
        match self.elements.get(from..) {
            Some(rest) => Self::new(rest),
            None => fatal::out_of_bounds(self.len(), from),
        }
    }

    /// The underlying elements as a standard slice.
    #[inline]
    pub fn elements(&self) -> &'a [T] {
        self.elements
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.elements.iter()
    }
}

impl<T: bytemuck::NoUninit> Slice<'_, T> {
    /// The raw bytes of the range.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.elements)
    }

    /// `memcmp`-style ordering.
    ///
    /// Byte length decides first (shorter orders before longer); ranges of
    /// equal length are then compared byte by byte. `NoUninit` rules out
    /// padding bytes, so two logically equal values always compare equal.
    pub fn memcmp(&self, other: &Slice<'_, T>) -> Ordering {
        let (lhs, rhs) = (self.as_bytes(), other.as_bytes());
        lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
    }

    /// Byte-wise equality: identical length and identical bytes.
    pub fn memeq(&self, other: &Slice<'_, T>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<T> Clone for Slice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

impl<'a, T> From<&'a [T]> for Slice<'a, T> {
    fn from(elements: &'a [T]) -> Self {
        Self::new(elements)
    }
}

impl<'a, T> IntoIterator for Slice<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Slice<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_span_all_elements() {
        let data = [1u32, 2, 3];
        let s = Slice::new(&data);
        assert_eq!(s.len(), 3);
        assert_eq!(s.end() as usize - s.begin() as usize, 12);
    }

    #[test]
    fn get_last_element() {
        let data = [1u32, 2, 3];
        assert_eq!(*Slice::new(&data).get(2), 3);
    }

    #[test]
    #[should_panic(expected = "index out of bounds: the length is 3 but the index is 3")]
    fn get_at_len_is_fatal() {
        let data = [1u32, 2, 3];
        Slice::new(&data).get(3);
    }

    #[test]
    fn empty_slice_has_equal_bounds() {
        let s: Slice<'_, u64> = Slice::new(&[]);
        assert!(s.is_empty());
        assert_eq!(s.begin(), s.end());
    }

    #[test]
    fn tail_drops_prefix() {
        let data = [1u8, 2, 3, 4];
        let s = Slice::new(&data);
        assert_eq!(s.tail(1).elements(), &[2, 3, 4]);
        assert!(s.tail(4).is_empty());
    }

    #[test]
    #[should_panic(expected = "index out of bounds: the length is 4 but the index is 5")]
    fn tail_past_end_is_fatal() {
        let data = [1u8, 2, 3, 4];
        Slice::new(&data).tail(5);
    }

    #[test]
    fn memcmp_orders_by_length_first() {
        let short = [9u8, 9];
        let long = [0u8, 0, 0];
        assert_eq!(Slice::new(&short).memcmp(&Slice::new(&long)), Ordering::Less);
        assert_eq!(Slice::new(&long).memcmp(&Slice::new(&short)), Ordering::Greater);
    }

    #[test]
    fn memcmp_then_compares_bytes() {
        let a = [1u8, 2, 3];
        let b = [1u8, 2, 4];
        assert_eq!(Slice::new(&a).memcmp(&Slice::new(&b)), Ordering::Less);
        assert_eq!(Slice::new(&a).memcmp(&Slice::new(&a)), Ordering::Equal);
    }

    #[test]
    fn memeq_requires_identical_length() {
        let a = [1u16, 2];
        let b = [1u16, 2, 0];
        assert!(!Slice::new(&a).memeq(&Slice::new(&b)));
        assert!(Slice::new(&a).memeq(&Slice::new(&[1u16, 2])));
    }

    #[test]
    fn copies_share_the_same_range() {
        let data = [5i32, 6];
        let a = Slice::new(&data);
        let b = a;
        assert_eq!(a.begin(), b.begin());
        assert_eq!(a.iter().sum::<i32>(), 11);
    }
}
