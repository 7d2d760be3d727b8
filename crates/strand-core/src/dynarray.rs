//! The exponentially growing owned buffer.
//!
//! [`Dynarray`] tracks its length and capacity in bytes and converts to
//! element counts on demand, so the growth policy in [`growth`](crate::growth)
//! can reason about raw allocation sizes. Elements live in a `RawBuf`;
//! this module is responsible for which of those bytes are initialised.
//!
//! Length only changes through appends ([`push`](Dynarray::push),
//! [`next`](Dynarray::next), [`extend`](Dynarray::extend)) and truncation
//! ([`pop`](Dynarray::pop)). Capacity never shrinks.

#![allow(unsafe_code)]

use std::fmt;
use std::mem::{self, MaybeUninit};
use std::ptr;
use std::slice;

use crate::fatal;
use crate::growth;
use crate::raw::RawBuf;
use crate::slice::Slice;

/// A growable, heap-backed array of `T`.
///
/// Created empty without allocating. The first single-element append
/// allocates room for [`MIN_CAPACITY`](growth::MIN_CAPACITY) elements and
/// every later one doubles the capacity; bulk appends jump straight to the
/// smallest power-of-two byte capacity that fits.
///
/// Zero-sized element types are rejected at compile time.
///
/// # Example
///
/// ```
/// use strand_core::Dynarray;
///
/// let mut arr = Dynarray::new();
/// arr.extend(&[1, 2, 4, 4, 5, 6, 7, 8, 9, 10]);
/// let mut popped = Vec::new();
/// while let Some(n) = arr.pop() {
///     popped.push(n);
/// }
/// assert_eq!(popped, [10, 9, 8, 7, 6, 5, 4, 4, 2, 1]);
/// assert_eq!(arr.len(), 0);
/// ```
pub struct Dynarray<T> {
    buf: RawBuf<T>,
    /// Initialised prefix of `buf`, in bytes. Always a multiple of the
    /// element size and never larger than `buf.cap_bytes()`.
    len_bytes: usize,
}

impl<T> Dynarray<T> {
    const ELEMENT_SIZE: usize = {
        let size = mem::size_of::<T>();
        assert!(size != 0, "Dynarray does not support zero-sized element types");
        size
    };

    /// An empty array. Does not allocate.
    pub const fn new() -> Self {
        let _ = Self::ELEMENT_SIZE;
        Self {
            buf: RawBuf::new(),
            len_bytes: 0,
        }
    }

    /// An empty array with room for exactly `capacity` elements.
    ///
    /// `with_capacity(0)` does not allocate.
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut arr = Self::new();
        let Some(bytes) = capacity.checked_mul(Self::ELEMENT_SIZE) else {
            fatal::capacity_overflow("Dynarray::with_capacity")
        };
        if bytes > 0 {
            arr.buf.grow_to(bytes, "Dynarray::with_capacity");
        }
        arr
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len_bytes / Self::ELEMENT_SIZE
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len_bytes == 0
    }

    /// Number of elements that fit without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.cap_bytes() / Self::ELEMENT_SIZE
    }

    /// Length in bytes.
    #[inline]
    pub fn len_bytes(&self) -> usize {
        self.len_bytes
    }

    /// Allocated capacity in bytes.
    #[inline]
    pub fn capacity_bytes(&self) -> usize {
        self.buf.cap_bytes()
    }

    /// Pointer to the first element.
    ///
    /// Non-null and aligned even when nothing is allocated. Invalidated by
    /// any call that takes `&mut self`.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Reserve the slot for one more element and return it uninitialised.
    ///
    /// Grows by doubling first if the remaining capacity cannot hold an
    /// element. The length already counts the returned slot.
    ///
    /// # Safety
    ///
    /// The caller must write a valid `T` into the slot before the array is
    /// read, mutated again, or dropped. Prefer [`push`](Self::push).
    #[track_caller]
    pub unsafe fn next(&mut self) -> &mut MaybeUninit<T> {
        if !growth::has_room(self.buf.cap_bytes(), self.len_bytes, Self::ELEMENT_SIZE) {
            self.grow_doubling();
        }
        let index = self.len();
        self.len_bytes += Self::ELEMENT_SIZE;
        // SAFETY: the room check (or the growth that followed it) guarantees
        // bytes [len_bytes - size, len_bytes) lie inside the allocation.
        unsafe { &mut *self.buf.as_ptr().add(index).cast::<MaybeUninit<T>>() }
    }

    /// Append one element, doubling the capacity when full.
    #[track_caller]
    pub fn push(&mut self, value: T) {
        // SAFETY: the slot is initialised before anything else touches self.
        unsafe { self.next() }.write(value);
    }

    /// Remove and return the last element.
    ///
    /// Returns `None` for an empty array and leaves it untouched; emptiness
    /// is an ordinary outcome, not a fault.
    pub fn pop(&mut self) -> Option<T> {
        if self.len_bytes == 0 {
            return None;
        }
        self.len_bytes -= Self::ELEMENT_SIZE;
        // SAFETY: the element at the old last index was initialised and is
        // now outside the live range, so moving it out cannot double-drop.
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.len())) })
    }

    /// Append a copy of every element in `items`.
    ///
    /// If the remaining capacity is too small, the array grows once to the
    /// smallest power-of-two byte capacity holding the old capacity plus
    /// the new bytes. An empty `items` is a no-op and never allocates.
    #[track_caller]
    pub fn extend(&mut self, items: &[T])
    where
        T: Copy,
    {
        let additional = mem::size_of_val(items);
        if additional == 0 {
            return;
        }
        let cap_bytes = self.buf.cap_bytes();
        if cap_bytes - self.len_bytes < additional {
            let Some(new_cap) = growth::fit(cap_bytes, additional) else {
                fatal::capacity_overflow("Dynarray::extend")
            };
            self.buf.grow_to(new_cap, "Dynarray::extend");
        }
        // SAFETY: the destination has room for items.len() elements past the
        // current length. `items` is a shared borrow and `self` is borrowed
        // mutably, so the two ranges cannot overlap.
        unsafe {
            ptr::copy_nonoverlapping(
                items.as_ptr(),
                self.buf.as_ptr().add(self.len()),
                items.len(),
            );
        }
        self.len_bytes += additional;
    }

    /// Bounds-checked shared access.
    ///
    /// # Panics
    ///
    /// Terminates if `index >= self.len()`, reporting both numbers.
    #[inline]
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        self.as_slice().get(index)
    }

    /// Bounds-checked mutable access.
    ///
    /// # Panics
    ///
    /// Terminates if `index >= self.len()`, reporting both numbers.
    #[inline]
    #[track_caller]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.as_mut_elements().get_mut(index) {
            Some(element) => element,
            None => fatal::out_of_bounds(len, index),
        }
    }

    /// A view over the live elements, valid until the next mutation.
    #[inline]
    pub fn as_slice(&self) -> Slice<'_, T> {
        Slice::new(self.elements())
    }

    /// The live elements as a mutable standard slice.
    #[inline]
    pub fn as_mut_elements(&mut self) -> &mut [T] {
        // SAFETY: the first len() elements are initialised and owned by self;
        // the pointer is non-null and aligned even when unallocated.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len()) }
    }

    /// Iterate over the live elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements().iter()
    }

    /// Byte-wise equality of the live contents. See [`Slice::memeq`].
    pub fn memeq(&self, other: &Dynarray<T>) -> bool
    where
        T: bytemuck::NoUninit,
    {
        self.as_slice().memeq(&other.as_slice())
    }

    fn elements(&self) -> &[T] {
        // SAFETY: as in as_mut_elements, with a shared borrow.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len()) }
    }

    #[cold]
    #[track_caller]
    fn grow_doubling(&mut self) {
        let Some(new_cap) = growth::doubled(self.buf.cap_bytes(), Self::ELEMENT_SIZE) else {
            fatal::capacity_overflow("Dynarray::next")
        };
        self.buf.grow_to(new_cap, "Dynarray::next");
    }
}

impl<T> Drop for Dynarray<T> {
    fn drop(&mut self) {
        if mem::needs_drop::<T>() {
            // SAFETY: exactly the live elements are dropped, once; RawBuf
            // releases the allocation afterwards.
            unsafe { ptr::drop_in_place(self.as_mut_elements() as *mut [T]) };
        }
    }
}

impl<T> Default for Dynarray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Dynarray<T> {
    fn clone(&self) -> Self {
        let mut arr = Self::with_capacity(self.len());
        for element in self.iter() {
            arr.push(element.clone());
        }
        arr
    }
}

impl<T: fmt::Debug> fmt::Debug for Dynarray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Dynarray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements() == other.elements()
    }
}

impl<T: Eq> Eq for Dynarray<T> {}

impl<T> FromIterator<T> for Dynarray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        for element in iter {
            arr.push(element);
        }
        arr
    }
}

impl<T: Copy> From<&[T]> for Dynarray<T> {
    fn from(items: &[T]) -> Self {
        let mut arr = Self::new();
        arr.extend(items);
        arr
    }
}

impl<'a, T> IntoIterator for &'a Dynarray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build a [`Dynarray`] from a list of elements.
///
/// ```
/// let arr = strand_core::dynarray![1, 2, 3];
/// assert_eq!(arr.len(), 3);
/// assert_eq!(*arr.get(2), 3);
/// ```
#[macro_export]
macro_rules! dynarray {
    () => {
        $crate::Dynarray::new()
    };
    ($($element:expr),+ $(,)?) => {{
        let mut arr = $crate::Dynarray::new();
        $(arr.push($element);)+
        arr
    }};
}
