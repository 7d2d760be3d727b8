//! Low-level allocation primitives.
//!
//! [`RawBuf`] owns a heap block measured in bytes and nothing else: it
//! neither knows nor cares which bytes hold initialised elements. The
//! allocator boundary (`alloc`, `realloc`, `dealloc`) is only crossed here.
//!
//! Allocation failure is reported through [`fatal::alloc_failed`], which
//! names the operation and never returns. A byte count that cannot form a valid [`Layout`] is reported
//! as a capacity overflow.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::fatal;

/// An owned, possibly absent heap block aligned for `T`.
///
/// `ptr` is `None` exactly when `cap_bytes == 0`.
pub(crate) struct RawBuf<T> {
    ptr: Option<NonNull<T>>,
    cap_bytes: usize,
    _owns: PhantomData<T>,
}

// SAFETY: RawBuf uniquely owns its block, like Box<[T]>; sending or sharing
// it is as safe as sending or sharing the elements it may hold.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: see above; &RawBuf only exposes a read-only pointer.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// An empty buffer. Does not allocate.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: None,
            cap_bytes: 0,
            _owns: PhantomData,
        }
    }

    /// Capacity of the block in bytes.
    #[inline]
    pub(crate) fn cap_bytes(&self) -> usize {
        self.cap_bytes
    }

    /// Start of the block, or a well-aligned dangling pointer when nothing
    /// is allocated. Always non-null, so it is valid for zero-length slices.
    #[inline]
    pub(crate) fn as_ptr(&self) -> *mut T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => NonNull::dangling().as_ptr(),
        }
    }

    /// Reallocate (or first allocate) the block to exactly `new_bytes`.
    ///
    /// Existing contents up to the old capacity are preserved. `new_bytes`
    /// must be larger than the current capacity; capacity never shrinks.
    pub(crate) fn grow_to(&mut self, new_bytes: usize, operation: &'static str) {
        debug_assert!(new_bytes > self.cap_bytes, "RawBuf never shrinks");
        let new_layout = layout_for::<T>(new_bytes, operation);

        let raw = match self.ptr {
            // SAFETY: new_layout has a non-zero size because
            // new_bytes > cap_bytes >= 0.
            None => unsafe { alloc::alloc(new_layout) },
            Some(ptr) => {
                let old_layout = layout_for::<T>(self.cap_bytes, operation);
                // SAFETY: ptr was allocated by this RawBuf with old_layout;
                // new_bytes is non-zero and, having formed new_layout, does
                // not overflow isize when rounded up to the alignment.
                unsafe { alloc::realloc(ptr.as_ptr().cast::<u8>(), old_layout, new_bytes) }
            }
        };

        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => {
                self.ptr = Some(ptr);
                self.cap_bytes = new_bytes;
            }
            None => fatal::alloc_failed(operation, new_layout),
        }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if let Some(ptr) = self.ptr.take() {
            let layout = layout_for::<T>(self.cap_bytes, "RawBuf::drop");
            // SAFETY: ptr came from alloc/realloc with exactly this layout
            // and is released once, here.
            unsafe { alloc::dealloc(ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

fn layout_for<T>(bytes: usize, operation: &'static str) -> Layout {
    match Layout::from_size_align(bytes, mem::align_of::<T>()) {
        Ok(layout) => layout,
        Err(_) => fatal::capacity_overflow(operation),
    }
}
