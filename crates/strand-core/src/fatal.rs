//! The fatal diagnostic sink.
//!
//! Buffers in this workspace have no recoverable error path: an index past
//! the end or a capacity that cannot be represented ends the program. All
//! such reports funnel through this module so the message format stays
//! uniform. Release builds are compiled with `panic = "abort"`, so these
//! never unwind there.
//!
//! Allocator failure names the operation on stderr and then goes through
//! [`std::alloc::handle_alloc_error`], which aborts directly.

use std::alloc::{handle_alloc_error, Layout};
use std::io::Write;

/// Report an out-of-bounds index and terminate.
#[cold]
#[inline(never)]
#[track_caller]
pub fn out_of_bounds(len: usize, index: usize) -> ! {
    panic!("index out of bounds: the length is {len} but the index is {index}")
}

/// Report a capacity computation that overflowed `usize` (or `isize` once
/// turned into a layout) and terminate.
#[cold]
#[inline(never)]
#[track_caller]
pub fn capacity_overflow(operation: &'static str) -> ! {
    panic!("{operation}: capacity overflow")
}

/// Report that the allocator refused `layout` and terminate.
///
/// The message goes straight to stderr, bypassing test output capture,
/// before the abort.
#[cold]
#[inline(never)]
pub fn alloc_failed(operation: &'static str, layout: Layout) -> ! {
    let _ = writeln!(
        std::io::stderr(),
        "{}",
        alloc_failed_message(operation, layout.size())
    );
    handle_alloc_error(layout)
}

fn alloc_failed_message(operation: &str, size: usize) -> String {
    format!("{operation}: memory allocation of {size} bytes failed")
}
