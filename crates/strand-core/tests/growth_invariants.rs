//! Growth and indexing invariants of `Dynarray`, checked through the public API.

use proptest::prelude::*;
use strand_core::{dynarray, growth, Dynarray, Slice, MIN_CAPACITY};
use strand_test_utils::{DropTracker, Pixel, Sample};

// ── Concrete scenarios ──────────────────────────────────────────

#[test]
fn pops_come_back_in_reverse() {
    let mut arr = Dynarray::new();
    arr.extend(&[1, 2, 4, 4, 5, 6, 7, 8, 9, 10]);
    let popped: Vec<i32> = std::iter::from_fn(|| arr.pop()).take(10).collect();
    assert_eq!(popped, [10, 9, 8, 7, 6, 5, 4, 4, 2, 1]);
    assert_eq!(arr.len(), 0);
    assert_eq!(arr.pop(), None);
}

#[test]
fn bulk_copy_between_arrays() {
    let mut arr = Dynarray::new();
    for i in 0..100_000 {
        arr.push(i);
    }
    let view = arr.as_slice();

    let mut copy = Dynarray::new();
    copy.extend(view.elements());

    let copy_view = copy.as_slice();
    let window: Vec<i32> = (2345..2356).map(|i| *copy_view.get(i)).collect();
    assert_eq!(window, (2345..2356).collect::<Vec<i32>>());
    assert_eq!(copy.len(), 100_000);
    // One fit-growth straight to the power of two above 400_000 bytes.
    assert_eq!(copy.capacity_bytes(), 524_288);
}

#[test]
fn last_index_is_readable() {
    let arr: Dynarray<u64> = dynarray![3, 1, 4];
    assert_eq!(*arr.get(arr.len() - 1), 4);
}

#[test]
#[should_panic(expected = "index out of bounds: the length is 3 but the index is 3")]
fn index_at_length_is_fatal() {
    let arr: Dynarray<u64> = dynarray![3, 1, 4];
    arr.get(3);
}

#[test]
#[should_panic(expected = "index out of bounds: the length is 0 but the index is 0")]
fn index_into_empty_is_fatal() {
    let arr = Dynarray::<u8>::new();
    arr.get(0);
}

#[test]
fn records_compare_bytewise() {
    let a: Dynarray<Sample> = (0..8).map(Sample::new).collect();
    let b = Dynarray::from(a.as_slice().elements());
    assert!(a.memeq(&b));

    let mut c = b.clone();
    c.get_mut(7).value += 1;
    assert!(!a.memeq(&c));
    assert_ne!(a.as_slice().memcmp(&c.as_slice()), std::cmp::Ordering::Equal);
}

#[test]
fn non_power_of_two_elements_track_capacity_in_bytes() {
    let mut arr = Dynarray::<Sample>::new();
    arr.push(Sample::new(0));
    assert_eq!(arr.capacity_bytes(), MIN_CAPACITY * 12);
    assert_eq!(arr.capacity(), MIN_CAPACITY);

    arr.extend(&[Sample::new(1); 4]);
    // 48 + 48 = 96 bytes, rounded up to 128; 128 / 12 = 10 whole elements.
    assert_eq!(arr.capacity_bytes(), 128);
    assert_eq!(arr.capacity(), 10);
    assert_eq!(arr.len(), 5);
}

#[test]
fn slices_view_current_contents() {
    let mut arr = Dynarray::new();
    arr.extend(&[Pixel::grey(1), Pixel::grey(2)]);
    let first = arr.as_slice();
    assert_eq!(first.len(), 2);
    assert_eq!(first.end() as usize - first.begin() as usize, arr.len_bytes());

    arr.push(Pixel::grey(3));
    let second: Slice<'_, Pixel> = arr.as_slice();
    assert_eq!(second.len(), 3);
    assert_eq!(second.get(2), &Pixel::grey(3));
}

#[test]
fn dropping_releases_every_element() {
    let tracker = DropTracker::new();
    {
        let mut arr = Dynarray::new();
        for id in 0..33 {
            arr.push(tracker.track(id));
        }
        assert_eq!(arr.capacity(), 64);
    }
    assert_eq!(tracker.drops(), 33);
}

// ── Properties ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn appended_elements_read_back(values in proptest::collection::vec(any::<u32>(), 0..500)) {
        let mut arr = Dynarray::new();
        for &v in &values {
            arr.push(v);
        }
        prop_assert_eq!(arr.len(), values.len());
        for (i, &v) in values.iter().enumerate() {
            prop_assert_eq!(*arr.get(i), v);
        }
        prop_assert!(arr.len_bytes() <= arr.capacity_bytes());
    }

    #[test]
    fn push_growth_doubles(count in 1usize..300) {
        let mut arr = Dynarray::<u16>::new();
        let mut cap = arr.capacity_bytes();
        for i in 0..count {
            arr.push(i as u16);
            let new_cap = arr.capacity_bytes();
            if new_cap != cap {
                let expected = if cap == 0 { MIN_CAPACITY * 2 } else { cap * 2 };
                prop_assert_eq!(new_cap, expected);
                cap = new_cap;
            }
        }
    }

    #[test]
    fn extend_growth_fits(
        prefix in 0usize..64,
        chunk in proptest::collection::vec(any::<u8>(), 1..2048),
    ) {
        let mut arr = Dynarray::<u8>::new();
        for i in 0..prefix {
            arr.push(i as u8);
        }
        let old_cap = arr.capacity_bytes();
        let old_len = arr.len_bytes();
        arr.extend(&chunk);
        if old_cap - old_len < chunk.len() {
            let expected = growth::min_pow2(old_cap + chunk.len()).unwrap();
            prop_assert_eq!(arr.capacity_bytes(), expected);
        } else {
            prop_assert_eq!(arr.capacity_bytes(), old_cap);
        }
        prop_assert_eq!(&arr.as_slice().elements()[old_len..], &chunk[..]);
    }

    #[test]
    fn push_then_pop_returns_value(
        values in proptest::collection::vec(any::<i64>(), 0..50),
        x in any::<i64>(),
    ) {
        let mut arr: Dynarray<i64> = values.iter().copied().collect();
        let len = arr.len();
        arr.push(x);
        prop_assert_eq!(arr.pop(), Some(x));
        prop_assert_eq!(arr.len(), len);
    }
}
