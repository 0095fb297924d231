// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Comparator-driven binary search and ordering over untyped elements.
//!
//! The element layout is only known at runtime, so sorting works on the byte
//! block directly: an in-place heapsort that swaps whole elements and needs no
//! scratch space.

// Crate imports
use crate::raw::RawFixedVec;

// Core imports
use core::cmp::Ordering;

impl RawFixedVec<'_> {
    /// Binary search over a container already sorted by `compare`.
    ///
    /// If several elements compare equal, any one of them may be returned.
    pub fn bsearch<F>(&self, value: &[u8], mut compare: F) -> Option<&[u8]>
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        let live = self.as_bytes();
        let size = self.size_per_item;
        let (mut lo, mut hi) = (0, self.len);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let item = &live[mid * size..(mid + 1) * size];
            match compare(value, item) {
                Ordering::Less => hi = mid,
                Ordering::Greater => lo = mid + 1,
                Ordering::Equal => return Some(item),
            }
        }
        None
    }

    /// Sorts the live elements in place by `compare` (unstable).
    pub fn sort<F>(&mut self, mut compare: F)
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        debug_assert!(self.is_valid());
        let size = self.size_per_item;
        let len = self.len;
        let live = self.as_bytes_mut();

        for root in (0..len / 2).rev() {
            sift_down(live, size, root, len, &mut compare);
        }
        for end in (1..len).rev() {
            swap_items(live, size, 0, end);
            sift_down(live, size, 0, end, &mut compare);
        }
        debug_assert!(self.is_valid());
    }
}

#[inline]
fn item(live: &[u8], size: usize, i: usize) -> &[u8] {
    &live[i * size..(i + 1) * size]
}

/// Swaps elements `a < b`.
#[inline]
fn swap_items(live: &mut [u8], size: usize, a: usize, b: usize) {
    debug_assert!(a < b);
    let (head, tail) = live.split_at_mut(b * size);
    head[a * size..(a + 1) * size].swap_with_slice(&mut tail[..size]);
}

/// Restores the max-heap property for the subtree at `root` within `[0..end)`.
fn sift_down<F>(live: &mut [u8], size: usize, mut root: usize, end: usize, compare: &mut F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end
            && compare(item(live, size, child), item(live, size, child + 1)) == Ordering::Less
        {
            child += 1;
        }
        if compare(item(live, size, root), item(live, size, child)) != Ordering::Less {
            break;
        }
        swap_items(live, size, root, child);
        root = child;
    }
}
