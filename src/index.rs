// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`FixedVec`](crate::FixedVec).
//!
//! Any slice index (`usize` or a range form) is accepted and applied to the
//! live prefix `[0..len)`, never to the spare tail of the backing buffer.
//! Out-of-bounds and inverted ranges panic, exactly like slices.

// Crate imports
use crate::vec::FixedVec;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T: Copy, I: SliceIndex<[T]>> Index<I> for FixedVec<'_, T> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T: Copy, I: SliceIndex<[T]>> IndexMut<I> for FixedVec<'_, T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::FixedVec;

    #[test]
    fn test_indexing_and_ranges() {
        let mut storage = [0i32, 1, 2, 3, 4, 5];
        let mut v = FixedVec::from_parts(&mut storage, 5).unwrap();

        assert_eq!(v[0], 0);
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[2..], &[2, 3, 4]);
        assert_eq!(&v[..=2], &[0, 1, 2]);
        assert_eq!(&v[..], &[0, 1, 2, 3, 4]);

        v[1..3].copy_from_slice(&[10, 20]);
        v[4] = 40;
        assert_eq!(v.as_slice(), &[0, 10, 20, 3, 40]);
    }

    #[test]
    #[should_panic]
    fn test_index_past_len_panics_even_within_capacity() {
        let mut storage = [1u8, 2, 3];
        let v = FixedVec::from_parts(&mut storage, 2).unwrap();
        let _ = v[2];
    }

    #[test]
    #[should_panic]
    fn test_range_past_len_panics() {
        let mut storage = [1u8, 2, 3];
        let mut v = FixedVec::from_parts(&mut storage, 2).unwrap();
        let _ = &mut v[..=2];
    }

    #[test]
    fn test_empty_ranges_work() {
        let mut storage = [1i32, 2, 3];
        let v = FixedVec::from_parts(&mut storage, 3).unwrap();
        assert_eq!(&v[1..1], &[] as &[i32]);
        assert_eq!(&v[3..3], &[] as &[i32]);
    }
}
