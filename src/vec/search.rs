// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Comparator-driven binary search and ordering (`search` feature).
//!
//! Comparators are three-way: `compare(a, b)` reports how `a` orders
//! relative to `b`. Lookups always pass the searched-for value first.

// Crate imports
use crate::vec::FixedVec;

// Core imports
use core::cmp::Ordering;

impl<T: Copy> FixedVec<'_, T> {
    /// Binary search over a vector already sorted by `compare`.
    ///
    /// If several elements compare equal, any one of them may be returned.
    pub fn bsearch<F>(&self, value: &T, mut compare: F) -> Option<&T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let live = self.as_slice();
        live.binary_search_by(|item| compare(value, item).reverse())
            .ok()
            .map(|i| &live[i])
    }

    /// Sorts the live elements in place by `compare` (unstable, no allocation).
    #[inline]
    pub fn sort<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        debug_assert!(self.is_valid());
        self.as_mut_slice().sort_unstable_by(compare);
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::FixedVec;
    use proptest::prelude::*;

    fn long_compare(a: &i64, b: &i64) -> core::cmp::Ordering {
        a.cmp(b)
    }

    #[test]
    fn test_sort_then_bsearch() {
        let mut storage = [3i64, -1, 2, 1, 0];
        let mut v = FixedVec::from_parts(&mut storage, 4).unwrap();
        v.sort(long_compare);
        assert_eq!(v.as_slice(), &[-1, 1, 2, 3]);
        assert_eq!(v.bsearch(&2, long_compare), Some(&2));
        assert_eq!(v.bsearch(&0, long_compare), None);
        // The slot past `len` is not part of the sort.
        assert_eq!(v.backing()[4], 0);
    }

    #[test]
    fn test_find_with_custom_comparator() {
        #[derive(Clone, Copy, Debug, PartialEq)]
        struct Entry {
            key: u8,
            payload: u32,
        }

        let mut storage = [
            Entry { key: 2, payload: 20 },
            Entry { key: 1, payload: 10 },
        ];
        let mut v = FixedVec::from_parts(&mut storage, 2).unwrap();
        let by_key = |a: &Entry, b: &Entry| a.key.cmp(&b.key);
        v.sort(by_key);
        let key = Entry { key: 2, payload: 0 };
        assert_eq!(v.bsearch(&key, by_key).map(|e| e.payload), Some(20));
        assert_eq!(v.find(&key, by_key).map(|e| e.payload), Some(20));
    }

    proptest! {
        #[test]
        fn sorted_vec_finds_every_element(
            items in proptest::collection::vec(any::<i32>(), 0..16),
        ) {
            let mut storage = [0i32; 16];
            let mut v = FixedVec::new(&mut storage);
            v.extend_from_slice(&items).unwrap();
            v.sort(|a, b| a.cmp(b));
            prop_assert!(v.windows(2).all(|w| w[0] <= w[1]));
            for x in &items {
                prop_assert_eq!(v.bsearch(x, |a, b| a.cmp(b)), Some(x));
            }
        }
    }
}
