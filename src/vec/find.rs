// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedVec;

// Core imports
use core::cmp::Ordering;

impl<T: Copy> FixedVec<'_, T> {
    /// Returns the first live element `e` with `compare(value, e) == Equal`.
    ///
    /// A linear scan, available with or without the `search` feature.
    pub fn find<F>(&self, value: &T, mut compare: F) -> Option<&T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.iter().find(|item| compare(value, item) == Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::FixedVec;
    use proptest::prelude::*;

    #[test]
    fn test_find_linear() {
        let mut storage = [5u8, 7, 7, 9];
        let v = FixedVec::from_parts(&mut storage, 3).unwrap();
        let hit = v.find(&7, |a, b| a.cmp(b)).unwrap();
        assert!(core::ptr::eq(hit, &v[1]));
        // Past `len`, so not found.
        assert_eq!(v.find(&9, |a, b| a.cmp(b)), None);
    }

    proptest! {
        #[test]
        fn find_misses_absent_value(
            items in proptest::collection::vec(0..100u16, 0..8),
        ) {
            let mut storage = [0u16; 8];
            let mut v = FixedVec::new(&mut storage);
            v.extend_from_slice(&items).unwrap();
            prop_assert_eq!(v.find(&100, |a, b| a.cmp(b)), None);
        }
    }
}
