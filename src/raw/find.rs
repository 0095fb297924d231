// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::raw::RawFixedVec;

// Core imports
use core::cmp::Ordering;

impl RawFixedVec<'_> {
    /// Returns the first live element `e` with `compare(value, e) == Equal`.
    ///
    /// `value` is handed to `compare` as given; it does not need to be a
    /// whole element if the comparator only looks at a key prefix.
    pub fn find<F>(&self, value: &[u8], mut compare: F) -> Option<&[u8]>
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        self.chunks()
            .find(|item| compare(value, item) == Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::RawFixedVec;

    #[test]
    fn test_find_by_key_prefix() {
        let mut block = [1u8, b'a', 2, b'b', 3, b'c'];
        let v = RawFixedVec::from_parts(&mut block, 2, 3, 3).unwrap();
        let hit = v.find(&[2], |key, item| key[0].cmp(&item[0]));
        assert_eq!(hit, Some(&[2u8, b'b'][..]));
        assert_eq!(v.find(&[9], |key, item| key[0].cmp(&item[0])), None);
    }

    #[test]
    fn test_find_ignores_spare_slots() {
        let mut block = [1u8, 2, 3, 4];
        let v = RawFixedVec::from_parts(&mut block, 2, 2, 1).unwrap();
        assert_eq!(v.find(&[3, 4], |a, b| a.cmp(b)), None);
        assert_eq!(v.find(&[1, 2], |a, b| a.cmp(b)), Some(&[1u8, 2][..]));
    }
}
