// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawFixedVec};

// Core imports
use core::ops::Range;

impl RawFixedVec<'_> {
    /// Inserts `count` copies of `item` at `index`, shifting the tail right.
    ///
    /// - Returns [`Error::OutOfBounds`] if `index > len`.
    /// - Returns [`Error::Full`] if `len + count > capacity`.
    ///
    /// # Panics
    ///
    /// Panics if `item.len() != size_per_item`.
    pub fn insert(&mut self, index: usize, count: usize, item: &[u8]) -> Result<(), Error> {
        self.expect_item(item);
        let gap = self.open_gap("insert", index, count)?;
        for slot in self.bytes[gap].chunks_exact_mut(self.size_per_item) {
            slot.copy_from_slice(item);
        }
        debug_assert!(self.is_valid());
        Ok(())
    }

    /// Inserts the live elements of `other` at `index`.
    ///
    /// Same bounds and capacity rules as [`insert`](Self::insert).
    ///
    /// # Panics
    ///
    /// Panics if the two containers hold elements of different sizes.
    pub fn insert_sub(&mut self, index: usize, other: &RawFixedVec<'_>) -> Result<(), Error> {
        assert_eq!(
            self.size_per_item, other.size_per_item,
            "cannot insert {}-byte items into a container of {}-byte items",
            other.size_per_item, self.size_per_item
        );
        let gap = self.open_gap("insert_sub", index, other.len)?;
        self.bytes[gap].copy_from_slice(other.as_bytes());
        debug_assert!(self.is_valid());
        Ok(())
    }

    /// Appends `item`; returns [`Error::Full`] when at capacity.
    ///
    /// # Panics
    ///
    /// Panics if `item.len() != size_per_item`.
    #[inline]
    pub fn push_back(&mut self, item: &[u8]) -> Result<(), Error> {
        self.expect_item(item);
        let gap = self.open_gap("push_back", self.len, 1)?;
        self.bytes[gap].copy_from_slice(item);
        debug_assert!(self.is_valid());
        Ok(())
    }

    /// Shifts elements `[index..len)` right by `count` and returns the byte
    /// range of the vacated slots.
    fn open_gap(
        &mut self,
        op: &'static str,
        index: usize,
        count: usize,
    ) -> Result<Range<usize>, Error> {
        debug_assert!(self.is_valid());
        let len = self.len;
        if index > len {
            return Err(Error::OutOfBounds);
        }
        let new_len = len.saturating_add(count);
        self.config.admit(op, new_len, self.capacity)?;

        let tail = self.span(index, len - index);
        let dest = self.span(index.saturating_add(count), 0).start;
        self.bytes.copy_within(tail, dest);
        self.len = new_len;
        Ok(self.span(index, count))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, RawFixedVec};

    #[test]
    fn test_insert_copies_item_count_times() {
        let mut block = [0u8; 12];
        let mut v = RawFixedVec::new(&mut block, 2).unwrap();
        v.push_back(&[1, 1]).unwrap();
        v.push_back(&[4, 4]).unwrap();
        v.insert(1, 3, &[9, 8]).unwrap();
        assert_eq!(v.as_bytes(), &[1, 1, 9, 8, 9, 8, 9, 8, 4, 4]);
        v.insert(5, 0, &[0, 0]).unwrap();
        assert_eq!(v.len(), 5);
        assert_eq!(v.insert(6, 0, &[0, 0]), Err(Error::OutOfBounds));
        assert_eq!(v.insert(0, 2, &[0, 0]), Err(Error::Full));
        assert_eq!(v.insert(0, usize::MAX, &[0, 0]), Err(Error::Full));
        assert_eq!(v.len(), 5);
    }

    #[test]
    fn test_insert_sub_splices_other_block() {
        let mut other_block = [5u8, 5, 5, 6, 6, 6, 0, 0, 0];
        let other = RawFixedVec::from_parts(&mut other_block, 3, 3, 2).unwrap();

        let mut block = [0u8; 12];
        let mut v = RawFixedVec::new(&mut block, 3).unwrap();
        v.push_back(&[1, 1, 1]).unwrap();
        v.insert_sub(0, &other).unwrap();
        assert_eq!(v.as_bytes(), &[5, 5, 5, 6, 6, 6, 1, 1, 1]);
        assert_eq!(v.insert_sub(0, &other), Err(Error::Full));
        assert_eq!(v.insert_sub(4, &other), Err(Error::OutOfBounds));
        assert_eq!(v.len(), 3);
    }

    #[test]
    #[should_panic(expected = "cannot insert 2-byte items")]
    fn test_insert_sub_with_mismatched_sizes_panics() {
        let mut a_block = [0u8; 8];
        let mut b_block = [0u8; 8];
        let mut a = RawFixedVec::new(&mut a_block, 4).unwrap();
        let b = RawFixedVec::from_parts(&mut b_block, 2, 4, 1).unwrap();
        let _ = a.insert_sub(0, &b);
    }

    #[test]
    #[should_panic(expected = "item is 1 bytes")]
    fn test_push_back_with_short_item_panics() {
        let mut block = [0u8; 8];
        let mut v = RawFixedVec::new(&mut block, 4).unwrap();
        let _ = v.push_back(&[1]);
    }
}
