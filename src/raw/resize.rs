// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawFixedVec};

// Core imports
use core::ops::Range;

impl RawFixedVec<'_> {
    /// Resizes to `count` elements.
    ///
    /// Newly exposed slots receive a copy of `fill`, or zero bytes when `fill`
    /// is `None` and the container zero-fills (the default). Shrinking only
    /// lowers `len`. Returns [`Error::Full`] if `count > capacity`.
    ///
    /// # Panics
    ///
    /// Panics if `fill` is given and its length differs from `size_per_item`.
    pub fn resize(&mut self, count: usize, fill: Option<&[u8]>) -> Result<(), Error> {
        debug_assert!(self.is_valid());
        if let Some(item) = fill {
            self.expect_item(item);
        }
        self.config.admit("resize", count, self.capacity)?;
        let len = self.len;
        if count > len {
            let fresh = self.span(len, count - len);
            self.fill_slots(fresh, fill);
        }
        self.len = count;
        debug_assert!(self.is_valid());
        Ok(())
    }

    /// Rebinds the block as `count` elements of `size_per_item` bytes and
    /// fills all of them.
    ///
    /// Afterwards `len == capacity == count`. Slots receive `fill`, or zero
    /// bytes when `fill` is `None` and the container zero-fills.
    ///
    /// - [`Error::InvalidItemSize`] if `size_per_item == 0`;
    /// - [`Error::Full`] if `count * size_per_item` exceeds the bytes
    ///   currently bound.
    ///
    /// Nothing changes on error.
    ///
    /// # Panics
    ///
    /// Panics if `fill` is given and its length differs from `size_per_item`.
    pub fn assign(
        &mut self,
        count: usize,
        fill: Option<&[u8]>,
        size_per_item: usize,
    ) -> Result<(), Error> {
        debug_assert!(self.is_valid());
        if let Some(item) = fill {
            assert_eq!(
                item.len(),
                size_per_item,
                "item is {} bytes, assigning {}-byte items",
                item.len(),
                size_per_item
            );
        }
        self.rebind("assign", count, size_per_item, count)?;
        let all = self.span(0, count);
        self.fill_slots(all, fill);
        debug_assert!(self.is_valid());
        Ok(())
    }

    fn fill_slots(&mut self, range: Range<usize>, fill: Option<&[u8]>) {
        match fill {
            Some(item) => {
                for slot in self.bytes[range].chunks_exact_mut(self.size_per_item) {
                    slot.copy_from_slice(item);
                }
            }
            None if self.config.zero_fill() => self.bytes[range].fill(0),
            None => {}
        }
    }
}
