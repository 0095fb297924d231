// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawFixedVec};

impl RawFixedVec<'_> {
    /// Reinterprets the bound bytes as `capacity` elements of
    /// `size_per_item` bytes each.
    ///
    /// Succeeds only if `capacity * size_per_item` does not exceed the bytes
    /// currently bound (`self.capacity() * self.size_per_item()`). The
    /// logical length is rescaled to the same byte footprint with truncating
    /// division: `len * old_size / size_per_item`. A trailing partial element
    /// is dropped from the count.
    ///
    /// Returns [`Error::Full`] if the region is too small, or if the rescaled
    /// length would not fit `capacity`. Returns [`Error::InvalidItemSize`]
    /// for a zero `size_per_item`. Nothing changes on error.
    ///
    /// Every index refers to a different byte offset afterwards.
    #[doc(alias = "reserve_2")]
    pub fn reinterpret(&mut self, capacity: usize, size_per_item: usize) -> Result<(), Error> {
        debug_assert!(self.is_valid());
        if size_per_item == 0 {
            return Err(Error::InvalidItemSize);
        }
        let bound = self.capacity * self.size_per_item;
        self.config
            .admit("reinterpret", capacity.saturating_mul(size_per_item), bound)?;

        let len = self.len * self.size_per_item / size_per_item;
        self.config.admit("reinterpret", len, capacity)?;

        log::trace!(
            "reinterpret: {} x {}B -> {} x {}B, len {} -> {}",
            self.capacity,
            self.size_per_item,
            capacity,
            size_per_item,
            self.len,
            len
        );
        self.len = len;
        self.capacity = capacity;
        self.size_per_item = size_per_item;
        debug_assert!(self.is_valid());
        Ok(())
    }

    /// Rebinds as `capacity` elements of `size_per_item` bytes and sets the
    /// length to `len`, without rescaling. Callers fill the new range.
    pub(super) fn rebind(
        &mut self,
        op: &'static str,
        capacity: usize,
        size_per_item: usize,
        len: usize,
    ) -> Result<(), Error> {
        if size_per_item == 0 {
            return Err(Error::InvalidItemSize);
        }
        let bound = self.capacity * self.size_per_item;
        self.config
            .admit(op, capacity.saturating_mul(size_per_item), bound)?;
        log::trace!(
            "{op}: rebind as {capacity} x {size_per_item}B, len {} -> {len}",
            self.len
        );
        self.capacity = capacity;
        self.size_per_item = size_per_item;
        self.len = len;
        Ok(())
    }
}
