// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawFixedVec};

impl RawFixedVec<'_> {
    /// Replaces the contents of `self` with the live elements of `src`.
    ///
    /// Returns [`Error::Full`] if `src.len() > self.capacity()`. The capacity
    /// and element size of `self` are kept.
    ///
    /// # Panics
    ///
    /// Panics if the two containers hold elements of different sizes.
    pub fn copy_from(&mut self, src: &RawFixedVec<'_>) -> Result<(), Error> {
        debug_assert!(self.is_valid() && src.is_valid());
        assert_eq!(
            self.size_per_item, src.size_per_item,
            "cannot copy {}-byte items into a container of {}-byte items",
            src.size_per_item, self.size_per_item
        );
        self.config.admit("copy", src.len, self.capacity)?;
        let live = self.span(0, src.len);
        self.bytes[live].copy_from_slice(src.as_bytes());
        self.len = src.len;
        debug_assert!(self.is_valid());
        Ok(())
    }
}
