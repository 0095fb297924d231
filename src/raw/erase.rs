// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawFixedVec};

impl RawFixedVec<'_> {
    /// Removes the element at `index`, shifting the tail left by one.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`.
    #[inline]
    pub fn erase(&mut self, index: usize) -> Result<(), Error> {
        self.erase_range(index, 1)
    }

    /// Removes `count` elements starting at `index`, shifting the tail left.
    ///
    /// Requires `index < len` and `index + count <= len`, otherwise returns
    /// [`Error::OutOfBounds`] and changes nothing. The bytes of vacated slots
    /// past the new length are left as they were.
    pub fn erase_range(&mut self, index: usize, count: usize) -> Result<(), Error> {
        debug_assert!(self.is_valid());
        let len = self.len;
        let end = index.checked_add(count).ok_or(Error::OutOfBounds)?;
        if index >= len || end > len {
            return Err(Error::OutOfBounds);
        }

        if end < len {
            let tail = self.span(end, len - end);
            let dest = self.span(index, 0).start;
            self.bytes.copy_within(tail, dest);
        }
        self.len = len - count;

        debug_assert!(self.is_valid());
        Ok(())
    }
}
