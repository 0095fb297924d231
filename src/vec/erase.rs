// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVec};

impl<T: Copy> FixedVec<'_, T> {
    /// Removes the element at `index`, shifting the tail left by one.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`; nothing changes then.
    #[inline]
    pub fn erase(&mut self, index: usize) -> Result<(), Error> {
        self.erase_range(index, 1)
    }

    /// Removes `count` elements starting at `index`, shifting the tail left.
    ///
    /// Requires `index < len` and `index + count <= len`, otherwise returns
    /// [`Error::OutOfBounds`] and changes nothing. A zero `count` at a valid
    /// index is a no-op. Vacated slots past the new length keep their values.
    pub fn erase_range(&mut self, index: usize, count: usize) -> Result<(), Error> {
        debug_assert!(self.is_valid());
        let len = self.len;
        let end = index.checked_add(count).ok_or(Error::OutOfBounds)?;
        if index >= len || end > len {
            return Err(Error::OutOfBounds);
        }

        // Shift left: [end..len) -> [index..len-count)
        if end < len {
            self.buf.copy_within(end..len, index);
        }
        self.len = len - count;

        debug_assert!(self.is_valid());
        Ok(())
    }
}
