// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedVec;

impl<T: Copy> FixedVec<'_, T> {
    /// Pops the last element if any.
    ///
    /// The vacated slot is not touched.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        debug_assert!(self.is_valid());
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(self.buf[self.len])
        }
    }
}
