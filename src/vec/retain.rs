// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::FixedVec;

impl<T: Copy> FixedVec<'_, T> {
    /// Retains only the elements specified by the predicate `f`, preserving order.
    ///
    /// Compacts in place; slots past the new length are not cleared.
    #[inline]
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.buf[read]) {
                if write != read {
                    self.buf[write] = self.buf[read];
                }
                write += 1;
            }
        }
        self.len = write;
    }
}
