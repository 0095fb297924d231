// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVec};

impl<T: Copy> FixedVec<'_, T> {
    /// Checks the vector's invariant: `len <= capacity`.
    ///
    /// The borrow guarantees a live backing region, so this is the only
    /// condition a typed vector can break.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.len <= self.buf.len()
    }

    /// Succeeds iff `capacity` elements fit the bound buffer.
    ///
    /// Never grows anything: the capacity was fixed when the buffer was
    /// bound. Returns [`Error::Full`] otherwise (always `Ok` for an
    /// unchecked vector).
    #[inline]
    pub fn reserve(&self, capacity: usize) -> Result<(), Error> {
        debug_assert!(self.is_valid());
        self.config.admit("reserve", capacity, self.capacity())
    }

    /// Does nothing; the capacity cannot change.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        debug_assert!(self.is_valid());
    }
}
