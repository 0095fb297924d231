// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVec};

impl<T: Copy> Extend<T> for FixedVec<'_, T> {
    /// Appends items until the vector is full; the rest are left unconsumed.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let remaining = self.spare_capacity();
        if remaining == 0 {
            return;
        }

        for item in iter.into_iter().take(remaining) {
            self.buf[self.len] = item;
            self.len += 1;
        }
    }
}

impl<'s, T: Copy + 's> Extend<&'s T> for FixedVec<'_, T> {
    fn extend<I: IntoIterator<Item = &'s T>>(&mut self, iter: I) {
        Extend::<T>::extend(self, iter.into_iter().copied())
    }
}

impl<T: Copy> FixedVec<'_, T> {
    /// Appends `src` if it fits; otherwise no-op and returns [`Error::Full`].
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error> {
        self.splice_from("extend_from_slice", self.len, src)
    }
}
