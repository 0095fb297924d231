// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedVec;

impl<T: Copy> FixedVec<'_, T> {
    /// Returns the live prefix as a shared slice (`&self.buf[..len]`).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }

    /// Returns the live prefix as a mutable slice (`&mut self.buf[..len]`).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buf[..len]
    }

    /// Returns the whole bound buffer, including slots past `len`.
    #[inline]
    pub fn backing(&self) -> &[T] {
        self.buf
    }
}
