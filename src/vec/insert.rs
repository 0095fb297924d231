// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVec};

// Core imports
use core::ops::Range;

impl<T: Copy> FixedVec<'_, T> {
    /// Inserts `count` copies of `value` at `index`, shifting the tail right.
    ///
    /// - Returns [`Error::OutOfBounds`] if `index > len`.
    /// - Returns [`Error::Full`] if `len + count > capacity`.
    ///
    /// The tail `[index..len)` is moved before the new values are written.
    /// On error nothing is changed.
    #[inline]
    pub fn insert(&mut self, index: usize, count: usize, value: T) -> Result<(), Error> {
        let gap = self.open_gap("insert", index, count)?;
        self.buf[gap].fill(value);
        debug_assert!(self.is_valid());
        Ok(())
    }

    /// Inserts the live elements of `other` at `index`.
    ///
    /// Same bounds and capacity rules as [`insert`](Self::insert).
    #[inline]
    pub fn insert_sub(&mut self, index: usize, other: &FixedVec<'_, T>) -> Result<(), Error> {
        self.splice_from("insert_sub", index, other.as_slice())
    }

    /// Inserts all of `src` at `index`.
    ///
    /// Same bounds and capacity rules as [`insert`](Self::insert).
    #[inline]
    pub fn insert_slice(&mut self, index: usize, src: &[T]) -> Result<(), Error> {
        self.splice_from("insert_slice", index, src)
    }

    /// Appends `value`; returns [`Error::Full`] when at capacity.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<(), Error> {
        let gap = self.open_gap("push_back", self.len, 1)?;
        self.buf[gap.start] = value;
        debug_assert!(self.is_valid());
        Ok(())
    }

    pub(super) fn splice_from(
        &mut self,
        op: &'static str,
        index: usize,
        src: &[T],
    ) -> Result<(), Error> {
        let gap = self.open_gap(op, index, src.len())?;
        self.buf[gap].copy_from_slice(src);
        debug_assert!(self.is_valid());
        Ok(())
    }

    /// Shifts `[index..len)` right by `count` and returns the vacated range.
    ///
    /// `len` already includes the gap when this returns.
    fn open_gap(
        &mut self,
        op: &'static str,
        index: usize,
        count: usize,
    ) -> Result<Range<usize>, Error> {
        debug_assert!(self.is_valid());
        let len = self.len;
        if index > len {
            return Err(Error::OutOfBounds);
        }
        let new_len = len.saturating_add(count);
        self.config.admit(op, new_len, self.capacity())?;

        // Shift right: [index..len) -> [index+count..new_len)
        self.buf.copy_within(index..len, index.saturating_add(count));
        self.len = new_len;
        Ok(index..index + count)
    }
}
