// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawFixedVec};

// Core imports
use core::ops::ControlFlow;

impl RawFixedVec<'_> {
    /// Visits every live element in ascending index order.
    ///
    /// Stops as soon as `visit` returns [`ControlFlow::Break`].
    pub fn for_each<F>(&mut self, mut visit: F)
    where
        F: FnMut(usize, &mut [u8]) -> ControlFlow<()>,
    {
        debug_assert!(self.is_valid());
        let size = self.size_per_item;
        for (i, item) in self.as_bytes_mut().chunks_exact_mut(size).enumerate() {
            if visit(i, item).is_break() {
                break;
            }
        }
    }

    /// Visits every live element in descending index order.
    pub fn for_each_reverse<F>(&mut self, mut visit: F)
    where
        F: FnMut(usize, &mut [u8]) -> ControlFlow<()>,
    {
        debug_assert!(self.is_valid());
        let size = self.size_per_item;
        for (i, item) in self.as_bytes_mut().chunks_exact_mut(size).enumerate().rev() {
            if visit(i, item).is_break() {
                break;
            }
        }
    }

    /// Visits `count` elements starting at `index`, in ascending order.
    ///
    /// Returns [`Error::OutOfBounds`] unless `index < len` and
    /// `index + count <= len`.
    pub fn for_each_range<F>(
        &mut self,
        index: usize,
        count: usize,
        mut visit: F,
    ) -> Result<(), Error>
    where
        F: FnMut(usize, &mut [u8]) -> ControlFlow<()>,
    {
        debug_assert!(self.is_valid());
        let len = self.len;
        let end = index.checked_add(count).ok_or(Error::OutOfBounds)?;
        if index >= len || end > len {
            return Err(Error::OutOfBounds);
        }
        let size = self.size_per_item;
        let range = self.span(index, count);
        for (i, item) in (index..end).zip(self.bytes[range].chunks_exact_mut(size)) {
            if visit(i, item).is_break() {
                break;
            }
        }
        Ok(())
    }
}
