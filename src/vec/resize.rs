// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVec};

impl<T: Copy> FixedVec<'_, T> {
    /// Resizes to `count`, writing `value` into each newly exposed slot.
    ///
    /// Shrinking only lowers `len`. Returns [`Error::Full`] if
    /// `count > capacity`.
    #[inline]
    pub fn resize(&mut self, count: usize, value: T) -> Result<(), Error> {
        self.grow_with("resize", count, |slots| slots.fill(value))
    }

    /// Replaces the contents with `count` copies of `value`.
    ///
    /// Returns [`Error::Full`] if `count > capacity`; nothing changes then.
    #[inline]
    pub fn assign(&mut self, count: usize, value: T) -> Result<(), Error> {
        debug_assert!(self.is_valid());
        self.config.admit("assign", count, self.capacity())?;
        self.buf[..count].fill(value);
        self.len = count;
        debug_assert!(self.is_valid());
        Ok(())
    }

    fn grow_with<F>(&mut self, op: &'static str, count: usize, fill: F) -> Result<(), Error>
    where
        F: FnOnce(&mut [T]),
    {
        debug_assert!(self.is_valid());
        self.config.admit(op, count, self.capacity())?;
        let len = self.len;
        if count > len {
            fill(&mut self.buf[len..count]);
        }
        self.len = count;
        debug_assert!(self.is_valid());
        Ok(())
    }
}

impl<T: Copy + Default> FixedVec<'_, T> {
    /// Resizes to `count`, default-filling new slots.
    ///
    /// With [`Config::without_zero_fill`](crate::Config::without_zero_fill)
    /// the new slots keep whatever the backing buffer already held.
    #[inline]
    pub fn resize_default(&mut self, count: usize) -> Result<(), Error> {
        let zero_fill = self.config.zero_fill();
        self.grow_with("resize", count, |slots| {
            if zero_fill {
                slots.fill(T::default());
            }
        })
    }

    /// Replaces the contents with `count` default values.
    ///
    /// Honours the zero-fill policy like [`resize_default`](Self::resize_default).
    #[inline]
    pub fn assign_default(&mut self, count: usize) -> Result<(), Error> {
        debug_assert!(self.is_valid());
        self.config.admit("assign", count, self.capacity())?;
        if self.config.zero_fill() {
            self.buf[..count].fill(T::default());
        }
        self.len = count;
        debug_assert!(self.is_valid());
        Ok(())
    }
}
