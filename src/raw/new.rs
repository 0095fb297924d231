// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{config::Config, error::Error, raw::RawFixedVec};

impl<'a> RawFixedVec<'a> {
    /// Binds an empty container of `size_per_item`-byte elements to `bytes`.
    ///
    /// The capacity is the number of whole elements that fit.
    /// Returns [`Error::InvalidItemSize`] if `size_per_item == 0`.
    #[inline]
    pub fn new(bytes: &'a mut [u8], size_per_item: usize) -> Result<Self, Error> {
        let capacity = bytes
            .len()
            .checked_div(size_per_item)
            .ok_or(Error::InvalidItemSize)?;
        Self::with_config(bytes, size_per_item, capacity, 0, Config::new())
    }

    /// Binds `bytes` with an explicit capacity and initial length.
    ///
    /// - [`Error::InvalidItemSize`] if `size_per_item == 0`;
    /// - [`Error::InvalidLen`] if `capacity * size_per_item > bytes.len()`
    ///   or `len > capacity`.
    #[inline]
    pub fn from_parts(
        bytes: &'a mut [u8],
        size_per_item: usize,
        capacity: usize,
        len: usize,
    ) -> Result<Self, Error> {
        Self::with_config(bytes, size_per_item, capacity, len, Config::new())
    }

    /// Like [`from_parts`](Self::from_parts), with an explicit [`Config`].
    pub fn with_config(
        bytes: &'a mut [u8],
        size_per_item: usize,
        capacity: usize,
        len: usize,
        config: Config,
    ) -> Result<Self, Error> {
        if size_per_item == 0 {
            return Err(Error::InvalidItemSize);
        }
        let needed = capacity
            .checked_mul(size_per_item)
            .ok_or(Error::InvalidLen)?;
        if needed > bytes.len() || len > capacity {
            return Err(Error::InvalidLen);
        }
        let v = Self {
            bytes,
            size_per_item,
            capacity,
            len,
            config,
        };
        debug_assert!(v.is_valid());
        Ok(v)
    }

    /// Ends the binding and hands the whole block back untouched.
    #[inline]
    pub fn release(self) -> &'a mut [u8] {
        debug_assert!(self.is_valid());
        self.bytes
    }
}
