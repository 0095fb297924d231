// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{config::Config, error::Error, vec::FixedVec};

impl<'a, T: Copy> FixedVec<'a, T> {
    /// Binds an empty vector to `buf` with the default [`Config`].
    ///
    /// The capacity is `buf.len()`. Existing contents of `buf` are left as
    /// they are and become visible only as the vector grows.
    #[inline]
    pub fn new(buf: &'a mut [T]) -> Self {
        Self {
            buf,
            len: 0,
            config: Config::new(),
        }
    }

    /// Binds `buf`, treating its first `len` elements as live.
    ///
    /// Returns [`Error::InvalidLen`] if `len > buf.len()`.
    #[inline]
    pub fn from_parts(buf: &'a mut [T], len: usize) -> Result<Self, Error> {
        Self::with_config(buf, len, Config::new())
    }

    /// Like [`from_parts`](Self::from_parts), with an explicit [`Config`].
    pub fn with_config(buf: &'a mut [T], len: usize, config: Config) -> Result<Self, Error> {
        if len > buf.len() {
            return Err(Error::InvalidLen);
        }
        let v = Self { buf, len, config };
        debug_assert!(v.is_valid());
        Ok(v)
    }

    /// Ends the binding and hands the whole backing buffer back.
    ///
    /// Nothing is freed or cleared; slots past the former length keep
    /// whatever they held.
    #[inline]
    pub fn release(self) -> &'a mut [T] {
        debug_assert!(self.is_valid());
        self.buf
    }
}

impl<'a, T: Copy> From<&'a mut [T]> for FixedVec<'a, T> {
    /// Same as [`FixedVec::new`]: the vector starts empty.
    fn from(buf: &'a mut [T]) -> Self {
        Self::new(buf)
    }
}

impl<'a, T: Copy, const N: usize> From<&'a mut [T; N]> for FixedVec<'a, T> {
    fn from(buf: &'a mut [T; N]) -> Self {
        Self::new(buf)
    }
}
