// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVec};

impl<T: Copy> FixedVec<'_, T> {
    /// Replaces the contents of `self` with the live elements of `src`.
    ///
    /// Returns [`Error::Full`] if `src.len() > self.capacity()`; nothing
    /// changes then. The capacity of `self` is kept. The two vectors cannot
    /// share storage: each holds an exclusive borrow of its own buffer.
    pub fn copy_from(&mut self, src: &FixedVec<'_, T>) -> Result<(), Error> {
        debug_assert!(self.is_valid() && src.is_valid());
        let n = src.len();
        self.config.admit("copy", n, self.capacity())?;
        self.buf[..n].copy_from_slice(src.as_slice());
        self.len = n;
        debug_assert!(self.is_valid());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, FixedVec};

    #[test]
    fn test_copy_from() {
        let mut src_storage = [1i64, 3, 0];
        let src = FixedVec::from_parts(&mut src_storage, 2).unwrap();

        let mut storage = [9i64; 4];
        let mut dest = FixedVec::from_parts(&mut storage, 4).unwrap();
        dest.copy_from(&src).unwrap();
        assert_eq!(dest.as_slice(), &[1, 3]);
        assert_eq!(dest.capacity(), 4);

        let mut small_storage = [0i64; 1];
        let mut small = FixedVec::new(&mut small_storage);
        assert_eq!(small.copy_from(&src), Err(Error::Full));
        assert!(small.is_empty());
    }
}
