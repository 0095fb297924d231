// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iteration support for [`FixedVec`](crate::FixedVec).
//!
//! - `&FixedVec` and `&mut FixedVec` iterate as slices of the live prefix.
//! - [`for_each`](FixedVec::for_each) and friends drive a visitor that
//!   receives each index with its element and may stop the walk early by
//!   returning [`ControlFlow::Break`].

// Crate imports
use crate::{error::Error, vec::FixedVec};

// Core imports
use core::ops::ControlFlow;

impl<'s, T: Copy> IntoIterator for &'s FixedVec<'_, T> {
    type Item = &'s T;
    type IntoIter = core::slice::Iter<'s, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'s, T: Copy> IntoIterator for &'s mut FixedVec<'_, T> {
    type Item = &'s mut T;
    type IntoIter = core::slice::IterMut<'s, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Copy> FixedVec<'_, T> {
    /// Visits every live element in ascending index order.
    ///
    /// Stops as soon as `visit` returns [`ControlFlow::Break`].
    #[inline]
    pub fn for_each<F>(&mut self, mut visit: F)
    where
        F: FnMut(usize, &mut T) -> ControlFlow<()>,
    {
        debug_assert!(self.is_valid());
        for (i, item) in self.as_mut_slice().iter_mut().enumerate() {
            if visit(i, item).is_break() {
                break;
            }
        }
    }

    /// Visits every live element in descending index order.
    #[inline]
    pub fn for_each_reverse<F>(&mut self, mut visit: F)
    where
        F: FnMut(usize, &mut T) -> ControlFlow<()>,
    {
        debug_assert!(self.is_valid());
        for (i, item) in self.as_mut_slice().iter_mut().enumerate().rev() {
            if visit(i, item).is_break() {
                break;
            }
        }
    }

    /// Visits `count` elements starting at `index`, in ascending order.
    ///
    /// Returns [`Error::OutOfBounds`] unless `index < len` and
    /// `index + count <= len`; `visit` is not called then.
    pub fn for_each_range<F>(
        &mut self,
        index: usize,
        count: usize,
        mut visit: F,
    ) -> Result<(), Error>
    where
        F: FnMut(usize, &mut T) -> ControlFlow<()>,
    {
        debug_assert!(self.is_valid());
        let len = self.len;
        let end = index.checked_add(count).ok_or(Error::OutOfBounds)?;
        if index >= len || end > len {
            return Err(Error::OutOfBounds);
        }
        for (i, item) in (index..end).zip(self.buf[index..end].iter_mut()) {
            if visit(i, item).is_break() {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, FixedVec};
    use alloc::vec::Vec;
    use core::ops::ControlFlow;

    #[test]
    fn test_for_each_visits_in_order_and_stops() {
        let mut storage = [1i32, 2, 3, 4, 0];
        let mut v = FixedVec::from_parts(&mut storage, 4).unwrap();

        let mut seen = Vec::new();
        v.for_each(|i, x| {
            seen.push((i, *x));
            *x *= 10;
            ControlFlow::Continue(())
        });
        assert_eq!(seen, [(0, 1), (1, 2), (2, 3), (3, 4)]);
        assert_eq!(v.as_slice(), &[10, 20, 30, 40]);

        let mut visited = 0;
        v.for_each(|_, x| {
            visited += 1;
            if *x == 20 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_for_each_reverse() {
        let mut storage = [1u8, 2, 3];
        let mut v = FixedVec::from_parts(&mut storage, 3).unwrap();
        let mut seen = Vec::new();
        v.for_each_reverse(|i, x| {
            seen.push((i, *x));
            if i == 1 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(seen, [(2, 3), (1, 2)]);
    }

    #[test]
    fn test_for_each_on_empty_never_calls_visitor() {
        let mut storage = [0u8; 2];
        let mut v = FixedVec::new(&mut storage);
        v.for_each(|_, _| unreachable!());
        v.for_each_reverse(|_, _| unreachable!());
    }

    #[test]
    fn test_for_each_range() {
        let mut storage = [0u16, 1, 2, 3, 4];
        let mut v = FixedVec::from_parts(&mut storage, 5).unwrap();
        let mut seen = Vec::new();
        v.for_each_range(1, 3, |i, x| {
            seen.push((i, *x));
            ControlFlow::Continue(())
        })
        .unwrap();
        assert_eq!(seen, [(1, 1), (2, 2), (3, 3)]);

        let visit = |_: usize, _: &mut u16| -> ControlFlow<()> { unreachable!() };
        assert_eq!(v.for_each_range(5, 0, visit), Err(Error::OutOfBounds));
        assert_eq!(v.for_each_range(3, 3, visit), Err(Error::OutOfBounds));
        assert_eq!(v.for_each_range(4, 0, visit), Ok(()));
    }

    #[test]
    fn test_into_iterator_for_refs() {
        let mut storage = [1i32, 2, 3];
        let mut v = FixedVec::from_parts(&mut storage, 2).unwrap();
        for x in &mut v {
            *x += 1;
        }
        let collected: Vec<i32> = (&v).into_iter().copied().collect();
        assert_eq!(collected, [2, 3]);
    }
}
