// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `FixedVec` type and its inherent API.
//!
//! `FixedVec<'a, T>` is a fixed-capacity vector view for `Copy` types. It
//! borrows a caller-owned buffer for `'a` and tracks a logical length inside
//! it. Methods mirror slice/vector semantics, with explicit capacity checks
//! and fallible variants.
//!
//! No allocation or deallocation is ever performed.

mod copy;
mod erase;
mod extend;
mod find;
mod insert;
mod new;
mod pop;
mod reserve;
mod resize;
mod retain;
#[cfg(feature = "search")]
mod search;
mod slice;

// Crate imports
use crate::{config::Config, error::Error};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A fixed-capacity vector view over caller-owned storage.
///
/// `FixedVec<'a, T>` binds a `&'a mut [T]` and tracks a logical length
/// `len ∈ 0..=capacity`, where `capacity` is the length of the bound slice:
///
/// - the buffer is supplied (and sized) by the caller and is never
///   reallocated, grown, or freed;
/// - `T: Copy` is required, so vacated slots need no drop handling;
/// - only the prefix `buf[..len]` is visible through slice views, indexing,
///   and iteration;
/// - [`release`](FixedVec::release) ends the binding and hands the buffer
///   back.
///
/// # Capacity failures
///
/// Every operation that may need more room ([`reserve`](FixedVec::reserve),
/// [`insert`](FixedVec::insert), [`insert_sub`](FixedVec::insert_sub),
/// [`push_back`](FixedVec::push_back), [`resize`](FixedVec::resize),
/// [`assign`](FixedVec::assign), [`copy_from`](FixedVec::copy_from),
/// [`extend_from_slice`](FixedVec::extend_from_slice)) checks capacity before
/// touching anything. On overflow it returns [`Error::Full`], calls the
/// failure handler from its [`Config`], and leaves the vector unchanged.
///
/// A vector built with [`Config::unchecked`] skips those checks. Overflowing
/// the bound slice then panics on the bounds check instead of returning
/// `Error::Full`.
///
/// # Indices
///
/// All accessors require `index < len`. Out-of-range indices return `None`
/// or [`Error::OutOfBounds`], and `Index`/`IndexMut` panic like slices do.
///
/// # Examples
///
/// ```rust
/// use fixed_block_vec::FixedVec;
///
/// let mut storage = [0u64; 4];
/// let mut v = FixedVec::new(&mut storage);
/// v.push_back(1).unwrap();
/// v.push_back(3).unwrap();
/// v.insert(1, 1, 2).unwrap();
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
///
/// v.erase(0).unwrap();
/// assert_eq!(v.as_slice(), &[2, 3]);
///
/// let storage = v.release();
/// assert_eq!(storage[..2], [2, 3]);
/// ```
pub struct FixedVec<'a, T: Copy> {
    pub(crate) buf: &'a mut [T],
    pub(crate) len: usize,
    pub(crate) config: Config,
}

impl<T: Copy> FixedVec<'_, T> {
    /// Returns the capacity, i.e. the length of the bound buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the current logical length (`0..=capacity`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == capacity`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }

    /// Returns `capacity - len`.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.buf.len() - self.len
    }

    /// Byte size of one element (`size_of::<T>()`).
    #[inline]
    pub const fn size_per_item(&self) -> usize {
        core::mem::size_of::<T>()
    }

    /// The policy this vector was bound with.
    #[inline]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        (i < self.len).then(|| &self.buf[i])
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i < self.len {
            Some(&mut self.buf[i])
        } else {
            None
        }
    }

    /// Overwrites the element at `i` with `value`.
    ///
    /// Returns [`Error::OutOfBounds`] if `i >= len`.
    #[inline]
    pub fn set(&mut self, i: usize, value: T) -> Result<(), Error> {
        let slot = self.get_mut(i).ok_or(Error::OutOfBounds)?;
        *slot = value;
        Ok(())
    }

    /// Element `0`, if any.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Element `len - 1`, if any.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Mutable element `0`, if any.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Mutable element `len - 1`, if any.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let i = self.len.checked_sub(1)?;
        self.get_mut(i)
    }

    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Copy> FixedVec<'_, T> {
    /// Sets `len = 0` without altering the underlying values.
    #[inline]
    pub fn clear(&mut self) {
        debug_assert!(self.is_valid());
        self.len = 0;
    }

    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }

    /// Exchanges the bindings of `self` and `other` in O(1).
    ///
    /// Buffers, lengths, and configs all move; no element is copied.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        debug_assert!(self.is_valid() && other.is_valid());
        core::mem::swap(self, other);
    }

    /// Returns `true` if the vector contains `x` (linear search on the live prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for FixedVec<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: Copy + PartialEq> PartialEq for FixedVec<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Copy + Eq> Eq for FixedVec<'_, T> {}
impl<T: Copy + Ord> Ord for FixedVec<'_, T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: Copy + PartialOrd> PartialOrd for FixedVec<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Copy + Hash> Hash for FixedVec<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Copy> Deref for FixedVec<'_, T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T: Copy> DerefMut for FixedVec<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T: Copy> AsRef<[T]> for FixedVec<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T: Copy> AsMut<[T]> for FixedVec<'_, T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Copy> Borrow<[T]> for FixedVec<'_, T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T: Copy> BorrowMut<[T]> for FixedVec<'_, T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
