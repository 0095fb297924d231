// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The untyped `RawFixedVec` type.
//!
//! `RawFixedVec<'a>` manipulates a caller-owned byte block as a sequence of
//! `size_per_item`-byte elements. Elements are passed in and out as byte
//! slices of exactly that length.
//!
//! Unlike [`FixedVec`](crate::FixedVec), the element size is a runtime value
//! and may be changed in place by [`reinterpret`](RawFixedVec::reinterpret)
//! and [`assign`](RawFixedVec::assign). Doing so changes what every element
//! index refers to; byte slices taken before the call describe the old
//! layout.

mod copy;
mod erase;
mod find;
mod insert;
mod iter;
mod new;
mod reinterpret;
mod resize;
#[cfg(feature = "search")]
mod search;

// Crate imports
use crate::{config::Config, error::Error};

// Core imports
use core::{fmt, ops::Range, slice::ChunksExact};

/// A fixed-capacity vector of untyped, equally sized elements.
///
/// # Layout and invariants
///
/// - `bytes` is the whole bound block; elements live back to back from
///   offset `0`;
/// - `size_per_item > 0`;
/// - `capacity * size_per_item <= bytes.len()`;
/// - `len <= capacity`.
///
/// [`is_valid`](RawFixedVec::is_valid) checks all of these and every
/// mutating method asserts it (in debug builds) before and after running.
///
/// # Panics
///
/// Methods that take an element as `&[u8]` panic if its length differs from
/// `size_per_item`, and methods combining two containers panic if their
/// element sizes differ. These are programming errors, not capacity
/// conditions.
///
/// # Examples
///
/// ```rust
/// use fixed_block_vec::RawFixedVec;
///
/// let mut block = [0u8; 32];
/// let mut v = RawFixedVec::new(&mut block, 8).unwrap();
/// assert_eq!(v.capacity(), 4);
/// v.push_back(&1u64.to_ne_bytes()).unwrap();
/// v.push_back(&2u64.to_ne_bytes()).unwrap();
///
/// // View the same bytes as 4-byte elements.
/// v.reinterpret(8, 4).unwrap();
/// assert_eq!(v.len(), 4);
/// assert_eq!(v.capacity(), 8);
/// ```
pub struct RawFixedVec<'a> {
    pub(crate) bytes: &'a mut [u8],
    pub(crate) size_per_item: usize,
    pub(crate) capacity: usize,
    pub(crate) len: usize,
    pub(crate) config: Config,
}

impl RawFixedVec<'_> {
    /// Checks the container's invariants.
    pub fn is_valid(&self) -> bool {
        self.size_per_item != 0
            && self.len <= self.capacity
            && self
                .capacity
                .checked_mul(self.size_per_item)
                .is_some_and(|n| n <= self.bytes.len())
    }

    /// Number of elements the bound bytes hold at the current item size.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live elements.
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
    pub const fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Returns `capacity - len`.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.capacity - self.len
    }

    /// Byte size of one element.
    #[inline]
    pub const fn size_per_item(&self) -> usize {
        self.size_per_item
    }

    /// The policy this container was bound with.
    #[inline]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The live elements as one contiguous byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[self.span(0, self.len)]
    }

    /// The live elements as one mutable byte slice.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let live = self.span(0, self.len);
        &mut self.bytes[live]
    }

    /// The whole bound block, including bytes past the live elements.
    #[inline]
    pub fn backing(&self) -> &[u8] {
        self.bytes
    }

    /// Iterates over the live elements, one `size_per_item` chunk each.
    #[inline]
    pub fn chunks(&self) -> ChunksExact<'_, u8> {
        self.as_bytes().chunks_exact(self.size_per_item)
    }

    /// Returns element `i` if `i < len`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&[u8]> {
        (i < self.len).then(|| &self.bytes[self.span(i, 1)])
    }

    /// Returns element `i` mutably if `i < len`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut [u8]> {
        if i >= self.len {
            return None;
        }
        let item = self.span(i, 1);
        Some(&mut self.bytes[item])
    }

    /// Overwrites element `i` with `item`.
    ///
    /// Returns [`Error::OutOfBounds`] if `i >= len`.
    ///
    /// # Panics
    ///
    /// Panics if `item.len() != size_per_item`.
    pub fn set(&mut self, i: usize, item: &[u8]) -> Result<(), Error> {
        self.expect_item(item);
        let slot = self.get_mut(i).ok_or(Error::OutOfBounds)?;
        slot.copy_from_slice(item);
        Ok(())
    }

    /// Element `0`, if any.
    #[inline]
    pub fn front(&self) -> Option<&[u8]> {
        self.get(0)
    }

    /// Element `len - 1`, if any.
    #[inline]
    pub fn back(&self) -> Option<&[u8]> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Sets `len = 0` without touching the bytes.
    #[inline]
    pub fn clear(&mut self) {
        debug_assert!(self.is_valid());
        self.len = 0;
    }

    /// Succeeds iff `capacity` elements fit; never grows the block.
    #[inline]
    pub fn reserve(&self, capacity: usize) -> Result<(), Error> {
        debug_assert!(self.is_valid());
        self.config.admit("reserve", capacity, self.capacity)
    }

    /// Does nothing; the block is fixed.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        debug_assert!(self.is_valid());
    }

    /// Drops the last element if any; its bytes are left as they were.
    #[inline]
    pub fn pop_back(&mut self) -> bool {
        debug_assert!(self.is_valid());
        if self.len == 0 {
            return false;
        }
        self.len -= 1;
        true
    }

    /// Exchanges the bindings of `self` and `other` in O(1).
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        debug_assert!(self.is_valid() && other.is_valid());
        core::mem::swap(self, other);
    }

    /// Byte range of `count` elements starting at element `index`.
    ///
    /// Saturates instead of wrapping so an oversized request always fails the
    /// slice bounds check.
    #[inline]
    pub(crate) fn span(&self, index: usize, count: usize) -> Range<usize> {
        let start = index.saturating_mul(self.size_per_item);
        let end = index
            .saturating_add(count)
            .saturating_mul(self.size_per_item);
        start..end
    }

    #[inline]
    pub(crate) fn expect_item(&self, item: &[u8]) {
        assert_eq!(
            item.len(),
            self.size_per_item,
            "item is {} bytes, container holds {}-byte items",
            item.len(),
            self.size_per_item
        );
    }
}

impl fmt::Debug for RawFixedVec<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawFixedVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("size_per_item", &self.size_per_item)
            .field("bytes", &self.as_bytes())
            .finish()
    }
}

impl PartialEq for RawFixedVec<'_> {
    /// Equal when element sizes match and the live bytes are identical.
    fn eq(&self, other: &Self) -> bool {
        self.size_per_item == other.size_per_item && self.as_bytes() == other.as_bytes()
    }
}
impl Eq for RawFixedVec<'_> {}
