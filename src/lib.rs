// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `fixed-block-vec`
//!
//! A `no_std`, fixed-capacity vector over memory the caller already owns,
//! **with no `unsafe`**.
//!
//! Two containers share the same semantics:
//!
//! - [`FixedVec<'a, T>`] borrows a `&'a mut [T]` of `Copy` elements.
//! - [`RawFixedVec<'a>`] borrows a `&'a mut [u8]` and treats it as a sequence
//!   of elements whose byte size is chosen at runtime. Elements go in and out
//!   as byte slices of that size.
//!
//! Neither ever allocates, grows, or frees. The capacity is fixed when the
//! block is bound; [`release`](FixedVec::release) ends the binding and hands
//! the block back untouched.
//!
//! ## When to use this crate
//!
//! - You are in a `no_std` or embedded environment, or must not allocate.
//! - The storage comes from elsewhere: a static, a stack array, a DMA region,
//!   a slab handed out by a pool.
//! - For the raw variant, the element type is only known at runtime.
//!
//! If the capacity is a compile-time constant and the vector should own its
//! storage, an inline array-backed vector is a simpler fit.
//!
//! ## High-level semantics
//!
//! - Length is a logical prefix: only indices `< len` are live. Every
//!   element accessor checks `index < len` strictly.
//! - Operations that could exceed capacity return [`Error::Full`] and leave
//!   the container unchanged (bytes and length).
//! - Index and range violations return [`Error::OutOfBounds`], also without
//!   side effects. Slice indexing (`v[i]`, `v[a..b]`) panics like a slice.
//! - Stale values past `len` stay in the block; shrinking never clears them.
//!
//! ## Configuration
//!
//! Every container carries a [`Config`] chosen at construction:
//!
//! - [`CapacityCheck`]: `Checked` (default) or `Unchecked`, which skips the
//!   capacity precheck. In unchecked mode an overflow panics on the slice
//!   bounds check instead of returning [`Error::Full`].
//! - zero-fill: whether fill-less growth writes zeroes (default) or exposes
//!   whatever the block held.
//! - a [`FailureHandler`] told about every rejected capacity request. The
//!   default, [`log_failure`], emits a `debug` record through the `log`
//!   facade; [`panic_on_failure`] turns rejections into panics.
//!
//! ## Features
//!
//! - `search` (default): comparator-driven `bsearch` and `sort`. Disable it
//!   for builds that must not link them; the linear `find` is always there.
//! - `serde`: `Serialize` for [`FixedVec`], and in-place deserialization
//!   into an existing one through `DeserializeSeed`.
//!
//! ## Example
//!
//! ```rust
//! use fixed_block_vec::{Error, FixedVec};
//!
//! let mut storage = [0i64; 4];
//! let mut v = FixedVec::new(&mut storage);
//! v.push_back(1).unwrap();
//! v.push_back(2).unwrap();
//! v.push_back(3).unwrap();
//! v.insert(1, 1, 99).unwrap();
//! assert_eq!(v.as_slice(), &[1, 99, 2, 3]);
//!
//! assert_eq!(v.push_back(5), Err(Error::Full));
//! v.erase(0).unwrap();
//! assert_eq!(v.as_slice(), &[99, 2, 3]);
//!
//! let storage = v.release();
//! assert_eq!(storage, &[99, 2, 3, 3]);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod config;
mod error;
mod index;
mod iter;
mod raw;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use config::{log_failure, panic_on_failure, CapacityCheck, Config, Failure, FailureHandler};
pub use error::Error;
pub use raw::RawFixedVec;
pub use vec::FixedVec;
