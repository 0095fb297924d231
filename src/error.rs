// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`FixedVec`](crate::FixedVec) and
//! [`RawFixedVec`](crate::RawFixedVec).
//!
//! Errors are `Copy` and implement `core::error::Error`. A returned error
//! always means the container was left untouched.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by fixed-block vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation would exceed the fixed capacity bound at construction.
    Full,
    /// An index or range was outside the current logical length.
    OutOfBounds,
    /// A logical length or capacity did not fit the backing storage.
    InvalidLen,
    /// An element size of zero was requested for a raw container.
    InvalidItemSize,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("capacity exceeded"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
            Self::InvalidLen => f.write_str("invalid length"),
            Self::InvalidItemSize => f.write_str("invalid item size"),
        }
    }
}

impl CoreError for Error {}
