// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Construction-time policy for fixed-block vectors.
//!
//! A [`Config`] is bound to a container when it is constructed and travels
//! with it (including through [`swap_with`](crate::FixedVec::swap_with)). It selects:
//!
//! - whether capacity prechecks run ([`CapacityCheck`]);
//! - whether fill-less growth zero-fills the new slots;
//! - which [`FailureHandler`] is told about rejected capacity requests.
//!
//! The default is the conservative one: checked, zero-filling, and logging
//! failures through the `log` facade.

// Crate imports
use crate::error::Error;

// Core imports
use core::fmt;

/// Whether operations that may exceed capacity verify it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityCheck {
    /// Requests beyond capacity return [`Error::Full`] and change nothing.
    #[default]
    Checked,
    /// The precheck is skipped; the caller asserts every request fits.
    ///
    /// Overflowing the backing storage in this mode panics on the slice bounds
    /// check, possibly after earlier elements were already shifted. Requests
    /// that fit the storage but not the logical capacity of a raw container
    /// leave it invalid.
    Unchecked,
}

/// Details of a rejected capacity request, handed to a [`FailureHandler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failure {
    /// Name of the operation that was rejected (e.g. `"push_back"`).
    pub op: &'static str,
    /// Element count (or byte count, for reinterpretation) that was requested.
    pub requested: usize,
    /// What the container could offer.
    pub capacity: usize,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: requested {} exceeds capacity {}",
            self.op, self.requested, self.capacity
        )
    }
}

/// Callback invoked whenever a checked capacity request is rejected.
pub type FailureHandler = fn(&Failure);

/// Default [`FailureHandler`]: records the failure at `debug` level.
pub fn log_failure(failure: &Failure) {
    log::debug!("fixed-block-vec: {failure}");
}

/// [`FailureHandler`] that treats every rejected request as a bug.
///
/// # Panics
///
/// Always.
pub fn panic_on_failure(failure: &Failure) {
    panic!("fixed-block-vec: {failure}");
}

/// Policy bound to a container at construction.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    capacity_check: CapacityCheck,
    zero_fill: bool,
    on_failure: FailureHandler,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Checked, zero-filling, failures logged.
    #[inline]
    pub const fn new() -> Self {
        Self {
            capacity_check: CapacityCheck::Checked,
            zero_fill: true,
            on_failure: log_failure,
        }
    }

    /// Skips capacity prechecks. See [`CapacityCheck::Unchecked`].
    #[inline]
    #[must_use]
    pub const fn unchecked(self) -> Self {
        Self {
            capacity_check: CapacityCheck::Unchecked,
            ..self
        }
    }

    /// Leaves newly exposed slots untouched on fill-less growth.
    #[inline]
    #[must_use]
    pub const fn without_zero_fill(self) -> Self {
        Self {
            zero_fill: false,
            ..self
        }
    }

    /// Replaces the failure handler.
    #[inline]
    #[must_use]
    pub const fn on_failure(self, handler: FailureHandler) -> Self {
        Self {
            on_failure: handler,
            ..self
        }
    }

    /// Whether capacity prechecks run.
    #[inline]
    pub const fn capacity_check(&self) -> CapacityCheck {
        self.capacity_check
    }

    /// Whether fill-less growth zero-fills the new slots.
    #[inline]
    pub const fn zero_fill(&self) -> bool {
        self.zero_fill
    }

    /// Admits `requested <= capacity`, or reports and rejects it.
    ///
    /// Always admits in [`CapacityCheck::Unchecked`] mode.
    #[inline]
    pub(crate) fn admit(
        &self,
        op: &'static str,
        requested: usize,
        capacity: usize,
    ) -> Result<(), Error> {
        match self.capacity_check {
            CapacityCheck::Unchecked => Ok(()),
            CapacityCheck::Checked if requested <= capacity => Ok(()),
            CapacityCheck::Checked => {
                (self.on_failure)(&Failure {
                    op,
                    requested,
                    capacity,
                });
                Err(Error::Full)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{CapacityCheck, Config, Failure};
    use crate::{Error, FixedVec, RawFixedVec};
    use alloc::string::ToString;
    use core::sync::atomic::{AtomicUsize, Ordering};

    static REJECTED: AtomicUsize = AtomicUsize::new(0);

    fn count_failure(failure: &Failure) {
        assert_eq!(failure.op, "test");
        REJECTED.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn test_default_is_checked_and_zero_filling() {
        let c = Config::default();
        assert_eq!(c.capacity_check(), CapacityCheck::Checked);
        assert!(c.zero_fill());
    }

    #[test]
    fn test_builder_setters() {
        let c = Config::new().unchecked().without_zero_fill();
        assert_eq!(c.capacity_check(), CapacityCheck::Unchecked);
        assert!(!c.zero_fill());
    }

    #[test]
    fn test_admit_calls_handler_only_on_rejection() {
        let c = Config::new().on_failure(count_failure);
        let before = REJECTED.load(Ordering::SeqCst);
        assert_eq!(c.admit("test", 3, 4), Ok(()));
        assert_eq!(c.admit("test", 4, 4), Ok(()));
        assert_eq!(REJECTED.load(Ordering::SeqCst), before);
        assert_eq!(c.admit("test", 5, 4), Err(Error::Full));
        assert_eq!(REJECTED.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn test_unchecked_admits_everything() {
        let c = Config::new().unchecked().on_failure(count_failure);
        assert_eq!(c.admit("test", usize::MAX, 0), Ok(()));
    }

    #[test]
    #[should_panic(expected = "push_back: requested 3 exceeds capacity 2")]
    fn test_panic_on_failure_handler() {
        let c = Config::new().on_failure(super::panic_on_failure);
        let _ = c.admit("push_back", 3, 2);
    }

    static PUSH_REJECTED: AtomicUsize = AtomicUsize::new(0);
    static REINTERPRET_REJECTED: AtomicUsize = AtomicUsize::new(0);

    fn count_by_op(failure: &Failure) {
        match failure.op {
            "push_back" => PUSH_REJECTED.fetch_add(1, Ordering::SeqCst),
            "reinterpret" => REINTERPRET_REJECTED.fetch_add(1, Ordering::SeqCst),
            other => panic!("unexpected rejection from {other}"),
        };
    }

    #[test]
    fn test_containers_report_each_rejection_once() {
        let config = Config::new().on_failure(count_by_op);

        let mut storage = [0u32; 2];
        let mut v = FixedVec::with_config(&mut storage, 2, config).unwrap();
        assert_eq!(v.push_back(3), Err(Error::Full));
        assert_eq!(PUSH_REJECTED.load(Ordering::SeqCst), 1);

        // 2 x 4B fits the 32 bound bytes, but 32 live bytes need 8 items.
        let mut block = [0u8; 32];
        let mut raw = RawFixedVec::with_config(&mut block, 8, 4, 4, config).unwrap();
        assert_eq!(raw.reinterpret(2, 4), Err(Error::Full));
        assert_eq!(REINTERPRET_REJECTED.load(Ordering::SeqCst), 1);
        assert_eq!(PUSH_REJECTED.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_display() {
        let f = Failure {
            op: "insert",
            requested: 9,
            capacity: 8,
        };
        assert_eq!(f.to_string(), "insert: requested 9 exceeds capacity 8");
    }
}
