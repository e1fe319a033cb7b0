//! Error types used by the observer registry.
//!
//! This module defines a single error enum:
//!
//! - [`RegistryError`] — errors raised by [`ObserverSet`](crate::ObserverSet)
//!   registration.
//!
//! The type provides an [`as_label`](RegistryError::as_label) helper for
//! logging/metrics. Everything else in the crate is infallible at runtime:
//! contract violations (a missing or mis-signatured handler) are compile-time
//! failures, never runtime errors.

use thiserror::Error;

/// # Errors produced by observer registration.
///
/// [`ObserverSet::add`](crate::ObserverSet::add) is the only fallible
/// operation in the crate. Exceeding capacity is a sizing error the caller
/// must handle — size the registry larger, or reject the new subscription.
/// A failed `add` leaves the registry exactly as it was.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry already holds `capacity` observers and the candidate is
    /// not among them.
    #[error("observer registry is full (capacity {capacity})")]
    Full {
        /// The fixed capacity of the registry that rejected the add.
        capacity: usize,
    },
}

impl RegistryError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use notifan::RegistryError;
    ///
    /// let err = RegistryError::Full { capacity: 4 };
    /// assert_eq!(err.as_label(), "registry_full");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RegistryError::Full { .. } => "registry_full",
        }
    }

    /// Returns the capacity of the registry that rejected the operation.
    pub fn capacity(&self) -> usize {
        match self {
            RegistryError::Full { capacity } => *capacity,
        }
    }
}
