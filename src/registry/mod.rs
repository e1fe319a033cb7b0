//! # Fixed-capacity observer registry.
//!
//! This module provides [`ObserverSet`] — bounded, insertion-ordered storage
//! of observer references with per-entry enable flags and synchronous fan-out.

mod set;

pub use set::ObserverSet;
