//! # Observer contracts and handler traits.
//!
//! This module provides the per-convention handler traits and the
//! [`observer_contract!`](crate::observer_contract) macro that bundles them
//! into a single observer capability trait.
//!
//! ## Architecture
//! ```text
//! Notification flow:
//!   Observable ── notify(event) ──► ObserverSet ──► per enabled entry
//!                                        │
//!                                        ├──► Observe::on_event(E)          (by value)
//!                                        ├──► ObserveMut::on_event_mut(&mut E)
//!                                        └──► ObserveRef::on_event_ref(&E)
//! ```
//!
//! ## Implementing observers
//! ```rust
//! use notifan::{observer_contract, Observe, ObserveRef};
//!
//! #[derive(Clone)]
//! struct Reading(i32);
//! struct Fault(u16);
//!
//! observer_contract! {
//!     pub trait GaugeObserver {
//!         Reading,
//!         &Fault,
//!     }
//! }
//!
//! struct Gauge;
//!
//! impl Observe<Reading> for Gauge {
//!     fn on_event(&self, _event: Reading) {
//!         // update the needle
//!     }
//! }
//!
//! impl ObserveRef<Fault> for Gauge {
//!     fn on_event_ref(&self, _event: &Fault) {
//!         // light the warning lamp
//!     }
//! }
//!
//! // `Gauge` now implements `GaugeObserver` via the blanket impl; dropping
//! // either handler impl above makes that line a compile error.
//! fn assert_observer(_: &dyn GaugeObserver) {}
//! assert_observer(&Gauge);
//! ```

mod contract;
mod handler;

pub use handler::{Observe, ObserveMut, ObserveRef};

#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::LogWriter;
