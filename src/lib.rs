//! # notifan
//!
//! **notifan** is a statically checked, allocation-free observer fan-out
//! library for embedded and resource-constrained software.
//!
//! A bounded set of observable sources broadcasts strongly-typed notification
//! events to a bounded set of registered observer sinks. There is no heap
//! allocation, no runtime type discovery, and the compiler enforces that every
//! observer implements one handler per notification type its contract
//! declares — with the exact passing convention the contract fixes for that
//! type.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!                  observer_contract! {
//!                      pub trait SensorObserver {
//!                          TemperatureSample,        // by value
//!                          &mut CalibrationCommand,  // by mutable reference
//!                          &FaultCode,               // by shared reference
//!                      }
//!                  }
//!                            │ (compile time: supertraits + blanket impl)
//!                            ▼
//!        ┌───────────────────────────────────────────────┐
//!        │ SensorObserver:                               │
//!        │   Observe<TemperatureSample>                  │
//!        │   + ObserveMut<CalibrationCommand>            │
//!        │   + ObserveRef<FaultCode>                     │
//!        └───────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │ ObserverSet<dyn SensorObserver, N>   (fixed storage, no heap)│
//! │  - add / remove / enable / disable / clear / count           │
//! │  - notify(event)      ──► on_event(E)      per enabled entry │
//! │  - notify_mut(&mut e) ──► on_event_mut(&mut E)               │
//! │  - notify_ref(&e)     ──► on_event_ref(&E)                   │
//! └──────┬──────────────────┬──────────────────┬─────────────────┘
//!        ▼                  ▼                  ▼
//!   observer 1         observer 2         observer N
//!   (enabled)          (disabled: skip)   (enabled)
//! ```
//!
//! ### Fan-out rules
//! - **Registration order**: enabled entries are visited in the order they
//!   were first added; removing and re-adding an observer moves it to the end.
//! - **Deduplication**: adding the same observer twice is a no-op, compared by
//!   identity (address), never by value.
//! - **Copy, never move**: a by-value notification is cloned for every
//!   recipient except the last, which receives the caller's original. No
//!   recipient can observe a moved-from payload.
//! - **Bounded**: capacity is a const generic; exceeding it is the one
//!   runtime error, [`RegistryError::Full`].
//!
//! ## Features
//! | Area          | Description                                              | Key items                                   |
//! |---------------|----------------------------------------------------------|---------------------------------------------|
//! | **Contracts** | Declare 1..=8 notification types with fixed conventions. | [`observer_contract!`]                      |
//! | **Handlers**  | One trait per passing convention.                        | [`Observe`], [`ObserveMut`], [`ObserveRef`] |
//! | **Registry**  | Fixed-capacity, insertion-ordered observer storage.      | [`ObserverSet`]                             |
//! | **Errors**    | Typed, recoverable capacity error.                       | [`RegistryError`]                           |
//!
//! ## Optional features
//! - `logging`: emits `tracing` events for registry mutations and exports
//!   the [`LogWriter`] demo observer _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use core::cell::Cell;
//! use notifan::{observer_contract, Observe, ObserverSet};
//!
//! #[derive(Clone, Debug)]
//! struct TemperatureSample {
//!     milli_celsius: i32,
//! }
//!
//! observer_contract! {
//!     /// Observers interested in temperature readings.
//!     pub trait SensorObserver {
//!         TemperatureSample,
//!     }
//! }
//!
//! struct Display {
//!     last: Cell<i32>,
//! }
//!
//! impl Observe<TemperatureSample> for Display {
//!     fn on_event(&self, event: TemperatureSample) {
//!         self.last.set(event.milli_celsius);
//!     }
//! }
//!
//! # fn main() -> Result<(), notifan::RegistryError> {
//! let display = Display { last: Cell::new(0) };
//! let panel = Display { last: Cell::new(0) };
//!
//! let mut observers: ObserverSet<dyn SensorObserver, 4> = ObserverSet::new();
//! observers.add(&display)?;
//! observers.add(&panel)?;
//!
//! observers.notify(TemperatureSample { milli_celsius: 21_500 });
//!
//! assert_eq!(display.last.get(), 21_500);
//! assert_eq!(panel.last.get(), 21_500);
//! # Ok(())
//! # }
//! ```
//!
//! ## What this is not
//! notifan is not a generic event bus: the set of notification types an
//! observable can emit, and the convention each is delivered with, is fixed
//! per contract at compile time. There is no threading layer — fan-out runs
//! synchronously on the caller's stack, and callers needing cross-thread
//! access must serialize externally.

#![no_std]

#[cfg(test)]
extern crate std;

mod error;
mod observers;
mod registry;

// ---- Public re-exports ----

pub use error::RegistryError;
pub use observers::{Observe, ObserveMut, ObserveRef};
pub use registry::ObserverSet;

// Optional: expose a simple tracing-backed observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogWriter;
