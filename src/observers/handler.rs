//! # Core handler traits
//!
//! One trait per passing convention. A notification contract fixes, per
//! payload type, which of the three an observer must implement:
//!
//! - [`Observe<E>`] — the payload is delivered **by value**; each enabled
//!   observer receives its own fully-valued copy.
//! - [`ObserveMut<E>`] — the payload is delivered **by mutable reference**;
//!   observers share one value and may mutate it in visiting order.
//! - [`ObserveRef<E>`] — the payload is delivered **by shared reference**.
//!
//! ## Contract
//! - Handlers run synchronously on the notifying caller's stack and return
//!   nothing; side effects are the observer's own business.
//! - Handlers must not panic across the notify boundary: the registry does
//!   not catch unwinds, and observers later in the visiting order would not
//!   be notified for that pass.
//! - Handlers take `&self`; observers that accumulate state do so through
//!   interior mutability (`Cell`, `RefCell`, atomics).

/// Handler for a notification delivered by value.
///
/// The registry clones the payload for every enabled recipient except the
/// last, so an implementation owns `event` outright and may move it onward.
pub trait Observe<E> {
    /// Handle one notification for this observer.
    fn on_event(&self, event: E);
}

/// Handler for a notification delivered by mutable reference.
///
/// All enabled recipients of one fan-out pass see the same value; mutations
/// made by earlier observers are visible to later ones and to the caller.
pub trait ObserveMut<E> {
    /// Handle one notification for this observer.
    fn on_event_mut(&self, event: &mut E);
}

/// Handler for a notification delivered by shared reference.
pub trait ObserveRef<E> {
    /// Handle one notification for this observer.
    fn on_event_ref(&self, event: &E);
}
