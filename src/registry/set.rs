//! # Synchronous event fan-out to multiple observers.
//!
//! Provides [`ObserverSet`] — distributes notifications to every enabled
//! registered observer, in registration order, on the caller's stack.
//!
//! ## Architecture
//! ```text
//! notify(event)
//!     │
//!     ├──► entry 1 (enabled)  ──► observer1.on_event(event.clone())
//!     ├──► entry 2 (disabled) ──► skipped entirely
//!     ├──► entry 3 (enabled)  ──► observer3.on_event(event.clone())
//!     └──► entry 4 (enabled)  ──► observer4.on_event(event)   // last: original
//! ```
//!
//! ## Rules
//! - **Fixed storage**: capacity is the const generic `N`; entries live in a
//!   `heapless::Vec`, so the registry never touches the heap.
//! - **Identity dedup**: entries are compared by address, never by value;
//!   re-adding a registered observer is a no-op.
//! - **Registration order**: fan-out visits entries in the order they were
//!   first added. Removal shifts later entries down, so the relative order of
//!   survivors never changes; remove + re-add moves an observer to the end.
//! - **Copy, never move**: a by-value payload is cloned for every recipient
//!   except the last, which receives the caller's original. With a single
//!   enabled recipient no clone happens at all.
//! - **Non-owning**: the registry borrows its observers for `'a`; observer
//!   lifetime stays with the caller.
//!
//! ## Mutation during fan-out
//! `notify*` borrow the set shared while every mutating operation takes
//! `&mut self`, so a handler cannot add or remove observers mid-pass without
//! interior mutability around the set itself. Doing so anyway leaves the
//! remainder of that pass unspecified (the set stays structurally valid).

use core::ptr;

use heapless::Vec;

use crate::error::RegistryError;
use crate::observers::{Observe, ObserveMut, ObserveRef};

/// One registered observer reference plus its gate.
struct Entry<'a, O: ?Sized> {
    observer: &'a O,
    enabled: bool,
}

impl<O: ?Sized> Entry<'_, O> {
    /// Identity check by data pointer, so two fat pointers to the same
    /// object through different vtables still match.
    fn refers_to(&self, observer: &O) -> bool {
        ptr::addr_eq(self.observer as *const O, observer as *const O)
    }
}

/// Fixed-capacity, insertion-ordered registry of observer references.
///
/// `O` is usually a contract trait object (`dyn SensorObserver`) so one set
/// can hold heterogeneous observer types, but any sized type works too.
/// Capacity `N` is fixed at compile time; [`add`](Self::add) past it is the
/// crate's only runtime error.
///
/// ### Properties
/// - **No heap**: entries live inline; `new` is `const`.
/// - **Not reentrant-safe**: no internal locking; single call stack only.
/// - **O(N)**: every operation is linear in capacity at worst.
pub struct ObserverSet<'a, O: ?Sized, const N: usize> {
    entries: Vec<Entry<'a, O>, N>,
}

impl<'a, O: ?Sized, const N: usize> ObserverSet<'a, O, N> {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers an observer, enabled, at the end of the visiting order.
    ///
    /// - No-op (`Ok`) if the observer is already registered; its position and
    ///   enable flag are untouched.
    /// - Fails with [`RegistryError::Full`] when `count() == N` and the
    ///   observer is new; the registry is left exactly as it was.
    pub fn add(&mut self, observer: &'a O) -> Result<(), RegistryError> {
        if self.position(observer).is_some() {
            return Ok(());
        }

        match self.entries.push(Entry {
            observer,
            enabled: true,
        }) {
            Ok(()) => {
                #[cfg(feature = "logging")]
                tracing::trace!(count = self.entries.len(), capacity = N, "observer added");
                Ok(())
            }
            Err(_) => {
                #[cfg(feature = "logging")]
                tracing::trace!(capacity = N, "observer rejected: registry full");
                Err(RegistryError::Full { capacity: N })
            }
        }
    }

    /// Removes an observer; returns whether an entry was found and removed.
    ///
    /// Removing an absent observer is a successful no-op returning `false`.
    /// Entries after the removed one shift down, keeping their relative
    /// visiting order.
    pub fn remove(&mut self, observer: &O) -> bool {
        match self.position(observer) {
            Some(index) => {
                self.entries.remove(index);
                #[cfg(feature = "logging")]
                tracing::trace!(count = self.entries.len(), "observer removed");
                true
            }
            None => false,
        }
    }

    /// Enables a registered observer; no-op if it is not registered.
    pub fn enable(&mut self, observer: &O) {
        self.set_enabled(observer, true);
    }

    /// Disables a registered observer; no-op if it is not registered.
    ///
    /// A disabled observer stays registered (it still counts toward
    /// capacity) but receives no handler calls until re-enabled.
    pub fn disable(&mut self, observer: &O) {
        self.set_enabled(observer, false);
    }

    /// Sets the enable flag on a registered observer; no-op if absent.
    pub fn set_enabled(&mut self, observer: &O, enabled: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.refers_to(observer)) {
            entry.enabled = enabled;
        }
    }

    /// Returns the enable flag of a registered observer, or `None` if the
    /// observer is not registered.
    #[must_use]
    pub fn is_enabled(&self, observer: &O) -> Option<bool> {
        self.entries
            .iter()
            .find(|e| e.refers_to(observer))
            .map(|e| e.enabled)
    }

    /// Returns whether the observer is registered (enabled or disabled).
    #[must_use]
    pub fn contains(&self, observer: &O) -> bool {
        self.position(observer).is_some()
    }

    /// Number of registered observers, enabled and disabled.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fixed capacity of the registry.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Removes all entries. Idempotent.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Delivers a by-value notification to every enabled observer, in
    /// registration order.
    ///
    /// Every recipient except the last receives a fresh clone of `event`;
    /// the last receives the caller's original. No recipient can observe a
    /// moved-from payload, however many recipients precede it. With zero
    /// enabled recipients the payload is dropped.
    pub fn notify<E>(&self, event: E)
    where
        O: Observe<E>,
        E: Clone,
    {
        let mut targets = self.entries.iter().filter(|e| e.enabled).peekable();
        while let Some(entry) = targets.next() {
            if targets.peek().is_some() {
                entry.observer.on_event(event.clone());
            } else {
                entry.observer.on_event(event);
                return;
            }
        }
    }

    /// Delivers a by-mutable-reference notification to every enabled
    /// observer, in registration order.
    ///
    /// All recipients share one value; mutations made by earlier observers
    /// are visible to later ones and to the caller afterwards.
    pub fn notify_mut<E>(&self, event: &mut E)
    where
        O: ObserveMut<E>,
    {
        for entry in self.entries.iter().filter(|e| e.enabled) {
            entry.observer.on_event_mut(event);
        }
    }

    /// Delivers a by-shared-reference notification to every enabled
    /// observer, in registration order.
    pub fn notify_ref<E>(&self, event: &E)
    where
        O: ObserveRef<E>,
    {
        for entry in self.entries.iter().filter(|e| e.enabled) {
            entry.observer.on_event_ref(event);
        }
    }

    /// Index of the entry referencing `observer`, by address.
    fn position(&self, observer: &O) -> Option<usize> {
        self.entries.iter().position(|e| e.refers_to(observer))
    }
}

impl<'a, O: ?Sized, const N: usize> Default for ObserverSet<'a, O, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use std::vec::Vec;

    #[derive(Clone, Debug, PartialEq)]
    struct Ping(i32);

    struct Probe {
        hits: Cell<u32>,
        last: Cell<i32>,
    }

    impl Probe {
        fn new() -> Self {
            Self {
                hits: Cell::new(0),
                last: Cell::new(0),
            }
        }
    }

    impl Observe<Ping> for Probe {
        fn on_event(&self, event: Ping) {
            self.hits.set(self.hits.get() + 1);
            self.last.set(event.0);
        }
    }

    impl ObserveMut<Ping> for Probe {
        fn on_event_mut(&self, event: &mut Ping) {
            event.0 += 1;
            self.hits.set(self.hits.get() + 1);
        }
    }

    impl ObserveRef<Ping> for Probe {
        fn on_event_ref(&self, event: &Ping) {
            self.hits.set(self.hits.get() + 1);
            self.last.set(event.0);
        }
    }

    #[test]
    fn test_add_deduplicates_by_identity() {
        let a = Probe::new();
        let mut set: ObserverSet<Probe, 4> = ObserverSet::new();

        assert!(set.add(&a).is_ok());
        assert!(set.add(&a).is_ok());
        assert!(set.add(&a).is_ok());
        assert_eq!(set.count(), 1);

        set.notify(Ping(5));
        assert_eq!(a.hits.get(), 1);
    }

    #[test]
    fn test_add_past_capacity_fails_and_preserves_state() {
        let a = Probe::new();
        let b = Probe::new();
        let c = Probe::new();
        let mut set: ObserverSet<Probe, 2> = ObserverSet::new();

        assert!(set.add(&a).is_ok());
        assert!(set.add(&b).is_ok());

        let err = set.add(&c).unwrap_err();
        assert_eq!(err, RegistryError::Full { capacity: 2 });
        assert_eq!(err.as_label(), "registry_full");
        assert_eq!(set.count(), 2);
        assert!(!set.contains(&c));

        // Re-adding an existing observer still succeeds at full capacity.
        assert!(set.add(&a).is_ok());
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let a = Probe::new();
        let mut set: ObserverSet<Probe, 2> = ObserverSet::new();

        assert!(!set.remove(&a));

        set.add(&a).unwrap();
        assert!(set.remove(&a));
        assert!(!set.remove(&a));
        assert_eq!(set.count(), 0);
    }

    #[test]
    fn test_disable_gates_delivery_without_unregistering() {
        let a = Probe::new();
        let b = Probe::new();
        let mut set: ObserverSet<Probe, 2> = ObserverSet::new();
        set.add(&a).unwrap();
        set.add(&b).unwrap();

        set.disable(&a);
        assert_eq!(set.count(), 2);
        assert_eq!(set.is_enabled(&a), Some(false));
        assert_eq!(set.is_enabled(&b), Some(true));

        set.notify(Ping(1));
        assert_eq!(a.hits.get(), 0);
        assert_eq!(b.hits.get(), 1);

        set.enable(&a);
        set.notify(Ping(2));
        assert_eq!(a.hits.get(), 1);
        assert_eq!(b.hits.get(), 2);
    }

    #[test]
    fn test_enable_absent_observer_is_noop() {
        let a = Probe::new();
        let b = Probe::new();
        let mut set: ObserverSet<Probe, 2> = ObserverSet::new();
        set.add(&a).unwrap();

        set.enable(&b);
        set.disable(&b);
        set.set_enabled(&b, true);

        assert_eq!(set.count(), 1);
        assert_eq!(set.is_enabled(&b), None);
        assert!(!set.contains(&b));
    }

    #[test]
    fn test_by_value_fanout_never_delivers_moved_from_payload() {
        let a = Probe::new();
        let b = Probe::new();
        let c = Probe::new();
        let mut set: ObserverSet<Probe, 4> = ObserverSet::new();
        set.add(&a).unwrap();
        set.add(&b).unwrap();
        set.add(&c).unwrap();

        set.notify(Ping(34));

        assert_eq!(a.last.get(), 34);
        assert_eq!(b.last.get(), 34);
        assert_eq!(c.last.get(), 34);
    }

    #[test]
    fn test_notify_mut_shares_one_value_in_order() {
        let a = Probe::new();
        let b = Probe::new();
        let mut set: ObserverSet<Probe, 2> = ObserverSet::new();
        set.add(&a).unwrap();
        set.add(&b).unwrap();

        let mut event = Ping(0);
        set.notify_mut(&mut event);

        // Both handlers incremented the same value.
        assert_eq!(event.0, 2);
        assert_eq!(a.hits.get(), 1);
        assert_eq!(b.hits.get(), 1);
    }

    #[test]
    fn test_notify_ref_delivers_to_all_enabled() {
        let a = Probe::new();
        let b = Probe::new();
        let mut set: ObserverSet<Probe, 2> = ObserverSet::new();
        set.add(&a).unwrap();
        set.add(&b).unwrap();
        set.disable(&b);

        let event = Ping(7);
        set.notify_ref(&event);

        assert_eq!(a.last.get(), 7);
        assert_eq!(b.last.get(), 0);
    }

    #[test]
    fn test_notify_with_no_enabled_observers_is_noop() {
        let a = Probe::new();
        let mut set: ObserverSet<Probe, 2> = ObserverSet::new();

        set.notify(Ping(1));

        set.add(&a).unwrap();
        set.disable(&a);
        set.notify(Ping(2));
        assert_eq!(a.hits.get(), 0);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let a = Probe::new();
        let b = Probe::new();
        let mut set: ObserverSet<Probe, 2> = ObserverSet::new();
        set.add(&a).unwrap();
        set.add(&b).unwrap();

        set.clear();
        assert_eq!(set.count(), 0);
        assert!(set.is_empty());

        set.clear();
        assert_eq!(set.count(), 0);

        // Cleared slots are reusable.
        set.add(&a).unwrap();
        assert_eq!(set.count(), 1);
    }

    struct Tagged<'l> {
        tag: u8,
        log: &'l core::cell::RefCell<Vec<u8>>,
    }

    impl Observe<Ping> for Tagged<'_> {
        fn on_event(&self, _event: Ping) {
            self.log.borrow_mut().push(self.tag);
        }
    }

    #[test]
    fn test_fanout_visits_in_registration_order() {
        let log = core::cell::RefCell::new(Vec::new());
        let a = Tagged { tag: b'a', log: &log };
        let b = Tagged { tag: b'b', log: &log };
        let c = Tagged { tag: b'c', log: &log };

        let mut set: ObserverSet<Tagged<'_>, 4> = ObserverSet::new();
        set.add(&a).unwrap();
        set.add(&b).unwrap();
        set.add(&c).unwrap();

        set.notify(Ping(1));
        assert_eq!(*log.borrow(), [b'a', b'b', b'c']);

        // Removing the middle entry keeps the survivors' order.
        log.borrow_mut().clear();
        set.remove(&b);
        set.notify(Ping(2));
        assert_eq!(*log.borrow(), [b'a', b'c']);

        // Re-adding moves the observer to the end of the visiting order.
        log.borrow_mut().clear();
        set.add(&b).unwrap();
        set.notify(Ping(3));
        assert_eq!(*log.borrow(), [b'a', b'c', b'b']);
    }

    #[test]
    fn test_zero_capacity_registry_rejects_everything() {
        let a = Probe::new();
        let mut set: ObserverSet<Probe, 0> = ObserverSet::new();

        assert_eq!(set.capacity(), 0);
        assert_eq!(set.add(&a), Err(RegistryError::Full { capacity: 0 }));
        assert!(set.is_empty());
    }
}
