//! # Simple logging observer for debugging and demos.
//!
//! [`LogWriter`] emits one `tracing` event per delivered notification. It is
//! primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! TRACE notifan: notified by value event=TemperatureSample { milli_celsius: 21500 }
//! TRACE notifan: notified by mutable reference event=CalibrationCommand { offset: -3 }
//! TRACE notifan: notified by shared reference event=FaultCode(7)
//! ```

use core::fmt::Debug;

use crate::observers::handler::{Observe, ObserveMut, ObserveRef};

/// Tracing-backed observer that logs every delivery.
///
/// Enabled via the `logging` feature. Implements all three handler traits
/// for any payload type that is [`Debug`], so it satisfies any contract whose
/// payloads are debuggable.
///
/// Not intended for production use - implement the handler traits directly
/// for structured logging or metrics collection.
pub struct LogWriter;

impl<E: Debug> Observe<E> for LogWriter {
    fn on_event(&self, event: E) {
        tracing::trace!(event = ?event, "notified by value");
    }
}

impl<E: Debug> ObserveMut<E> for LogWriter {
    fn on_event_mut(&self, event: &mut E) {
        tracing::trace!(event = ?event, "notified by mutable reference");
    }
}

impl<E: Debug> ObserveRef<E> for LogWriter {
    fn on_event_ref(&self, event: &E) {
        tracing::trace!(event = ?event, "notified by shared reference");
    }
}
