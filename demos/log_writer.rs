//! # LogWriter Example
//!
//! Registers the built-in [`LogWriter`] alongside a real observer; every
//! delivery shows up as a `tracing` event.
//!
//! ## Run
//! ```bash
//! cargo run --example log_writer --features logging
//! ```

use core::cell::Cell;

use notifan::{observer_contract, LogWriter, Observe, ObserverSet};

#[derive(Clone, Debug)]
struct ButtonPressed {
    id: u8,
}

observer_contract! {
    pub trait InputObserver {
        ButtonPressed,
    }
}

struct Counter {
    presses: Cell<u32>,
}

impl Observe<ButtonPressed> for Counter {
    fn on_event(&self, _event: ButtonPressed) {
        self.presses.set(self.presses.get() + 1);
    }
}

fn main() -> Result<(), notifan::RegistryError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let counter = Counter {
        presses: Cell::new(0),
    };
    let log = LogWriter;

    let mut observers: ObserverSet<dyn InputObserver, 2> = ObserverSet::new();
    observers.add(&counter)?;
    observers.add(&log)?;

    for id in 0..3 {
        observers.notify(ButtonPressed { id });
    }

    println!("presses counted: {}", counter.presses.get());
    Ok(())
}
