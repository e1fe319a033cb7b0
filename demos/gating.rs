//! # Enable/Disable and Capacity Example
//!
//! Shows the registry's gating and sizing behavior:
//! - disabling an observer pauses delivery without freeing its slot;
//! - adding past capacity is a recoverable error, not a panic;
//! - removal frees the slot and re-adding moves to the end of the order.
//!
//! ## Run
//! ```bash
//! cargo run --example gating
//! ```

use core::cell::Cell;

use notifan::{observer_contract, Observe, ObserverSet};

#[derive(Clone, Debug)]
struct Heartbeat(u32);

observer_contract! {
    pub trait HeartbeatObserver {
        Heartbeat,
    }
}

struct Monitor {
    name: &'static str,
    beats: Cell<u32>,
}

impl Monitor {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            beats: Cell::new(0),
        }
    }
}

impl Observe<Heartbeat> for Monitor {
    fn on_event(&self, event: Heartbeat) {
        self.beats.set(self.beats.get() + 1);
        println!("[{}] beat #{}", self.name, event.0);
    }
}

fn main() {
    let primary = Monitor::new("primary");
    let standby = Monitor::new("standby");
    let extra = Monitor::new("extra");

    let mut observers: ObserverSet<dyn HeartbeatObserver, 2> = ObserverSet::new();
    observers.add(&primary).unwrap();
    observers.add(&standby).unwrap();

    observers.notify(Heartbeat(1));

    println!("--- standby disabled ---");
    observers.disable(&standby);
    observers.notify(Heartbeat(2));

    // The disabled observer still holds its slot.
    match observers.add(&extra) {
        Ok(()) => unreachable!("capacity should be exhausted"),
        Err(err) => {
            println!("--- add rejected: {err} (label={}) ---", err.as_label());
        }
    }

    println!("--- standby removed, extra added ---");
    observers.remove(&standby);
    observers.add(&extra).unwrap();
    observers.notify(Heartbeat(3));

    println!();
    println!("Beats:");
    println!(" ├─► primary: {}", primary.beats.get());
    println!(" ├─► standby: {}", standby.beats.get());
    println!(" └─► extra:   {}", extra.beats.get());
}
