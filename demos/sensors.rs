//! # Sensor Fan-out Example
//!
//! Shows a full contract with all three passing conventions and two
//! heterogeneous observers sharing one fixed-capacity registry.
//!
//! ## Run
//! ```bash
//! cargo run --example sensors
//! ```

use core::cell::Cell;

use notifan::{observer_contract, Observe, ObserveMut, ObserveRef, ObserverSet};

#[derive(Clone, Debug)]
struct TemperatureSample {
    milli_celsius: i32,
}

#[derive(Debug)]
struct CalibrationCommand {
    offset: i32,
    acks: u32,
}

#[derive(Debug)]
struct FaultCode(u16);

observer_contract! {
    /// Everything a sensor-stack observer must handle.
    pub trait SensorObserver {
        TemperatureSample,
        &mut CalibrationCommand,
        &FaultCode,
    }
}

/// Prints every notification as it arrives.
struct Console;

impl Observe<TemperatureSample> for Console {
    fn on_event(&self, event: TemperatureSample) {
        println!("[sample] {:.3} °C", event.milli_celsius as f64 / 1000.0);
    }
}

impl ObserveMut<CalibrationCommand> for Console {
    fn on_event_mut(&self, event: &mut CalibrationCommand) {
        event.acks += 1;
        println!("[calibrate] offset={} (ack #{})", event.offset, event.acks);
    }
}

impl ObserveRef<FaultCode> for Console {
    fn on_event_ref(&self, event: &FaultCode) {
        println!("[fault] code={}", event.0);
    }
}

/// Tracks the temperature range seen so far.
struct MinMax {
    min: Cell<i32>,
    max: Cell<i32>,
}

impl MinMax {
    fn new() -> Self {
        Self {
            min: Cell::new(i32::MAX),
            max: Cell::new(i32::MIN),
        }
    }

    fn print_stats(&self) {
        println!();
        println!("Temperature range:");
        println!(" ├─► Min: {:.3} °C", self.min.get() as f64 / 1000.0);
        println!(" └─► Max: {:.3} °C", self.max.get() as f64 / 1000.0);
    }
}

impl Observe<TemperatureSample> for MinMax {
    fn on_event(&self, event: TemperatureSample) {
        self.min.set(self.min.get().min(event.milli_celsius));
        self.max.set(self.max.get().max(event.milli_celsius));
    }
}

impl ObserveMut<CalibrationCommand> for MinMax {
    fn on_event_mut(&self, _event: &mut CalibrationCommand) {}
}

impl ObserveRef<FaultCode> for MinMax {
    fn on_event_ref(&self, _event: &FaultCode) {}
}

fn main() -> Result<(), notifan::RegistryError> {
    let console = Console;
    let minmax = MinMax::new();

    let mut observers: ObserverSet<dyn SensorObserver, 4> = ObserverSet::new();
    observers.add(&console)?;
    observers.add(&minmax)?;

    for milli_celsius in [21_500, 19_250, 23_875] {
        observers.notify(TemperatureSample { milli_celsius });
    }

    let mut command = CalibrationCommand { offset: -125, acks: 0 };
    observers.notify_mut(&mut command);
    println!("[caller] calibration acknowledged {} time(s)", command.acks);

    observers.notify_ref(&FaultCode(7));

    minmax.print_stats();
    Ok(())
}
