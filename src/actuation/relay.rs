use crate::event;

/// A single digital output driving the parachute release relay.
pub trait Relay {
    /// Closes the circuit.
    fn energize(&mut self);
    /// Opens the circuit.
    fn de_energize(&mut self);
    fn is_energized(&self) -> bool;
}

/// Relay on a digital pin, starting de-energized so the craft cannot deploy on power-up.
#[derive(Debug)]
pub struct DigitalRelay {
    pin: u8,
    energized: bool,
    /// Number of level changes since power-up.
    switch_count: u32,
}

impl DigitalRelay {
    pub const PARACHUTE_PIN: u8 = 12;

    pub fn new(pin: u8) -> Self { Self { pin, energized: false, switch_count: 0 } }

    pub fn pin(&self) -> u8 { self.pin }
    pub fn switch_count(&self) -> u32 { self.switch_count }

    fn set_level(&mut self, high: bool) {
        if self.energized != high {
            self.energized = high;
            self.switch_count += 1;
            event!("Relay pin {} -> {}", self.pin, if high { "HIGH" } else { "LOW" });
        }
    }
}

impl Relay for DigitalRelay {
    fn energize(&mut self) { self.set_level(true); }
    fn de_energize(&mut self) { self.set_level(false); }
    fn is_energized(&self) -> bool { self.energized }
}
