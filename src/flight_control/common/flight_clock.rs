use chrono::{DateTime, Utc};

/// Source of the current time for everything that is gated on elapsed time.
pub trait FlightClock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock used in flight.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl FlightClock for SystemClock {
    fn now(&self) -> DateTime<Utc> { Utc::now() }
}

/// A clock that only moves when told to. Used to drive hold timing deterministically.
#[cfg(test)]
#[derive(Debug)]
pub struct ManualClock {
    now: std::cell::Cell<DateTime<Utc>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self { Self { now: std::cell::Cell::new(Utc::now()) } }

    pub fn advance(&self, delta: chrono::TimeDelta) { self.now.set(self.now.get() + delta); }
}

#[cfg(test)]
impl FlightClock for ManualClock {
    fn now(&self) -> DateTime<Utc> { self.now.get() }
}
