use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Ground-control emergency deploy override. Once set it stays set for the rest of the flight.
#[derive(Debug, Clone, Default)]
pub struct EmergencyLatch {
    flag: Arc<AtomicBool>,
}

impl EmergencyLatch {
    pub fn new() -> Self { Self::default() }

    /// Sets the latch and returns `true` if it was not set before.
    pub fn trigger(&self) -> bool { !self.flag.swap(true, Ordering::AcqRel) }

    pub fn is_set(&self) -> bool { self.flag.load(Ordering::Acquire) }
}
