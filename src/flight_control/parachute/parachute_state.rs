use crate::flight_control::common::pinned_dt::PinnedTimeDelay;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, Hash, EnumIter)]
pub enum ParachutePhase {
    Idle,
    Armed,
    Deployed,
}

/// Persistent state of the parachute sequence, created once per flight.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParachuteState {
    armed: bool,
    /// One-shot, never cleared.
    deployed: bool,
    /// Consecutive cycles observed at or above the arm altitude while not armed.
    arm_counter: u32,
    /// Running relay hold, present between deployment and relay release.
    relay_hold: Option<PinnedTimeDelay>,
}

impl ParachuteState {
    pub fn new() -> Self { Self::default() }

    pub fn armed(&self) -> bool { self.armed }
    pub fn deployed(&self) -> bool { self.deployed }
    pub fn arm_counter(&self) -> u32 { self.arm_counter }
    pub fn relay_hold(&self) -> Option<&PinnedTimeDelay> { self.relay_hold.as_ref() }

    pub fn phase(&self) -> ParachutePhase {
        match (self.armed, self.deployed) {
            (_, true) => ParachutePhase::Deployed,
            (true, false) => ParachutePhase::Armed,
            (false, false) => ParachutePhase::Idle,
        }
    }

    /// Counts one more cycle above the arm altitude and returns the new count.
    pub(super) fn count_arm_cycle(&mut self) -> u32 {
        self.arm_counter = self.arm_counter.saturating_add(1);
        self.arm_counter
    }

    pub(super) fn reset_arm_counter(&mut self) { self.arm_counter = 0; }

    pub(super) fn arm(&mut self) { self.armed = true; }

    pub(super) fn deploy(&mut self, hold: PinnedTimeDelay) {
        self.deployed = true;
        self.relay_hold = Some(hold);
    }

    pub(super) fn take_relay_hold(&mut self) -> Option<PinnedTimeDelay> { self.relay_hold.take() }
}
