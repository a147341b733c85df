use super::{
    parachute_config::ParachuteConfig,
    parachute_event::{ParachuteEvent, ParachuteEventKind},
    parachute_state::{ParachutePhase, ParachuteState},
};
use crate::actuation::Relay;
use crate::flight_control::common::{flight_clock::FlightClock, pinned_dt::PinnedTimeDelay};
use crate::{event, info, warn};

/// Arms and deploys the parachute from the altitude stream and the emergency override.
///
/// Call [`ParachuteController::manage`] exactly once per control cycle. The controller is
/// `Idle` until the craft has held the arm altitude for the configured number of
/// consecutive cycles, then `Armed` until it sinks to the deploy altitude, then
/// `Deployed` for the rest of the flight.
#[derive(Debug)]
pub struct ParachuteController {
    config: ParachuteConfig,
    state: ParachuteState,
}

impl ParachuteController {
    pub fn new(config: ParachuteConfig) -> Self { Self { config, state: ParachuteState::new() } }

    pub fn config(&self) -> &ParachuteConfig { &self.config }
    pub fn state(&self) -> &ParachuteState { &self.state }
    pub fn phase(&self) -> ParachutePhase { self.state.phase() }

    /// Returns `true` while the relay is still held energized after deployment.
    pub fn relay_held(&self) -> bool { self.state.relay_hold().is_some() }

    /// Runs one cycle of the parachute sequence.
    ///
    /// # Arguments
    /// - `altitude`: Current altitude in meters, last-known-good if the sensor dropped out.
    /// - `emergency_deploy`: Latched ground-control override.
    /// - `clock`: Time source for the relay hold.
    /// - `relay`: The parachute release relay.
    ///
    /// # Returns
    /// The status event produced in this cycle, if any.
    pub fn manage<C, R>(
        &mut self,
        altitude: f32,
        emergency_deploy: bool,
        clock: &C,
        relay: &mut R,
    ) -> Option<ParachuteEvent>
    where
        C: FlightClock + ?Sized,
        R: Relay + ?Sized,
    {
        if self.state.deployed() {
            return self.release_if_due(altitude, clock, relay);
        }

        if emergency_deploy {
            warn!("Emergency override received, deploying parachute at {altitude:.1} m!");
            return Some(self.deploy(ParachuteEventKind::EmergencyDeployed, altitude, clock, relay));
        }

        if !self.state.armed() {
            return self.evaluate_arming(altitude, clock);
        }

        if altitude <= self.config.deploy_altitude() {
            return Some(self.deploy(ParachuteEventKind::Deployed, altitude, clock, relay));
        }
        None
    }

    fn evaluate_arming<C>(&mut self, altitude: f32, clock: &C) -> Option<ParachuteEvent>
    where C: FlightClock + ?Sized {
        if altitude >= self.config.arm_altitude() {
            let count = self.state.count_arm_cycle();
            if count >= self.config.arm_confirm_cycles() {
                self.state.arm();
                info!("Parachute ARMED at {altitude:.1} m after {count} cycles.");
                return Some(ParachuteEvent::new(ParachuteEventKind::Armed, altitude, clock.now()));
            }
            event!("Arm confirmation {count}/{} at {altitude:.1} m.", self.config.arm_confirm_cycles());
            None
        } else {
            if self.state.arm_counter() > 0 {
                info!("Dropped below arm altitude at {altitude:.1} m, safety counter reset.");
            }
            self.state.reset_arm_counter();
            Some(ParachuteEvent::new(ParachuteEventKind::SafetyReset, altitude, clock.now()))
        }
    }

    fn deploy<C, R>(
        &mut self,
        kind: ParachuteEventKind,
        altitude: f32,
        clock: &C,
        relay: &mut R,
    ) -> ParachuteEvent
    where
        C: FlightClock + ?Sized,
        R: Relay + ?Sized,
    {
        let now = clock.now();
        relay.energize();
        self.state.deploy(PinnedTimeDelay::new(now, self.config.deploy_hold()));
        info!(
            "Parachute DEPLOYED at {altitude:.1} m, holding relay for {} ms.",
            self.config.deploy_hold().num_milliseconds()
        );
        ParachuteEvent::new(kind, altitude, now)
    }

    fn release_if_due<C, R>(&mut self, altitude: f32, clock: &C, relay: &mut R) -> Option<ParachuteEvent>
    where
        C: FlightClock + ?Sized,
        R: Relay + ?Sized,
    {
        let now = clock.now();
        let due = self.state.relay_hold().is_some_and(|hold| hold.is_elapsed(now));
        if !due {
            return None;
        }
        let hold = self.state.take_relay_hold()?;
        relay.de_energize();
        info!(
            "Relay released after {} ms.",
            (now - hold.get_start()).num_milliseconds()
        );
        Some(ParachuteEvent::new(ParachuteEventKind::RelayReleased, altitude, now))
    }
}
