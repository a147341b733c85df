use super::{
    common::flight_clock::FlightClock,
    flight_state::FlightState,
    navigation::{NavigationDecider, NavigationIntent},
    parachute::{ParachuteController, ParachuteEvent, ParachuteEventKind, ParachutePhase},
};
use crate::actuation::{ActuatorDriver, Relay};
use crate::config::FlightConfig;
use crate::sensors::FlightStateSource;
use crate::telemetry::TelemetryLink;
use crate::{info, warn};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

/// Outcome of a single control cycle.
#[derive(Debug, Clone, Copy)]
pub struct CycleReport {
    state: FlightState,
    intent: NavigationIntent,
    event: Option<ParachuteEvent>,
    phase: ParachutePhase,
    relay_held: bool,
}

impl CycleReport {
    pub fn state(&self) -> &FlightState { &self.state }
    pub fn intent(&self) -> &NavigationIntent { &self.intent }
    pub fn event(&self) -> Option<&ParachuteEvent> { self.event.as_ref() }
    pub fn phase(&self) -> ParachutePhase { self.phase }
    pub fn relay_held(&self) -> bool { self.relay_held }

    /// The flight is over once the parachute is out, the relay released and the craft down.
    pub fn is_landed(&self) -> bool {
        self.phase == ParachutePhase::Deployed
            && !self.relay_held
            && self.state.current_altitude() <= 0.0
    }
}

/// The cooperative control loop: read sensors, decide navigation, decide parachute, actuate.
pub struct FlightLoop<S, A, R, C> {
    decider: NavigationDecider,
    parachute: ParachuteController,
    source: S,
    actuator: A,
    relay: R,
    clock: C,
    telemetry: TelemetryLink,
    cycle_interval: Duration,
    cycles: u64,
}

impl<S, A, R, C> FlightLoop<S, A, R, C>
where
    S: FlightStateSource,
    A: ActuatorDriver,
    R: Relay,
    C: FlightClock,
{
    pub fn new(
        config: &FlightConfig,
        source: S,
        actuator: A,
        relay: R,
        clock: C,
        telemetry: TelemetryLink,
    ) -> Self {
        Self {
            decider: NavigationDecider::new(*config.tolerances()),
            parachute: ParachuteController::new(*config.parachute()),
            source,
            actuator,
            relay,
            clock,
            telemetry,
            cycle_interval: config.cycle_interval(),
            cycles: 0,
        }
    }

    pub fn parachute(&self) -> &ParachuteController { &self.parachute }
    pub fn actuator(&self) -> &A { &self.actuator }
    pub fn relay(&self) -> &R { &self.relay }
    pub fn clock(&self) -> &C { &self.clock }
    pub fn source(&self) -> &S { &self.source }
    pub fn telemetry(&self) -> &TelemetryLink { &self.telemetry }
    pub fn cycles(&self) -> u64 { self.cycles }

    /// Runs exactly one control cycle.
    pub async fn cycle(&mut self) -> CycleReport {
        let state = self.source.snapshot().await;
        let intent = self.decider.compute_intent(&state);
        let event = self.parachute.manage(
            state.current_altitude(),
            state.emergency_deploy(),
            &self.clock,
            &mut self.relay,
        );

        if let Some(evt) = event {
            let deployed = matches!(
                evt.kind(),
                ParachuteEventKind::Deployed | ParachuteEventKind::EmergencyDeployed
            );
            if deployed && state.in_red_zone() {
                warn!(
                    "Deployed outside the preferred attitude (roll {:.0}, pitch {:.0}).",
                    state.roll(),
                    state.pitch()
                );
            }
            self.telemetry.publish(evt);
        }

        if self.parachute.state().deployed() {
            self.actuator.apply_brake();
        } else {
            self.actuator.apply(&intent);
        }
        self.cycles += 1;

        CycleReport {
            state,
            intent,
            event,
            phase: self.parachute.phase(),
            relay_held: self.parachute.relay_held(),
        }
    }

    /// Ticks the control loop at the configured interval until landing or cancellation.
    ///
    /// A cancellation during the relay hold keeps cycling until the relay is released, so the
    /// loop never returns with the relay energized.
    ///
    /// # Returns
    /// The report of the last executed cycle, `None` if cancelled before the first one.
    pub async fn run(&mut self, c_tok: CancellationToken) -> Option<CycleReport> {
        let mut tick = interval(self.cycle_interval);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last = None;
        loop {
            tokio::select! {
                biased;
                () = c_tok.cancelled() => {
                    warn!("Flight loop cancelled after {} cycles.", self.cycles);
                    break;
                }
                _ = tick.tick() => {
                    let report = self.cycle().await;
                    last = Some(report);
                    if report.is_landed() {
                        info!("Touchdown after {} cycles.", self.cycles);
                        break;
                    }
                }
            }
        }
        if self.parachute.relay_held() {
            warn!("Finishing relay hold before shutdown.");
            while self.parachute.relay_held() {
                tick.tick().await;
                last = Some(self.cycle().await);
            }
        }
        last
    }
}
