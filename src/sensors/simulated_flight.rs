use super::flight_state_source::FlightStateSource;
use crate::flight_control::{common::vec2d::Vec2D, flight_state::FlightState};
use crate::telemetry::EmergencyLatch;
use async_trait::async_trait;

/// Meters per degree of latitude, also used for longitude in the small-area approximation.
const METERS_PER_DEG: f32 = 111_320.0;

/// Scripted climb, glide and descent used for ground testing without hardware.
///
/// The craft climbs at a constant rate to `apex_altitude`, then glides along a straight
/// line toward the target while sinking at `sink_rate` until it touches down.
#[derive(Debug)]
pub struct SimulatedFlight {
    cycle: u32,
    start_pos: Vec2D<f32>,
    target_pos: Vec2D<f32>,
    target_altitude: f32,
    apex_altitude: f32,
    climb_rate: f32,
    sink_rate: f32,
    altitude: f32,
    climbing: bool,
    latch: EmergencyLatch,
}

impl SimulatedFlight {
    pub fn new(start_pos: Vec2D<f32>, target_pos: Vec2D<f32>, latch: EmergencyLatch) -> Self {
        Self {
            cycle: 0,
            start_pos,
            target_pos,
            target_altitude: 120.0,
            apex_altitude: 170.0,
            climb_rate: 6.0,
            sink_rate: 2.5,
            altitude: 0.0,
            climbing: true,
            latch,
        }
    }

    pub fn cycle(&self) -> u32 { self.cycle }

    fn advance_altitude(&mut self) {
        if self.climbing {
            self.altitude += self.climb_rate;
            if self.altitude >= self.apex_altitude {
                self.altitude = self.apex_altitude;
                self.climbing = false;
            }
        } else {
            self.altitude = (self.altitude - self.sink_rate).max(0.0);
        }
    }

    /// Glide progress in `[0, 1]`, starting once the apex is reached.
    #[allow(clippy::cast_precision_loss)]
    fn glide_progress(&self) -> f32 {
        if self.climbing {
            return 0.0;
        }
        let glide_cycles = self.apex_altitude / self.sink_rate;
        let climb_cycles = self.apex_altitude / self.climb_rate;
        ((self.cycle as f32 - climb_cycles) / glide_cycles).clamp(0.0, 1.0)
    }
}

#[async_trait]
impl FlightStateSource for SimulatedFlight {
    async fn snapshot(&mut self) -> FlightState {
        self.cycle += 1;
        self.advance_altitude();
        let path = self.start_pos.to(&self.target_pos);
        let t = self.glide_progress();
        let current_pos = self.start_pos + Vec2D::new(path.x() * t, path.y() * t);
        let distance = current_pos.to(&self.target_pos).abs() * METERS_PER_DEG;
        // slow yaw oscillation so the decider has something to correct
        #[allow(clippy::cast_precision_loss)]
        let heading = 45.0 + 60.0 * (self.cycle as f32 / 20.0).sin();
        FlightState::new(
            current_pos,
            self.altitude,
            self.target_pos,
            self.target_altitude,
            distance,
            heading,
            150.0,
            10.0,
            self.latch.is_set(),
        )
    }
}
