use super::intent::{AltitudeDirection, NavigationIntent, TurnDirection};
use crate::config::ConfigError;
use crate::flight_control::{
    common::math::{quadrant_bearing_deg, wrap_angle_deg},
    flight_state::FlightState,
};

/// Deadbands below which no corrective action is taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavTolerances {
    /// Heading deadband in degrees.
    angle: f32,
    /// Altitude deadband in meters.
    altitude: f32,
    /// Distance in meters under which the target counts as reached.
    distance: f32,
}

impl NavTolerances {
    pub const DEFAULT_ANGLE_DEG: f32 = 10.0;
    pub const DEFAULT_ALTITUDE_M: f32 = 5.0;
    pub const DEFAULT_DISTANCE_M: f32 = 10.0;

    /// Creates a new set of tolerances.
    ///
    /// # Errors
    /// Returns `ConfigError::NonPositiveTolerance` if any deadband is not a finite
    /// positive number.
    pub fn new(angle: f32, altitude: f32, distance: f32) -> Result<Self, ConfigError> {
        for (name, value) in [("angle", angle), ("altitude", altitude), ("distance", distance)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveTolerance(name));
            }
        }
        Ok(Self { angle, altitude, distance })
    }

    pub fn angle(&self) -> f32 { self.angle }
    pub fn altitude(&self) -> f32 { self.altitude }
    pub fn distance(&self) -> f32 { self.distance }
}

impl Default for NavTolerances {
    fn default() -> Self {
        Self {
            angle: Self::DEFAULT_ANGLE_DEG,
            altitude: Self::DEFAULT_ALTITUDE_M,
            distance: Self::DEFAULT_DISTANCE_M,
        }
    }
}

/// Turns a flight snapshot into steering, altitude and forward-motion intents.
///
/// Holds nothing but its tolerances; every call recomputes the intent from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationDecider {
    tolerances: NavTolerances,
}

impl NavigationDecider {
    pub fn new(tolerances: NavTolerances) -> Self { Self { tolerances } }

    pub fn tolerances(&self) -> &NavTolerances { &self.tolerances }

    pub fn compute_intent(&self, state: &FlightState) -> NavigationIntent {
        Self::compute_intent_with(state, &self.tolerances)
    }

    /// Computes the intent for a single cycle.
    ///
    /// # Arguments
    /// - `state`: The snapshot of the current cycle.
    /// - `tol`: Deadbands applied to bearing, altitude and distance errors.
    pub fn compute_intent_with(state: &FlightState, tol: &NavTolerances) -> NavigationIntent {
        let target_bearing = quadrant_bearing_deg(state.target_delta());
        let bearing_error = wrap_angle_deg(target_bearing - state.heading());
        NavigationIntent::new(
            bearing_error,
            Self::classify_turn(bearing_error, tol.angle),
            Self::classify_altitude(state.altitude_error(), tol.altitude),
            state.target_distance() > tol.distance,
        )
    }

    fn classify_turn(bearing_error: f32, tol: f32) -> TurnDirection {
        if bearing_error > tol {
            TurnDirection::Right
        } else if bearing_error < -tol {
            TurnDirection::Left
        } else {
            TurnDirection::None
        }
    }

    fn classify_altitude(altitude_error: f32, tol: f32) -> AltitudeDirection {
        if altitude_error > tol {
            AltitudeDirection::Up
        } else if altitude_error < -tol {
            AltitudeDirection::Down
        } else {
            AltitudeDirection::None
        }
    }
}
