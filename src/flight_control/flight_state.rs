use super::common::{math::normalize_heading, vec2d::Vec2D};

/// Roll above which the craft is considered inverted enough for a clean deployment.
const RED_ZONE_MIN_ROLL_DEG: f32 = 135.0;
/// Pitch below which the craft is considered level enough for a clean deployment.
const RED_ZONE_MAX_PITCH_DEG: f32 = 45.0;

/// A complete snapshot of the craft's situation for one control cycle.
///
/// Built once per cycle by the sensor collaborator and never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    /// Current position as (longitude, latitude) in degrees.
    current_pos: Vec2D<f32>,
    /// Current altitude in meters.
    current_altitude: f32,
    /// Target position as (longitude, latitude) in degrees.
    target_pos: Vec2D<f32>,
    /// Target altitude in meters.
    target_altitude: f32,
    /// Remaining distance to the target in meters.
    target_distance: f32,
    /// Heading in degrees, normalized to `[0, 360)`.
    heading: f32,
    roll: f32,
    pitch: f32,
    /// Latched emergency override as seen at the start of this cycle.
    emergency_deploy: bool,
}

impl FlightState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        current_pos: Vec2D<f32>,
        current_altitude: f32,
        target_pos: Vec2D<f32>,
        target_altitude: f32,
        target_distance: f32,
        heading: f32,
        roll: f32,
        pitch: f32,
        emergency_deploy: bool,
    ) -> Self {
        Self {
            current_pos,
            current_altitude,
            target_pos,
            target_altitude,
            target_distance,
            heading: normalize_heading(heading),
            roll,
            pitch,
            emergency_deploy,
        }
    }

    pub fn current_pos(&self) -> Vec2D<f32> { self.current_pos }
    pub fn current_altitude(&self) -> f32 { self.current_altitude }
    pub fn target_pos(&self) -> Vec2D<f32> { self.target_pos }
    pub fn target_altitude(&self) -> f32 { self.target_altitude }
    pub fn target_distance(&self) -> f32 { self.target_distance }
    pub fn heading(&self) -> f32 { self.heading }
    pub fn roll(&self) -> f32 { self.roll }
    pub fn pitch(&self) -> f32 { self.pitch }
    pub fn emergency_deploy(&self) -> bool { self.emergency_deploy }

    /// Position delta from the craft to the target as (Δlongitude, Δlatitude).
    pub fn target_delta(&self) -> Vec2D<f32> { self.current_pos.to(&self.target_pos) }

    /// Altitude the craft still has to gain (positive) or lose (negative).
    pub fn altitude_error(&self) -> f32 { self.target_altitude - self.current_altitude }

    /// Returns `true` if the current attitude is unsuitable for a parachute deployment.
    ///
    /// Informational only, the parachute controller does not consult it.
    pub fn in_red_zone(&self) -> bool {
        !(self.roll >= RED_ZONE_MIN_ROLL_DEG && self.pitch <= RED_ZONE_MAX_PITCH_DEG)
    }
}
