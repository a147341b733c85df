use crate::config::ConfigError;
use chrono::TimeDelta;

/// Altitude thresholds and timing of the parachute sequence.
///
/// Only constructible through [`ParachuteConfig::new`] or `Default`, so an instance always
/// satisfies `arm_altitude > deploy_altitude`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParachuteConfig {
    /// Altitude in meters the craft has to hold before the parachute arms.
    arm_altitude: f32,
    /// Altitude in meters at or below which an armed parachute deploys.
    deploy_altitude: f32,
    /// Consecutive cycles at or above `arm_altitude` required to arm.
    arm_confirm_cycles: u32,
    /// Time the relay stays energized after deployment.
    deploy_hold: TimeDelta,
}

impl ParachuteConfig {
    pub const DEFAULT_ARM_ALTITUDE: f32 = 144.0;
    pub const DEFAULT_DEPLOY_ALTITUDE: f32 = 96.0;
    pub const DEFAULT_ARM_CONFIRM_CYCLES: u32 = 4;
    pub const DEFAULT_DEPLOY_HOLD: TimeDelta = TimeDelta::seconds(2);
    pub const MAX_DEPLOY_HOLD: TimeDelta = TimeDelta::seconds(60);

    /// Creates a validated parachute configuration.
    ///
    /// # Errors
    /// - `ConfigError::ArmBelowDeploy` if `arm_altitude <= deploy_altitude` or either is not finite.
    /// - `ConfigError::ZeroConfirmCycles` if `arm_confirm_cycles == 0`.
    /// - `ConfigError::NonPositiveHold` if `deploy_hold` is zero or negative.
    /// - `ConfigError::HoldTooLong` if `deploy_hold` exceeds [`Self::MAX_DEPLOY_HOLD`].
    pub fn new(
        arm_altitude: f32,
        deploy_altitude: f32,
        arm_confirm_cycles: u32,
        deploy_hold: TimeDelta,
    ) -> Result<Self, ConfigError> {
        let finite = arm_altitude.is_finite() && deploy_altitude.is_finite();
        if !finite || arm_altitude <= deploy_altitude {
            return Err(ConfigError::ArmBelowDeploy { arm: arm_altitude, deploy: deploy_altitude });
        }
        if arm_confirm_cycles == 0 {
            return Err(ConfigError::ZeroConfirmCycles);
        }
        if deploy_hold <= TimeDelta::zero() {
            return Err(ConfigError::NonPositiveHold);
        }
        if deploy_hold > Self::MAX_DEPLOY_HOLD {
            return Err(ConfigError::HoldTooLong { max_ms: Self::MAX_DEPLOY_HOLD.num_milliseconds() });
        }
        Ok(Self { arm_altitude, deploy_altitude, arm_confirm_cycles, deploy_hold })
    }

    pub fn arm_altitude(&self) -> f32 { self.arm_altitude }
    pub fn deploy_altitude(&self) -> f32 { self.deploy_altitude }
    pub fn arm_confirm_cycles(&self) -> u32 { self.arm_confirm_cycles }
    pub fn deploy_hold(&self) -> TimeDelta { self.deploy_hold }
}

impl Default for ParachuteConfig {
    fn default() -> Self {
        Self {
            arm_altitude: Self::DEFAULT_ARM_ALTITUDE,
            deploy_altitude: Self::DEFAULT_DEPLOY_ALTITUDE,
            arm_confirm_cycles: Self::DEFAULT_ARM_CONFIRM_CYCLES,
            deploy_hold: Self::DEFAULT_DEPLOY_HOLD,
        }
    }
}
