use crate::flight_control::{navigation::NavTolerances, parachute::ParachuteConfig};
use chrono::TimeDelta;
use std::{env, str::FromStr, time::Duration};
use strum_macros::Display;

/// Reasons a flight configuration is rejected before launch.
#[derive(Debug, Display, PartialEq)]
pub enum ConfigError {
    /// The arm altitude must lie strictly above the deploy altitude.
    ArmBelowDeploy { arm: f32, deploy: f32 },
    ZeroConfirmCycles,
    NonPositiveHold,
    HoldTooLong { max_ms: i64 },
    NonPositiveTolerance(&'static str),
    NonPositiveCycleInterval,
    InvalidValue { key: &'static str, value: String },
}

/// Complete configuration of the flight core.
#[derive(Debug, Clone, Copy)]
pub struct FlightConfig {
    parachute: ParachuteConfig,
    tolerances: NavTolerances,
    cycle_interval: Duration,
}

impl FlightConfig {
    const DEFAULT_CYCLE_INTERVAL: Duration = Duration::from_millis(250);

    const ENV_ARM_ALTITUDE: &'static str = "EAGLE_ARM_ALTITUDE";
    const ENV_DEPLOY_ALTITUDE: &'static str = "EAGLE_DEPLOY_ALTITUDE";
    const ENV_ARM_CONFIRM_CYCLES: &'static str = "EAGLE_ARM_CONFIRM_CYCLES";
    const ENV_DEPLOY_HOLD_MS: &'static str = "EAGLE_DEPLOY_HOLD_MS";
    const ENV_TOL_ANGLE: &'static str = "EAGLE_TOL_ANGLE";
    const ENV_TOL_ALTITUDE: &'static str = "EAGLE_TOL_ALTITUDE";
    const ENV_TOL_DISTANCE: &'static str = "EAGLE_TOL_DISTANCE";
    const ENV_CYCLE_MS: &'static str = "EAGLE_CYCLE_MS";

    /// Creates a validated configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::NonPositiveCycleInterval` for a zero cycle interval.
    pub fn new(
        parachute: ParachuteConfig,
        tolerances: NavTolerances,
        cycle_interval: Duration,
    ) -> Result<Self, ConfigError> {
        if cycle_interval.is_zero() {
            return Err(ConfigError::NonPositiveCycleInterval);
        }
        Ok(Self { parachute, tolerances, cycle_interval })
    }

    /// Builds the configuration from the process environment, falling back to the
    /// flight-proven defaults for every unset variable.
    ///
    /// # Errors
    /// Any unparsable value or any violated invariant aborts with a `ConfigError`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    /// Any unparsable value or any violated invariant aborts with a `ConfigError`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where F: Fn(&'static str) -> Option<String> {
        let arm = parse_or(&lookup, Self::ENV_ARM_ALTITUDE, ParachuteConfig::DEFAULT_ARM_ALTITUDE)?;
        let deploy =
            parse_or(&lookup, Self::ENV_DEPLOY_ALTITUDE, ParachuteConfig::DEFAULT_DEPLOY_ALTITUDE)?;
        let confirm = parse_or(
            &lookup,
            Self::ENV_ARM_CONFIRM_CYCLES,
            ParachuteConfig::DEFAULT_ARM_CONFIRM_CYCLES,
        )?;
        let hold_ms = parse_or(
            &lookup,
            Self::ENV_DEPLOY_HOLD_MS,
            ParachuteConfig::DEFAULT_DEPLOY_HOLD.num_milliseconds(),
        )?;
        let hold = TimeDelta::try_milliseconds(hold_ms).ok_or_else(|| ConfigError::InvalidValue {
            key: Self::ENV_DEPLOY_HOLD_MS,
            value: hold_ms.to_string(),
        })?;
        let parachute = ParachuteConfig::new(arm, deploy, confirm, hold)?;

        let tolerances = NavTolerances::new(
            parse_or(&lookup, Self::ENV_TOL_ANGLE, NavTolerances::DEFAULT_ANGLE_DEG)?,
            parse_or(&lookup, Self::ENV_TOL_ALTITUDE, NavTolerances::DEFAULT_ALTITUDE_M)?,
            parse_or(&lookup, Self::ENV_TOL_DISTANCE, NavTolerances::DEFAULT_DISTANCE_M)?,
        )?;

        #[allow(clippy::cast_possible_truncation)]
        let default_cycle_ms = Self::DEFAULT_CYCLE_INTERVAL.as_millis() as u64;
        let cycle_ms = parse_or(&lookup, Self::ENV_CYCLE_MS, default_cycle_ms)?;
        Self::new(parachute, tolerances, Duration::from_millis(cycle_ms))
    }

    pub fn parachute(&self) -> &ParachuteConfig { &self.parachute }
    pub fn tolerances(&self) -> &NavTolerances { &self.tolerances }
    pub fn cycle_interval(&self) -> Duration { self.cycle_interval }
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            parachute: ParachuteConfig::default(),
            tolerances: NavTolerances::default(),
            cycle_interval: Self::DEFAULT_CYCLE_INTERVAL,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, FlightConfig};
    use std::collections::HashMap;
    use std::time::Duration;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = FlightConfig::from_lookup(|_| None).unwrap();
        assert!((config.parachute().arm_altitude() - 144.0).abs() < f32::EPSILON);
        assert!((config.parachute().deploy_altitude() - 96.0).abs() < f32::EPSILON);
        assert_eq!(config.parachute().arm_confirm_cycles(), 4);
        assert_eq!(config.parachute().deploy_hold().num_milliseconds(), 2000);
        assert_eq!(config.cycle_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = FlightConfig::from_lookup(lookup_from(&[
            ("EAGLE_ARM_ALTITUDE", "9144"),
            ("EAGLE_DEPLOY_ALTITUDE", " 6096 "),
            ("EAGLE_ARM_CONFIRM_CYCLES", "8"),
            ("EAGLE_TOL_ANGLE", "2.5"),
            ("EAGLE_CYCLE_MS", "100"),
        ]))
        .unwrap();
        assert!((config.parachute().arm_altitude() - 9144.0).abs() < f32::EPSILON);
        assert!((config.parachute().deploy_altitude() - 6096.0).abs() < f32::EPSILON);
        assert_eq!(config.parachute().arm_confirm_cycles(), 8);
        assert!((config.tolerances().angle() - 2.5).abs() < f32::EPSILON);
        assert_eq!(config.cycle_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_arm_must_exceed_deploy() {
        let res = FlightConfig::from_lookup(lookup_from(&[("EAGLE_DEPLOY_ALTITUDE", "144")]));
        assert!(matches!(res, Err(ConfigError::ArmBelowDeploy { .. })));
    }

    #[test]
    fn test_rejects_garbage_values() {
        let res = FlightConfig::from_lookup(lookup_from(&[("EAGLE_ARM_CONFIRM_CYCLES", "four")]));
        assert_eq!(
            res.unwrap_err(),
            ConfigError::InvalidValue { key: "EAGLE_ARM_CONFIRM_CYCLES", value: "four".to_string() }
        );
        let res = FlightConfig::from_lookup(lookup_from(&[("EAGLE_ARM_CONFIRM_CYCLES", "-1")]));
        assert!(matches!(res, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_rejects_zero_hold_and_cycle() {
        let res = FlightConfig::from_lookup(lookup_from(&[("EAGLE_DEPLOY_HOLD_MS", "0")]));
        assert_eq!(res.unwrap_err(), ConfigError::NonPositiveHold);
        let res = FlightConfig::from_lookup(lookup_from(&[("EAGLE_CYCLE_MS", "0")]));
        assert_eq!(res.unwrap_err(), ConfigError::NonPositiveCycleInterval);
    }

    #[test]
    fn test_rejects_out_of_range_hold() {
        let res = FlightConfig::from_lookup(lookup_from(&[("EAGLE_DEPLOY_HOLD_MS", "60001")]));
        assert_eq!(res.unwrap_err(), ConfigError::HoldTooLong { max_ms: 60_000 });
        let res = FlightConfig::from_lookup(lookup_from(&[(
            "EAGLE_DEPLOY_HOLD_MS",
            "9223372036854775807",
        )]));
        assert!(matches!(
            res,
            Err(ConfigError::InvalidValue { key: "EAGLE_DEPLOY_HOLD_MS", .. } | ConfigError::HoldTooLong { .. })
        ));
        let res = FlightConfig::from_lookup(lookup_from(&[(
            "EAGLE_DEPLOY_HOLD_MS",
            "-9223372036854775808",
        )]));
        assert!(matches!(res, Err(ConfigError::InvalidValue { key: "EAGLE_DEPLOY_HOLD_MS", .. })));
        let config =
            FlightConfig::from_lookup(lookup_from(&[("EAGLE_DEPLOY_HOLD_MS", "60000")])).unwrap();
        assert_eq!(config.parachute().deploy_hold().num_milliseconds(), 60_000);
    }
}
