use crate::flight_control::navigation::{AltitudeDirection, NavigationIntent, TurnDirection};
use crate::event;

/// Consumer of the per-cycle navigation intent.
pub trait ActuatorDriver {
    /// Applies the intent; must take effect before the next cycle's computation.
    fn apply(&mut self, intent: &NavigationIntent);
    /// Cuts the throttle immediately.
    fn apply_brake(&mut self);
}

/// Servo angles and throttle pulse width for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotorCommand {
    servo_left_deg: u16,
    servo_right_deg: u16,
    throttle_us: u16,
}

impl MotorCommand {
    pub fn servo_left_deg(&self) -> u16 { self.servo_left_deg }
    pub fn servo_right_deg(&self) -> u16 { self.servo_right_deg }
    pub fn throttle_us(&self) -> u16 { self.throttle_us }
}

/// Maps navigation intents onto the turbofan servos and throttle.
///
/// The two servo pairs rotate in opposite directions to yaw the craft. Throttle changes are
/// ramped by at most [`MotorMixer::THROTTLE_STEP_US`] per cycle so the motors are never
/// slammed.
#[derive(Debug)]
pub struct MotorMixer {
    throttle_us: u16,
    last_command: MotorCommand,
}

impl MotorMixer {
    pub const SERVO_CENTER_DEG: u16 = 90;
    pub const SERVO_TURN_OFFSET_DEG: u16 = 30;
    /// Pulse width below the ESC cutoff.
    pub const THROTTLE_IDLE_US: u16 = 900;
    pub const THROTTLE_MAX_US: u16 = 2000;
    pub const THROTTLE_STEP_US: u16 = 10;

    const CRUISE_PCT: u16 = 50;
    const CLIMB_PCT: u16 = 75;
    const SINK_PCT: u16 = 25;

    pub fn new() -> Self {
        let idle = MotorCommand {
            servo_left_deg: Self::SERVO_CENTER_DEG,
            servo_right_deg: Self::SERVO_CENTER_DEG,
            throttle_us: Self::THROTTLE_IDLE_US,
        };
        Self { throttle_us: Self::THROTTLE_IDLE_US, last_command: idle }
    }

    pub fn last_command(&self) -> MotorCommand { self.last_command }

    /// Converts a throttle percentage (0 to 100) into a pulse width.
    #[allow(clippy::cast_possible_truncation)]
    pub fn pulse_for_pct(pct: u16) -> u16 {
        let span = u32::from(Self::THROTTLE_MAX_US - Self::THROTTLE_IDLE_US);
        let offset = span * u32::from(pct.min(100)) / 100;
        Self::THROTTLE_IDLE_US + offset as u16
    }

    /// Computes the next command, ramping the throttle one step toward the desired value.
    pub fn mix(&mut self, intent: &NavigationIntent) -> MotorCommand {
        let (servo_left_deg, servo_right_deg) = match intent.turn() {
            TurnDirection::None => (Self::SERVO_CENTER_DEG, Self::SERVO_CENTER_DEG),
            TurnDirection::Right => (
                Self::SERVO_CENTER_DEG + Self::SERVO_TURN_OFFSET_DEG,
                Self::SERVO_CENTER_DEG - Self::SERVO_TURN_OFFSET_DEG,
            ),
            TurnDirection::Left => (
                Self::SERVO_CENTER_DEG - Self::SERVO_TURN_OFFSET_DEG,
                Self::SERVO_CENTER_DEG + Self::SERVO_TURN_OFFSET_DEG,
            ),
        };
        let desired = Self::desired_throttle(intent);
        self.throttle_us = if desired > self.throttle_us {
            (self.throttle_us + Self::THROTTLE_STEP_US).min(desired)
        } else {
            self.throttle_us.saturating_sub(Self::THROTTLE_STEP_US).max(desired)
        };
        self.last_command = MotorCommand { servo_left_deg, servo_right_deg, throttle_us: self.throttle_us };
        self.last_command
    }

    fn desired_throttle(intent: &NavigationIntent) -> u16 {
        if !intent.advance() {
            return Self::THROTTLE_IDLE_US;
        }
        let pct = match intent.altitude() {
            AltitudeDirection::None => Self::CRUISE_PCT,
            AltitudeDirection::Up => Self::CLIMB_PCT,
            AltitudeDirection::Down => Self::SINK_PCT,
        };
        Self::pulse_for_pct(pct)
    }
}

impl Default for MotorMixer {
    fn default() -> Self { Self::new() }
}

impl ActuatorDriver for MotorMixer {
    fn apply(&mut self, intent: &NavigationIntent) {
        let previous = self.last_command;
        let cmd = self.mix(intent);
        if cmd == previous {
            return;
        }
        event!(
            "Servos L {} / R {}, throttle {} us ({intent})",
            cmd.servo_left_deg, cmd.servo_right_deg, cmd.throttle_us
        );
    }

    fn apply_brake(&mut self) {
        self.throttle_us = Self::THROTTLE_IDLE_US;
        self.last_command = MotorCommand {
            servo_left_deg: Self::SERVO_CENTER_DEG,
            servo_right_deg: Self::SERVO_CENTER_DEG,
            throttle_us: Self::THROTTLE_IDLE_US,
        };
    }
}
