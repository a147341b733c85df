use super::{ActuatorDriver, DigitalRelay, MotorMixer, Relay};
use crate::flight_control::navigation::{AltitudeDirection, NavigationIntent, TurnDirection};

fn intent(turn: TurnDirection, altitude: AltitudeDirection, advance: bool) -> NavigationIntent {
    NavigationIntent::new(0.0, turn, altitude, advance)
}

#[test]
fn test_relay_starts_open_and_counts_switches() {
    let mut relay = DigitalRelay::new(DigitalRelay::PARACHUTE_PIN);
    assert!(!relay.is_energized());
    relay.energize();
    relay.energize();
    assert!(relay.is_energized());
    relay.de_energize();
    assert!(!relay.is_energized());
    assert_eq!(relay.switch_count(), 2);
}

#[test]
fn test_servo_angles_follow_turn() {
    let mut mixer = MotorMixer::new();
    let right = mixer.mix(&intent(TurnDirection::Right, AltitudeDirection::None, true));
    assert_eq!((right.servo_left_deg(), right.servo_right_deg()), (120, 60));
    let left = mixer.mix(&intent(TurnDirection::Left, AltitudeDirection::None, true));
    assert_eq!((left.servo_left_deg(), left.servo_right_deg()), (60, 120));
    let level = mixer.mix(&intent(TurnDirection::None, AltitudeDirection::None, true));
    assert_eq!((level.servo_left_deg(), level.servo_right_deg()), (90, 90));
}

#[test]
fn test_throttle_ramps_in_steps() {
    let mut mixer = MotorMixer::new();
    let cruise = intent(TurnDirection::None, AltitudeDirection::None, true);
    assert_eq!(mixer.mix(&cruise).throttle_us(), 910);
    assert_eq!(mixer.mix(&cruise).throttle_us(), 920);
    for _ in 0..200 {
        mixer.mix(&cruise);
    }
    assert_eq!(mixer.last_command().throttle_us(), MotorMixer::pulse_for_pct(50));

    let stop = intent(TurnDirection::None, AltitudeDirection::None, false);
    assert_eq!(mixer.mix(&stop).throttle_us(), MotorMixer::pulse_for_pct(50) - 10);
}

#[test]
fn test_climb_and_sink_targets() {
    assert_eq!(MotorMixer::pulse_for_pct(0), 900);
    assert_eq!(MotorMixer::pulse_for_pct(100), 2000);
    assert_eq!(MotorMixer::pulse_for_pct(250), 2000);

    let mut climb = MotorMixer::new();
    let mut sink = MotorMixer::new();
    for _ in 0..200 {
        climb.mix(&intent(TurnDirection::None, AltitudeDirection::Up, true));
        sink.mix(&intent(TurnDirection::None, AltitudeDirection::Down, true));
    }
    assert_eq!(climb.last_command().throttle_us(), MotorMixer::pulse_for_pct(75));
    assert_eq!(sink.last_command().throttle_us(), MotorMixer::pulse_for_pct(25));
}

#[test]
fn test_brake_cuts_throttle_instantly() {
    let mut mixer = MotorMixer::new();
    for _ in 0..50 {
        mixer.apply(&intent(TurnDirection::Right, AltitudeDirection::Up, true));
    }
    assert!(mixer.last_command().throttle_us() > MotorMixer::THROTTLE_IDLE_US);
    mixer.apply_brake();
    assert_eq!(mixer.last_command().throttle_us(), MotorMixer::THROTTLE_IDLE_US);
    assert_eq!(mixer.last_command().servo_left_deg(), MotorMixer::SERVO_CENTER_DEG);
}
