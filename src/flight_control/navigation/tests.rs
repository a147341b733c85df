use super::{AltitudeDirection, NavTolerances, NavigationDecider, TurnDirection};
use crate::config::ConfigError;
use crate::flight_control::{common::vec2d::Vec2D, flight_state::FlightState};
use rand::Rng;

const HOME: Vec2D<f32> = Vec2D::new(-85.0, 35.0);

fn state_towards(target: Vec2D<f32>, heading: f32) -> FlightState {
    FlightState::new(HOME, 120.0, target, 120.0, 500.0, heading, 0.0, 0.0, false)
}

fn state_with_altitudes(current: f32, target: f32, distance: f32) -> FlightState {
    FlightState::new(HOME, current, HOME + Vec2D::new(0.0, 0.01), target, distance, 0.0, 0.0, 0.0, false)
}

fn decider() -> NavigationDecider {
    NavigationDecider::new(NavTolerances::new(10.0, 5.0, 10.0).unwrap())
}

#[test]
fn test_due_north_heading_east_turns_left() {
    let state = state_towards(HOME + Vec2D::new(0.0, 0.5), 90.0);
    let intent = decider().compute_intent(&state);
    assert!((intent.bearing_error() + 90.0).abs() < 1e-3);
    assert_eq!(intent.turn(), TurnDirection::Left);
}

#[test]
fn test_corrected_quadrants() {
    // Δlon > 0, Δlat < 0: bearing 225, heading 0 wraps to -135
    let intent = decider().compute_intent(&state_towards(HOME + Vec2D::new(0.25, -0.25), 0.0));
    assert!((intent.bearing_error() + 135.0).abs() < 1e-2);
    assert_eq!(intent.turn(), TurnDirection::Left);

    // Δlon < 0, Δlat < 0: bearing -225, heading 0 wraps to 135
    let intent = decider().compute_intent(&state_towards(HOME + Vec2D::new(-0.25, -0.25), 0.0));
    assert!((intent.bearing_error() - 135.0).abs() < 1e-2);
    assert_eq!(intent.turn(), TurnDirection::Right);
}

#[test]
fn test_within_angle_tolerance_no_turn() {
    // Δlon < 0, Δlat > 0 with equal magnitude gives bearing 45
    let target = HOME + Vec2D::new(-0.25, 0.25);
    for heading in [36.0, 45.0, 54.0] {
        let intent = decider().compute_intent(&state_towards(target, heading));
        assert_eq!(intent.turn(), TurnDirection::None, "heading {heading}");
    }
    assert_eq!(decider().compute_intent(&state_towards(target, 30.0)).turn(), TurnDirection::Right);
    assert_eq!(decider().compute_intent(&state_towards(target, 60.0)).turn(), TurnDirection::Left);
}

#[test]
fn test_heading_above_360_is_normalized() {
    let target = HOME + Vec2D::new(0.0, 0.5);
    let plain = decider().compute_intent(&state_towards(target, 90.0));
    let wrapped = decider().compute_intent(&state_towards(target, 450.0));
    assert!((plain.bearing_error() - wrapped.bearing_error()).abs() < 1e-3);
}

#[test]
fn test_bearing_error_range_for_random_headings() {
    let mut rng = rand::rng();
    for _ in 0..5_000 {
        let target = HOME
            + Vec2D::new(rng.random_range(-1.0_f32..1.0), rng.random_range(-1.0_f32..1.0));
        let heading: f32 = rng.random_range(0.0..360.0);
        let intent = decider().compute_intent(&state_towards(target, heading));
        let err = intent.bearing_error();
        assert!(err > -180.0 && err <= 180.0, "bearing error {err} out of range");
        let expected = if err > 10.0 {
            TurnDirection::Right
        } else if err < -10.0 {
            TurnDirection::Left
        } else {
            TurnDirection::None
        };
        assert_eq!(intent.turn(), expected);
    }
}

#[test]
fn test_altitude_classification() {
    let d = decider();
    assert_eq!(d.compute_intent(&state_with_altitudes(100.0, 120.0, 50.0)).altitude(), AltitudeDirection::Up);
    assert_eq!(d.compute_intent(&state_with_altitudes(130.0, 120.0, 50.0)).altitude(), AltitudeDirection::Down);
    assert_eq!(d.compute_intent(&state_with_altitudes(117.0, 120.0, 50.0)).altitude(), AltitudeDirection::None);
    assert_eq!(d.compute_intent(&state_with_altitudes(125.0, 120.0, 50.0)).altitude(), AltitudeDirection::None);
}

#[test]
fn test_advance_only_beyond_distance_tolerance() {
    let d = decider();
    assert!(d.compute_intent(&state_with_altitudes(120.0, 120.0, 10.5)).advance());
    assert!(!d.compute_intent(&state_with_altitudes(120.0, 120.0, 10.0)).advance());
    assert!(!d.compute_intent(&state_with_altitudes(120.0, 120.0, 0.0)).advance());
}

#[test]
fn test_on_target_is_total() {
    let intent = decider().compute_intent(&state_towards(HOME, 0.0));
    assert!(intent.bearing_error().is_finite());
    assert_eq!(intent.turn(), TurnDirection::None);
}

#[test]
fn test_rejects_non_positive_tolerances() {
    assert!(matches!(NavTolerances::new(0.0, 5.0, 10.0), Err(ConfigError::NonPositiveTolerance("angle"))));
    assert!(matches!(NavTolerances::new(10.0, -1.0, 10.0), Err(ConfigError::NonPositiveTolerance("altitude"))));
    assert!(matches!(NavTolerances::new(10.0, 5.0, f32::NAN), Err(ConfigError::NonPositiveTolerance("distance"))));
    assert!(NavTolerances::new(10.0, 5.0, 10.0).is_ok());
}
