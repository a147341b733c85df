use super::vec2d::Vec2D;

/// Full turn in degrees.
const FULL_TURN_DEG: f32 = 360.0;
/// Half turn in degrees.
const HALF_TURN_DEG: f32 = 180.0;

/// Floating point modulo that always yields a result in `[0, b)` for positive `b`.
///
/// # Arguments
/// - `a`: The dividend.
/// - `b`: The divisor.
pub fn fmod_f32(a: f32, b: f32) -> f32 { ((a % b) + b) % b }

/// Normalizes a compass heading into `[0, 360)`.
pub fn normalize_heading(heading_deg: f32) -> f32 { fmod_f32(heading_deg, FULL_TURN_DEG) }

/// Wraps an arbitrary angle into the half-open interval `(-180, 180]`.
///
/// Angles already inside the interval are returned unchanged, so for the common case this
/// is identical to a single `±360` correction. `-180` maps to `180`.
pub fn wrap_angle_deg(angle_deg: f32) -> f32 {
    HALF_TURN_DEG - fmod_f32(HALF_TURN_DEG - angle_deg, FULL_TURN_DEG)
}

/// Computes the raw bearing to a target from a position delta `(Δlongitude, Δlatitude)`.
///
/// The bearing follows the craft's established convention `atan(Δlat / -Δlon)` with two
/// quadrant corrections:
/// - `Δlon > 0 && Δlat < 0`: `+180°`
/// - `Δlon < 0 && Δlat < 0`: `-180°`
///
/// The remaining quadrants are left uncorrected. A purely meridional delta (`Δlon == 0`)
/// has no value under that formula and falls back to the compass bearing: `0°` due north,
/// `180°` due south. A zero delta (craft on target) yields `0°`.
///
/// # Returns
/// The raw bearing in degrees, not yet related to the heading.
#[allow(clippy::float_cmp)]
pub fn quadrant_bearing_deg(delta: Vec2D<f32>) -> f32 {
    let (d_lon, d_lat) = (delta.x(), delta.y());
    if delta.is_zero() {
        return 0.0;
    }
    if d_lon == 0.0 {
        return if d_lat > 0.0 { 0.0 } else { HALF_TURN_DEG };
    }
    let mut bearing = (d_lat / -d_lon).atan().to_degrees();
    if d_lon > 0.0 && d_lat < 0.0 {
        bearing += HALF_TURN_DEG;
    } else if d_lon < 0.0 && d_lat < 0.0 {
        bearing -= HALF_TURN_DEG;
    }
    bearing
}
