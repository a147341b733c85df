pub(crate) mod flight_clock;
pub(crate) mod math;
pub(crate) mod pinned_dt;
pub(crate) mod vec2d;
