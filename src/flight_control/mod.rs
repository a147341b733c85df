pub(crate) mod common;
pub(crate) mod flight_loop;
pub(crate) mod flight_state;
pub(crate) mod navigation;
pub(crate) mod parachute;

pub use flight_loop::{CycleReport, FlightLoop};
pub use flight_state::FlightState;
