mod flight_state_source;
mod simulated_flight;

pub use flight_state_source::FlightStateSource;
pub use simulated_flight::SimulatedFlight;
