use crate::flight_control::flight_state::FlightState;
use async_trait::async_trait;

/// The orientation/position collaborator.
///
/// Must hand out a complete snapshot every cycle. When a sensor drops out it reports its
/// last-known-good values instead of an invalid reading.
#[async_trait]
pub trait FlightStateSource: Send {
    async fn snapshot(&mut self) -> FlightState;
}
