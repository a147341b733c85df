mod parachute_config;
mod parachute_controller;
mod parachute_event;
mod parachute_state;

pub use parachute_config::ParachuteConfig;
pub use parachute_controller::ParachuteController;
pub use parachute_event::{ParachuteEvent, ParachuteEventKind};
pub use parachute_state::{ParachutePhase, ParachuteState};
