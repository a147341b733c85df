mod intent;
mod navigation_decider;
#[cfg(test)]
mod tests;

pub use intent::{AltitudeDirection, NavigationIntent, TurnDirection};
pub use navigation_decider::{NavTolerances, NavigationDecider};
