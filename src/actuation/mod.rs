mod motor_mixer;
mod relay;
#[cfg(test)]
mod tests;

pub use motor_mixer::{ActuatorDriver, MotorCommand, MotorMixer};
pub use relay::{DigitalRelay, Relay};
