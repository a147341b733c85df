use super::emergency_latch::EmergencyLatch;
use crate::{info, warn};
use strum_macros::Display;

/// Commands understood on the ground-control uplink.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
pub enum UplinkCommand {
    /// Immediate parachute release, bypassing every altitude check.
    EmergencyDeploy,
    /// End of mission, handled like an emergency deploy.
    Final,
}

impl UplinkCommand {
    /// Parses a raw uplink message.
    ///
    /// # Returns
    /// `None` for messages that are not a known command.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "EDEPLOY" => Some(UplinkCommand::EmergencyDeploy),
            "FINAL" => Some(UplinkCommand::Final),
            _ => None,
        }
    }
}

/// Routes uplink messages onto the emergency latch.
#[derive(Debug, Clone)]
pub struct UplinkHandler {
    latch: EmergencyLatch,
}

impl UplinkHandler {
    pub fn new(latch: EmergencyLatch) -> Self { Self { latch } }

    /// Handles one raw uplink message and returns the recognized command.
    pub fn handle(&self, raw: &str) -> Option<UplinkCommand> {
        let Some(cmd) = UplinkCommand::parse(raw) else {
            warn!("Ignoring unknown uplink message {raw:?}.");
            return None;
        };
        match cmd {
            UplinkCommand::EmergencyDeploy | UplinkCommand::Final => {
                if self.latch.trigger() {
                    info!("Uplink command {cmd} latched emergency deploy.");
                }
            }
        }
        Some(cmd)
    }
}
