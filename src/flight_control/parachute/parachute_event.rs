use chrono::{DateTime, Utc};
use std::fmt::{Display, Formatter};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, Hash, EnumIter)]
pub enum ParachuteEventKind {
    SafetyReset,
    Armed,
    Deployed,
    EmergencyDeployed,
    RelayReleased,
}

impl ParachuteEventKind {
    /// Numeric event code used on the status downlink.
    pub fn code(self) -> u8 {
        match self {
            ParachuteEventKind::SafetyReset => 0,
            ParachuteEventKind::Armed => 1,
            ParachuteEventKind::Deployed | ParachuteEventKind::EmergencyDeployed => 2,
            ParachuteEventKind::RelayReleased => 3,
        }
    }
}

/// A discrete status notification of the parachute sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParachuteEvent {
    kind: ParachuteEventKind,
    altitude: f32,
    timestamp: DateTime<Utc>,
}

impl ParachuteEvent {
    pub fn new(kind: ParachuteEventKind, altitude: f32, timestamp: DateTime<Utc>) -> Self {
        Self { kind, altitude, timestamp }
    }

    pub fn kind(&self) -> ParachuteEventKind { self.kind }
    pub fn altitude(&self) -> f32 { self.altitude }
    pub fn timestamp(&self) -> DateTime<Utc> { self.timestamp }
}

impl Display for ParachuteEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (code {}) at {:.1} m, {}",
            self.kind,
            self.kind.code(),
            self.altitude,
            self.timestamp.format("%H:%M:%S%.3f")
        )
    }
}
