use strum_macros::{Display, EnumIter};

/// Steering correction around the yaw axis.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, Hash, EnumIter, Default)]
pub enum TurnDirection {
    #[default]
    None,
    Left,
    Right,
}

/// Altitude correction.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, Hash, EnumIter, Default)]
pub enum AltitudeDirection {
    #[default]
    None,
    Up,
    Down,
}

/// Discrete steering, altitude and forward-motion decisions for one control cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavigationIntent {
    /// Target bearing minus heading in degrees, within `(-180, 180]`.
    bearing_error: f32,
    turn: TurnDirection,
    altitude: AltitudeDirection,
    /// Whether the craft is still far enough from the target to keep moving forward.
    advance: bool,
}

impl NavigationIntent {
    pub fn new(
        bearing_error: f32,
        turn: TurnDirection,
        altitude: AltitudeDirection,
        advance: bool,
    ) -> Self {
        Self { bearing_error, turn, altitude, advance }
    }

    pub fn bearing_error(&self) -> f32 { self.bearing_error }
    pub fn turn(&self) -> TurnDirection { self.turn }
    pub fn altitude(&self) -> AltitudeDirection { self.altitude }
    pub fn advance(&self) -> bool { self.advance }
}

impl std::fmt::Display for NavigationIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "bearing error {:.1} deg, turn {}, altitude {}, advance {}",
            self.bearing_error, self.turn, self.altitude, self.advance
        )
    }
}
