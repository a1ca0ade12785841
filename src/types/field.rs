//! Field snapshot types

use serde::{Deserialize, Serialize};

use super::{Vector2, Wheel, reverse_rotation};

/// One simulated robot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Robot {
    pub position: Vector2,
    /// Heading in degrees
    pub rotation: f32,
    pub wheel: Wheel,
}

impl Robot {
    /// Mirror the robot into the opposite half; wheel speeds are unaffected.
    pub fn reversed(self) -> Self {
        Self {
            position: self.position.reversed(),
            rotation: reverse_rotation(self.rotation),
            wheel: self.wheel,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ball {
    pub position: Vector2,
}

/// Complete snapshot for one simulation step.
///
/// Rebuilt from the incoming payload on every callback and dropped when the
/// callback returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Field {
    pub self_robots: Vec<Robot>,
    pub opponent_robots: Vec<Robot>,
    pub ball: Ball,
    /// Simulation step counter, non-decreasing within a match
    pub tick: i32,
}

impl Field {
    /// Mirror every position and heading, as seen by the team defending the other goal.
    ///
    /// Roster order and tick are preserved.
    pub fn reversed(&self) -> Self {
        Self {
            self_robots: self.self_robots.iter().map(|robot| robot.reversed()).collect(),
            opponent_robots: self.opponent_robots.iter().map(|robot| robot.reversed()).collect(),
            ball: Ball { position: self.ball.position.reversed() },
            tick: self.tick,
        }
    }
}
