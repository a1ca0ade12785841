//! Values returned from strategy callbacks to the simulator

use serde::{Deserialize, Serialize};

use super::{Vector2, Wheel, reverse_rotation};

/// Number of robots a team fields.
pub const TEAM_SIZE: usize = 5;

/// Number of poses returned by a placement callback.
pub const PLACEMENT_SLOTS: usize = 6;

/// Identification returned from `get_team_info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub team_name: String,
}

/// Wheel commands for every robot of the own team for one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// One entry per robot, in roster order
    pub wheels: Vec<Wheel>,
    /// Placeholder control word, always 0 for now
    pub control_info: i32,
}

impl Instruction {
    /// Flatten into `(left_speed, right_speed)` pairs.
    pub fn pairs(&self) -> Vec<(f32, f32)> {
        self.wheels.iter().map(|wheel| (wheel.left_speed, wheel.right_speed)).collect()
    }
}

/// Requested position and heading for one placement slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
}

impl Pose {
    pub fn new(x: f32, y: f32, rotation: f32) -> Self {
        Self { x, y, rotation }
    }

    pub fn position(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    pub fn reversed(self) -> Self {
        Self { x: -self.x, y: -self.y, rotation: reverse_rotation(self.rotation) }
    }
}

/// Poses requested before a restart, as `(x, y, rotation)` triples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub poses: Vec<Pose>,
}

impl Placement {
    pub fn reversed(&self) -> Self {
        Self { poses: self.poses.iter().map(|pose| pose.reversed()).collect() }
    }

    /// Flatten into `(x, y, rotation)` triples.
    pub fn triples(&self) -> Vec<(f32, f32, f32)> {
        self.poses.iter().map(|pose| (pose.x, pose.y, pose.rotation)).collect()
    }
}
