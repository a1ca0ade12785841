//! Planar geometry and drive primitives

use serde::{Deserialize, Serialize};

/// 2D position or offset on the pitch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point reflection through the centre spot.
    pub fn reversed(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

/// Drive command for the two wheels of one robot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Wheel {
    pub left_speed: f32,
    pub right_speed: f32,
}

impl Wheel {
    pub fn new(left_speed: f32, right_speed: f32) -> Self {
        Self { left_speed, right_speed }
    }
}

/// Rotate a heading by half a turn and wrap it into (-180, 180].
///
/// Any finite input is accepted, including headings beyond a full turn.
pub fn reverse_rotation(rotation: f32) -> f32 {
    let turned = (rotation + 180.0).rem_euclid(360.0);
    if turned > 180.0 { turned - 360.0 } else { turned }
}
