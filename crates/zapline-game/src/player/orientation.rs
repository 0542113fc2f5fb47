//! Visual facing driven by horizontal intent

use std::f32::consts::PI;

/// Which way the visual representation faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Yaw about the vertical axis for this facing
    pub fn yaw(self) -> f32 {
        match self {
            Facing::Right => 0.0,
            Facing::Left => PI,
        }
    }
}

/// Flips the visual 180 degrees about the vertical axis to match the sign
/// of horizontal intent. Zero intent leaves the current facing untouched,
/// and the yaw is set absolutely, so repeated calls with the same sign
/// never accumulate rotation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Orientation {
    facing: Facing,
}

impl Orientation {
    /// Create an orientation facing right
    pub fn new() -> Self {
        Self::default()
    }

    /// Update facing from the sign of horizontal intent.
    ///
    /// Returns true when the facing flipped.
    pub fn apply_intent(&mut self, intent: f32) -> bool {
        let target = if intent > 0.0 {
            Facing::Right
        } else if intent < 0.0 {
            Facing::Left
        } else {
            return false;
        };

        let flipped = target != self.facing;
        self.facing = target;
        flipped
    }

    /// Current facing
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Current yaw about the vertical axis
    pub fn yaw(&self) -> f32 {
        self.facing.yaw()
    }
}
