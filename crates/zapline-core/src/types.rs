//! Core types used throughout the Zapline game

use glam::{Mat4, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for game entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Create a new random entity ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an entity ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// 2D transform for entity positioning
///
/// Entities live on the XY plane. `yaw` is the rotation about the vertical
/// (Y) axis of the visual representation: 0 faces right, PI faces left. The
/// sprite stays on the plane; yaw only mirrors it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    pub yaw: f32,
    pub scale: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            yaw: 0.0,
            scale: Vec2::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Compute the model matrix for this transform
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::new(self.scale.x, self.scale.y, 1.0),
            Quat::from_rotation_y(self.yaw),
            Vec3::new(self.position.x, self.position.y, 0.0),
        )
    }

    /// Translate by the given offset
    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_matrix() {
        let transform = Transform::from_position(Vec2::new(1.0, 2.0));
        let matrix = transform.matrix();
        let translation = matrix.col(3).truncate();
        assert_eq!(translation, Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_translate() {
        let mut transform = Transform::default();
        transform.translate(Vec2::new(0.5, -0.25));
        assert_eq!(transform.position, Vec2::new(0.5, -0.25));
    }
}
