//! Ground sensing via a circle overlap probe

use glam::Vec2;
use rapier2d::geometry::Group;

use crate::{layers, PhysicsWorld};

/// Read-only ground sensor configuration.
///
/// The probe is anchored relative to the entity's position (typically at the
/// feet) and reports contact with any collider on `ground_mask`. It is a
/// pure query: repeated calls within the same tick return the same answer,
/// and a world with no query data reports airborne rather than failing.
#[derive(Debug, Clone, Copy)]
pub struct GroundProbe {
    /// Offset from the entity position to the probe center
    pub origin_offset: Vec2,
    /// Probe radius
    pub radius: f32,
    /// Surface categories that count as ground
    pub ground_mask: Group,
}

impl GroundProbe {
    /// Create a probe with the given anchor offset and radius
    pub fn new(origin_offset: Vec2, radius: f32) -> Self {
        Self {
            origin_offset,
            radius,
            ground_mask: layers::WALKABLE,
        }
    }

    /// Restrict the probe to a custom set of surface categories
    pub fn with_mask(mut self, mask: Group) -> Self {
        self.ground_mask = mask;
        self
    }

    /// Whether the entity at `position` currently contacts walkable ground
    pub fn is_grounded(&self, physics: &PhysicsWorld, position: Vec2) -> bool {
        physics.circle_overlap(position + self.origin_offset, self.radius, self.ground_mask)
    }
}
