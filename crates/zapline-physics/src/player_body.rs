//! Player body: switchable hit shapes plus an optional dynamic rigid body
//!
//! Every player carries two mutually-exclusive hit shapes: a capsule used
//! while airborne and a flatter box used while grounded. Exactly one of the
//! two is enabled at any instant; [`PlayerBody::sync_hit_shapes`] flips them
//! as the ground state changes.
//!
//! In kinematic mode the body is just the two colliders, moved by direct
//! translation. In dynamic mode they are parented to a rapier rigid body
//! that integrates impulses.

use glam::Vec2;
use rapier2d::prelude::*;
use tracing::trace;

use crate::{layers, PhysicsWorld};

/// Player body shape configuration
#[derive(Debug, Clone)]
pub struct PlayerBodyConfig {
    /// Half height of the airborne capsule's cylindrical part
    pub capsule_half_height: f32,
    /// Capsule radius
    pub capsule_radius: f32,
    /// Half extents of the grounded box shape
    pub ground_half_extents: Vec2,
    /// Body mass in dynamic mode
    pub mass: f32,
}

impl Default for PlayerBodyConfig {
    fn default() -> Self {
        Self {
            capsule_half_height: 0.5,
            capsule_radius: 0.3,
            // Same feet height as the capsule so swapping shapes never
            // drops or lifts the body
            ground_half_extents: Vec2::new(0.3, 0.8),
            mass: 1.0,
        }
    }
}

/// The player's presence in the physics world
pub struct PlayerBody {
    /// Shape configuration
    pub config: PlayerBodyConfig,
    /// Cached position; authoritative in kinematic mode
    position: Vec2,
    /// Rigid body handle, present in dynamic mode only
    body: Option<RigidBodyHandle>,
    /// Airborne hit shape
    air_shape: ColliderHandle,
    /// Grounded hit shape
    ground_shape: ColliderHandle,
}

impl PlayerBody {
    /// Spawn a kinematically moved body: two colliders, no rigid body
    pub fn spawn_kinematic(
        physics: &mut PhysicsWorld,
        config: PlayerBodyConfig,
        position: Vec2,
    ) -> Self {
        let (air, ground) = Self::build_shapes(&config);
        let air_shape = physics.collider_set.insert(
            air.translation(vector![position.x, position.y]).build(),
        );
        let ground_shape = physics.collider_set.insert(
            ground.translation(vector![position.x, position.y]).build(),
        );

        Self {
            config,
            position,
            body: None,
            air_shape,
            ground_shape,
        }
    }

    /// Spawn a dynamic body integrating impulses, rotation locked
    pub fn spawn_dynamic(
        physics: &mut PhysicsWorld,
        config: PlayerBodyConfig,
        position: Vec2,
    ) -> Self {
        let rigid_body = RigidBodyBuilder::dynamic()
            .translation(vector![position.x, position.y])
            .lock_rotations()
            .additional_mass(config.mass)
            .build();
        let body = physics.rigid_body_set.insert(rigid_body);

        let (air, ground) = Self::build_shapes(&config);
        let air_shape = physics.collider_set.insert_with_parent(
            air.build(),
            body,
            &mut physics.rigid_body_set,
        );
        let ground_shape = physics.collider_set.insert_with_parent(
            ground.build(),
            body,
            &mut physics.rigid_body_set,
        );

        Self {
            config,
            position,
            body: Some(body),
            air_shape,
            ground_shape,
        }
    }

    /// Build the two hit shape colliders, air enabled initially
    fn build_shapes(config: &PlayerBodyConfig) -> (ColliderBuilder, ColliderBuilder) {
        let groups = InteractionGroups::new(layers::PLAYER, Group::ALL);

        let air = ColliderBuilder::capsule_y(config.capsule_half_height, config.capsule_radius)
            .collision_groups(groups)
            .density(0.0)
            .friction(0.0)
            .restitution(0.0)
            .enabled(true);
        let ground = ColliderBuilder::cuboid(
            config.ground_half_extents.x,
            config.ground_half_extents.y,
        )
        .collision_groups(groups)
        .density(0.0)
        .friction(0.0)
        .restitution(0.0)
        .enabled(false);

        (air, ground)
    }

    /// Whether this body is integrated by the physics solver
    pub fn is_dynamic(&self) -> bool {
        self.body.is_some()
    }

    /// Current world position
    pub fn position(&self, physics: &PhysicsWorld) -> Vec2 {
        match self.body.and_then(|h| physics.get_rigid_body(h)) {
            Some(body) => {
                let t = body.translation();
                Vec2::new(t.x, t.y)
            }
            None => self.position,
        }
    }

    /// Move a kinematic body by a position delta; no-op in dynamic mode
    pub fn translate(&mut self, physics: &mut PhysicsWorld, delta: Vec2) {
        if self.body.is_some() {
            return;
        }
        self.position += delta;
        self.sync_shape_translations(physics);
    }

    /// Teleport the body, both modes
    pub fn set_position(&mut self, physics: &mut PhysicsWorld, position: Vec2) {
        self.position = position;
        if let Some(body) = self.body.and_then(|h| physics.rigid_body_set.get_mut(h)) {
            body.set_translation(vector![position.x, position.y], true);
        } else {
            self.sync_shape_translations(physics);
        }
    }

    fn sync_shape_translations(&self, physics: &mut PhysicsWorld) {
        for handle in [self.air_shape, self.ground_shape] {
            if let Some(collider) = physics.collider_set.get_mut(handle) {
                collider.set_translation(vector![self.position.x, self.position.y]);
            }
        }
    }

    /// Linear velocity; zero in kinematic mode
    pub fn linvel(&self, physics: &PhysicsWorld) -> Vec2 {
        match self.body.and_then(|h| physics.get_rigid_body(h)) {
            Some(body) => {
                let v = body.linvel();
                Vec2::new(v.x, v.y)
            }
            None => Vec2::ZERO,
        }
    }

    /// Apply an impulse to a dynamic body; no-op in kinematic mode
    pub fn apply_impulse(&self, physics: &mut PhysicsWorld, impulse: Vec2) {
        if let Some(body) = self.body.and_then(|h| physics.rigid_body_set.get_mut(h)) {
            body.apply_impulse(vector![impulse.x, impulse.y], true);
        }
    }

    /// Enable the hit shape matching the ground state, disable the other.
    ///
    /// Keeps the invariant that exactly one of the two shapes is enabled.
    pub fn sync_hit_shapes(&self, physics: &mut PhysicsWorld, grounded: bool) {
        if let Some(air) = physics.collider_set.get_mut(self.air_shape) {
            air.set_enabled(!grounded);
        }
        if let Some(ground) = physics.collider_set.get_mut(self.ground_shape) {
            ground.set_enabled(grounded);
        }
        trace!(grounded, "hit shapes synced");
    }

    /// Enabled state of (air shape, ground shape), for invariant checks
    pub fn hit_shape_states(&self, physics: &PhysicsWorld) -> (bool, bool) {
        let air = physics
            .get_collider(self.air_shape)
            .map(|c| c.is_enabled())
            .unwrap_or(false);
        let ground = physics
            .get_collider(self.ground_shape)
            .map(|c| c.is_enabled())
            .unwrap_or(false);
        (air, ground)
    }
}
