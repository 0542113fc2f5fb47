//! Player locomotion state machine
//!
//! Owns horizontal intent, the kinematic motion vector, and the jump latch.
//! Each frame tick it samples input, resolves the ground state, syncs the
//! hit shapes and the facing. Each fixed tick it integrates movement in one
//! of two mutually-exclusive modes chosen at construction:
//!
//! - kinematic: direct position deltas, gravity sampled instantaneously
//! - physics: impulses on a dynamic rigid body, gated by current speed
//!
//! The grounded/airborne distinction is recomputed from the ground probe
//! every tick; it is never stored as an explicit state transition.

use std::sync::Arc;

use glam::Vec2;
use tracing::debug;

use zapline_core::{EntityId, Transform};
use zapline_physics::{GroundProbe, PhysicsWorld, PlayerBody, PlayerBodyConfig};

use crate::error::ConfigError;
use crate::input::{InputAction, InputState};

use super::{MovementParams, Orientation};

/// How movement is applied, fixed for the lifetime of the entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMode {
    /// Direct position displacement, bypassing the physics solver
    Kinematic,
    /// Impulses integrated by the physics solver
    Physics,
}

/// Everything needed to build a player entity.
///
/// References are constructor-injected; validity is checked once in
/// [`PlayerController::spawn`] and never again at tick time.
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Shared movement tuning profile
    pub params: Arc<MovementParams>,
    /// Ground sensor anchored at the feet
    pub probe: GroundProbe,
    /// Movement mode
    pub mode: MoveMode,
    /// Hit shape configuration
    pub body: PlayerBodyConfig,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        let body = PlayerBodyConfig::default();
        let feet = body.capsule_half_height + body.capsule_radius;
        Self {
            params: Arc::new(MovementParams::default()),
            probe: GroundProbe::new(Vec2::new(0.0, -feet), 0.1),
            mode: MoveMode::Kinematic,
            body,
        }
    }
}

/// Player locomotion controller
pub struct PlayerController {
    /// Entity identity
    pub id: EntityId,
    /// Visual transform, updated from the body and orientation each tick
    pub transform: Transform,

    params: Arc<MovementParams>,
    probe: GroundProbe,
    mode: MoveMode,
    body: PlayerBody,
    orientation: Orientation,

    /// Horizontal intent sampled this frame, in [-1, 1]
    horizontal_intent: f32,
    /// Kinematic motion vector; only rebuilt while intent is nonzero
    motion: Vec2,
    /// Jump latch: set by an edge-triggered input event, cleared only by
    /// jump application while grounded
    jump_requested: bool,
    /// Ground state derived each tick
    grounded: bool,
    /// Short-circuits both tick paths while set
    paused: bool,
}

impl PlayerController {
    /// Validate the configuration and spawn the player in the world.
    ///
    /// Fails with [`ConfigError`] if any tuning value is out of range; a
    /// failed entity is never ticked.
    pub fn spawn(
        physics: &mut PhysicsWorld,
        config: PlayerConfig,
        position: Vec2,
    ) -> Result<Self, ConfigError> {
        config.params.validate()?;
        if config.probe.radius <= 0.0 {
            return Err(ConfigError::InvalidProbeRadius(config.probe.radius));
        }

        let body = match config.mode {
            MoveMode::Kinematic => PlayerBody::spawn_kinematic(physics, config.body, position),
            MoveMode::Physics => PlayerBody::spawn_dynamic(physics, config.body, position),
        };
        physics.refresh_queries();

        debug!(mode = ?config.mode, ?position, "player spawned");

        Ok(Self {
            id: EntityId::new(),
            transform: Transform::from_position(position),
            params: config.params,
            probe: config.probe,
            mode: config.mode,
            body,
            orientation: Orientation::new(),
            horizontal_intent: 0.0,
            motion: Vec2::ZERO,
            jump_requested: false,
            grounded: false,
            paused: false,
        })
    }

    /// Frame tick: input sampling, ground resolve, collider sync, facing
    pub fn tick_frame(&mut self, physics: &mut PhysicsWorld, input: &InputState) {
        if self.paused {
            return;
        }

        self.horizontal_intent = input.horizontal_axis();
        if input.is_just_pressed(InputAction::Jump) {
            self.jump_requested = true;
        }

        let position = self.body.position(physics);
        let was_grounded = self.grounded;
        self.grounded = self.probe.is_grounded(physics, position);
        if self.grounded && !was_grounded {
            debug!(?position, "landed");
        }

        self.body.sync_hit_shapes(physics, self.grounded);
        self.orientation.apply_intent(self.horizontal_intent);

        self.transform.position = position;
        self.transform.yaw = self.orientation.yaw();
    }

    /// Fixed tick: movement integration for the configured mode
    pub fn tick_fixed(&mut self, physics: &mut PhysicsWorld, dt: f32) {
        if self.paused {
            return;
        }

        // The probe is idempotent within a tick, so re-querying here keeps
        // the fixed step from acting on a stale frame value.
        let position = self.body.position(physics);
        self.grounded = self.probe.is_grounded(physics, position);

        match self.mode {
            MoveMode::Kinematic => self.step_kinematic(physics, dt),
            MoveMode::Physics => self.step_physics(physics, dt),
        }

        self.transform.position = self.body.position(physics);
    }

    /// Kinematic mode: rebuild the motion vector while intent is nonzero,
    /// then displace by motion * dt. Zero intent leaves the previous vector
    /// in place, residual motion included.
    fn step_kinematic(&mut self, physics: &mut PhysicsWorld, dt: f32) {
        if self.horizontal_intent != 0.0 {
            // Instantaneous gravity sample while airborne; vertical speed
            // does not accumulate across ticks
            let vertical = if self.grounded {
                0.0
            } else {
                physics.config.gravity.y * self.params.gravity_scale
            };
            self.motion = Vec2::new(self.horizontal_intent * self.params.speed, vertical);
        }

        if self.jump_requested && self.grounded {
            self.motion.y += self.params.speed;
            self.jump_requested = false;
            debug!("jump applied (kinematic)");
        }

        self.body.translate(physics, self.motion * dt);
    }

    /// Physics mode: impulse along intent while below the speed gate, a
    /// single upward impulse for a grounded jump. No hard speed cap.
    fn step_physics(&mut self, physics: &mut PhysicsWorld, dt: f32) {
        let velocity = self.body.linvel(physics);

        if velocity.length() <= self.params.speed && self.horizontal_intent != 0.0 {
            let impulse = Vec2::new(
                self.horizontal_intent * self.params.move_force * self.params.force_multiplier,
                0.0,
            ) * dt;
            self.body.apply_impulse(physics, impulse);
        }

        if self.jump_requested && self.grounded {
            self.body
                .apply_impulse(physics, Vec2::new(0.0, self.params.move_force));
            self.jump_requested = false;
            debug!("jump applied (physics)");
        }
    }

    /// Teleport the player, clearing kinematic residual motion
    pub fn teleport(&mut self, physics: &mut PhysicsWorld, position: Vec2) {
        self.body.set_position(physics, position);
        self.motion = Vec2::ZERO;
        self.transform.position = position;
        physics.refresh_queries();
    }

    /// Current world position
    pub fn position(&self, physics: &PhysicsWorld) -> Vec2 {
        self.body.position(physics)
    }

    /// Ground state as of the last tick
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Whether a jump is latched and waiting for ground contact
    pub fn jump_pending(&self) -> bool {
        self.jump_requested
    }

    /// Movement mode of this entity
    pub fn mode(&self) -> MoveMode {
        self.mode
    }

    /// Pause or resume this entity; while paused both tick paths are
    /// short-circuited with no side effects
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Whether this entity is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The player's physics body
    pub fn body(&self) -> &PlayerBody {
        &self.body
    }

    /// Mutable access to the physics body
    pub fn body_mut(&mut self) -> &mut PlayerBody {
        &mut self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zapline_physics::PhysicsConfig;

    const DT: f32 = 0.1;

    /// World with a ground strip whose top surface sits at y = 0
    fn flat_world() -> PhysicsWorld {
        let mut world = PhysicsWorld::with_config(PhysicsConfig {
            gravity: Vec2::new(0.0, -9.8),
            timestep: DT,
        });
        world.create_ground(Vec2::new(0.0, -0.5), Vec2::new(50.0, 0.5));
        world.refresh_queries();
        world
    }

    /// Capsule feet height for the default body config
    fn feet() -> f32 {
        let body = PlayerBodyConfig::default();
        body.capsule_half_height + body.capsule_radius
    }

    fn spawn(world: &mut PhysicsWorld, mode: MoveMode, position: Vec2) -> PlayerController {
        let config = PlayerConfig {
            mode,
            ..Default::default()
        };
        PlayerController::spawn(world, config, position).unwrap()
    }

    fn holding_right() -> InputState {
        let mut input = InputState::new();
        input.held.insert(InputAction::MoveRight);
        input
    }

    fn pressing_jump() -> InputState {
        let mut input = InputState::new();
        input.just_pressed.insert(InputAction::Jump);
        input
    }

    #[test]
    fn test_invalid_params_rejected_at_spawn() {
        let mut world = flat_world();
        let config = PlayerConfig {
            params: Arc::new(MovementParams {
                speed: -1.0,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(PlayerController::spawn(&mut world, config, Vec2::ZERO).is_err());
    }

    #[test]
    fn test_invalid_probe_rejected_at_spawn() {
        let mut world = flat_world();
        let config = PlayerConfig {
            probe: GroundProbe::new(Vec2::ZERO, 0.0),
            ..Default::default()
        };
        assert!(matches!(
            PlayerController::spawn(&mut world, config, Vec2::ZERO),
            Err(ConfigError::InvalidProbeRadius(_))
        ));
    }

    #[test]
    fn test_kinematic_grounded_displacement() {
        let mut world = flat_world();
        let mut player = spawn(&mut world, MoveMode::Kinematic, Vec2::new(0.0, feet()));

        player.tick_frame(&mut world, &holding_right());
        assert!(player.is_grounded());

        player.tick_fixed(&mut world, DT);

        // speed 5, intent 1, dt 0.1 -> dx = 0.5, grounded -> dy = 0
        let pos = player.position(&world);
        assert!((pos.x - 0.5).abs() < 1e-5);
        assert!((pos.y - feet()).abs() < 1e-5);
    }

    #[test]
    fn test_kinematic_airborne_gravity_sample() {
        let mut world = flat_world();
        let start = Vec2::new(0.0, 10.0);
        let mut player = spawn(&mut world, MoveMode::Kinematic, start);

        player.tick_frame(&mut world, &holding_right());
        assert!(!player.is_grounded());

        player.tick_fixed(&mut world, DT);

        // gravity -9.8, scale 1 -> vertical component -9.8 that tick
        let pos = player.position(&world);
        assert!((pos.y - (start.y - 9.8 * DT)).abs() < 1e-5);

        // Not re-integrated: the next tick falls at the same rate
        player.tick_fixed(&mut world, DT);
        let pos2 = player.position(&world);
        assert!((pos2.y - (start.y - 2.0 * 9.8 * DT)).abs() < 1e-5);
    }

    #[test]
    fn test_kinematic_residual_motion_on_zero_intent() {
        let mut world = flat_world();
        let mut player = spawn(&mut world, MoveMode::Kinematic, Vec2::new(0.0, feet()));

        player.tick_frame(&mut world, &holding_right());
        player.tick_fixed(&mut world, DT);
        let after_move = player.position(&world).x;

        // Intent back to zero: the motion vector is not rebuilt and not
        // cleared, so the entity keeps drifting
        player.tick_frame(&mut world, &InputState::new());
        player.tick_fixed(&mut world, DT);
        let after_idle = player.position(&world).x;
        assert!((after_idle - after_move - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_jump_latch_persists_while_airborne() {
        let mut world = flat_world();
        let mut player = spawn(&mut world, MoveMode::Kinematic, Vec2::new(0.0, 10.0));

        player.tick_frame(&mut world, &pressing_jump());
        assert!(player.jump_pending());

        // Latched across ticks until grounded
        for _ in 0..3 {
            player.tick_fixed(&mut world, DT);
            player.tick_frame(&mut world, &InputState::new());
            assert!(player.jump_pending());
        }

        // Land, then exactly one tick applies the jump and clears the latch
        player.teleport(&mut world, Vec2::new(0.0, feet()));
        player.tick_frame(&mut world, &InputState::new());
        assert!(player.is_grounded());

        let before = player.position(&world);
        player.tick_fixed(&mut world, DT);
        assert!(!player.jump_pending());

        let after = player.position(&world);
        // jump adds `speed` to the vertical component once
        assert!((after.y - before.y - 5.0 * DT).abs() < 1e-5);
    }

    #[test]
    fn test_physics_mode_applies_force_below_gate() {
        let mut world = flat_world();
        let mut player = spawn(&mut world, MoveMode::Physics, Vec2::new(0.0, feet()));

        player.tick_frame(&mut world, &holding_right());
        player.tick_fixed(&mut world, DT);

        let velocity = player.body().linvel(&world);
        // move_force 7 * multiplier 2 * dt 0.1 on unit mass
        assert!((velocity.x - 1.4).abs() < 1e-4);
    }

    #[test]
    fn test_physics_mode_gates_above_speed() {
        let mut world = flat_world();
        let mut player = spawn(&mut world, MoveMode::Physics, Vec2::new(0.0, feet()));

        // Push past the speed gate (speed = 5, unit mass)
        player.body().apply_impulse(&mut world, Vec2::new(8.0, 0.0));

        player.tick_frame(&mut world, &holding_right());
        player.tick_fixed(&mut world, DT);

        // Above the gate no additional force is applied this tick
        let velocity = player.body().linvel(&world);
        assert!((velocity.x - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_physics_mode_grounded_jump_impulse() {
        let mut world = flat_world();
        let mut player = spawn(&mut world, MoveMode::Physics, Vec2::new(0.0, feet()));

        player.tick_frame(&mut world, &pressing_jump());
        assert!(player.is_grounded());
        player.tick_fixed(&mut world, DT);

        assert!(!player.jump_pending());
        // Upward impulse of magnitude move_force on unit mass
        let velocity = player.body().linvel(&world);
        assert!((velocity.y - 7.0).abs() < 1e-4);
    }

    #[test]
    fn test_hit_shape_mutual_exclusion_every_tick() {
        let mut world = flat_world();
        let mut player = spawn(&mut world, MoveMode::Kinematic, Vec2::new(0.0, feet()));

        let positions = [Vec2::new(0.0, feet()), Vec2::new(0.0, 10.0), Vec2::new(0.0, feet())];
        for pos in positions {
            player.teleport(&mut world, pos);
            player.tick_frame(&mut world, &InputState::new());

            let (air, ground) = player.body().hit_shape_states(&world);
            assert_ne!(air, ground);
            assert_eq!(ground, player.is_grounded());
        }
    }

    #[test]
    fn test_pause_short_circuits_both_ticks() {
        let mut world = flat_world();
        let mut player = spawn(&mut world, MoveMode::Kinematic, Vec2::new(0.0, feet()));

        // Resolve ground state once so collider state is meaningful
        player.tick_frame(&mut world, &InputState::new());
        let shapes_before = player.body().hit_shape_states(&world);
        let position_before = player.position(&world);
        let yaw_before = player.transform.yaw;

        player.set_paused(true);

        let mut input = holding_right();
        input.just_pressed.insert(InputAction::Jump);

        for _ in 0..5 {
            player.tick_frame(&mut world, &input);
            player.tick_fixed(&mut world, DT);
        }

        assert_eq!(player.position(&world), position_before);
        assert_eq!(player.body().hit_shape_states(&world), shapes_before);
        assert_eq!(player.transform.yaw, yaw_before);
        assert!(!player.jump_pending());

        // Resuming ticks normally again
        player.set_paused(false);
        player.tick_frame(&mut world, &holding_right());
        player.tick_fixed(&mut world, DT);
        assert!(player.position(&world).x > position_before.x);
    }
}
