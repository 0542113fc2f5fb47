/// Errors raised while building a player entity.
///
/// These surface at construction; an entity that failed to build is never
/// ticked. Tick-time code has no failure paths.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("movement speed must be positive, got {0}")]
    InvalidSpeed(f32),

    #[error("move force must be positive, got {0}")]
    InvalidMoveForce(f32),

    #[error("force multiplier must be positive, got {0}")]
    InvalidForceMultiplier(f32),

    #[error("ground probe radius must be positive, got {0}")]
    InvalidProbeRadius(f32),
}
