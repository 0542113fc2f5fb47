//! Movement tuning parameters

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Immutable movement tuning data.
///
/// Created at content-authoring time, never mutated at runtime. Share one
/// profile across entities via `Arc<MovementParams>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementParams {
    /// Horizontal speed in meters per second (kinematic mode); also the
    /// jump offset magnitude and the velocity gate in physics mode
    pub speed: f32,
    /// Force magnitude for physics-mode movement and jump impulses
    pub move_force: f32,
    /// Gravity multiplier (1.0 = normal gravity)
    pub gravity_scale: f32,
    /// Multiplier applied to `move_force` for horizontal physics movement
    pub force_multiplier: f32,
}

impl Default for MovementParams {
    fn default() -> Self {
        Self {
            speed: 5.0,
            move_force: 7.0,
            gravity_scale: 1.0,
            force_multiplier: 2.0,
        }
    }
}

impl MovementParams {
    /// Check that all tuning values are in valid ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.speed <= 0.0 {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if self.move_force <= 0.0 {
            return Err(ConfigError::InvalidMoveForce(self.move_force));
        }
        if self.force_multiplier <= 0.0 {
            return Err(ConfigError::InvalidForceMultiplier(self.force_multiplier));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(MovementParams::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_nonpositive_speed() {
        let params = MovementParams {
            speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidSpeed(_))
        ));
    }

    #[test]
    fn test_rejects_nonpositive_force() {
        let params = MovementParams {
            move_force: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidMoveForce(_))
        ));
    }
}
