//! Zapline Game - Player locomotion and game logic
//!
//! Provides the player locomotion state machine, action-based input
//! handling, and the orientation updater.

pub mod error;
pub mod input;
pub mod player;

pub use error::ConfigError;
pub use input::{InputAction, InputBindings, InputHandler, InputState};
pub use player::{
    Facing, MoveMode, MovementParams, Orientation, PlayerConfig, PlayerController,
};
