//! Player locomotion module
//!
//! The locomotion state machine with its two movement modes, tuning
//! parameters, and the visual orientation updater.

mod controller;
mod movement;
mod orientation;

pub use controller::{MoveMode, PlayerConfig, PlayerController};
pub use movement::MovementParams;
pub use orientation::{Facing, Orientation};
