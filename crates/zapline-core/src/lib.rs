//! Zapline Core - Core types and utilities for the Zapline platformer
//!
//! This crate provides the foundational types used throughout the game:
//! - Mathematical primitives (re-exported from glam)
//! - 2D transform for entity positioning and facing
//! - Fixed-timestep time system driving the frame/fixed tick split

pub mod time;
pub mod types;

pub use glam::{Mat4, Vec2};
pub use time::{GameTime, TimeConfig};
pub use types::{EntityId, Transform};
