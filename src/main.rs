//! Zapline - 2D platformer locomotion demo
//!
//! Headless harness that drives the locomotion core through a scripted
//! input sequence: one kinematically moved player and one physics-driven
//! player share a flat level and the same tuning profile.

use std::sync::Arc;

use anyhow::{Context, Result};
use glam::Vec2;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use zapline_core::{GameTime, TimeConfig};
use zapline_game::{InputAction, InputState, MoveMode, PlayerConfig, PlayerController};
use zapline_physics::{PhysicsConfig, PhysicsWorld};

mod settings;

use settings::GameSettings;

/// Frames of scripted input at 60 fps
const DEMO_FRAMES: u32 = 360;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    info!("Starting Zapline locomotion demo...");

    let settings = GameSettings::load();

    // Flat level: a wide strip with its top surface at y = 0
    let mut physics = PhysicsWorld::with_config(PhysicsConfig {
        gravity: Vec2::new(0.0, settings.gameplay.gravity),
        timestep: settings.gameplay.fixed_timestep,
    });
    physics.create_ground(Vec2::new(0.0, -0.5), Vec2::new(100.0, 0.5));
    physics.refresh_queries();

    let params = Arc::new(settings.tuning.clone());
    let spawn_height = 0.8;

    let mut runner = PlayerController::spawn(
        &mut physics,
        PlayerConfig {
            params: Arc::clone(&params),
            mode: MoveMode::Kinematic,
            ..Default::default()
        },
        Vec2::new(0.0, spawn_height),
    )
    .context("failed to spawn kinematic player")?;

    let mut pusher = PlayerController::spawn(
        &mut physics,
        PlayerConfig {
            params,
            mode: MoveMode::Physics,
            ..Default::default()
        },
        Vec2::new(3.0, spawn_height),
    )
    .context("failed to spawn physics player")?;

    let mut time = GameTime::new(TimeConfig {
        fixed_timestep: settings.gameplay.fixed_timestep,
        ..Default::default()
    });

    let frame_dt = 1.0 / 60.0;
    let mut previous = InputState::new();

    for frame in 0..DEMO_FRAMES {
        let input = scripted_input(frame, &previous);
        time.update(frame_dt);

        runner.tick_frame(&mut physics, &input);
        pusher.tick_frame(&mut physics, &input);

        for _ in 0..time.fixed_steps() {
            let dt = time.config.fixed_timestep;
            runner.tick_fixed(&mut physics, dt);
            pusher.tick_fixed(&mut physics, dt);
            physics.step();
        }

        if frame % 60 == 0 {
            info!(
                frame,
                runner = ?runner.position(&physics),
                pusher = ?pusher.position(&physics),
                "tick"
            );
        }

        previous = input;
    }

    info!(
        runner = ?runner.position(&physics),
        pusher = ?pusher.position(&physics),
        "demo finished"
    );
    Ok(())
}

/// Scripted input: run right, jump, idle, run back left.
///
/// Edge-triggers the jump by comparing against the previous frame's held
/// set, the same contract a real input backend provides.
fn scripted_input(frame: u32, previous: &InputState) -> InputState {
    let mut input = InputState::new();

    match frame {
        0..=119 => {
            input.held.insert(InputAction::MoveRight);
        }
        120..=150 => {
            input.held.insert(InputAction::MoveRight);
            input.held.insert(InputAction::Jump);
        }
        151..=210 => {}
        _ => {
            input.held.insert(InputAction::MoveLeft);
        }
    }

    for action in &input.held {
        if !previous.held.contains(action) {
            input.just_pressed.insert(*action);
        }
    }
    for action in &previous.held {
        if !input.held.contains(action) {
            input.just_released.insert(*action);
        }
    }

    input
}
