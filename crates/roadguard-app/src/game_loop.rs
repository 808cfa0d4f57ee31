//! Game loop thread — runs the world at the configured frame rate.
//!
//! The world is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc`; snapshots go out through the
//! shared latest-snapshot slot. The loop owns the only blocking sleep in
//! the program; inside the simulation all waiting is clock comparison.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use roadguard_core::commands::PlayerCommand;
use roadguard_core::config::GameConfig;
use roadguard_core::types::Millis;
use roadguard_core::viewport::Viewport;
use roadguard_sim::world::World;

use crate::state::{AppState, GameLoopCommand, SharedSnapshot};

/// Spawns the game loop in a new thread and returns the host-side handle.
pub fn spawn_game_loop(config: GameConfig, seed: u64) -> AppState {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    std::thread::Builder::new()
        .name("roadguard-game-loop".into())
        .spawn(move || {
            run_game_loop(config, seed, cmd_rx, &shared);
        })
        .expect("Failed to spawn game loop thread");

    AppState {
        command_tx: cmd_tx,
        latest_snapshot,
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
///
/// The simulation clock advances by one frame of milliseconds per active
/// frame, so pausing freezes cooldowns and spawn timers instead of letting
/// them fast-forward on resume.
fn run_game_loop(
    config: GameConfig,
    seed: u64,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<roadguard_core::state::WorldSnapshot>>,
) {
    let frame_duration = frame_duration(config.window.fps);
    let frame_ms = frame_duration.as_millis() as Millis;

    let viewport = Viewport::new(config.window.width, config.window.height);
    let mut world = World::new(config.game.clone(), viewport, seed, 0);
    let mut clock: Millis = 0;
    let mut paused = false;
    let mut next_frame_time = Instant::now();

    loop {
        // 1. Drain all pending commands.
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => match cmd {
                    PlayerCommand::PointerDown { x, y } => {
                        world.handle_pointer_down(glam::Vec2::new(x, y));
                    }
                    PlayerCommand::PointerUp { x, y } => {
                        world.handle_pointer_up(glam::Vec2::new(x, y));
                    }
                    PlayerCommand::PointerMoved { x, y } => {
                        world.handle_pointer_moved(glam::Vec2::new(x, y));
                    }
                    PlayerCommand::NewGame => {
                        clock = 0;
                        world = World::new(config.game.clone(), viewport, seed, 0);
                        paused = false;
                    }
                    PlayerCommand::Pause => paused = true,
                    PlayerCommand::Resume => paused = false,
                },
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame. Game over leaves the world inspectable but
        // inert until NewGame discards it.
        if !paused && !world.is_game_over() {
            clock += frame_ms;
            world.update(clock);
        }

        // 3. Publish the snapshot for the render layer.
        let snapshot = world.snapshot(clock);
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next frame boundary.
        next_frame_time += frame_duration;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame_duration * 2 {
            // Too far behind — reset to avoid catch-up spiral.
            next_frame_time = now;
        }
    }
}

/// Nominal duration of one frame at the given rate.
fn frame_duration(fps: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / fps.max(1) as u64)
}
