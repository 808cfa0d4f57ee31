//! State shared between the host layer and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use roadguard_core::commands::PlayerCommand;
use roadguard_core::state::WorldSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the world.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest-snapshot slot shared with the game loop thread. The loop writes
/// after every frame; the render layer polls whenever it likes.
pub type SharedSnapshot = Arc<Mutex<Option<WorldSnapshot>>>;

/// Host-side handle to a running game loop.
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    pub latest_snapshot: SharedSnapshot,
}
