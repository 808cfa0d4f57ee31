//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Pointer interaction (tower placement and selection) ---
    /// Primary button pressed.
    PointerDown { x: f32, y: f32 },
    /// Primary button released.
    PointerUp { x: f32, y: f32 },
    /// Pointer moved (only meaningful mid-drag).
    PointerMoved { x: f32, y: f32 },

    // --- Session control ---
    /// Discard the current world and start a fresh one.
    NewGame,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
