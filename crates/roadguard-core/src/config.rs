//! Game configuration: read-only inputs fixed at world construction.
//!
//! Mirrors the shape of `settings.json`: a `window` section and a `game`
//! rules section, each field falling back to its default when the file is
//! missing or partial. Loading never writes the file back.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Window parameters the host hands to the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            title: "Roadguard".to_string(),
            fps: TICK_RATE,
        }
    }
}

/// Rules the world is constructed with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub starting_health: i32,
    pub starting_balance: i32,
    pub tower_cost: i32,
    /// Base enemy speed in pixels per frame; actual spawn speeds are
    /// jittered around this.
    pub enemy_speed: f32,
    /// Interval between spawn batches (milliseconds).
    pub spawn_interval_ms: u64,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            starting_health: DEFAULT_STARTING_HEALTH,
            starting_balance: DEFAULT_STARTING_BALANCE,
            tower_cost: DEFAULT_TOWER_COST,
            enemy_speed: DEFAULT_ENEMY_SPEED,
            spawn_interval_ms: DEFAULT_SPAWN_INTERVAL_MS,
        }
    }
}

/// Complete configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub game: GameRules,
}

impl GameConfig {
    /// Read configuration from a JSON file, falling back to defaults when
    /// the file is absent or unparseable. Partial files keep defaults for
    /// the fields they omit.
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}
