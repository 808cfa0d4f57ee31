//! World snapshot — the complete visible state published after each frame.

use serde::{Deserialize, Serialize};

use crate::events::GameEvent;
use crate::types::Millis;

/// Complete world state broadcast to the frontend after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Simulation clock at the end of the frame (milliseconds).
    pub time_ms: Millis,
    pub health: i32,
    pub balance: i32,
    pub game_over: bool,
    pub score: ScoreView,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    /// Events raised since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// A live enemy on the road.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    /// Progress along the road (pixels from the left edge).
    pub position: f32,
    pub speed: f32,
    pub health: i32,
    pub max_health: i32,
}

/// A placed tower and its in-flight projectiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TowerView {
    pub x: f32,
    pub y: f32,
    pub selected: bool,
    pub projectiles: Vec<ProjectileView>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub x: f32,
    pub y: f32,
}

/// Running totals for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub enemies_destroyed: u32,
    pub enemies_leaked: u32,
    pub towers_placed: u32,
}
