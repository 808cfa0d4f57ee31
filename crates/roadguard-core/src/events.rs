//! Events emitted by the simulation for UI and audio feedback.
//!
//! The world collects events during a frame; the snapshot drains them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// An enemy reached the far edge of the road.
    EnemyLeaked { remaining_health: i32 },
    /// An enemy was killed by a projectile.
    EnemyDestroyed { at_x: f32 },
    /// A tower was committed at the given center point.
    TowerPlaced { x: f32, y: f32 },
    /// A placement was released on invalid ground and discarded.
    PlacementRejected { x: f32, y: f32 },
    /// Health reached zero this frame.
    GameOver,
}
