//! Enemies: the moving objects advancing along the road.

use roadguard_core::constants::ENEMY_MAX_HEALTH;
use roadguard_core::draw::{self, DrawSurface, Drawable};
use roadguard_core::types::Rect;
use roadguard_core::viewport::Viewport;

/// Outcome of advancing an enemy one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyStatus {
    /// Still traveling the road.
    Alive,
    /// Crossed the far edge this frame. Reported exactly once per enemy;
    /// the caller must remove it and charge the player.
    Exited,
}

/// An enemy on the road. Progress is a scalar along the road axis; the
/// vertical slot and footprint size derive from the viewport on demand.
#[derive(Debug, Clone)]
pub struct Enemy {
    /// Pixels traveled from the left edge. Monotonically increasing.
    pub position: f32,
    /// Pixels per frame, fixed at spawn.
    pub speed: f32,
    health: i32,
    max_health: i32,
    has_passed: bool,
}

impl Enemy {
    pub fn new(speed: f32) -> Self {
        Self {
            position: 0.0,
            speed,
            health: ENEMY_MAX_HEALTH,
            max_health: ENEMY_MAX_HEALTH,
            has_passed: false,
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn has_passed(&self) -> bool {
        self.has_passed
    }

    /// Move one frame forward. `Exited` latches: the crossing is reported
    /// the first frame position reaches `road_length` and never again.
    pub fn advance(&mut self, road_length: f32) -> EnemyStatus {
        self.position += self.speed;

        if !self.has_passed && self.position >= road_length {
            self.has_passed = true;
            return EnemyStatus::Exited;
        }

        EnemyStatus::Alive
    }

    /// Subtract damage, clamped at zero. Returns whether the enemy is now
    /// dead; the caller owns removal from the live set.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.health = (self.health - amount).max(0);
        self.health == 0
    }

    /// Collision footprint: a square centered on the enemy's road point.
    pub fn footprint(&self, viewport: &Viewport) -> Rect {
        let size = viewport.enemy_size();
        Rect::from_center(viewport.road_point(self.position), size, size)
    }
}

impl Drawable for Enemy {
    fn draw(&self, surface: &mut dyn DrawSurface, viewport: &Viewport) {
        surface.fill_rect(self.footprint(viewport), draw::RED);
    }
}
