//! Projectiles: unguided points fired from a tower at a fixed aim point.

use glam::Vec2;

use roadguard_core::constants::PROJECTILE_RADIUS;
use roadguard_core::draw::{self, DrawSurface, Drawable};
use roadguard_core::viewport::Viewport;

use crate::enemy::Enemy;

/// Outcome of advancing a projectile one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileStatus {
    InFlight,
    /// Crossed its aim point; the owning tower destroys it.
    ReachedTarget,
    /// Left the playfield; the owning tower destroys it.
    Offscreen,
}

/// A projectile in flight. The velocity vector is computed once at launch
/// and never changes: no homing, straight-line travel.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    target: Vec2,
    vel: Vec2,
    radius: f32,
}

impl Projectile {
    /// Launch from `origin` toward `target` at `speed` pixels per frame.
    /// If origin equals target the velocity is the zero vector; the
    /// projectile never moves and the reach check removes it next frame.
    pub fn new(origin: Vec2, target: Vec2, speed: f32) -> Self {
        let offset = target - origin;
        let distance = offset.length();
        let vel = if distance > 0.0 {
            offset / distance * speed
        } else {
            Vec2::ZERO
        };
        Self {
            pos: origin,
            target,
            vel,
            radius: PROJECTILE_RADIUS,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    /// Advance one frame and classify the result.
    ///
    /// The reach check is a sign crossing on the dominant (larger
    /// magnitude) velocity axis only. Near-diagonal shots can therefore
    /// overshoot the aim point slightly on the other axis before removal;
    /// that tolerance is deliberate, as hit timing depends on it. A zero
    /// dominant axis (the degenerate zero-velocity launch) counts as
    /// already reached.
    pub fn advance(&mut self, viewport: &Viewport) -> ProjectileStatus {
        self.pos += self.vel;

        let (v, p, t) = if self.vel.x.abs() >= self.vel.y.abs() {
            (self.vel.x, self.pos.x, self.target.x)
        } else {
            (self.vel.y, self.pos.y, self.target.y)
        };
        if v == 0.0 || (v > 0.0 && p >= t) || (v < 0.0 && p <= t) {
            return ProjectileStatus::ReachedTarget;
        }

        if !viewport.bounds().contains(self.pos) {
            return ProjectileStatus::Offscreen;
        }

        ProjectileStatus::InFlight
    }

    /// Whether the projectile disc overlaps the enemy's footprint this
    /// frame. Exact circle-vs-rectangle test (closest point on the
    /// footprint to the disc center), so grazing contact at the edge of a
    /// large enemy registers correctly. Pure query.
    pub fn check_hit(&self, enemy: &Enemy, viewport: &Viewport) -> bool {
        let footprint = enemy.footprint(viewport);
        let closest = footprint.closest_point(self.pos);
        closest.distance_squared(self.pos) <= self.radius * self.radius
    }
}

impl Drawable for Projectile {
    fn draw(&self, surface: &mut dyn DrawSurface, _viewport: &Viewport) {
        surface.fill_circle(self.pos, self.radius, draw::YELLOW_GREEN);
    }
}
