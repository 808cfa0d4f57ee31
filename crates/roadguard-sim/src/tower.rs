//! Towers: stationary turrets that lock one target per frame, fire lead
//! shots on a cooldown, and own their projectiles' lifetimes.

use glam::Vec2;

use roadguard_core::constants::{
    PROJECTILE_SPEED, TOWER_COOLDOWN_MS, TOWER_DAMAGE, TOWER_RANGE,
};
use roadguard_core::draw::{self, DrawSurface, Drawable};
use roadguard_core::events::GameEvent;
use roadguard_core::state::ScoreView;
use roadguard_core::types::{Millis, Rect};
use roadguard_core::viewport::Viewport;

use crate::enemy::Enemy;
use crate::projectile::{Projectile, ProjectileStatus};

#[derive(Debug, Clone)]
pub struct Tower {
    center: Vec2,
    range: f32,
    cooldown_ms: Millis,
    damage: i32,
    /// `None` until the first shot, so a fresh tower fires as soon as it
    /// has an eligible target.
    last_shot_ms: Option<Millis>,
    pub selected: bool,
    projectiles: Vec<Projectile>,
}

impl Tower {
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            range: TOWER_RANGE,
            cooldown_ms: TOWER_COOLDOWN_MS,
            damage: TOWER_DAMAGE,
            last_shot_ms: None,
            selected: false,
            projectiles: Vec::new(),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    pub fn range(&self) -> f32 {
        self.range
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Footprint square, size derived from the viewport.
    pub fn footprint(&self, viewport: &Viewport) -> Rect {
        let size = viewport.tower_size();
        Rect::from_center(self.center, size, size)
    }

    /// Per-frame state machine: acquire a target, maybe fire, then advance
    /// and resolve every owned projectile.
    ///
    /// May remove dead enemies from `enemies`; collisions only ever damage
    /// the single enemy locked this frame.
    pub fn update(
        &mut self,
        now: Millis,
        enemies: &mut Vec<Enemy>,
        viewport: &Viewport,
        events: &mut Vec<GameEvent>,
        score: &mut ScoreView,
    ) {
        let mut target = self.acquire_target(enemies, viewport);

        if let Some(idx) = target {
            let ready = match self.last_shot_ms {
                Some(last) => now.saturating_sub(last) >= self.cooldown_ms,
                None => true,
            };
            if ready {
                self.shoot(&enemies[idx], viewport);
                self.last_shot_ms = Some(now);
            }
        }

        // Advance and resolve projectiles. Index-based so removal never
        // races a live iterator; order is preserved for determinism.
        let mut i = 0;
        while i < self.projectiles.len() {
            match self.projectiles[i].advance(viewport) {
                ProjectileStatus::ReachedTarget | ProjectileStatus::Offscreen => {
                    self.projectiles.remove(i);
                }
                ProjectileStatus::InFlight => {
                    let hit = target
                        .filter(|&idx| self.projectiles[i].check_hit(&enemies[idx], viewport));
                    if let Some(idx) = hit {
                        if enemies[idx].take_damage(self.damage) {
                            let dead = enemies.remove(idx);
                            events.push(GameEvent::EnemyDestroyed {
                                at_x: dead.position,
                            });
                            score.enemies_destroyed += 1;
                            // The frame's lock is gone; later projectiles
                            // cannot touch it again.
                            target = None;
                        }
                        // One hit consumes one projectile, kill or not.
                        self.projectiles.remove(i);
                    } else {
                        i += 1;
                    }
                }
            }
        }
    }

    /// Scan the live set for the nearest enemy that is within range and
    /// has not yet passed this tower's x position (towers never shoot
    /// backward). Ties go to the first enemy found in iteration order,
    /// which keeps acquisition deterministic.
    fn acquire_target(&self, enemies: &[Enemy], viewport: &Viewport) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (idx, enemy) in enemies.iter().enumerate() {
            if enemy.position > self.center.x {
                continue;
            }
            let distance = viewport.road_point(enemy.position).distance(self.center);
            if distance > self.range {
                continue;
            }
            match best {
                Some((_, d)) if distance >= d => {}
                _ => best = Some((idx, distance)),
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Fire a lead shot: estimate flight time from the horizontal offset
    /// and aim at the enemy's extrapolated road point, not its current one.
    fn shoot(&mut self, target: &Enemy, viewport: &Viewport) {
        let time_to_reach = (target.position - self.center.x).abs() / PROJECTILE_SPEED;
        let aim = Vec2::new(
            target.position + target.speed * time_to_reach,
            viewport.road_center_y(),
        );
        self.projectiles
            .push(Projectile::new(self.center, aim, PROJECTILE_SPEED));
    }
}

impl Drawable for Tower {
    fn draw(&self, surface: &mut dyn DrawSurface, viewport: &Viewport) {
        let rect = self.footprint(viewport);
        surface.fill_rect(rect, draw::BLUE);
        surface.stroke_rect(rect, draw::BLACK, 2.0);

        if self.selected {
            surface.stroke_rect(rect.inflate(2.0, 2.0), draw::GOLD, 2.0);
            surface.stroke_circle(self.center, self.range, draw::BLUE, 1.0);
        }

        for projectile in &self.projectiles {
            projectile.draw(surface, viewport);
        }
    }
}
