//! The world: owns enemies, towers, economy, and health; orchestrates the
//! per-frame update and validates tower placement.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use roadguard_core::config::GameRules;
use roadguard_core::constants::{ENEMY_SPEED_JITTER, ROAD_STRIPE_SPACING, ROAD_STRIPE_WIDTH, SPAWN_BATCH_SIZE};
use roadguard_core::draw::{self, DrawSurface, Drawable};
use roadguard_core::events::GameEvent;
use roadguard_core::state::{EnemyView, ProjectileView, ScoreView, TowerView, WorldSnapshot};
use roadguard_core::types::{Millis, Rect};
use roadguard_core::viewport::Viewport;

use crate::enemy::{Enemy, EnemyStatus};
use crate::tower::Tower;

/// The simulation world. Sole owner of enemy and tower lifetimes; each
/// tower owns its own projectiles. Single-threaded by construction: the
/// caller drives `update` once per frame with a monotonic millisecond
/// clock sampled once per frame.
pub struct World {
    viewport: Viewport,
    rules: GameRules,
    health: i32,
    balance: i32,
    towers: Vec<Tower>,
    enemies: Vec<Enemy>,
    /// In-progress placement, dragged from the shop. Not yet part of the
    /// tower set; committed or discarded on pointer release.
    preview: Option<Tower>,
    preview_valid: bool,
    dragging: bool,
    last_spawn_ms: Millis,
    rng: ChaCha8Rng,
    score: ScoreView,
    pending_events: Vec<GameEvent>,
    game_over: bool,
}

impl World {
    /// Build a world and spawn the opening batch. `now` is the caller's
    /// clock at construction; the spawn timer starts from it. Same seed,
    /// same clock sequence = same session.
    pub fn new(rules: GameRules, viewport: Viewport, seed: u64, now: Millis) -> Self {
        let mut world = Self {
            viewport,
            health: rules.starting_health,
            balance: rules.starting_balance,
            rules,
            towers: Vec::new(),
            enemies: Vec::new(),
            preview: None,
            preview_valid: false,
            dragging: false,
            last_spawn_ms: now,
            rng: ChaCha8Rng::seed_from_u64(seed),
            score: ScoreView::default(),
            pending_events: Vec::new(),
            game_over: false,
        };
        world.spawn_batch();
        world
    }

    /// Advance the world one frame. Returns true iff the session is over
    /// (health reached zero).
    pub fn update(&mut self, now: Millis) -> bool {
        if self.game_over {
            return true;
        }

        // 1. Spawn check.
        if now.saturating_sub(self.last_spawn_ms) >= self.rules.spawn_interval_ms {
            self.spawn_batch();
            self.last_spawn_ms = now;
        }

        // 2. Enemy advance pass. Index-based iteration so removal never
        // overlaps a live iterator.
        let road_length = self.viewport.road_length();
        let mut i = 0;
        while i < self.enemies.len() {
            match self.enemies[i].advance(road_length) {
                EnemyStatus::Exited => {
                    // Removal is mandatory even when this ends the game.
                    self.enemies.remove(i);
                    self.health -= 1;
                    self.score.enemies_leaked += 1;
                    self.pending_events.push(GameEvent::EnemyLeaked {
                        remaining_health: self.health,
                    });
                    if self.health <= 0 {
                        self.game_over = true;
                        self.pending_events.push(GameEvent::GameOver);
                        return true;
                    }
                }
                EnemyStatus::Alive => i += 1,
            }
        }

        // 3. Tower pass: targeting, firing, projectile resolution. May
        // remove dead enemies from the live set.
        for tower in &mut self.towers {
            tower.update(
                now,
                &mut self.enemies,
                &self.viewport,
                &mut self.pending_events,
                &mut self.score,
            );
        }

        false
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn balance(&self) -> i32 {
        self.balance
    }

    pub fn score(&self) -> ScoreView {
        self.score
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn towers(&self) -> &[Tower] {
        &self.towers
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Swap in a new viewport after a resolution change. All dependent
    /// geometry (road band, footprint sizes) is derived from the viewport
    /// at use sites, so nothing else needs recomputing.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn spawn_batch(&mut self) {
        let base = self.rules.enemy_speed;
        let lo = base * (1.0 - ENEMY_SPEED_JITTER);
        let hi = base * (1.0 + ENEMY_SPEED_JITTER);
        for _ in 0..SPAWN_BATCH_SIZE {
            let speed = self.rng.gen_range(lo..=hi);
            self.enemies.push(Enemy::new(speed));
        }
    }

    // --- Placement interaction ---

    /// Pointer pressed: a press on the shop's preview square (with enough
    /// balance) starts a drag; a press on a placed tower toggles its
    /// selection.
    pub fn handle_pointer_down(&mut self, p: Vec2) {
        let (shop_y, shop_h) = self.viewport.shop_band();
        if p.y >= shop_y && p.y <= shop_y + shop_h {
            if self.viewport.shop_preview_rect().contains(p)
                && self.balance >= self.rules.tower_cost
            {
                self.preview = Some(Tower::new(p));
                self.preview_valid = self.is_valid_placement(p);
                self.dragging = true;
            }
            return;
        }

        for tower in &mut self.towers {
            if tower.footprint(&self.viewport).contains(p) {
                tower.selected = !tower.selected;
                return;
            }
        }
    }

    /// Pointer moved mid-drag: carry the preview along and revalidate so
    /// the draw pass can tint it.
    pub fn handle_pointer_moved(&mut self, p: Vec2) {
        if !self.dragging {
            return;
        }
        if let Some(preview) = &mut self.preview {
            preview.set_center(p);
            self.preview_valid = self.is_valid_placement(p);
        }
    }

    /// Pointer released: commit the placement iff validation passes at
    /// this moment and the balance still covers the cost; otherwise the
    /// drag is discarded with no balance change.
    pub fn handle_pointer_up(&mut self, p: Vec2) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        let Some(mut tower) = self.preview.take() else {
            return;
        };

        if self.is_valid_placement(p) && self.balance >= self.rules.tower_cost {
            tower.set_center(p);
            self.towers.push(tower);
            self.balance -= self.rules.tower_cost;
            self.score.towers_placed += 1;
            self.pending_events
                .push(GameEvent::TowerPlaced { x: p.x, y: p.y });
        } else {
            self.pending_events
                .push(GameEvent::PlacementRejected { x: p.x, y: p.y });
        }
    }

    /// Whether a tower may be committed centered at `p`:
    /// - never on the road band;
    /// - never with its body poking past the horizontal window edges;
    /// - never within one tower-size of an existing tower center on both
    ///   axes (a coarse per-axis proximity rule, deliberately not a true
    ///   circular-overlap test).
    pub fn is_valid_placement(&self, p: Vec2) -> bool {
        let (road_y, road_h) = self.viewport.road_band();
        if p.y >= road_y && p.y <= road_y + road_h {
            return false;
        }

        let size = self.viewport.tower_size();
        let half = size / 2.0;
        if p.x < half || p.x > self.viewport.width - half {
            return false;
        }

        for tower in &self.towers {
            let center = tower.center();
            if (center.x - p.x).abs() < size && (center.y - p.y).abs() < size {
                return false;
            }
        }

        true
    }

    // --- Snapshot ---

    /// Build the frame's snapshot, draining pending events.
    pub fn snapshot(&mut self, now: Millis) -> WorldSnapshot {
        WorldSnapshot {
            time_ms: now,
            health: self.health,
            balance: self.balance,
            game_over: self.game_over,
            score: self.score,
            enemies: self
                .enemies
                .iter()
                .map(|e| EnemyView {
                    position: e.position,
                    speed: e.speed,
                    health: e.health(),
                    max_health: e.max_health(),
                })
                .collect(),
            towers: self
                .towers
                .iter()
                .map(|t| TowerView {
                    x: t.center().x,
                    y: t.center().y,
                    selected: t.selected,
                    projectiles: t
                        .projectiles()
                        .iter()
                        .map(|p| ProjectileView {
                            x: p.pos.x,
                            y: p.pos.y,
                        })
                        .collect(),
                })
                .collect(),
            events: std::mem::take(&mut self.pending_events),
        }
    }

    // --- Rendering ---

    /// Issue the frame's draw commands: road, enemies, towers, the drag
    /// preview tinted by validity, the shop band, and the health bar.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        self.draw_road(surface);

        for enemy in &self.enemies {
            enemy.draw(surface, &self.viewport);
        }
        for tower in &self.towers {
            tower.draw(surface, &self.viewport);
        }

        if let Some(preview) = &self.preview {
            let tint = if self.preview_valid {
                draw::BLUE
            } else {
                draw::RED
            };
            let rect = preview.footprint(&self.viewport);
            surface.fill_rect(rect, tint);
            surface.stroke_rect(rect, draw::BLACK, 2.0);
        }

        self.draw_shop(surface);
        self.draw_health_bar(surface);
    }

    fn draw_road(&self, surface: &mut dyn DrawSurface) {
        let road = self.viewport.road_rect();
        surface.fill_rect(road, draw::DARK_GRAY);

        // Center-line stripes.
        let stripe_h = road.h / 2.0;
        let stripe_y = road.y + (road.h - stripe_h) / 2.0;
        let mut x = 0.0;
        while x < self.viewport.width {
            surface.fill_rect(
                Rect::new(x, stripe_y, ROAD_STRIPE_WIDTH, stripe_h),
                draw::WHITE,
            );
            x += ROAD_STRIPE_SPACING;
        }
    }

    fn draw_shop(&self, surface: &mut dyn DrawSurface) {
        let (shop_y, shop_h) = self.viewport.shop_band();
        surface.fill_rect(
            Rect::new(0.0, shop_y, self.viewport.width, shop_h),
            draw::GRAY,
        );

        let preview = self.viewport.shop_preview_rect();
        surface.fill_rect(preview, draw::BLUE);
        surface.stroke_rect(preview, draw::BLACK, 2.0);
    }

    fn draw_health_bar(&self, surface: &mut dyn DrawSurface) {
        let bar = self.viewport.health_bar_rect();
        surface.fill_rect(bar, draw::DARK_RED);

        let fraction =
            (self.health.max(0) as f32 / self.rules.starting_health.max(1) as f32).min(1.0);
        surface.fill_rect(
            Rect::new(bar.x, bar.y, bar.w * fraction, bar.h),
            draw::GREEN,
        );
    }

    // --- Test scaffolding ---

    /// Drop every live enemy (for scenario tests that stage their own).
    #[cfg(test)]
    pub fn clear_enemies(&mut self) {
        self.enemies.clear();
    }

    /// Stage a single enemy at the road start with a fixed speed.
    #[cfg(test)]
    pub fn spawn_enemy(&mut self, speed: f32) {
        self.enemies.push(Enemy::new(speed));
    }

    /// Stage an enemy mid-road (for lane-exit scenarios).
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, position: f32, speed: f32) {
        let mut enemy = Enemy::new(speed);
        enemy.position = position;
        self.enemies.push(enemy);
    }

    /// Place a tower directly, bypassing the shop drag.
    #[cfg(test)]
    pub fn add_tower(&mut self, center: Vec2) {
        self.towers.push(Tower::new(center));
    }

    #[cfg(test)]
    pub fn set_health(&mut self, health: i32) {
        self.health = health;
    }
}
