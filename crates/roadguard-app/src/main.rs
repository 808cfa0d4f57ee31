//! Headless demo run: builds a world from `settings.json` (or defaults),
//! places an opening line of towers through the shop flow, simulates a
//! minute of play with a synthetic clock, and prints the outcome.

use std::path::Path;

use glam::Vec2;

use roadguard_core::config::GameConfig;
use roadguard_core::constants::TICK_MS;
use roadguard_core::viewport::Viewport;
use roadguard_sim::world::World;

/// Buy towers through the shop flow, spread along the road's near side,
/// until the balance runs out or a drop point is rejected (the line has
/// reached the window edge).
fn buy_opening_towers(world: &mut World, viewport: &Viewport, tower_cost: i32) {
    let grab = viewport.shop_preview_rect().center();
    let tower_y = viewport.road_band().0 - 60.0;

    let mut slot = 0;
    while world.balance() >= tower_cost {
        let x = 200.0 + slot as f32 * 240.0;
        let before = world.towers().len();
        world.handle_pointer_down(grab);
        world.handle_pointer_up(Vec2::new(x, tower_y));
        if world.towers().len() == before {
            // Rejected release: no further slot along this line can fit.
            break;
        }
        slot += 1;
    }
}

fn main() {
    let config = GameConfig::load_or_default(Path::new("settings.json"));
    let viewport = Viewport::new(config.window.width, config.window.height);
    let mut world = World::new(config.game.clone(), viewport, 42, 0);

    buy_opening_towers(&mut world, &viewport, config.game.tower_cost);

    let mut frames = 0u64;
    while frames < 60 * 60 {
        frames += 1;
        if world.update(frames * TICK_MS) {
            break;
        }
    }

    let snapshot = world.snapshot(frames * TICK_MS);
    println!(
        "simulated {:.1}s: health {}, balance {}, {} towers, {} enemies live",
        (frames * TICK_MS) as f64 / 1000.0,
        snapshot.health,
        snapshot.balance,
        snapshot.towers.len(),
        snapshot.enemies.len(),
    );
    println!(
        "score: {} destroyed, {} leaked, game over: {}",
        snapshot.score.enemies_destroyed, snapshot.score.enemies_leaked, snapshot.game_over,
    );
}
