//! Simulation constants and tuning parameters.

/// Frame rate the game loop targets (Hz).
pub const TICK_RATE: u32 = 60;

/// Milliseconds of simulated time per frame.
pub const TICK_MS: u64 = 1000 / TICK_RATE as u64;

// --- Screen layout fractions ---

/// Road band height as a fraction of window height (vertically centered).
pub const ROAD_HEIGHT_FRACTION: f32 = 0.15;

/// Shop band height as a fraction of window height (bottom of the window).
pub const SHOP_HEIGHT_FRACTION: f32 = 0.15;

/// Tower side length as a fraction of min(window width, window height).
pub const TOWER_SIZE_FRACTION: f32 = 0.05;

/// Enemy side length as a fraction of window height.
pub const ENEMY_SIZE_FRACTION: f32 = 0.02;

/// Left margin of the shop's tower preview square (pixels).
pub const SHOP_PREVIEW_MARGIN: f32 = 20.0;

// --- Road decoration ---

/// Horizontal spacing between road center-line stripes (pixels).
pub const ROAD_STRIPE_SPACING: f32 = 50.0;

/// Width of a road stripe (pixels).
pub const ROAD_STRIPE_WIDTH: f32 = 10.0;

// --- Towers ---

/// Shooting range, measured from tower center (pixels).
pub const TOWER_RANGE: f32 = 300.0;

/// Minimum interval between shots (milliseconds).
pub const TOWER_COOLDOWN_MS: u64 = 1000;

/// Damage applied per projectile hit.
pub const TOWER_DAMAGE: i32 = 10;

// --- Projectiles ---

/// Projectile travel per frame (pixels).
pub const PROJECTILE_SPEED: f32 = 10.0;

/// Projectile disc radius (pixels).
pub const PROJECTILE_RADIUS: f32 = 5.0;

// --- Enemies ---

/// Hit points a freshly spawned enemy carries.
pub const ENEMY_MAX_HEALTH: i32 = 10;

/// Enemies spawned per batch.
pub const SPAWN_BATCH_SIZE: usize = 5;

/// Spawn-speed jitter: each enemy's speed is uniform in
/// [base * (1 - jitter), base * (1 + jitter)].
pub const ENEMY_SPEED_JITTER: f32 = 0.2;

// --- Default game rules (GameConfig fallbacks) ---

pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub const DEFAULT_STARTING_HEALTH: i32 = 100;
pub const DEFAULT_STARTING_BALANCE: i32 = 100;
pub const DEFAULT_TOWER_COST: i32 = 50;
pub const DEFAULT_ENEMY_SPEED: f32 = 2.0;
pub const DEFAULT_SPAWN_INTERVAL_MS: u64 = 2000;

// --- UI geometry ---

/// Health bar width as a fraction of window width.
pub const HEALTH_BAR_WIDTH_FRACTION: f32 = 0.3;

/// Health bar height as a fraction of window height.
pub const HEALTH_BAR_HEIGHT_FRACTION: f32 = 0.05;

/// Health bar distance from the top edge (pixels).
pub const HEALTH_BAR_TOP_MARGIN: f32 = 20.0;
