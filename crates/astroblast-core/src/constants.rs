//! Simulation constants and tuning parameters.
//!
//! Per-level tuning lives in [`crate::level`]; everything here is fixed
//! across tiers. Distances are pixels, speeds pixels per second.

use crate::types::Size;

/// Largest step a single tick may simulate (seconds).
/// Longer frames are clamped so a stall cannot produce one giant step.
pub const MAX_TICK_DT: f32 = 1.0 / 30.0;

/// Recommended driver cadence (seconds).
pub const NOMINAL_TICK_DT: f32 = 1.0 / 60.0;

// --- Viewport ---

pub const DEFAULT_VIEWPORT_WIDTH: f32 = 390.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 844.0;

// --- Player ---

/// Lives at level start.
pub const STARTING_LIVES: u32 = 3;

pub const PLAYER_SIZE: Size = Size::new(80.0, 80.0);

/// Player collision box relative to the sprite.
pub const PLAYER_HITBOX_SCALE: f32 = 0.75;

/// Distance of the ship's centre from the bottom edge.
pub const PLAYER_BOTTOM_OFFSET: f32 = 80.0;

/// Lateral speed at full move intent.
pub const PLAYER_MOVE_SPEED: f32 = 300.0;

pub const PLAYER_PROJECTILE_SPEED: f32 = 600.0;

// --- Regular enemies ---

pub const NORMAL_ENEMY_SIZE: Size = Size::new(60.0, 60.0);
pub const NORMAL_ENEMY_HEALTH: u32 = 1;

pub const BIG_ENEMY_SIZE: Size = Size::new(70.0, 70.0);
pub const BIG_ENEMY_HEALTH: u32 = 2;

/// Y at which new enemies appear (just above the top edge).
pub const ENEMY_SPAWN_Y: f32 = -30.0;

/// Horizontal margin for spawn X selection.
pub const SPAWN_MARGIN_X: f32 = 50.0;

/// A candidate spawn X is rejected if an enemy sits within this horizontal distance...
pub const SPAWN_CLEARANCE_X: f32 = 60.0;

/// ...and above this line.
pub const SPAWN_CLEARANCE_Y: f32 = 100.0;

/// Soft cap on live enemies: `BASE + PER_LEVEL * level`.
pub const ENEMY_CAP_BASE: usize = 10;
pub const ENEMY_CAP_PER_LEVEL: usize = 3;

/// Minimum vertical gap kept to an enemy ahead in the same lane.
pub const ENEMY_MIN_SPACING_Y: f32 = 70.0;

/// Enemies further than this below the bottom edge have leaked and are removed.
pub const ENEMY_LEAK_MARGIN: f32 = 50.0;

// --- Boss ---

pub const BOSS_SIZE: Size = Size::new(150.0, 150.0);
pub const BOSS_HEALTH: u32 = 30;

/// Boss collision box relative to the sprite.
pub const BOSS_HITBOX_SCALE: f32 = 0.7;

pub const BOSS_SPAWN_Y: f32 = -75.0;

/// Y at which the boss stops descending and begins patrolling.
pub const BOSS_TARGET_Y: f32 = 150.0;

pub const BOSS_PATROL_SPEED: f32 = 90.0;

/// Length of the repeating boss firing cycle.
pub const BOSS_CYCLE_SECS: f32 = 5.0;

/// Horizontal offset of the outer shots in the aimed spread.
pub const BOSS_SPREAD_OFFSET_X: f32 = 40.0;

/// Angles (degrees from straight down) of the fixed fan volley.
pub const BOSS_FAN_ANGLES_DEG: [f32; 5] = [-30.0, -15.0, 0.0, 15.0, 30.0];

/// Without a boss this long into a boss tier, the level force-completes.
pub const BOSS_QUIESCENCE_SECS: f32 = 2.0;

// --- Scoring ---

/// Points per kill before level and kind multipliers.
pub const BASE_KILL_POINTS: u32 = 10;

// --- Explosions ---

pub const MAX_EXPLOSIONS: usize = 10;
pub const EXPLOSION_LIFETIME_SECS: f32 = 0.5;

/// Fraction of the lifetime spent growing; the rest is spent fading.
pub const EXPLOSION_GROW_FRACTION: f32 = 0.3;

pub const PLAYER_IMPACT_EXPLOSION_SIZE: f32 = 30.0;
pub const PLAYER_DEATH_EXPLOSION_SIZE: f32 = 120.0;
