//! Spawn director: timed enemy spawns and generic enemy fire.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use astroblast_core::constants::*;
use astroblast_core::enums::EnemyKind;
use astroblast_core::level::LevelConfig;
use astroblast_core::types::{normalize, Vec2, Viewport};

use crate::systems::Feedback;
use crate::world::World;
use crate::world_setup;

/// Accumulators for the two timed rules. Both reset on level change.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnDirector {
    /// Seconds since the last spawn attempt.
    pub spawn_timer: f32,
    /// Seconds since the last enemy shot (or boss volley).
    pub shoot_timer: f32,
}

impl SpawnDirector {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Live regular enemies allowed on `level`.
pub fn enemy_cap(level: u32) -> usize {
    ENEMY_CAP_BASE + ENEMY_CAP_PER_LEVEL * level as usize
}

/// Try to spawn one regular enemy once the spawn interval has elapsed.
#[allow(clippy::too_many_arguments)]
pub fn run_spawns(
    director: &mut SpawnDirector,
    world: &mut World,
    rng: &mut ChaCha8Rng,
    tuning: &LevelConfig,
    level: u32,
    dt: f32,
    viewport: Viewport,
    feedback: &mut Feedback,
) {
    director.spawn_timer += dt;
    if director.spawn_timer < tuning.spawn_interval_secs {
        return;
    }
    director.spawn_timer = 0.0;

    if world.regular_enemy_count() >= enemy_cap(level) {
        debug!(level, "spawn skipped: enemy cap reached");
        return;
    }

    let x = pick_spawn_x(rng, viewport.width);
    if is_spawn_crowded(world, x) {
        debug!(x, "spawn skipped: lane occupied near spawn line");
        return;
    }

    let kind = if rng.gen::<f64>() < tuning.big_enemy_chance {
        EnemyKind::Big
    } else {
        EnemyKind::Normal
    };
    world_setup::spawn_enemy(world, Vec2::new(x, ENEMY_SPAWN_Y), kind, feedback);
}

/// Once the shoot interval elapses, one random enemy fires at the player.
pub fn run_enemy_fire(
    director: &mut SpawnDirector,
    world: &mut World,
    rng: &mut ChaCha8Rng,
    tuning: &LevelConfig,
    dt: f32,
) {
    director.shoot_timer += dt;
    if director.shoot_timer < tuning.shoot_interval_secs {
        return;
    }
    director.shoot_timer = 0.0;

    if world.enemies.is_empty() {
        return;
    }
    let index = rng.gen_range(0..world.enemies.len());
    let origin = world.enemies[index].muzzle();
    let direction = normalize(origin, world.player.position);
    world_setup::spawn_enemy_projectile(world, origin, direction);
}

/// Uniform x in `[margin, width - margin]`, or the centre on very narrow screens.
fn pick_spawn_x(rng: &mut ChaCha8Rng, width: f32) -> f32 {
    let low = SPAWN_MARGIN_X;
    let high = width - SPAWN_MARGIN_X;
    if high > low {
        rng.gen_range(low..=high)
    } else {
        width / 2.0
    }
}

/// Any enemy near the candidate lane that has not yet cleared the spawn band.
pub fn is_spawn_crowded(world: &World, x: f32) -> bool {
    world.enemies.iter().any(|e| {
        (e.position.x - x).abs() < SPAWN_CLEARANCE_X && e.position.y < SPAWN_CLEARANCE_Y
    })
}
