//! Boss system: drives the boss entity through the movement FSM and fires
//! its patterned volleys.

use tracing::debug;

use astroblast_boss::cycle;
use astroblast_boss::fsm::{evaluate, BossContext};
use astroblast_core::constants::BOSS_TARGET_Y;
use astroblast_core::entities::EntityId;
use astroblast_core::enums::BossPhase;
use astroblast_core::types::Viewport;

use crate::world::World;
use crate::world_setup;

/// Per-boss state that lives outside the entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossBrain {
    pub enemy_id: EntityId,
    pub phase: BossPhase,
    /// `1.0` right, `-1.0` left.
    pub heading: f32,
    /// Position in the firing cycle, seconds.
    pub cycle_pos: f32,
}

impl BossBrain {
    pub fn new(enemy_id: EntityId) -> Self {
        Self {
            enemy_id,
            phase: BossPhase::Descending,
            heading: 1.0,
            cycle_pos: 0.0,
        }
    }

    pub fn is_charging(&self) -> bool {
        self.phase == BossPhase::Patrolling && cycle::is_charging(self.cycle_pos)
    }
}

/// Move the boss one tick.
pub fn advance(world: &mut World, brain: &mut BossBrain, descent_speed: f32, dt: f32, viewport: Viewport) {
    let Some(boss) = world.enemies.iter_mut().find(|e| e.id == brain.enemy_id) else {
        return;
    };
    let ctx = BossContext {
        phase: brain.phase,
        position: boss.position,
        target_y: BOSS_TARGET_Y,
        speed: descent_speed,
        heading: brain.heading,
        viewport_width: viewport.width,
        half_width: boss.size.width / 2.0,
        dt,
    };
    let update = evaluate(&ctx);

    boss.position = update.new_position;
    boss.target_y = Some(BOSS_TARGET_Y);
    boss.is_moving = update.new_phase == BossPhase::Descending;
    brain.phase = update.new_phase;
    brain.heading = update.new_heading;
    if update.phase_changed {
        debug!(enemy_id = brain.enemy_id, phase = ?brain.phase, "boss phase changed");
    }
}

/// Advance the firing cycle and emit a volley when both the cycle window
/// and the shoot interval allow it. Only a patrolling boss fires.
pub fn fire(world: &mut World, brain: &mut BossBrain, shoot_timer: &mut f32, shoot_interval: f32, dt: f32) {
    if brain.phase != BossPhase::Patrolling {
        return;
    }
    let Some(boss) = world.enemies.iter().find(|e| e.id == brain.enemy_id) else {
        return;
    };
    let origin = boss.muzzle();

    brain.cycle_pos = cycle::advance_cycle(brain.cycle_pos, dt);
    *shoot_timer += dt;

    let window = cycle::window_at(brain.cycle_pos);
    if !cycle::fires(window) || *shoot_timer < shoot_interval {
        return;
    }
    *shoot_timer = 0.0;

    let target = world.player.position;
    for direction in cycle::volley(window, origin, target) {
        world_setup::spawn_enemy_projectile(world, origin, direction);
    }
}
