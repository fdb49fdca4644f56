//! Regular enemy descent and leak culling.
//!
//! An enemy descends until it reaches mid-screen, then holds. One already
//! below its line keeps falling and is culled once it leaks off the bottom. It pauses
//! while another enemy sits close below it in the same lane.

use astroblast_core::constants::{ENEMY_LEAK_MARGIN, ENEMY_MIN_SPACING_Y};
use astroblast_core::entities::Enemy;
use astroblast_core::events::GameEvent;
use astroblast_core::types::Viewport;

use crate::systems::Feedback;
use crate::world::World;

pub fn run(world: &mut World, speed: f32, dt: f32, viewport: Viewport, feedback: &mut Feedback) {
    let mid_screen = viewport.center().y;
    let blocked: Vec<bool> = (0..world.enemies.len())
        .map(|i| is_lane_blocked(&world.enemies, i))
        .collect();

    for (enemy, blocked) in world.enemies.iter_mut().zip(blocked) {
        if enemy.is_boss() {
            continue;
        }
        let target_y = *enemy.target_y.get_or_insert(mid_screen);
        if !enemy.is_moving || blocked {
            continue;
        }
        let next_y = enemy.position.y + speed * dt;
        if enemy.position.y < target_y && next_y >= target_y {
            enemy.position.y = target_y;
            enemy.is_moving = false;
        } else {
            enemy.position.y = next_y;
        }
    }

    let leak_line = viewport.height + ENEMY_LEAK_MARGIN;
    for i in (0..world.enemies.len()).rev() {
        let enemy = &world.enemies[i];
        if !enemy.is_boss() && enemy.position.y > leak_line {
            let enemy_id = enemy.id;
            world.enemies.remove(i);
            feedback.events.push(GameEvent::EnemyLeaked { enemy_id });
        }
    }
}

/// True if another enemy is below `enemies[index]` in its lane and closer than the minimum spacing.
pub fn is_lane_blocked(enemies: &[Enemy], index: usize) -> bool {
    let Some(enemy) = enemies.get(index) else {
        return false;
    };
    enemies.iter().enumerate().any(|(j, other)| {
        j != index
            && enemy.is_above(other)
            && other.position.y - enemy.position.y < ENEMY_MIN_SPACING_Y
    })
}
