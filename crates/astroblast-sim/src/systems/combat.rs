//! Combat resolver: applies damage, removals, scoring and explosions for
//! the pairs the collision resolver found.

use astroblast_core::constants::*;
use astroblast_core::entities::EntityId;
use astroblast_core::enums::{Owner, SoundEffect};
use astroblast_core::events::GameEvent;

use crate::systems::collision::{PlayerHit, ProjectileHit};
use crate::systems::Feedback;
use crate::world::World;
use crate::world_setup;

/// Result of applying one tick's projectile hits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombatOutcome {
    pub points: u32,
    pub boss_defeated: bool,
    /// Enemies that took a hit this tick, dead or alive.
    pub resolved: Vec<EntityId>,
}

/// Points for destroying an enemy of `factor` on `level`.
pub fn kill_points(level: u32, factor: u32) -> u32 {
    BASE_KILL_POINTS.saturating_mul(level).saturating_mul(factor)
}

/// Damage enemies, remove spent projectiles and dead enemies, award points.
pub fn apply_projectile_hits(
    world: &mut World,
    hits: &[ProjectileHit],
    level: u32,
    feedback: &mut Feedback,
) -> CombatOutcome {
    let mut outcome = CombatOutcome::default();
    let mut spent = Vec::with_capacity(hits.len());
    let mut dead = Vec::new();

    for hit in hits {
        if hit.projectile >= world.projectiles.len() || hit.enemy >= world.enemies.len() {
            continue;
        }
        spent.push(hit.projectile);
        let enemy = &mut world.enemies[hit.enemy];
        outcome.resolved.push(enemy.id);
        enemy.health = enemy.health.saturating_sub(1);
        if enemy.health == 0 {
            dead.push(hit.enemy);
        } else {
            feedback.events.push(GameEvent::EnemyDamaged {
                enemy_id: enemy.id,
                health: enemy.health,
            });
        }
    }

    remove_descending(&mut world.projectiles, spent);

    dead.sort_unstable_by(|a, b| b.cmp(a));
    dead.dedup();
    for index in dead {
        if index >= world.enemies.len() {
            continue;
        }
        let enemy = world.enemies.remove(index);
        let points = kill_points(level, enemy.kind.score_factor());
        outcome.points = outcome.points.saturating_add(points);
        world_setup::spawn_explosion(
            world,
            enemy.position,
            enemy.size.max_side(),
            Owner::Enemy,
            feedback,
        );
        feedback.events.push(GameEvent::EnemyDestroyed {
            enemy_id: enemy.id,
            kind: enemy.kind,
            position: enemy.position,
            points,
        });
        if enemy.is_boss() {
            outcome.boss_defeated = true;
            feedback.events.push(GameEvent::BossDefeated { enemy_id: enemy.id });
        }
    }

    outcome
}

/// Consume what hit the player and take one life. Returns `true` when that was the last life.
pub fn apply_player_hit(
    world: &mut World,
    hit: PlayerHit,
    lives: &mut u32,
    feedback: &mut Feedback,
) -> bool {
    let impact = match hit {
        PlayerHit::Projectile(index) => {
            if index >= world.enemy_projectiles.len() {
                return false;
            }
            world.enemy_projectiles.remove(index).position
        }
        PlayerHit::Enemy(index) => {
            let Some(enemy) = world.enemies.get(index) else {
                return false;
            };
            // The boss survives ramming the player.
            if enemy.is_boss() {
                enemy.position
            } else {
                world.enemies.remove(index).position
            }
        }
    };

    *lives = lives.saturating_sub(1);
    world_setup::spawn_explosion(
        world,
        impact,
        PLAYER_IMPACT_EXPLOSION_SIZE,
        Owner::Player,
        feedback,
    );
    feedback.sounds.push(SoundEffect::PlayerHit);
    feedback.events.push(GameEvent::PlayerHit {
        lives_remaining: *lives,
    });

    if *lives == 0 {
        let position = world.player.position;
        world_setup::spawn_explosion(
            world,
            position,
            PLAYER_DEATH_EXPLOSION_SIZE,
            Owner::Player,
            feedback,
        );
        return true;
    }
    false
}

/// Remove `indices` from `items`, highest first so lower indices stay valid.
fn remove_descending<T>(items: &mut Vec<T>, mut indices: Vec<usize>) {
    indices.sort_unstable_by(|a, b| b.cmp(a));
    indices.dedup();
    for index in indices {
        if index < items.len() {
            items.remove(index);
        }
    }
}
