//! Entity spawn factories.
//!
//! Each factory allocates an id from the world, pushes the entity and
//! records the matching event or sound cue.

use astroblast_core::constants::*;
use astroblast_core::entities::{EntityId, Enemy, Explosion, Projectile};
use astroblast_core::enums::{EnemyKind, Owner, SoundEffect};
use astroblast_core::events::GameEvent;
use astroblast_core::types::{Vec2, UP};

use crate::systems::Feedback;
use crate::world::World;

/// Spawn a regular or boss enemy at `position`.
pub fn spawn_enemy(
    world: &mut World,
    position: Vec2,
    kind: EnemyKind,
    feedback: &mut Feedback,
) -> EntityId {
    let id = world.next_id();
    world.enemies.push(Enemy::new(id, position, kind));
    let event = match kind {
        EnemyKind::Boss => GameEvent::BossSpawned { enemy_id: id },
        _ => GameEvent::EnemySpawned { enemy_id: id, kind },
    };
    feedback.events.push(event);
    id
}

/// Spawn the boss centred horizontally above the top edge.
pub fn spawn_boss(world: &mut World, viewport_width: f32, feedback: &mut Feedback) -> EntityId {
    let position = Vec2::new(viewport_width / 2.0, BOSS_SPAWN_Y);
    spawn_enemy(world, position, EnemyKind::Boss, feedback)
}

/// Fire one player shot straight up from the ship's nose.
pub fn spawn_player_projectile(world: &mut World, feedback: &mut Feedback) -> EntityId {
    let id = world.next_id();
    let position = world.player.muzzle();
    world.projectiles.push(Projectile {
        id,
        position,
        owner: Owner::Player,
        direction: UP,
    });
    feedback.events.push(GameEvent::PlayerFired { projectile_id: id });
    feedback.sounds.push(SoundEffect::PlayerShot);
    id
}

/// Fire one enemy shot from `origin` along unit vector `direction`.
pub fn spawn_enemy_projectile(world: &mut World, origin: Vec2, direction: Vec2) -> EntityId {
    let id = world.next_id();
    world.enemy_projectiles.push(Projectile {
        id,
        position: origin,
        owner: Owner::Enemy,
        direction,
    });
    id
}

/// Add an explosion, evicting the oldest when the cap is reached.
pub fn spawn_explosion(
    world: &mut World,
    position: Vec2,
    size: f32,
    source: Owner,
    feedback: &mut Feedback,
) -> EntityId {
    let id = world.next_id();
    while world.explosions.len() >= MAX_EXPLOSIONS {
        world.explosions.pop_front();
    }
    world
        .explosions
        .push_back(Explosion::new(id, position, size, source));
    feedback.sounds.push(SoundEffect::Explosion);
    id
}
