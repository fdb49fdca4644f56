//! Collision resolver. Detects matched pairs; never mutates.
//!
//! Player projectiles are scanned newest first, each taking the first enemy
//! in insertion order that it overlaps and that no other projectile has
//! claimed this tick. Against the player, the newest overlapping enemy
//! projectile wins, then the first overlapping enemy body not already
//! struck by a player projectile this tick.

use astroblast_core::entities::EntityId;
use astroblast_core::types::rects_intersect;

use crate::world::World;

/// A player projectile (by index) striking an enemy (by index).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectileHit {
    pub projectile: usize,
    pub enemy: usize,
}

/// What struck the player this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerHit {
    /// Index into the enemy projectile collection.
    Projectile(usize),
    /// Index into the enemy collection.
    Enemy(usize),
}

/// Every player-projectile hit this tick, at most one per projectile and per enemy.
pub fn find_projectile_hits(world: &World) -> Vec<ProjectileHit> {
    let mut claimed = vec![false; world.enemies.len()];
    let mut hits = Vec::new();

    for (projectile_index, projectile) in world.projectiles.iter().enumerate().rev() {
        let target = world
            .enemies
            .iter()
            .enumerate()
            .find(|(i, enemy)| !claimed[*i] && enemy.is_hit_by(projectile))
            .map(|(i, _)| i);
        if let Some(enemy_index) = target {
            claimed[enemy_index] = true;
            hits.push(ProjectileHit {
                projectile: projectile_index,
                enemy: enemy_index,
            });
        }
    }
    hits
}

/// The single hit the player takes this tick, if any.
///
/// Enemies listed in `resolved` already collided this tick and cannot ram.
pub fn find_player_hit(world: &World, resolved: &[EntityId]) -> Option<PlayerHit> {
    let hitbox = world.player.hitbox();

    let by_projectile = world
        .enemy_projectiles
        .iter()
        .rposition(|p| hitbox.contains(p.position));
    if let Some(index) = by_projectile {
        return Some(PlayerHit::Projectile(index));
    }

    world
        .enemies
        .iter()
        .position(|e| !resolved.contains(&e.id) && rects_intersect(&e.hitbox(), &hitbox))
        .map(PlayerHit::Enemy)
}
