//! Player and projectile kinematics.

use astroblast_core::constants::{PLAYER_BOTTOM_OFFSET, PLAYER_MOVE_SPEED, PLAYER_PROJECTILE_SPEED};
use astroblast_core::entities::Projectile;
use astroblast_core::types::{Vec2, Viewport};

use crate::world::World;

/// Slide the ship by `move_intent` and keep it fully on screen.
pub fn move_player(world: &mut World, move_intent: f32, dt: f32, viewport: Viewport) {
    let intent = if move_intent.is_finite() {
        move_intent.clamp(-1.0, 1.0)
    } else {
        0.0
    };
    let player = &mut world.player;
    let half = player.half_width();
    let mut x = player.position.x + intent * PLAYER_MOVE_SPEED * dt;
    x = if viewport.width > half * 2.0 {
        x.clamp(half, viewport.width - half)
    } else {
        viewport.width / 2.0
    };
    // Re-anchor vertically in case the viewport changed.
    player.position = Vec2::new(x, viewport.height - PLAYER_BOTTOM_OFFSET);
}

/// Advance both projectile collections and cull anything off screen.
pub fn move_projectiles(world: &mut World, enemy_projectile_speed: f32, dt: f32, viewport: Viewport) {
    advance(&mut world.projectiles, PLAYER_PROJECTILE_SPEED, dt, viewport);
    advance(&mut world.enemy_projectiles, enemy_projectile_speed, dt, viewport);
}

fn advance(projectiles: &mut Vec<Projectile>, speed: f32, dt: f32, viewport: Viewport) {
    for projectile in projectiles.iter_mut() {
        projectile.position += projectile.direction * speed * dt;
    }
    projectiles.retain(|p| viewport.contains(p.position));
}
