//! Explosion aging.

use crate::world::World;

/// Advance every explosion and drop the expired ones.
pub fn run(world: &mut World, dt: f32) {
    for explosion in world.explosions.iter_mut() {
        explosion.advance(dt);
    }
    world.explosions.retain(|e| !e.is_expired());
}
