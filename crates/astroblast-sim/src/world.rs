//! Entity storage for one session.
//!
//! Collections keep insertion order; removal-heavy passes walk them from the
//! highest index down so earlier indices stay valid.

use std::collections::VecDeque;

use astroblast_core::entities::{EntityId, Enemy, Explosion, Player, Projectile};
use astroblast_core::types::Viewport;

/// Every live entity, plus the id counter that names them.
#[derive(Debug, Clone)]
pub struct World {
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub enemy_projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    /// Oldest first.
    pub explosions: VecDeque<Explosion>,
    next_entity_id: EntityId,
}

impl World {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            player: Player::at(viewport.width / 2.0, viewport.height),
            projectiles: Vec::new(),
            enemy_projectiles: Vec::new(),
            enemies: Vec::new(),
            explosions: VecDeque::new(),
            next_entity_id: 0,
        }
    }

    /// Drop every entity, recentre the player and restart id numbering.
    pub fn reset(&mut self, viewport: Viewport) {
        *self = Self::new(viewport);
    }

    /// Remove enemies and all projectiles, keeping explosions and the player.
    pub fn clear_hostiles(&mut self) {
        self.projectiles.clear();
        self.enemy_projectiles.clear();
        self.enemies.clear();
    }

    /// Allocate a fresh entity id.
    pub fn next_id(&mut self) -> EntityId {
        let id = self.next_entity_id;
        self.next_entity_id = self.next_entity_id.wrapping_add(1);
        id
    }

    pub fn boss(&self) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.is_boss())
    }

    pub fn boss_mut(&mut self) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.is_boss())
    }

    pub fn has_boss(&self) -> bool {
        self.boss().is_some()
    }

    /// Regular (non-boss) enemies alive.
    pub fn regular_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|e| !e.is_boss()).count()
    }
}
