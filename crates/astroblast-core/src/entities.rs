//! Entity value types.
//!
//! Entities are plain data with a few geometric predicates. Behavior lives
//! in the simulation systems, not here.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{EnemyKind, Owner};
use crate::types::{Rect, Size, Vec2};

/// Unique id within a session. Ids are never reused until the session resets.
pub type EntityId = u32;

/// The player's ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Centre of the ship.
    pub position: Vec2,
    pub size: Size,
}

/// A shot in flight. Travels in a straight line; never re-aims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: EntityId,
    pub position: Vec2,
    pub owner: Owner,
    /// Unit direction of travel.
    pub direction: Vec2,
}

/// A regular enemy or the boss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    /// Centre of the sprite.
    pub position: Vec2,
    /// Hits remaining; the enemy is removed when this reaches zero.
    pub health: u32,
    pub size: Size,
    /// False once the enemy has settled on its target line.
    pub is_moving: bool,
    /// Settle line, assigned on the enemy's first update and never changed.
    pub target_y: Option<f32>,
    pub kind: EnemyKind,
}

/// Purely visual blast. Grows over the first part of its life, then fades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub id: EntityId,
    pub position: Vec2,
    /// Nominal diameter at full scale.
    pub size: f32,
    pub elapsed_secs: f32,
    /// 0 → 1 while growing.
    pub scale: f32,
    /// 1 → 0 while fading.
    pub opacity: f32,
    /// Whose death or damage produced it.
    pub source: Owner,
}

impl Player {
    /// Ship centred horizontally at `x` on the player line of a screen `height` tall.
    pub fn at(x: f32, screen_height: f32) -> Self {
        Self {
            position: Vec2::new(x, screen_height - PLAYER_BOTTOM_OFFSET),
            size: PLAYER_SIZE,
        }
    }

    pub fn half_width(&self) -> f32 {
        self.size.width / 2.0
    }

    pub fn hitbox(&self) -> Rect {
        Rect::from_center(self.position, self.size.scaled(PLAYER_HITBOX_SCALE))
    }

    /// Where player shots leave the ship.
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.y - self.size.height / 2.0)
    }
}

impl Enemy {
    /// A fresh, descending enemy of `kind` with that kind's default health and size.
    pub fn new(id: EntityId, position: Vec2, kind: EnemyKind) -> Self {
        let (health, size) = match kind {
            EnemyKind::Normal => (NORMAL_ENEMY_HEALTH, NORMAL_ENEMY_SIZE),
            EnemyKind::Big => (BIG_ENEMY_HEALTH, BIG_ENEMY_SIZE),
            EnemyKind::Boss => (BOSS_HEALTH, BOSS_SIZE),
        };
        Self {
            id,
            position,
            health,
            size,
            is_moving: true,
            target_y: None,
            kind,
        }
    }

    pub fn is_boss(&self) -> bool {
        self.kind == EnemyKind::Boss
    }

    /// Collision box. The boss uses a tighter box than its sprite.
    pub fn hitbox(&self) -> Rect {
        let size = if self.is_boss() {
            self.size.scaled(BOSS_HITBOX_SCALE)
        } else {
            self.size
        };
        Rect::from_center(self.position, size)
    }

    pub fn is_hit_by(&self, projectile: &Projectile) -> bool {
        self.hitbox().contains(projectile.position)
    }

    /// Circle proximity test using half the widths as radii.
    pub fn is_colliding_with(&self, other: &Enemy) -> bool {
        let min_distance = (self.size.width + other.size.width) / 2.0;
        self.position.distance(other.position) < min_distance
    }

    /// True if this enemy is above `other` in the same lane.
    pub fn is_above(&self, other: &Enemy) -> bool {
        self.position.y < other.position.y
            && (self.position.x - other.position.x).abs() < self.size.width
    }

    /// Where this enemy's shots leave its body.
    pub fn muzzle(&self) -> Vec2 {
        let half_height = self.hitbox().max.y - self.position.y;
        Vec2::new(self.position.x, self.position.y + half_height)
    }
}

impl Explosion {
    pub fn new(id: EntityId, position: Vec2, size: f32, source: Owner) -> Self {
        Self {
            id,
            position,
            size,
            elapsed_secs: 0.0,
            scale: 0.0,
            opacity: 1.0,
            source,
        }
    }

    /// Age by `dt` and recompute scale and opacity.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed_secs += dt;
        let t = (self.elapsed_secs / EXPLOSION_LIFETIME_SECS).clamp(0.0, 1.0);
        if t < EXPLOSION_GROW_FRACTION {
            let grow = t / EXPLOSION_GROW_FRACTION;
            // ease-out: fast start, gentle finish
            self.scale = 1.0 - (1.0 - grow) * (1.0 - grow);
            self.opacity = 1.0;
        } else {
            let fade = (t - EXPLOSION_GROW_FRACTION) / (1.0 - EXPLOSION_GROW_FRACTION);
            self.scale = 1.0;
            // ease-in: lingers, then drops off
            self.opacity = 1.0 - fade * fade;
        }
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed_secs >= EXPLOSION_LIFETIME_SECS
    }
}
