//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::entities::EntityId;
use crate::enums::*;
use crate::types::Vec2;

/// Something that happened during a tick. Drained into that tick's snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Player shot accepted by the cooldown.
    PlayerFired { projectile_id: EntityId },
    EnemySpawned { enemy_id: EntityId, kind: EnemyKind },
    /// Hit that did not kill.
    EnemyDamaged { enemy_id: EntityId, health: u32 },
    EnemyDestroyed {
        enemy_id: EntityId,
        kind: EnemyKind,
        position: Vec2,
        points: u32,
    },
    /// Enemy left the bottom of the screen.
    EnemyLeaked { enemy_id: EntityId },
    PlayerHit { lives_remaining: u32 },
    BossSpawned { enemy_id: EntityId },
    BossDefeated { enemy_id: EntityId },
    LevelCompleted { level: u32, score: u32 },
    GameOver { level: u32, score: u32 },
}
