//! Snapshot system: copies the world into a `SessionSnapshot`.
//!
//! Read-only; never modifies the world.

use astroblast_core::events::GameEvent;
use astroblast_core::enums::SessionPhase;
use astroblast_core::level::LevelConfig;
use astroblast_core::state::{format_time_remaining, SessionSnapshot, NO_TIME_LIMIT};
use astroblast_core::types::{SimTime, Viewport};

use crate::world::World;

/// Session-level values that are not part of the world.
#[derive(Debug, Clone, Copy)]
pub struct SessionStatus {
    pub time: SimTime,
    pub phase: SessionPhase,
    pub level: u32,
    pub score: u32,
    pub lives: u32,
    pub is_charging: bool,
    pub viewport: Viewport,
}

pub fn build_snapshot(
    world: &World,
    status: SessionStatus,
    tuning: &LevelConfig,
    events: Vec<GameEvent>,
) -> SessionSnapshot {
    let time_remaining = if tuning.is_boss_level {
        NO_TIME_LIMIT.to_string()
    } else {
        format_time_remaining(tuning.level_duration_secs - status.time.elapsed_secs)
    };

    SessionSnapshot {
        time: status.time,
        phase: status.phase,
        level: status.level,
        score: status.score,
        lives: status.lives,
        level_duration_secs: tuning.level_duration_secs,
        time_remaining,
        is_paused: status.phase == SessionPhase::Paused,
        is_game_over: status.phase == SessionPhase::GameOver,
        is_level_completed: matches!(
            status.phase,
            SessionPhase::LevelCompleted | SessionPhase::CampaignComplete
        ),
        is_boss_level: tuning.is_boss_level,
        is_charging: status.is_charging,
        viewport: status.viewport,
        player: world.player,
        projectiles: world.projectiles.clone(),
        enemy_projectiles: world.enemy_projectiles.clone(),
        enemies: world.enemies.clone(),
        explosions: world.explosions.iter().cloned().collect(),
        events,
    }
}
