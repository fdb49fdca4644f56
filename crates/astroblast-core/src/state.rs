//! Session snapshot: the read-only view handed to presentation after each tick.

use serde::{Deserialize, Serialize};

use crate::entities::{Enemy, Explosion, Player, Projectile};
use crate::enums::SessionPhase;
use crate::events::GameEvent;
use crate::types::{SimTime, Viewport};

/// Complete visible session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    pub level: u32,
    pub score: u32,
    pub lives: u32,
    pub level_duration_secs: f32,
    /// `"mm:ss"` left on a timed tier, `"--:--"` on the boss tier.
    pub time_remaining: String,
    pub is_paused: bool,
    pub is_game_over: bool,
    pub is_level_completed: bool,
    pub is_boss_level: bool,
    /// Boss is in the charging window of its firing cycle.
    pub is_charging: bool,
    pub viewport: Viewport,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub enemy_projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub explosions: Vec<Explosion>,
    /// Events produced during the tick that built this snapshot.
    pub events: Vec<GameEvent>,
}

/// Render whole seconds left as `mm:ss`, rounding partial seconds up.
pub fn format_time_remaining(remaining_secs: f32) -> String {
    let secs = if remaining_secs.is_finite() {
        remaining_secs.max(0.0).ceil() as u32
    } else {
        0
    };
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Placeholder shown where a countdown does not apply.
pub const NO_TIME_LIMIT: &str = "--:--";
