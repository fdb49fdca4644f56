//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Normal,
    /// Tougher, larger enemy worth double points.
    Big,
    /// Boss tier's single enemy.
    Boss,
}

/// Who fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Enemy,
}

/// Boss movement phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPhase {
    /// Moving straight down towards the patrol line.
    #[default]
    Descending,
    /// Sweeping left and right along the patrol line. Permanent.
    Patrolling,
}

/// Sub-window of the boss firing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireWindow {
    /// Three shots aimed at the player.
    AimedSpread,
    Pause,
    /// Five shots in a fixed fan.
    Fan,
    Tail,
    /// No shots; presentation shows a charge-up tell.
    Charging,
}

/// Top-level session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Active,
    Paused,
    LevelCompleted,
    GameOver,
    /// Advanced past the last tier.
    CampaignComplete,
}

/// One-shot sound cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    PlayerShot,
    Explosion,
    PlayerHit,
    LevelComplete,
    GameOver,
}

/// Looping background tracks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MusicTrack {
    #[default]
    Level1,
    Level2,
    Level3,
    Boss,
}

impl EnemyKind {
    /// Score multiplier applied on kill.
    pub fn score_factor(&self) -> u32 {
        match self {
            EnemyKind::Big => 2,
            EnemyKind::Normal | EnemyKind::Boss => 1,
        }
    }
}

impl SessionPhase {
    /// Phases in which no simulation mutation occurs.
    pub fn is_frozen(&self) -> bool {
        !matches!(self, SessionPhase::Active)
    }

    /// Phases that only a restart or level change can leave.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SessionPhase::LevelCompleted | SessionPhase::GameOver | SessionPhase::CampaignComplete
        )
    }
}
