//! Commands and per-tick input sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// Session-level actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Freeze the simulation (presentation keeps running).
    Pause,
    Resume,
    /// Replay the current level from scratch with score reset.
    Restart,
    /// Move on to the next tier after completing one.
    AdvanceLevel,
    /// Begin a fresh run at `level` (menu selection).
    StartLevel { level: u32 },
}

/// Player controls sampled for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Lateral intent in [-1, 1]; negative is left.
    pub move_intent: f32,
    /// Fire button held or tapped this tick.
    pub shoot: bool,
}

impl TickInput {
    pub fn new(move_intent: f32, shoot: bool) -> Self {
        Self { move_intent, shoot }
    }

    /// No movement, no fire.
    pub fn idle() -> Self {
        Self::default()
    }
}
