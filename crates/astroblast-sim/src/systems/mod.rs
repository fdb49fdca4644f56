//! Per-tick systems that operate on the session world.
//!
//! Systems are free functions over `&mut World` plus whatever session state
//! they need for that call. They record what happened into a [`Feedback`]
//! and leave phase transitions to the session.

use astroblast_core::enums::SoundEffect;
use astroblast_core::events::GameEvent;

pub mod boss;
pub mod collision;
pub mod combat;
pub mod enemies;
pub mod explosions;
pub mod movement;
pub mod snapshot;
pub mod spawner;

/// Events and sound cues collected during one tick.
#[derive(Debug, Clone, Default)]
pub struct Feedback {
    pub events: Vec<GameEvent>,
    pub sounds: Vec<SoundEffect>,
}

impl Feedback {
    pub fn clear(&mut self) {
        self.events.clear();
        self.sounds.clear();
    }
}
