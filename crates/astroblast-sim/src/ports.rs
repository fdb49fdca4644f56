//! Collaborators the session talks to but does not own.
//!
//! All calls are fire-and-forget. An implementation that fails (missing
//! asset, no audio device) logs and carries on; nothing flows back into
//! the simulation.

use astroblast_core::commands::TickInput;
use astroblast_core::enums::{MusicTrack, SoundEffect};
use astroblast_core::types::Viewport;

/// Sound output.
pub trait AudioSink {
    fn play_effect(&mut self, effect: SoundEffect);
    fn play_music(&mut self, track: MusicTrack);
    fn stop_music(&mut self);
    fn pause_music(&mut self);
    fn resume_music(&mut self);
}

/// Screen bounds, queried once per tick. May change between ticks (rotation).
pub trait Display {
    fn viewport_size(&self) -> Viewport;
}

/// Player controls for the current tick.
pub trait InputSource {
    /// Lateral intent in `[-1, 1]`.
    fn move_intent(&self) -> f32;
    fn shoot_triggered(&self) -> bool;
}

/// Discards all audio.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_effect(&mut self, _effect: SoundEffect) {}
    fn play_music(&mut self, _track: MusicTrack) {}
    fn stop_music(&mut self) {}
    fn pause_music(&mut self) {}
    fn resume_music(&mut self) {}
}

impl Display for Viewport {
    fn viewport_size(&self) -> Viewport {
        *self
    }
}

impl InputSource for TickInput {
    fn move_intent(&self) -> f32 {
        self.move_intent
    }

    fn shoot_triggered(&self) -> bool {
        self.shoot
    }
}
