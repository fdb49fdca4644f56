//! Audio sink that narrates to the log instead of a sound device.

use tracing::{debug, info};

use astroblast_core::enums::{MusicTrack, SoundEffect};
use astroblast_sim::ports::AudioSink;

/// Tracks what would be playing and logs every request.
#[derive(Debug, Default, Clone)]
pub struct LoggingAudio {
    current: Option<MusicTrack>,
    paused: bool,
    effects_played: u64,
}

impl LoggingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track that is loaded, paused or not.
    pub fn current_track(&self) -> Option<MusicTrack> {
        self.current
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn effects_played(&self) -> u64 {
        self.effects_played
    }
}

impl AudioSink for LoggingAudio {
    fn play_effect(&mut self, effect: SoundEffect) {
        self.effects_played += 1;
        debug!(?effect, "sound effect");
    }

    fn play_music(&mut self, track: MusicTrack) {
        info!(?track, "music started");
        self.current = Some(track);
        self.paused = false;
    }

    fn stop_music(&mut self) {
        if let Some(track) = self.current.take() {
            info!(?track, "music stopped");
        }
        self.paused = false;
    }

    fn pause_music(&mut self) {
        if self.current.is_some() && !self.paused {
            debug!("music paused");
            self.paused = true;
        }
    }

    fn resume_music(&mut self) {
        if self.current.is_some() && self.paused {
            debug!("music resumed");
            self.paused = false;
        }
    }
}
