//! Sound effect dispatch
//!
//! The sim reports what happened through `GameEvent`s; this module maps them
//! to effects and hands them to whatever sink the platform provides.
//! Playback is fire-and-forget: no result is consulted.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A shot leaving the muzzle
    LaserShoot,
    /// A meteor breaking up, or the player going with it
    Explosion,
}

/// The effect a frame event triggers
pub fn sound_for(event: GameEvent) -> SoundEffect {
    match event {
        GameEvent::ShotFired => SoundEffect::LaserShoot,
        GameEvent::MeteorShattered | GameEvent::PlayerHit => SoundEffect::Explosion,
    }
}

/// Playback sink the frame driver drains events into
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Sink for headless runs: honors volume/mute settings and logs what a
/// real device would have played
pub struct LogAudio {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for LogAudio {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl LogAudio {
    pub fn from_settings(settings: &crate::Settings) -> Self {
        Self {
            master_volume: settings.master_volume,
            sfx_volume: settings.sfx_volume,
            muted: settings.muted,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        log::debug!("sfx {:?} at volume {:.2}", effect, vol);
    }
}
