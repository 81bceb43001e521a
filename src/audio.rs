//! Audio trigger boundary
//!
//! The simulation never plays sound itself. Hosts drain [`GameEvent`]s, map
//! them to [`SoundEffect`]s and hand them to whatever backend they have.

use crate::sim::{GameEvent, Side};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits the top or bottom wall
    WallBounce,
    /// Ball hits a paddle
    PaddleHit,
    /// Player won a point
    PlayerScored,
    /// Opponent won a point
    OpponentScored,
    /// Looping background track, started once when the game loads
    Music,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::WallBounce => "wallBounce",
            SoundEffect::PaddleHit => "paddleHit",
            SoundEffect::PlayerScored => "playerScored",
            SoundEffect::OpponentScored => "opponentScored",
            SoundEffect::Music => "backgroundMusic",
        }
    }
}

/// Which sound (if any) an event triggers
pub fn sound_for(event: &GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::WallBounce { .. } => Some(SoundEffect::WallBounce),
        GameEvent::PaddleHit { .. } => Some(SoundEffect::PaddleHit),
        GameEvent::Scored {
            scorer: Side::Player,
            ..
        } => Some(SoundEffect::PlayerScored),
        GameEvent::Scored {
            scorer: Side::Opponent,
            ..
        } => Some(SoundEffect::OpponentScored),
        _ => None,
    }
}

/// Fire-and-forget sound backend
pub trait AudioSink {
    /// `volume` is already scaled to 0.0 - 1.0
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Volume/mute front for an [`AudioSink`]
#[derive(Debug, Clone)]
pub struct AudioMixer<S> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioMixer<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
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

    /// Play whatever sound `event` calls for
    pub fn on_event(&mut self, event: &GameEvent) {
        let Some(effect) = sound_for(event) else {
            return;
        };
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }

    /// Kick off the background track. Skipped while muted.
    pub fn start_music(&mut self) {
        let vol = self.effective_volume();
        if vol > 0.0 {
            self.sink.play(SoundEffect::Music, vol);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Headless backend that only logs
#[derive(Debug, Clone, Default)]
pub struct LogAudio {
    pub played: u64,
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        self.played += 1;
        log::trace!("sound {} at {:.2}", effect.as_str(), volume);
    }
}
