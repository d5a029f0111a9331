//! Sound cues derived from simulation output
//!
//! The simulation never plays audio. Each step's [`Frame`] is translated
//! into a list of [`Cue`]s that the platform layer plays with its own mixer.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::{EventKind, Frame};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Projectile fired
    LaserFire,
    /// Projectile struck a craft
    Explosion,
}

/// Something the platform should do with its audio output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Cue {
    /// One-shot effect at the given volume (0.0 - 1.0)
    Play { effect: SoundEffect, volume: f32 },
    /// Loop background music at the given volume
    StartMusic { volume: f32 },
    StopMusic,
}

/// Audio mixing levels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioLevels {
    pub master_volume: f32,
    pub fire_volume: f32,
    pub hit_volume: f32,
    pub music_volume: f32,
    pub muted: bool,
}

impl Default for AudioLevels {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            fire_volume: 0.2,
            hit_volume: 0.16,
            music_volume: 0.2,
            muted: false,
        }
    }
}

impl AudioLevels {
    pub fn from_settings(settings: &Settings) -> Self {
        settings.audio
    }

    /// Final volume for an effect, 0 when muted
    pub fn effect_volume(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            return 0.0;
        }
        let base = match effect {
            SoundEffect::LaserFire => self.fire_volume,
            SoundEffect::Explosion => self.hit_volume,
        };
        (base * self.master_volume).clamp(0.0, 1.0)
    }

    pub fn music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.music_volume * self.master_volume).clamp(0.0, 1.0)
        }
    }
}

/// Effect for a match event
pub fn effect_for(kind: EventKind) -> SoundEffect {
    match kind {
        EventKind::Fired => SoundEffect::LaserFire,
        EventKind::Hit => SoundEffect::Explosion,
    }
}

/// Translate one step into audio cues, in event order.
///
/// Music starts with each match and stops the moment it is decided.
pub fn cues_for(frame: &Frame, levels: &AudioLevels) -> Vec<Cue> {
    let mut cues = Vec::with_capacity(frame.events.len() + 1);

    if frame.match_started {
        cues.push(Cue::StartMusic {
            volume: levels.music_volume(),
        });
    }

    cues.extend(frame.events.iter().map(|event| {
        let effect = effect_for(event.kind);
        Cue::Play {
            effect,
            volume: levels.effect_volume(effect),
        }
    }));

    if frame.match_over.is_some() {
        cues.push(Cue::StopMusic);
    }

    cues
}
