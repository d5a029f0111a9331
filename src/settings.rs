//! Game settings and preferences
//!
//! Persisted as JSON next to the binary. Missing fields fall back to
//! defaults so older files keep loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::audio::AudioLevels;
use crate::consts::*;
use crate::error::Result;
use crate::sim::MatchConfig;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Match tuning and key bindings
    pub game: MatchConfig,

    // === Timing ===
    /// Simulation ticks per second
    pub tick_hz: u32,
    /// How long the winner banner stays up
    pub winner_pause_secs: f32,

    // === Display ===
    /// Windowed viewport size
    pub window_width: f32,
    pub window_height: f32,
    /// Start in the alternate (fullscreen) viewport
    pub start_fullscreen: bool,

    // === Audio ===
    pub audio: AudioLevels,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game: MatchConfig::default(),

            tick_hz: TICK_HZ,
            winner_pause_secs: WINNER_PAUSE_SECS,

            window_width: REFERENCE_WIDTH,
            window_height: REFERENCE_HEIGHT,
            start_fullscreen: false,

            audio: AudioLevels::default(),
        }
    }
}

impl Settings {
    /// Winner pause expressed in simulation ticks
    pub fn winner_pause_ticks(&self) -> u32 {
        (self.winner_pause_secs.max(0.0) * self.tick_hz as f32).round() as u32
    }

    /// Load settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.game.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
