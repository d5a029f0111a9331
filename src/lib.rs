//! Space Duel - a local two-player arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic match simulation (movement, projectiles, collisions, rescale)
//! - `audio`: Sound cues derived from simulation events
//! - `platform`: Presentation-layer abstraction (input, drawing, sound output)
//! - `settings`: JSON-backed user settings

pub mod audio;
pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_HZ: u32 = 60;

    /// Reference resolution all tuning values are expressed in (4:3)
    pub const REFERENCE_WIDTH: f32 = 1120.0;
    pub const REFERENCE_HEIGHT: f32 = 840.0;

    /// Player craft size at the reference resolution
    pub const PLAYER_WIDTH: f32 = REFERENCE_WIDTH / 14.58;
    pub const PLAYER_HEIGHT: f32 = REFERENCE_HEIGHT / 14.58;
    /// Player movement per tick at the reference resolution
    pub const PLAYER_VELOCITY: f32 = REFERENCE_WIDTH / 116.62;

    /// Projectile size and speed at the reference resolution
    pub const PROJECTILE_WIDTH: f32 = REFERENCE_WIDTH / 77.75;
    pub const PROJECTILE_HEIGHT: f32 = REFERENCE_HEIGHT / 175.0;
    pub const PROJECTILE_VELOCITY: f32 = 2.0 * PLAYER_VELOCITY;

    /// Live projectiles allowed per combatant
    pub const PROJECTILE_CAP: usize = 3;
    pub const STARTING_HEALTH: i32 = 10;

    /// Half-width of the dead zone between the two confinement halves
    pub const GUTTER: f32 = 10.0;

    /// Health at or below this is shown as critical on the HUD
    pub const CRITICAL_HEALTH: i32 = 3;

    /// Seconds the winner banner stays up before the next match
    pub const WINNER_PAUSE_SECS: f32 = 3.0;
}

/// Scale factor between two lengths, guarding against a zero source.
#[inline]
pub fn ratio(new: f32, old: f32) -> f32 {
    if old == 0.0 { 1.0 } else { new / old }
}
