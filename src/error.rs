//! Error types for match construction and configuration.
//!
//! `tick` itself never fails: unmapped keys are ignored and shooting at the
//! projectile cap is a no-op. Everything here is raised before a match
//! exists, or by a rescale that is rejected without touching live state.

use thiserror::Error;

use crate::sim::Key;

/// Result type alias using [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Invalid configuration detected at construction time.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A size that must be strictly positive was not.
    #[error("{name} must be positive, got {value}")]
    NonPositiveDimension {
        /// Which option was rejected.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A per-tick velocity that must be strictly positive was not.
    #[error("{name} velocity must be positive, got {value}")]
    NonPositiveVelocity {
        /// Which option was rejected.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// The projectile cap was zero.
    #[error("projectile cap must be at least 1")]
    ZeroProjectileCap,

    /// Starting health was zero or negative.
    #[error("starting health must be at least 1, got {0}")]
    NonPositiveHealth(i32),

    /// The gutter leaves no room for a confinement half.
    #[error("gutter {gutter} leaves no confinement in an arena {arena_width} wide")]
    EmptyConfinement {
        /// Gutter at the current viewport.
        gutter: f32,
        /// Arena width at the current viewport.
        arena_width: f32,
    },

    /// A combatant does not fit inside its confinement half.
    #[error("combatant {width}x{height} does not fit in confinement {confinement_width}x{confinement_height}")]
    CombatantTooLarge {
        width: f32,
        height: f32,
        confinement_width: f32,
        confinement_height: f32,
    },

    /// The same key is bound to more than one action.
    #[error("key {0:?} is bound more than once")]
    DuplicateBinding(Key),

    /// The viewport has a zero or negative dimension.
    #[error("invalid viewport size {width}x{height}")]
    InvalidViewport {
        width: f32,
        height: f32,
    },

    /// Reading or writing a settings file failed.
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A settings file was not valid JSON for [`crate::Settings`].
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}
