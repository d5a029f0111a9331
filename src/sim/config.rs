//! Match tuning, expressed at the reference resolution
//!
//! Everything size- or speed-related is scaled onto the live viewport by
//! [`super::ViewportConfig`]; the cap, starting health and bindings are
//! resolution independent.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::input::{Key, KeyBinding};
use crate::consts::*;
use crate::error::{ConfigError, Result};

/// Recognized match options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Resolution the sizes and velocities below are tuned for
    pub reference_width: f32,
    pub reference_height: f32,

    pub player_width: f32,
    pub player_height: f32,
    /// Pixels per tick while a direction key is held
    pub player_velocity: f32,

    pub projectile_width: f32,
    pub projectile_height: f32,
    /// Pixels per tick
    pub projectile_velocity: f32,

    /// Max live projectiles per combatant
    pub projectile_cap: usize,
    pub starting_health: i32,

    /// Gap kept free on each side of the arena's vertical center line
    pub gutter: f32,

    pub blue_keys: KeyBinding,
    pub red_keys: KeyBinding,
    /// Discrete key that asks the presentation layer to switch viewport
    pub toggle_viewport_key: Key,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            reference_width: REFERENCE_WIDTH,
            reference_height: REFERENCE_HEIGHT,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_velocity: PLAYER_VELOCITY,
            projectile_width: PROJECTILE_WIDTH,
            projectile_height: PROJECTILE_HEIGHT,
            projectile_velocity: PROJECTILE_VELOCITY,
            projectile_cap: PROJECTILE_CAP,
            starting_health: STARTING_HEALTH,
            gutter: GUTTER,
            blue_keys: KeyBinding::blue_default(),
            red_keys: KeyBinding::red_default(),
            toggle_viewport_key: Key::F11,
        }
    }
}

impl MatchConfig {
    /// Reject configurations the simulation cannot run.
    ///
    /// Geometry that depends on the viewport (confinement width, craft fit)
    /// is checked again by `ViewportConfig::derive` for each concrete size.
    pub fn validate(&self) -> Result<()> {
        positive("reference width", self.reference_width)?;
        positive("reference height", self.reference_height)?;
        positive("player width", self.player_width)?;
        positive("player height", self.player_height)?;
        positive("projectile width", self.projectile_width)?;
        positive("projectile height", self.projectile_height)?;

        velocity("player", self.player_velocity)?;
        velocity("projectile", self.projectile_velocity)?;
        if self.projectile_cap == 0 {
            return Err(ConfigError::ZeroProjectileCap);
        }
        if self.starting_health <= 0 {
            return Err(ConfigError::NonPositiveHealth(self.starting_health));
        }
        if self.gutter < 0.0 {
            return Err(ConfigError::NonPositiveDimension {
                name: "gutter",
                value: self.gutter,
            });
        }

        self.validate_bindings()
    }

    fn validate_bindings(&self) -> Result<()> {
        let mut seen = HashSet::new();
        let all = self
            .blue_keys
            .keys()
            .into_iter()
            .chain(self.red_keys.keys())
            .chain(std::iter::once(self.toggle_viewport_key));
        for key in all {
            if !seen.insert(key) {
                return Err(ConfigError::DuplicateBinding(key));
            }
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<()> {
    // NaN fails this comparison too
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveDimension { name, value })
    }
}

fn velocity(name: &'static str, value: f32) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveVelocity { name, value })
    }
}
