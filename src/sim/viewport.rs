//! Resolution-dependent match geometry
//!
//! A [`ViewportConfig`] is every size, speed and rectangle the simulation
//! needs for one concrete viewport. It is rebuilt from the reference-scale
//! [`MatchConfig`] whenever the presentation surface changes size and then
//! handed to `Match::rescale_viewport` as a whole.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::rect::Rect;
use crate::error::{ConfigError, Result};

/// Derived constants for one viewport size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
    pub player_size: Vec2,
    pub player_velocity: f32,
    pub projectile_size: Vec2,
    pub projectile_velocity: f32,
    pub gutter: f32,
}

impl ViewportConfig {
    /// Scale the reference tuning onto a `width` x `height` viewport.
    ///
    /// Widths and horizontal speeds follow the width ratio, heights follow
    /// the height ratio.
    pub fn derive(config: &MatchConfig, width: f32, height: f32) -> Result<Self> {
        let valid = width > 0.0 && height > 0.0;
        if !valid {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        config.validate()?;

        let sx = width / config.reference_width;
        let sy = height / config.reference_height;

        let viewport = Self {
            width,
            height,
            player_size: Vec2::new(config.player_width * sx, config.player_height * sy),
            player_velocity: config.player_velocity * sx,
            projectile_size: Vec2::new(config.projectile_width * sx, config.projectile_height * sy),
            projectile_velocity: config.projectile_velocity * sx,
            gutter: config.gutter * sx,
        };
        viewport.check_fit()?;
        Ok(viewport)
    }

    fn check_fit(&self) -> Result<()> {
        let half = self.blue_confinement();
        if half.width() <= 0.0 {
            return Err(ConfigError::EmptyConfinement {
                gutter: self.gutter,
                arena_width: self.width,
            });
        }
        if self.player_size.x > half.width() || self.player_size.y > half.height() {
            return Err(ConfigError::CombatantTooLarge {
                width: self.player_size.x,
                height: self.player_size.y,
                confinement_width: half.width(),
                confinement_height: half.height(),
            });
        }
        Ok(())
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn arena(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Left half, minus the gutter
    pub fn blue_confinement(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width / 2.0 - self.gutter, self.height)
    }

    /// Right half, minus the gutter
    pub fn red_confinement(&self) -> Rect {
        Rect::new(
            self.width / 2.0 + self.gutter,
            0.0,
            self.width / 2.0 - self.gutter,
            self.height,
        )
    }

    /// Blue starts centered in the left quarter
    pub fn blue_start(&self) -> Rect {
        self.start_at(0.25)
    }

    /// Red starts centered in the right quarter
    pub fn red_start(&self) -> Rect {
        self.start_at(0.75)
    }

    fn start_at(&self, fraction: f32) -> Rect {
        let pos = Vec2::new(
            self.width * fraction - self.player_size.x / 2.0,
            self.height / 2.0 - self.player_size.y / 2.0,
        );
        Rect::from_pos_size(pos, self.player_size)
    }

    /// Map a point in this viewport onto `target`, preserving its relative position
    pub fn remap_point(&self, point: Vec2, target: &ViewportConfig) -> Vec2 {
        Vec2::new(
            point.x * crate::ratio(target.width, self.width),
            point.y * crate::ratio(target.height, self.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_reference_viewport_matches_config() {
        let config = MatchConfig::default();
        let vp = ViewportConfig::derive(&config, REFERENCE_WIDTH, REFERENCE_HEIGHT).unwrap();
        assert_eq!(vp.player_size, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT));
        assert_eq!(vp.projectile_velocity, PROJECTILE_VELOCITY);
        assert_eq!(vp.gutter, GUTTER);
    }

    #[test]
    fn test_scales_per_axis() {
        let config = MatchConfig::default();
        let vp = ViewportConfig::derive(&config, REFERENCE_WIDTH * 2.0, REFERENCE_HEIGHT).unwrap();
        assert!((vp.player_size.x - PLAYER_WIDTH * 2.0).abs() < 1e-4);
        assert!((vp.player_size.y - PLAYER_HEIGHT).abs() < 1e-4);
        assert!((vp.player_velocity - PLAYER_VELOCITY * 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_confinements_split_arena_around_gutter() {
        let vp = ViewportConfig::derive(&MatchConfig::default(), 800.0, 600.0).unwrap();
        let blue = vp.blue_confinement();
        let red = vp.red_confinement();
        assert!(!blue.intersects(&red));
        assert!((red.x() - blue.right() - 2.0 * vp.gutter).abs() < 1e-4);
        assert!((red.right() - vp.width).abs() < 1e-4);
        assert!(vp.blue_start().is_within(&blue));
        assert!(vp.red_start().is_within(&red));
    }

    #[test]
    fn test_rejects_bad_viewport() {
        let config = MatchConfig::default();
        assert!(matches!(
            ViewportConfig::derive(&config, 0.0, 600.0),
            Err(ConfigError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn test_rejects_gutter_wider_than_half() {
        let config = MatchConfig {
            gutter: REFERENCE_WIDTH,
            ..Default::default()
        };
        assert!(matches!(
            ViewportConfig::derive(&config, REFERENCE_WIDTH, REFERENCE_HEIGHT),
            Err(ConfigError::EmptyConfinement { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_player() {
        let config = MatchConfig {
            player_height: REFERENCE_HEIGHT * 2.0,
            ..Default::default()
        };
        assert!(matches!(
            ViewportConfig::derive(&config, REFERENCE_WIDTH, REFERENCE_HEIGHT),
            Err(ConfigError::CombatantTooLarge { .. })
        ));
    }
}
