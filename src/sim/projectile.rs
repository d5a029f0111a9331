//! Projectiles: constant-velocity rectangles travelling along x

use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// A live projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
    /// +1 travels right, -1 travels left
    pub direction: i8,
}

impl Projectile {
    pub fn new(rect: Rect, direction: i8) -> Self {
        debug_assert!(direction == 1 || direction == -1);
        Self { rect, direction }
    }

    /// Move one fixed step along `direction`
    #[inline]
    pub fn advance(&mut self, speed: f32) {
        self.rect.pos.x += speed * f32::from(self.direction);
    }

    /// True once the projectile has fully left the lane on its far side.
    pub fn is_spent(&self, arena_width: f32, arena_min_x: f32) -> bool {
        if self.direction > 0 {
            self.rect.x() > arena_width
        } else {
            self.rect.right() < arena_min_x
        }
    }
}
