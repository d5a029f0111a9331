//! Axis-aligned rectangles in screen space
//!
//! Origin is the top-left corner, x grows right and y grows down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Slack allowed on containment checks for edges set by `clamp_within`
const CONTAIN_EPSILON: f32 = 1e-3;

/// An axis-aligned rectangle (top-left position + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap test. Rectangles that only share an edge do not collide.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }

    /// True if `self` lies entirely inside `border` (edges may touch)
    pub fn is_within(&self, border: &Rect) -> bool {
        self.pos.x >= border.pos.x - CONTAIN_EPSILON
            && self.pos.y >= border.pos.y - CONTAIN_EPSILON
            && self.right() <= border.right() + CONTAIN_EPSILON
            && self.bottom() <= border.bottom() + CONTAIN_EPSILON
    }

    /// Push the rectangle back inside `border`, one axis at a time.
    ///
    /// Assumes `self` is no larger than `border`; a craft bigger than its
    /// confinement is rejected when the match is built.
    pub fn clamp_within(&mut self, border: &Rect) {
        if self.pos.x < border.pos.x {
            self.pos.x = border.pos.x;
        } else if self.right() > border.right() {
            self.pos.x = border.right() - self.size.x;
        }

        if self.pos.y < border.pos.y {
            self.pos.y = border.pos.y;
        } else if self.bottom() > border.bottom() {
            self.pos.y = border.bottom() - self.size.y;
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }
}
