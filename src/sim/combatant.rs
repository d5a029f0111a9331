//! A player-controlled craft
//!
//! Owns its own bounds, health and projectiles. A combatant never looks at
//! its opponent: hits are applied by the match after comparing both.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input::{Action, KeyBinding, KeySet};
use super::projectile::Projectile;
use super::rect::Rect;

/// One of the two craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub(crate) bounds: Rect,
    pub(crate) confinement: Rect,
    /// May dip below zero within the tick that kills; read through `health()`
    pub(crate) health: i32,
    facing: i8,
    pub(crate) projectiles: Vec<Projectile>,
    key_binding: KeyBinding,
}

impl Combatant {
    pub(crate) fn new(
        bounds: Rect,
        confinement: Rect,
        facing: i8,
        health: i32,
        key_binding: KeyBinding,
    ) -> Self {
        debug_assert!(facing == 1 || facing == -1);
        let mut combatant = Self {
            bounds,
            confinement,
            health,
            facing,
            projectiles: Vec::new(),
            key_binding,
        };
        combatant.bounds.clamp_within(&combatant.confinement);
        combatant
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn confinement(&self) -> Rect {
        self.confinement
    }

    /// Health as reported to the outside world, floored at 0
    pub fn health(&self) -> i32 {
        self.health.max(0)
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn facing(&self) -> i8 {
        self.facing
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn key_binding(&self) -> &KeyBinding {
        &self.key_binding
    }

    /// Apply every held direction, then clamp back into the confinement
    pub fn handle_movement(&mut self, pressed: &KeySet, velocity: f32) {
        let mut delta = Vec2::ZERO;
        if self.key_binding.is_held(Action::MoveLeft, pressed) {
            delta.x -= velocity;
        }
        if self.key_binding.is_held(Action::MoveRight, pressed) {
            delta.x += velocity;
        }
        if self.key_binding.is_held(Action::MoveUp, pressed) {
            delta.y -= velocity;
        }
        if self.key_binding.is_held(Action::MoveDown, pressed) {
            delta.y += velocity;
        }

        self.bounds.translate(delta);
        self.bounds.clamp_within(&self.confinement);
    }

    /// Fire a projectile from the leading edge, unless `cap` are already live
    pub fn shoot(&mut self, projectile_size: Vec2, cap: usize) -> Option<Projectile> {
        if self.projectiles.len() >= cap {
            return None;
        }

        let y = self.bounds.y() + self.bounds.height() / 2.0 - projectile_size.y / 2.0;
        let x = if self.facing > 0 {
            self.bounds.right()
        } else {
            self.bounds.x() - projectile_size.x
        };

        let projectile = Projectile::new(Rect::from_pos_size(Vec2::new(x, y), projectile_size), self.facing);
        self.projectiles.push(projectile);
        Some(projectile)
    }

    /// Take one point of damage
    pub fn hit(&mut self) {
        self.health -= 1;
    }

    /// Advance every live projectile. Pruning is the match's job.
    pub fn advance_projectiles(&mut self, speed: f32) {
        for projectile in &mut self.projectiles {
            projectile.advance(speed);
        }
    }
}
