//! Key identifiers and per-player bindings
//!
//! The presentation layer translates its native key codes into [`Key`];
//! the simulation only ever compares keys for equality.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A keyboard key as seen by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A printable key, lowercase
    Char(char),
    Left,
    Right,
    Up,
    Down,
    LeftCtrl,
    RightCtrl,
    LeftShift,
    RightShift,
    Space,
    Enter,
    Escape,
    F11,
    /// Any other platform key code
    Other(u32),
}

/// Actions a combatant can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Shoot,
}

/// Keys currently held down
pub type KeySet = HashSet<Key>;

/// One combatant's controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub left: Key,
    pub right: Key,
    pub up: Key,
    pub down: Key,
    pub shoot: Key,
}

impl KeyBinding {
    /// WASD + left ctrl
    pub fn blue_default() -> Self {
        Self {
            left: Key::Char('a'),
            right: Key::Char('d'),
            up: Key::Char('w'),
            down: Key::Char('s'),
            shoot: Key::LeftCtrl,
        }
    }

    /// Arrow keys + right ctrl
    pub fn red_default() -> Self {
        Self {
            left: Key::Left,
            right: Key::Right,
            up: Key::Up,
            down: Key::Down,
            shoot: Key::RightCtrl,
        }
    }

    pub fn key_for(&self, action: Action) -> Key {
        match action {
            Action::MoveLeft => self.left,
            Action::MoveRight => self.right,
            Action::MoveUp => self.up,
            Action::MoveDown => self.down,
            Action::Shoot => self.shoot,
        }
    }

    /// All five bound keys
    pub fn keys(&self) -> [Key; 5] {
        [self.left, self.right, self.up, self.down, self.shoot]
    }

    /// Whether `action` is held in `pressed`
    #[inline]
    pub fn is_held(&self, action: Action, pressed: &KeySet) -> bool {
        pressed.contains(&self.key_for(action))
    }
}
