//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Driven once per external tick, no wall-clock reads
//! - Fixed processing order (blue before red)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod combatant;
pub mod config;
pub mod input;
pub mod projectile;
pub mod rect;
pub mod session;
pub mod state;
pub mod tick;
pub mod viewport;

pub use collision::resolve_projectiles;
pub use combatant::Combatant;
pub use config::MatchConfig;
pub use input::{Action, Key, KeyBinding, KeySet};
pub use projectile::Projectile;
pub use rect::Rect;
pub use session::{Frame, Phase, Session};
pub use state::{CombatantView, Match, Outcome, Side, Snapshot};
pub use tick::{EventKind, MatchEvent, TickInput, TickResult, tick};
pub use viewport::ViewportConfig;
