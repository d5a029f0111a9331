//! Fixed-step match tick
//!
//! One call is one frame: edge-triggered shots, continuous movement for
//! both craft, then projectile resolution (blue's projectiles first, then
//! red's), then the win check.

use serde::{Deserialize, Serialize};

use super::collision::resolve_projectiles;
use super::input::{Key, KeySet};
use super::state::{Match, Outcome, Side};

/// Input sampled for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Keys held down right now (movement)
    pub pressed: KeySet,
    /// Key-down events since the last tick, in arrival order (shooting)
    pub key_downs: Vec<Key>,
}

/// Kind of side effect the presentation layer may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// A projectile was spawned
    Fired,
    /// A projectile struck the opponent
    Hit,
}

/// A side effect produced during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub kind: EventKind,
    /// The craft that fired, for both kinds
    pub combatant: Side,
}

impl MatchEvent {
    /// The craft on the receiving end of a hit
    pub fn target(&self) -> Side {
        self.combatant.opponent()
    }
}

/// Result of one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickResult {
    pub events: Vec<MatchEvent>,
    pub outcome: Outcome,
}

/// Advance the match by one tick.
///
/// Once the match is decided further ticks are ignored and keep reporting
/// the same outcome with no events.
pub fn tick(state: &mut Match, input: &TickInput) -> TickResult {
    let outcome = state.outcome();
    if outcome.is_over() {
        return TickResult {
            events: Vec::new(),
            outcome,
        };
    }

    state.time_ticks += 1;
    let mut events = Vec::new();

    let Match {
        config,
        viewport,
        blue,
        red,
        ..
    } = state;

    // Shots are edge-triggered: one projectile per key-down
    for &key in &input.key_downs {
        if key == blue.key_binding().shoot
            && blue.shoot(viewport.projectile_size, config.projectile_cap).is_some()
        {
            events.push(MatchEvent {
                kind: EventKind::Fired,
                combatant: Side::Blue,
            });
        }
        if key == red.key_binding().shoot
            && red.shoot(viewport.projectile_size, config.projectile_cap).is_some()
        {
            events.push(MatchEvent {
                kind: EventKind::Fired,
                combatant: Side::Red,
            });
        }
    }

    // Both craft finish moving before any collision is checked
    blue.handle_movement(&input.pressed, viewport.player_velocity);
    red.handle_movement(&input.pressed, viewport.player_velocity);

    resolve_projectiles(
        Side::Blue,
        blue,
        red,
        viewport.width,
        viewport.projectile_velocity,
        &mut events,
    );
    resolve_projectiles(
        Side::Red,
        red,
        blue,
        viewport.width,
        viewport.projectile_velocity,
        &mut events,
    );

    for event in &events {
        log::debug!(
            "tick {}: {:?} by {}",
            state.time_ticks,
            event.kind,
            event.combatant.as_str()
        );
    }

    let outcome = state.outcome();
    if outcome.is_over() {
        log::info!(
            "Match over after {} ticks: {:?} (blue {}, red {})",
            state.time_ticks,
            outcome,
            state.blue.health(),
            state.red.health()
        );
    }

    TickResult { events, outcome }
}
