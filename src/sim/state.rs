//! Match state and core simulation types
//!
//! A [`Match`] owns both combatants and the arena geometry. Nothing holds a
//! reference back to it; per-tick logic lives in `tick.rs` and reads both
//! sides from here.

use serde::{Deserialize, Serialize};

use super::combatant::Combatant;
use super::config::MatchConfig;
use super::projectile::Projectile;
use super::rect::Rect;
use super::viewport::ViewportConfig;
use crate::consts::CRITICAL_HEALTH;
use crate::error::Result;

/// Which craft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Left half, fires rightward
    Blue,
    /// Right half, fires leftward
    Red,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Blue => Side::Red,
            Side::Red => Side::Blue,
        }
    }

    /// Direction this side's projectiles travel
    pub fn facing(self) -> i8 {
        match self {
            Side::Blue => 1,
            Side::Red => -1,
        }
    }

    /// Display color (RGB)
    pub fn color(self) -> [u8; 3] {
        match self {
            Side::Blue => [0, 235, 235],
            Side::Red => [235, 0, 0],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Blue => "Blue",
            Side::Red => "Red",
        }
    }
}

/// Match result after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Continuing,
    BlueWins,
    RedWins,
    /// Both craft went down on the same tick
    Draw,
}

impl Outcome {
    /// Derive the outcome from the two death flags
    pub fn from_deaths(blue_dead: bool, red_dead: bool) -> Self {
        match (blue_dead, red_dead) {
            (true, true) => Outcome::Draw,
            (true, false) => Outcome::RedWins,
            (false, true) => Outcome::BlueWins,
            (false, false) => Outcome::Continuing,
        }
    }

    pub fn is_over(self) -> bool {
        self != Outcome::Continuing
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::BlueWins => Some(Side::Blue),
            Outcome::RedWins => Some(Side::Red),
            Outcome::Continuing | Outcome::Draw => None,
        }
    }

    /// Winner banner text
    pub fn banner(self) -> Option<&'static str> {
        match self {
            Outcome::Continuing => None,
            Outcome::BlueWins => Some("Blue Wins!"),
            Outcome::RedWins => Some("Red Wins!"),
            Outcome::Draw => Some("Draw!"),
        }
    }
}

/// What the presentation layer needs to draw one combatant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantView {
    pub side: Side,
    /// Fill color (RGB)
    pub color: [u8; 3],
    pub bounds: Rect,
    /// Floored at 0
    pub health: i32,
    /// Health HUD should use the warning color
    pub health_critical: bool,
    pub projectiles: Vec<Projectile>,
}

/// Per-frame render snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub arena: Rect,
    pub blue: CombatantView,
    pub red: CombatantView,
    pub outcome: Outcome,
}

/// A single match between blue and red
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub(crate) config: MatchConfig,
    pub(crate) viewport: ViewportConfig,
    pub(crate) blue: Combatant,
    pub(crate) red: Combatant,
    /// Simulation tick counter
    pub(crate) time_ticks: u64,
}

impl Match {
    /// Start a fresh match on a `width` x `height` viewport
    pub fn new(config: MatchConfig, width: f32, height: f32) -> Result<Self> {
        let viewport = ViewportConfig::derive(&config, width, height)?;
        Ok(Self::with_viewport(config, viewport))
    }

    /// Start a fresh match on an already derived viewport
    pub(crate) fn with_viewport(config: MatchConfig, viewport: ViewportConfig) -> Self {
        let blue = Combatant::new(
            viewport.blue_start(),
            viewport.blue_confinement(),
            Side::Blue.facing(),
            config.starting_health,
            config.blue_keys,
        );
        let red = Combatant::new(
            viewport.red_start(),
            viewport.red_confinement(),
            Side::Red.facing(),
            config.starting_health,
            config.red_keys,
        );

        Self {
            config,
            viewport,
            blue,
            red,
            time_ticks: 0,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn viewport(&self) -> &ViewportConfig {
        &self.viewport
    }

    pub fn arena(&self) -> Rect {
        self.viewport.arena()
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Blue => &self.blue,
            Side::Red => &self.red,
        }
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_deaths(self.blue.is_dead(), self.red.is_dead())
    }

    /// Re-derive geometry for a new viewport size and remap live state onto it.
    ///
    /// On error the match is left exactly as it was.
    pub fn rescale_viewport(&mut self, width: f32, height: f32) -> Result<()> {
        let target = ViewportConfig::derive(&self.config, width, height)?;
        self.rescale_to(target);
        Ok(())
    }

    /// Remap both combatants and their projectiles onto `target`.
    ///
    /// Positions keep their relative place on screen; sizes come from the
    /// new viewport; health is carried over untouched. Both sides are built
    /// first and then swapped in together.
    pub(crate) fn rescale_to(&mut self, target: ViewportConfig) {
        let from = self.viewport;
        let blue = remap_combatant(&self.blue, &from, &target, target.blue_confinement());
        let red = remap_combatant(&self.red, &from, &target, target.red_confinement());

        log::info!(
            "Viewport rescaled {}x{} -> {}x{}",
            from.width,
            from.height,
            target.width,
            target.height
        );

        self.blue = blue;
        self.red = red;
        self.viewport = target;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            arena: self.arena(),
            blue: view(Side::Blue, &self.blue),
            red: view(Side::Red, &self.red),
            outcome: self.outcome(),
        }
    }
}

fn remap_combatant(
    combatant: &Combatant,
    from: &ViewportConfig,
    to: &ViewportConfig,
    confinement: Rect,
) -> Combatant {
    let pos = from.remap_point(combatant.bounds.pos, to);
    let mut remapped = Combatant::new(
        Rect::from_pos_size(pos, to.player_size),
        confinement,
        combatant.facing(),
        combatant.health,
        *combatant.key_binding(),
    );
    remapped.projectiles = combatant
        .projectiles
        .iter()
        .map(|p| {
            let pos = from.remap_point(p.rect.pos, to);
            Projectile::new(Rect::from_pos_size(pos, to.projectile_size), p.direction)
        })
        .collect();
    remapped
}

fn view(side: Side, combatant: &Combatant) -> CombatantView {
    CombatantView {
        side,
        color: side.color(),
        bounds: combatant.bounds(),
        health: combatant.health(),
        health_critical: combatant.health() <= CRITICAL_HEALTH,
        projectiles: combatant.projectiles().to_vec(),
    }
}
