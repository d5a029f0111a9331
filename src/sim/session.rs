//! Match lifecycle: play, winner pause, restart
//!
//! The winner pause is a countdown in ticks, not a sleep. Quit is checked
//! on every step, so it is honored immediately in any phase.

use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::state::{Match, Outcome, Snapshot};
use super::tick::{MatchEvent, TickInput, tick};
use crate::error::Result;

/// Where the session is in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Match in progress
    Playing,
    /// Match decided, banner up; counts down to the next match
    ShowingWinner { outcome: Outcome, ticks_left: u32 },
}

/// Everything that happened during one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub events: Vec<MatchEvent>,
    /// A fresh match began this step
    pub match_started: bool,
    /// The match was decided this step
    pub match_over: Option<Outcome>,
    /// The viewport toggle key went down; the platform should switch size
    pub toggle_viewport: bool,
    pub phase: Phase,
}

impl Frame {
    fn new(phase: Phase) -> Self {
        Self {
            events: Vec::new(),
            match_started: false,
            match_over: None,
            toggle_viewport: false,
            phase,
        }
    }
}

/// Runs matches back to back
#[derive(Debug, Clone)]
pub struct Session {
    current: Match,
    phase: Phase,
    winner_pause_ticks: u32,
    /// First step of the current match has not happened yet
    fresh: bool,
    matches_played: u32,
    /// Last viewport size `resize` refused, until a resize succeeds
    rejected_size: Option<(f32, f32)>,
}

impl Session {
    pub fn new(config: MatchConfig, width: f32, height: f32, winner_pause_ticks: u32) -> Result<Self> {
        let current = Match::new(config, width, height)?;
        log::info!("Session started on {}x{} viewport", width, height);
        Ok(Self {
            current,
            phase: Phase::Playing,
            winner_pause_ticks,
            fresh: true,
            matches_played: 0,
            rejected_size: None,
        })
    }

    pub fn current(&self) -> &Match {
        &self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn matches_played(&self) -> u32 {
        self.matches_played
    }

    pub fn snapshot(&self) -> Snapshot {
        self.current.snapshot()
    }

    /// Remap the live match onto a new viewport size.
    ///
    /// A refused size is remembered so callers polling the platform every
    /// frame can skip retrying it.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<()> {
        match self.current.rescale_viewport(width, height) {
            Ok(()) => {
                self.rejected_size = None;
                Ok(())
            }
            Err(e) => {
                self.rejected_size = Some((width, height));
                Err(e)
            }
        }
    }

    pub fn rejected_size(&self) -> Option<(f32, f32)> {
        self.rejected_size
    }

    /// Advance one tick. `Break` means the player quit.
    pub fn step(&mut self, input: &TickInput, quit: bool) -> ControlFlow<(), Frame> {
        if quit {
            log::info!("Quit requested during {:?}", self.phase);
            return ControlFlow::Break(());
        }

        let mut frame = Frame::new(self.phase);
        if self.fresh {
            frame.match_started = true;
            self.fresh = false;
        }

        match self.phase {
            Phase::Playing => {
                frame.toggle_viewport = input
                    .key_downs
                    .contains(&self.current.config().toggle_viewport_key);

                let result = tick(&mut self.current, input);
                frame.events = result.events;

                if result.outcome.is_over() {
                    self.matches_played += 1;
                    match result.outcome.winner() {
                        Some(side) => {
                            log::info!("{} wins match {}", side.as_str(), self.matches_played)
                        }
                        None => log::info!("Match {} drawn", self.matches_played),
                    }
                    frame.match_over = Some(result.outcome);
                    self.phase = Phase::ShowingWinner {
                        outcome: result.outcome,
                        ticks_left: self.winner_pause_ticks,
                    };
                }
            }
            // Only quit is honored while the banner is up
            Phase::ShowingWinner { outcome, ticks_left } => {
                if ticks_left <= 1 {
                    self.restart();
                    frame.match_started = true;
                    self.fresh = false;
                } else {
                    self.phase = Phase::ShowingWinner {
                        outcome,
                        ticks_left: ticks_left - 1,
                    };
                }
            }
        }

        frame.phase = self.phase;
        ControlFlow::Continue(frame)
    }

    /// Fresh match at the current viewport
    fn restart(&mut self) {
        let config = self.current.config().clone();
        let viewport = *self.current.viewport();
        self.current = Match::with_viewport(config, viewport);
        self.phase = Phase::Playing;
        log::info!("Match {} starting", self.matches_played + 1);
    }
}
