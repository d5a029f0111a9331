//! Platform abstraction layer
//!
//! The simulation core never touches a window, a sound device or the
//! keyboard. A [`Platform`] supplies input and viewport size, and receives
//! what to draw and which sounds to play. [`run_frame`] wires one tick of
//! that exchange together.

pub mod headless;

use std::ops::ControlFlow;

use crate::audio::{AudioLevels, Cue, cues_for};
use crate::sim::{Frame, Key, KeySet, Phase, Session, Snapshot, TickInput};

pub use headless::HeadlessPlatform;

/// Presentation layer seen from the simulation
pub trait Platform {
    /// Process pending OS/window events. Called once at the start of each frame.
    fn pump_events(&mut self) {}

    /// Keys held down right now
    fn pressed_keys(&self) -> KeySet;

    /// Key-down events since the last call, oldest first
    fn drain_key_downs(&mut self) -> Vec<Key>;

    /// Window close / quit signal
    fn quit_requested(&self) -> bool;

    /// Current drawable size in pixels
    fn viewport_size(&self) -> (f32, f32);

    /// Switch between the windowed and fullscreen surface
    fn toggle_viewport(&mut self);

    /// Render the match (and the winner banner when `phase` says so)
    fn draw(&mut self, snapshot: &Snapshot, phase: Phase);

    fn play(&mut self, cue: Cue);
}

/// Run one tick against `platform`. `Break` means the player quit.
pub fn run_frame<P: Platform>(
    session: &mut Session,
    platform: &mut P,
    levels: &AudioLevels,
) -> ControlFlow<(), Frame> {
    platform.pump_events();
    let quit = platform.quit_requested();

    let (width, height) = platform.viewport_size();
    let current = session.current().viewport();
    let changed = width != current.width || height != current.height;
    // A refused size is only retried once the platform reports a different one
    if changed && session.rejected_size() != Some((width, height)) {
        let resized = session.resize(width, height);
        if let Err(e) = resized {
            log::warn!("Ignoring viewport {}x{}: {}", width, height, e);
        }
    }

    let input = TickInput {
        pressed: platform.pressed_keys(),
        key_downs: platform.drain_key_downs(),
    };

    let frame = match session.step(&input, quit) {
        ControlFlow::Continue(frame) => frame,
        ControlFlow::Break(()) => return ControlFlow::Break(()),
    };

    if frame.toggle_viewport {
        platform.toggle_viewport();
    }

    platform.draw(&session.snapshot(), frame.phase);
    for cue in cues_for(&frame, levels) {
        platform.play(cue);
    }

    ControlFlow::Continue(frame)
}

/// Drive frames until the player quits or `max_ticks` frames have run.
///
/// Returns the number of frames run.
pub fn run<P: Platform>(
    session: &mut Session,
    platform: &mut P,
    levels: &AudioLevels,
    max_ticks: Option<u64>,
) -> u64 {
    let mut ticks = 0;
    while max_ticks.is_none_or(|max| ticks < max) {
        if run_frame(session, platform, levels).is_break() {
            break;
        }
        ticks += 1;
    }
    ticks
}
