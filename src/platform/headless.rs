//! Windowless platform for demos and tests
//!
//! Input comes from explicit calls (`hold`, `tap`, ...) or from a seeded
//! random key source; draws and cues are recorded instead of presented.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::Platform;
use crate::audio::Cue;
use crate::sim::{Key, KeySet, Phase, Snapshot};

/// Seeded random key mashing over a fixed key pool
#[derive(Debug, Clone)]
struct RandomKeys {
    rng: Pcg32,
    held_pool: Vec<Key>,
    tap_pool: Vec<Key>,
}

/// Recording platform with no window
#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    windowed: (f32, f32),
    fullscreen: (f32, f32),
    is_fullscreen: bool,
    pressed: KeySet,
    key_downs: VecDeque<Key>,
    random: Option<RandomKeys>,
    quit: bool,
    /// Raise quit once this many frames have been pumped
    quit_after: Option<u64>,
    frames: u64,

    /// Number of draw calls received
    pub draws: u64,
    /// Most recent snapshot and phase drawn
    pub last_draw: Option<(Snapshot, Phase)>,
    /// Winner banner shown by the most recent draw, if any
    pub last_banner: Option<&'static str>,
    /// Every cue received, in order
    pub cues: Vec<Cue>,
}

impl HeadlessPlatform {
    pub fn new(windowed: (f32, f32), fullscreen: (f32, f32)) -> Self {
        Self {
            windowed,
            fullscreen,
            is_fullscreen: false,
            pressed: KeySet::new(),
            key_downs: VecDeque::new(),
            random: None,
            quit: false,
            quit_after: None,
            frames: 0,
            draws: 0,
            last_draw: None,
            last_banner: None,
            cues: Vec::new(),
        }
    }

    /// Mash keys at random: `held` keys toggle on and off, `taps` fire key-downs
    pub fn with_random_input(mut self, seed: u64, held: Vec<Key>, taps: Vec<Key>) -> Self {
        self.random = Some(RandomKeys {
            rng: Pcg32::seed_from_u64(seed),
            held_pool: held,
            tap_pool: taps,
        });
        self
    }

    pub fn with_quit_after(mut self, frames: u64) -> Self {
        self.quit_after = Some(frames);
        self
    }

    pub fn hold(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    /// Queue a key-down for the next frame
    pub fn tap(&mut self, key: Key) {
        self.key_downs.push_back(key);
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }
}

impl Platform for HeadlessPlatform {
    fn pump_events(&mut self) {
        self.frames += 1;
        if self.quit_after.is_some_and(|limit| self.frames > limit) {
            self.quit = true;
        }

        if let Some(random) = &mut self.random {
            for &key in &random.held_pool {
                if random.rng.random_bool(0.1) && !self.pressed.remove(&key) {
                    self.pressed.insert(key);
                }
            }
            for &key in &random.tap_pool {
                if random.rng.random_bool(0.05) {
                    self.key_downs.push_back(key);
                }
            }
        }
    }

    fn pressed_keys(&self) -> KeySet {
        self.pressed.clone()
    }

    fn drain_key_downs(&mut self) -> Vec<Key> {
        self.key_downs.drain(..).collect()
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }

    fn viewport_size(&self) -> (f32, f32) {
        if self.is_fullscreen {
            self.fullscreen
        } else {
            self.windowed
        }
    }

    fn toggle_viewport(&mut self) {
        self.is_fullscreen = !self.is_fullscreen;
        log::debug!("Headless viewport -> {:?}", self.viewport_size());
    }

    fn draw(&mut self, snapshot: &Snapshot, phase: Phase) {
        self.draws += 1;
        self.last_banner = match phase {
            Phase::ShowingWinner { outcome, .. } => outcome.banner(),
            Phase::Playing => None,
        };
        self.last_draw = Some((snapshot.clone(), phase));
    }

    fn play(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}
