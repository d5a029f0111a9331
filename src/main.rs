//! Space Duel entry point
//!
//! Runs a headless match session driven by seeded random input. A windowed
//! frontend plugs in through `space_duel::platform::Platform`.

use std::path::PathBuf;

use space_duel::Settings;
use space_duel::audio::AudioLevels;
use space_duel::platform::{self, HeadlessPlatform};
use space_duel::sim::{Key, Session};

const DEFAULT_SETTINGS: &str = "space_duel.json";
/// Surface size reported while the headless viewport is toggled to fullscreen
const FULLSCREEN_SIZE: (f32, f32) = (1920.0, 1080.0);
/// One simulated minute at the default tick rate
const DEMO_TICKS: u64 = 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Space Duel (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS));
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5eed);

    let settings = Settings::load_or_default(&settings_path);
    let (width, height) = (settings.window_width, settings.window_height);

    let mut session = match Session::new(
        settings.game.clone(),
        width,
        height,
        settings.winner_pause_ticks(),
    ) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let game = &settings.game;
    let held: Vec<Key> = [game.blue_keys, game.red_keys]
        .iter()
        .flat_map(|b| [b.left, b.right, b.up, b.down])
        .collect();
    let taps = vec![game.blue_keys.shoot, game.red_keys.shoot, game.toggle_viewport_key];

    let mut headless = HeadlessPlatform::new((width, height), FULLSCREEN_SIZE)
        .with_random_input(seed, held, taps);
    if settings.start_fullscreen {
        platform::Platform::toggle_viewport(&mut headless);
    }

    let levels = AudioLevels::from_settings(&settings);
    let ticks = platform::run(&mut session, &mut headless, &levels, Some(DEMO_TICKS));

    let snapshot = session.snapshot();
    log::info!(
        "Ran {} ticks, {} matches decided; blue {} / red {} health",
        ticks,
        session.matches_played(),
        snapshot.blue.health,
        snapshot.red.health
    );
}
