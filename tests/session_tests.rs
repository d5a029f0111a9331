//! Drives full sessions through the headless platform.

use std::ops::ControlFlow;

use space_duel::audio::{AudioLevels, Cue, SoundEffect};
use space_duel::platform::{HeadlessPlatform, Platform, run, run_frame};
use space_duel::sim::{Key, MatchConfig, Outcome, Phase, Session};

fn session() -> Session {
    Session::new(MatchConfig::default(), 1120.0, 840.0, 30).unwrap()
}

fn platform() -> HeadlessPlatform {
    HeadlessPlatform::new((1120.0, 840.0), (1920.0, 1080.0))
}

#[test]
fn test_first_frame_draws_and_starts_music() {
    let mut s = session();
    let mut p = platform();
    let levels = AudioLevels::default();

    assert!(run_frame(&mut s, &mut p, &levels).is_continue());
    assert_eq!(p.draws, 1);
    assert_eq!(p.cues, vec![Cue::StartMusic { volume: 0.2 }]);
}

#[test]
fn test_shot_plays_laser() {
    let mut s = session();
    let mut p = platform();
    let levels = AudioLevels::default();

    run_frame(&mut s, &mut p, &levels);
    p.tap(Key::RightCtrl);
    run_frame(&mut s, &mut p, &levels);

    assert_eq!(
        p.cues.last(),
        Some(&Cue::Play {
            effect: SoundEffect::LaserFire,
            volume: 0.2
        })
    );
    let (snapshot, _) = p.last_draw.clone().unwrap();
    assert_eq!(snapshot.red.projectiles.len(), 1);
}

#[test]
fn test_toggle_rescales_on_next_frame() {
    let mut s = session();
    let mut p = platform();
    let levels = AudioLevels::default();

    p.hold(Key::Char('d'));
    for _ in 0..10 {
        run_frame(&mut s, &mut p, &levels);
    }
    p.release(Key::Char('d'));
    let before = s.snapshot();

    p.tap(Key::F11);
    run_frame(&mut s, &mut p, &levels);
    assert!(p.is_fullscreen());

    run_frame(&mut s, &mut p, &levels);
    assert_eq!(s.current().viewport().width, 1920.0);
    assert_eq!(s.current().viewport().height, 1080.0);

    let after = s.snapshot();
    let rel_before = before.blue.bounds.pos.x / 1120.0;
    let rel_after = after.blue.bounds.pos.x / 1920.0;
    assert!((rel_before - rel_after).abs() < 1e-4);
    assert_eq!(after.blue.health, before.blue.health);
}

#[test]
fn test_full_match_then_pause_then_quit() {
    let mut s = session();
    let mut p = platform();
    let levels = AudioLevels::default();

    let mut decided = None;
    for _ in 0..2000 {
        p.tap(Key::LeftCtrl);
        match run_frame(&mut s, &mut p, &levels) {
            ControlFlow::Continue(frame) => {
                if let Some(outcome) = frame.match_over {
                    decided = Some(outcome);
                    break;
                }
            }
            ControlFlow::Break(()) => panic!("unexpected quit"),
        }
    }
    assert_eq!(decided, Some(Outcome::BlueWins));
    assert_eq!(p.cues.last(), Some(&Cue::StopMusic));

    let (_, phase) = p.last_draw.clone().unwrap();
    assert!(matches!(phase, Phase::ShowingWinner { outcome: Outcome::BlueWins, .. }));
    assert_eq!(p.last_banner, Some("Blue Wins!"));

    // Still in the pause, quit must be honored immediately
    run_frame(&mut s, &mut p, &levels);
    p.request_quit();
    let draws = p.draws;
    assert!(run_frame(&mut s, &mut p, &levels).is_break());
    assert_eq!(p.draws, draws);
}

#[test]
fn test_random_session_respects_invariants() {
    let config = MatchConfig::default();
    let mut s = Session::new(config.clone(), 1120.0, 840.0, 10).unwrap();
    let held: Vec<Key> = [config.blue_keys, config.red_keys]
        .iter()
        .flat_map(|b| [b.left, b.right, b.up, b.down])
        .collect();
    let taps = vec![config.blue_keys.shoot, config.red_keys.shoot, config.toggle_viewport_key];
    let mut p = platform()
        .with_random_input(7, held, taps)
        .with_quit_after(3000);
    let levels = AudioLevels::default();

    let mut frames = 0;
    while run_frame(&mut s, &mut p, &levels).is_continue() {
        frames += 1;
        let m = s.current();
        for side in [space_duel::sim::Side::Blue, space_duel::sim::Side::Red] {
            let c = m.combatant(side);
            assert!(c.bounds().is_within(&c.confinement()));
            assert!(c.projectiles().len() <= config.projectile_cap);
            assert!(c.health() >= 0);
        }
    }
    assert_eq!(frames, 3000);
    assert!(p.quit_requested());
}

#[test]
fn test_run_stops_at_max_ticks() {
    let mut s = session();
    let mut p = platform();
    assert_eq!(run(&mut s, &mut p, &AudioLevels::default(), Some(25)), 25);
    assert_eq!(p.draws, 25);
}

#[test]
fn test_rejected_viewport_keeps_match_running() {
    let mut s = session();
    let mut p = HeadlessPlatform::new((1120.0, 840.0), (0.0, 0.0));
    let levels = AudioLevels::default();

    p.hold(Key::Up);
    for _ in 0..5 {
        run_frame(&mut s, &mut p, &levels);
    }
    p.release(Key::Up);
    let before = s.snapshot();

    p.tap(Key::F11);
    run_frame(&mut s, &mut p, &levels);
    assert!(p.is_fullscreen());

    for _ in 0..30 {
        assert!(run_frame(&mut s, &mut p, &levels).is_continue());
    }
    assert_eq!(s.rejected_size(), Some((0.0, 0.0)));
    assert_eq!(s.current().viewport().width, 1120.0);
    assert_eq!(s.current().viewport().height, 840.0);

    let after = s.snapshot();
    assert_eq!(after.blue.bounds, before.blue.bounds);
    assert_eq!(after.red.bounds, before.red.bounds);
    assert_eq!(after.blue.health, before.blue.health);
    assert_eq!(p.last_banner, None);

    // Back to the windowed size, nothing to rescale
    p.tap(Key::F11);
    run_frame(&mut s, &mut p, &levels);
    assert!(!p.is_fullscreen());
    run_frame(&mut s, &mut p, &levels);
    assert_eq!(s.current().viewport().width, 1120.0);
}
