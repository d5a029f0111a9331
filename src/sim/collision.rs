//! Projectile resolution against the opposing craft
//!
//! A projectile that overlaps the opponent is consumed and scores a hit,
//! even if it has also crossed the far edge on the same tick. Otherwise it
//! is dropped silently once spent.

use super::combatant::Combatant;
use super::state::Side;
use super::tick::{EventKind, MatchEvent};

/// Advance `shooter`'s projectiles one step and resolve them against `target`.
///
/// Pushes one `Hit` event (tagged with the shooter) per projectile that
/// connects, in the shooter's projectile order.
pub fn resolve_projectiles(
    shooter_side: Side,
    shooter: &mut Combatant,
    target: &mut Combatant,
    arena_width: f32,
    speed: f32,
    events: &mut Vec<MatchEvent>,
) {
    shooter.advance_projectiles(speed);

    let target_bounds = target.bounds();
    shooter.projectiles.retain(|projectile| {
        if projectile.rect.intersects(&target_bounds) {
            target.hit();
            events.push(MatchEvent {
                kind: EventKind::Hit,
                combatant: shooter_side,
            });
            false
        } else {
            !projectile.is_spent(arena_width, 0.0)
        }
    });
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::{KeyBinding, Projectile, Rect};

    fn pair() -> (Combatant, Combatant) {
        let blue = Combatant::new(
            Rect::new(100.0, 100.0, 40.0, 30.0),
            Rect::new(0.0, 0.0, 390.0, 600.0),
            1,
            10,
            KeyBinding::blue_default(),
        );
        let red = Combatant::new(
            Rect::new(600.0, 100.0, 40.0, 30.0),
            Rect::new(410.0, 0.0, 390.0, 600.0),
            -1,
            10,
            KeyBinding::red_default(),
        );
        (blue, red)
    }

    #[test]
    fn test_hit_consumes_projectile_and_damages_target() {
        let (mut blue, mut red) = pair();
        blue.projectiles.push(Projectile::new(Rect::new(585.0, 110.0, 10.0, 4.0), 1));

        let mut events = Vec::new();
        resolve_projectiles(Side::Blue, &mut blue, &mut red, 800.0, 10.0, &mut events);

        assert!(blue.projectiles().is_empty());
        assert_eq!(red.health(), 9);
        assert_eq!(blue.health(), 10);
        assert_eq!(
            events,
            vec![MatchEvent {
                kind: EventKind::Hit,
                combatant: Side::Blue
            }]
        );
    }

    #[test]
    fn test_miss_above_target_keeps_flying() {
        let (mut blue, mut red) = pair();
        blue.projectiles.push(Projectile::new(Rect::new(585.0, 50.0, 10.0, 4.0), 1));

        let mut events = Vec::new();
        resolve_projectiles(Side::Blue, &mut blue, &mut red, 800.0, 10.0, &mut events);

        assert_eq!(blue.projectiles().len(), 1);
        assert_eq!(red.health(), 10);
        assert!(events.is_empty());
    }

    #[test]
    fn test_spent_projectile_removed_silently() {
        let (mut blue, mut red) = pair();
        red.projectiles.push(Projectile::new(Rect::new(-5.0, 300.0, 10.0, 4.0), -1));

        let mut events = Vec::new();
        resolve_projectiles(Side::Red, &mut red, &mut blue, 800.0, 10.0, &mut events);

        assert!(red.projectiles().is_empty());
        assert_eq!(blue.health(), 10);
        assert!(events.is_empty());
    }

    #[test]
    fn test_collision_wins_over_expiry() {
        // Target parked flush against the far edge of the lane
        let (mut blue, mut red) = pair();
        red.bounds.pos = Vec2::new(790.0, 100.0);
        red.bounds.size = Vec2::new(40.0, 30.0);
        blue.projectiles.push(Projectile::new(Rect::new(795.0, 110.0, 10.0, 4.0), 1));

        let mut events = Vec::new();
        resolve_projectiles(Side::Blue, &mut blue, &mut red, 800.0, 10.0, &mut events);

        assert_eq!(events.len(), 1);
        assert_eq!(red.health(), 9);
    }

    #[test]
    fn test_multiple_hits_in_one_tick_not_skipped() {
        let (mut blue, mut red) = pair();
        for y in [105.0, 112.0, 119.0] {
            blue.projectiles.push(Projectile::new(Rect::new(590.0, y, 10.0, 4.0), 1));
        }

        let mut events = Vec::new();
        resolve_projectiles(Side::Blue, &mut blue, &mut red, 800.0, 10.0, &mut events);

        assert!(blue.projectiles().is_empty());
        assert_eq!(red.health(), 7);
        assert_eq!(events.len(), 3);
    }
}
