//! Collision & damage resolution
//!
//! The resolver runs once per tick, after movement, over the current live
//! sets. Ordering is part of the contract:
//! 1. out-of-bounds bullets removed
//! 2. bullet-bullet pairs (snapshot scan, removals applied after)
//! 3. bullet-tank hits, damage and destroyed-tank resets
//! 4. life exhaustion -> round restart, back to the menu
//! 5. tank-tank separation
//!
//! Entity removal never happens while a collection is being iterated:
//! bullet-bullet collects a removal mask first, bullet-tank collects spent
//! indices first.

use super::rect::screen_bounds;
use super::state::{Explosion, ExplosionKind, GameEvent, GameState, Mode, Tank};
use crate::consts::{BULLET_DAMAGE, TANK_DESTROYED_HEALTH, TANK_LIVES};

/// Push two overlapping tanks apart along the line between their centers,
/// each by half the overlap (mass-equal resolution).
///
/// Coincident centers use a fallback distance of 1 unit to avoid a division
/// by zero; the separation axis stays zero-length, so neither tank moves.
pub fn separate_tanks(a: &mut Tank, b: &mut Tank) {
    let delta = b.pos - a.pos;
    let mut distance = delta.length();
    if distance == 0.0 {
        distance = 1.0;
    }
    let axis = delta / distance;

    let overlap = (a.bounds().size.x / 2.0 + b.bounds().size.x / 2.0) - distance;
    let push = axis * (overlap / 2.0);
    a.pos -= push;
    b.pos += push;
}

/// Run the full resolver pass over the current entity sets, appending
/// events for external collaborators.
pub fn resolve(state: &mut GameState, events: &mut Vec<GameEvent>) {
    remove_out_of_bounds_bullets(state);
    resolve_bullet_bullet(state, events);
    resolve_bullet_tank(state, events);
    check_life_exhaustion(state, events);
    resolve_tank_tank(state);
}

/// Step 1: drop any bullet no longer fully inside the screen rectangle.
fn remove_out_of_bounds_bullets(state: &mut GameState) {
    let screen = screen_bounds();
    state.bullets.retain(|b| b.bounds().within(&screen));
}

/// Step 2: every unordered pair of distinct live bullets whose rectangles
/// intersect is removed, with one small explosion at the first bullet's
/// position. The scan works off the pre-pass set: a bullet claimed by an
/// earlier pair is skipped for later pairs, and removals apply only after
/// the scan completes.
fn resolve_bullet_bullet(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let n = state.bullets.len();
    let mut removed = vec![false; n];

    for i in 0..n {
        if removed[i] {
            continue;
        }
        for j in (i + 1)..n {
            if removed[j] {
                continue;
            }
            if state.bullets[i].bounds().intersects(&state.bullets[j].bounds()) {
                removed[i] = true;
                removed[j] = true;
                let pos = state.bullets[i].pos;
                state.explosions.push(Explosion::new(ExplosionKind::Bullet, pos));
                events.push(GameEvent::BulletsCollided { pos });
                break;
            }
        }
    }

    let mut keep = removed.iter().map(|r| !r);
    state.bullets.retain(|_| keep.next().unwrap_or(true));
}

/// Step 3: bullets against tanks. A hit requires intersecting rectangles
/// and a bullet owner different from the tank's player (self-bullets pass
/// through). A destroyed tank (health below the floor) gets a tank-sized
/// explosion and an immediate reset.
fn resolve_bullet_tank(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let mut spent: Vec<usize> = Vec::new();

    for (idx, bullet) in state.bullets.iter().enumerate() {
        for tank in &mut state.tanks {
            if bullet.owner == tank.player || !bullet.bounds().intersects(&tank.bounds()) {
                continue;
            }

            spent.push(idx);
            state
                .explosions
                .push(Explosion::new(ExplosionKind::Bullet, bullet.pos));
            tank.reduce_health(BULLET_DAMAGE);
            events.push(GameEvent::TankHit { player: tank.player });

            if tank.health < TANK_DESTROYED_HEALTH {
                state
                    .explosions
                    .push(Explosion::new(ExplosionKind::Tank, tank.pos));
                tank.reset();
                log::debug!("tank {} destroyed, {} lives left", tank.player, tank.lives);
                events.push(GameEvent::TankDestroyed { player: tank.player });
            }
            // The bullet is spent on the first tank it hits
            break;
        }
    }

    for idx in spent.into_iter().rev() {
        state.bullets.remove(idx);
    }
}

/// Step 4: a tank with no lives left ends the round. Every tank is reset
/// with lives restored, transient entities are cleared, and the game
/// returns to the menu.
fn check_life_exhaustion(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let loser = state.tanks.iter().find(|t| t.lives < 1).map(|t| t.player);
    if let Some(loser) = loser {
        state.reset_round();
        state.mode = Mode::Menu;
        log::info!("round over, tank {} out of lives", loser);
        events.push(GameEvent::RoundOver { loser });
        debug_assert!(state.tanks.iter().all(|t| t.lives == TANK_LIVES));
    }
}

/// Step 5: separate intersecting tanks, independent of the earlier steps.
fn resolve_tank_tank(state: &mut GameState) {
    let [a, b] = &mut state.tanks;
    if a.bounds().intersects(&b.bounds()) {
        separate_tanks(a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SCREEN_WIDTH, TANK_MAX_HEALTH};
    use crate::sim::state::{Bullet, Direction};
    use glam::Vec2;
    use proptest::prelude::*;

    fn playing_state() -> GameState {
        let mut state = GameState::new();
        state.mode = Mode::Playing;
        state
    }

    #[test]
    fn test_separation_is_symmetric() {
        let mut a = Tank::new(1, Vec2::new(100.0, 100.0), Direction::Right);
        let mut b = Tank::new(2, Vec2::new(130.0, 110.0), Direction::Left);
        let (pa, pb) = (a.pos, b.pos);

        separate_tanks(&mut a, &mut b);

        let total = (a.pos - pa) + (b.pos - pb);
        assert!(total.length() < 1e-4);
        // They actually moved apart
        assert!((b.pos - a.pos).length() > (pb - pa).length());
    }

    #[test]
    fn test_separation_coincident_centers_is_stable() {
        let mut a = Tank::new(1, Vec2::new(100.0, 100.0), Direction::Right);
        let mut b = Tank::new(2, Vec2::new(100.0, 100.0), Direction::Left);

        separate_tanks(&mut a, &mut b);

        // Fallback distance keeps the math finite; the zero axis means
        // neither tank is displaced.
        assert!(a.pos.is_finite() && b.pos.is_finite());
        assert_eq!(a.pos, Vec2::new(100.0, 100.0));
        assert_eq!(b.pos, Vec2::new(100.0, 100.0));
    }

    proptest! {
        #[test]
        fn prop_separation_displacements_cancel(
            ax in 100.0f32..900.0,
            ay in 100.0f32..500.0,
            dx in -47.0f32..47.0,
            dy in -47.0f32..47.0,
        ) {
            prop_assume!(dx != 0.0 || dy != 0.0);
            let mut a = Tank::new(1, Vec2::new(ax, ay), Direction::Right);
            let mut b = Tank::new(2, Vec2::new(ax + dx, ay + dy), Direction::Left);
            let (pa, pb) = (a.pos, b.pos);

            separate_tanks(&mut a, &mut b);

            let total = (a.pos - pa) + (b.pos - pb);
            prop_assert!(total.length() < 1e-3);
        }
    }

    #[test]
    fn test_out_of_bounds_bullet_removed_before_pair_checks() {
        let mut state = playing_state();
        state
            .bullets
            .push(Bullet::new(1, Vec2::new(2.0, 100.0), Direction::Left));
        state
            .bullets
            .push(Bullet::new(2, Vec2::new(500.0, 300.0), Direction::Up));

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.bullets[0].owner, 2);
    }

    #[test]
    fn test_bullet_pair_removed_with_single_explosion() {
        let mut state = playing_state();
        // Same owner: bullet-bullet collisions ignore ownership
        let first = Bullet::new(1, Vec2::new(400.0, 300.0), Direction::Right);
        let second = Bullet::new(1, Vec2::new(404.0, 300.0), Direction::Left);
        let first_pos = first.pos;
        state.bullets.push(first);
        state.bullets.push(second);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert!(state.bullets.is_empty());
        assert_eq!(state.explosions.len(), 1);
        assert_eq!(state.explosions[0].pos, first_pos);
        assert_eq!(state.explosions[0].kind, ExplosionKind::Bullet);
        assert_eq!(events, vec![GameEvent::BulletsCollided { pos: first_pos }]);
    }

    #[test]
    fn test_bullet_claimed_by_pair_is_skipped_later() {
        let mut state = playing_state();
        // Three overlapping bullets: the first pair consumes bullets 0 and
        // 1; bullet 2 must survive the scan untouched.
        state
            .bullets
            .push(Bullet::new(1, Vec2::new(400.0, 300.0), Direction::Right));
        state
            .bullets
            .push(Bullet::new(2, Vec2::new(403.0, 300.0), Direction::Left));
        state
            .bullets
            .push(Bullet::new(1, Vec2::new(406.0, 300.0), Direction::Left));

        let mut events = Vec::new();
        resolve_bullet_bullet(&mut state, &mut events);

        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.explosions.len(), 1);
    }

    #[test]
    fn test_enemy_bullet_damages_tank() {
        let mut state = playing_state();
        let target = state.tanks[0].pos;
        state.bullets.push(Bullet::new(2, target, Direction::Left));

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(state.tanks[0].health, TANK_MAX_HEALTH - BULLET_DAMAGE);
        assert!(state.bullets.is_empty());
        assert_eq!(state.explosions.len(), 1);
        assert!(events.contains(&GameEvent::TankHit { player: 1 }));
    }

    #[test]
    fn test_own_bullet_passes_through() {
        let mut state = playing_state();
        let target = state.tanks[0].pos;
        state.bullets.push(Bullet::new(1, target, Direction::Left));

        let mut events = Vec::new();
        resolve_bullet_tank(&mut state, &mut events);

        assert_eq!(state.tanks[0].health, TANK_MAX_HEALTH);
        assert_eq!(state.bullets.len(), 1);
        assert!(events.is_empty());
    }

    #[test]
    fn test_hit_below_floor_resets_tank() {
        let mut state = playing_state();
        state.tanks[0].reduce_health(35); // down to 15
        let spawn = state.tanks[0].pos;
        // Move the tank off spawn, then hit it there
        state.tanks[0].drive(Direction::Up);
        state.tanks[0].drive(Direction::Up);
        let hit_pos = state.tanks[0].pos;
        state.bullets.push(Bullet::new(2, hit_pos, Direction::Left));

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        // 15 - 10 = 5 < 10: tank-sized explosion at the hit position, then
        // a full reset back to spawn
        assert!(
            state
                .explosions
                .iter()
                .any(|e| e.kind == ExplosionKind::Tank && e.pos == hit_pos)
        );
        assert_eq!(state.tanks[0].pos, spawn);
        assert_eq!(state.tanks[0].health, TANK_MAX_HEALTH);
        assert_eq!(state.tanks[0].lives, TANK_LIVES - 1);
        assert!(events.contains(&GameEvent::TankDestroyed { player: 1 }));
    }

    #[test]
    fn test_life_exhaustion_restarts_round() {
        let mut state = playing_state();
        state.tanks[1].lives = 1;
        state.tanks[1].reduce_health(45); // down to 5, below the floor
        // Stray entities that must be cleared by the restart
        state
            .bullets
            .push(Bullet::new(1, state.tanks[1].pos, Direction::Right));
        state
            .bullets
            .push(Bullet::new(2, Vec2::new(500.0, 100.0), Direction::Up));
        state
            .explosions
            .push(Explosion::new(ExplosionKind::Bullet, Vec2::new(50.0, 50.0)));

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(state.mode, Mode::Menu);
        assert!(state.bullets.is_empty());
        assert!(state.explosions.is_empty());
        for tank in &state.tanks {
            assert_eq!(tank.lives, TANK_LIVES);
            assert_eq!(tank.health, TANK_MAX_HEALTH);
        }
        assert!(events.contains(&GameEvent::RoundOver { loser: 2 }));
    }

    #[test]
    fn test_overlapping_tanks_are_separated() {
        let mut state = playing_state();
        state.tanks[0].pos = Vec2::new(SCREEN_WIDTH / 2.0, 300.0);
        state.tanks[1].pos = Vec2::new(SCREEN_WIDTH / 2.0 + 20.0, 300.0);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        let gap = (state.tanks[1].pos - state.tanks[0].pos).length();
        let min_gap = state.tanks[0].bounds().size.x / 2.0 + state.tanks[1].bounds().size.x / 2.0;
        assert!((gap - min_gap).abs() < 1e-3);
    }
}
