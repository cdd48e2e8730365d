//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one tick: input is applied, bullets
//! fly, the resolver runs, explosions animate. The host owns frame pacing
//! and calls this at [`crate::consts::TICK_RATE`].

use super::collision;
use super::state::{Direction, GameEvent, GameState, MenuOption, Mode};

/// Input sampled for one player for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    /// Held movement direction, if any (later keys win at the host level)
    pub drive: Option<Direction>,
    /// Fire button held
    pub fire: bool,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Per-tank input, player 1 first
    pub players: [PlayerInput; 2],
    /// Menu: move the highlight up
    pub menu_up: bool,
    /// Menu: move the highlight down
    pub menu_down: bool,
    /// Menu: activate the highlighted option
    pub menu_select: bool,
}

/// Advance the game state by one tick, returning events for external
/// collaborators (audio, HUD, the host loop).
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    state.time_ticks += 1;
    let mut events = Vec::new();

    match state.mode {
        Mode::Menu => menu_tick(state, input, &mut events),
        Mode::Playing => playing_tick(state, input, &mut events),
    }

    events
}

/// Menu mode: navigation and activation, gated by the input-repeat
/// cooldown so a held key steps one option at a time.
fn menu_tick(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    if !(input.menu_up || input.menu_down || input.menu_select) {
        return;
    }
    if !state.menu.ready(state.time_ticks) {
        return;
    }

    if input.menu_up {
        state.menu.select_previous();
    } else if input.menu_down {
        state.menu.select_next();
    } else if input.menu_select {
        match state.menu.selected_option() {
            MenuOption::StartGame => {
                state.mode = Mode::Playing;
                log::info!("round started");
            }
            MenuOption::Quit => events.push(GameEvent::QuitRequested),
        }
    }
    state.menu.mark(state.time_ticks);
}

/// Playing mode: input -> movement/fire, bullet advance, resolver,
/// explosion animation and pruning.
fn playing_tick(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    let now = state.time_ticks;

    for (tank, player_input) in state.tanks.iter_mut().zip(input.players.iter()) {
        if let Some(direction) = player_input.drive {
            tank.drive(direction);
        }
        if player_input.fire {
            if let Some(bullet) = tank.shoot(now) {
                events.push(GameEvent::BulletFired { player: tank.player });
                state.bullets.push(bullet);
            }
        }
    }

    for bullet in &mut state.bullets {
        bullet.advance();
    }

    collision::resolve(state, events);

    for explosion in &mut state.explosions {
        explosion.advance();
    }
    state.explosions.retain(|e| !e.is_finished());
}
