//! Tankers entry point
//!
//! Runs a headless demo round: seeded random inputs drive both tanks so the
//! simulation can be exercised and profiled without a renderer attached.
//! The real game embeds the library behind a windowing/input host instead.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use tankers::consts::TICK_RATE;
use tankers::map::TileMap;
use tankers::sim::{Direction, GameEvent, GameState, Mode, PlayerInput, TickInput, tick};

/// Demo length in simulated seconds
const DEMO_SECONDS: u64 = 120;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);
    log::info!("Tankers headless demo starting (seed {seed})...");

    let map = TileMap::arena_1();
    log::info!("arena: {}x{} tiles", map.cols(), map.rows());

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = GameState::new();

    // Leave the menu by activating "Start Game"
    let start = TickInput {
        menu_select: true,
        ..Default::default()
    };
    tick(&mut state, &start);

    let mut shots = 0u64;
    let mut hits = 0u64;
    let mut rounds = 0u64;

    for _ in 0..TICK_RATE * DEMO_SECONDS {
        let input = if state.mode == Mode::Menu {
            // A round just ended; start the next one
            start
        } else {
            TickInput {
                players: [random_player_input(&mut rng), random_player_input(&mut rng)],
                ..Default::default()
            }
        };

        for event in tick(&mut state, &input) {
            match event {
                GameEvent::BulletFired { .. } => shots += 1,
                GameEvent::TankHit { .. } => hits += 1,
                GameEvent::RoundOver { loser } => {
                    rounds += 1;
                    log::info!("round {rounds} over, tank {loser} lost");
                }
                _ => {}
            }
        }
    }

    log::info!(
        "demo finished after {} ticks: {shots} shots, {hits} hits, {rounds} rounds",
        state.time_ticks
    );
    if log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => log::debug!("final state:\n{json}"),
            Err(err) => log::warn!("failed to serialize final state: {err}"),
        }
    }
}

/// Random but deterministic per-tick input: mostly driving, occasional fire
fn random_player_input(rng: &mut Pcg32) -> PlayerInput {
    let drive = match rng.random_range(0..6u8) {
        0 => Some(Direction::Up),
        1 => Some(Direction::Down),
        2 => Some(Direction::Left),
        3 => Some(Direction::Right),
        _ => None,
    };
    PlayerInput {
        drive,
        fire: rng.random_bool(0.15),
    }
}
