//! Tankers - a top-down two-player tank arena game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `map`: Static tile map describing the arena terrain
//! - `assets`: Sprite and texture keys for the rendering collaborator
//!
//! Rendering, input polling and asset loading live outside this crate: the
//! host samples input once per tick, calls [`sim::tick`], and draws from the
//! resulting state.

pub mod assets;
pub mod map;
pub mod sim;

pub use sim::{GameEvent, GameState, Mode, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate in ticks per second
    pub const TICK_RATE: u64 = 60;

    /// Screen dimensions in pixels (16 x 9 tiles)
    pub const SCREEN_WIDTH: f32 = 1024.0;
    pub const SCREEN_HEIGHT: f32 = 576.0;
    /// Terrain tile edge length in pixels
    pub const TILE_SIZE: f32 = 64.0;

    /// Tank bounding box (width, height)
    pub const TANK_SIZE: (f32, f32) = (48.0, 48.0);
    /// Tank movement speed in pixels per tick
    pub const TANK_SPEED: f32 = 3.0;
    pub const TANK_MAX_HEALTH: i32 = 50;
    /// Health floor below which a tank is destroyed and reset
    pub const TANK_DESTROYED_HEALTH: i32 = 10;
    /// Lives per round
    pub const TANK_LIVES: u8 = 3;
    /// Minimum time between shots (milliseconds)
    pub const SHOOT_COOLDOWN_MS: u64 = 250;
    /// Horizontal gap between a spawn point and its screen edge
    pub const SPAWN_MARGIN: f32 = 50.0;

    /// Bullet speed in pixels per tick
    pub const BULLET_SPEED: f32 = 5.0;
    /// Health removed per bullet hit
    pub const BULLET_DAMAGE: i32 = 10;
    /// Bullet extent along its travel axis
    pub const BULLET_LENGTH: f32 = 16.0;
    /// Bullet extent across its travel axis
    pub const BULLET_WIDTH: f32 = 8.0;

    /// Frames in an explosion animation
    pub const EXPLOSION_FRAME_COUNT: u32 = 5;
    /// Ticks each explosion frame is held before advancing
    pub const EXPLOSION_HOLD_TICKS: u32 = 8;
    /// Bullet-impact explosion size (width, height)
    pub const SMALL_EXPLOSION_SIZE: (f32, f32) = (15.0, 15.0);

    /// Minimum time between menu selection changes (milliseconds)
    pub const MENU_COOLDOWN_MS: u64 = 150;

    /// Convert a wall-clock duration to whole simulation ticks
    pub const fn ms_to_ticks(ms: u64) -> u64 {
        ms * TICK_RATE / 1000
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_ms_to_ticks_at_60hz() {
            assert_eq!(ms_to_ticks(SHOOT_COOLDOWN_MS), 15);
            assert_eq!(ms_to_ticks(MENU_COOLDOWN_MS), 9);
            assert_eq!(ms_to_ticks(1000), TICK_RATE);
        }

        #[test]
        fn test_screen_matches_tile_grid() {
            assert_eq!(SCREEN_WIDTH, 16.0 * TILE_SIZE);
            assert_eq!(SCREEN_HEIGHT, 9.0 * TILE_SIZE);
        }
    }
}
