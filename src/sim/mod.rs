//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to [`tick`] per simulation step)
//! - Stable iteration order (tanks by player, bullets by spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{resolve, separate_tanks};
pub use rect::{Rect, screen_bounds};
pub use state::{
    Bullet, Direction, Explosion, ExplosionKind, GameEvent, GameState, MenuOption, MenuState, Mode,
    Tank,
};
pub use tick::{PlayerInput, TickInput, tick};
