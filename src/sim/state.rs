//! Game state and core simulation types
//!
//! Everything the renderer needs to draw a frame lives here, serializable
//! for debugging dumps.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::{Rect, screen_bounds};
use crate::consts::*;

/// Current mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Title menu is shown, simulation idle
    Menu,
    /// A round is in progress
    Playing,
}

/// Facing/travel direction for tanks and bullets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector in screen coordinates (y grows downward)
    #[inline]
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// A player-controlled tank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    /// Player identifier (1 or 2)
    pub player: u8,
    /// Center position
    pub pos: Vec2,
    pub direction: Direction,
    /// Current health; may go negative, the resolver owns the floor check
    pub health: i32,
    pub lives: u8,
    /// Movement speed in pixels per tick
    pub speed: f32,
    /// Tick of the most recent shot, `None` until the first
    last_shot_tick: Option<u64>,
    spawn_pos: Vec2,
    spawn_direction: Direction,
}

impl Tank {
    pub fn new(player: u8, pos: Vec2, direction: Direction) -> Self {
        Self {
            player,
            pos,
            direction,
            health: TANK_MAX_HEALTH,
            lives: TANK_LIVES,
            speed: TANK_SPEED,
            last_shot_tick: None,
            spawn_pos: pos,
            spawn_direction: direction,
        }
    }

    /// Bounding rectangle used for collision
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(TANK_SIZE.0, TANK_SIZE.1))
    }

    /// Set facing and translate one step, dropping the translation if the
    /// moved bounding box would cross a screen boundary.
    pub fn drive(&mut self, direction: Direction) {
        self.direction = direction;
        let next = self.pos + direction.delta() * self.speed;
        let moved = Rect::new(next, Vec2::new(TANK_SIZE.0, TANK_SIZE.1));
        if moved.within(&screen_bounds()) {
            self.pos = next;
        }
    }

    /// Fire a bullet from the facing edge midpoint, subject to the shoot
    /// cooldown. Returns `None` (silently dropped) while on cooldown.
    pub fn shoot(&mut self, now_tick: u64) -> Option<Bullet> {
        let cooldown = ms_to_ticks(SHOOT_COOLDOWN_MS);
        if let Some(last) = self.last_shot_tick {
            if now_tick.saturating_sub(last) < cooldown {
                return None;
            }
        }
        self.last_shot_tick = Some(now_tick);

        let bounds = self.bounds();
        let muzzle = match self.direction {
            Direction::Up => bounds.midtop(),
            Direction::Down => bounds.midbottom(),
            Direction::Left => bounds.midleft(),
            Direction::Right => bounds.midright(),
        };
        Some(Bullet::new(self.player, muzzle, self.direction))
    }

    /// Unclamped health reduction; the floor/reset logic lives in the
    /// resolver.
    pub fn reduce_health(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Current health as a fraction of max, for the collaborator-drawn
    /// health bar. Clamped to [0, 1] for display.
    pub fn health_fraction(&self) -> f32 {
        (self.health as f32 / TANK_MAX_HEALTH as f32).clamp(0.0, 1.0)
    }

    /// Restore spawn position/direction and full health, spending one life.
    pub fn reset(&mut self) {
        self.pos = self.spawn_pos;
        self.direction = self.spawn_direction;
        self.health = TANK_MAX_HEALTH;
        self.lives = self.lives.saturating_sub(1);
    }
}

/// A projectile in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    /// Player id of the firing tank; used to prevent self-damage
    pub owner: u8,
    /// Center position
    pub pos: Vec2,
    /// Travel direction, fixed at creation
    pub direction: Direction,
    /// Speed in pixels per tick
    pub speed: f32,
}

impl Bullet {
    pub fn new(owner: u8, pos: Vec2, direction: Direction) -> Self {
        Self {
            owner,
            pos,
            direction,
            speed: BULLET_SPEED,
        }
    }

    /// Bounding rectangle; the long axis follows the travel direction
    pub fn bounds(&self) -> Rect {
        let size = if self.direction.is_vertical() {
            Vec2::new(BULLET_WIDTH, BULLET_LENGTH)
        } else {
            Vec2::new(BULLET_LENGTH, BULLET_WIDTH)
        };
        Rect::new(self.pos, size)
    }

    /// Translate one tick along the travel direction
    pub fn advance(&mut self) {
        self.pos += self.direction.delta() * self.speed;
    }
}

/// Which sprite set (and size) an explosion uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionKind {
    /// Small burst at a bullet impact (15x15)
    Bullet,
    /// Tank-sized burst when a tank is destroyed
    Tank,
}

impl ExplosionKind {
    /// Frame size (width, height) for the renderer
    pub fn size(self) -> (f32, f32) {
        match self {
            ExplosionKind::Bullet => SMALL_EXPLOSION_SIZE,
            ExplosionKind::Tank => TANK_SIZE,
        }
    }
}

/// A transient explosion animation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub kind: ExplosionKind,
    /// Center position
    pub pos: Vec2,
    frame_index: u32,
    hold_counter: u32,
    finished: bool,
}

impl Explosion {
    pub fn new(kind: ExplosionKind, pos: Vec2) -> Self {
        Self {
            kind,
            pos,
            frame_index: 0,
            hold_counter: 0,
            finished: false,
        }
    }

    /// Current animation frame for the renderer
    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    /// Hold the current frame for a fixed number of ticks, then step to the
    /// next; mark finished once all frames are consumed. No-op afterwards.
    pub fn advance(&mut self) {
        if self.finished {
            return;
        }
        self.hold_counter += 1;
        if self.hold_counter >= EXPLOSION_HOLD_TICKS {
            self.frame_index += 1;
            if self.frame_index >= EXPLOSION_FRAME_COUNT {
                self.finished = true;
            }
            self.hold_counter = 0;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Options shown on the title menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuOption {
    StartGame,
    Quit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 2] = [MenuOption::StartGame, MenuOption::Quit];

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::StartGame => "Start Game",
            MenuOption::Quit => "Quit",
        }
    }
}

/// Title menu selection state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuState {
    /// Index into [`MenuOption::ALL`]
    pub selected: usize,
    last_select_tick: Option<u64>,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            last_select_tick: None,
        }
    }

    pub fn selected_option(&self) -> MenuOption {
        MenuOption::ALL[self.selected]
    }

    /// Whether the navigation cooldown has elapsed
    pub fn ready(&self, now_tick: u64) -> bool {
        let cooldown = ms_to_ticks(MENU_COOLDOWN_MS);
        match self.last_select_tick {
            Some(last) => now_tick.saturating_sub(last) >= cooldown,
            None => true,
        }
    }

    /// Record an accepted navigation/activation, arming the cooldown
    pub fn mark(&mut self, now_tick: u64) {
        self.last_select_tick = Some(now_tick);
    }

    /// Move the highlight up one option, clamped at the top
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the highlight down one option, clamped at the bottom
    pub fn select_next(&mut self) {
        if self.selected + 1 < MenuOption::ALL.len() {
            self.selected += 1;
        }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by a tick, for external collaborators (audio, HUD, host
/// loop). Not required for simulation correctness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BulletFired { player: u8 },
    BulletsCollided { pos: Vec2 },
    TankHit { player: u8 },
    TankDestroyed { player: u8 },
    /// A tank ran out of lives; the round was reset and the game returned
    /// to the menu
    RoundOver { loser: u8 },
    /// "Quit" was activated on the menu; termination is the host's call
    QuitRequested,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub mode: Mode,
    /// Simulation tick counter, drives all cooldown comparisons
    pub time_ticks: u64,
    /// Both player tanks, indexed by player order (player 1 first)
    pub tanks: [Tank; 2],
    /// Live bullets in spawn order
    pub bullets: Vec<Bullet>,
    /// Active explosion animations
    pub explosions: Vec<Explosion>,
    pub menu: MenuState,
}

impl GameState {
    /// Create a fresh game sitting at the title menu.
    ///
    /// Player 1 spawns on the east side facing left, player 2 on the west
    /// side facing right, both at mid-height.
    pub fn new() -> Self {
        let mid_y = SCREEN_HEIGHT / 2.0;
        let east_x = SCREEN_WIDTH - (SPAWN_MARGIN + TANK_SIZE.0);
        let west_x = SPAWN_MARGIN + TANK_SIZE.0;
        Self {
            mode: Mode::Menu,
            time_ticks: 0,
            tanks: [
                Tank::new(1, Vec2::new(east_x, mid_y), Direction::Left),
                Tank::new(2, Vec2::new(west_x, mid_y), Direction::Right),
            ],
            bullets: Vec::new(),
            explosions: Vec::new(),
            menu: MenuState::new(),
        }
    }

    /// Restart the round: every tank back at spawn with full health and
    /// lives, all bullets and explosions cleared.
    pub fn reset_round(&mut self) {
        for tank in &mut self.tanks {
            tank.reset();
            tank.lives = TANK_LIVES;
        }
        self.bullets.clear();
        self.explosions.clear();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
