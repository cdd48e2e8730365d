//! Sprite and texture keys for the rendering collaborator
//!
//! The simulation never holds image data. It hands out stable lookup keys
//! that the renderer resolves against its loaded surfaces; a key that fails
//! to resolve is a fatal startup error on the renderer's side.

use crate::map::TileId;
use crate::sim::state::Direction;

/// Tank sprite filename for a facing direction
pub fn tank_sprite(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "blue_up.png",
        Direction::Down => "blue_down.png",
        Direction::Left => "blue_left.png",
        Direction::Right => "blue_right.png",
    }
}

/// Bullet sprite filename for a travel direction
pub fn bullet_sprite(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "shotThin_up.png",
        Direction::Down => "shotThin_down.png",
        Direction::Left => "shotThin_left.png",
        Direction::Right => "shotThin_right.png",
    }
}

/// Explosion animation frame filename; frames are shared between the small
/// and tank-sized sets, the renderer scales by [`ExplosionKind::size`].
///
/// [`ExplosionKind::size`]: crate::sim::state::ExplosionKind::size
pub fn explosion_frame(index: u32) -> String {
    format!("explosion{}.png", index + 1)
}

/// Terrain texture filename for a tile id; unknown ids fall back to grass
pub fn tile_texture(id: TileId) -> &'static str {
    match id {
        0 => "tileGrass1.png",
        1 => "tileGrass_roadEast.png",
        2 => "tileGrass_roadNorth.png",
        3 => "tileGrass_roadCornerLL.png",
        4 => "tileGrass_roadCornerLR.png",
        5 => "tileGrass_roadCornerUL.png",
        6 => "tileGrass_roadCornerUR.png",
        7 => "tileGrass_roadCrossing.png",
        8 => "tileGrass_roadCrossingRound.png",
        9 => "tileGrass_roadTransitionW.png",
        10 => "tileGrass_transitionW.png",
        11 => "tileSand1.png",
        _ => "tileGrass1.png",
    }
}
