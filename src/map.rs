//! Static tile map describing the arena terrain
//!
//! Tiles are purely visual: the simulation clamps against the screen
//! rectangle, never against terrain. The map is built once before play and
//! read-only afterwards; the renderer walks it every frame through
//! [`TileMap::iter`].
//!
//! Tile ids 0-11:
//! 0 grass, 1 horizontal road, 2 vertical road, 3-6 road corners
//! (LL/LR/UL/UR), 7 road crossing, 8 round road crossing, 9 road transition
//! west, 10 grass transition east, 11 sand.

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TILE_SIZE};

/// Terrain tile identifier (0-11)
pub type TileId = u8;

/// Highest valid tile id
pub const MAX_TILE_ID: TileId = 11;

/// A 2D grid of tile ids, row-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileMap {
    tiles: Vec<Vec<TileId>>,
}

impl TileMap {
    /// All-grass map sized to the screen
    pub fn empty() -> Self {
        let rows = (SCREEN_HEIGHT / TILE_SIZE) as usize;
        let cols = (SCREEN_WIDTH / TILE_SIZE) as usize;
        Self {
            tiles: vec![vec![0; cols]; rows],
        }
    }

    /// The shipped two-player arena: a sand staging area on the west edge
    /// and a road network winding through grass on the east.
    #[rustfmt::skip]
    pub fn arena_1() -> Self {
        Self {
            tiles: vec![
                vec![11, 11, 11, 11, 11, 10, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                vec![11, 11, 11, 11, 11, 10, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                vec![11, 11, 11, 11, 11, 11, 9, 1, 1, 1, 1, 1, 1, 3, 0, 0],
                vec![11, 11, 11, 11, 11, 10, 0, 2, 0, 0, 2, 0, 0, 2, 0, 0],
                vec![11, 11, 11, 11, 11, 10, 0, 2, 0, 0, 2, 0, 0, 2, 0, 0],
                vec![11, 11, 11, 11, 11, 10, 0, 1, 1, 1, 7, 1, 1, 7, 1, 1],
                vec![11, 11, 11, 11, 11, 10, 0, 2, 0, 0, 2, 0, 0, 2, 0, 0],
                vec![11, 11, 11, 11, 11, 10, 0, 6, 1, 1, 1, 1, 1, 5, 0, 0],
                vec![11, 11, 11, 11, 11, 10, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            ],
        }
    }

    /// Parse a map from a JSON level file (an array of rows of tile ids)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    pub fn cols(&self) -> usize {
        self.tiles.first().map_or(0, Vec::len)
    }

    /// Tile id at (col, row), `None` outside the grid
    pub fn get(&self, col: usize, row: usize) -> Option<TileId> {
        self.tiles.get(row)?.get(col).copied()
    }

    /// Iterate `(col, row, tile_id)` in render order (top-left to
    /// bottom-right)
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, TileId)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .flat_map(|(row, cols)| cols.iter().enumerate().map(move |(col, &id)| (col, row, id)))
    }
}

impl Default for TileMap {
    fn default() -> Self {
        Self::empty()
    }
}
