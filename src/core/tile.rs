//! Tile identification and the tile value type.
//!
//! Every tile on the board has a unique `TileId`, allocated monotonically by
//! the [`Board`](super::Board) at spawn time and never reused. Coordinates
//! change as tiles slide; the id is the only stable identity across a move.
//! A tile that is merged away has its id retired permanently.
//!
//! ## Usage
//!
//! ```
//! use slide_merge::core::{Tile, TileId};
//!
//! let tile = Tile::new(TileId(0), 2, 1, 3);
//! assert_eq!(tile.value, 2);
//! assert_eq!((tile.x, tile.y), (1, 3));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a tile.
///
/// Ids are assigned in increasing order as tiles spawn and are never reused,
/// so they are stable across positional updates within a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile id from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A numbered tile at rest on the board.
///
/// `value` is a positive power of two. At rest, at most one tile occupies any
/// (x, y); during move computation two tiles may transiently share a
/// destination until the merge consumes one of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Stable identity across moves.
    pub id: TileId,
    /// Face value (2, 4, 8, ...).
    pub value: u32,
    /// Column, in `[0, size)`.
    pub x: usize,
    /// Row, in `[0, size)`.
    pub y: usize,
}

impl Tile {
    /// Create a tile.
    #[must_use]
    pub const fn new(id: TileId, value: u32, x: usize, y: usize) -> Self {
        Self { id, value, x, y }
    }

    /// The tile's position as an (x, y) pair.
    #[must_use]
    pub const fn pos(&self) -> (usize, usize) {
        (self.x, self.y)
    }
}
