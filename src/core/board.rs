//! The board: tile storage, occupancy lookup, and id allocation.
//!
//! The board is the single mutable source of truth, owned by the caller. The
//! planning pipeline only ever borrows it immutably; all mutation goes
//! through the explicit apply/commit phases.
//!
//! Coordinate bounds are a hard invariant. A tile outside `[0, size)` means
//! state was corrupted upstream, so lookups and insertion assert rather than
//! degrade.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileId};
use crate::error::CoreError;

/// A square grid of numbered tiles.
///
/// Storage is keyed by [`TileId`] because ids are the only stable identity
/// across a move; positional lookups scan, which is O(size²) worst case and
/// irrelevant at the board sizes this models.
///
/// Serializes through [`BoardSnapshot`]: a sorted tile list plus the id
/// allocator, so snapshots are stable and re-validated on load.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(into = "BoardSnapshot", try_from = "BoardSnapshot")]
pub struct Board {
    size: usize,
    tiles: FxHashMap<TileId, Tile>,
    next_id: u32,
}

/// Serialized form of a [`Board`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardSnapshot {
    size: usize,
    tiles: Vec<Tile>,
    next_id: u32,
}

impl From<Board> for BoardSnapshot {
    fn from(board: Board) -> Self {
        let mut tiles: Vec<Tile> = board.tiles.into_values().collect();
        tiles.sort_unstable_by_key(|t| t.id);
        Self {
            size: board.size,
            tiles,
            next_id: board.next_id,
        }
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = CoreError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, CoreError> {
        let mut board = Board::from_tiles(snapshot.size, snapshot.tiles)?;
        board.next_id = board.next_id.max(snapshot.next_id);
        Ok(board)
    }
}

impl Board {
    /// The classic board size.
    pub const DEFAULT_SIZE: usize = 4;

    /// Create an empty board of the given size.
    ///
    /// Panics if `size < 2`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= 2, "board size must be at least 2");
        Self {
            size,
            tiles: FxHashMap::default(),
            next_id: 0,
        }
    }

    /// Build a board from an externally supplied at-rest snapshot.
    ///
    /// Validates the at-rest invariants: every coordinate in range, at most
    /// one tile per cell. The id allocator resumes above the highest id seen
    /// so later spawns never collide.
    pub fn from_tiles(
        size: usize,
        tiles: impl IntoIterator<Item = Tile>,
    ) -> Result<Self, CoreError> {
        assert!(size >= 2, "board size must be at least 2");

        let mut map = FxHashMap::default();
        let mut by_cell: FxHashMap<(usize, usize), TileId> = FxHashMap::default();
        let mut next_id = 0;

        for tile in tiles {
            if tile.x >= size || tile.y >= size {
                return Err(CoreError::InvalidCoordinate {
                    id: tile.id,
                    x: tile.x,
                    y: tile.y,
                    size,
                });
            }
            if let Some(&other) = by_cell.get(&tile.pos()) {
                return Err(CoreError::OverlappingTiles {
                    a: other,
                    b: tile.id,
                    x: tile.x,
                    y: tile.y,
                });
            }
            by_cell.insert(tile.pos(), tile.id);
            next_id = next_id.max(tile.id.raw() + 1);
            map.insert(tile.id, tile);
        }

        Ok(Self {
            size,
            tiles: map,
            next_id,
        })
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of live tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the board has no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tiles.len() == self.size * self.size
    }

    /// The tile at (x, y), if any.
    ///
    /// Panics on out-of-range coordinates; see the module docs.
    #[must_use]
    pub fn cell_at(&self, x: usize, y: usize) -> Option<&Tile> {
        self.assert_in_bounds(x, y);
        self.tiles.values().find(|t| t.x == x && t.y == y)
    }

    /// Whether the cell at (x, y) holds a tile.
    #[must_use]
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cell_at(x, y).is_some()
    }

    /// Iterate over all live tiles, in no particular order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Look up a tile by id.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// All unoccupied cells, in row-major order.
    ///
    /// The fixed order matters: the spawn generator draws a uniform index
    /// into this list, so identical (board, RNG state) pairs always pick the
    /// same cell.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut occupied = vec![false; self.size * self.size];
        for tile in self.tiles.values() {
            occupied[tile.y * self.size + tile.x] = true;
        }

        let mut cells = Vec::with_capacity(self.size * self.size - self.tiles.len());
        for y in 0..self.size {
            for x in 0..self.size {
                if !occupied[y * self.size + x] {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    /// Place a new tile, allocating the next id.
    ///
    /// Panics on out-of-range coordinates or an occupied cell; both indicate
    /// a caller bug (the spawn generator only ever targets empty cells).
    pub fn insert(&mut self, value: u32, x: usize, y: usize) -> Tile {
        self.assert_in_bounds(x, y);
        assert!(
            !self.is_occupied(x, y),
            "cell ({x}, {y}) is already occupied"
        );

        let tile = Tile::new(TileId(self.next_id), value, x, y);
        self.next_id += 1;
        self.tiles.insert(tile.id, tile);
        tile
    }

    /// Move a tile to a new position (phase-1 positional update).
    ///
    /// Does not enforce cell vacancy: while a move is being applied, a merge
    /// source legitimately shares its destination with its target until
    /// commit removes it.
    pub fn set_pos(&mut self, id: TileId, x: usize, y: usize) -> Result<(), CoreError> {
        self.assert_in_bounds(x, y);
        let tile = self.tiles.get_mut(&id).ok_or(CoreError::UnknownId(id))?;
        tile.x = x;
        tile.y = y;
        Ok(())
    }

    /// Remove a tile, retiring its id.
    pub(crate) fn remove(&mut self, id: TileId) -> Option<Tile> {
        self.tiles.remove(&id)
    }

    pub(crate) fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(&id)
    }

    fn assert_in_bounds(&self, x: usize, y: usize) {
        assert!(
            x < self.size && y < self.size,
            "coordinates ({x}, {y}) outside a {0}x{0} board",
            self.size
        );
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_allocates_monotonic_ids() {
        let mut board = Board::new(4);
        let a = board.insert(2, 0, 0);
        let b = board.insert(4, 1, 0);
        let c = board.insert(2, 2, 0);

        assert_eq!(a.id, TileId(0));
        assert_eq!(b.id, TileId(1));
        assert_eq!(c.id, TileId(2));
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut board = Board::new(4);
        let a = board.insert(2, 0, 0);
        board.remove(a.id);

        let b = board.insert(2, 0, 0);
        assert_eq!(b.id, TileId(1));
    }

    #[test]
    fn test_cell_lookup() {
        let mut board = Board::new(4);
        let tile = board.insert(8, 2, 3);

        assert_eq!(board.cell_at(2, 3).map(|t| t.id), Some(tile.id));
        assert!(board.is_occupied(2, 3));
        assert!(!board.is_occupied(0, 0));
        assert_eq!(board.cell_at(0, 0), None);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_range_lookup_panics() {
        let board = Board::new(4);
        let _ = board.cell_at(4, 0);
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_double_insert_panics() {
        let mut board = Board::new(4);
        board.insert(2, 1, 1);
        board.insert(2, 1, 1);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = Board::new(2);
        board.insert(2, 0, 0);

        assert_eq!(board.empty_cells(), vec![(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(2);
        for y in 0..2 {
            for x in 0..2 {
                assert!(!board.is_full());
                board.insert(2, x, y);
            }
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn test_from_tiles_resumes_id_allocation() {
        let tiles = vec![
            Tile::new(TileId(3), 2, 0, 0),
            Tile::new(TileId(7), 4, 1, 0),
        ];
        let mut board = Board::from_tiles(4, tiles).unwrap();

        let spawned = board.insert(2, 2, 0);
        assert_eq!(spawned.id, TileId(8));
    }

    #[test]
    fn test_from_tiles_rejects_out_of_range() {
        let tiles = vec![Tile::new(TileId(0), 2, 4, 0)];
        let err = Board::from_tiles(4, tiles).unwrap_err();

        assert_eq!(
            err,
            CoreError::InvalidCoordinate {
                id: TileId(0),
                x: 4,
                y: 0,
                size: 4
            }
        );
    }

    #[test]
    fn test_from_tiles_rejects_overlap() {
        let tiles = vec![
            Tile::new(TileId(0), 2, 1, 1),
            Tile::new(TileId(1), 4, 1, 1),
        ];
        let err = Board::from_tiles(4, tiles).unwrap_err();

        assert!(matches!(err, CoreError::OverlappingTiles { x: 1, y: 1, .. }));
    }

    #[test]
    fn test_set_pos_unknown_id() {
        let mut board = Board::new(4);
        let err = board.set_pos(TileId(5), 0, 0).unwrap_err();
        assert_eq!(err, CoreError::UnknownId(TileId(5)));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut board = Board::new(4);
        board.insert(2, 0, 0);
        board.insert(4, 3, 3);

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.size(), 4);
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.cell_at(3, 3).map(|t| t.value), Some(4));
    }
}
