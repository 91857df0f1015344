//! Alignment planning: packing surviving tiles against the leading edge.
//!
//! After merged-away tiles are excluded, the survivors of a line pack flush
//! against the wall the swipe points toward: the tile at rank r lands at
//! moving-axis index r (up/left) or size - 1 - r (down/right). Moves whose
//! destination equals the current position are suppressed, so an empty plan
//! exactly characterizes "nothing could slide or merge".

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Axis, Board, Direction, Tile, TileId};
use crate::error::CoreError;

/// One positional instruction for the host to execute.
///
/// This is the authoritative output of planning: slide the tile to
/// (`to_x`, `to_y`), and if `merge_into` is set, the tile is a merge source
/// that commit will fold into that target. Plans are created fresh per move,
/// consumed immediately, and never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMove {
    /// The tile being moved.
    pub id: TileId,
    /// Destination column.
    pub to_x: usize,
    /// Destination row.
    pub to_y: usize,
    /// Set when this tile merges into another at the destination.
    pub merge_into: Option<TileId>,
}

impl TileMove {
    /// Whether this move consumes the tile into a merge target.
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.merge_into.is_some()
    }

    /// Apply the positional update to the board (phase 1).
    ///
    /// Fails with [`CoreError::UnknownId`] if the plan was computed against a
    /// different board snapshot.
    pub fn apply(&self, board: &mut Board) -> Result<(), CoreError> {
        board.set_pos(self.id, self.to_x, self.to_y)
    }
}

/// Per-line move list.
pub type MoveBuf = SmallVec<[TileMove; 8]>;

/// Compute the packed destinations for one line.
///
/// `line` is the sorted line from the extractor; `consumed` lists the tiles
/// merged away this move (the intent sources), which take no rank. None of
/// the emitted moves are merges — merge sources get their destination from
/// the compiler, which must aim them at the target's *post-alignment* cell.
#[must_use]
pub fn align_line(
    line: &[Tile],
    consumed: &[TileId],
    direction: Direction,
    size: usize,
) -> MoveBuf {
    let mut moves = MoveBuf::new();

    let survivors = line.iter().filter(|tile| !consumed.contains(&tile.id));
    for (rank, tile) in survivors.enumerate() {
        let dest = if direction.is_leading() {
            rank
        } else {
            size - 1 - rank
        };
        let (to_x, to_y) = match direction.axis() {
            Axis::Horizontal => (dest, tile.y),
            Axis::Vertical => (tile.x, dest),
        };

        if (to_x, to_y) != tile.pos() {
            moves.push(TileMove {
                id: tile.id,
                to_x,
                to_y,
                merge_into: None,
            });
        }
    }
    moves
}
