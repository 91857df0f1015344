//! Error taxonomy for the move transaction.
//!
//! Only state corruption is an error here. A rejected move (empty plan) and a
//! full board at spawn time are normal outcomes and are represented as an
//! empty [`MovePlan`](crate::plan::MovePlan) and `None` respectively, never
//! as `Err`.
//!
//! Every fatal condition aborts the transaction before any mutation: a
//! commit that fails leaves the board exactly as it was.

use crate::core::TileId;

/// Fatal conditions detected while validating a board or a plan.
///
/// These indicate a bug in the host (a plan applied against a different board
/// snapshot, or externally constructed tiles with corrupt coordinates), not a
/// recoverable game situation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// A move or merge references a tile id not present on the board.
    ///
    /// Plans must only ever be applied to the exact board snapshot they were
    /// computed from.
    UnknownId(TileId),

    /// A tile reports coordinates outside `[0, size)`.
    InvalidCoordinate {
        id: TileId,
        x: usize,
        y: usize,
        size: usize,
    },

    /// Two tiles occupy the same cell in an at-rest board snapshot.
    OverlappingTiles {
        a: TileId,
        b: TileId,
        x: usize,
        y: usize,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::UnknownId(id) => {
                write!(f, "{id} is not on the board (stale plan?)")
            }
            CoreError::InvalidCoordinate { id, x, y, size } => {
                write!(f, "{id} has coordinates ({x}, {y}) outside a {size}x{size} board")
            }
            CoreError::OverlappingTiles { a, b, x, y } => {
                write!(f, "{a} and {b} both occupy cell ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for CoreError {}
