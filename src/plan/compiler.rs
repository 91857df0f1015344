//! Move compilation: one whole-board plan from per-line planners.
//!
//! For each line of the active axis the compiler runs the merge planner and
//! the alignment planner, then resolves every merge source's destination to
//! its target's *post-alignment* cell — a merging tile must land where the
//! target ends up, not where it started. Per line, merge moves are emitted
//! before alignment moves, a fixed order so identical inputs always yield
//! byte-identical plans.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::align::{align_line, TileMove};
use super::line::extract_line;
use super::merge::plan_merges;
use crate::core::{Board, Direction, Tile, TileId};
use crate::error::CoreError;

/// The full plan for one whole-board move.
///
/// An empty plan means the swipe is rejected: nothing could slide or merge
/// in that direction, the board is untouched, and no spawn follows. This is
/// a normal outcome, not an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePlan {
    /// The direction the plan was computed for.
    pub direction: Direction,
    moves: Vec<TileMove>,
}

impl MovePlan {
    /// Whether the move is rejected (no tile can slide or merge).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Number of tile moves in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// The moves, in emission order.
    #[must_use]
    pub fn moves(&self) -> &[TileMove] {
        &self.moves
    }

    /// Apply every positional update to the board in one step.
    ///
    /// Convenience for headless hosts that have no animation phase; an
    /// animating host instead applies each [`TileMove`] itself as its
    /// scheduler sees fit. Fails without partial effect on a stale plan.
    pub fn apply_all(&self, board: &mut Board) -> Result<(), CoreError> {
        for mv in &self.moves {
            if board.tile(mv.id).is_none() {
                return Err(CoreError::UnknownId(mv.id));
            }
        }
        for mv in &self.moves {
            mv.apply(board)?;
        }
        Ok(())
    }
}

/// Plan one whole-board move. Pure: the board is only read.
///
/// ```
/// use slide_merge::core::{Board, Direction};
/// use slide_merge::plan::plan_move;
///
/// let mut board = Board::new(4);
/// board.insert(2, 0, 0);
/// board.insert(2, 3, 0);
///
/// let plan = plan_move(&board, Direction::Left);
/// assert_eq!(plan.len(), 1); // the x = 3 tile merges into the x = 0 tile
///
/// let rejected = plan_move(&board, Direction::Up);
/// assert!(rejected.is_empty()); // both tiles already rest on the top wall
/// ```
#[must_use]
pub fn plan_move(board: &Board, direction: Direction) -> MovePlan {
    let size = board.size();
    let mut moves = Vec::new();

    for index in 0..size {
        let line = extract_line(board, direction, index);
        let intents = plan_merges(&line);
        let consumed: SmallVec<[TileId; 4]> = intents.iter().map(|m| m.source).collect();
        let aligned = align_line(&line, &consumed, direction, size);

        for intent in &intents {
            // The target lands on its post-alignment cell; if alignment left
            // it in place, that cell is its current position.
            let resting = line
                .iter()
                .find(|t| t.id == intent.target)
                .map(Tile::pos)
                .expect("merge target comes from this line");
            let (to_x, to_y) = aligned
                .iter()
                .find(|m| m.id == intent.target)
                .map(|m| (m.to_x, m.to_y))
                .unwrap_or(resting);

            moves.push(TileMove {
                id: intent.source,
                to_x,
                to_y,
                merge_into: Some(intent.target),
            });
        }
        moves.extend(aligned);
    }

    MovePlan { direction, moves }
}

/// Whether at least one of the four directions would be accepted.
///
/// Pure helper for hosts that want stalemate detection; the core itself
/// makes no win/lose judgment.
#[must_use]
pub fn has_any_legal_move(board: &Board) -> bool {
    Direction::ALL
        .iter()
        .any(|&direction| !plan_move(board, direction).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_source_lands_on_target_final_cell() {
        // Row: 2 at x = 1, 2 at x = 3. Swiping left, the target packs to
        // x = 0 and the source must follow it there, not to x = 1.
        let mut board = Board::new(4);
        let target = board.insert(2, 1, 0);
        let source = board.insert(2, 3, 0);

        let plan = plan_move(&board, Direction::Left);
        let merge = plan.moves().iter().find(|m| m.is_merge()).unwrap();

        assert_eq!(merge.id, source.id);
        assert_eq!((merge.to_x, merge.to_y), (0, 0));
        assert_eq!(merge.merge_into, Some(target.id));
    }

    #[test]
    fn test_merge_into_stationary_target() {
        // Row: 2 at x = 0, 2 at x = 3. The target never moves; the source
        // aims at its current cell.
        let mut board = Board::new(4);
        let target = board.insert(2, 0, 0);
        let source = board.insert(2, 3, 0);

        let plan = plan_move(&board, Direction::Left);
        assert_eq!(plan.len(), 1);

        let merge = &plan.moves()[0];
        assert_eq!(merge.id, source.id);
        assert_eq!((merge.to_x, merge.to_y), (0, 0));
        assert_eq!(merge.merge_into, Some(target.id));
    }

    #[test]
    fn test_merge_moves_precede_alignment_moves_per_line() {
        // Row: 2, 2, 4 at x = 0..2. One merge, then the 4 slides.
        let mut board = Board::new(4);
        board.insert(2, 0, 0);
        board.insert(2, 1, 0);
        let four = board.insert(4, 2, 0);

        let plan = plan_move(&board, Direction::Left);
        assert_eq!(plan.len(), 2);
        assert!(plan.moves()[0].is_merge());
        assert_eq!(plan.moves()[1].id, four.id);
        assert_eq!(plan.moves()[1].to_x, 1);
    }

    #[test]
    fn test_rejected_when_nothing_can_move() {
        // Saturated 2x2 checkerboard: no empty cell, no adjacent equals.
        let mut board = Board::new(2);
        board.insert(2, 0, 0);
        board.insert(4, 1, 0);
        board.insert(4, 0, 1);
        board.insert(2, 1, 1);

        for direction in Direction::ALL {
            assert!(plan_move(&board, direction).is_empty());
        }
        assert!(!has_any_legal_move(&board));
    }

    #[test]
    fn test_all_lines_participate() {
        // Two rows, each with a slidable tile.
        let mut board = Board::new(4);
        board.insert(2, 3, 0);
        board.insert(4, 2, 1);

        let plan = plan_move(&board, Direction::Left);
        assert_eq!(plan.len(), 2);
        assert!(plan.moves().iter().all(|m| m.to_x == 0));
    }

    #[test]
    fn test_has_any_legal_move_on_sparse_board() {
        let mut board = Board::new(4);
        board.insert(2, 0, 0);
        assert!(has_any_legal_move(&board));
    }

    #[test]
    fn test_apply_all_rejects_stale_plan() {
        let mut board = Board::new(4);
        board.insert(2, 3, 0);
        let plan = plan_move(&board, Direction::Left);

        let mut other = Board::new(4);
        let err = plan.apply_all(&mut other).unwrap_err();
        assert!(matches!(err, CoreError::UnknownId(_)));
    }

    #[test]
    fn test_apply_all_moves_tiles() {
        let mut board = Board::new(4);
        let tile = board.insert(2, 3, 2);

        let plan = plan_move(&board, Direction::Left);
        plan.apply_all(&mut board).unwrap();

        assert_eq!(board.tile(tile.id).unwrap().pos(), (0, 2));
    }
}
