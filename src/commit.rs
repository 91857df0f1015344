//! The commit phase: finalize merges, then spawn.
//!
//! Planning and committing are deliberately split. The host owns visual
//! settling — it applies each [`TileMove`](crate::plan::TileMove) on its own
//! schedule (instantly or across an animation) — and only once every move is
//! observed complete does it call [`commit_move`] exactly once. Commit then
//! owns logical settling: all merges resolve atomically before the spawn
//! runs, because spawn placement depends on final occupancy.

use serde::{Deserialize, Serialize};

use crate::core::{Board, SpawnRng, Tile};
use crate::error::CoreError;
use crate::plan::MovePlan;
use crate::spawn::{spawn_tile, SpawnConfig};

/// What a commit did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommitOutcome {
    /// Number of merges resolved.
    pub merges: usize,
    /// The tile spawned after the merges, or `None` if the board was full.
    pub spawned: Option<Tile>,
}

/// Finalize an accepted move: merges first, then one spawn.
///
/// Every id in the plan is validated against the board before anything
/// mutates, so a stale plan (computed against a different snapshot) aborts
/// the whole transaction with [`CoreError::UnknownId`] and leaves the board
/// untouched. For every merge move the target's value doubles and the source
/// is removed for good; only after all merges does the spawn generator run.
///
/// Positional updates are re-applied here as well, so a headless host may
/// skip the per-move apply phase entirely — re-applying an already-applied
/// destination is a no-op.
///
/// Panics if called with an empty (rejected) plan: rejected moves consume no
/// turn and must not reach commit.
pub fn commit_move(
    board: &mut Board,
    plan: &MovePlan,
    rng: &mut SpawnRng,
    config: &SpawnConfig,
) -> Result<CommitOutcome, CoreError> {
    assert!(
        !plan.is_empty(),
        "commit_move called with a rejected (empty) plan"
    );

    // Validate the whole plan before touching the board.
    for mv in plan.moves() {
        if board.tile(mv.id).is_none() {
            return Err(CoreError::UnknownId(mv.id));
        }
        if let Some(target) = mv.merge_into {
            if board.tile(target).is_none() {
                return Err(CoreError::UnknownId(target));
            }
        }
    }

    for mv in plan.moves() {
        mv.apply(board)?;
    }

    let mut merges = 0;
    for mv in plan.moves() {
        if let Some(target) = mv.merge_into {
            if let Some(tile) = board.tile_mut(target) {
                tile.value *= 2;
            }
            board.remove(mv.id);
            merges += 1;
        }
    }

    let spawned = spawn_tile(board, rng, config);
    Ok(CommitOutcome { merges, spawned })
}
