//! Merge planning: which adjacent equal tiles combine this move.
//!
//! Classic single-merge semantics: scan the sorted line leading to trailing,
//! and each tile merges at most once per move. Three equal tiles collapse
//! only the leading pair; four equal tiles produce two independent merges.
//! The planner is position-free — it decides *who* merges, never *where*
//! anything lands.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Tile, TileId};

/// A planned consolidation of two equal-valued tiles.
///
/// `source` is consumed into `target`; the target's resulting value is
/// `value * 2`. Intents are pure plan data — nothing is applied to the board
/// until commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeIntent {
    /// The tile that is consumed.
    pub source: TileId,
    /// The tile that survives and doubles.
    pub target: TileId,
    /// The shared pre-merge value of both tiles.
    pub value: u32,
}

/// Per-line intent list. A line of n tiles yields at most n / 2 merges.
pub type IntentBuf = SmallVec<[MergeIntent; 4]>;

/// Decide the merges for one sorted line.
///
/// Walks adjacent pairs (i, i+1) front to back. A tile that was already
/// consumed by an earlier pair is skipped, which is exactly what prevents
/// chain merges: in (A, A, A) the middle tile is consumed by the first pair,
/// so the trailing tile has no partner left this move.
#[must_use]
pub fn plan_merges(line: &[Tile]) -> IntentBuf {
    let mut intents = IntentBuf::new();
    if line.len() < 2 {
        return intents;
    }

    for i in 0..line.len() - 1 {
        if intents.iter().any(|m| m.source == line[i].id) {
            continue;
        }
        if line[i].value == line[i + 1].value {
            intents.push(MergeIntent {
                source: line[i + 1].id,
                target: line[i].id,
                value: line[i].value,
            });
        }
    }
    intents
}
