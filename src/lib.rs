//! # slide-merge
//!
//! Deterministic core for a sliding-tile merge puzzle: one swipe is one
//! replayable transaction.
//!
//! ## Design Principles
//!
//! 1. **Plan, then commit**: planning is a pure function over a borrowed
//!    board snapshot. All mutation happens in two explicit caller-invoked
//!    phases — positional apply, then commit (merge resolution + spawn).
//!
//! 2. **Ids are identity**: coordinates change as tiles slide; the
//!    monotonically allocated `TileId` is the only stable handle across a
//!    move. A merged-away tile's id is retired forever.
//!
//! 3. **Byte-identical replays**: identical (board, direction) pairs always
//!    produce identical plans, and the only randomness — the post-commit
//!    spawn — runs off a seeded, checkpointable RNG.
//!
//! ## Protocol
//!
//! The core imposes a protocol, not a concurrency primitive. The host:
//!
//! 1. calls [`plan_move`]; an empty [`MovePlan`] means the swipe is rejected
//!    (no turn consumed, no spawn),
//! 2. applies each [`TileMove`] to its renderable state on its own schedule
//!    (instantly, or spread across an animation),
//! 3. once every move is observed complete, calls [`commit_move`] exactly
//!    once — merges resolve atomically, then one tile spawns.
//!
//! ```
//! use slide_merge::{
//!     plan_move, commit_move, spawn_initial_tiles,
//!     Board, Direction, SpawnConfig, SpawnRng,
//! };
//!
//! let mut board = Board::new(4);
//! let mut rng = SpawnRng::new(42);
//! let config = SpawnConfig::default();
//! spawn_initial_tiles(&mut board, &mut rng, &config, 2);
//!
//! let plan = plan_move(&board, Direction::Left);
//! if !plan.is_empty() {
//!     let outcome = commit_move(&mut board, &plan, &mut rng, &config).unwrap();
//!     assert!(outcome.spawned.is_some() || board.is_full());
//! }
//! ```
//!
//! ## Modules
//!
//! - `core`: tiles, directions, the board, the spawn RNG
//! - `plan`: line extraction, merge planning, alignment, move compilation
//! - `commit`: the commit phase (merge resolution + spawn trigger)
//! - `spawn`: the spawn generator
//! - `error`: the fatal-condition taxonomy

pub mod commit;
pub mod core;
pub mod error;
pub mod plan;
pub mod spawn;

// Re-export the full public surface.
pub use crate::core::{Axis, Board, BoardSnapshot, Direction, SpawnRng, SpawnRngState, Tile, TileId};

pub use crate::plan::{has_any_legal_move, plan_move, MergeIntent, MovePlan, TileMove};

pub use crate::commit::{commit_move, CommitOutcome};

pub use crate::spawn::{spawn_initial_tiles, spawn_tile, SpawnConfig};

pub use crate::error::CoreError;
