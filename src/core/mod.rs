//! Core types: tiles, directions, the board, and the spawn RNG.
//!
//! Everything here is geometry- and identity-level; the move semantics live
//! in [`crate::plan`] and the mutation phases in [`crate::commit`] and
//! [`crate::spawn`].

pub mod board;
pub mod direction;
pub mod rng;
pub mod tile;

pub use board::{Board, BoardSnapshot};
pub use direction::{Axis, Direction};
pub use rng::{SpawnRng, SpawnRngState};
pub use tile::{Tile, TileId};
