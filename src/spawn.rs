//! Tile spawning: one random tile on an empty cell.
//!
//! Spawning is the only random step in the move transaction. The cell is
//! chosen uniformly among the currently-empty cells (enumerated in row-major
//! order, so the choice is a single deterministic draw rather than a
//! rejection-sampling loop), and the value is 2 with probability
//! [`SpawnConfig::two_probability`], else 4.

use serde::{Deserialize, Serialize};

use crate::core::{Board, SpawnRng, Tile};

/// Spawn tuning knobs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// Probability that a spawned tile has value 2 (else 4).
    pub two_probability: f64,
}

impl SpawnConfig {
    /// The classic probability of spawning a 2.
    pub const DEFAULT_TWO_PROBABILITY: f64 = 0.9;
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            two_probability: Self::DEFAULT_TWO_PROBABILITY,
        }
    }
}

/// Spawn one tile on a uniformly random empty cell.
///
/// Returns the spawned tile, or `None` if the board is full — an expected
/// terminal condition, not a fault. The caller detects game over separately
/// (see [`has_any_legal_move`](crate::plan::has_any_legal_move)).
pub fn spawn_tile(board: &mut Board, rng: &mut SpawnRng, config: &SpawnConfig) -> Option<Tile> {
    let empty = board.empty_cells();
    let &(x, y) = rng.choose(&empty)?;
    let value = if rng.gen_bool(config.two_probability) {
        2
    } else {
        4
    };
    Some(board.insert(value, x, y))
}

/// Spawn `count` tiles with the same rule, used at game start.
///
/// Classic games start with 2 tiles before the first input. Stops early
/// if the board fills up.
pub fn spawn_initial_tiles(
    board: &mut Board,
    rng: &mut SpawnRng,
    config: &SpawnConfig,
    count: usize,
) {
    for _ in 0..count {
        if spawn_tile(board, rng, config).is_none() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_fills_an_empty_cell() {
        let mut board = Board::new(4);
        let mut rng = SpawnRng::new(7);

        let tile = spawn_tile(&mut board, &mut rng, &SpawnConfig::default()).unwrap();

        assert_eq!(board.len(), 1);
        assert!(tile.value == 2 || tile.value == 4);
        assert_eq!(board.cell_at(tile.x, tile.y).map(|t| t.id), Some(tile.id));
    }

    #[test]
    fn test_spawn_on_full_board_is_noop() {
        let mut board = Board::new(2);
        for y in 0..2 {
            for x in 0..2 {
                board.insert(2, x, y);
            }
        }
        let mut rng = SpawnRng::new(7);

        assert!(spawn_tile(&mut board, &mut rng, &SpawnConfig::default()).is_none());
        assert_eq!(board.len(), 4);
    }

    #[test]
    fn test_spawn_targets_the_only_empty_cell() {
        let mut board = Board::new(2);
        board.insert(2, 0, 0);
        board.insert(4, 1, 0);
        board.insert(8, 0, 1);
        let mut rng = SpawnRng::new(7);

        let tile = spawn_tile(&mut board, &mut rng, &SpawnConfig::default()).unwrap();
        assert_eq!(tile.pos(), (1, 1));
    }

    #[test]
    fn test_spawn_is_deterministic_for_same_state() {
        let config = SpawnConfig::default();

        let mut board1 = Board::new(4);
        let mut rng1 = SpawnRng::new(99);
        let mut board2 = Board::new(4);
        let mut rng2 = SpawnRng::new(99);

        for _ in 0..10 {
            let a = spawn_tile(&mut board1, &mut rng1, &config).unwrap();
            let b = spawn_tile(&mut board2, &mut rng2, &config).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_two_probability_extremes() {
        let mut rng = SpawnRng::new(1);

        let mut board = Board::new(4);
        let always_two = SpawnConfig {
            two_probability: 1.0,
        };
        for _ in 0..8 {
            let tile = spawn_tile(&mut board, &mut rng, &always_two).unwrap();
            assert_eq!(tile.value, 2);
        }

        let mut board = Board::new(4);
        let never_two = SpawnConfig {
            two_probability: 0.0,
        };
        for _ in 0..8 {
            let tile = spawn_tile(&mut board, &mut rng, &never_two).unwrap();
            assert_eq!(tile.value, 4);
        }
    }

    #[test]
    fn test_initial_spawn_count() {
        let mut board = Board::new(4);
        let mut rng = SpawnRng::new(3);

        spawn_initial_tiles(&mut board, &mut rng, &SpawnConfig::default(), 2);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_initial_spawn_stops_when_full() {
        let mut board = Board::new(2);
        let mut rng = SpawnRng::new(3);

        spawn_initial_tiles(&mut board, &mut rng, &SpawnConfig::default(), 10);
        assert_eq!(board.len(), 4);
    }
}
