//! Deterministic random number generation for tile spawning.
//!
//! Planning is pure; the only randomness in the whole move transaction is the
//! post-commit spawn. Keeping that randomness in a seeded, checkpointable
//! generator makes entire games replayable: same seed, same inputs, same
//! board, byte for byte.
//!
//! ## Usage
//!
//! ```
//! use slide_merge::core::SpawnRng;
//!
//! let mut rng = SpawnRng::new(42);
//! let roll = rng.gen_bool(0.9);
//!
//! // Same seed reproduces the same sequence.
//! let mut replay = SpawnRng::new(42);
//! assert_eq!(replay.gen_bool(0.9), roll);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG driving spawn decisions.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness. The
/// generator's position can be captured and restored in O(1) via
/// [`SpawnRng::state`], so a host can checkpoint mid-game.
#[derive(Clone, Debug)]
pub struct SpawnRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SpawnRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Generate a random boolean with the given probability of `true`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Generate a random index in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a uniformly random element from a slice.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> SpawnRngState {
        SpawnRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &SpawnRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) capture regardless of how many
/// values have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}
