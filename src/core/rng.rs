//! Deterministic random number generation for board setup.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Explicit**: The engine owns one instance and passes it into board
//!   generation; nothing draws from an ambient source
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use gold_rush::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng1.gen_range_usize(0..900), rng2.gen_range_usize(0..900));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::ops::{Range, RangeInclusive};

/// Seedable RNG owned by the engine.
///
/// Uses ChaCha8 for speed with a stable, platform-independent stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a freshly drawn OS seed.
    ///
    /// The seed is kept so the game can be replayed with `GameRng::new`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the half-open range.
    pub fn gen_range_usize(&mut self, range: Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random amount in the inclusive range.
    pub fn gen_amount(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
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
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_gen_amount_inclusive_bounds() {
        let mut rng = GameRng::new(7);
        let mut seen_min = false;
        let mut seen_max = false;

        for _ in 0..2000 {
            let amount = rng.gen_amount(10..=12);
            assert!((10..=12).contains(&amount));
            seen_min |= amount == 10;
            seen_max |= amount == 12;
        }

        assert!(seen_min && seen_max);
        assert_eq!(rng.gen_amount(5..=5), 5);
    }

    #[test]
    fn test_entropy_seed_is_replayable() {
        let mut rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());

        for _ in 0..10 {
            assert_eq!(rng.gen_range_usize(0..900), replay.gen_range_usize(0..900));
        }
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.gen_range_usize(0..1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_range_usize(0..1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
