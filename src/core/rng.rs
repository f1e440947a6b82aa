//! Deterministic random number generation for grid generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical grids
//! - **Context streams**: Independent sequences per stage, so a stage's grid
//!   depends only on the game seed and the stage label
//!
//! ## Usage
//!
//! ```
//! use rust_wordsearch::core::GameRng;
//!
//! let rng = GameRng::new(42);
//!
//! // Each stage draws from its own stream
//! let mut stage_one = rng.for_context("stage-1");
//! let mut stage_two = rng.for_context("stage-2");
//! assert_ne!(
//!     (0..8).map(|_| stage_one.gen_range_usize(0..1000)).collect::<Vec<_>>(),
//!     (0..8).map(|_| stage_two.gen_range_usize(0..1000)).collect::<Vec<_>>(),
//! );
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG for puzzle generation.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
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

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// regardless of how much of this RNG has been consumed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self::new(context_seed)
    }

    /// Generate a random usize in the given range.
    ///
    /// Panics on an empty range, like `rand::Rng::gen_range`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
