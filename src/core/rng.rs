//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for different purposes,
//!   so cosmetic draws (attack flavor text) never shift mode selection
//!
//! ```
//! use word_combat::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut modes = rng.for_context("modes");
//! let mut flavor = rng.for_context("flavor");
//!
//! // Same context from the same seed replays the same sequence
//! let mut modes_again = GameRng::new(42).for_context("modes");
//! assert_eq!(modes.gen_range_usize(0..7), modes_again.gen_range_usize(0..7));
//! # let _ = flavor.gen_range_usize(0..5);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG injected into the match engine and presentation layer.
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
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a random usize in the given range.
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
