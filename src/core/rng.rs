//! Seeded selection of puzzle content.
//!
//! A benchmark run must pick the same Wordle target for the same day on
//! every machine, so selection goes through ChaCha8 rather than the thread
//! RNG. `for_context` derives a sub-stream from a context string, which is
//! how a date turns into a target word.
//!
//! ```
//! use puzzle_bench::core::PuzzleRng;
//!
//! let words = ["crane", "slate", "adieu", "pious"];
//! let mut monday = PuzzleRng::new(42).for_context("2024-08-05");
//! let mut again = PuzzleRng::new(42).for_context("2024-08-05");
//!
//! assert_eq!(monday.choose(&words), again.choose(&words));
//! ```

use std::hash::{Hash, Hasher};

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

/// ChaCha8 stream keyed by a seed.
#[derive(Clone, Debug)]
pub struct PuzzleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl PuzzleRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Derive the stream for `context` (a date, a puzzle id).
    ///
    /// Depends only on the seed and the context, never on how much of this
    /// stream was already consumed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Pick one element, or `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}
