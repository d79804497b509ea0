//! Randomness capability used by prime search, key generation and signing.
//!
//! The algorithms only need "a source of integers in a range", so the source
//! is injected everywhere it is used. The default implementation is fast and
//! statistically uniform but predictable; it exists so the scheme is runnable
//! for demonstration, not for production key material. A hardened build can
//! substitute its own `RandomSource` without touching any algorithm.

use rand::{rngs::StdRng, RngCore, SeedableRng};

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns the next raw value from the source.
    fn next(&mut self) -> u128;
}

/// Default source backed by [`StdRng`].
///
/// Each draw produces 64 bits widened to `u128`, so any product of two
/// drawn values (or values reduced from them) stays inside 128 bits.
#[derive(Debug)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Creates a source, seeded for reproducibility when `seed` is `Some`,
    /// otherwise from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        StdRandom { rng }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        StdRandom::new(None)
    }
}

impl RandomSource for StdRandom {
    fn next(&mut self) -> u128 {
        self.rng.next_u64() as u128
    }
}
