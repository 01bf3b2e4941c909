//! Seeded random streams.
//!
//! Every source of randomness in the crate (deck shuffles, mutation coin
//! flips, parent sampling) takes an explicit generator. The helpers here
//! build those generators so a fixed seed reproduces a whole run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a generator from a fixed seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from OS entropy when `None`.
pub fn rng_from_option(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Draws `count` child seeds from `rng`.
///
/// Each child seed drives an independent stream, so work units can run in any
/// order (or concurrently) and still reproduce the sequential result.
pub fn child_seeds<R: Rng>(rng: &mut R, count: usize) -> Vec<u64> {
    (0..count).map(|_| rng.random()).collect()
}
