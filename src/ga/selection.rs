//! Parent selection.
//!
//! Fitness-proportionate (roulette wheel) sampling with replacement: each
//! draw picks index `i` with probability `f_i / Σf`.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1

use rand::Rng;
use tracing::debug;

/// Draws `count` parent indices proportionally to `fitnesses`.
///
/// When the fitness total is zero every index is equally likely.
///
/// # Complexity
/// O(n + count · log n)
///
/// # Panics
/// Panics if `fitnesses` is empty or holds a negative or non-finite value.
pub fn select_parents<R: Rng>(fitnesses: &[f64], count: usize, rng: &mut R) -> Vec<usize> {
    assert!(!fitnesses.is_empty(), "cannot select from empty population");
    assert!(
        fitnesses.iter().all(|f| f.is_finite() && *f >= 0.0),
        "fitness values must be finite and non-negative"
    );

    let n = fitnesses.len();
    let total: f64 = fitnesses.iter().sum();
    if total <= 0.0 {
        debug!(population = n, "all fitness values are zero, selecting uniformly");
        return (0..count).map(|_| rng.random_range(0..n)).collect();
    }

    let mut cumulative = Vec::with_capacity(n);
    let mut running = 0.0;
    for &f in fitnesses {
        running += f;
        cumulative.push(running);
    }

    (0..count)
        .map(|_| {
            let threshold = rng.random_range(0.0..total);
            // first index whose cumulative weight exceeds the threshold
            let idx = cumulative.partition_point(|&c| c <= threshold);
            idx.min(n - 1) // floating-point fallback
        })
        .collect()
}
