//! Core trait for the GA engine.
//!
//! [`GaProblem`] is the contract between the generic evolutionary loop and a
//! domain: how to create, score, recombine, and perturb individuals.

use rand::Rng;

use crate::error::ConfigError;

/// Defines a GA optimization problem.
///
/// Fitness is **maximized** and must be non-negative, because parents are
/// drawn with probability proportional to fitness.
///
/// # Implementing
///
/// ```ignore
/// struct OneMax { n: usize, rate: f64 }
///
/// impl GaProblem for OneMax {
///     type Individual = Vec<bool>;
///
///     fn create_individual<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
///         (0..self.n).map(|_| rng.random_bool(0.5)).collect()
///     }
///
///     fn evaluate<R: Rng>(&self, bits: &Vec<bool>, _rng: &mut R) -> f64 {
///         bits.iter().filter(|&&b| b).count() as f64
///     }
///
///     fn crossover<R: Rng>(&self, p1: &Vec<bool>, p2: &Vec<bool>, rng: &mut R) -> Vec<bool> {
///         let cut = rng.random_range(0..=self.n);
///         p1[..cut].iter().chain(&p2[cut..]).copied().collect()
///     }
///
///     fn mutate<R: Rng>(&self, bits: &mut Vec<bool>, rng: &mut R) {
///         for b in bits.iter_mut() {
///             if rng.random_bool(self.rate) { *b = !*b; }
///         }
///     }
/// }
/// ```
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// individuals in parallel with rayon (`parallel` feature).
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Clone + Send + Sync;

    /// Creates a random individual for the initial population.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Scores an individual. Higher is better; never negative.
    ///
    /// `rng` is a private stream for this one evaluation, so noisy
    /// (simulation-based) fitness stays reproducible under a fixed seed.
    fn evaluate<R: Rng>(&self, individual: &Self::Individual, rng: &mut R) -> f64;

    /// Produces one child from two parents.
    ///
    /// The runner calls this twice per pair, swapping the parents' roles.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> Self::Individual;

    /// Mutates an individual in place.
    fn mutate<R: Rng>(&self, individual: &mut Self::Individual, rng: &mut R);

    /// Checks the problem's own parameters before a run starts.
    ///
    /// The runner calls this next to [`GaConfig::validate`](super::GaConfig::validate),
    /// so a bad parameter is reported instead of panicking mid-run.
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Called once per generation after evaluation.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _stats: &super::GenerationStats) {}
}
