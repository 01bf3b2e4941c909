//! Blackjack policy search.
//!
//! [`BlackjackProblem`] plugs [`PolicyTable`]s into the GA engine: fitness is
//! the simulated score `(wins + 0.5·pushes) / games` over fresh rounds, so it
//! is a noisy estimate with standard error about `√(f(1−f)/games)`.

use rand::Rng;

use crate::error::ConfigError;
use crate::ga::{GaConfig, GaProblem, GaResult, GaRunner};
use crate::game::{play_round, Card};
use crate::policy::PolicyTable;

/// Scores `table` over `games` independent rounds.
///
/// Returns `(wins + 0.5·pushes) / games`, always in `[0, 1]`.
///
/// # Panics
/// Panics if `games` is zero.
pub fn evaluate_fitness<R: Rng>(table: &PolicyTable, games: usize, rng: &mut R) -> f64 {
    assert!(games > 0, "games must be at least 1");
    let mut decider = |hand: &[Card], upcard: Card| table.decide(hand, upcard);
    let score: f64 = (0..games)
        .map(|_| play_round(&mut decider, &mut *rng).score())
        .sum();
    score / games as f64
}

/// The policy search as a [`GaProblem`].
///
/// # Examples
///
/// ```
/// use blackjack_ga::ga::GaConfig;
/// use blackjack_ga::optimizer::BlackjackProblem;
///
/// let problem = BlackjackProblem::default()
///     .with_games_per_eval(20)
///     .with_mutation_rate(0.05);
/// let config = GaConfig::default()
///     .with_population_size(6)
///     .with_generations(2)
///     .with_seed(7);
/// let result = problem.run(&config).unwrap();
/// assert!((0.0..=1.0).contains(&result.best_fitness));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlackjackProblem {
    /// Rounds simulated per fitness evaluation.
    pub games_per_eval: usize,

    /// Per-cell flip probability applied to every child.
    pub mutation_rate: f64,
}

impl Default for BlackjackProblem {
    fn default() -> Self {
        Self {
            games_per_eval: 100,
            mutation_rate: 0.01,
        }
    }
}

impl BlackjackProblem {
    /// Sets the number of rounds per evaluation.
    pub fn with_games_per_eval(mut self, games: usize) -> Self {
        self.games_per_eval = games;
        self
    }

    /// Sets the per-cell mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games_per_eval == 0 {
            return Err(ConfigError::ZeroGames);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        Ok(())
    }

    /// Runs the search. Both `config` and `self` are validated first.
    pub fn run(&self, config: &GaConfig) -> Result<GaResult<PolicyTable>, ConfigError> {
        GaRunner::run(self, config)
    }
}

impl GaProblem for BlackjackProblem {
    type Individual = PolicyTable;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> PolicyTable {
        PolicyTable::random(rng)
    }

    fn evaluate<R: Rng>(&self, table: &PolicyTable, rng: &mut R) -> f64 {
        evaluate_fitness(table, self.games_per_eval, rng)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &PolicyTable,
        parent2: &PolicyTable,
        rng: &mut R,
    ) -> PolicyTable {
        parent1.crossover(parent2, rng)
    }

    fn mutate<R: Rng>(&self, table: &mut PolicyTable, rng: &mut R) {
        table.mutate(self.mutation_rate, rng);
    }

    fn validate(&self) -> Result<(), ConfigError> {
        BlackjackProblem::validate(self)
    }
}

/// Evolves a policy with default mutation rate and a random seed.
pub fn evolve(
    generations: usize,
    population_size: usize,
    games_per_eval: usize,
) -> Result<GaResult<PolicyTable>, ConfigError> {
    let problem = BlackjackProblem::default().with_games_per_eval(games_per_eval);
    let config = GaConfig::default()
        .with_population_size(population_size)
        .with_generations(generations);
    problem.run(&config)
}
