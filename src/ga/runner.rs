//! GA evolutionary loop execution.
//!
//! [`Evolution`] holds the live population and advances it one generation at
//! a time; [`GaRunner`] drives it for a configured number of generations:
//! evaluation → best tracking → selection → crossover → mutation → elitism.

use rand::rngs::StdRng;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

use super::config::GaConfig;
use super::selection::select_parents;
use super::types::GaProblem;
use crate::error::ConfigError;
use crate::random::{child_seeds, create_rng, rng_from_option};

/// Fitness summary of one evaluated generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,
    pub best: f64,
    pub mean: f64,
    pub worst: f64,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult<I> {
    /// The best individual of the **last** evaluated generation.
    ///
    /// This is also the individual carried into the final population by
    /// elitism. Because fitness is re-estimated every generation it can score
    /// below an earlier generation's best; see [`best_ever`](Self::best_ever).
    pub best: I,

    /// Fitness of `best` in the generation it won.
    pub best_fitness: f64,

    /// The highest-scoring individual seen in any generation.
    pub best_ever: I,

    /// Fitness of `best_ever` in the generation it won.
    pub best_ever_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Statistics for each generation, in order.
    pub history: Vec<GenerationStats>,

    /// The population produced by the last generation step.
    pub population: Vec<I>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs `config.generations` generations and returns the outcome.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        let mut evolution = Evolution::new(problem, config.clone())?;
        for _ in 0..config.generations {
            evolution.step();
        }
        Ok(evolution
            .into_result()
            .expect("a validated config runs at least one generation"))
    }
}

/// A population mid-evolution.
pub struct Evolution<'p, P: GaProblem> {
    problem: &'p P,
    config: GaConfig,
    rng: StdRng,
    population: Vec<P::Individual>,
    best: Option<(P::Individual, f64)>,
    best_ever: Option<(P::Individual, f64)>,
    history: Vec<GenerationStats>,
}

impl<'p, P: GaProblem> Evolution<'p, P> {
    /// Validates `config` and `problem`, then creates a random initial
    /// population.
    pub fn new(problem: &'p P, config: GaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        problem.validate()?;
        debug!(?config, "initializing population");

        let mut rng = rng_from_option(config.seed);
        let population = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();

        Ok(Self {
            problem,
            config,
            rng,
            population,
            best: None,
            best_ever: None,
            history: Vec::new(),
        })
    }

    /// The current population.
    pub fn population(&self) -> &[P::Individual] {
        &self.population
    }

    /// Best individual of the most recent generation, with its fitness.
    pub fn best(&self) -> Option<(&P::Individual, f64)> {
        self.best.as_ref().map(|(ind, f)| (ind, *f))
    }

    /// Number of generations completed.
    pub fn generation(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// Runs one generation and replaces the population.
    ///
    /// 1. Scores every individual from scratch.
    /// 2. Records this generation's best (first on ties), replacing the
    ///    previous best even when it scores lower.
    /// 3. Samples N parents proportionally to fitness.
    /// 4. Each consecutive pair yields two children (crossover both ways,
    ///    then mutation).
    /// 5. Slot 0 receives a copy of the recorded best.
    /// 6. An odd shortfall is filled by resampling the new members.
    pub fn step(&mut self) -> GenerationStats {
        let n = self.config.population_size;
        let fitnesses = self.evaluate();

        let (best_idx, best_fitness) = argmax(&fitnesses);
        let best = self.population[best_idx].clone();
        let stats = GenerationStats {
            generation: self.history.len() + 1,
            best: best_fitness,
            mean: fitnesses.iter().sum::<f64>() / fitnesses.len() as f64,
            worst: fitnesses.iter().copied().fold(f64::INFINITY, f64::min),
        };
        info!(
            "generation {}/{}: best fitness {:.4}, mean {:.4}",
            stats.generation, self.config.generations, stats.best, stats.mean
        );
        self.problem.on_generation(&stats);

        let improved = self
            .best_ever
            .as_ref()
            .map_or(true, |(_, ever)| best_fitness > *ever);
        if improved {
            self.best_ever = Some((best.clone(), best_fitness));
        }

        let parents = select_parents(&fitnesses, n, &mut self.rng);
        let mut next = Vec::with_capacity(n);
        for pair in parents.chunks_exact(2) {
            let p1 = &self.population[pair[0]];
            let p2 = &self.population[pair[1]];
            let mut child1 = self.problem.crossover(p1, p2, &mut self.rng);
            let mut child2 = self.problem.crossover(p2, p1, &mut self.rng);
            self.problem.mutate(&mut child1, &mut self.rng);
            self.problem.mutate(&mut child2, &mut self.rng);
            next.push(child1);
            next.push(child2);
        }

        // Elitism
        next[0] = best.clone();

        while next.len() < n {
            let idx = self.rng.random_range(0..next.len());
            next.push(next[idx].clone());
        }
        next.truncate(n);

        self.population = next;
        self.best = Some((best, best_fitness));
        self.history.push(stats);
        stats
    }

    /// Consumes the run. `None` if no generation has been run.
    pub fn into_result(self) -> Option<GaResult<P::Individual>> {
        let (best, best_fitness) = self.best?;
        let (best_ever, best_ever_fitness) = self.best_ever?;
        Some(GaResult {
            best,
            best_fitness,
            best_ever,
            best_ever_fitness,
            generations: self.history.len(),
            history: self.history,
            population: self.population,
        })
    }

    /// Scores the population, one private random stream per individual.
    fn evaluate(&mut self) -> Vec<f64> {
        let seeds = child_seeds(&mut self.rng, self.population.len());
        evaluate_population(self.problem, &self.population, &seeds, self.config.parallel)
    }
}

/// Evaluates every individual with its own seeded stream.
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &[P::Individual],
    seeds: &[u64],
    parallel: bool,
) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return population
                .par_iter()
                .zip(seeds.par_iter())
                .map(|(ind, &seed)| problem.evaluate(ind, &mut create_rng(seed)))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population
        .iter()
        .zip(seeds)
        .map(|(ind, &seed)| problem.evaluate(ind, &mut create_rng(seed)))
        .collect()
}

/// Index and value of the first maximum.
fn argmax(values: &[f64]) -> (usize, f64) {
    let mut best = (0, values[0]);
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > best.1 {
            best = (i, v);
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
