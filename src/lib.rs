//! Genetic search for a Blackjack hit/stand policy.
//!
//! A policy is an 18×10 chart of hit/stand decisions indexed by the player's
//! total and the dealer's upcard. Its fitness is the score it earns over many
//! simulated rounds against a dealer who draws to 17.
//!
//! - **Game** ([`game`]): cards, a per-round 52-card deck, soft-Ace hand
//!   totals, the dealer's fixed policy, and the round simulator.
//! - **Policy** ([`policy`]): the [`PolicyTable`](policy::PolicyTable) chart
//!   and its forced rows (always hit on 4–10, always stand on 21).
//! - **GA** ([`ga`]): a generic evolutionary loop with fitness-proportionate
//!   selection, two-way crossover, mutation, and single-slot elitism.
//! - **Optimizer** ([`optimizer`]): the policy search wired into the GA.
//!
//! # Randomness
//!
//! Every shuffle, coin flip, and parent draw goes through an explicit
//! generator. A seeded run is fully reproducible, with or without the
//! `parallel` feature.
//!
//! # Example
//!
//! ```
//! use blackjack_ga::ga::GaConfig;
//! use blackjack_ga::optimizer::BlackjackProblem;
//!
//! let result = BlackjackProblem::default()
//!     .with_games_per_eval(25)
//!     .run(&GaConfig::default().with_population_size(8).with_generations(2).with_seed(1))
//!     .unwrap();
//! assert!(result.best.has_forced_rows());
//! println!("{}", result.best);
//! ```

mod error;
pub mod ga;
pub mod game;
pub mod optimizer;
pub mod policy;
pub mod random;

pub use error::{ConfigError, GameError, PolicyError};
