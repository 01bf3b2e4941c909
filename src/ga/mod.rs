//! Genetic Algorithm engine.
//!
//! A generic GA loop built on a trait-based problem definition. Users define
//! their problem by implementing [`GaProblem`], which specifies how to
//! create, evaluate, crossover, and mutate individuals. The blackjack policy
//! search in [`crate::optimizer`] is one such problem.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, seed)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`Evolution`]: Step-by-step access to a running population
//! - [`GaResult`]: Final optimization result with per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: Row-wise crossover and bit-flip mutation for binary grids
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{Evolution, GaResult, GaRunner, GenerationStats};
pub use selection::select_parents;
pub use types::GaProblem;
