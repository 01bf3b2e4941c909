//! Error types for the game engine, policy tables, and optimizer config.

use thiserror::Error;

/// Errors raised by the card-game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A card was drawn from an empty deck.
    ///
    /// A single round never draws more than a couple dozen cards, so this
    /// only surfaces when a caller hands [`play_round_with_deck`] a
    /// deliberately short deck.
    ///
    /// [`play_round_with_deck`]: crate::game::play_round_with_deck
    #[error("cannot draw from an exhausted deck")]
    DeckExhausted,
}

/// Errors raised when importing a policy table from raw rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("policy table must have {expected} rows, got {actual}")]
    WrongRowCount { expected: usize, actual: usize },

    #[error("policy table row {row} must have {expected} columns, got {actual}")]
    WrongColumnCount {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("policy table cell ({row}, {col}) must be 0 or 1, got {value}")]
    NonBinaryCell { row: usize, col: usize, value: u8 },
}

/// Errors raised by configuration validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("generations must be at least 1")]
    ZeroGenerations,

    #[error("games_per_eval must be at least 1")]
    ZeroGames,

    #[error("mutation_rate must lie in [0, 1], got {0}")]
    MutationRateOutOfRange(f64),
}
