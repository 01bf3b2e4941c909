//! Single-deck Blackjack simulation.
//!
//! One player against a dealer who draws to 17. The player only hits or
//! stands; there is no betting, splitting, or doubling.
//!
//! # Key Types
//!
//! - [`Card`], [`Deck`]: the 52-card alphabet and a per-round deck
//! - [`Hand`], [`hand_value`]: totals with soft-Ace handling
//! - [`Decide`]: the player's decision function
//! - [`play_round`]: one full round, returning an [`Outcome`]

mod card;
mod dealer;
mod deck;
mod hand;
mod round;

pub use card::{Card, ParseCardError, Rank, Suit};
pub use dealer::{dealer_play, DEALER_STAND_TOTAL};
pub use deck::{Deck, DECK_SIZE};
pub use hand::{hand_value, Hand, BLACKJACK};
pub use round::{
    play_round, play_round_with_deck, Action, Decide, Outcome, RandomDecider, RoundRecord,
};
