//! The per-round 52-card deck.

use rand::seq::SliceRandom;
use rand::Rng;

use super::card::{Card, Rank, Suit};
use crate::error::GameError;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// A single 52-card deck, dealt from the back.
///
/// A round builds its own deck, shuffles it once, and drops it when the
/// round is resolved. Nothing ever puts cards back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in canonical order: suit-major, ranks 2 to Ace.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Creates a full deck and shuffles it with `rng`.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck that deals exactly `draw_order`, first element first.
    ///
    /// Used to rig rounds for replay and tests. Unlike [`Deck::new`] this is
    /// not a full deck: it holds only the given cards, duplicates included,
    /// so drawing past them fails with [`GameError::DeckExhausted`]. The
    /// simulator's own rounds always start from [`Deck::shuffled`].
    pub fn stacked(draw_order: &[Card]) -> Self {
        let mut cards = draw_order.to_vec();
        cards.reverse();
        Deck { cards }
    }

    /// Permutes the remaining cards in place.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top (last) card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::DeckExhausted)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
