//! The dealer's fixed drawing rule.

use super::deck::Deck;
use super::hand::Hand;
use crate::error::GameError;

/// The dealer stops drawing once the hand reaches this total, soft or hard.
pub const DEALER_STAND_TOTAL: u32 = 17;

/// Plays the dealer's hand: draw until the total is at least 17.
pub fn dealer_play(hand: &mut Hand, deck: &mut Deck) -> Result<(), GameError> {
    while hand.value() < DEALER_STAND_TOTAL {
        hand.push(deck.draw()?);
    }
    Ok(())
}
