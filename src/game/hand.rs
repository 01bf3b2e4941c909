//! Hand totals with soft-Ace handling.

use std::fmt;

use super::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u32 = 21;

/// Computes the blackjack total of `cards`.
///
/// Every Ace starts at 11. While the total exceeds 21 and an Ace is still
/// counted as 11, one such Ace drops to 1. The result exceeds 21 only when no
/// Ace is left to drop (a bust).
pub fn hand_value(cards: &[Card]) -> u32 {
    let (total, _) = total_and_soft_aces(cards);
    total
}

fn total_and_soft_aces(cards: &[Card]) -> (u32, u32) {
    let mut total: u32 = 0;
    let mut soft_aces: u32 = 0;
    for card in cards {
        total += u32::from(card.value());
        if card.is_ace() {
            soft_aces += 1;
        }
    }
    while total > BLACKJACK && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }
    (total, soft_aces)
}

/// The cards one party holds during a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand {
            cards: Vec::with_capacity(4),
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u32 {
        hand_value(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Whether an Ace is still counted as 11.
    pub fn is_soft(&self) -> bool {
        total_and_soft_aces(&self.cards).1 > 0
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Hand { cards }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, " ({})", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::card::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(r, Suit::Heart)).collect()
    }

    #[test]
    fn test_numerals_and_faces() {
        assert_eq!(hand_value(&cards(&[Rank::Two, Rank::Nine])), 11);
        assert_eq!(hand_value(&cards(&[Rank::King, Rank::Queen])), 20);
        assert_eq!(hand_value(&cards(&[Rank::Ten, Rank::Jack, Rank::Two])), 22);
    }

    #[test]
    fn test_empty_hand_is_zero() {
        assert_eq!(hand_value(&[]), 0);
    }

    #[test]
    fn test_soft_aces() {
        assert_eq!(hand_value(&cards(&[Rank::Ace, Rank::King])), 21);
        assert_eq!(hand_value(&cards(&[Rank::Ace, Rank::Ace])), 12);
        assert_eq!(hand_value(&cards(&[Rank::Ace, Rank::Six, Rank::Nine])), 16);
        assert_eq!(
            hand_value(&cards(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace])),
            14
        );
        assert_eq!(
            hand_value(&cards(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Two])),
            23
        );
    }

    #[test]
    fn test_soft_flag() {
        let soft: Hand = cards(&[Rank::Ace, Rank::Six]).into();
        assert!(soft.is_soft());
        assert_eq!(soft.value(), 17);

        let hard: Hand = cards(&[Rank::Ace, Rank::Six, Rank::Ten]).into();
        assert!(!hard.is_soft());
        assert_eq!(hard.value(), 17);
    }

    #[test]
    fn test_bust() {
        let mut hand = Hand::new();
        hand.push(Card::new(Rank::King, Suit::Club));
        hand.push(Card::new(Rank::Queen, Suit::Club));
        assert!(!hand.is_bust());
        hand.push(Card::new(Rank::Two, Suit::Club));
        assert!(hand.is_bust());
        assert_eq!(hand.len(), 3);
    }

    #[test]
    fn test_whole_deck_total() {
        // 4 × (2 + … + 10 + 30 for faces) + 4 Aces counted as 1
        let deck = crate::game::Deck::new();
        assert_eq!(hand_value(deck.cards()), 4 * (54 + 30) + 4);

        let two_decks: Vec<Card> = deck.cards().iter().chain(deck.cards()).copied().collect();
        assert_eq!(hand_value(&two_decks), 2 * (4 * (54 + 30) + 4));
    }

    #[test]
    fn test_display() {
        let hand: Hand = vec![
            Card::new(Rank::Ace, Suit::Spade),
            Card::new(Rank::Ten, Suit::Diamond),
        ]
        .into();
        assert_eq!(hand.to_string(), "SA D10 (21)");
    }
}
