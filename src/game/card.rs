//! Playing cards.

use std::fmt;
use std::str::FromStr;

/// Card suit. Never affects scoring; it only keeps the 52 tokens unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Diamond = 0,
    Club,
    Heart,
    Spade,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Suit; 4] = [Suit::Diamond, Suit::Club, Suit::Heart, Suit::Spade];

    fn letter(self) -> char {
        match self {
            Suit::Diamond => 'D',
            Suit::Club => 'C',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }
}

/// Card rank, 2 through Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks in canonical deck order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Blackjack value of the rank. Face cards count 10, an Ace counts 11.
    ///
    /// The Ace's downgrade to 1 happens in [`hand_value`](super::hand_value),
    /// which sees the whole hand.
    pub fn value(self) -> u8 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
            numeral => numeral as u8,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// A card with a suit and a rank.
///
/// Tokens print as `<suit letter><rank>`, e.g. `H10` or `SA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    /// Blackjack value of this card on its own (Ace = 11).
    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.letter(), self.rank.symbol())
    }
}

/// Error returned when a string is not one of the 52 card tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid card token: {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseCardError(s.to_string());
        let mut chars = s.chars();
        let suit = match chars.next().ok_or_else(invalid)? {
            'D' => Suit::Diamond,
            'C' => Suit::Club,
            'H' => Suit::Heart,
            'S' => Suit::Spade,
            _ => return Err(invalid()),
        };
        let symbol = chars.as_str();
        let rank = Rank::ALL
            .into_iter()
            .find(|rank| rank.symbol() == symbol)
            .ok_or_else(invalid)?;
        Ok(Card { rank, suit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_values() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Nine.value(), 9);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Jack.value(), 10);
        assert_eq!(Rank::Queen.value(), 10);
        assert_eq!(Rank::King.value(), 10);
        assert_eq!(Rank::Ace.value(), 11);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ten, Suit::Heart).to_string(), "H10");
        assert_eq!(Card::new(Rank::Ace, Suit::Spade).to_string(), "SA");
        assert_eq!(Card::new(Rank::Two, Suit::Diamond).to_string(), "D2");
    }

    #[test]
    fn test_tokens_are_unique_and_parse_back() {
        let mut seen = HashSet::new();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let card = Card::new(rank, suit);
                let token = card.to_string();
                assert_eq!(token.parse::<Card>(), Ok(card));
                assert!(seen.insert(token));
            }
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        for token in ["", "X2", "H", "H1", "H11", "h10", "SA ", "DT"] {
            assert!(token.parse::<Card>().is_err(), "{token:?} should not parse");
        }
    }
}
