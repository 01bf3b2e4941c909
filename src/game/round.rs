//! One round of single-player Blackjack against the dealer.

use rand::rngs::StdRng;
use rand::Rng;

use super::card::Card;
use super::dealer::dealer_play;
use super::deck::Deck;
use super::hand::{Hand, BLACKJACK};
use crate::error::GameError;
use crate::random::create_rng;

/// Player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Hit,
    Stand,
}

/// Result of a round from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerWin,
    DealerWin,
    Push,
}

impl Outcome {
    /// Fitness credit for this outcome: 1 for a win, 0.5 for a push.
    pub fn score(self) -> f64 {
        match self {
            Outcome::PlayerWin => 1.0,
            Outcome::Push => 0.5,
            Outcome::DealerWin => 0.0,
        }
    }
}

/// Chooses the player's action from the current hand and the dealer upcard.
///
/// Closures of type `FnMut(&[Card], Card) -> Action` implement this directly.
pub trait Decide {
    fn decide(&mut self, hand: &[Card], upcard: Card) -> Action;
}

impl<F> Decide for F
where
    F: FnMut(&[Card], Card) -> Action,
{
    fn decide(&mut self, hand: &[Card], upcard: Card) -> Action {
        self(hand, upcard)
    }
}

/// Hits or stands with equal probability.
///
/// Stands in for a policy before any has been evolved.
#[derive(Debug, Clone)]
pub struct RandomDecider {
    rng: StdRng,
}

impl RandomDecider {
    pub fn new(seed: u64) -> Self {
        RandomDecider {
            rng: create_rng(seed),
        }
    }
}

impl Decide for RandomDecider {
    fn decide(&mut self, _hand: &[Card], _upcard: Card) -> Action {
        if self.rng.random_bool(0.5) {
            Action::Hit
        } else {
            Action::Stand
        }
    }
}

/// Everything that happened in one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub player: Hand,
    pub dealer: Hand,
    pub outcome: Outcome,
    /// False when the player busted and the dealer never drew.
    pub dealer_played: bool,
}

impl RoundRecord {
    pub fn upcard(&self) -> Card {
        self.dealer.cards()[0]
    }
}

/// Plays one round on a freshly shuffled deck.
///
/// The deck is built here and dropped when the round ends.
pub fn play_round<D, R>(decider: &mut D, rng: &mut R) -> Outcome
where
    D: Decide + ?Sized,
    R: Rng,
{
    let deck = Deck::shuffled(rng);
    // A round draws at most 4 + 8 + 6 cards before both hands are settled.
    play_round_with_deck(decider, deck)
        .expect("a single round never exhausts a full deck")
        .outcome
}

/// Plays one round dealing from `deck`, returning both final hands.
///
/// Deals player, dealer, player, dealer. The player acts while below 21 and
/// is never consulted holding exactly 21; a bust ends the round before the
/// dealer draws.
pub fn play_round_with_deck<D>(decider: &mut D, mut deck: Deck) -> Result<RoundRecord, GameError>
where
    D: Decide + ?Sized,
{
    let mut player = Hand::new();
    let mut dealer = Hand::new();
    player.push(deck.draw()?);
    dealer.push(deck.draw()?);
    player.push(deck.draw()?);
    dealer.push(deck.draw()?);

    let upcard = dealer.cards()[0];
    while player.value() < BLACKJACK {
        match decider.decide(player.cards(), upcard) {
            Action::Hit => {
                player.push(deck.draw()?);
                if player.is_bust() {
                    return Ok(RoundRecord {
                        player,
                        dealer,
                        outcome: Outcome::DealerWin,
                        dealer_played: false,
                    });
                }
            }
            Action::Stand => break,
        }
    }

    dealer_play(&mut dealer, &mut deck)?;
    let outcome = resolve(player.value(), dealer.value());
    Ok(RoundRecord {
        player,
        dealer,
        outcome,
        dealer_played: true,
    })
}

fn resolve(player_total: u32, dealer_total: u32) -> Outcome {
    if dealer_total > BLACKJACK || player_total > dealer_total {
        Outcome::PlayerWin
    } else if dealer_total > player_total {
        Outcome::DealerWin
    } else {
        Outcome::Push
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::card::{Rank, Suit};
    use crate::random::create_rng;

    fn c(rank: Rank) -> Card {
        Card::new(rank, Suit::Spade)
    }

    fn always(action: Action) -> impl FnMut(&[Card], Card) -> Action {
        move |_, _| action
    }

    #[test]
    fn test_player_bust_skips_dealer() {
        // player: 10, 6 -> hit 9 = 25; dealer: 5, 2 stays at 7
        let deck = Deck::stacked(&[
            c(Rank::Ten),
            c(Rank::Five),
            c(Rank::Six),
            c(Rank::Two),
            c(Rank::Nine),
            c(Rank::King),
        ]);
        let record = play_round_with_deck(&mut always(Action::Hit), deck).unwrap();
        assert_eq!(record.outcome, Outcome::DealerWin);
        assert!(!record.dealer_played);
        assert_eq!(record.dealer.len(), 2);
        assert_eq!(record.player.len(), 3);
    }

    #[test]
    fn test_dealer_bust_is_player_win() {
        // player stands on 12; dealer 10, 6 -> draws 8 = 24
        let deck = Deck::stacked(&[
            c(Rank::Ten),
            c(Rank::Ten),
            c(Rank::Two),
            c(Rank::Six),
            c(Rank::Eight),
        ]);
        let record = play_round_with_deck(&mut always(Action::Stand), deck).unwrap();
        assert_eq!(record.outcome, Outcome::PlayerWin);
        assert!(record.dealer_played);
        assert_eq!(record.dealer.value(), 24);
    }

    #[test]
    fn test_higher_total_wins_and_equal_pushes() {
        // player 20 vs dealer 18
        let deck = Deck::stacked(&[c(Rank::King), c(Rank::Ten), c(Rank::Queen), c(Rank::Eight)]);
        let record = play_round_with_deck(&mut always(Action::Stand), deck).unwrap();
        assert_eq!(record.outcome, Outcome::PlayerWin);

        // player 17 vs dealer 19
        let deck = Deck::stacked(&[c(Rank::Ten), c(Rank::Ten), c(Rank::Seven), c(Rank::Nine)]);
        let record = play_round_with_deck(&mut always(Action::Stand), deck).unwrap();
        assert_eq!(record.outcome, Outcome::DealerWin);

        // 18 vs 18
        let deck = Deck::stacked(&[c(Rank::Ten), c(Rank::Ten), c(Rank::Eight), c(Rank::Eight)]);
        let record = play_round_with_deck(&mut always(Action::Stand), deck).unwrap();
        assert_eq!(record.outcome, Outcome::Push);
    }

    #[test]
    fn test_never_consulted_on_21() {
        let mut calls = 0;
        let mut counting = |_: &[Card], _: Card| {
            calls += 1;
            Action::Hit
        };
        // player: A, 5 (soft 16) -> hit 5 = 21, must stop; dealer 10, 7
        let deck = Deck::stacked(&[
            c(Rank::Ace),
            c(Rank::Ten),
            c(Rank::Five),
            c(Rank::Seven),
            c(Rank::Five),
            c(Rank::King),
        ]);
        let record = play_round_with_deck(&mut counting, deck).unwrap();
        assert_eq!(calls, 1);
        assert_eq!(record.player.value(), 21);
        assert_eq!(record.outcome, Outcome::PlayerWin);
    }

    #[test]
    fn test_natural_is_never_consulted() {
        let mut consulted = false;
        let mut decider = |_: &[Card], _: Card| {
            consulted = true;
            Action::Hit
        };
        // player A, K; dealer 10, A = 21 too
        let deck = Deck::stacked(&[c(Rank::Ace), c(Rank::Ten), c(Rank::King), c(Rank::Ace)]);
        let record = play_round_with_deck(&mut decider, deck).unwrap();
        assert!(!consulted);
        assert_eq!(record.outcome, Outcome::Push);
    }

    #[test]
    fn test_decider_sees_dealer_first_card() {
        let mut seen = Vec::new();
        let mut decider = |_: &[Card], upcard: Card| {
            seen.push(upcard);
            Action::Stand
        };
        let deck = Deck::stacked(&[c(Rank::Two), c(Rank::Nine), c(Rank::Three), c(Rank::Ten)]);
        let record = play_round_with_deck(&mut decider, deck).unwrap();
        assert_eq!(seen, vec![c(Rank::Nine)]);
        assert_eq!(record.upcard(), c(Rank::Nine));
    }

    #[test]
    fn test_short_deck_surfaces_exhaustion() {
        let deck = Deck::stacked(&[c(Rank::Two), c(Rank::Three), c(Rank::Four)]);
        let result = play_round_with_deck(&mut always(Action::Stand), deck);
        assert_eq!(result, Err(GameError::DeckExhausted));
    }

    #[test]
    fn test_seeded_rounds_are_reproducible() {
        let run = |seed| {
            let mut rng = create_rng(seed);
            let mut decider = RandomDecider::new(seed);
            (0..200)
                .map(|_| play_round(&mut decider, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(11), run(11));
    }

    #[test]
    fn test_outcome_scores() {
        assert_eq!(Outcome::PlayerWin.score(), 1.0);
        assert_eq!(Outcome::Push.score(), 0.5);
        assert_eq!(Outcome::DealerWin.score(), 0.0);
    }
}
