//! Round state and transitions.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::result::GameResult;

mod actions;
mod dealer;
pub mod state;

pub use dealer::{dealer_play, dealer_play_with};
pub use state::{Action, Turn};

/// One round of blackjack between a player and the dealer.
///
/// A state is an immutable value: transitions return a new state. Together
/// the deck and both hands hold each of the 52 cards exactly once for any
/// state built by [`GameState::setup`] and its transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    deck: Deck,
    player_hand: Hand,
    dealer_hand: Hand,
    turn: Turn,
}

impl GameState {
    /// Shuffles a fresh deck and deals a new round.
    ///
    /// The player takes the last two cards of the shuffled deck and the
    /// dealer the two before them. The round starts in [`Turn::PlayerTurn`].
    #[must_use]
    pub fn setup<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::deal(Deck::new().shuffled(rng))
    }

    /// Deals a new round from a deck shuffled with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameState;
    ///
    /// assert_eq!(GameState::from_seed(7), GameState::from_seed(7));
    /// ```
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::setup(&mut rng)
    }

    /// Deals a new round from `deck` without shuffling it.
    ///
    /// Hands that cannot be filled from a short deck are left short.
    #[must_use]
    pub fn deal(deck: Deck) -> Self {
        let (player_cards, deck) = deck.split_tail(2);
        let (dealer_cards, deck) = deck.split_tail(2);

        let state = Self {
            deck,
            player_hand: Hand::from_cards(player_cards),
            dealer_hand: Hand::from_cards(dealer_cards),
            turn: Turn::PlayerTurn,
        };

        log::debug!(
            "dealt round: player {} dealer {} ({} left)",
            state.player_hand.value(),
            state.dealer_hand.value(),
            state.deck.len()
        );

        state
    }

    /// Builds a state from its parts.
    ///
    /// Nothing is validated, so this can describe positions that
    /// [`GameState::setup`] would never produce.
    #[must_use]
    pub const fn from_parts(deck: Deck, player_hand: Hand, dealer_hand: Hand, turn: Turn) -> Self {
        Self {
            deck,
            player_hand,
            dealer_hand,
            turn,
        }
    }

    /// Throws this round away and deals a fresh one, whatever the turn.
    #[must_use]
    pub fn reset<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        log::debug!("round reset during {}", self.turn);
        Self::setup(rng)
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns whose turn it is.
    #[must_use]
    pub const fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns whether `action` is legal right now.
    #[must_use]
    pub const fn is_legal(&self, action: Action) -> bool {
        self.turn.allows(action)
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of cards in the deck and both hands together.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.player_hand.len() + self.dealer_hand.len()
    }

    /// Returns the dealer cards the player may see.
    ///
    /// While the player is still acting only the dealer's second card is
    /// face up; afterwards the whole hand is.
    #[must_use]
    pub fn dealer_visible_cards(&self) -> &[Card] {
        let cards = self.dealer_hand.cards();
        match self.turn {
            Turn::PlayerTurn => cards.get(1..2).unwrap_or(&[]),
            Turn::DealerTurn => cards,
        }
    }

    /// Adjudicates the hands as they stand now.
    ///
    /// This can be called at any point; it does not check that the round is
    /// over. Use [`GameState::outcome`] for a finished-round view.
    #[must_use]
    pub fn result(&self) -> GameResult {
        GameResult::determine(&self.player_hand, &self.dealer_hand)
    }

    /// Returns the result once the round is over.
    ///
    /// `None` while the player is acting, and also when both hands bust.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        match (self.turn, self.result()) {
            (Turn::PlayerTurn, _) | (Turn::DealerTurn, GameResult::NoResult) => None,
            (Turn::DealerTurn, result) => Some(result),
        }
    }
}
