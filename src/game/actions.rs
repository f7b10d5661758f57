use crate::error::DrawError;
use crate::options::GameOptions;

use super::{GameState, Turn, dealer_play_with};

impl GameState {
    /// Player action: Hit (draw a card).
    ///
    /// The last card of the deck moves to the end of the player's hand. A bust
    /// does not end the turn; only [`GameState::stand`] does. Callers are
    /// expected to offer this action only in [`Turn::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the deck is empty.
    pub fn hit(&self) -> Result<Self, DrawError> {
        let (card, deck) = self.deck.take_card()?;
        let player_hand = self.player_hand.with_card(card);

        log::debug!("player hits {card}, now on {}", player_hand.value());

        Ok(Self {
            deck,
            player_hand,
            dealer_hand: self.dealer_hand.clone(),
            turn: self.turn,
        })
    }

    /// Player action: Stand, under the default table rules.
    ///
    /// See [`GameState::stand_with`].
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the dealer must draw from an
    /// empty deck.
    pub fn stand(&self) -> Result<Self, DrawError> {
        self.stand_with(&GameOptions::default())
    }

    /// Player action: Stand (end the turn and let the dealer play).
    ///
    /// The dealer plays out their hand against the remaining deck and the
    /// round moves to [`Turn::DealerTurn`], where it stays.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the dealer must draw from an
    /// empty deck.
    pub fn stand_with(&self, options: &GameOptions) -> Result<Self, DrawError> {
        log::debug!("player stands on {}", self.player_hand.value());

        let (dealer_hand, deck) = dealer_play_with(&self.dealer_hand, &self.deck, options)?;

        Ok(Self {
            deck,
            player_hand: self.player_hand.clone(),
            dealer_hand,
            turn: Turn::DealerTurn,
        })
    }
}
