//! Deck construction, shuffling and drawing.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;

/// An ordered stack of cards. Draws come off the end.
///
/// [`Deck::new`] builds the full 52 cards, [`Deck::empty`] none.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled 52-card deck.
    ///
    /// Cards are generated suit-major: every rank of clubs, then diamonds,
    /// hearts and spades, each from ace to king.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a deck holding exactly these cards; the last one is drawn first.
    ///
    /// No validation is done, which makes short or stacked decks easy to set up.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns a uniformly shuffled copy of the deck.
    ///
    /// The shuffle is Fisher–Yates driven entirely by `rng`, so the same
    /// generator state always produces the same order.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Draws the last card, returning it with the remaining deck.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the deck is empty.
    ///
    /// ```
    /// use bjsolo::{Card, Deck, DrawError, Rank, Suit};
    ///
    /// let deck = Deck::from_cards(vec![
    ///     Card::new(Suit::Clubs, Rank::Two),
    ///     Card::new(Suit::Hearts, Rank::King),
    /// ]);
    /// let (card, rest) = deck.take_card()?;
    /// assert_eq!(card, Card::new(Suit::Hearts, Rank::King));
    /// assert_eq!(rest.len(), 1);
    /// assert_eq!(Deck::empty().take_card(), Err(DrawError::DeckExhausted));
    /// # Ok::<(), DrawError>(())
    /// ```
    pub fn take_card(&self) -> Result<(Card, Self), DrawError> {
        let Some((card, rest)) = self.cards.split_last() else {
            log::warn!("draw attempted on an empty deck");
            return Err(DrawError::DeckExhausted);
        };

        log::trace!("drew {card}, {} left", rest.len());
        Ok((*card, Self::from_cards(rest.to_vec())))
    }

    /// Splits off the last `count` cards, keeping their order.
    ///
    /// Takes everything if fewer than `count` cards remain.
    pub(crate) fn split_tail(mut self, count: usize) -> (Vec<Card>, Self) {
        let at = self.cards.len().saturating_sub(count);
        let tail = self.cards.split_off(at);
        (tail, self)
    }

    /// Returns the cards in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
