use crate::deck::Deck;
use crate::error::DrawError;
use crate::hand::Hand;
use crate::options::GameOptions;

/// Plays out the dealer's hand under the default table rules.
///
/// See [`dealer_play_with`].
///
/// # Errors
///
/// Returns [`DrawError::DeckExhausted`] if the dealer must draw from an
/// empty deck.
pub fn dealer_play(hand: &Hand, deck: &Deck) -> Result<(Hand, Deck), DrawError> {
    dealer_play_with(hand, deck, &GameOptions::default())
}

/// Plays out the dealer's hand.
///
/// The dealer draws one card at a time from the end of `deck` while
/// `options` say the hand must be hit, then stands (possibly bust). A hand
/// that already stands comes back unchanged together with an unchanged deck.
///
/// Returns the final hand and the remaining deck.
///
/// # Errors
///
/// Returns [`DrawError::DeckExhausted`] if the dealer must draw from an
/// empty deck.
pub fn dealer_play_with(
    hand: &Hand,
    deck: &Deck,
    options: &GameOptions,
) -> Result<(Hand, Deck), DrawError> {
    let mut hand = hand.clone();
    let mut deck = deck.clone();

    // Each pass shrinks the deck, so this ends within `deck.len()` draws.
    while options.dealer_draws(hand.value(), hand.is_soft()) {
        let (card, remaining) = deck.take_card()?;
        log::trace!("dealer draws {card} on {}", hand.value());
        hand.add_card(card);
        deck = remaining;
    }

    log::debug!(
        "dealer stands on {} with {} cards",
        hand.value(),
        hand.len()
    );

    Ok((hand, deck))
}
