//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
///
/// A single 52-card deck always covers one round under legal play, so seeing
/// this error means the caller has broken an invariant (for example by
/// building a short deck by hand or hitting past any sensible point).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
}
