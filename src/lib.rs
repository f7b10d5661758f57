//! A single-deck blackjack rules engine with optional `no_std` support.
//!
//! The crate models one round between a player and an automated dealer.
//! A [`GameState`] is a plain value: every transition ([`GameState::hit`],
//! [`GameState::stand`], [`GameState::reset`]) returns a new state and leaves
//! the caller's copy untouched, so a UI shell only has to swap the value it
//! holds and re-render.
//!
//! # Example
//!
//! ```
//! use bjsolo::{GameState, Turn};
//!
//! let state = GameState::from_seed(42);
//! assert_eq!(state.turn(), Turn::PlayerTurn);
//! assert_eq!(state.cards_remaining(), bjsolo::DECK_SIZE - 4);
//!
//! let finished = state.stand().expect("a fresh deck never runs dry");
//! assert_eq!(finished.turn(), Turn::DealerTurn);
//! assert!(finished.dealer_hand().value() >= 17);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::DrawError;
pub use game::{Action, GameState, Turn, dealer_play, dealer_play_with};
pub use hand::{BLACKJACK, Hand, score};
pub use options::GameOptions;
pub use result::GameResult;
