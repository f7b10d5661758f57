//! Turn and action types.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whose turn it is.
///
/// The round starts in `PlayerTurn` and moves to `DealerTurn` once the player
/// stands. It never moves back within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Turn {
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The dealer has played out their hand; the round is over.
    DealerTurn,
}

/// An action a caller can take on a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    /// Draw a card into the player's hand.
    Hit,
    /// End the player's turn and let the dealer play.
    Stand,
    /// Throw the round away and deal a fresh one.
    Reset,
}

impl Turn {
    /// Returns the actions that make sense in this turn.
    #[must_use]
    pub const fn legal_actions(self) -> &'static [Action] {
        match self {
            Self::PlayerTurn => &[Action::Hit, Action::Stand, Action::Reset],
            Self::DealerTurn => &[Action::Reset],
        }
    }

    /// Returns whether `action` is legal in this turn.
    #[must_use]
    pub const fn allows(self, action: Action) -> bool {
        match action {
            Action::Hit | Action::Stand => matches!(self, Self::PlayerTurn),
            Action::Reset => true,
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerTurn => "player turn",
            Self::DealerTurn => "dealer turn",
        })
    }
}
