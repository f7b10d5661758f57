//! Round result and adjudication.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hand::Hand;

/// Outcome of a round, derived from the two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameResult {
    /// Nobody wins (both hands bust).
    NoResult,
    /// The player wins.
    PlayerWin,
    /// The dealer wins.
    DealerWin,
    /// Tie.
    Draw,
}

impl GameResult {
    /// Adjudicates a player hand against a dealer hand.
    ///
    /// Precedence, first match wins:
    /// 1. both bust: [`GameResult::NoResult`]
    /// 2. player bust: [`GameResult::DealerWin`]
    /// 3. dealer bust: [`GameResult::PlayerWin`]
    /// 4. both natural blackjack: [`GameResult::Draw`]
    /// 5. player natural blackjack: [`GameResult::PlayerWin`]
    /// 6. dealer natural blackjack: [`GameResult::DealerWin`]
    /// 7. higher total wins, equal totals draw
    ///
    /// Any pair of hands can be judged, including mid-round ones.
    #[must_use]
    pub fn determine(player: &Hand, dealer: &Hand) -> Self {
        let player_value = player.value();
        let dealer_value = dealer.value();

        match (player.is_bust(), dealer.is_bust()) {
            (true, true) => return Self::NoResult,
            (true, false) => return Self::DealerWin,
            (false, true) => return Self::PlayerWin,
            (false, false) => {}
        }

        match (player.is_blackjack(), dealer.is_blackjack()) {
            (true, true) => return Self::Draw,
            (true, false) => return Self::PlayerWin,
            (false, true) => return Self::DealerWin,
            (false, false) => {}
        }

        match player_value.cmp(&dealer_value) {
            core::cmp::Ordering::Greater => Self::PlayerWin,
            core::cmp::Ordering::Less => Self::DealerWin,
            core::cmp::Ordering::Equal => Self::Draw,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoResult => "no result",
            Self::PlayerWin => "player wins",
            Self::DealerWin => "dealer wins",
            Self::Draw => "draw",
        })
    }
}
