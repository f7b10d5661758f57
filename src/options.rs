//! Dealer rule options.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dealer stand threshold used by [`GameOptions::default`].
pub const DEALER_MIN_STAND: u8 = 17;

/// Rules the dealer plays by.
///
/// The defaults are the house rules of this table: the dealer draws below 17
/// and stands on every 17, soft or hard.
///
/// ```
/// use bjsolo::GameOptions;
///
/// let options = GameOptions::default()
///     .with_dealer_stands_on(18)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameOptions {
    /// Lowest total the dealer stands on.
    pub dealer_stands_on: u8,
    /// Whether the dealer stands on a soft hand equal to the threshold.
    pub stand_on_soft_17: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: DEALER_MIN_STAND,
            stand_on_soft_17: true,
        }
    }
}

impl GameOptions {
    /// Sets the dealer stand threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets whether the dealer stands on a soft hand at the threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert!(!options.stand_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Returns whether the dealer must draw to a hand with this total.
    #[must_use]
    pub const fn dealer_draws(&self, value: u8, is_soft: bool) -> bool {
        value < self.dealer_stands_on
            || (value == self.dealer_stands_on && is_soft && !self.stand_on_soft_17)
    }
}
