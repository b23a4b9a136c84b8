//! Game configuration options.

use crate::game::DealerPolicy;

/// Round wins needed to take a match.
pub const DEFAULT_WIN_THRESHOLD: u8 = 5;

/// Dealer total at which the dealer stops drawing.
pub const DEFAULT_DEALER_STANDS_AT: u16 = 16;

/// Configuration options for a Twenty-One match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twenty_one::GameOptions;
///
/// let options = GameOptions::default()
///     .with_win_threshold(3)
///     .with_dealer_stands_at(17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Round wins that end a match. Must be at least 1.
    pub win_threshold: u8,
    /// The dealer hits while the dealer's total is below this value.
    pub dealer_stands_at: u16,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            win_threshold: DEFAULT_WIN_THRESHOLD,
            dealer_stands_at: DEFAULT_DEALER_STANDS_AT,
        }
    }
}

impl GameOptions {
    /// Sets the number of round wins that ends a match.
    ///
    /// # Example
    ///
    /// ```
    /// use twenty_one::GameOptions;
    ///
    /// let options = GameOptions::default().with_win_threshold(3);
    /// assert_eq!(options.win_threshold, 3);
    /// ```
    #[must_use]
    pub const fn with_win_threshold(mut self, wins: u8) -> Self {
        self.win_threshold = wins;
        self
    }

    /// Sets the total at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use twenty_one::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_at(17);
    /// assert_eq!(options.dealer_stands_at, 17);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, total: u16) -> Self {
        self.dealer_stands_at = total;
        self
    }

    /// Returns the dealer policy described by these options.
    #[must_use]
    pub const fn dealer_policy(&self) -> DealerPolicy {
        DealerPolicy::new(self.dealer_stands_at)
    }
}
