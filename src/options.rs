//! Game configuration options.

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use tablejack::GameOptions;
///
/// let options = GameOptions::default()
///     .with_blackjack_pays(1.5)
///     .with_dealer_stands_on(17)
///     .with_random_draw(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Payout ratio when the player makes 21 (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// The house draws while its best total is below this value.
    pub dealer_stands_on: u8,
    /// Whether cards are dealt from a random pool position instead of the top.
    pub random_draw: bool,
    /// Whether each round starts by folding the discard pile back in and
    /// shuffling. Disable to play a stacked source in order.
    pub reshuffle_each_round: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            dealer_stands_on: 17,
            random_draw: false,
            reshuffle_each_round: true,
        }
    }
}

impl GameOptions {
    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the total the house stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets whether cards are dealt from a random pool position.
    #[must_use]
    pub const fn with_random_draw(mut self, random: bool) -> Self {
        self.random_draw = random;
        self
    }

    /// Sets whether each round reshuffles the source with its discards.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_each_round(false);
    /// assert!(!options.reshuffle_each_round);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_each_round(mut self, reshuffle: bool) -> Self {
        self.reshuffle_each_round = reshuffle;
        self
    }
}
