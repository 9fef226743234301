//! Round outcome types.

/// Event that ends a round before the player stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEnding {
    /// The dealer's peek found a natural.
    HouseBlackjack,
    /// Every house total exceeds 21.
    HouseBust,
    /// The player's best total is 21.
    PlayerBlackjack,
    /// Every player total exceeds 21.
    PlayerBust,
}

/// How a round was settled. Amounts are what moved on the player's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Player wins and is credited the bet.
    PlayerWins(usize),
    /// House wins and the bet is debited.
    HouseWins(usize),
    /// Tie; the balance does not change.
    Push,
    /// Player made 21 and is credited the blackjack payout.
    PlayerBlackjack(usize),
}

impl RoundOutcome {
    /// Net change to the player's balance.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "bets fit in isize")]
    pub const fn net(&self) -> isize {
        match *self {
            Self::PlayerWins(amount) | Self::PlayerBlackjack(amount) => amount as isize,
            Self::HouseWins(amount) => -(amount as isize),
            Self::Push => 0,
        }
    }
}
