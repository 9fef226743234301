//! The two parties at the table.

extern crate alloc;

use alloc::string::String;

use crate::error::{BalanceError, BetError};
use crate::hand::Hand;

/// The player: a name, a hand, a balance and the wager for this round.
///
/// The wager is held apart from the balance until settlement.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Hand,
    balance: usize,
    bet: usize,
}

impl Player {
    /// Creates a player with an empty hand and no bet.
    #[must_use]
    pub fn new(name: impl Into<String>, balance: usize) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            balance,
            bet: 0,
        }
    }

    /// Returns the player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the current wager, 0 when none is placed.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Records a wager for the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or larger than the balance. The
    /// player is left unchanged.
    pub const fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.balance {
            return Err(BetError::InsufficientFunds);
        }
        self.bet = amount;
        Ok(())
    }

    /// Forgets the wager so the next round asks for a fresh one.
    pub const fn clear_bet(&mut self) {
        self.bet = 0;
    }

    /// Adds winnings to the balance.
    pub const fn credit(&mut self, amount: usize) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Removes a loss from the balance.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError::Overdraft`] if the balance is lower than the
    /// amount; the balance is left unchanged.
    pub const fn debit(&mut self, amount: usize) -> Result<(), BalanceError> {
        if self.balance < amount {
            return Err(BalanceError::Overdraft {
                balance: self.balance,
                amount,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}

/// The house (dealer). Holds a hand but no money.
#[derive(Debug, Clone)]
pub struct House {
    name: String,
    hand: Hand,
}

impl House {
    /// Creates a house with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Returns the house's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the house's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

impl Default for House {
    fn default() -> Self {
        Self::new("House")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bet_validation_leaves_player_untouched() {
        let mut player = Player::new("test", 50);
        assert_eq!(player.place_bet(0), Err(BetError::ZeroBet));
        assert_eq!(player.place_bet(51), Err(BetError::InsufficientFunds));
        assert_eq!(player.bet(), 0);

        player.place_bet(50).unwrap();
        assert_eq!(player.bet(), 50);
        assert_eq!(player.balance(), 50);
    }

    #[test]
    fn debit_refuses_overdraft() {
        let mut player = Player::new("test", 10);
        assert_eq!(
            player.debit(11),
            Err(BalanceError::Overdraft {
                balance: 10,
                amount: 11
            })
        );
        assert_eq!(player.balance(), 10);

        player.debit(10).unwrap();
        player.credit(4);
        assert_eq!(player.balance(), 4);
    }
}
