//! Error types for game operations.

use thiserror::Error;

use crate::game::state::{Event, RoundState};

/// Errors that can occur while placing a bet.
///
/// Amount errors are recoverable: the table does not change and the bet can
/// be re-entered. [`BetError::InvalidState`] is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid round state for betting.
    #[error("invalid round state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the player's balance.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Bet input is not a whole number.
    #[error("bet is not a number")]
    NotANumber,
}

/// Errors raised by the card source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the active pool.
    #[error("no cards left in the pool")]
    EmptyPool,
    /// A card handed back that this source never dealt.
    #[error("card does not belong to this source")]
    UnknownCard,
}

/// Errors raised when moving money out of a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// Debit larger than the balance.
    #[error("cannot debit {amount} from a balance of {balance}")]
    Overdraft {
        /// Balance at the time of the debit.
        balance: usize,
        /// Amount requested.
        amount: usize,
    },
}

/// An event that the round state machine does not accept in its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("event {event:?} not accepted in state {state:?}")]
pub struct TransitionError {
    /// State the round was in.
    pub state: RoundState,
    /// Rejected event.
    pub event: Event,
}

/// Errors that can occur while driving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round state for this call.
    #[error("invalid round state for this call")]
    InvalidState,
    /// The bet was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The card source failed; the round is aborted.
    #[error("card source failure: {0}")]
    Deck(#[from] DeckError),
    /// Settlement tried to overdraw the player; the round is aborted.
    #[error("balance invariant violated: {0}")]
    Balance(#[from] BalanceError),
}

impl From<TransitionError> for RoundError {
    fn from(_: TransitionError) -> Self {
        Self::InvalidState
    }
}

impl RoundError {
    /// Returns whether the caller can retry at the same decision point.
    ///
    /// Only a rejected bet amount qualifies. A call made in the wrong state,
    /// including any call after the game aborted, is not recoverable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Bet(BetError::ZeroBet | BetError::InsufficientFunds | BetError::NotANumber)
        )
    }
}
