//! A single-table blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one player against the house:
//! betting, the opening deal, the dealer's peek for naturals, hit and stand,
//! the house draw, and settlement against the player's balance. Cards come
//! from a [`CardSource`] that keeps an active pool and a discard pile.
//!
//! # Example
//!
//! ```no_run
//! use tablejack::{Decision, Game, GameOptions, Player, Step};
//!
//! let mut game = Game::new(GameOptions::default(), 42, Player::new("Alice", 100));
//! game.start_round().unwrap();
//! let mut step = game.submit_bet(10).unwrap();
//! while step == Step::NeedDecision {
//!     step = game.submit_decision(Decision::Stand).unwrap();
//! }
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
pub mod party;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, Rank, Suit};
pub use deck::{CardSource, Draw};
pub use error::{BalanceError, BetError, DeckError, RoundError, TransitionError};
pub use game::{
    Decision, Effect, Event, Game, RoundState, Step, check_game_ending, parse_bet, transition,
};
pub use hand::{BLACKJACK, Hand, HandValue};
pub use options::{GameOptions, RoundingMode};
pub use party::{House, Player};
pub use result::{GameEnding, RoundOutcome};
