//! Game engine and round flow.

use tracing::{debug, error};

use crate::card::Card;
use crate::deck::{CardSource, Draw};
use crate::error::{DeckError, RoundError};
use crate::options::GameOptions;
use crate::party::{House, Player};
use crate::result::{GameEnding, RoundOutcome};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use actions::{Decision, check_game_ending};
pub use bet::parse_bet;
pub use state::{Effect, Event, RoundState, transition};

/// What the table needs next from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Call [`Game::start_round`].
    NewRound,
    /// Call [`Game::submit_bet`].
    NeedBet,
    /// Call [`Game::submit_decision`].
    NeedDecision,
    /// The round is settled; call [`Game::finish_round`].
    RoundOver(RoundOutcome),
    /// The player left the table.
    GameOver,
}

/// A single-table blackjack game between one player and the house.
///
/// The game owns the card source and both parties. Rounds are driven by the
/// pure [`transition`] function; the game applies the effects it returns
/// until the next player decision is needed.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    source: CardSource,
    player: Player,
    house: House,
    state: RoundState,
    ending: Option<GameEnding>,
    outcome: Option<RoundOutcome>,
}

impl Game {
    /// Creates a new game with a standard deck seeded by `seed`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tablejack::{Game, GameOptions, Player};
    ///
    /// let game = Game::new(GameOptions::default(), 42, Player::new("Alice", 100));
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64, player: Player) -> Self {
        Self::with_source(options, CardSource::new(seed), player)
    }

    /// Creates a new game dealing from `source`.
    #[must_use]
    pub fn with_source(options: GameOptions, source: CardSource, player: Player) -> Self {
        Self {
            options,
            source,
            player,
            house: House::default(),
            state: RoundState::RoundStart,
            ending: None,
            outcome: None,
        }
    }

    /// Feeds an event through the state machine, applying effects until the
    /// round needs outside input.
    fn run(&mut self, event: Event) -> Result<Step, RoundError> {
        let mut pending = Some(event);

        while let Some(event) = pending.take() {
            let (state, effects) = state::transition(self.state, event)?;
            debug!(from = ?self.state, to = ?state, ?event, "round transition");
            self.state = state;

            for effect in effects {
                match self.apply(effect) {
                    Ok(Some(next)) => pending = Some(next),
                    Ok(None) => {}
                    Err(err) => return Err(self.abort(err)),
                }
            }
        }

        self.step()
    }

    fn apply(&mut self, effect: Effect) -> Result<Option<Event>, RoundError> {
        match effect {
            Effect::ClearHands => {
                self.clear_hands()?;
                Ok(None)
            }
            Effect::Shuffle => {
                if self.options.reshuffle_each_round {
                    self.source.shuffle(true);
                }
                Ok(None)
            }
            Effect::DealInitial => {
                self.deal_initial()?;
                Ok(Some(Event::Dealt))
            }
            Effect::CheckGameEnding => {
                self.ending = check_game_ending(self.player.hand(), self.house.hand());
                Ok(Some(Event::Checked(self.ending)))
            }
            Effect::DrawForPlayer => {
                self.draw_for_player()?;
                Ok(None)
            }
            Effect::RevealHole => {
                self.reveal_hole();
                Ok(None)
            }
            Effect::PlayDealer => {
                let drawn = self.dealer_play()?;
                debug!(drawn = drawn.len(), value = %self.house.hand().value(), "house stands");
                Ok(Some(Event::DealerDone))
            }
            Effect::Settle(ending) => {
                let outcome = self.settle(ending)?;
                self.outcome = Some(outcome);
                Ok(Some(Event::Settled(outcome)))
            }
            Effect::ClearBet => {
                self.player.clear_bet();
                self.ending = None;
                self.outcome = None;
                Ok(None)
            }
        }
    }

    fn abort(&mut self, err: RoundError) -> RoundError {
        error!(error = %err, state = ?self.state, "round aborted");
        if let Ok((state, _)) = state::transition(self.state, Event::Abort) {
            self.state = state;
        }
        err
    }

    fn step(&self) -> Result<Step, RoundError> {
        match self.state {
            RoundState::RoundStart => Ok(Step::NewRound),
            RoundState::BetCollection => Ok(Step::NeedBet),
            RoundState::PlayerTurn => Ok(Step::NeedDecision),
            RoundState::RoundEnd => self
                .outcome
                .map(Step::RoundOver)
                .ok_or(RoundError::InvalidState),
            RoundState::Finished => Ok(Step::GameOver),
            _ => Err(RoundError::InvalidState),
        }
    }

    /// Returns every card in both hands to the card source.
    fn clear_hands(&mut self) -> Result<(), DeckError> {
        let player_cards = self.player.hand_mut().take_cards();
        let house_cards = self.house.hand_mut().take_cards();
        for card in player_cards.into_iter().chain(house_cards) {
            self.source.release(card)?;
        }
        Ok(())
    }

    /// Draws one card per the table's draw policy.
    fn draw(&mut self, draw: Draw) -> Result<Card, DeckError> {
        self.source.draw(draw.random(self.options.random_draw))
    }

    /// Starts a round: clears the table and shuffles, then asks for a bet.
    ///
    /// Calling this while a round is already waiting on the player reports
    /// what is needed without changing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is finished or aborted, or if a card in
    /// a hand does not belong to the source.
    pub fn start_round(&mut self) -> Result<Step, RoundError> {
        match self.state {
            RoundState::RoundStart => self.run(Event::Start),
            RoundState::BetCollection | RoundState::PlayerTurn | RoundState::RoundEnd => {
                self.step()
            }
            _ => Err(RoundError::InvalidState),
        }
    }

    /// Ends the round, either looping back for another or leaving the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not settled.
    pub fn finish_round(&mut self, keep_playing: bool) -> Result<Step, RoundError> {
        if self.state != RoundState::RoundEnd {
            return Err(RoundError::InvalidState);
        }
        self.run(if keep_playing {
            Event::Continue
        } else {
            Event::Stop
        })
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player.
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the house.
    pub const fn house(&self) -> &House {
        &self.house
    }

    /// Returns the card source.
    pub const fn source(&self) -> &CardSource {
        &self.source
    }

    /// Returns the player's balance.
    pub const fn balance(&self) -> usize {
        self.player.balance()
    }

    /// Returns the number of cards left in the active pool.
    pub fn cards_remaining(&self) -> usize {
        self.source.len()
    }

    /// Returns the event that ended the current round early, if any.
    pub const fn ending(&self) -> Option<GameEnding> {
        self.ending
    }

    /// Returns whether the current round ended before the player stood.
    pub const fn ended_early(&self) -> bool {
        self.ending.is_some()
    }

    /// Returns the outcome of the current round once settled.
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Returns whether the player has left the table or the game aborted.
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, RoundState::Finished | RoundState::Aborted)
    }
}
