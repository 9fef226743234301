use tracing::{debug, info, warn};

use crate::deck::Draw;
use crate::error::{BetError, DeckError, RoundError};

use super::{Event, Game, RoundState, Step};

/// Parses a wager typed by the player.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`BetError::NotANumber`] if the input is not a whole number and
/// [`BetError::ZeroBet`] if it is zero.
pub fn parse_bet(input: &str) -> Result<usize, BetError> {
    let amount = input
        .trim()
        .parse::<usize>()
        .map_err(|_| BetError::NotANumber)?;
    if amount == 0 {
        return Err(BetError::ZeroBet);
    }
    Ok(amount)
}

impl Game {
    /// Places the player's bet and deals the opening cards.
    ///
    /// On success the round advances through the deal and the game-ending
    /// check; the returned step is either a decision request or, when a
    /// natural or bust ended the round, its outcome.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Bet`] if the round is not collecting bets, the bet
    /// is zero, or it exceeds the balance; nothing changes and the bet can be
    /// re-entered. Returns [`RoundError::Deck`] if the source runs dry while
    /// dealing, which aborts the game.
    pub fn submit_bet(&mut self, amount: usize) -> Result<Step, RoundError> {
        if self.state != RoundState::BetCollection {
            return Err(BetError::InvalidState.into());
        }

        if let Err(err) = self.player.place_bet(amount) {
            warn!(amount, balance = self.player.balance(), %err, "bet rejected");
            return Err(err.into());
        }

        info!(amount, balance = self.player.balance(), "bet placed");
        self.run(Event::BetPlaced)
    }

    /// Deals the opening cards: player, house, player, then the house hole
    /// card face down. Every card is recorded in the discard pile as drawn.
    ///
    /// Does nothing unless both hands are empty. Returns whether cards were
    /// dealt. Only reachable through [`Event::BetPlaced`].
    pub(super) fn deal_initial(&mut self) -> Result<bool, DeckError> {
        if !self.player.hand().is_empty() || !self.house.hand().is_empty() {
            return Ok(false);
        }

        let card = self.draw(Draw::FACE_UP)?;
        self.player.hand_mut().add_card(card);

        let card = self.draw(Draw::FACE_UP)?;
        self.house.hand_mut().add_card(card);

        let card = self.draw(Draw::FACE_UP)?;
        self.player.hand_mut().add_card(card);

        let card = self.draw(Draw::FACE_DOWN)?;
        self.house.hand_mut().add_card(card);

        debug!(
            player = %self.player.hand(),
            house = %self.house.hand(),
            remaining = self.source.len(),
            "dealt opening hands"
        );

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::GameOptions;
    use crate::party::Player;

    #[test]
    fn parse_bet_accepts_whole_numbers() {
        assert_eq!(parse_bet(" 25\n"), Ok(25));
        assert_eq!(parse_bet("ten"), Err(BetError::NotANumber));
        assert_eq!(parse_bet("-5"), Err(BetError::NotANumber));
        assert_eq!(parse_bet("2.5"), Err(BetError::NotANumber));
        assert_eq!(parse_bet("0"), Err(BetError::ZeroBet));
    }

    #[test]
    fn initial_deal_is_idempotent() {
        let mut game = Game::new(GameOptions::default(), 7, Player::new("test", 100));
        game.start_round().unwrap();
        game.submit_bet(10).unwrap();

        let player = game.player().hand().clone();
        let house = game.house().hand().clone();
        let remaining = game.cards_remaining();

        assert!(!game.deal_initial().unwrap());
        assert_eq!(game.player().hand(), &player);
        assert_eq!(game.house().hand(), &house);
        assert_eq!(game.cards_remaining(), remaining);
    }
}
