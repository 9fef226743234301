use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::deck::Draw;
use crate::error::{DeckError, RoundError};
use crate::options::RoundingMode;
use crate::result::{GameEnding, RoundOutcome};

use super::Game;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

impl Game {
    /// Turns the house hole card face up.
    pub(super) fn reveal_hole(&mut self) {
        for card in self.house.hand_mut().reveal_all() {
            info!(%card, value = %self.house.hand().value(), "house reveals hole card");
        }
    }

    /// House draws while its best total is below the standing total and the
    /// hand is not bust.
    ///
    /// Soft and hard totals are treated alike. Returns the cards drawn.
    pub(super) fn dealer_play(&mut self) -> Result<Vec<Card>, DeckError> {
        let mut drawn = Vec::new();

        loop {
            let value = self.house.hand().value();
            if value.is_bust() || value.max() >= self.options.dealer_stands_on {
                break;
            }
            let card = self.draw(Draw::FACE_UP)?;
            self.house.hand_mut().add_card(card);
            debug!(%card, value = %self.house.hand().value(), "house draws");
            drawn.push(card);
        }

        Ok(drawn)
    }

    /// Blackjack payout for `bet`, rounded per the options.
    pub(super) fn blackjack_payout(&self, bet: usize) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let winnings = (bet as f64) * self.options.blackjack_pays;
        round_amount(winnings, self.options.rounding_blackjack)
    }

    /// Decides the round and moves the bet on the player's balance.
    ///
    /// `ending` is the event that cut the round short, or `None` when the
    /// player stood and the house played out.
    pub(super) fn settle(&mut self, ending: Option<GameEnding>) -> Result<RoundOutcome, RoundError> {
        let bet = self.player.bet();
        let player_value = self.player.hand().value();
        let house_value = self.house.hand().value();

        let outcome = match ending {
            Some(GameEnding::HouseBlackjack) => {
                if player_value.is_twenty_one() {
                    RoundOutcome::Push
                } else {
                    RoundOutcome::HouseWins(bet)
                }
            }
            Some(GameEnding::HouseBust) => RoundOutcome::PlayerWins(bet),
            Some(GameEnding::PlayerBlackjack) => {
                RoundOutcome::PlayerBlackjack(self.blackjack_payout(bet))
            }
            Some(GameEnding::PlayerBust) => RoundOutcome::HouseWins(bet),
            None => {
                if house_value.is_bust() || player_value.max() > house_value.max() {
                    RoundOutcome::PlayerWins(bet)
                } else if player_value.max() < house_value.max() {
                    RoundOutcome::HouseWins(bet)
                } else {
                    RoundOutcome::Push
                }
            }
        };

        match outcome {
            RoundOutcome::PlayerWins(amount) | RoundOutcome::PlayerBlackjack(amount) => {
                self.player.credit(amount);
            }
            RoundOutcome::HouseWins(amount) => self.player.debit(amount)?,
            RoundOutcome::Push => {}
        }

        info!(
            ?outcome,
            ?ending,
            player = %player_value,
            house = %house_value,
            balance = self.player.balance(),
            "round settled"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::GameOptions;
    use crate::party::Player;

    fn game(options: GameOptions) -> Game {
        Game::new(options, 1, Player::new("test", 100))
    }

    #[test]
    fn blackjack_payout_rounding() {
        let down = game(GameOptions::default());
        assert_eq!(down.blackjack_payout(10), 15);
        assert_eq!(down.blackjack_payout(5), 7);

        let up = game(GameOptions::default().with_rounding_blackjack(RoundingMode::Up));
        assert_eq!(up.blackjack_payout(5), 8);

        let nearest = game(
            GameOptions::default()
                .with_blackjack_pays(1.2)
                .with_rounding_blackjack(RoundingMode::Nearest),
        );
        assert_eq!(nearest.blackjack_payout(12), 14);
    }
}
