use tracing::{debug, info};

use crate::card::Rank;
use crate::deck::Draw;
use crate::error::{DeckError, RoundError};
use crate::hand::Hand;
use crate::result::GameEnding;

use super::{Event, Game, RoundState, Step};

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Keep the hand and let the house play.
    Stand,
}

/// Looks for an event that ends the round before the player stands.
///
/// Checks run in order and the first match wins:
/// 1. house shows ten with an ace in the hole (house blackjack)
/// 2. house shows ace with a ten-value hole card (house blackjack)
/// 3. every house total exceeds 21 (house bust)
/// 4. the player's best total is 21 (player blackjack)
/// 5. every player total exceeds 21 (player bust)
///
/// The hole card is only looked at, never turned over.
#[must_use]
pub fn check_game_ending(player: &Hand, house: &Hand) -> Option<GameEnding> {
    let visible = house.value();

    if let Some(hole) = house.hole_card() {
        if visible.contains(10) && hole.rank() == Rank::Ace {
            return Some(GameEnding::HouseBlackjack);
        }
        if visible.contains(11) && hole.rank().is_ten_value() {
            return Some(GameEnding::HouseBlackjack);
        }
    }

    if visible.is_bust() {
        return Some(GameEnding::HouseBust);
    }

    let value = player.value();
    if value.is_twenty_one() {
        return Some(GameEnding::PlayerBlackjack);
    }
    if value.is_bust() {
        return Some(GameEnding::PlayerBust);
    }

    None
}

impl Game {
    /// Applies the player's hit or stand.
    ///
    /// A hit deals one face-up card and re-runs the game-ending check, so the
    /// returned step is another decision request or the round's outcome. A
    /// stand reveals the hole card, plays the house and settles.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] if it is not the player's turn.
    /// Returns [`RoundError::Deck`] or [`RoundError::Balance`] on a fatal
    /// failure, which aborts the game.
    pub fn submit_decision(&mut self, decision: Decision) -> Result<Step, RoundError> {
        if self.state != RoundState::PlayerTurn {
            return Err(RoundError::InvalidState);
        }

        info!(?decision, value = %self.player.hand().value(), "player decision");
        self.run(match decision {
            Decision::Hit => Event::Hit,
            Decision::Stand => Event::Stand,
        })
    }

    pub(super) fn draw_for_player(&mut self) -> Result<(), DeckError> {
        let card = self.draw(Draw::FACE_UP)?;
        self.player.hand_mut().add_card(card);
        debug!(%card, value = %self.player.hand().value(), "player hits");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Suit};
    use crate::deck::CardSource;

    /// Deals `cards` in order: the first two to the player face up, then the
    /// house up card, then the house hole card face down.
    fn table(player: [Rank; 2], up: Rank, hole: Rank) -> (Hand, Hand) {
        let cards = alloc::vec![
            Card::new(Suit::Hearts, player[0]),
            Card::new(Suit::Clubs, player[1]),
            Card::new(Suit::Spades, up),
            Card::new(Suit::Diamonds, hole),
        ];
        let mut source = CardSource::from_cards(cards, 0);
        let mut player = Hand::new();
        let mut house = Hand::new();
        player.add_card(source.draw(Draw::FACE_UP).unwrap());
        player.add_card(source.draw(Draw::FACE_UP).unwrap());
        house.add_card(source.draw(Draw::FACE_UP).unwrap());
        house.add_card(source.draw(Draw::FACE_DOWN).unwrap());
        (player, house)
    }

    #[test]
    fn ten_up_ace_hole_is_house_blackjack() {
        let (player, house) = table([Rank::Nine, Rank::Eight], Rank::King, Rank::Ace);
        assert_eq!(
            check_game_ending(&player, &house),
            Some(GameEnding::HouseBlackjack)
        );
        assert!(house.hole_card().is_some());
    }

    #[test]
    fn ace_up_ten_hole_is_house_blackjack() {
        let (player, house) = table([Rank::Nine, Rank::Eight], Rank::Ace, Rank::Queen);
        assert_eq!(
            check_game_ending(&player, &house),
            Some(GameEnding::HouseBlackjack)
        );
    }

    #[test]
    fn house_peek_wins_over_player_natural() {
        let (player, house) = table([Rank::Ace, Rank::Jack], Rank::Ten, Rank::Ace);
        assert_eq!(
            check_game_ending(&player, &house),
            Some(GameEnding::HouseBlackjack)
        );
    }

    #[test]
    fn player_natural() {
        let (player, house) = table([Rank::Ace, Rank::King], Rank::Ten, Rank::Nine);
        assert_eq!(
            check_game_ending(&player, &house),
            Some(GameEnding::PlayerBlackjack)
        );
    }

    #[test]
    fn ace_up_with_small_hole_continues() {
        let (player, house) = table([Rank::Five, Rank::Six], Rank::Ace, Rank::Six);
        assert_eq!(check_game_ending(&player, &house), None);
    }

    #[test]
    fn player_bust_after_hit() {
        let (mut player, house) = table([Rank::King, Rank::Six], Rank::Seven, Rank::Nine);
        player.add_card(Card::new(Suit::Hearts, Rank::Queen));
        assert_eq!(
            check_game_ending(&player, &house),
            Some(GameEnding::PlayerBust)
        );
    }

    #[test]
    fn house_bust_precedes_player() {
        let mut house = Hand::new();
        house.add_card(Card::new(Suit::Hearts, Rank::King));
        house.add_card(Card::new(Suit::Clubs, Rank::Queen));
        house.add_card(Card::new(Suit::Spades, Rank::Five));
        let mut player = Hand::new();
        player.add_card(Card::new(Suit::Hearts, Rank::Ace));
        player.add_card(Card::new(Suit::Clubs, Rank::King));
        assert_eq!(
            check_game_ending(&player, &house),
            Some(GameEnding::HouseBust)
        );
    }
}
