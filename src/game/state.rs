//! Round states and the transition table.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use crate::error::TransitionError;
use crate::result::{GameEnding, RoundOutcome};

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// Waiting for the next round to start.
    RoundStart,
    /// Waiting for the player's wager.
    BetCollection,
    /// Dealing the opening cards.
    InitialDeal,
    /// Checking for naturals and busts.
    GameEndingCheck,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// House draws to its standing total.
    DealerTurn,
    /// Moving the bet.
    Settlement,
    /// Round settled; waiting to continue or stop.
    RoundEnd,
    /// The player stopped playing.
    Finished,
    /// A fatal error ended the game.
    Aborted,
}

/// Input to the round state machine.
///
/// Bet, decision and continue events come from the player; the rest are
/// produced by applying effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Begin a round.
    Start,
    /// A valid bet was recorded.
    BetPlaced,
    /// Opening cards are on the table.
    Dealt,
    /// Result of the game-ending check.
    Checked(Option<GameEnding>),
    /// Player takes a card.
    Hit,
    /// Player keeps the hand.
    Stand,
    /// House reached its standing total.
    DealerDone,
    /// The bet was settled.
    Settled(RoundOutcome),
    /// Player plays another round.
    Continue,
    /// Player leaves the table.
    Stop,
    /// A fatal error occurred.
    Abort,
}

/// Work the table performs on entering a new state, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Hand every card in both hands back to the source.
    ClearHands,
    /// Fold the discard pile back into the pool and shuffle.
    Shuffle,
    /// Deal two cards each, the house's second face down.
    DealInitial,
    /// Run the game-ending check and report it as [`Event::Checked`].
    CheckGameEnding,
    /// Deal one face-up card to the player.
    DrawForPlayer,
    /// Turn the house hole card face up.
    RevealHole,
    /// Draw house cards until it stands; reports [`Event::DealerDone`].
    PlayDealer,
    /// Settle the bet; reports [`Event::Settled`].
    Settle(Option<GameEnding>),
    /// Reset the wager so the next round asks for a new one.
    ClearBet,
}

/// Computes the next state and the effects to apply for an event.
///
/// This function is pure: it never touches cards or money.
///
/// # Errors
///
/// Returns a [`TransitionError`] if `event` is not accepted in `state`.
pub fn transition(
    state: RoundState,
    event: Event,
) -> Result<(RoundState, Vec<Effect>), TransitionError> {
    use RoundState as S;

    let next = match (state, event) {
        (S::Finished | S::Aborted, _) => return Err(TransitionError { state, event }),
        (_, Event::Abort) => (S::Aborted, vec![]),
        (S::RoundStart, Event::Start) => {
            (S::BetCollection, vec![Effect::ClearHands, Effect::Shuffle])
        }
        (S::BetCollection, Event::BetPlaced) => (S::InitialDeal, vec![Effect::DealInitial]),
        (S::InitialDeal, Event::Dealt) => (S::GameEndingCheck, vec![Effect::CheckGameEnding]),
        (S::GameEndingCheck, Event::Checked(Some(ending))) => (
            S::Settlement,
            vec![Effect::RevealHole, Effect::Settle(Some(ending))],
        ),
        (S::GameEndingCheck, Event::Checked(None)) => (S::PlayerTurn, vec![]),
        (S::PlayerTurn, Event::Hit) => (
            S::GameEndingCheck,
            vec![Effect::DrawForPlayer, Effect::CheckGameEnding],
        ),
        (S::PlayerTurn, Event::Stand) => {
            (S::DealerTurn, vec![Effect::RevealHole, Effect::PlayDealer])
        }
        (S::DealerTurn, Event::DealerDone) => (S::Settlement, vec![Effect::Settle(None)]),
        (S::Settlement, Event::Settled(_)) => (S::RoundEnd, vec![]),
        (S::RoundEnd, Event::Continue) => (S::RoundStart, vec![Effect::ClearBet]),
        (S::RoundEnd, Event::Stop) => (S::Finished, vec![]),
        _ => return Err(TransitionError { state, event }),
    };

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_round_path() {
        let (state, effects) = transition(RoundState::RoundStart, Event::Start).unwrap();
        assert_eq!(state, RoundState::BetCollection);
        assert_eq!(effects, vec![Effect::ClearHands, Effect::Shuffle]);

        let (state, _) = transition(state, Event::BetPlaced).unwrap();
        let (state, effects) = transition(state, Event::Dealt).unwrap();
        assert_eq!(effects, vec![Effect::CheckGameEnding]);
        let (state, effects) = transition(state, Event::Checked(None)).unwrap();
        assert_eq!(state, RoundState::PlayerTurn);
        assert!(effects.is_empty());

        let (state, effects) = transition(state, Event::Stand).unwrap();
        assert_eq!(state, RoundState::DealerTurn);
        assert_eq!(effects, vec![Effect::RevealHole, Effect::PlayDealer]);

        let (state, _) = transition(state, Event::DealerDone).unwrap();
        let (state, _) = transition(state, Event::Settled(RoundOutcome::Push)).unwrap();
        assert_eq!(state, RoundState::RoundEnd);

        let (state, effects) = transition(state, Event::Continue).unwrap();
        assert_eq!(state, RoundState::RoundStart);
        assert_eq!(effects, vec![Effect::ClearBet]);
    }

    #[test]
    fn hit_reenters_game_ending_check() {
        let (state, effects) = transition(RoundState::PlayerTurn, Event::Hit).unwrap();
        assert_eq!(state, RoundState::GameEndingCheck);
        assert_eq!(effects, vec![Effect::DrawForPlayer, Effect::CheckGameEnding]);

        let (state, _) = transition(state, Event::Checked(None)).unwrap();
        assert_eq!(state, RoundState::PlayerTurn);
    }

    #[test]
    fn game_ending_skips_player_and_dealer_turns() {
        let (state, effects) = transition(
            RoundState::GameEndingCheck,
            Event::Checked(Some(GameEnding::HouseBlackjack)),
        )
        .unwrap();
        assert_eq!(state, RoundState::Settlement);
        assert_eq!(
            effects,
            vec![
                Effect::RevealHole,
                Effect::Settle(Some(GameEnding::HouseBlackjack))
            ]
        );
    }

    #[test]
    fn rejects_out_of_order_events() {
        let err = transition(RoundState::BetCollection, Event::Hit).unwrap_err();
        assert_eq!(err.state, RoundState::BetCollection);
        assert_eq!(err.event, Event::Hit);

        assert!(transition(RoundState::DealerTurn, Event::Stand).is_err());
        assert!(transition(RoundState::Finished, Event::Start).is_err());
        assert!(transition(RoundState::Aborted, Event::Abort).is_err());
    }

    #[test]
    fn stop_finishes() {
        let (state, effects) = transition(RoundState::RoundEnd, Event::Stop).unwrap();
        assert_eq!(state, RoundState::Finished);
        assert!(effects.is_empty());
    }
}
