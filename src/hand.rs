//! Hands and hand valuation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank};

/// The best possible hand total.
pub const BLACKJACK: u8 = 21;

/// The candidate totals of a hand.
///
/// A hand holding a visible ace has two readings, the hard total (every ace
/// counts one) and the soft total (one ace counts eleven). Both are kept
/// while neither busts. A soft reading of exactly 21 collapses the set to
/// `{21}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandValue {
    low: u8,
    high: Option<u8>,
}

impl HandValue {
    const fn single(total: u8) -> Self {
        Self {
            low: total,
            high: None,
        }
    }

    /// Builds a two-candidate value, dropping a bust reading when the other
    /// one stands.
    const fn pair(hard: u8, soft: u8) -> Self {
        match (hard > BLACKJACK, soft > BLACKJACK) {
            (true, false) => Self::single(soft),
            (false, true) => Self::single(hard),
            _ if hard == soft => Self::single(hard),
            _ if hard < soft => Self {
                low: hard,
                high: Some(soft),
            },
            _ => Self {
                low: soft,
                high: Some(hard),
            },
        }
    }

    /// Evaluates the visible cards of a hand. Face-down cards count zero.
    #[must_use]
    pub fn of(cards: &[Card]) -> Self {
        let mut base: u8 = 0;
        let mut ace = false;

        for card in cards.iter().filter(|c| c.is_face_up()) {
            base = base.saturating_add(card.visible_value());
            ace |= card.rank() == Rank::Ace;
        }

        if !ace {
            return Self::single(base);
        }

        let soft = base.saturating_add(10);
        match soft.cmp(&BLACKJACK) {
            core::cmp::Ordering::Equal => Self::single(BLACKJACK),
            core::cmp::Ordering::Less => Self::pair(base, soft),
            core::cmp::Ordering::Greater => Self::single(base),
        }
    }

    /// The smallest candidate. Used to detect a bust.
    #[must_use]
    pub const fn min(&self) -> u8 {
        self.low
    }

    /// The largest candidate. Used for comparisons and made hands.
    #[must_use]
    pub const fn max(&self) -> u8 {
        match self.high {
            Some(high) => high,
            None => self.low,
        }
    }

    /// Returns whether `total` is one of the candidates.
    #[must_use]
    pub fn contains(&self, total: u8) -> bool {
        self.low == total || self.high == Some(total)
    }

    /// Returns the candidates in ascending order.
    pub fn totals(&self) -> impl Iterator<Item = u8> {
        core::iter::once(self.low).chain(self.high)
    }

    /// Returns whether every candidate exceeds 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.low > BLACKJACK
    }

    /// Returns whether the best candidate is exactly 21.
    #[must_use]
    pub const fn is_twenty_one(&self) -> bool {
        self.max() == BLACKJACK
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.high {
            Some(high) => write!(f, "{} or {high}", self.low),
            None => write!(f, "{}", self.low),
        }
    }
}

/// An ordered collection of cards held by one party.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the candidate totals of the visible cards.
    #[must_use]
    pub fn value(&self) -> HandValue {
        HandValue::of(&self.cards)
    }

    /// Returns the first face-down card without revealing it.
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.cards.iter().find(|c| !c.is_face_up())
    }

    /// Turns every face-down card up. Returns the cards that flipped.
    pub fn reveal_all(&mut self) -> Vec<Card> {
        self.cards
            .iter_mut()
            .filter_map(|card| card.reveal().then_some(*card))
            .collect()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Empties the hand, handing its cards to the caller.
    pub fn take_cards(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cards.as_slice() {
            [] => f.write_str("nothing"),
            [only] => write!(f, "{only}"),
            [init @ .., last] => {
                for (i, card) in init.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{card}")?;
                }
                write!(f, " and {last}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;
    use crate::card::{Face, Suit};

    fn up(rank: Rank) -> Card {
        Card::new(Suit::Hearts, rank)
    }

    fn down(rank: Rank) -> Card {
        Card::new(Suit::Spades, rank).dealt(Face::Down)
    }

    fn totals(cards: &[Card]) -> Vec<u8> {
        HandValue::of(cards).totals().collect()
    }

    #[test]
    fn empty_hand_is_zero() {
        assert_eq!(totals(&[]), vec![0]);
    }

    #[test]
    fn hard_hands_have_one_total() {
        assert_eq!(totals(&[up(Rank::King), up(Rank::Seven)]), vec![17]);
        assert_eq!(
            totals(&[up(Rank::Jack), up(Rank::Queen), up(Rank::Five)]),
            vec![25]
        );
    }

    #[test]
    fn single_ace_gives_soft_and_hard() {
        assert_eq!(totals(&[up(Rank::Ace), up(Rank::Six)]), vec![7, 17]);
        assert_eq!(totals(&[up(Rank::Ace)]), vec![1, 11]);
    }

    #[test]
    fn soft_twenty_one_collapses() {
        assert_eq!(totals(&[up(Rank::Ace), up(Rank::King)]), vec![21]);
        assert_eq!(
            totals(&[up(Rank::Ace), up(Rank::Ace), up(Rank::Nine)]),
            vec![21]
        );
    }

    #[test]
    fn soft_reading_dropped_when_it_busts() {
        assert_eq!(
            totals(&[up(Rank::Ace), up(Rank::Nine), up(Rank::Five)]),
            vec![15]
        );
        let value = HandValue::of(&[up(Rank::Ace), up(Rank::King), up(Rank::Queen), up(Rank::Five)]);
        assert!(value.is_bust());
        assert_eq!(value.min(), 26);
    }

    #[test]
    fn pair_drops_bust_candidate() {
        assert_eq!(HandValue::pair(15, 25), HandValue::single(15));
        assert_eq!(HandValue::pair(23, 13), HandValue::single(13));
        assert_eq!(HandValue::pair(23, 25).min(), 23);
    }

    #[test]
    fn face_down_cards_count_zero() {
        let mut hand = Hand::new();
        hand.add_card(up(Rank::Nine));
        hand.add_card(down(Rank::Ace));
        assert_eq!(hand.value(), HandValue::single(9));
        assert!(hand.hole_card().is_some());

        let flipped = hand.reveal_all();
        assert_eq!(flipped.len(), 1);
        assert!(hand.hole_card().is_none());
        assert_eq!(hand.value().totals().collect::<Vec<_>>(), vec![10, 20]);
        assert!(hand.reveal_all().is_empty());
    }

    #[test]
    fn display_joins_cards() {
        let mut hand = Hand::new();
        assert_eq!(hand.to_string(), "nothing");
        hand.add_card(up(Rank::Ace));
        assert_eq!(hand.to_string(), "ace of hearts");
        hand.add_card(down(Rank::Two));
        assert_eq!(hand.to_string(), "ace of hearts and hidden");
        hand.add_card(up(Rank::Three));
        assert_eq!(
            hand.to_string(),
            "ace of hearts, hidden and three of hearts"
        );
        assert_eq!(hand.value().to_string(), "4 or 14");
    }
}
