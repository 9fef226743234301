//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
            Self::Spades => "spades",
        };
        f.write_str(name)
    }
}

/// Card rank. Jokers never take part in blackjack and have no rank here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the base value of the rank: Ace counts 1, faces count 10.
    #[must_use]
    pub const fn base_value(self) -> u8 {
        match self {
            Self::Jack | Self::Queen | Self::King => 10,
            other => other as u8,
        }
    }

    /// Returns whether the rank is worth ten (Ten, Jack, Queen or King).
    #[must_use]
    pub const fn is_ten_value(self) -> bool {
        matches!(self, Self::Ten | Self::Jack | Self::Queen | Self::King)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ace => "ace",
            Self::Two => "two",
            Self::Three => "three",
            Self::Four => "four",
            Self::Five => "five",
            Self::Six => "six",
            Self::Seven => "seven",
            Self::Eight => "eight",
            Self::Nine => "nine",
            Self::Ten => "ten",
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
        };
        f.write_str(name)
    }
}

/// Which side of a card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Face {
    /// Rank and suit are visible and count towards hand values.
    #[default]
    Up,
    /// Card is hidden and counts as zero.
    Down,
}

/// A playing card.
///
/// Suit and rank never change once the card is created. Only the face flag
/// moves, and within a round it only moves from [`Face::Down`] to [`Face::Up`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    face: Face,
}

impl Card {
    /// Creates a new face-up card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face: Face::Up,
        }
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns which side of the card is showing.
    #[must_use]
    pub const fn face(&self) -> Face {
        self.face
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        matches!(self.face, Face::Up)
    }

    /// Returns whether `other` is the same physical card, ignoring the face.
    #[must_use]
    pub fn same_card(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }

    /// Turns the card face up. Returns `true` if it was face down.
    pub const fn reveal(&mut self) -> bool {
        let flipped = matches!(self.face, Face::Down);
        self.face = Face::Up;
        flipped
    }

    /// Value this card adds to a hand total: zero while face down.
    #[must_use]
    pub const fn visible_value(&self) -> u8 {
        if self.is_face_up() {
            self.rank.base_value()
        } else {
            0
        }
    }

    /// Sets the face as the card leaves the source. Only the source deals.
    pub(crate) const fn dealt(mut self, face: Face) -> Self {
        self.face = face;
        self
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_face_up() {
            write!(f, "{} of {}", self.rank, self.suit)
        } else {
            f.write_str("hidden")
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn face_cards_count_ten() {
        assert_eq!(Rank::Ace.base_value(), 1);
        assert_eq!(Rank::Seven.base_value(), 7);
        for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
            assert_eq!(rank.base_value(), 10);
            assert!(rank.is_ten_value());
        }
        assert!(!Rank::Nine.is_ten_value());
    }

    #[test]
    fn hidden_card_counts_zero_until_revealed() {
        let mut card = Card::new(Suit::Spades, Rank::King).dealt(Face::Down);
        assert_eq!(card.visible_value(), 0);
        assert_eq!(card.to_string(), "hidden");

        assert!(card.reveal());
        assert!(!card.reveal());
        assert_eq!(card.visible_value(), 10);
        assert_eq!(card.to_string(), "king of spades");
    }
}
