//! The card source: an active pool, a discard pile and the cards out in play.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Face, Rank, Suit};
use crate::error::DeckError;

/// How a card leaves the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    /// Record the card in the discard pile as it is drawn.
    pub discard: bool,
    /// Face the card is dealt with.
    pub face: Face,
    /// Take a uniformly random pool position instead of the top.
    pub random: bool,
}

impl Draw {
    /// Top card, face up, recorded in the discard pile.
    pub const FACE_UP: Self = Self {
        discard: true,
        face: Face::Up,
        random: false,
    };

    /// Top card, face down, recorded in the discard pile.
    pub const FACE_DOWN: Self = Self {
        discard: true,
        face: Face::Down,
        random: false,
    };

    /// Returns the same draw taken from a random position when `random` is set.
    #[must_use]
    pub const fn random(mut self, random: bool) -> Self {
        self.random = random;
        self
    }
}

/// A deck of cards with a discard pile.
///
/// Every card the source was built with is, at any time, in exactly one of
/// three places: the active pool, the discard pile, or outstanding (drawn
/// without being discarded and not yet released). The sum of the three never
/// changes.
#[derive(Debug, Clone)]
pub struct CardSource {
    pool: Vec<Card>,
    discarded: Vec<Card>,
    outstanding: Vec<Card>,
    total: usize,
    rng: ChaCha8Rng,
}

impl CardSource {
    /// Creates an unshuffled standard 52-card deck.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self::from_cards(cards, seed)
    }

    /// Creates a source whose pool is `cards`, top card first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        let total = cards.len();
        Self {
            pool: cards,
            discarded: Vec::new(),
            outstanding: Vec::new(),
            total,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffles the active pool.
    ///
    /// When `include_discarded` is set the discard pile is first folded back
    /// into the pool, leaving the pile empty. Cards in the pool are always
    /// face up.
    pub fn shuffle(&mut self, include_discarded: bool) {
        if include_discarded {
            self.pool
                .extend(self.discarded.drain(..).map(|card| card.dealt(Face::Up)));
        }
        self.pool.shuffle(&mut self.rng);
        debug!(
            pool = self.pool.len(),
            discarded = self.discarded.len(),
            "shuffled card source"
        );
    }

    /// Draws a card from the pool.
    ///
    /// With `discard` set the card is recorded in the discard pile; otherwise
    /// it is tracked as outstanding until handed back with [`Self::release`].
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyPool`] if the active pool has no cards.
    pub fn draw(&mut self, draw: Draw) -> Result<Card, DeckError> {
        if self.pool.is_empty() {
            return Err(DeckError::EmptyPool);
        }

        let index = if draw.random {
            self.rng.random_range(0..self.pool.len())
        } else {
            0
        };
        let card = self.pool.remove(index).dealt(draw.face);

        if draw.discard {
            self.discarded.push(card);
        } else {
            self.outstanding.push(card);
        }

        debug!(card = %card, index, remaining = self.pool.len(), "drew card");
        Ok(card)
    }

    /// Hands a card back to the source after it leaves a hand.
    ///
    /// Outstanding cards move to the discard pile. Cards already in the
    /// discard pile were retired when drawn; the pile's entry takes the face
    /// the card left the hand with.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::UnknownCard`] if the card is neither outstanding
    /// nor discarded.
    pub fn release(&mut self, card: Card) -> Result<(), DeckError> {
        if let Some(index) = self.outstanding.iter().position(|c| c.same_card(&card)) {
            let card = self.outstanding.swap_remove(index);
            self.discarded.push(card);
            return Ok(());
        }

        if let Some(entry) = self.discarded.iter_mut().find(|c| c.same_card(&card)) {
            *entry = card;
            return Ok(());
        }

        Err(DeckError::UnknownCard)
    }

    /// Renders the pool in its current order.
    #[must_use]
    pub fn show(&self) -> String {
        let mut out = String::from("This deck contains [");
        for (i, card) in self.pool.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&card.to_string());
        }
        out.push(']');
        out
    }

    /// Returns the number of cards in the active pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Returns whether the active pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Returns the cards in the active pool, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.pool
    }

    /// Returns the discard pile.
    #[must_use]
    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    /// Returns the number of cards drawn without discard and not yet released.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.outstanding.len()
    }

    /// Returns the number of cards the source was built with.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }
}
