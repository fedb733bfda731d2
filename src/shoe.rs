//! The shoe: a draw-without-replacement pool of undealt cards.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, SUITS};
use crate::error::DrawError;

/// The pool of undealt cards shared by every player.
///
/// A card drawn from the shoe moves into exactly one player's hand and is
/// never returned. The cards are public so callers (and tests) can stack the
/// pool directly; [`Shoe::draw`] takes from the end.
#[derive(Debug, Clone, Default)]
pub struct Shoe {
    /// Undealt cards. The last element is drawn next.
    pub cards: Vec<Card>,
}

impl Shoe {
    /// Creates an empty shoe.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a shuffled shoe from the specified number of standard decks.
    ///
    /// Each deck contributes 13 ranks in all four suits, one Ace per suit.
    /// Deck-count bounds (1..=8) are the caller's responsibility; the shoe
    /// accepts any count.
    #[must_use]
    pub fn shuffled(decks: u8, rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in SUITS {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Removes and returns one card from the pool.
    ///
    /// The pool is shuffled when filled, so taking from the end is a
    /// uniformly random draw without replacement.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyPool`] if the pool is exhausted. Normal
    /// play never gets there, but the contract is enforced rather than
    /// assumed.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop().ok_or(DrawError::EmptyPool)
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pool is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
