//! Hand representation and soft-ace valuation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// The round-ending hand value.
pub const HIGH_SCORE: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    // Demote aces from 11 to 1 one at a time, only as far as needed.
    while value > HIGH_SCORE && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= HIGH_SCORE;
    (value, is_soft)
}

/// An ordered sequence of cards held by a player.
///
/// Order is insertion order; it matters for display but never for valuation.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand.
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

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1,
    /// applied ace by ace. The value is recomputed on every call; it is
    /// never cached.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is over [`HIGH_SCORE`].
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.value() > HIGH_SCORE
    }

    /// Returns whether the hand is exactly [`HIGH_SCORE`].
    #[must_use]
    pub fn is_high_score(&self) -> bool {
        self.value() == HIGH_SCORE
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
}
