//! Card types and deck utilities.

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

/// All four suits, in deck-fill order.
pub const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the nominal value of the card.
    ///
    /// Aces count as 11 here; hand evaluation demotes them to 1 as needed.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self.rank {
            1 => 11,
            2..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank == 1
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
