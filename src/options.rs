//! Round configuration options.

/// Minimum number of players the outer layer should accept.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of players the outer layer should accept.
pub const MAX_PLAYERS: usize = 7;

/// Maximum number of decks the outer layer should accept.
pub const MAX_DECKS: u8 = 8;

/// Configuration options for a round.
///
/// The engine does not validate bounds; the setup layer is expected to hand
/// it values inside [`MIN_PLAYERS`]..=[`MAX_PLAYERS`] and 1..=[`MAX_DECKS`].
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pooljack::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_decks(4)
///     .with_max_rounds(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Maximum number of passes over the player list before the winner is
    /// determined unconditionally.
    pub max_rounds: u8,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            decks: 2,
            max_rounds: 5,
        }
    }
}

impl RoundOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use pooljack::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the round cap.
    ///
    /// # Example
    ///
    /// ```
    /// use pooljack::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_max_rounds(3);
    /// assert_eq!(options.max_rounds, 3);
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: u8) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}
