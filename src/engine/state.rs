//! Round phase types.

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Players are joining; the initial deal has not happened yet.
    Dealing,
    /// Waiting for the current player's hit/stand decision.
    PlayerTurn,
    /// The round has ended and a result is available.
    Finished,
}

/// The current position in the turn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnCursor {
    /// The current pass over the player list, starting at 1.
    pub pass: u8,
    /// Index of the player whose decision is awaited.
    pub player: usize,
}
