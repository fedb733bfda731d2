//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur when drawing from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The pool has no cards left. Fatal to the current round.
    #[error("no cards left in the pool")]
    EmptyPool,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round phase for dealing.
    #[error("invalid round phase for dealing")]
    InvalidState,
    /// No players have joined.
    #[error("no players have joined")]
    NoPlayers,
    /// Not enough cards in the shoe for two per player.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
}

/// Errors that can occur during a player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Invalid round phase for taking a turn.
    #[error("invalid round phase for taking a turn")]
    InvalidState,
    /// No cards left in the pool.
    #[error("no cards left in the pool")]
    EmptyPool,
}
