//! Round result types.

extern crate alloc;

use alloc::vec::Vec;

/// Why the round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// One or more players held 21 straight from the initial deal.
    InitialHighScore,
    /// A player reached 21 during play; the winner set still comes from full
    /// winner determination, not automatically from the 21-scorer.
    HighScore,
    /// Exactly one player was left non-busted and wins outright, at any
    /// score.
    LoneSurvivor,
    /// Every player busted. Nobody wins.
    AllBusted,
    /// Every non-busted player chose to stand.
    AllStanding,
    /// The pass cap was reached and the winner was determined
    /// unconditionally.
    RoundCap,
}

/// Result of a finished round.
///
/// Winners are stable indices into [`Round::players`]; the rendering layer
/// reads each player's hand and status from there. The set may be empty
/// (everyone busted) or hold several entries (a tie at the same score).
///
/// [`Round::players`]: crate::Round::players
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Indices of the winning players.
    pub winners: Vec<usize>,
    /// The winning hand value, or 0 when nobody won.
    pub score: u8,
    /// The termination path that ended the round.
    pub reason: EndReason,
}
