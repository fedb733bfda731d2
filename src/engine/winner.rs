//! Termination predicates and winner determination.

extern crate alloc;

use alloc::vec::Vec;

use crate::player::Player;
use crate::result::{EndReason, RoundResult};

use super::Round;

/// Scans all players and returns the winner set and the winning score.
///
/// Busted players are excluded. The set holds everyone tied at the highest
/// hand value; it grows on an equal value and resets on a strictly higher
/// one. With no non-busted player left, the set is empty and the score 0.
///
/// This is the single authority for "who won" whenever a round ends other
/// than by a lone survivor.
#[must_use]
pub fn determine_winners(players: &[Player]) -> (Vec<usize>, u8) {
    let mut winners = Vec::new();
    let mut highest: u8 = 0;

    for (index, player) in players.iter().enumerate() {
        if player.is_busted() {
            continue;
        }

        let value = player.hand_value();
        if value > highest {
            highest = value;
            winners.clear();
            winners.push(index);
        } else if value == highest {
            winners.push(index);
        }
    }

    (winners, highest)
}

impl Round {
    /// Builds a result from full winner determination.
    pub(super) fn winner_result(&self, reason: EndReason) -> RoundResult {
        let (winners, score) = determine_winners(self.players());
        RoundResult {
            winners,
            score,
            reason,
        }
    }

    /// Checks the termination predicates, in order, and returns the result
    /// of the first that matches.
    ///
    /// Lone survivor wins outright regardless of score; a total wipeout
    /// leaves an empty winner set; all survivors standing hands off to
    /// winner determination.
    pub(super) fn check_termination(&self) -> Option<RoundResult> {
        let non_busted: Vec<usize> = self
            .players()
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_busted())
            .map(|(i, _)| i)
            .collect();

        if let [survivor] = non_busted[..] {
            let score = self.players()[survivor].hand_value();
            return Some(RoundResult {
                winners: non_busted,
                score,
                reason: EndReason::LoneSurvivor,
            });
        }

        if non_busted.is_empty() {
            return Some(RoundResult {
                winners: Vec::new(),
                score: 0,
                reason: EndReason::AllBusted,
            });
        }

        if non_busted
            .iter()
            .all(|&i| self.players()[i].is_standing())
        {
            return Some(self.winner_result(EndReason::AllStanding));
        }

        None
    }
}
