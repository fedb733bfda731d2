//! Per-turn operations and the decision-driven turn loop.

use crate::card::Card;
use crate::error::TurnError;
use crate::player::{Player, PlayerStatus};
use crate::result::{EndReason, RoundResult};

use super::{Round, RoundPhase};

/// A resolved hit/stand decision.
///
/// Prompting, parsing, and re-prompting on malformed input are entirely the
/// caller's job; the engine only ever sees one of these two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Draw one card.
    Hit,
    /// Keep the current hand for the rest of the round.
    Stand,
}

/// An external source of hit/stand decisions.
///
/// Implemented for closures, so tests can script a fixed decision sequence:
///
/// ```
/// use pooljack::{Decision, Player};
///
/// let mut always_stand = |_: &Player| Decision::Stand;
/// let _ = &mut always_stand;
/// ```
pub trait DecisionSource {
    /// Returns the decision for the given player's turn.
    fn decide(&mut self, player: &Player) -> Decision;
}

impl<F> DecisionSource for F
where
    F: FnMut(&Player) -> Decision,
{
    fn decide(&mut self, player: &Player) -> Decision {
        self(player)
    }
}

impl Round {
    fn ensure_player_turn(&self) -> Result<usize, TurnError> {
        if self.phase != RoundPhase::PlayerTurn {
            return Err(TurnError::InvalidState);
        }
        Ok(self.cursor.player)
    }

    /// Current player's action: Stand (keep the hand, leave the round loop).
    ///
    /// # Errors
    ///
    /// Returns an error if no player turn is in progress.
    pub fn stand(&mut self) -> Result<(), TurnError> {
        let index = self.ensure_player_turn()?;

        self.players[index].stand();
        self.after_turn();

        Ok(())
    }

    /// Current player's action: Hit (draw one card).
    ///
    /// Busting moves the player to `Busted`. Reaching exactly 21 ends the
    /// round on the spot through full winner determination — the 21-scorer
    /// is not automatically the winner, so a tie with another 21 elsewhere
    /// is possible.
    ///
    /// # Errors
    ///
    /// Returns an error if no player turn is in progress or the pool is
    /// exhausted.
    pub fn hit(&mut self) -> Result<Card, TurnError> {
        let index = self.ensure_player_turn()?;

        let card = self.shoe.draw().map_err(|_| TurnError::EmptyPool)?;
        let player = &mut self.players[index];
        player.add_card(card);

        if !player.is_busted() && player.is_high_score() {
            let result = self.winner_result(EndReason::HighScore);
            self.finish(result);
            return Ok(card);
        }

        self.after_turn();

        Ok(card)
    }

    /// Runs every turn until the round finishes, pulling each decision from
    /// the given source.
    ///
    /// With a seeded round and a scripted source the whole round is
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial deal has not happened yet or a hit
    /// finds the pool exhausted.
    pub fn play<S>(&mut self, source: &mut S) -> Result<RoundResult, TurnError>
    where
        S: DecisionSource + ?Sized,
    {
        if self.phase == RoundPhase::Dealing {
            return Err(TurnError::InvalidState);
        }

        while self.phase == RoundPhase::PlayerTurn {
            let index = self.cursor.player;
            match source.decide(&self.players[index]) {
                Decision::Hit => {
                    self.hit()?;
                }
                Decision::Stand => self.stand()?,
            }
        }

        self.result.clone().ok_or(TurnError::InvalidState)
    }

    /// Re-evaluates termination after a transition, then moves the cursor.
    fn after_turn(&mut self) {
        if let Some(result) = self.check_termination() {
            self.finish(result);
        } else {
            self.advance();
        }
    }

    /// Moves the cursor to the next active player, bumping the pass count
    /// when the list wraps. Standing and busted players are skipped without
    /// being asked for a decision.
    fn advance(&mut self) {
        let mut from = self.cursor.player + 1;

        loop {
            let next = (from..self.players.len())
                .find(|&i| self.players[i].status() == PlayerStatus::Active);

            if let Some(index) = next {
                self.cursor.player = index;

                // A player already at 21 at the start of their turn (from a
                // card taken earlier in this pass) ends the round without
                // their own turn being taken.
                if self.players[index].is_high_score() {
                    let result = self.winner_result(EndReason::HighScore);
                    self.finish(result);
                }
                return;
            }

            self.cursor.pass += 1;
            if self.cursor.pass > self.options.max_rounds {
                let result = self.winner_result(EndReason::RoundCap);
                self.finish(result);
                return;
            }
            from = 0;
        }
    }
}
