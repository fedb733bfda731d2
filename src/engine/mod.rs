//! Round engine: turn loop, termination, and winner determination.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::DealError;
use crate::hand::HIGH_SCORE;
use crate::options::RoundOptions;
use crate::player::Player;
use crate::result::{EndReason, RoundResult};
use crate::shoe::Shoe;

mod state;
mod turns;
mod winner;

pub use state::{RoundPhase, TurnCursor};
pub use turns::{Decision, DecisionSource};
pub use winner::determine_winners;

/// A single round of pool blackjack.
///
/// The round owns the shoe and the player arena; players are addressed by
/// the index returned from [`Round::join`], so external code can never alias
/// or mutate them mid-round. Turns run strictly one at a time in join order,
/// and termination is re-evaluated after every state change.
pub struct Round {
    /// Cards available for drawing.
    pub shoe: Shoe,
    /// Round options.
    pub options: RoundOptions,
    /// Players, in join (and therefore turn) order.
    players: Vec<Player>,
    /// Current phase.
    phase: RoundPhase,
    /// Current position in the turn loop.
    cursor: TurnCursor,
    /// The result, once the round has finished.
    result: Option<RoundResult>,
}

impl Round {
    /// Creates a new round with the given seed.
    ///
    /// The shoe is filled with `options.decks` decks and shuffled; the same
    /// seed always produces the same sequence of draws.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pooljack::{Round, RoundOptions};
    ///
    /// let round = Round::new(RoundOptions::default(), 42);
    /// let _ = round;
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::shuffled(options.decks, &mut rng);

        Self {
            shoe,
            options,
            players: Vec::new(),
            phase: RoundPhase::Dealing,
            cursor: TurnCursor { pass: 1, player: 0 },
            result: None,
        }
    }

    /// Adds a player and returns their index handle.
    ///
    /// Joining is only meaningful before the initial deal; the player count
    /// bounds (2..=7) are the setup layer's concern.
    pub fn join(&mut self, name: impl Into<String>) -> usize {
        self.players.push(Player::new(name.into()));
        self.players.len() - 1
    }

    /// Returns the players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the current turn cursor.
    #[must_use]
    pub const fn turn(&self) -> TurnCursor {
        self.cursor
    }

    /// Returns the index of the player whose decision is awaited.
    ///
    /// Returns `None` before the deal and after the round has finished.
    #[must_use]
    pub const fn current_player(&self) -> Option<usize> {
        match self.phase {
            RoundPhase::PlayerTurn => Some(self.cursor.player),
            RoundPhase::Dealing | RoundPhase::Finished => None,
        }
    }

    /// Returns the result once the round has finished.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Deals two cards to every player, one pass per card, in join order.
    ///
    /// If any player holds 21 straight from the deal, the round finishes
    /// immediately: all such players form the winner set (a tie if more than
    /// one) and no turns are taken. Otherwise the round moves to the first
    /// player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already been dealt, no players have
    /// joined, or the shoe cannot cover two cards per player.
    pub fn deal_initial_cards(&mut self) -> Result<(), DealError> {
        if self.phase != RoundPhase::Dealing {
            return Err(DealError::InvalidState);
        }
        if self.players.is_empty() {
            return Err(DealError::NoPlayers);
        }
        if self.shoe.len() < self.players.len() * 2 {
            return Err(DealError::NotEnoughCards);
        }

        // First deal, then second deal, each in player order.
        for _ in 0..2 {
            for player in &mut self.players {
                let card = self
                    .shoe
                    .draw()
                    .map_err(|_| DealError::NotEnoughCards)?;
                player.add_card(card);
            }
        }

        let dealt_21: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_high_score())
            .map(|(i, _)| i)
            .collect();

        if dealt_21.is_empty() {
            self.phase = RoundPhase::PlayerTurn;
        } else {
            self.finish(RoundResult {
                winners: dealt_21,
                score: HIGH_SCORE,
                reason: EndReason::InitialHighScore,
            });
        }

        Ok(())
    }

    /// Marks the round finished with the given result.
    fn finish(&mut self, result: RoundResult) {
        self.phase = RoundPhase::Finished;
        self.result = Some(result);
    }
}
