//! Player state and the per-round status machine.

extern crate alloc;

use alloc::string::String;

use crate::card::Card;
use crate::hand::{HIGH_SCORE, Hand};

/// Player status within a round.
///
/// `Standing` and `Busted` are terminal for the round: once entered they are
/// never left, and the player is skipped for all remaining turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Player can still take turns.
    Active,
    /// Player has stood and keeps their current hand.
    Standing,
    /// Player has busted (over 21).
    Busted,
}

/// A player: a name, a hand, and a round status.
#[derive(Debug, Clone)]
pub struct Player {
    /// Display name. Not required to be unique.
    name: String,
    /// Cards dealt to this player, in deal order.
    hand: Hand,
    /// Current round status.
    status: PlayerStatus,
}

impl Player {
    /// Creates a new active player with an empty hand.
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            hand: Hand::new(),
            status: PlayerStatus::Active,
        }
    }

    /// Adds a card to the hand and recomputes the status.
    ///
    /// The player is `Busted` if and only if the hand value exceeds 21; a
    /// busted player stays busted no matter what is added afterwards.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);

        if self.hand.value() > HIGH_SCORE {
            self.status = PlayerStatus::Busted;
        }
    }

    /// Moves an active player to `Standing`.
    ///
    /// Terminal statuses are never reversed; standing a busted or already
    /// standing player has no effect.
    pub const fn stand(&mut self) {
        if matches!(self.status, PlayerStatus::Active) {
            self.status = PlayerStatus::Standing;
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the player's current status.
    #[must_use]
    pub const fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Calculates the current hand value.
    #[must_use]
    pub fn hand_value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the player has busted.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.status == PlayerStatus::Busted
    }

    /// Returns whether the player is standing.
    #[must_use]
    pub fn is_standing(&self) -> bool {
        self.status == PlayerStatus::Standing
    }

    /// Returns whether the player holds exactly 21.
    #[must_use]
    pub fn is_high_score(&self) -> bool {
        self.hand.is_high_score()
    }
}
