//! A multi-player pool blackjack round engine with optional `no_std` support.
//!
//! Players play against a shared pool of undealt cards rather than a dealer
//! hand: everyone draws from the same [`Shoe`], and the highest non-busted
//! hand wins the round. The [`Round`] type manages the initial deal, the
//! per-player turn loop, and the termination and winner logic; all prompting
//! and printing stays outside the crate.
//!
//! # Example
//!
//! ```no_run
//! use pooljack::{Round, RoundOptions};
//!
//! let mut round = Round::new(RoundOptions::default(), 42);
//! round.join("Alice");
//! round.join("Bob");
//! let _ = round;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod engine;
pub mod error;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, SUITS, Suit};
pub use engine::{Decision, DecisionSource, Round, RoundPhase, TurnCursor, determine_winners};
pub use error::{DealError, DrawError, TurnError};
pub use hand::{HIGH_SCORE, Hand};
pub use options::{MAX_DECKS, MAX_PLAYERS, MIN_PLAYERS, RoundOptions};
pub use player::{Player, PlayerStatus};
pub use result::{EndReason, RoundResult};
pub use shoe::Shoe;
