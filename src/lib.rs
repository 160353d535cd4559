//! # crazy-eights
//!
//! A two-player Crazy Eights engine: one human seat, one automated opponent.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: Every move takes a `GameState` and returns
//!    its successor. Piles are `im` persistent vectors, so snapshots are cheap
//!    to clone and share structure.
//!
//! 2. **Illegal moves are no-ops**: A move with unmet preconditions returns
//!    the input state unchanged. Nothing in the move path returns an error.
//!
//! 3. **Single writer**: A `Session` owns the one writable state and
//!    serializes user intents and automated moves through the engine.
//!
//! ## Rules
//!
//! - 52-card deck, 8 cards dealt to each seat, one card face up
//! - Play a card matching the discard top's suit or rank
//! - Eights are wild: play one any time and call the suit to follow
//! - Can't (or won't) play? Draw one. A playable draw keeps the turn.
//! - First to empty their hand wins
//!
//! The discard pile is never reshuffled into an exhausted deck; drawing from
//! an empty deck passes the turn.
//!
//! ## Modules
//!
//! - `core`: Seats, state, actions, RNG, configuration, errors
//! - `cards`: Card values and the deck factory
//! - `rules`: Playability predicate and the turn engine
//! - `policy`: Decision procedures for the automated seat
//! - `session`: Host-side owner of the game with the opponent timer

pub mod cards;
pub mod core;
pub mod policy;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, EngineConfig, Error, GameRng, GameState, InvariantViolation, Player,
    Rejection, Status, INITIAL_HAND_SIZE,
};

pub use crate::cards::{create_deck, create_deck_with, standard_deck, Card, CardId, Rank, Suit};

pub use crate::rules::{is_playable, LegalActions, TurnEngine};

pub use crate::policy::{choose_wild_suit, GreedyOpponent, OpponentPolicy, UniformOpponent};

pub use crate::session::{PendingMove, Session};
