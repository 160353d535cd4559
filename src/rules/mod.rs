//! Game rules.
//!
//! - `is_playable`: the pure legality predicate
//! - `TurnEngine`: the state machine that deals, applies moves and detects
//!   the win
//!
//! The turn engine is the only producer of new `GameState`s.

pub mod engine;
pub mod playability;

pub use engine::{LegalActions, TurnEngine};
pub use playability::{is_playable, is_playable_in};
