//! Policies for the automated seat.
//!
//! The host invokes a policy whenever it is the automated seat's turn and
//! applies the returned action through the turn engine like any other move.

pub mod opponent;

pub use opponent::{choose_wild_suit, GreedyOpponent, OpponentPolicy, UniformOpponent};
