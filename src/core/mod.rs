//! Core engine types: seats, state, actions, RNG, configuration, errors.
//!
//! This module holds the data the rest of the crate passes around.
//! Nothing here knows the rules of the game.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{EngineConfig, DEFAULT_OPPONENT_DELAY_MS, INITIAL_HAND_SIZE};
pub use error::{Error, InvariantViolation, Rejection};
pub use player::Player;
pub use rng::GameRng;
pub use state::{GameState, Status};
