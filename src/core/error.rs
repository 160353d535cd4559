//! Error types.
//!
//! Game moves never fail: an illegal move is a no-op. `Error` covers the
//! surfaces around the game (parsing ids, loading configuration), and
//! `Rejection` names why a move would be a no-op.

use thiserror::Error;

use super::player::Player;
use crate::cards::CardId;

/// Errors from parsing and configuration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid card id: {0:?}")]
    InvalidCardId(String),

    #[error("invalid suit: {0:?}")]
    InvalidSuit(String),

    #[error("invalid rank: {0:?}")]
    InvalidRank(String),

    #[error("invalid player: {0:?}")]
    InvalidPlayer(String),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Why a `play` or `draw` was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("game is not in progress")]
    GameNotInProgress,

    #[error("not this player's turn")]
    NotYourTurn,

    #[error("card is not in the player's hand")]
    CardNotInHand,

    #[error("card does not match the discard top")]
    CardNotPlayable,
}

/// A broken structural invariant on a `GameState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("waiting state holds {0} cards")]
    CardsBeforeDeal(usize),

    #[error("expected {expected} cards, found {found}")]
    CardCount { expected: usize, found: usize },

    #[error("duplicate card {0}")]
    DuplicateCard(CardId),

    #[error("discard pile is empty")]
    EmptyDiscard,

    #[error("wild suit set but discard top is {0}")]
    WildSuitWithoutEight(CardId),

    #[error("winner {0} still holds cards")]
    WinnerHoldsCards(Player),

    #[error("both hands are empty")]
    BothHandsEmpty,

    #[error("game over without a winner")]
    MissingWinner,

    #[error("winner {0} set while playing")]
    WinnerWhilePlaying(Player),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCardId("9-moons".to_string());
        assert_eq!(err.to_string(), "invalid card id: \"9-moons\"");
        assert_eq!(Rejection::NotYourTurn.to_string(), "not this player's turn");
        assert_eq!(
            InvariantViolation::CardCount { expected: 52, found: 51 }.to_string(),
            "expected 52 cards, found 51"
        );
    }

    #[test]
    fn test_config_error_from_json() {
        let json_err = serde_json::from_str::<u64>("nope").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
