//! The two seats at the table: the human and the automated opponent.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::Error;

/// A seat at the table.
///
/// Serializes as `"player"` / `"ai"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The human seat.
    #[serde(rename = "player")]
    Human,
    /// The automated opponent.
    #[serde(rename = "ai")]
    Ai,
}

impl Player {
    /// Both seats, human first (deal order).
    pub const ALL: [Player; 2] = [Player::Human, Player::Ai];

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Player::Human => "player",
            Player::Ai => "ai",
        })
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "player" => Ok(Player::Human),
            "ai" => Ok(Player::Ai),
            _ => Err(Error::InvalidPlayer(s.to_string())),
        }
    }
}
