//! Moves a seat can make, and the history record of a move.
//!
//! Every user intent maps 1:1 onto an `Action`:
//! - clicking a card (plus a suit for an eight) is `Play`
//! - clicking the draw pile is `Draw`

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::cards::{CardId, Suit};

/// A single move.
///
/// ## Example
///
/// ```
/// use crazy_eights::cards::{CardId, Rank, Suit};
/// use crazy_eights::core::Action;
///
/// let wild = Action::play_wild(CardId::new(Rank::Eight, Suit::Clubs), Suit::Hearts);
/// assert_eq!(wild.card(), Some(CardId::new(Rank::Eight, Suit::Clubs)));
/// assert!(Action::Draw.card().is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Play a card from hand. `chosen_suit` only matters for an eight.
    Play {
        card: CardId,
        chosen_suit: Option<Suit>,
    },
    /// Draw one card from the deck.
    Draw,
}

impl Action {
    /// Play a non-wild card.
    #[must_use]
    pub const fn play(card: CardId) -> Self {
        Action::Play {
            card,
            chosen_suit: None,
        }
    }

    /// Play an eight and call a suit.
    #[must_use]
    pub const fn play_wild(card: CardId, suit: Suit) -> Self {
        Action::Play {
            card,
            chosen_suit: Some(suit),
        }
    }

    /// The card being played, if any.
    #[must_use]
    pub const fn card(&self) -> Option<CardId> {
        match self {
            Action::Play { card, .. } => Some(*card),
            Action::Draw => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play {
                card,
                chosen_suit: Some(suit),
            } => write!(f, "play {card} calling {suit}"),
            Action::Play { card, .. } => write!(f, "play {card}"),
            Action::Draw => f.write_str("draw"),
        }
    }
}

/// A move that changed the game, with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that moved.
    pub player: Player,

    /// The move.
    pub action: Action,

    /// Position in the game's history (0-based).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: Player, action: Action, sequence: u32) -> Self {
        Self {
            player,
            action,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn test_action_constructors() {
        let id = CardId::new(Rank::Four, Suit::Clubs);
        assert_eq!(
            Action::play(id),
            Action::Play {
                card: id,
                chosen_suit: None
            }
        );
        assert_eq!(Action::play(id).card(), Some(id));
    }

    #[test]
    fn test_action_display() {
        let eight = CardId::new(Rank::Eight, Suit::Spades);
        assert_eq!(Action::play(eight).to_string(), "play 8-spades");
        assert_eq!(
            Action::play_wild(eight, Suit::Diamonds).to_string(),
            "play 8-spades calling diamonds"
        );
        assert_eq!(Action::Draw.to_string(), "draw");
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::play_wild(CardId::new(Rank::Eight, Suit::Hearts), Suit::Clubs);
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"type":"play","card":"8-hearts","chosen_suit":"clubs"}"#);

        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);

        assert_eq!(serde_json::to_string(&Action::Draw).unwrap(), r#"{"type":"draw"}"#);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(Player::Ai, Action::Draw, 4);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
