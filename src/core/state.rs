//! Game state snapshot.
//!
//! ## GameState
//!
//! The complete, observable game:
//! - Four piles: deck, the two hands, discard
//! - Whose turn it is, lifecycle status, winner
//! - The suit called by the last eight, if any
//!
//! Snapshots are values. The turn engine never mutates one in place; it
//! builds a successor. Piles use `im` persistent vectors so that cloning a
//! snapshot is O(1) and successors share structure with their parent.
//!
//! ## Pile Ends
//!
//! - `deck`: draw end is the back
//! - `discard_pile`: top is the back
//! - hands: order is cosmetic, new cards go to the back

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::InvariantViolation;
use super::player::Player;
use crate::cards::{Card, CardId, Suit, DECK_SIZE};

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// No game dealt yet.
    Waiting,
    /// Cards dealt, moves accepted.
    Playing,
    /// A hand emptied. Terminal until the next deal.
    GameOver,
}

/// One complete game snapshot.
///
/// ## Invariants
///
/// - The four piles together hold each of the 52 cards exactly once
///   (once dealt; a `Waiting` state has all piles empty).
/// - `discard_pile` is non-empty unless `status == Waiting`.
/// - `wild_suit` is only set while the discard top is an eight.
/// - `winner.is_some()` iff `status == GameOver`, and the winner's hand is
///   the empty one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub deck: Vector<Card>,
    pub player_hand: Vector<Card>,
    pub ai_hand: Vector<Card>,
    pub discard_pile: Vector<Card>,
    pub current_turn: Player,
    pub status: Status,
    pub winner: Option<Player>,
    pub wild_suit: Option<Suit>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// An empty, not-yet-dealt game.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deck: Vector::new(),
            player_hand: Vector::new(),
            ai_hand: Vector::new(),
            discard_pile: Vector::new(),
            current_turn: Player::Human,
            status: Status::Waiting,
            winner: None,
            wild_suit: None,
        }
    }

    /// A seat's hand.
    #[must_use]
    pub fn hand(&self, player: Player) -> &Vector<Card> {
        match player {
            Player::Human => &self.player_hand,
            Player::Ai => &self.ai_hand,
        }
    }

    /// A seat's hand, mutably. Only the turn engine builds successors.
    pub(crate) fn hand_mut(&mut self, player: Player) -> &mut Vector<Card> {
        match player {
            Player::Human => &mut self.player_hand,
            Player::Ai => &mut self.ai_hand,
        }
    }

    /// Position of a card in a seat's hand.
    #[must_use]
    pub fn find_in_hand(&self, player: Player, card: CardId) -> Option<usize> {
        self.hand(player).iter().position(|c| c.id() == card)
    }

    /// The most recently played card.
    #[must_use]
    pub fn top_of_discard(&self) -> Option<&Card> {
        self.discard_pile.back()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status == Status::Playing
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    /// Total cards across all four piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.player_hand.len() + self.ai_hand.len() + self.discard_pile.len()
    }

    /// Iterate over every card on the table, pile by pile.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.deck
            .iter()
            .chain(self.player_hand.iter())
            .chain(self.ai_hand.iter())
            .chain(self.discard_pile.iter())
    }

    /// Check the structural invariants listed on the type.
    ///
    /// Returns the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let found = self.card_count();
        if self.status == Status::Waiting {
            if found != 0 {
                return Err(InvariantViolation::CardsBeforeDeal(found));
            }
            return Ok(());
        }

        if found != DECK_SIZE {
            return Err(InvariantViolation::CardCount { expected: DECK_SIZE, found });
        }
        let mut seen = [false; DECK_SIZE];
        for card in self.all_cards() {
            let slot = &mut seen[card.id().raw() as usize];
            if *slot {
                return Err(InvariantViolation::DuplicateCard(card.id()));
            }
            *slot = true;
        }

        let top = self.top_of_discard().ok_or(InvariantViolation::EmptyDiscard)?;
        if self.wild_suit.is_some() && !top.is_eight() {
            return Err(InvariantViolation::WildSuitWithoutEight(top.id()));
        }

        match (self.status, self.winner) {
            (Status::GameOver, Some(winner)) => {
                if !self.hand(winner).is_empty() {
                    return Err(InvariantViolation::WinnerHoldsCards(winner));
                }
                if self.hand(winner.opponent()).is_empty() {
                    return Err(InvariantViolation::BothHandsEmpty);
                }
            }
            (Status::GameOver, None) => return Err(InvariantViolation::MissingWinner),
            (_, Some(winner)) => return Err(InvariantViolation::WinnerWhilePlaying(winner)),
            _ => {}
        }

        Ok(())
    }
}
