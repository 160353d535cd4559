//! The playability rule.
//!
//! An eight is always legal. Otherwise a called wild suit is the only
//! thing to match; without one, match the discard top's suit or rank.

use crate::cards::{Card, Suit};
use crate::core::GameState;

/// Is `card` legal on `top`, given the suit called by the last eight?
///
/// ```
/// use crazy_eights::cards::{Card, Rank, Suit};
/// use crazy_eights::rules::is_playable;
///
/// let top = Card::new(Rank::Three, Suit::Hearts);
/// assert!(is_playable(&Card::new(Rank::Three, Suit::Clubs), &top, None));
/// assert!(!is_playable(&Card::new(Rank::Four, Suit::Clubs), &top, None));
/// assert!(is_playable(&Card::new(Rank::Four, Suit::Clubs), &top, Some(Suit::Clubs)));
/// ```
#[must_use]
pub fn is_playable(card: &Card, top: &Card, wild_suit: Option<Suit>) -> bool {
    if card.is_eight() {
        return true;
    }
    match wild_suit {
        Some(suit) => card.suit() == suit,
        None => card.suit() == top.suit() || card.rank() == top.rank(),
    }
}

/// `is_playable` against a snapshot's discard top and wild suit.
///
/// With no discard top (an undealt game) only an eight qualifies.
#[must_use]
pub fn is_playable_in(card: &Card, state: &GameState) -> bool {
    match state.top_of_discard() {
        Some(top) => is_playable(card, top, state.wild_suit),
        None => card.is_eight(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_eight_always_playable() {
        let top = card(Rank::King, Suit::Spades);
        for suit in Suit::ALL {
            let eight = card(Rank::Eight, suit);
            assert!(is_playable(&eight, &top, None));
            for wild in Suit::ALL {
                assert!(is_playable(&eight, &top, Some(wild)));
            }
        }
    }

    #[test]
    fn test_match_suit_or_rank() {
        let top = card(Rank::Seven, Suit::Diamonds);
        assert!(is_playable(&card(Rank::Two, Suit::Diamonds), &top, None));
        assert!(is_playable(&card(Rank::Seven, Suit::Clubs), &top, None));
        assert!(!is_playable(&card(Rank::Two, Suit::Clubs), &top, None));
    }

    #[test]
    fn test_wild_suit_overrides_top() {
        let top = card(Rank::Eight, Suit::Hearts);

        // Only the called suit matches, not the eight's own suit.
        assert!(is_playable(&card(Rank::Ace, Suit::Spades), &top, Some(Suit::Spades)));
        assert!(!is_playable(&card(Rank::Ace, Suit::Hearts), &top, Some(Suit::Spades)));
    }

    #[test]
    fn test_wild_suit_ignores_rank_match() {
        let top = card(Rank::Five, Suit::Clubs);
        assert!(!is_playable(&card(Rank::Five, Suit::Hearts), &top, Some(Suit::Spades)));
    }

    #[test]
    fn test_playable_in_undealt_state() {
        let state = GameState::new();
        assert!(is_playable_in(&card(Rank::Eight, Suit::Clubs), &state));
        assert!(!is_playable_in(&card(Rank::Nine, Suit::Clubs), &state));
    }
}
