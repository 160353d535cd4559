//! Deck factory.
//!
//! Builds the 52 rank×suit combinations and applies an unbiased
//! Fisher–Yates permutation. Each call returns a fresh, owned pile.

use im::Vector;

use super::card::{Card, Rank, Suit};
use crate::core::rng::GameRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// The full deck in canonical (un-shuffled) order.
///
/// Suits in `Suit::ALL` order, ranks in `Rank::ALL` order within each suit.
#[must_use]
pub fn standard_deck() -> Vector<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
        .collect()
}

/// Create a shuffled deck from OS entropy.
#[must_use]
pub fn create_deck() -> Vector<Card> {
    create_deck_with(&mut GameRng::from_entropy())
}

/// Create a shuffled deck from the given RNG stream.
///
/// Same RNG state, same deck order.
#[must_use]
pub fn create_deck_with(rng: &mut GameRng) -> Vector<Card> {
    let mut cards: Vec<Card> = standard_deck().into_iter().collect();
    rng.shuffle(&mut cards);
    Vector::from(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_deck_order() {
        let deck = standard_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck[0], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(deck[12], Card::new(Rank::King, Suit::Hearts));
        assert_eq!(deck[13], Card::new(Rank::Ace, Suit::Diamonds));
        assert_eq!(deck[51], Card::new(Rank::King, Suit::Spades));
    }

    #[test]
    fn test_create_deck_is_permutation() {
        let deck = create_deck();
        assert_eq!(deck.len(), DECK_SIZE);

        let ids: HashSet<_> = deck.iter().map(Card::id).collect();
        assert_eq!(ids.len(), DECK_SIZE);

        let canonical: HashSet<_> = standard_deck().iter().map(Card::id).collect();
        assert_eq!(ids, canonical);
    }

    #[test]
    fn test_seeded_deck_is_deterministic() {
        let deck1 = create_deck_with(&mut GameRng::new(7));
        let deck2 = create_deck_with(&mut GameRng::new(7));
        assert_eq!(deck1, deck2);
    }

    #[test]
    fn test_different_seeds_differ() {
        let deck1 = create_deck_with(&mut GameRng::new(1));
        let deck2 = create_deck_with(&mut GameRng::new(2));
        assert_ne!(deck1, deck2);
        assert_ne!(deck1, standard_deck());
    }

    #[test]
    fn test_repeated_calls_advance_stream() {
        let mut rng = GameRng::new(42);
        let first = create_deck_with(&mut rng);
        let second = create_deck_with(&mut rng);
        assert_ne!(first, second);
    }
}
