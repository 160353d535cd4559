//! Cards and the deck factory.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: the two axes of a standard 52-card deck
//! - `CardId`: identity derived from (rank, suit)
//! - `Card`: immutable card value
//!
//! `create_deck` / `create_deck_with` produce a shuffled pile;
//! `standard_deck` is the canonical, un-shuffled order.

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Rank, Suit};
pub use deck::{create_deck, create_deck_with, standard_deck, DECK_SIZE};
