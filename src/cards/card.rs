//! Card value types: suit, rank, identity.
//!
//! A `Card` is a plain `Copy` value. Its `CardId` is derived from the
//! (rank, suit) pair, so two distinct cards can never share an identity
//! and a duplicate card cannot be constructed.
//!
//! ## Textual Form
//!
//! Card ids render as `"<rank>-<suit>"`:
//!
//! ```
//! use crazy_eights::cards::{Card, CardId, Rank, Suit};
//!
//! let card = Card::new(Rank::Eight, Suit::Spades);
//! assert_eq!(card.id().to_string(), "8-spades");
//!
//! let parsed: CardId = "10-hearts".parse().unwrap();
//! assert_eq!(parsed.rank(), Rank::Ten);
//! assert_eq!(parsed.suit(), Suit::Hearts);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;

/// One of the four French suits.
///
/// Declaration order is the canonical enumeration order used by the
/// deck factory and by the opponent's wild-suit tie-break.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Position in `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used in card ids.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }

    /// Unicode pip for display.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    /// Hearts and diamonds are red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| Error::InvalidSuit(s.to_string()))
    }
}

/// Card rank. Only `Eight` carries a rule of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl Rank {
    /// All ranks in canonical order (ace low).
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Position in `Rank::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short label, as used in card ids.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Eights are wild.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Rank::Eight)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.label() == s)
            .ok_or_else(|| Error::InvalidRank(s.to_string()))
    }
}

/// Identity of a card, unique across the 52-card deck.
///
/// Packed as `suit * 13 + rank`, so it round-trips to its (rank, suit)
/// pair without a lookup table. Serializes as its textual form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CardId(u8);

impl CardId {
    /// Derive the id for a (rank, suit) pair.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self((suit.index() * Rank::ALL.len() + rank.index()) as u8)
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank::ALL[self.0 as usize % Rank::ALL.len()]
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::ALL[self.0 as usize / Rank::ALL.len()]
    }

    /// Raw packed value (0..52).
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.rank(), self.suit())
    }
}

impl FromStr for CardId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank, suit) = s
            .split_once('-')
            .ok_or_else(|| Error::InvalidCardId(s.to_string()))?;
        let rank = rank
            .parse::<Rank>()
            .map_err(|_| Error::InvalidCardId(s.to_string()))?;
        let suit = suit
            .parse::<Suit>()
            .map_err(|_| Error::InvalidCardId(s.to_string()))?;
        Ok(CardId::new(rank, suit))
    }
}

impl From<CardId> for String {
    fn from(id: CardId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for CardId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A playing card.
///
/// Immutable once created. The identity is always consistent with the
/// rank and suit; deserialization rejects a mismatched `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "CardRepr", try_from = "CardRepr")]
pub struct Card {
    id: CardId,
    suit: Suit,
    rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            id: CardId::new(rank, suit),
            suit,
            rank,
        }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Shorthand for `rank().is_wild()`.
    #[must_use]
    pub const fn is_eight(&self) -> bool {
        self.rank.is_wild()
    }
}

impl From<CardId> for Card {
    fn from(id: CardId) -> Self {
        Card::new(id.rank(), id.suit())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.symbol())
    }
}

/// Wire shape of a card: `{ "id": "8-spades", "suit": "spades", "rank": "8" }`.
#[derive(Serialize, Deserialize)]
struct CardRepr {
    id: CardId,
    suit: Suit,
    rank: Rank,
}

impl From<Card> for CardRepr {
    fn from(card: Card) -> Self {
        Self {
            id: card.id,
            suit: card.suit,
            rank: card.rank,
        }
    }
}

impl TryFrom<CardRepr> for Card {
    type Error = Error;

    fn try_from(repr: CardRepr) -> Result<Self, Self::Error> {
        let card = Card::new(repr.rank, repr.suit);
        if card.id != repr.id {
            return Err(Error::InvalidCardId(repr.id.to_string()));
        }
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_is_unique_per_pair() {
        let mut seen = std::collections::HashSet::new();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                assert!(seen.insert(CardId::new(rank, suit)));
            }
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn test_card_id_decodes_parts() {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let id = CardId::new(rank, suit);
                assert_eq!(id.rank(), rank);
                assert_eq!(id.suit(), suit);
                assert!(id.raw() < 52);
            }
        }
    }

    #[test]
    fn test_card_id_text() {
        assert_eq!(CardId::new(Rank::Ace, Suit::Hearts).to_string(), "A-hearts");
        assert_eq!(CardId::new(Rank::Ten, Suit::Clubs).to_string(), "10-clubs");
        assert_eq!(CardId::new(Rank::Queen, Suit::Diamonds).to_string(), "Q-diamonds");

        let id: CardId = "K-spades".parse().unwrap();
        assert_eq!(id, CardId::new(Rank::King, Suit::Spades));
    }

    #[test]
    fn test_card_id_parse_errors() {
        assert!(matches!("".parse::<CardId>(), Err(Error::InvalidCardId(_))));
        assert!(matches!("8spades".parse::<CardId>(), Err(Error::InvalidCardId(_))));
        assert!(matches!("1-spades".parse::<CardId>(), Err(Error::InvalidCardId(_))));
        assert!(matches!("8-stars".parse::<CardId>(), Err(Error::InvalidCardId(_))));
        assert!(matches!("8-Spades".parse::<CardId>(), Err(Error::InvalidCardId(_))));
    }

    #[test]
    fn test_suit_properties() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Clubs.is_red());
        assert!(!Suit::Spades.is_red());
        assert_eq!("clubs".parse::<Suit>().unwrap(), Suit::Clubs);
        assert!(matches!("club".parse::<Suit>(), Err(Error::InvalidSuit(_))));
    }

    #[test]
    fn test_only_eight_is_wild() {
        for rank in Rank::ALL {
            assert_eq!(rank.is_wild(), rank == Rank::Eight);
        }
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Rank::Eight, Suit::Spades).to_string(), "8♠");
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10♥");
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(Rank::Jack, Suit::Diamonds);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"id":"J-diamonds","suit":"diamonds","rank":"J"}"#);

        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }

    #[test]
    fn test_card_deserialization_rejects_mismatched_id() {
        let json = r#"{"id":"8-spades","suit":"hearts","rank":"8"}"#;
        assert!(serde_json::from_str::<Card>(json).is_err());
    }
}
