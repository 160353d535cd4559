//! Decision procedures for the automated seat.
//!
//! Policies are trait-based so the host can swap them:
//! - `GreedyOpponent`: the standard opponent, first playable card wins
//! - `UniformOpponent`: uniform over legal moves, for simulations

use crate::cards::{Card, Suit};
use crate::core::{Action, GameRng, GameState, Player};
use crate::rules::{is_playable_in, TurnEngine};

/// Chooses a move for a seat.
pub trait OpponentPolicy: Send + Sync {
    /// Choose an action for `player`.
    ///
    /// Returns `None` if `player` may not act in `state`.
    fn choose_action(
        &self,
        engine: &TurnEngine,
        state: &GameState,
        player: Player,
        rng: &mut GameRng,
    ) -> Option<Action>;
}

/// Greedy, non-lookahead opponent.
///
/// 1. Take the first card in hand order that is playable.
/// 2. If it is an eight, call the suit held most often among the other
///    non-eight cards (see `choose_wild_suit`).
/// 3. With nothing playable, draw.
///
/// Deterministic given the state; the RNG is unused.
#[derive(Clone, Debug, Default)]
pub struct GreedyOpponent;

impl OpponentPolicy for GreedyOpponent {
    fn choose_action(
        &self,
        engine: &TurnEngine,
        state: &GameState,
        player: Player,
        _rng: &mut GameRng,
    ) -> Option<Action> {
        engine.validate_draw(state, player).ok()?;

        let hand = state.hand(player);
        let action = match hand.iter().find(|c| is_playable_in(c, state)) {
            Some(card) if card.is_eight() => Action::play_wild(card.id(), choose_wild_suit(hand)),
            Some(card) => Action::play(card.id()),
            None => Action::Draw,
        };
        Some(action)
    }
}

/// The suit to call when playing an eight from `hand`.
///
/// Counts suits over the non-eight cards and takes the highest count.
/// Ties go to the earlier suit in `Suit::ALL` (hearts, diamonds, clubs,
/// spades). A hand of only eights calls hearts.
#[must_use]
pub fn choose_wild_suit<'a>(hand: impl IntoIterator<Item = &'a Card>) -> Suit {
    let mut counts = [0usize; Suit::ALL.len()];
    for card in hand.into_iter().filter(|c| !c.is_eight()) {
        counts[card.suit().index()] += 1;
    }

    let mut best = (Suit::Hearts, 0);
    for suit in Suit::ALL {
        if counts[suit.index()] > best.1 {
            best = (suit, counts[suit.index()]);
        }
    }
    best.0
}

/// Uniform random policy.
///
/// Selects uniformly from `TurnEngine::legal_actions`.
#[derive(Clone, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose_action(
        &self,
        engine: &TurnEngine,
        state: &GameState,
        player: Player,
        rng: &mut GameRng,
    ) -> Option<Action> {
        let actions = engine.legal_actions(state, player);
        if actions.is_empty() {
            return None;
        }
        let idx = rng.gen_range_usize(0..actions.len());
        Some(actions[idx])
    }
}
