//! The turn engine: dealing, playing, drawing, turn order, win detection.
//!
//! Every operation takes a snapshot and returns its successor. A move whose
//! preconditions fail is a no-op: the returned state equals the input.
//!
//! ## Implementation Notes
//!
//! - `start` is always legal and discards any previous game
//! - `play` ends the game the moment the actor's hand empties
//! - `draw` never ends the game; a playable drawn card keeps the turn
//! - An empty deck makes `draw` pass the turn; the discard pile is never
//!   reshuffled into the deck

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::playability::is_playable_in;
use crate::cards::{create_deck_with, Card, CardId, Suit};
use crate::core::{
    Action, EngineConfig, GameRng, GameState, Player, Rejection, Status, INITIAL_HAND_SIZE,
};

/// Moves available to a seat. Inline for the common case of a small hand.
pub type LegalActions = SmallVec<[Action; 8]>;

/// Drives a game from deal to win.
///
/// Owns the shuffle RNG; everything else is a pure function of the
/// snapshot passed in.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    config: EngineConfig,
    rng: GameRng,
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl TurnEngine {
    /// Create an engine. A configured seed makes every deal reproducible.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self { config, rng }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Shuffle and deal a fresh game.
    ///
    /// The human is dealt first, then the opponent, each from the front of
    /// the deck. The opening discard comes off the draw end; an eight there
    /// is cycled to the far end and the next card tried, so the game never
    /// opens on a wild card.
    pub fn start(&mut self) -> GameState {
        let mut deck = create_deck_with(&mut self.rng);
        let player_hand = deck.slice(0..INITIAL_HAND_SIZE);
        let ai_hand = deck.slice(0..INITIAL_HAND_SIZE);

        let mut discard_pile = Vector::new();
        for _ in 0..deck.len() {
            match deck.pop_back() {
                Some(card) if card.is_eight() => {
                    trace!(card = %card.id(), "cycling eight off the opening discard");
                    deck.push_front(card);
                }
                Some(card) => {
                    discard_pile.push_back(card);
                    break;
                }
                None => break,
            }
        }

        let state = GameState {
            deck,
            player_hand,
            ai_hand,
            discard_pile,
            current_turn: Player::Human,
            status: Status::Playing,
            winner: None,
            wild_suit: None,
        };
        info!(
            seed = self.rng.seed(),
            top = ?state.top_of_discard().map(Card::id),
            "dealt new game"
        );
        state
    }

    /// Why `play` would be a no-op, if it would.
    pub fn validate_play(
        &self,
        state: &GameState,
        card: CardId,
        player: Player,
    ) -> Result<(), Rejection> {
        locate_playable(state, card, player).map(|_| ())
    }

    /// Why `draw` would be a no-op, if it would.
    pub fn validate_draw(&self, state: &GameState, player: Player) -> Result<(), Rejection> {
        check_turn(state, player)
    }

    /// Play `card` from `player`'s hand onto the discard pile.
    ///
    /// `chosen_suit` becomes the wild suit when the card is an eight and is
    /// ignored otherwise. Emptying the hand wins the game; otherwise the
    /// turn passes.
    #[must_use]
    pub fn play(
        &self,
        state: &GameState,
        card: CardId,
        player: Player,
        chosen_suit: Option<Suit>,
    ) -> GameState {
        let index = match locate_playable(state, card, player) {
            Ok(index) => index,
            Err(rejection) => {
                debug!(%player, %card, %rejection, "play ignored");
                return state.clone();
            }
        };

        let mut next = state.clone();
        let played = next.hand_mut(player).remove(index);
        next.discard_pile.push_back(played);
        next.wild_suit = if played.is_eight() { chosen_suit } else { None };

        if next.hand(player).is_empty() {
            next.status = Status::GameOver;
            next.winner = Some(player);
            info!(%player, last = %card, "game won");
        } else {
            next.current_turn = player.opponent();
        }

        trace!(%player, %card, wild_suit = ?next.wild_suit, "card played");
        next
    }

    /// Draw one card into `player`'s hand.
    ///
    /// The turn passes unless the drawn card is playable, in which case the
    /// same player may act again. The drawn card is never played here.
    #[must_use]
    pub fn draw(&self, state: &GameState, player: Player) -> GameState {
        if let Err(rejection) = check_turn(state, player) {
            debug!(%player, %rejection, "draw ignored");
            return state.clone();
        }

        let mut next = state.clone();
        match next.deck.pop_back() {
            None => {
                trace!(%player, "deck empty, passing turn");
                next.current_turn = player.opponent();
            }
            Some(drawn) => {
                next.hand_mut(player).push_back(drawn);
                let keeps_turn = is_playable_in(&drawn, &next);
                if !keeps_turn {
                    next.current_turn = player.opponent();
                }
                trace!(%player, card = %drawn.id(), keeps_turn, "card drawn");
            }
        }
        next
    }

    /// Apply an `Action` on behalf of `player`.
    #[must_use]
    pub fn apply(&self, state: &GameState, player: Player, action: &Action) -> GameState {
        match *action {
            Action::Play { card, chosen_suit } => self.play(state, card, player, chosen_suit),
            Action::Draw => self.draw(state, player),
        }
    }

    /// Every move `player` could make that would not be a no-op.
    ///
    /// Eights appear once per suit that could be called. `Draw` is always
    /// included when the seat may act.
    #[must_use]
    pub fn legal_actions(&self, state: &GameState, player: Player) -> LegalActions {
        let mut actions = LegalActions::new();
        if check_turn(state, player).is_err() {
            return actions;
        }

        for card in state.hand(player).iter().filter(|c| is_playable_in(c, state)) {
            if card.is_eight() {
                actions.extend(Suit::ALL.into_iter().map(|suit| Action::play_wild(card.id(), suit)));
            } else {
                actions.push(Action::play(card.id()));
            }
        }
        actions.push(Action::Draw);
        actions
    }

    /// Cards a presentation layer should offer as clickable.
    ///
    /// Empty unless it is `player`'s turn in a game in progress.
    #[must_use]
    pub fn playable_cards(&self, state: &GameState, player: Player) -> Vec<CardId> {
        if check_turn(state, player).is_err() {
            return Vec::new();
        }
        state
            .hand(player)
            .iter()
            .filter(|c| is_playable_in(c, state))
            .map(Card::id)
            .collect()
    }
}

fn check_turn(state: &GameState, player: Player) -> Result<(), Rejection> {
    if state.status != Status::Playing {
        return Err(Rejection::GameNotInProgress);
    }
    if state.current_turn != player {
        return Err(Rejection::NotYourTurn);
    }
    Ok(())
}

/// Index of `card` in `player`'s hand, if playing it is legal right now.
fn locate_playable(state: &GameState, card: CardId, player: Player) -> Result<usize, Rejection> {
    check_turn(state, player)?;
    let index = state
        .find_in_hand(player, card)
        .ok_or(Rejection::CardNotInHand)?;
    if !is_playable_in(&state.hand(player)[index], state) {
        return Err(Rejection::CardNotPlayable);
    }
    Ok(index)
}
