//! Session bindings for Python.

use std::time::Instant;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{CardId, Suit};
use crate::core::{EngineConfig, Error, Player, Status, DEFAULT_OPPONENT_DELAY_MS};
use crate::session::Session;

fn to_py_err(err: Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for a game session.
///
/// Cards, seats and suits cross the boundary as strings:
/// `"8-spades"`, `"player"` / `"ai"`, `"hearts"`.
#[pyclass(name = "CrazyEights")]
pub struct PyCrazyEights {
    session: Session,
}

#[pymethods]
impl PyCrazyEights {
    /// Create a new session.
    ///
    /// # Arguments
    /// - seed: RNG seed for reproducible deals (None for OS entropy)
    /// - opponent_delay_ms: pause before the opponent moves
    #[new]
    #[pyo3(signature = (seed = None, opponent_delay_ms = DEFAULT_OPPONENT_DELAY_MS))]
    fn new(seed: Option<u64>, opponent_delay_ms: u64) -> Self {
        let config = EngineConfig {
            seed,
            opponent_delay_ms,
        };
        Self {
            session: Session::new(config),
        }
    }

    /// Deal a fresh game.
    fn start_game(&mut self) {
        self.session.start_game(Instant::now());
    }

    /// Play a card. Returns whether the move was accepted.
    #[pyo3(signature = (card_id, player, chosen_suit = None))]
    fn play_card(
        &mut self,
        card_id: &str,
        player: &str,
        chosen_suit: Option<&str>,
    ) -> PyResult<bool> {
        let card: CardId = card_id.parse().map_err(to_py_err)?;
        let player: Player = player.parse().map_err(to_py_err)?;
        let suit = chosen_suit
            .map(str::parse::<Suit>)
            .transpose()
            .map_err(to_py_err)?;
        Ok(self.session.play_card(card, player, suit, Instant::now()))
    }

    /// Draw a card. Returns whether the move was accepted.
    fn draw_card(&mut self, player: &str) -> PyResult<bool> {
        let player: Player = player.parse().map_err(to_py_err)?;
        Ok(self.session.draw_card(player, Instant::now()))
    }

    /// Let the opponent move if its delay has elapsed.
    fn tick(&mut self) -> bool {
        self.session.tick(Instant::now())
    }

    /// Ids of the cards `player` may play right now.
    fn playable_cards(&self, player: &str) -> PyResult<Vec<String>> {
        let player: Player = player.parse().map_err(to_py_err)?;
        Ok(self
            .session
            .playable_cards(player)
            .into_iter()
            .map(|id| id.to_string())
            .collect())
    }

    /// The current snapshot as JSON.
    fn state_json(&self) -> PyResult<String> {
        serde_json::to_string(self.session.state()).map_err(|e| to_py_err(e.into()))
    }

    /// Whose turn it is: "player" or "ai".
    #[getter]
    fn current_turn(&self) -> String {
        self.session.state().current_turn.to_string()
    }

    /// The winner once the game is over.
    #[getter]
    fn winner(&self) -> Option<String> {
        self.session.state().winner.map(|p| p.to_string())
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.session.state().status == Status::GameOver
    }

    fn __repr__(&self) -> String {
        let state = self.session.state();
        format!(
            "CrazyEights(status={:?}, turn={}, deck={}, hands={}/{})",
            state.status,
            state.current_turn,
            state.deck.len(),
            state.player_hand.len(),
            state.ai_hand.len()
        )
    }
}
