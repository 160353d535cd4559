//! Python bindings for the Crazy Eights engine.
//!
//! # Quick Start
//!
//! ```python
//! import crazy_eights as ce
//!
//! game = ce.CrazyEights(seed=42, opponent_delay_ms=0)
//! game.start_game()
//!
//! for card_id in game.playable_cards("player"):
//!     game.play_card(card_id, "player", "hearts")
//!     break
//! else:
//!     game.draw_card("player")
//!
//! game.tick()          # lets the opponent move once its delay has elapsed
//! print(game.state_json())
//! ```

use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

/// crazy_eights: a two-player Crazy Eights engine.
#[pymodule]
fn crazy_eights(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCrazyEights>()?;
    Ok(())
}
