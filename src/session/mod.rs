//! Host-side game session.
//!
//! A `Session` is the single owner of the writable `GameState`. Every user
//! intent and every automated move goes through it, one at a time, so no
//! observer ever sees a half-applied move.
//!
//! ## Opponent Timer
//!
//! Whenever a transition leaves the automated seat to move, the session
//! arms a `PendingMove` stamped with the current generation. The generation
//! advances on every state change (including a fresh deal), so a pending
//! move armed against an older snapshot is stale and is dropped instead of
//! applied.
//!
//! Time is passed in explicitly. A host with a real event loop calls
//! `tick(Instant::now())` from its timer; tests step a fake clock.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use crazy_eights::{EngineConfig, Player, Session, Status};
//!
//! let mut session = Session::new(EngineConfig::new().with_seed(3));
//! let t0 = Instant::now();
//! session.start_game(t0);
//! assert_eq!(session.state().status, Status::Playing);
//!
//! // Hand the turn to the opponent by drawing until the turn passes.
//! while session.state().current_turn == Player::Human {
//!     session.draw_card(Player::Human, t0);
//! }
//! assert!(session.pending().is_some());
//! assert!(session.tick(t0 + Duration::from_secs(1)));
//! ```

mod timer;

pub use timer::PendingMove;

use std::time::{Duration, Instant};

use im::Vector;
use tracing::{debug, info};

use crate::cards::{CardId, Suit};
use crate::core::{Action, ActionRecord, EngineConfig, GameRng, GameState, Player, Status};
use crate::policy::{GreedyOpponent, OpponentPolicy};
use crate::rules::TurnEngine;

/// Single-writer owner of a game.
pub struct Session {
    engine: TurnEngine,

    /// Policy driving the automated seat.
    policy: Box<dyn OpponentPolicy>,

    /// RNG handed to the policy.
    rng: GameRng,

    state: GameState,

    /// Bumped on every transition that changes `state`.
    generation: u64,

    pending: Option<PendingMove>,

    /// Moves applied since the last deal.
    history: Vector<ActionRecord>,
}

impl Session {
    /// Create a session in the `Waiting` state with the greedy opponent.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(GameRng::from_entropy, |seed| GameRng::new(seed.rotate_left(32)));
        Self {
            engine: TurnEngine::new(config),
            policy: Box::new(GreedyOpponent),
            rng,
            state: GameState::new(),
            generation: 0,
            pending: None,
            history: Vector::new(),
        }
    }

    /// Replace the automated seat's policy.
    #[must_use]
    pub fn with_policy<P: OpponentPolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// Counter identifying the current snapshot.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The armed opponent move, if any.
    #[must_use]
    pub fn pending(&self) -> Option<PendingMove> {
        self.pending
    }

    /// Moves applied since the last deal, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Cards the given seat may click right now.
    #[must_use]
    pub fn playable_cards(&self, player: Player) -> Vec<CardId> {
        self.engine.playable_cards(&self.state, player)
    }

    /// Deal a fresh game, discarding the current one and any pending move.
    pub fn start_game(&mut self, now: Instant) {
        self.state = self.engine.start();
        self.history = Vector::new();
        self.generation += 1;
        self.pending = None;
        self.arm(now);
    }

    /// Play a card. Returns whether the state changed.
    pub fn play_card(
        &mut self,
        card: CardId,
        player: Player,
        chosen_suit: Option<Suit>,
        now: Instant,
    ) -> bool {
        self.apply(player, Action::Play { card, chosen_suit }, now)
    }

    /// Draw a card. Returns whether the state changed.
    pub fn draw_card(&mut self, player: Player, now: Instant) -> bool {
        self.apply(player, Action::Draw, now)
    }

    /// Apply an action for `player`. Returns whether the state changed.
    pub fn apply(&mut self, player: Player, action: Action, now: Instant) -> bool {
        let next = self.engine.apply(&self.state, player, &action);
        if next == self.state {
            return false;
        }

        let sequence = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        self.history
            .push_back(ActionRecord::new(player, action, sequence));
        self.state = next;
        self.generation += 1;
        self.arm(now);

        if self.state.status == Status::GameOver {
            info!(
                winner = ?self.state.winner,
                moves = self.history.len(),
                "session game over"
            );
        }
        true
    }

    /// Fire the pending opponent move if it is due.
    ///
    /// Returns whether the opponent acted.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(pending) if pending.is_due(now) => self.fire(pending, now),
            _ => false,
        }
    }

    /// Fire a specific pending move, regardless of its due time.
    ///
    /// A move armed for an earlier generation is stale: it is dropped and
    /// nothing is applied.
    pub fn fire(&mut self, pending: PendingMove, now: Instant) -> bool {
        if pending.generation != self.generation || self.pending != Some(pending) {
            debug!(
                armed = pending.generation,
                current = self.generation,
                "dropping stale opponent move"
            );
            return false;
        }
        self.pending = None;

        match self
            .policy
            .choose_action(&self.engine, &self.state, Player::Ai, &mut self.rng)
        {
            Some(action) => {
                debug!(%action, "opponent moves");
                self.apply(Player::Ai, action, now)
            }
            None => false,
        }
    }

    /// Drop the pending opponent move, if any.
    pub fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            debug!(generation = self.generation, "opponent move cancelled");
        }
    }

    /// How long until the pending move is due. `None` if nothing is armed.
    #[must_use]
    pub fn time_until_opponent(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|pending| pending.due_at.saturating_duration_since(now))
    }

    /// Arm the opponent timer if the automated seat is to move.
    fn arm(&mut self, now: Instant) {
        self.pending = (self.state.is_playing() && self.state.current_turn == Player::Ai)
            .then(|| PendingMove::new(self.generation, now + self.engine.config().opponent_delay()));
    }
}
