//! Turn resolution.
//!
//! The [`TurnEngine`] is the only writer of [`GameState`]. One call to
//! [`TurnEngine::run_turn`] resolves a full turn: the evader moves, every
//! pursuer answers the evader's new cell, capture is checked, the board's
//! agent markings are restamped and the renderer is called. Scheduling the
//! next call (immediately, on a timer, or from a test) is the caller's job.

mod errors;
mod turns;

pub use errors::TurnError;
pub use turns::{EndReason, TurnStatus};

use crate::config::{ConfigError, GameConfig};
use crate::policy::{select_evader_move, select_pursuer_moves};
use crate::state::GameState;
use crate::traits::{Notifier, Renderer};

pub struct TurnEngine<R = (), N = ()> {
    state: GameState,
    config: GameConfig,
    /// Number of the most recently started turn (0 before the first).
    turn: u32,
    status: TurnStatus,
    renderer: R,
    notifier: N,
}

impl TurnEngine {
    /// Creates an engine that neither draws nor notifies.
    pub fn headless(state: GameState, config: GameConfig) -> Result<Self, ConfigError> {
        Self::new(state, config, (), ())
    }
}

impl<R: Renderer, N: Notifier> TurnEngine<R, N> {
    pub fn new(
        state: GameState,
        config: GameConfig,
        renderer: R,
        notifier: N,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state,
            config,
            turn: 0,
            status: TurnStatus::Running,
            renderer,
            notifier,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn status(&self) -> TurnStatus {
        self.status
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Consumes the engine, returning the final state and collaborators.
    pub fn into_parts(self) -> (GameState, R, N) {
        (self.state, self.renderer, self.notifier)
    }

    /// Resolves one turn.
    ///
    /// Once the game has ended this is a no-op that returns the same ended
    /// status. On a renderer failure the turn's moves stay applied and the
    /// game remains running.
    pub fn run_turn(&mut self) -> Result<TurnStatus, TurnError> {
        if self.status.is_ended() {
            return Ok(self.status);
        }

        self.turn += 1;
        let turn = self.turn;
        self.notifier.turn_started(turn);

        // Agents may already coincide, e.g. a pursuer placed on the start cell.
        if self.state.is_captured() {
            return Ok(self.finish_captured(turn));
        }

        let evader = select_evader_move(&self.state, self.config.evasion);
        self.state.set_evader(evader);
        if self.state.is_captured() {
            return Ok(self.finish_captured(turn));
        }

        let pursuers = select_pursuer_moves(self.state.board(), self.state.pursuers(), evader);
        self.state.set_pursuers(pursuers);
        if self.state.is_captured() {
            return Ok(self.finish_captured(turn));
        }

        self.state.restamp();
        self.renderer
            .render(self.state.board())
            .map_err(|source| TurnError::Render { turn, source })?;

        if turn >= self.config.max_turns {
            self.status = TurnStatus::Ended(EndReason::MaxTurnsReached);
            self.notifier.max_turns_reached(turn);
        }
        Ok(self.status)
    }

    /// Runs turns until the game ends, returning the final status.
    pub fn run_to_end(&mut self) -> Result<TurnStatus, TurnError> {
        loop {
            let status = self.run_turn()?;
            if status.is_ended() {
                return Ok(status);
            }
        }
    }

    fn finish_captured(&mut self, turn: u32) -> TurnStatus {
        self.state.restamp();
        self.status = TurnStatus::Ended(EndReason::Captured);
        self.notifier.captured(turn, self.state.evader());
        self.status
    }
}
