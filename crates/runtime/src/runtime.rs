//! Turn driver.
//!
//! The driver owns the scheduling that the synchronous engine leaves out: it
//! runs one turn, publishes what happened, waits for the configured interval,
//! and repeats until the game ends or the caller asks it to stop.

use std::future::Future;
use std::time::Duration;

use pursuit_core::{
    Cell, EndReason, GameConfig, GameState, Notifier, Renderer, TurnEngine, TurnStatus,
};

use crate::api::Result;
use crate::events::{EventBus, TurnEvent};

/// Driver configuration.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Delay between consecutive turns. Zero runs turns back to back.
    pub turn_interval: Duration,
    pub event_buffer_size: usize,
}

impl DriverConfig {
    pub const DEFAULT_TURN_INTERVAL: Duration = Duration::from_millis(1000);

    /// Back-to-back turns, useful for tests and batch runs.
    pub fn immediate() -> Self {
        Self {
            turn_interval: Duration::ZERO,
            ..Self::default()
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            turn_interval: Self::DEFAULT_TURN_INTERVAL,
            event_buffer_size: 100,
        }
    }
}

/// How a driver run finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverOutcome {
    /// The engine reported the game as ended.
    Ended(EndReason),
    /// The shutdown signal fired between turns.
    Stopped,
}

/// Final report of a driver run.
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub turns_played: u32,
    pub outcome: DriverOutcome,
    pub state: GameState,
}

impl GameSummary {
    pub fn evader(&self) -> Cell {
        self.state.evader()
    }

    pub fn pursuers(&self) -> &[Cell] {
        self.state.pursuers()
    }
}

/// Schedules turns of a [`TurnEngine`] on the tokio runtime.
pub struct TurnDriver<R, N> {
    engine: TurnEngine<R, N>,
    config: DriverConfig,
    events: EventBus,
}

impl<R: Renderer, N: Notifier> TurnDriver<R, N> {
    pub fn new(engine: TurnEngine<R, N>, config: DriverConfig) -> Self {
        let events = EventBus::with_capacity(config.event_buffer_size);
        Self {
            engine,
            config,
            events,
        }
    }

    /// Builds the engine and the driver in one step.
    pub fn from_parts(
        state: GameState,
        game_config: GameConfig,
        renderer: R,
        notifier: N,
        config: DriverConfig,
    ) -> Result<Self> {
        let engine = TurnEngine::new(state, game_config, renderer, notifier)?;
        Ok(Self::new(engine, config))
    }

    pub fn engine(&self) -> &TurnEngine<R, N> {
        &self.engine
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Event bus; subscribe before calling [`run`](Self::run).
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Runs until the game ends.
    pub async fn run(self) -> Result<GameSummary> {
        self.run_until(std::future::pending()).await
    }

    /// Runs until the game ends or `shutdown` completes.
    ///
    /// `shutdown` is only observed between turns; a started turn always
    /// completes.
    pub async fn run_until<F>(mut self, shutdown: F) -> Result<GameSummary>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            let status = self.engine.run_turn()?;
            self.publish(status);

            if let TurnStatus::Ended(reason) = status {
                tracing::debug!(turn = self.engine.turn(), ?reason, "game ended");
                return Ok(self.finish(DriverOutcome::Ended(reason)));
            }

            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    let turn = self.engine.turn();
                    tracing::info!(turn, "turn driver stopped");
                    self.events.publish(TurnEvent::Stopped { turn });
                    return Ok(self.finish(DriverOutcome::Stopped));
                }
                _ = pause(self.config.turn_interval) => {}
            }
        }
    }

    fn publish(&self, status: TurnStatus) {
        let turn = self.engine.turn();
        let state = self.engine.state();
        match status {
            TurnStatus::Ended(EndReason::Captured) => {
                self.events.publish(TurnEvent::Captured {
                    turn,
                    cell: state.evader(),
                });
            }
            TurnStatus::Running | TurnStatus::Ended(EndReason::MaxTurnsReached) => {
                self.events.publish(TurnEvent::TurnCompleted {
                    turn,
                    evader: state.evader(),
                    pursuers: state.pursuers().to_vec(),
                });
                if status.is_ended() {
                    self.events.publish(TurnEvent::MaxTurnsReached { turn });
                }
            }
        }
    }

    fn finish(self, outcome: DriverOutcome) -> GameSummary {
        let turns_played = self.engine.turn();
        let (state, _, _) = self.engine.into_parts();
        GameSummary {
            turns_played,
            outcome,
            state,
        }
    }
}

async fn pause(interval: Duration) {
    if interval.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(interval).await;
    }
}
