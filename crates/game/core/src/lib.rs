//! Deterministic pursuit-evasion rules on a fixed grid.
//!
//! `pursuit-core` defines the board model, the movement policies of the evader
//! and the pursuers, a grid A* path finder, and the [`engine::TurnEngine`]
//! that resolves one turn at a time. The crate is synchronous and performs no
//! I/O: drawing and user notification happen behind the [`Renderer`] and
//! [`Notifier`] traits, and scheduling successive turns is left to the caller.
pub mod config;
pub mod engine;
pub mod error;
pub mod path;
pub mod policy;
pub mod state;
pub mod traits;

pub use config::{ConfigError, GameConfig};
pub use engine::{EndReason, TurnEngine, TurnError, TurnStatus};
pub use error::{ErrorSeverity, GameError};
pub use path::{find_path, manhattan, next_step};
pub use policy::{
    EvasionStrategy, MoveCandidate, UnknownStrategy, select_evader_move, select_pursuer_move,
};
pub use state::{Board, Cell, CellKind, Direction, GameState, LayoutError};
pub use traits::{Notifier, RenderError, Renderer};
