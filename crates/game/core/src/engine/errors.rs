//! Error types for turn execution.

use crate::error::{ErrorSeverity, GameError};
use crate::traits::RenderError;

/// Errors surfaced while running a turn.
///
/// Capture and the turn limit are outcomes, not errors; see
/// [`TurnStatus`](super::TurnStatus).
#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    /// The renderer failed after the turn's moves were applied.
    #[error("renderer failed on turn {turn}")]
    Render {
        turn: u32,
        #[source]
        source: RenderError,
    },
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TurnError::Render { .. } => ErrorSeverity::External,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TurnError::Render { .. } => "TURN_RENDER_FAILED",
        }
    }
}
