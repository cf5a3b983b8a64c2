//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from engine construction and turn execution so clients can
//! bubble them up with consistent context.
use thiserror::Error;

use pursuit_core::{ConfigError, ErrorSeverity, GameError, TurnError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid game configuration")]
    Config(#[from] ConfigError),

    #[error("turn execution failed")]
    Turn(#[from] TurnError),
}

impl RuntimeError {
    /// Severity of the underlying core error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Config(err) => err.severity(),
            RuntimeError::Turn(err) => err.severity(),
        }
    }

    /// Stable code of the underlying core error.
    pub fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Config(err) => err.error_code(),
            RuntimeError::Turn(err) => err.error_code(),
        }
    }
}
