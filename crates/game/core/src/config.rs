use crate::error::{ErrorSeverity, GameError};
use crate::policy::EvasionStrategy;

/// Game configuration and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of turns after which the game ends without a capture.
    pub max_turns: u32,
    /// How the evader turns its chosen safe cell into a move.
    pub evasion: EvasionStrategy,
}

impl GameConfig {
    pub const DEFAULT_MAX_TURNS: u32 = 10;

    pub fn new() -> Self {
        Self {
            max_turns: Self::DEFAULT_MAX_TURNS,
            evasion: EvasionStrategy::default(),
        }
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub fn with_evasion(mut self, evasion: EvasionStrategy) -> Self {
        self.evasion = evasion;
        self
    }

    /// Rejects configurations the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_turns == 0 {
            return Err(ConfigError::ZeroMaxTurns);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors raised when a [`GameConfig`] cannot be used.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("max_turns must be at least 1")]
    ZeroMaxTurns,
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ZeroMaxTurns => "CONFIG_ZERO_MAX_TURNS",
        }
    }
}
