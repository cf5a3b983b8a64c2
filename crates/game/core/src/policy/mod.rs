//! Per-turn movement decisions for the evader and the pursuers.
//!
//! Both policies are pure functions of the current state. Candidate cells are
//! always enumerated in [`Direction::ALL`](crate::state::Direction::ALL) order
//! and the first best candidate wins, so every decision is deterministic.
mod evasion;
mod pursuit;

pub use evasion::{best_evasion_target, danger_score, select_evader_move};
pub use pursuit::{select_pursuer_move, select_pursuer_moves};

use crate::error::{ErrorSeverity, GameError};
use crate::state::Cell;

/// How the evader turns its safest neighbour into an actual move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvasionStrategy {
    /// Step straight onto the safest neighbour.
    Direct,
    /// Treat the safest neighbour as a goal and take the first step of the
    /// shortest path towards it.
    #[default]
    PathDirected,
}

impl EvasionStrategy {
    pub const fn as_str(self) -> &'static str {
        match self {
            EvasionStrategy::Direct => "direct",
            EvasionStrategy::PathDirected => "path",
        }
    }
}

impl std::str::FromStr for EvasionStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(EvasionStrategy::Direct),
            "path" | "path-directed" | "path_directed" | "astar" => {
                Ok(EvasionStrategy::PathDirected)
            }
            _ => Err(UnknownStrategy(s.trim().to_owned())),
        }
    }
}

/// A strategy name that matches no [`EvasionStrategy`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown evasion strategy '{0}' (expected 'direct' or 'path')")]
pub struct UnknownStrategy(pub String);

impl GameError for UnknownStrategy {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "CONFIG_UNKNOWN_STRATEGY"
    }
}

/// A scored candidate cell produced during one policy evaluation.
///
/// The score is a danger sum for the evader (higher is safer) and a distance
/// to the evader for a pursuer (lower is better).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveCandidate {
    pub cell: Cell,
    pub score: u32,
}

impl MoveCandidate {
    pub const fn new(cell: Cell, score: u32) -> Self {
        Self { cell, score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_parses_from_config_strings() {
        assert_eq!("direct".parse(), Ok(EvasionStrategy::Direct));
        assert_eq!(" PATH ".parse(), Ok(EvasionStrategy::PathDirected));
        let err = "Teleport".parse::<EvasionStrategy>().unwrap_err();
        assert_eq!(err, UnknownStrategy("Teleport".to_owned()));
        assert_eq!(err.error_code(), "CONFIG_UNKNOWN_STRATEGY");
        assert_eq!(EvasionStrategy::default(), EvasionStrategy::PathDirected);
    }
}
