use std::fmt;

/// Why a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndReason {
    /// A pursuer reached the evader's cell.
    Captured,
    /// The configured turn limit elapsed without a capture.
    MaxTurnsReached,
}

/// Engine state after a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnStatus {
    Running,
    Ended(EndReason),
}

impl TurnStatus {
    pub const fn is_running(self) -> bool {
        matches!(self, TurnStatus::Running)
    }

    pub const fn is_ended(self) -> bool {
        !self.is_running()
    }

    pub const fn end_reason(self) -> Option<EndReason> {
        match self {
            TurnStatus::Running => None,
            TurnStatus::Ended(reason) => Some(reason),
        }
    }
}

impl fmt::Display for TurnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnStatus::Running => f.write_str("running"),
            TurnStatus::Ended(EndReason::Captured) => f.write_str("captured"),
            TurnStatus::Ended(EndReason::MaxTurnsReached) => f.write_str("max turns reached"),
        }
    }
}
