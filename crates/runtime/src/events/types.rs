use pursuit_core::{Cell, EndReason};

/// Events emitted by the turn driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// A turn finished without capture and the board was rendered.
    TurnCompleted {
        turn: u32,
        evader: Cell,
        pursuers: Vec<Cell>,
    },

    /// A pursuer caught the evader on `cell`.
    Captured { turn: u32, cell: Cell },

    /// The turn limit was reached without a capture.
    MaxTurnsReached { turn: u32 },

    /// The driver was stopped before the game ended.
    Stopped { turn: u32 },
}

impl TurnEvent {
    pub fn turn(&self) -> u32 {
        match self {
            TurnEvent::TurnCompleted { turn, .. }
            | TurnEvent::Captured { turn, .. }
            | TurnEvent::MaxTurnsReached { turn }
            | TurnEvent::Stopped { turn } => *turn,
        }
    }

    /// The end reason for terminal game events.
    pub fn end_reason(&self) -> Option<EndReason> {
        match self {
            TurnEvent::Captured { .. } => Some(EndReason::Captured),
            TurnEvent::MaxTurnsReached { .. } => Some(EndReason::MaxTurnsReached),
            TurnEvent::TurnCompleted { .. } | TurnEvent::Stopped { .. } => None,
        }
    }
}
