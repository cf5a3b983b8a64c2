//! Layout construction errors.
//!
//! A malformed initial layout is always rejected before a game starts; the
//! engine never runs on an invalid board.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Cell;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutError {
    /// The layout has no rows.
    #[error("layout has no rows")]
    EmptyLayout,

    /// A row contains no glyphs.
    #[error("layout row {row} is empty")]
    EmptyRow { row: usize },

    /// Rows differ in length.
    #[error("layout row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: u32,
        found: u32,
    },

    /// A glyph outside `. W B M`.
    #[error("unknown glyph {glyph:?} at {cell}")]
    UnknownGlyph { glyph: char, cell: Cell },

    /// Board dimensions contain a zero.
    #[error("board dimensions {width}x{height} must be non-zero")]
    EmptyBoard { width: u32, height: u32 },

    /// Serialized cells do not cover the board exactly.
    #[error("board has {found} cells, expected {expected}")]
    CellCountMismatch { expected: usize, found: usize },

    /// No cell holds the evader.
    #[error("layout has no evader")]
    MissingEvader,

    /// More than one cell holds the evader.
    #[error("layout has more than one evader (at {first} and {second})")]
    MultipleEvaders { first: Cell, second: Cell },

    /// A coordinate lies outside the board.
    #[error("position {cell} is out of bounds (board size: {width}x{height})")]
    OutOfBounds { cell: Cell, width: u32, height: u32 },

    /// An agent was placed on a wall.
    #[error("agent placed on wall at {cell}")]
    AgentOnWall { cell: Cell },
}

impl GameError for LayoutError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use LayoutError::*;
        match self {
            EmptyLayout => "LAYOUT_EMPTY",
            EmptyRow { .. } => "LAYOUT_EMPTY_ROW",
            RaggedRow { .. } => "LAYOUT_RAGGED_ROW",
            UnknownGlyph { .. } => "LAYOUT_UNKNOWN_GLYPH",
            EmptyBoard { .. } => "LAYOUT_EMPTY_BOARD",
            CellCountMismatch { .. } => "LAYOUT_CELL_COUNT_MISMATCH",
            MissingEvader => "LAYOUT_MISSING_EVADER",
            MultipleEvaders { .. } => "LAYOUT_MULTIPLE_EVADERS",
            OutOfBounds { .. } => "LAYOUT_OUT_OF_BOUNDS",
            AgentOnWall { .. } => "LAYOUT_AGENT_ON_WALL",
        }
    }
}
