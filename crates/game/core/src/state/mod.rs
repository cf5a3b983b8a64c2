//! Authoritative game state representation.
//!
//! [`GameState`] owns the [`Board`], the evader's cell, and the ordered pursuer
//! cells. Callers read it freely but mutate it exclusively through the engine.
pub mod error;
pub mod types;

pub use error::LayoutError;
pub use types::{Board, Cell, CellKind, Direction};

/// Canonical snapshot of a running game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GameStateDocument")
)]
pub struct GameState {
    board: Board,
    evader: Cell,
    /// Pursuer `i` keeps index `i` for the lifetime of the game.
    pursuers: Vec<Cell>,
}

/// Wire shape of a [`GameState`]; agents are re-checked against the board.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GameStateDocument {
    board: Board,
    evader: Cell,
    pursuers: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<GameStateDocument> for GameState {
    type Error = LayoutError;

    fn try_from(doc: GameStateDocument) -> Result<Self, Self::Error> {
        Self::with_agents(doc.board, doc.evader, doc.pursuers)
    }
}

impl GameState {
    /// Builds a state from a literal layout (see [`Board::from_layout`]).
    ///
    /// Pursuers are ordered row by row, left to right.
    pub fn from_layout<S: AsRef<str>>(rows: &[S]) -> Result<Self, LayoutError> {
        let board = Board::from_layout(rows)?;

        let mut evader = None;
        let mut pursuers = Vec::new();
        for (cell, kind) in board.iter() {
            match kind {
                CellKind::Evader => match evader {
                    None => evader = Some(cell),
                    Some(first) => {
                        return Err(LayoutError::MultipleEvaders {
                            first,
                            second: cell,
                        });
                    }
                },
                CellKind::Pursuer => pursuers.push(cell),
                CellKind::Empty | CellKind::Wall => {}
            }
        }

        let evader = evader.ok_or(LayoutError::MissingEvader)?;
        Ok(Self {
            board,
            evader,
            pursuers,
        })
    }

    /// Builds a state from explicit coordinates.
    ///
    /// Unlike a text layout this can place a pursuer on the evader's cell.
    pub fn from_parts(
        width: u32,
        height: u32,
        walls: &[Cell],
        evader: Cell,
        pursuers: &[Cell],
    ) -> Result<Self, LayoutError> {
        let mut board = Board::new(width, height)?;
        for &wall in walls {
            if !board.set_wall(wall) {
                return Err(LayoutError::OutOfBounds {
                    cell: wall,
                    width,
                    height,
                });
            }
        }
        Self::with_agents(board, evader, pursuers.to_vec())
    }

    /// Places agents on a board whose walls are final.
    ///
    /// Existing agent markings are discarded and restamped.
    fn with_agents(
        mut board: Board,
        evader: Cell,
        pursuers: Vec<Cell>,
    ) -> Result<Self, LayoutError> {
        for &agent in std::iter::once(&evader).chain(&pursuers) {
            match board.kind(agent) {
                None => {
                    return Err(LayoutError::OutOfBounds {
                        cell: agent,
                        width: board.width(),
                        height: board.height(),
                    });
                }
                Some(CellKind::Wall) => return Err(LayoutError::AgentOnWall { cell: agent }),
                Some(_) => {}
            }
        }

        board.restamp(evader, &pursuers);
        Ok(Self {
            board,
            evader,
            pursuers,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn evader(&self) -> Cell {
        self.evader
    }

    pub fn pursuers(&self) -> &[Cell] {
        &self.pursuers
    }

    /// True when any pursuer shares the evader's cell.
    pub fn is_captured(&self) -> bool {
        self.pursuers.contains(&self.evader)
    }

    pub(crate) fn set_evader(&mut self, cell: Cell) {
        self.evader = cell;
    }

    pub(crate) fn set_pursuers(&mut self, pursuers: Vec<Cell>) {
        debug_assert_eq!(pursuers.len(), self.pursuers.len());
        self.pursuers = pursuers;
    }

    /// Rewrites agent markings on the board from the tracked positions.
    pub(crate) fn restamp(&mut self) {
        self.board.restamp(self.evader, &self.pursuers);
    }
}
