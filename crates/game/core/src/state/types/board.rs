use std::fmt;

use arrayvec::ArrayVec;

use super::common::{Cell, Direction};
use crate::state::error::LayoutError;

/// Classification of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Evader,
    Pursuer,
}

impl CellKind {
    /// Layout glyph for this kind.
    pub const fn glyph(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Wall => 'W',
            CellKind::Evader => 'B',
            CellKind::Pursuer => 'M',
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(CellKind::Empty),
            'W' => Some(CellKind::Wall),
            'B' => Some(CellKind::Evader),
            'M' => Some(CellKind::Pursuer),
            _ => None,
        }
    }

    /// Agents may pass through any cell that is not a wall.
    pub const fn is_walkable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    pub const fn is_agent(self) -> bool {
        matches!(self, CellKind::Evader | CellKind::Pursuer)
    }
}

/// Fixed-size rectangular board stored row-major.
///
/// Dimensions and wall cells never change after construction. Agent markings
/// are restamped by the engine after each turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BoardDocument")
)]
pub struct Board {
    width: u32,
    height: u32,
    cells: Vec<CellKind>,
}

/// Unchecked wire shape of a [`Board`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BoardDocument {
    width: u32,
    height: u32,
    cells: Vec<CellKind>,
}

#[cfg(feature = "serde")]
impl TryFrom<BoardDocument> for Board {
    type Error = LayoutError;

    fn try_from(doc: BoardDocument) -> Result<Self, Self::Error> {
        let mut board = Board::new(doc.width, doc.height)?;
        if doc.cells.len() != board.cells.len() {
            return Err(LayoutError::CellCountMismatch {
                expected: board.cells.len(),
                found: doc.cells.len(),
            });
        }
        board.cells = doc.cells;
        Ok(board)
    }
}

impl Board {
    /// Creates an all-empty board.
    pub fn new(width: u32, height: u32) -> Result<Self, LayoutError> {
        if width == 0 || height == 0 {
            return Err(LayoutError::EmptyBoard { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![CellKind::Empty; width as usize * height as usize],
        })
    }

    /// Parses a literal layout, one string per row.
    ///
    /// Whitespace inside a row is ignored, so `"..B"` and `". . B"` are the same
    /// row. Agent glyphs are kept on the board as-is; use
    /// [`GameState::from_layout`](crate::state::GameState::from_layout) to also
    /// validate agent counts.
    pub fn from_layout<S: AsRef<str>>(rows: &[S]) -> Result<Self, LayoutError> {
        let mut height = 0u32;
        let mut width: Option<u32> = None;
        let mut cells = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let before = cells.len();
            for (col, glyph) in line
                .as_ref()
                .chars()
                .filter(|c| !c.is_ascii_whitespace())
                .enumerate()
            {
                let kind = CellKind::from_glyph(glyph).ok_or(LayoutError::UnknownGlyph {
                    glyph,
                    cell: Cell::new(row as i32, col as i32),
                })?;
                cells.push(kind);
            }

            let found = (cells.len() - before) as u32;
            match width {
                _ if found == 0 => return Err(LayoutError::EmptyRow { row }),
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(LayoutError::RaggedRow {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.ok_or(LayoutError::EmptyLayout)?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && cell.row < self.height as i32
            && cell.col < self.width as i32
    }

    /// Flattened row-major index, or `None` when out of bounds.
    pub fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.row as usize * self.width as usize + cell.col as usize)
    }

    /// Inverse of [`Board::index`].
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        (index < self.cells.len()).then(|| {
            let width = self.width as usize;
            Cell::new((index / width) as i32, (index % width) as i32)
        })
    }

    pub fn kind(&self, cell: Cell) -> Option<CellKind> {
        self.index(cell).map(|i| self.cells[i])
    }

    /// True iff the cell is in bounds and not a wall.
    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.kind(cell).is_some_and(CellKind::is_walkable)
    }

    /// Walkable orthogonal neighbours in [`Direction::ALL`] order.
    pub fn neighbors(&self, cell: Cell) -> ArrayVec<Cell, 4> {
        Direction::ALL
            .iter()
            .map(|&d| cell.step(d))
            .filter(|&c| self.is_walkable(c))
            .collect()
    }

    /// Iterates every cell with its kind, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellKind)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().map(move |(i, &kind)| {
            (Cell::new((i / width) as i32, (i % width) as i32), kind)
        })
    }

    fn row(&self, row: u32) -> &[CellKind] {
        let width = self.width as usize;
        let start = row as usize * width;
        &self.cells[start..start + width]
    }

    pub(crate) fn set_wall(&mut self, cell: Cell) -> bool {
        match self.index(cell) {
            Some(i) => {
                self.cells[i] = CellKind::Wall;
                true
            }
            None => false,
        }
    }

    /// Clears agent markings and stamps the given positions.
    ///
    /// Pursuers are stamped before the evader so the evader stays visible on a
    /// shared cell. Walls are never overwritten.
    pub(crate) fn restamp(&mut self, evader: Cell, pursuers: &[Cell]) {
        for kind in self.cells.iter_mut().filter(|k| k.is_agent()) {
            *kind = CellKind::Empty;
        }
        for &pursuer in pursuers {
            self.stamp(pursuer, CellKind::Pursuer);
        }
        self.stamp(evader, CellKind::Evader);
    }

    fn stamp(&mut self, cell: Cell, kind: CellKind) {
        if let Some(i) = self.index(cell) {
            if self.cells[i] != CellKind::Wall {
                self.cells[i] = kind;
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            let mut first = true;
            for kind in self.row(row) {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{}", kind.glyph())?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::from_layout(&["..W", ". B", "M.."]).unwrap()
    }

    #[test]
    fn parses_dimensions_and_kinds() {
        let board = board();
        assert_eq!((board.width(), board.height()), (3, 3));
        assert_eq!(board.kind(Cell::new(0, 2)), Some(CellKind::Wall));
        assert_eq!(board.kind(Cell::new(1, 2)), Some(CellKind::Evader));
        assert_eq!(board.kind(Cell::new(2, 0)), Some(CellKind::Pursuer));
        assert_eq!(board.kind(Cell::new(3, 0)), None);
    }

    #[test]
    fn walkability_respects_bounds_and_walls() {
        let board = board();
        assert!(board.is_walkable(Cell::new(1, 2)));
        assert!(board.is_walkable(Cell::new(2, 0)));
        assert!(!board.is_walkable(Cell::new(0, 2)));
        assert!(!board.is_walkable(Cell::new(-1, 0)));
        assert!(!board.is_walkable(Cell::new(0, 3)));
    }

    #[test]
    fn neighbors_are_orthogonal_and_filtered() {
        let board = board();
        // (0,1): up is out of bounds, right is a wall.
        assert_eq!(
            board.neighbors(Cell::new(0, 1)).as_slice(),
            &[Cell::new(1, 1), Cell::new(0, 0)]
        );
    }

    #[test]
    fn index_round_trips_through_cell_at() {
        let board = board();
        let cell = Cell::new(2, 1);
        let index = board.index(cell).unwrap();
        assert_eq!(index, 7);
        assert_eq!(board.cell_at(index), Some(cell));
        assert_eq!(board.cell_at(9), None);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Board::from_layout(&["...", ".."]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn unknown_glyph_is_rejected() {
        let err = Board::from_layout(&["..x"]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::UnknownGlyph {
                glyph: 'x',
                cell: Cell::new(0, 2)
            }
        );
    }

    #[test]
    fn empty_layouts_are_rejected() {
        let rows: [&str; 0] = [];
        assert_eq!(Board::from_layout(&rows), Err(LayoutError::EmptyLayout));
        assert_eq!(
            Board::from_layout(&["..", "  "]),
            Err(LayoutError::EmptyRow { row: 1 })
        );
    }

    #[test]
    fn restamp_keeps_walls_and_moves_agents() {
        let mut board = board();
        board.restamp(Cell::new(0, 0), &[Cell::new(1, 1), Cell::new(0, 2)]);
        assert_eq!(board.kind(Cell::new(0, 0)), Some(CellKind::Evader));
        assert_eq!(board.kind(Cell::new(1, 1)), Some(CellKind::Pursuer));
        assert_eq!(board.kind(Cell::new(0, 2)), Some(CellKind::Wall));
        assert_eq!(board.kind(Cell::new(1, 2)), Some(CellKind::Empty));
        assert_eq!(board.kind(Cell::new(2, 0)), Some(CellKind::Empty));
    }

    #[test]
    fn display_separates_glyphs_with_spaces() {
        assert_eq!(board().to_string(), ". . W\n. . B\nM . .\n");
    }
}
