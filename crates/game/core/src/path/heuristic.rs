use crate::state::Cell;

/// `|a.row - b.row| + |a.col - b.col|`.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}
