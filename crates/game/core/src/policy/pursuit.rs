use super::MoveCandidate;
use crate::path::manhattan;
use crate::state::{Board, Cell};

/// Greedy one-step move of a single pursuer towards `evader`.
///
/// Staying put is the baseline; a neighbour is taken only when it strictly
/// shortens the Manhattan distance, and the first strict improvement in
/// direction order wins ties. Walls are not routed around.
pub fn select_pursuer_move(board: &Board, pursuer: Cell, evader: Cell) -> Cell {
    let mut best = MoveCandidate::new(pursuer, manhattan(pursuer, evader));
    for cell in board.neighbors(pursuer) {
        let distance = manhattan(cell, evader);
        if distance < best.score {
            best = MoveCandidate::new(cell, distance);
        }
    }
    best.cell
}

/// Moves every pursuer independently against the same evader cell.
///
/// Output index `i` is the new cell of input pursuer `i`. Pursuers do not see
/// each other's moves within a turn.
pub fn select_pursuer_moves(board: &Board, pursuers: &[Cell], evader: Cell) -> Vec<Cell> {
    pursuers
        .iter()
        .map(|&pursuer| select_pursuer_move(board, pursuer, evader))
        .collect()
}
