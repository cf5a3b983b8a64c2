use super::{EvasionStrategy, MoveCandidate};
use crate::path::{manhattan, next_step};
use crate::state::{Cell, GameState};

/// Sum of Manhattan distances from `cell` to every pursuer. Higher is safer.
pub fn danger_score(cell: Cell, pursuers: &[Cell]) -> u32 {
    pursuers.iter().map(|&p| manhattan(cell, p)).sum()
}

/// The walkable neighbour of the evader with the highest danger score.
///
/// Ties keep the first candidate in direction order. `None` when the evader
/// has no walkable neighbour.
pub fn best_evasion_target(state: &GameState) -> Option<MoveCandidate> {
    let mut best: Option<MoveCandidate> = None;
    for cell in state.board().neighbors(state.evader()) {
        let candidate = MoveCandidate::new(cell, danger_score(cell, state.pursuers()));
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }
    best
}

/// Computes the evader's cell for this turn.
///
/// Returns the current cell when no safe move exists, or when the
/// path-directed strategy finds no non-trivial path to the target.
pub fn select_evader_move(state: &GameState, strategy: EvasionStrategy) -> Cell {
    let current = state.evader();
    let Some(target) = best_evasion_target(state) else {
        return current;
    };

    match strategy {
        EvasionStrategy::Direct => target.cell,
        EvasionStrategy::PathDirected => {
            next_step(state.board(), current, target.cell).unwrap_or(current)
        }
    }
}
