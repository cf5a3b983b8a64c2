use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::heuristic::manhattan;
use crate::state::{Board, Cell};

/// Open-set entry for one A* invocation.
///
/// Ordered so the max-heap pops the lowest f-score first, and among equal
/// f-scores the earliest inserted entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PathNode {
    index: usize,
    g: u32,
    f: u32,
    seq: u64,
}

impl Ord for PathNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for PathNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes a shortest walkable path from `start` to `goal`, both inclusive.
///
/// Returns `None` when either endpoint is not walkable or no route exists.
/// Edges have unit cost and only orthogonal moves are considered. Ties on
/// f-score are broken by insertion order, and neighbours are inserted in
/// up, down, left, right order, so results are reproducible.
pub fn find_path(board: &Board, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
    if !board.is_walkable(start) || !board.is_walkable(goal) {
        return None;
    }
    let start_index = board.index(start)?;
    let goal_index = board.index(goal)?;

    // Per-cell best g-score and predecessor, keyed by flattened index.
    let mut g_score = vec![u32::MAX; board.len()];
    let mut came_from: Vec<Option<usize>> = vec![None; board.len()];
    let mut open = BinaryHeap::new();
    let mut seq = 0u64;

    g_score[start_index] = 0;
    open.push(PathNode {
        index: start_index,
        g: 0,
        f: manhattan(start, goal),
        seq,
    });

    while let Some(node) = open.pop() {
        if node.index == goal_index {
            return Some(reconstruct(board, &came_from, goal_index));
        }
        // Stale entry superseded by a cheaper route.
        if node.g > g_score[node.index] {
            continue;
        }

        let Some(cell) = board.cell_at(node.index) else {
            continue;
        };
        for neighbor in board.neighbors(cell) {
            let Some(next) = board.index(neighbor) else {
                continue;
            };
            let tentative = node.g + 1;
            if tentative < g_score[next] {
                g_score[next] = tentative;
                came_from[next] = Some(node.index);
                seq += 1;
                open.push(PathNode {
                    index: next,
                    g: tentative,
                    f: tentative + manhattan(neighbor, goal),
                    seq,
                });
            }
        }
    }

    None
}

/// First step of the shortest path from `start` to `goal`.
///
/// `None` when no path exists or `start == goal`.
pub fn next_step(board: &Board, start: Cell, goal: Cell) -> Option<Cell> {
    find_path(board, start, goal).and_then(|path| path.get(1).copied())
}

fn reconstruct(board: &Board, came_from: &[Option<usize>], goal_index: usize) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut current = Some(goal_index);
    while let Some(index) = current {
        if let Some(cell) = board.cell_at(index) {
            path.push(cell);
        }
        current = came_from[index];
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_board(width: u32, height: u32) -> Board {
        Board::new(width, height).unwrap()
    }

    #[test]
    fn trivial_path_contains_only_start() {
        let board = open_board(3, 3);
        let cell = Cell::new(1, 1);
        assert_eq!(find_path(&board, cell, cell), Some(vec![cell]));
        assert_eq!(next_step(&board, cell, cell), None);
    }

    #[test]
    fn open_grid_paths_are_optimal() {
        let board = open_board(9, 7);
        for (start, goal) in [
            (Cell::new(0, 0), Cell::new(6, 8)),
            (Cell::new(3, 4), Cell::new(0, 0)),
            (Cell::new(6, 0), Cell::new(0, 8)),
            (Cell::new(2, 2), Cell::new(2, 7)),
        ] {
            let path = find_path(&board, start, goal).unwrap();
            assert_eq!(path.len() as u32, manhattan(start, goal) + 1);
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&goal));
            for pair in path.windows(2) {
                assert_eq!(manhattan(pair[0], pair[1]), 1);
            }
        }
    }

    #[test]
    fn ties_prefer_earlier_inserted_directions() {
        let board = open_board(3, 3);
        let path = find_path(&board, Cell::new(0, 0), Cell::new(1, 1)).unwrap();
        assert_eq!(path, vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)]);
    }

    #[test]
    fn routes_around_walls() {
        let board = Board::from_layout(&["...", "WW.", "..."]).unwrap();
        let path = find_path(&board, Cell::new(0, 0), Cell::new(2, 0)).unwrap();
        assert_eq!(path.len(), 7);
        assert!(path.iter().all(|&c| board.is_walkable(c)));
        assert_eq!(next_step(&board, Cell::new(0, 0), Cell::new(2, 0)), Some(Cell::new(0, 1)));
    }

    #[test]
    fn wall_or_enclosed_goal_has_no_path() {
        let board = Board::from_layout(&[".W...", "W.W..", ".W...", "....."]).unwrap();
        assert_eq!(find_path(&board, Cell::new(3, 4), Cell::new(0, 1)), None);
        // (1,1) is boxed in on all four sides.
        assert_eq!(find_path(&board, Cell::new(3, 4), Cell::new(1, 1)), None);
        assert_eq!(find_path(&board, Cell::new(1, 1), Cell::new(3, 4)), None);
        assert_eq!(find_path(&board, Cell::new(3, 4), Cell::new(9, 9)), None);
    }
}
