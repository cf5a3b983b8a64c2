//! Exhaustive checks of path and policy guarantees on the reference meadow.

use pursuit_core::{
    Board, Cell, EvasionStrategy, GameState, find_path, manhattan, next_step,
    policy::{best_evasion_target, danger_score},
    select_evader_move, select_pursuer_move,
};

const MEADOW: [&str; 7] = [
    ". . . . . W . . .",
    ". W . W . . . W .",
    ". . . . . W . . .",
    ". W B . . . . W .",
    ". . W . . . . . .",
    ". . M . W . . . .",
    ". . . . . M . . .",
];

fn meadow() -> GameState {
    GameState::from_layout(&MEADOW).unwrap()
}

fn all_cells(board: &Board) -> Vec<Cell> {
    board.iter().map(|(cell, _)| cell).collect()
}

#[test]
fn paths_stay_on_walkable_cells_and_are_connected() {
    let state = meadow();
    let board = state.board();
    let cells = all_cells(board);

    for &start in &cells {
        for &goal in &cells {
            let Some(path) = find_path(board, start, goal) else {
                assert!(!board.is_walkable(start) || !board.is_walkable(goal));
                continue;
            };
            assert_eq!(path[0], start);
            assert_eq!(*path.last().unwrap(), goal);
            assert!(path.iter().all(|&c| board.is_walkable(c)));
            assert!(path.windows(2).all(|w| manhattan(w[0], w[1]) == 1));
            assert!(path.len() as u32 > manhattan(start, goal));
        }
    }
}

#[test]
fn next_step_is_second_path_cell() {
    let state = meadow();
    let board = state.board();
    let start = state.evader();
    for goal in all_cells(board) {
        let expected = find_path(board, start, goal).and_then(|p| p.get(1).copied());
        assert_eq!(next_step(board, start, goal), expected);
    }
}

#[test]
fn evader_choice_is_walkable_adjacent_and_maximal() {
    let state = meadow();
    let board = state.board();

    let walls: Vec<Cell> = board
        .iter()
        .filter(|(_, kind)| !kind.is_walkable())
        .map(|(cell, _)| cell)
        .collect();

    for evader in all_cells(board).into_iter().filter(|&c| board.is_walkable(c)) {
        let probe = GameState::from_parts(
            board.width(),
            board.height(),
            &walls,
            evader,
            state.pursuers(),
        )
        .unwrap();

        for strategy in [EvasionStrategy::Direct, EvasionStrategy::PathDirected] {
            let chosen = select_evader_move(&probe, strategy);
            assert!(board.is_walkable(chosen));
            assert!(manhattan(chosen, evader) <= 1);

            if chosen != evader {
                let chosen_score = danger_score(chosen, probe.pursuers());
                for neighbor in board.neighbors(evader) {
                    assert!(chosen_score >= danger_score(neighbor, probe.pursuers()));
                }
            }
        }

        // With a direct neighbour as target both strategies agree.
        assert_eq!(
            select_evader_move(&probe, EvasionStrategy::Direct),
            select_evader_move(&probe, EvasionStrategy::PathDirected)
        );
        assert_eq!(
            best_evasion_target(&probe).map_or(evader, |t| t.cell),
            select_evader_move(&probe, EvasionStrategy::Direct)
        );
    }
}

#[test]
fn pursuer_moves_never_increase_distance() {
    let state = meadow();
    let board = state.board();
    let cells: Vec<Cell> = all_cells(board)
        .into_iter()
        .filter(|&c| board.is_walkable(c))
        .collect();

    for &pursuer in &cells {
        for &evader in &cells {
            let next = select_pursuer_move(board, pursuer, evader);
            assert!(board.is_walkable(next));
            assert!(manhattan(next, pursuer) <= 1);
            assert!(manhattan(next, evader) <= manhattan(pursuer, evader));
        }
    }
}

#[test]
fn rendering_the_same_board_twice_is_identical() {
    let state = meadow();
    assert_eq!(state.board().to_string(), state.board().to_string());
}
