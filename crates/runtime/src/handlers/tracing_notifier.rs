use pursuit_core::{Cell, Notifier};

/// Reports engine signals as structured log lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn turn_started(&mut self, turn: u32) {
        tracing::info!(turn, "Move {}:", turn);
    }

    fn captured(&mut self, turn: u32, cell: Cell) {
        tracing::warn!(
            turn,
            row = cell.row,
            col = cell.col,
            "Game over! The bunny has been eaten by a monster."
        );
    }

    fn max_turns_reached(&mut self, turn: u32) {
        tracing::info!(turn, "Game over! Max moves reached.");
    }
}
