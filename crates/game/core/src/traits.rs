//! Boundary traits implemented outside the core.
//!
//! The engine calls into a [`Renderer`] once per completed turn and into a
//! [`Notifier`] for informational and terminal signals. Implementations decide
//! how (or whether) anything is shown to a user.

use crate::state::{Board, Cell};

/// Failure reported by a [`Renderer`].
#[derive(Debug, thiserror::Error)]
#[error("renderer failed: {source}")]
pub struct RenderError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl RenderError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Draws the authoritative post-turn board.
///
/// Called once per completed, non-capturing turn. Implementations must not keep
/// hidden render state: drawing the same board twice yields the same output.
pub trait Renderer {
    fn render(&mut self, board: &Board) -> Result<(), RenderError>;
}

/// Receives the engine's informational and terminal signals.
pub trait Notifier {
    /// Called at the start of every turn with its 1-based number.
    fn turn_started(&mut self, turn: u32);

    /// Called exactly once, when a pursuer catches the evader.
    fn captured(&mut self, turn: u32, cell: Cell);

    /// Called exactly once, when the turn limit ends the game.
    fn max_turns_reached(&mut self, _turn: u32) {}
}

/// Discards every board.
impl Renderer for () {
    fn render(&mut self, _board: &Board) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Ignores every signal.
impl Notifier for () {
    fn turn_started(&mut self, _turn: u32) {}

    fn captured(&mut self, _turn: u32, _cell: Cell) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, board: &Board) -> Result<(), RenderError> {
        (**self).render(board)
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn turn_started(&mut self, turn: u32) {
        (**self).turn_started(turn)
    }

    fn captured(&mut self, turn: u32, cell: Cell) {
        (**self).captured(turn, cell)
    }

    fn max_turns_reached(&mut self, turn: u32) {
        (**self).max_turns_reached(turn)
    }
}
