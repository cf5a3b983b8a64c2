mod board;
mod common;

pub use board::{Board, CellKind};
pub use common::{Cell, Direction};
