//! Grid distance and shortest-path search.
//!
//! - [`manhattan`] is the distance used by every policy and by A* as its
//!   heuristic. It is admissible and consistent for 4-connected unit-cost grids.
//! - [`find_path`] runs A* over walkable cells and returns the full path.
//! - [`next_step`] is the single-step view of [`find_path`].
mod astar;
mod heuristic;

pub use astar::{find_path, next_step};
pub use heuristic::manhattan;
