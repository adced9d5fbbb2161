//! Grid maze for exercising the graph-search engine.
//!
//! A small text-defined maze with walls, one start cell and goal cells,
//! wrapped as a [`SearchProblem`](crate::problem::SearchProblem) whose
//! states are positions and whose actions are compass moves.

mod layout;
mod problem;

pub use layout::{Direction, Maze, Position};
pub use problem::{euclidean_heuristic, manhattan_heuristic, PositionProblem, ILLEGAL_PATH_COST};
