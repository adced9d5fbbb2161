//! Small environments for exercising the engines.
//!
//! - `maze`: grid maze exposed as a search problem
//! - `tree`: scripted game trees exposed as game states

pub mod maze;
pub mod tree;
