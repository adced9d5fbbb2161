//! Search problem contracts consumed by the graph-search engine.
//!
//! Environments implement `SearchProblem` to expose:
//! - A start state and a goal test
//! - Successors with their actions and step costs
//! - The cost of an action sequence
//!
//! The engine calls into `SearchProblem` but never inspects states or
//! actions beyond hashing and comparing them.

pub mod definition;
pub mod heuristic;

pub use definition::{SearchProblem, Successor};
pub use heuristic::{null_heuristic, Heuristic, NullHeuristic};
