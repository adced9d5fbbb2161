//! Game contracts consumed by the adversarial engine.
//!
//! Games implement `GameState` to expose legal actions, successors and
//! win/lose detection for every agent. Evaluation is supplied separately
//! as an `Evaluator` value so the same game can be searched with
//! different heuristics.

pub mod agent;
pub mod evaluation;
pub mod state;

pub use agent::Agent;
pub use evaluation::{Evaluator, ScoreEvaluation, Scored};
pub use state::GameState;
