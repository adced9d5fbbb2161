//! # rust-search
//!
//! Search engines for agents acting in grid-based adversarial environments.
//!
//! ## Design Principles
//!
//! 1. **Environment-Agnostic**: The engines only see the `SearchProblem`
//!    and `GameState` capability traits. Any state type implementing them
//!    plugs in, test doubles included.
//!
//! 2. **Injected Dependencies**: Heuristics and evaluation functions are
//!    passed in as values; randomness comes from a seeded `GameRng`.
//!
//! 3. **Fresh Every Call**: No state survives between searches. Each call
//!    owns its frontier, visited set, or traversal stack.
//!
//! ## Architecture
//!
//! - **Graph search**: depth-first, breadth-first, uniform-cost and A*
//!   over a deterministic state space, returning a `Plan`.
//!
//! - **Adversarial search**: minimax, alpha-beta and expectimax over a
//!   turn-ordered multi-agent game, driven by an explicit frame stack
//!   rather than recursion, returning a `Decision`.
//!
//! ## Modules
//!
//! - `core`: Agent IDs, RNG, errors
//! - `problem`: `SearchProblem` trait and heuristics
//! - `search`: Graph search engine
//! - `game`: `GameState` trait, evaluators, agents
//! - `adversarial`: Game-tree search engine and reflex agent
//! - `games`: Maze and scripted game tree environments

pub mod adversarial;
pub mod core;
pub mod game;
pub mod games;
pub mod problem;
pub mod search;

// Re-export commonly used types
pub use crate::core::{AgentId, GameRng, GameRngState, Result, SearchError};

pub use crate::problem::{null_heuristic, Heuristic, NullHeuristic, SearchProblem, Successor};

pub use crate::search::{
    a_star_search, breadth_first_search, depth_first_search, uniform_cost_search, GraphSearch,
    Plan, PlanOutcome, SearchConfig, SearchStats, Strategy,
};

pub use crate::game::{Agent, Evaluator, GameState, ScoreEvaluation, Scored};

pub use crate::adversarial::{
    AdversarialConfig, AdversarialMode, AdversarialSearch, AdversarialStats, Decision,
    ReflexAgent,
};
