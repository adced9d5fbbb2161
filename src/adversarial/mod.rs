//! Adversarial game-tree search.
//!
//! ## Overview
//!
//! Chooses an action for agent 0 in a turn-ordered game by simulating
//! every agent's play down to a fixed number of full rounds:
//!
//! - **Minimax**: adversaries minimize agent 0's value
//! - **Alpha-beta**: minimax values with pruning of irrelevant branches
//! - **Expectimax**: adversaries choose uniformly at random
//!
//! States beyond the depth limit, terminal states, and states where the
//! agent to move has no legal actions are scored by the injected
//! [`Evaluator`](crate::game::Evaluator). Ties at the root are broken by a
//! seeded RNG.
//!
//! ## Usage
//!
//! ```rust
//! use rust_search::adversarial::{AdversarialConfig, AdversarialMode, AdversarialSearch};
//! use rust_search::game::ScoreEvaluation;
//! use rust_search::games::tree::{branch, leaf, TreeState};
//!
//! let tree = branch(vec![
//!     branch(vec![leaf(3.0), leaf(12.0)]),
//!     branch(vec![leaf(2.0), leaf(4.0)]),
//! ]);
//! let state = TreeState::new(tree, 2);
//!
//! let config = AdversarialConfig::new(AdversarialMode::AlphaBeta, 1).with_seed(7);
//! let mut search = AdversarialSearch::new(config).with_evaluator(ScoreEvaluation);
//!
//! let decision = search.decide(&state).unwrap();
//! assert_eq!(decision.action, Some(0));
//! assert_eq!(decision.value, 3.0);
//! ```

pub mod config;
pub mod frame;
pub mod reflex;
pub mod search;
pub mod stats;

// Re-export main types
pub use config::{AdversarialConfig, AdversarialMode};
pub use frame::{Frame, Role};
pub use reflex::ReflexAgent;
pub use search::{AdversarialSearch, Decision};
pub use stats::AdversarialStats;
