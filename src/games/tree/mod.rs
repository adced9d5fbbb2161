//! Scripted game trees for exercising the adversarial engine.
//!
//! A tree is written out explicitly: every node carries the value the
//! evaluator should report for it, an optional win/lose flag, and its
//! children. Agents take turns down the tree in index order, so with
//! `n` agents one full round spans `n` levels.
//!
//! ```
//! use rust_search::core::AgentId;
//! use rust_search::game::GameState;
//! use rust_search::games::tree::{branch, leaf, TreeState};
//!
//! let state = TreeState::new(branch(vec![leaf(5.0), leaf(10.0)]), 2);
//! assert_eq!(state.legal_actions(AgentId::CONTROLLED), vec![0, 1]);
//! assert_eq!(state.successor(AgentId::CONTROLLED, &1).value(), 10.0);
//! assert_eq!(state.successor_count(), 1);
//! ```

mod state;

pub use state::{branch, leaf, lose, valued_branch, win, Outcome, TreeNode, TreeState};
