//! Uninformed and heuristic graph search.
//!
//! ## Overview
//!
//! Given a [`SearchProblem`](crate::problem::SearchProblem), produce the
//! action sequence from the start state to a goal state. Four strategies
//! are available:
//!
//! - **Depth-first**: LIFO stack, membership set, no optimality guarantee
//! - **Breadth-first**: FIFO queue, fewest actions when step costs are uniform
//! - **Uniform-cost**: cheapest path under non-negative step costs
//! - **A\***: cheapest path when the heuristic is consistent
//!
//! Every call owns its frontier and visited structures; nothing is shared
//! between calls.
//!
//! ## Usage
//!
//! ```rust
//! use rust_search::games::maze::{manhattan_heuristic, Maze, PositionProblem};
//! use rust_search::search::{a_star_search, breadth_first_search};
//!
//! let maze = Maze::parse(
//!     "%%%%%\n\
//!      %P  %\n\
//!      %%% %\n\
//!      %.  %\n\
//!      %%%%%",
//! )
//! .unwrap();
//! let problem = PositionProblem::new(&maze);
//!
//! let bfs = breadth_first_search(&problem);
//! let astar = a_star_search(&problem, &manhattan_heuristic);
//! assert!(bfs.reached_goal());
//! assert_eq!(bfs.len(), astar.len());
//! ```

pub mod config;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod plan;
pub mod stats;

// Re-export main types
pub use config::{SearchConfig, Strategy};
pub use frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
pub use graph::{
    a_star_search, breadth_first_search, depth_first_search, search, uniform_cost_search,
    GraphSearch,
};
pub use node::SearchNode;
pub use plan::{Plan, PlanOutcome};
pub use stats::SearchStats;
