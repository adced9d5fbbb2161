//! Graph search statistics for diagnostics and comparison.

use serde::{Deserialize, Serialize};

/// Statistics collected during one graph search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes popped from the frontier.
    pub popped: u64,

    /// Nodes whose successors were generated.
    pub expanded: u64,

    /// Expansions of a state that had already been expanded at a higher cost.
    pub reexpanded: u64,

    /// Nodes pushed onto the frontier (the start node included).
    pub generated: u64,

    /// Largest frontier size observed.
    pub max_frontier: usize,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frontier size, keeping the maximum.
    pub fn observe_frontier(&mut self, size: usize) {
        if size > self.max_frontier {
            self.max_frontier = size;
        }
    }

    /// Average successors generated per expansion.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.expanded == 0 {
            0.0
        } else {
            self.generated.saturating_sub(1) as f64 / self.expanded as f64
        }
    }
}
