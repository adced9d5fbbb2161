//! Adversarial search statistics for diagnostics and pruning checks.

use serde::{Deserialize, Serialize};

/// Statistics collected during one decision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdversarialStats {
    /// Interior game-tree nodes visited (the root included).
    pub nodes: u64,

    /// Calls to the static evaluator.
    pub evaluations: u64,

    /// Successor states generated.
    pub successors: u64,

    /// Nodes whose remaining children were skipped by a cutoff.
    pub prunes: u64,

    /// Deepest explicit frame stack reached.
    pub max_stack: usize,

    /// Total time spent deciding (microseconds).
    pub time_us: u64,
}

impl AdversarialStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            (self.nodes + self.evaluations) as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
