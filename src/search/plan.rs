//! Search results.

use serde::{Deserialize, Serialize};

use super::stats::SearchStats;

/// How a search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanOutcome {
    /// A goal state was popped; the actions lead to it.
    Reached,
    /// The frontier ran dry (or the expansion budget ran out) first.
    /// The actions are the partial path of the last node popped.
    Exhausted,
}

/// Action sequence produced by a graph search.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan<A> {
    pub actions: Vec<A>,
    /// Accumulated step cost of `actions`.
    pub cost: f64,
    pub outcome: PlanOutcome,
    pub stats: SearchStats,
}

impl<A> Plan<A> {
    #[must_use]
    pub fn reached_goal(&self) -> bool {
        self.outcome == PlanOutcome::Reached
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The actions, but only if they reach a goal.
    #[must_use]
    pub fn into_solution(self) -> Option<Vec<A>> {
        match self.outcome {
            PlanOutcome::Reached => Some(self.actions),
            PlanOutcome::Exhausted => None,
        }
    }
}
