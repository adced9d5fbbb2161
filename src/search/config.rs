//! Graph search configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::SearchError;

/// Frontier discipline and visited policy used by a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// LIFO stack, membership set checked on pop.
    DepthFirst,
    /// FIFO queue, membership set checked on pop.
    BreadthFirst,
    /// Min-priority queue on path cost, best-cost map.
    UniformCost,
    /// Min-priority queue on path cost plus heuristic, explored list.
    AStar,
}

impl Strategy {
    /// All strategies in a stable order.
    pub const ALL: [Strategy; 4] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::UniformCost,
        Strategy::AStar,
    ];

    /// Short name, also accepted by `FromStr`.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::UniformCost => "ucs",
            Strategy::AStar => "astar",
        }
    }

    /// Whether this strategy consults a heuristic.
    #[must_use]
    pub fn is_informed(self) -> bool {
        matches!(self, Strategy::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth_first" | "depthfirst" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth_first" | "breadthfirst" => Ok(Strategy::BreadthFirst),
            "ucs" | "uniform_cost" | "uniformcost" => Ok(Strategy::UniformCost),
            "astar" | "a_star" | "a*" => Ok(Strategy::AStar),
            _ => Err(SearchError::UnknownName {
                kind: "strategy",
                name: s.to_string(),
            }),
        }
    }
}

/// Graph search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Strategy to run.
    pub strategy: Strategy,

    /// Maximum nodes to expand (0 = unlimited).
    /// When reached the search stops and reports exhaustion.
    pub max_expansions: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::AStar,
            max_expansions: 0,
        }
    }
}

impl SearchConfig {
    /// Create a config for the given strategy.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Create a new config with a different strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Create a new config with an expansion limit.
    pub fn with_max_expansions(mut self, limit: u64) -> Self {
        self.max_expansions = limit;
        self
    }

    /// Whether `expanded` nodes exhaust the configured budget.
    #[must_use]
    pub fn limit_reached(&self, expanded: u64) -> bool {
        self.max_expansions > 0 && expanded >= self.max_expansions
    }
}
