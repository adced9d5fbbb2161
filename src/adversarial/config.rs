//! Adversarial search configuration parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::SearchError;

/// How adversaries are modeled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdversarialMode {
    /// Adversaries minimize; the full tree is searched.
    Minimax,
    /// Same values as minimax, with branches pruned by alpha/beta bounds.
    AlphaBeta,
    /// Adversaries pick uniformly at random; their value is the mean.
    Expectimax,
}

impl AdversarialMode {
    /// All modes in a stable order.
    pub const ALL: [AdversarialMode; 3] = [
        AdversarialMode::Minimax,
        AdversarialMode::AlphaBeta,
        AdversarialMode::Expectimax,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AdversarialMode::Minimax => "minimax",
            AdversarialMode::AlphaBeta => "alphabeta",
            AdversarialMode::Expectimax => "expectimax",
        }
    }

    /// Whether alpha/beta bounds are threaded through the traversal.
    #[must_use]
    pub fn prunes(self) -> bool {
        matches!(self, AdversarialMode::AlphaBeta)
    }
}

impl fmt::Display for AdversarialMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AdversarialMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(AdversarialMode::Minimax),
            "alphabeta" | "alpha_beta" | "alpha-beta" => Ok(AdversarialMode::AlphaBeta),
            "expectimax" => Ok(AdversarialMode::Expectimax),
            _ => Err(SearchError::UnknownName {
                kind: "adversarial mode",
                name: s.to_string(),
            }),
        }
    }
}

/// Adversarial search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdversarialConfig {
    /// Agent model used for adversaries.
    pub mode: AdversarialMode,

    /// Search depth in full rounds (every agent moves once per round).
    /// Must be at least 1.
    pub depth: u32,

    /// Random seed for tie-breaking.
    /// Same seed produces deterministic decisions.
    pub seed: u64,
}

impl Default for AdversarialConfig {
    fn default() -> Self {
        Self {
            mode: AdversarialMode::Minimax,
            depth: 2,
            seed: 42,
        }
    }
}

impl AdversarialConfig {
    /// Create a config for the given mode and depth.
    pub fn new(mode: AdversarialMode, depth: u32) -> Self {
        Self {
            mode,
            depth,
            ..Self::default()
        }
    }

    /// Create a new config with a different mode.
    pub fn with_mode(mut self, mode: AdversarialMode) -> Self {
        self.mode = mode;
        self
    }

    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
