//! Agent identification for turn-ordered games.
//!
//! Agents take turns in index order. Agent 0 is always the controlled
//! (maximizing) agent; every other index is an adversary.

use serde::{Deserialize, Serialize};

/// Agent identifier supporting 1-256 agents.
///
/// Agent indices are 0-based: the controlled agent is `AgentId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u8);

impl AgentId {
    /// The controlled agent, always index 0.
    pub const CONTROLLED: AgentId = AgentId(0);

    /// Largest agent count an id can address.
    pub const MAX_AGENTS: usize = u8::MAX as usize + 1;

    /// Create a new agent ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw agent index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is the controlled agent.
    #[must_use]
    pub const fn is_controlled(self) -> bool {
        self.0 == 0
    }

    /// Whether this agent is the last to move in a round of `agent_count` agents.
    #[must_use]
    pub fn is_last(self, agent_count: usize) -> bool {
        self.index() + 1 >= agent_count
    }

    /// The agent that moves after this one, wrapping to agent 0 after the last.
    #[must_use]
    pub fn next(self, agent_count: usize) -> Self {
        if self.is_last(agent_count) {
            return Self::CONTROLLED;
        }
        // Counts past MAX_AGENTS wrap instead of overflowing.
        u8::try_from(self.index() + 1).map_or(Self::CONTROLLED, Self)
    }

    /// Iterate over all agent IDs for a game with `agent_count` agents.
    ///
    /// ```
    /// use rust_search::core::AgentId;
    ///
    /// let agents: Vec<_> = AgentId::all(3).collect();
    /// assert_eq!(agents.len(), 3);
    /// assert_eq!(agents[0], AgentId::CONTROLLED);
    /// assert_eq!(agents[2], AgentId::new(2));
    /// ```
    pub fn all(agent_count: usize) -> impl Iterator<Item = AgentId> {
        (0..agent_count.min(Self::MAX_AGENTS)).map(|i| AgentId(i as u8))
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent {}", self.0)
    }
}
