//! Game state trait for turn-ordered multi-agent games.
//!
//! Games implement `GameState` to define:
//! - Legal actions for each agent
//! - How an action produces the next state
//! - Win/lose conditions

use crate::core::AgentId;

/// Game state trait.
///
/// The adversarial engine calls these methods but never interprets
/// game-specific concepts directly.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec if the agent can't act
/// - `successor`: Must not mutate `self`; return the next state
/// - `is_win` / `is_lose`: Seen from the controlled agent (agent 0)
pub trait GameState: Sized {
    /// Opaque token for one legal move.
    type Action: Clone;

    /// Legal actions for `agent` in this state.
    fn legal_actions(&self, agent: AgentId) -> Vec<Self::Action>;

    /// State after `agent` takes `action`.
    fn successor(&self, agent: AgentId, action: &Self::Action) -> Self;

    /// Number of agents, the controlled agent included.
    fn num_agents(&self) -> usize;

    /// Whether the controlled agent has won.
    fn is_win(&self) -> bool;

    /// Whether the controlled agent has lost.
    fn is_lose(&self) -> bool;

    // === Convenience Methods ===

    /// Whether the game has ended either way.
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}
