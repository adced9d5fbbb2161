use super::state::GameState;
use crate::core::Result;

/// Decision-making agent for the controlled side of a game.
pub trait Agent<S: GameState> {
    /// Choose an action for agent 0.
    ///
    /// `Ok(None)` means the agent has nothing to do (terminal state or no
    /// legal actions).
    fn get_action(&mut self, state: &S) -> Result<Option<S::Action>>;

    /// Get the agent's name
    fn name(&self) -> &str;
}
