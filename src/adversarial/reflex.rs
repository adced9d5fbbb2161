//! One-ply reflex agent.
//!
//! Looks only at the immediate successor of each legal action and picks
//! the best-evaluated one, breaking ties uniformly at random. Useful as a
//! baseline against the depth-limited searches.

use smallvec::SmallVec;

use crate::core::{AgentId, GameRng, Result};
use crate::game::{Agent, Evaluator, GameState};

pub struct ReflexAgent<S: GameState> {
    evaluator: Box<dyn Evaluator<S>>,
    rng: GameRng,
}

impl<S: GameState> ReflexAgent<S> {
    pub fn new<E: Evaluator<S> + 'static>(evaluator: E, seed: u64) -> Self {
        Self {
            evaluator: Box::new(evaluator),
            rng: GameRng::new(seed),
        }
    }

    /// Best action for agent 0 by successor evaluation.
    ///
    /// Returns `None` if agent 0 has no legal actions.
    pub fn choose(&mut self, state: &S) -> Option<S::Action> {
        let actions = state.legal_actions(AgentId::CONTROLLED);
        if actions.is_empty() {
            return None;
        }

        let scores: SmallVec<[f64; 8]> = actions
            .iter()
            .map(|action| {
                let next = state.successor(AgentId::CONTROLLED, action);
                self.evaluator.evaluate(&next)
            })
            .collect();

        let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let tied: SmallVec<[usize; 8]> = scores
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score == best)
            .map(|(i, _)| i)
            .collect();

        self.rng.choose(&tied).map(|&i| actions[i].clone())
    }
}

impl<S: GameState> Agent<S> for ReflexAgent<S> {
    fn get_action(&mut self, state: &S) -> Result<Option<S::Action>> {
        Ok(self.choose(state))
    }

    fn name(&self) -> &str {
        "reflex"
    }
}
