//! Core game-tree search algorithm.
//!
//! Walks the game tree depth-first with an explicit stack of
//! [`Frame`]s. Agent 0 maximizes; every other agent minimizes
//! (minimax, alpha-beta) or averages (expectimax). Depth counts full
//! rounds: it drops by one only after the last agent has moved.

use std::time::Instant;

use tracing::debug;

use crate::core::{AgentId, GameRng, Result, SearchError};
use crate::game::{Agent, Evaluator, GameState};

use super::config::{AdversarialConfig, AdversarialMode};
use super::frame::{Frame, Role};
use super::stats::AdversarialStats;

/// Outcome of a decision at the root.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision<A> {
    /// Chosen action; `None` when the root itself is treated as terminal.
    pub action: Option<A>,
    /// Backed-up value of the root.
    pub value: f64,
}

/// Adversarial search context.
///
/// Owns the configuration, the injected evaluator and the tie-breaking
/// RNG. Every decision builds and drops its own traversal stack.
pub struct AdversarialSearch<S: GameState> {
    /// Search configuration.
    config: AdversarialConfig,

    /// Static evaluator used at cutoff and terminal states.
    evaluator: Option<Box<dyn Evaluator<S>>>,

    /// RNG for tie-breaking at the root.
    rng: GameRng,

    /// Statistics of the last decision.
    stats: AdversarialStats,

    name: String,
}

impl<S: GameState> AdversarialSearch<S> {
    /// Create a new search context without an evaluator.
    ///
    /// Decisions fail with [`SearchError::NotImplemented`] until one is set.
    pub fn new(config: AdversarialConfig) -> Self {
        let rng = GameRng::new(config.seed);
        let name = format!("{}(depth={})", config.mode, config.depth);

        Self {
            config,
            evaluator: None,
            rng,
            stats: AdversarialStats::default(),
            name,
        }
    }

    /// Set the static evaluator.
    pub fn with_evaluator<E: Evaluator<S> + 'static>(mut self, evaluator: E) -> Self {
        self.evaluator = Some(Box::new(evaluator));
        self
    }

    /// Replace the tie-breaking RNG.
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn config(&self) -> &AdversarialConfig {
        &self.config
    }

    /// Statistics of the last decision.
    #[must_use]
    pub fn stats(&self) -> &AdversarialStats {
        &self.stats
    }

    /// Choose the best action for agent 0.
    ///
    /// `Ok(None)` when the state is terminal or agent 0 cannot move.
    pub fn select_action(&mut self, state: &S) -> Result<Option<S::Action>> {
        self.decide(state).map(|decision| decision.action)
    }

    /// Choose the best action for agent 0, with its backed-up value.
    pub fn decide(&mut self, state: &S) -> Result<Decision<S::Action>> {
        if self.config.depth == 0 {
            return Err(SearchError::InvalidDepth { depth: 0 });
        }
        let agents = state.num_agents();
        if agents == 0 || agents > AgentId::MAX_AGENTS {
            return Err(SearchError::InvalidAgentCount { count: agents });
        }
        let evaluator = self
            .evaluator
            .take()
            .ok_or_else(|| SearchError::not_implemented("evaluation function"))?;

        let start = Instant::now();
        self.stats.reset();
        let decision = self.run(state, evaluator.as_ref());
        self.stats.time_us = start.elapsed().as_micros() as u64;
        self.evaluator = Some(evaluator);

        debug!(
            mode = %self.config.mode,
            depth = self.config.depth,
            value = decision.value,
            has_action = decision.action.is_some(),
            nodes = self.stats.nodes,
            evaluations = self.stats.evaluations,
            prunes = self.stats.prunes,
            "adversarial decision"
        );

        Ok(decision)
    }

    /// Depth-first traversal over an explicit frame stack.
    fn run(&mut self, root: &S, evaluator: &dyn Evaluator<S>) -> Decision<S::Action> {
        let agent_count = root.num_agents();
        let pruning = self.config.mode.prunes();

        if root.is_terminal() {
            return self.leaf(root, evaluator);
        }
        let root_actions = root.legal_actions(AgentId::CONTROLLED);
        if root_actions.is_empty() {
            return self.leaf(root, evaluator);
        }

        let mut stack: Vec<Frame<S, S::Action>> = Vec::new();
        stack.push(Frame::new(
            None,
            self.config.depth,
            AgentId::CONTROLLED,
            Role::Max,
            root_actions,
            f64::NEG_INFINITY,
            f64::INFINITY,
        ));
        self.stats.nodes += 1;
        self.stats.max_stack = 1;

        while let Some(frame) = stack.last_mut() {
            if !frame.is_done() {
                let action = &frame.actions[frame.next];
                frame.next += 1;

                let parent = frame.state.as_ref().unwrap_or(root);
                let child = parent.successor(frame.agent, action);
                self.stats.successors += 1;

                let child_agent = frame.agent.next(agent_count);
                let child_depth = if frame.agent.is_last(agent_count) {
                    frame.depth - 1
                } else {
                    frame.depth
                };

                let child_actions = if child_depth == 0 || child.is_terminal() {
                    Vec::new()
                } else {
                    child.legal_actions(child_agent)
                };

                // Cutoff, terminal, or stuck agent: evaluate in place.
                if child_actions.is_empty() {
                    self.stats.evaluations += 1;
                    let value = evaluator.evaluate(&child);
                    if frame.absorb(value, pruning) && frame.remaining() > 0 {
                        self.stats.prunes += 1;
                    }
                    continue;
                }

                let (alpha, beta) = (frame.alpha, frame.beta);
                stack.push(Frame::new(
                    Some(child),
                    child_depth,
                    child_agent,
                    self.role_of(child_agent),
                    child_actions,
                    alpha,
                    beta,
                ));
                self.stats.nodes += 1;
                self.stats.max_stack = self.stats.max_stack.max(stack.len());
                continue;
            }

            let Some(done) = stack.pop() else { break };
            match stack.last_mut() {
                Some(parent) => {
                    if parent.absorb(done.value(), pruning) && parent.remaining() > 0 {
                        self.stats.prunes += 1;
                    }
                }
                None => return self.choose(done),
            }
        }

        // The root frame always returns above; an empty stack scores the root.
        Decision {
            action: None,
            value: evaluator.evaluate(root),
        }
    }

    fn role_of(&self, agent: AgentId) -> Role {
        if agent.is_controlled() {
            Role::Max
        } else if self.config.mode == AdversarialMode::Expectimax {
            Role::Chance
        } else {
            Role::Min
        }
    }

    fn leaf(&mut self, state: &S, evaluator: &dyn Evaluator<S>) -> Decision<S::Action> {
        self.stats.evaluations += 1;
        Decision {
            action: None,
            value: evaluator.evaluate(state),
        }
    }

    /// Pick uniformly among the root actions tied for the best value.
    fn choose(&mut self, root: Frame<S, S::Action>) -> Decision<S::Action> {
        let value = root.value();
        let best = root.best_indices();
        let action = self
            .rng
            .choose(&best)
            .map(|&index| root.actions[index].clone());

        Decision { action, value }
    }
}

impl<S: GameState> Agent<S> for AdversarialSearch<S> {
    fn get_action(&mut self, state: &S) -> Result<Option<S::Action>> {
        self.select_action(state)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
