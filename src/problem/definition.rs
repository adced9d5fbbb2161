//! Search problem trait for state-space implementations.
//!
//! Problems implement `SearchProblem` to define:
//! - Where the search starts
//! - Which states are goals
//! - Which states follow from a state, by which action, at what cost

use std::hash::Hash;

/// One transition out of a state.
#[derive(Clone, Debug, PartialEq)]
pub struct Successor<S, A> {
    /// State reached by taking `action`.
    pub state: S,
    /// Action that leads to `state`.
    pub action: A,
    /// Non-negative cost of the step.
    pub cost: f64,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, cost: f64) -> Self {
        Self { state, action, cost }
    }
}

/// Search problem trait.
///
/// The engines call these methods but never interpret states or actions.
///
/// ## Implementation Notes
///
/// - `successors`: Enumeration order decides tie-breaking, keep it stable
/// - Step costs must be non-negative; the engines do not check this and
///   uniform-cost and A* lose their optimality guarantee otherwise
pub trait SearchProblem {
    /// Opaque configuration of the environment.
    type State: Clone + Eq + Hash;

    /// Opaque token for one legal transition.
    type Action: Clone;

    /// The state the search starts from.
    fn start_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal test.
    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// All transitions out of `state`.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of a sequence of actions taken from the start state.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> f64;
}
