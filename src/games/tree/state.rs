//! Scripted game tree state.

use std::cell::Cell;
use std::rc::Rc;

use crate::core::AgentId;
use crate::game::{GameState, Scored};

/// Terminal result seen from agent 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

/// One node of a scripted tree.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode {
    /// Value the evaluator reports for this node.
    pub value: f64,
    pub outcome: Option<Outcome>,
    pub children: Vec<Rc<TreeNode>>,
}

/// Node without children.
pub fn leaf(value: f64) -> TreeNode {
    TreeNode {
        value,
        outcome: None,
        children: Vec::new(),
    }
}

/// Interior node worth 0 when cut off.
pub fn branch(children: Vec<TreeNode>) -> TreeNode {
    valued_branch(0.0, children)
}

/// Interior node with an explicit cutoff value.
pub fn valued_branch(value: f64, children: Vec<TreeNode>) -> TreeNode {
    TreeNode {
        value,
        outcome: None,
        children: children.into_iter().map(Rc::new).collect(),
    }
}

/// Won node. Children, if added later, are never explored.
pub fn win(value: f64) -> TreeNode {
    TreeNode {
        outcome: Some(Outcome::Win),
        ..leaf(value)
    }
}

/// Lost node.
pub fn lose(value: f64) -> TreeNode {
    TreeNode {
        outcome: Some(Outcome::Lose),
        ..leaf(value)
    }
}

/// Position in a scripted tree.
///
/// Actions are child indices. Every state derived from the same root
/// shares one successor counter.
#[derive(Clone, Debug)]
pub struct TreeState {
    node: Rc<TreeNode>,
    agent_count: usize,
    successors: Rc<Cell<u64>>,
}

impl TreeState {
    pub fn new(root: TreeNode, agent_count: usize) -> Self {
        assert!(agent_count > 0, "Must have at least 1 agent");
        Self {
            node: Rc::new(root),
            agent_count,
            successors: Rc::new(Cell::new(0)),
        }
    }

    #[must_use]
    pub fn node(&self) -> &TreeNode {
        &self.node
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.node.value
    }

    /// Successors generated from this tree so far.
    #[must_use]
    pub fn successor_count(&self) -> u64 {
        self.successors.get()
    }
}

impl GameState for TreeState {
    type Action = usize;

    fn legal_actions(&self, _agent: AgentId) -> Vec<usize> {
        (0..self.node.children.len()).collect()
    }

    fn successor(&self, _agent: AgentId, action: &usize) -> Self {
        self.successors.set(self.successors.get() + 1);
        Self {
            node: Rc::clone(&self.node.children[*action]),
            agent_count: self.agent_count,
            successors: Rc::clone(&self.successors),
        }
    }

    fn num_agents(&self) -> usize {
        self.agent_count
    }

    fn is_win(&self) -> bool {
        self.node.outcome == Some(Outcome::Win)
    }

    fn is_lose(&self) -> bool {
        self.node.outcome == Some(Outcome::Lose)
    }
}

impl Scored for TreeState {
    fn score(&self) -> f64 {
        self.node.value
    }
}
