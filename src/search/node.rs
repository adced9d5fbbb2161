//! Search nodes.

use crate::problem::Successor;

/// A state together with the path that reached it and its cost.
///
/// Nodes are never mutated: each successor produces a new node.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchNode<S, A> {
    pub state: S,
    pub actions: Vec<A>,
    pub cost: f64,
}

impl<S, A: Clone> SearchNode<S, A> {
    /// Node for the start state: empty path, zero cost.
    pub fn root(state: S) -> Self {
        Self {
            state,
            actions: Vec::new(),
            cost: 0.0,
        }
    }

    /// Node reached by following `successor` from this node.
    pub fn child(&self, successor: Successor<S, A>) -> Self {
        let mut actions = Vec::with_capacity(self.actions.len() + 1);
        actions.extend_from_slice(&self.actions);
        actions.push(successor.action);
        Self {
            state: successor.state,
            actions,
            cost: self.cost + successor.cost,
        }
    }

    /// Number of actions from the start state.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.actions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_node() {
        let node: SearchNode<&str, char> = SearchNode::root("A");
        assert_eq!(node.state, "A");
        assert!(node.actions.is_empty());
        assert_eq!(node.cost, 0.0);
        assert_eq!(node.depth(), 0);
    }

    #[test]
    fn test_child_extends_path_and_cost() {
        let root: SearchNode<&str, char> = SearchNode::root("A");
        let b = root.child(Successor::new("B", 'x', 2.0));
        let c = b.child(Successor::new("C", 'y', 0.5));

        assert_eq!(c.state, "C");
        assert_eq!(c.actions, vec!['x', 'y']);
        assert_eq!(c.cost, 2.5);
        assert_eq!(c.depth(), 2);
        // Parent untouched
        assert_eq!(b.actions, vec!['x']);
    }
}
