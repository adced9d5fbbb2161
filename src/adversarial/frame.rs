//! Explicit traversal frames for the game tree.
//!
//! One frame per interior node on the current path. A frame remembers
//! which child to visit next and the values of the children already
//! visited, so the engine can walk the tree with a plain loop instead of
//! recursion.

use smallvec::SmallVec;

use crate::core::AgentId;

/// How a node aggregates its children's values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Controlled agent: maximum.
    Max,
    /// Adversary under minimax/alpha-beta: minimum.
    Min,
    /// Adversary under expectimax: arithmetic mean.
    Chance,
}

/// One interior node on the traversal stack.
#[derive(Debug)]
pub struct Frame<S, A> {
    /// Owned state; `None` for the root, which stays borrowed by the caller.
    pub state: Option<S>,
    /// Full rounds left below this node.
    pub depth: u32,
    pub agent: AgentId,
    pub role: Role,
    pub actions: Vec<A>,
    /// Index of the next child to visit.
    pub next: usize,
    /// Values of visited children, in action order.
    pub values: SmallVec<[f64; 8]>,
    /// Best value the maximizer can guarantee on this path.
    pub alpha: f64,
    /// Best value the minimizer can guarantee on this path.
    pub beta: f64,
    /// Set once a cutoff skips the remaining children.
    pub cut: bool,
}

impl<S, A> Frame<S, A> {
    pub fn new(
        state: Option<S>,
        depth: u32,
        agent: AgentId,
        role: Role,
        actions: Vec<A>,
        alpha: f64,
        beta: f64,
    ) -> Self {
        Self {
            state,
            depth,
            agent,
            role,
            actions,
            next: 0,
            values: SmallVec::new(),
            alpha,
            beta,
            cut: false,
        }
    }

    /// Whether every child has been visited or a cutoff ended the loop.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.cut || self.next >= self.actions.len()
    }

    /// Children left unvisited.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.actions.len().saturating_sub(self.next)
    }

    /// Record a child's value and, when `pruning`, tighten the bounds.
    ///
    /// Returns `true` if this value triggered a cutoff. Cutoffs happen only
    /// on `beta < alpha`; equality never prunes.
    pub fn absorb(&mut self, value: f64, pruning: bool) -> bool {
        self.values.push(value);
        if !pruning {
            return false;
        }

        match self.role {
            Role::Max => self.alpha = self.alpha.max(value),
            Role::Min => self.beta = self.beta.min(value),
            Role::Chance => return false,
        }

        if self.beta < self.alpha {
            self.cut = true;
        }
        self.cut
    }

    /// Value backed up to the parent.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self.role {
            Role::Max => self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Role::Min => self.values.iter().copied().fold(f64::INFINITY, f64::min),
            Role::Chance => {
                if self.values.is_empty() {
                    0.0
                } else {
                    self.values.iter().sum::<f64>() / self.values.len() as f64
                }
            }
        }
    }

    /// Indices of the children whose value equals the backed-up value.
    #[must_use]
    pub fn best_indices(&self) -> SmallVec<[usize; 8]> {
        let best = self.value();
        self.values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == best)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(role: Role, n: usize) -> Frame<(), usize> {
        Frame::new(
            None,
            1,
            AgentId::CONTROLLED,
            role,
            (0..n).collect(),
            f64::NEG_INFINITY,
            f64::INFINITY,
        )
    }

    #[test]
    fn test_max_min_chance_values() {
        let mut max = frame(Role::Max, 3);
        let mut min = frame(Role::Min, 3);
        let mut chance = frame(Role::Chance, 3);
        for v in [4.0, 10.0, 1.0] {
            max.absorb(v, false);
            min.absorb(v, false);
            chance.absorb(v, false);
        }
        assert_eq!(max.value(), 10.0);
        assert_eq!(min.value(), 1.0);
        assert_eq!(chance.value(), 5.0);
    }

    #[test]
    fn test_best_indices_collects_ties() {
        let mut max = frame(Role::Max, 4);
        for v in [3.0, 7.0, 2.0, 7.0] {
            max.absorb(v, false);
        }
        assert_eq!(max.best_indices().as_slice(), &[1, 3]);
    }

    #[test]
    fn test_min_node_cuts_below_alpha() {
        let mut min = frame(Role::Min, 3);
        min.alpha = 5.0;
        assert!(min.absorb(3.0, true));
        assert!(min.is_done());
        assert_eq!(min.beta, 3.0);
    }

    #[test]
    fn test_equal_bounds_do_not_cut() {
        let mut min = frame(Role::Min, 3);
        min.alpha = 5.0;
        assert!(!min.absorb(5.0, true));

        let mut max = frame(Role::Max, 3);
        max.beta = 5.0;
        assert!(!max.absorb(5.0, true));
        assert!(max.absorb(6.0, true));
    }

    #[test]
    fn test_no_cut_without_pruning() {
        let mut min = frame(Role::Min, 3);
        min.alpha = 5.0;
        assert!(!min.absorb(3.0, false));
        assert_eq!(min.beta, f64::INFINITY);
    }

    #[test]
    fn test_remaining() {
        let mut f = frame(Role::Max, 3);
        assert_eq!(f.remaining(), 3);
        f.next = 2;
        assert_eq!(f.remaining(), 1);
        assert!(!f.is_done());
        f.next = 3;
        assert!(f.is_done());
    }
}
