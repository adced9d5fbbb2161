//! Frontier containers for pending search nodes.
//!
//! Each strategy owns one frontier for the duration of a search:
//! - `StackFrontier`: last in, first out
//! - `QueueFrontier`: first in, first out
//! - `PriorityFrontier`: lowest priority first, FIFO among equal priorities

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Container of pending items ordered by a strategy-specific policy.
pub trait Frontier<T> {
    /// Insert an item. Unordered frontiers ignore `priority`.
    fn push(&mut self, item: T, priority: f64);

    /// Remove the next item according to the ordering policy.
    fn pop(&mut self) -> Option<T>;

    /// Number of pending items.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// LIFO frontier for depth-first search.
#[derive(Clone, Debug)]
pub struct StackFrontier<T> {
    items: Vec<T>,
}

impl<T> StackFrontier<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for StackFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for StackFrontier<T> {
    fn push(&mut self, item: T, _priority: f64) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// FIFO frontier for breadth-first search.
#[derive(Clone, Debug)]
pub struct QueueFrontier<T> {
    items: VecDeque<T>,
}

impl<T> QueueFrontier<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for QueueFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for QueueFrontier<T> {
    fn push(&mut self, item: T, _priority: f64) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Heap entry: priority, then insertion sequence.
#[derive(Debug)]
struct Prioritized<T> {
    priority: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Prioritized<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Prioritized<T> {}

impl<T> PartialOrd for Prioritized<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Prioritized<T> {
    // Reversed: `BinaryHeap` is a max-heap and the lowest priority,
    // then the earliest insertion, must come out first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority frontier for uniform-cost and A* search.
///
/// No decrease-key: a cheaper path to a queued state is pushed as a new
/// entry and the stale one is filtered by the visited policy on pop.
#[derive(Debug)]
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<Prioritized<T>>,
    next_seq: u64,
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Priority of the next item to be popped.
    #[must_use]
    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|entry| entry.priority)
    }
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for PriorityFrontier<T> {
    fn push(&mut self, item: T, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Prioritized { priority, seq, item });
    }

    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<F: Frontier<char>>(mut frontier: F) -> Vec<char> {
        let mut out = Vec::new();
        while let Some(item) = frontier.pop() {
            out.push(item);
        }
        out
    }

    #[test]
    fn test_stack_is_lifo() {
        let mut stack = StackFrontier::new();
        stack.push('a', 0.0);
        stack.push('b', 0.0);
        stack.push('c', 0.0);
        assert_eq!(stack.len(), 3);
        assert_eq!(drain(stack), vec!['c', 'b', 'a']);
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = QueueFrontier::new();
        queue.push('a', 9.0);
        queue.push('b', 1.0);
        queue.push('c', 5.0);
        assert_eq!(drain(queue), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_priority_pops_lowest_first() {
        let mut pq = PriorityFrontier::new();
        pq.push('a', 3.0);
        pq.push('b', 1.0);
        pq.push('c', 2.0);
        assert_eq!(pq.peek_priority(), Some(1.0));
        assert_eq!(drain(pq), vec!['b', 'c', 'a']);
    }

    #[test]
    fn test_priority_ties_are_fifo() {
        let mut pq = PriorityFrontier::new();
        pq.push('a', 1.0);
        pq.push('b', 0.5);
        pq.push('c', 1.0);
        pq.push('d', 1.0);
        assert_eq!(drain(pq), vec!['b', 'a', 'c', 'd']);
    }

    #[test]
    fn test_empty_frontiers() {
        let stack: StackFrontier<char> = StackFrontier::new();
        let pq: PriorityFrontier<char> = PriorityFrontier::new();
        assert!(stack.is_empty());
        assert!(pq.is_empty());
        assert_eq!(pq.peek_priority(), None);
    }
}
