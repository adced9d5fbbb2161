//! Core graph search algorithm.
//!
//! All four strategies share one skeleton:
//!
//! 1. Seed the frontier with the start state, empty path, zero cost.
//! 2. Pop a node; skip it if the visited policy says it is stale.
//! 3. Mark it visited and goal-test it. A goal ends the search.
//! 4. Otherwise push one child node per successor.
//!
//! They differ only in frontier order and visited policy. Running out of
//! frontier is reported through [`PlanOutcome::Exhausted`], never as an
//! error.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::problem::{Heuristic, NullHeuristic, SearchProblem};

use super::config::{SearchConfig, Strategy};
use super::frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
use super::node::SearchNode;
use super::plan::{Plan, PlanOutcome};
use super::stats::SearchStats;

type Node<P> = SearchNode<<P as SearchProblem>::State, <P as SearchProblem>::Action>;

/// Graph search context.
///
/// Holds only configuration: every call to [`GraphSearch::search`] owns
/// its frontier and visited structures and drops them on return.
#[derive(Clone, Debug, Default)]
pub struct GraphSearch {
    config: SearchConfig,
}

impl GraphSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Search context for a strategy with default limits.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self::new(SearchConfig::new(strategy))
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the configured strategy on `problem`.
    ///
    /// `heuristic` is only consulted by A*.
    pub fn search<P, H>(&self, problem: &P, heuristic: &H) -> Plan<P::Action>
    where
        P: SearchProblem,
        H: Heuristic<P> + ?Sized,
    {
        let config = &self.config;
        let plan = match config.strategy {
            Strategy::DepthFirst => membership_search(problem, config, StackFrontier::new()),
            Strategy::BreadthFirst => membership_search(problem, config, QueueFrontier::new()),
            Strategy::UniformCost => best_cost_search(problem, config),
            Strategy::AStar => explored_list_search(problem, config, heuristic),
        };

        debug!(
            strategy = %config.strategy,
            outcome = ?plan.outcome,
            cost = plan.cost,
            length = plan.actions.len(),
            expanded = plan.stats.expanded,
            generated = plan.stats.generated,
            max_frontier = plan.stats.max_frontier,
            "graph search finished"
        );

        plan
    }
}

/// Search the deepest nodes first.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> Plan<P::Action> {
    GraphSearch::with_strategy(Strategy::DepthFirst).search(problem, &NullHeuristic)
}

/// Search the shallowest nodes first.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> Plan<P::Action> {
    GraphSearch::with_strategy(Strategy::BreadthFirst).search(problem, &NullHeuristic)
}

/// Search the node of least total cost first.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> Plan<P::Action> {
    GraphSearch::with_strategy(Strategy::UniformCost).search(problem, &NullHeuristic)
}

/// Search the node with the lowest cost plus heuristic first.
pub fn a_star_search<P, H>(problem: &P, heuristic: &H) -> Plan<P::Action>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    GraphSearch::with_strategy(Strategy::AStar).search(problem, heuristic)
}

/// Run `strategy` on `problem`, falling back to the null heuristic.
pub fn search<P: SearchProblem>(
    problem: &P,
    strategy: Strategy,
    heuristic: Option<&dyn Heuristic<P>>,
) -> Plan<P::Action> {
    let engine = GraphSearch::with_strategy(strategy);
    match heuristic {
        Some(h) => engine.search(problem, h),
        None => engine.search(problem, &NullHeuristic),
    }
}

// =============================================================================
// Strategies
// =============================================================================

/// Depth-first and breadth-first: plain membership set checked on pop.
fn membership_search<P, F>(problem: &P, config: &SearchConfig, mut frontier: F) -> Plan<P::Action>
where
    P: SearchProblem,
    F: Frontier<Node<P>>,
{
    let mut stats = SearchStats::new();
    let mut visited: FxHashSet<P::State> = FxHashSet::default();
    let mut last: Option<Node<P>> = None;

    frontier.push(SearchNode::root(problem.start_state()), 0.0);
    stats.generated += 1;
    stats.observe_frontier(frontier.len());

    while let Some(node) = frontier.pop() {
        stats.popped += 1;

        if !visited.insert(node.state.clone()) {
            last = Some(node);
            continue;
        }

        if problem.is_goal_state(&node.state) {
            return finish(node, PlanOutcome::Reached, stats);
        }
        if config.limit_reached(stats.expanded) {
            return finish(node, PlanOutcome::Exhausted, stats);
        }

        trace!(depth = node.depth(), cost = node.cost, "expanding node");
        stats.expanded += 1;
        for successor in problem.successors(&node.state) {
            frontier.push(node.child(successor), 0.0);
            stats.generated += 1;
        }
        stats.observe_frontier(frontier.len());
        last = Some(node);
    }

    exhausted(last, stats)
}

/// Uniform-cost: best known cost per state, re-expansion on strict improvement.
fn best_cost_search<P: SearchProblem>(problem: &P, config: &SearchConfig) -> Plan<P::Action> {
    let mut stats = SearchStats::new();
    let mut frontier: PriorityFrontier<Node<P>> = PriorityFrontier::new();
    let mut best: FxHashMap<P::State, f64> = FxHashMap::default();
    let mut last: Option<Node<P>> = None;

    frontier.push(SearchNode::root(problem.start_state()), 0.0);
    stats.generated += 1;
    stats.observe_frontier(frontier.len());

    while let Some(node) = frontier.pop() {
        stats.popped += 1;

        match best.get(&node.state) {
            Some(&recorded) if node.cost >= recorded => {
                last = Some(node);
                continue;
            }
            Some(_) => stats.reexpanded += 1,
            None => {}
        }
        best.insert(node.state.clone(), node.cost);

        if problem.is_goal_state(&node.state) {
            return finish(node, PlanOutcome::Reached, stats);
        }
        if config.limit_reached(stats.expanded) {
            return finish(node, PlanOutcome::Exhausted, stats);
        }

        trace!(depth = node.depth(), cost = node.cost, "expanding node");
        stats.expanded += 1;
        for successor in problem.successors(&node.state) {
            let child = node.child(successor);
            let priority = child.cost;
            frontier.push(child, priority);
            stats.generated += 1;
        }
        stats.observe_frontier(frontier.len());
        last = Some(node);
    }

    exhausted(last, stats)
}

/// A*: explored list of (state, cost) pairs scanned before every push.
///
/// A successor is only pushed when no explored entry for the same state
/// has a cost at or below the new one. Popped nodes are never skipped.
fn explored_list_search<P, H>(problem: &P, config: &SearchConfig, heuristic: &H) -> Plan<P::Action>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    let mut stats = SearchStats::new();
    let mut frontier: PriorityFrontier<Node<P>> = PriorityFrontier::new();
    let mut explored: Vec<(P::State, f64)> = Vec::new();
    let mut expanded_states: FxHashSet<P::State> = FxHashSet::default();

    let start = problem.start_state();
    let start_priority = heuristic.estimate(&start, problem);
    frontier.push(SearchNode::root(start), start_priority);
    stats.generated += 1;
    stats.observe_frontier(frontier.len());

    let mut last: Option<Node<P>> = None;

    while let Some(node) = frontier.pop() {
        stats.popped += 1;
        explored.push((node.state.clone(), node.cost));

        if problem.is_goal_state(&node.state) {
            return finish(node, PlanOutcome::Reached, stats);
        }
        if config.limit_reached(stats.expanded) {
            return finish(node, PlanOutcome::Exhausted, stats);
        }

        trace!(depth = node.depth(), cost = node.cost, "expanding node");
        stats.expanded += 1;
        if !expanded_states.insert(node.state.clone()) {
            stats.reexpanded += 1;
        }

        for successor in problem.successors(&node.state) {
            let child = node.child(successor);
            let dominated = explored
                .iter()
                .any(|(state, cost)| *state == child.state && *cost <= child.cost);
            if dominated {
                continue;
            }

            explored.push((child.state.clone(), child.cost));
            let priority = child.cost + heuristic.estimate(&child.state, problem);
            frontier.push(child, priority);
            stats.generated += 1;
        }
        stats.observe_frontier(frontier.len());
        last = Some(node);
    }

    exhausted(last, stats)
}

// =============================================================================
// Helper Functions
// =============================================================================

fn finish<S, A>(node: SearchNode<S, A>, outcome: PlanOutcome, stats: SearchStats) -> Plan<A> {
    Plan {
        actions: node.actions,
        cost: node.cost,
        outcome,
        stats,
    }
}

fn exhausted<S, A>(last: Option<SearchNode<S, A>>, stats: SearchStats) -> Plan<A> {
    match last {
        Some(node) => finish(node, PlanOutcome::Exhausted, stats),
        None => Plan {
            actions: Vec::new(),
            cost: 0.0,
            outcome: PlanOutcome::Exhausted,
            stats,
        },
    }
}
