//! Graph search integration tests using mazes and scripted problems.

use rust_search::games::maze::{
    euclidean_heuristic, manhattan_heuristic, Direction, Maze, Position, PositionProblem,
    ILLEGAL_PATH_COST,
};
use rust_search::problem::{null_heuristic, Heuristic, NullHeuristic, SearchProblem, Successor};
use rust_search::search::{
    a_star_search, breadth_first_search, depth_first_search, search, uniform_cost_search,
    GraphSearch, PlanOutcome, SearchConfig, Strategy,
};

/// Open field, start and goal on the same row.
const FIELD: &str = "\
%%%%%%%%%%%
%         %
%         %
%P       .%
%         %
%         %
%%%%%%%%%%%";

/// Two equally long routes around a central block.
const LOOPS: &str = "\
%%%%%%%%%%
%P       %
% %%%%%% %
% %    % %
% % %% % %
%   %.   %
%%%%%%%%%%";

/// Goal sealed off by a wall.
const SEALED: &str = "\
%%%%%%
%P %.%
%%%%%%";

// =============================================================================
// Scripted Problems
// =============================================================================

/// A -> B -> C -> Goal, one successor each.
struct Chain;

impl SearchProblem for Chain {
    type State = &'static str;
    type Action = &'static str;

    fn start_state(&self) -> &'static str {
        "A"
    }

    fn is_goal_state(&self, state: &&'static str) -> bool {
        *state == "Goal"
    }

    fn successors(&self, state: &&'static str) -> Vec<Successor<&'static str, &'static str>> {
        match *state {
            "A" => vec![Successor::new("B", "a->b", 1.0)],
            "B" => vec![Successor::new("C", "b->c", 1.0)],
            "C" => vec![Successor::new("Goal", "c->goal", 1.0)],
            _ => Vec::new(),
        }
    }

    fn cost_of_actions(&self, actions: &[&'static str]) -> f64 {
        actions.len() as f64
    }
}

// =============================================================================
// Strategy Behaviour
// =============================================================================

#[test]
fn test_dfs_follows_single_path() {
    let plan = depth_first_search(&Chain);
    assert!(plan.reached_goal());
    assert_eq!(plan.actions, vec!["a->b", "b->c", "c->goal"]);
}

#[test]
fn test_every_strategy_solves_single_path() {
    for strategy in Strategy::ALL {
        let plan = search(&Chain, strategy, None);
        assert_eq!(plan.len(), 3, "{strategy}");
        assert_eq!(plan.cost, 3.0, "{strategy}");
    }
}

#[test]
fn test_bfs_finds_shortest_route() {
    let maze = Maze::parse(LOOPS).unwrap();
    let problem = PositionProblem::new(&maze);

    let plan = breadth_first_search(&problem);

    assert!(plan.reached_goal());
    assert_eq!(plan.len(), 14);
    assert_eq!(problem.cost_of_actions(&plan.actions), 14.0);
}

#[test]
fn test_dfs_finds_a_legal_route() {
    let maze = Maze::parse(LOOPS).unwrap();
    let problem = PositionProblem::new(&maze);

    let plan = depth_first_search(&problem);

    assert!(plan.reached_goal());
    let cost = problem.cost_of_actions(&plan.actions);
    assert!(cost < ILLEGAL_PATH_COST);
    assert!(plan.len() >= 14);
}

#[test]
fn test_all_strategies_agree_on_unit_costs() {
    let maze = Maze::parse(LOOPS).unwrap();
    let problem = PositionProblem::new(&maze);

    let bfs = breadth_first_search(&problem);
    let ucs = uniform_cost_search(&problem);
    let astar = a_star_search(&problem, &manhattan_heuristic);

    assert_eq!(bfs.cost, 14.0);
    assert_eq!(ucs.cost, 14.0);
    assert_eq!(astar.cost, 14.0);
}

// =============================================================================
// Weighted Costs
// =============================================================================

/// Row 1 is cheap to walk along, every other cell costs 10 to enter.
fn fast_lane(p: Position) -> f64 {
    if p.y == 1 {
        1.0
    } else {
        10.0
    }
}

#[test]
fn test_ucs_takes_cheap_detour() {
    let maze = Maze::parse(FIELD).unwrap();
    let problem = PositionProblem::new(&maze).with_cost_fn(fast_lane);

    let bfs = breadth_first_search(&problem);
    let ucs = uniform_cost_search(&problem);

    assert_eq!(bfs.len(), 8);
    assert_eq!(problem.cost_of_actions(&bfs.actions), 80.0);

    assert_eq!(ucs.cost, 39.0);
    assert_eq!(problem.cost_of_actions(&ucs.actions), 39.0);
    assert_eq!(ucs.len(), 12);
}

#[test]
fn test_astar_matches_ucs_cost_on_weighted_maze() {
    let maze = Maze::parse(FIELD).unwrap();
    let problem = PositionProblem::new(&maze).with_cost_fn(fast_lane);

    let ucs = uniform_cost_search(&problem);
    let null = a_star_search(&problem, &NullHeuristic);
    let null_fn = a_star_search(&problem, &null_heuristic::<PositionProblem<'_>>);
    let manhattan = a_star_search(&problem, &manhattan_heuristic);

    assert_eq!(null.cost, ucs.cost);
    assert_eq!(null_fn.cost, ucs.cost);
    assert_eq!(manhattan.cost, ucs.cost);
    assert_eq!(problem.cost_of_actions(&manhattan.actions), 39.0);
}

// =============================================================================
// Heuristic Guidance
// =============================================================================

#[test]
fn test_astar_expands_fewer_states_than_ucs() {
    let maze = Maze::parse(FIELD).unwrap();
    let problem = PositionProblem::new(&maze);

    let ucs = uniform_cost_search(&problem);
    let astar = a_star_search(&problem, &manhattan_heuristic);

    assert_eq!(ucs.cost, astar.cost);
    // Only the straight row has f = 8.
    assert_eq!(astar.stats.expanded, 8);
    assert!(astar.stats.expanded < ucs.stats.expanded);
    assert_eq!(astar.actions, vec![Direction::East; 8]);
}

#[test]
fn test_euclidean_heuristic_is_admissible_here() {
    let maze = Maze::parse(LOOPS).unwrap();
    let problem = PositionProblem::new(&maze);

    let plan = a_star_search(&problem, &euclidean_heuristic);
    assert_eq!(plan.cost, 14.0);
}

#[test]
fn test_dyn_heuristic_through_search() {
    let maze = Maze::parse(FIELD).unwrap();
    let problem = PositionProblem::new(&maze);
    let heuristic: &dyn Heuristic<PositionProblem<'_>> = &manhattan_heuristic;

    let plan = search(&problem, Strategy::AStar, Some(heuristic));
    assert_eq!(plan.stats.expanded, 8);
}

#[test]
fn test_problem_counter_matches_stats() {
    let maze = Maze::parse(LOOPS).unwrap();
    let problem = PositionProblem::new(&maze);

    let plan = uniform_cost_search(&problem);
    assert_eq!(problem.expanded(), plan.stats.expanded);
}

// =============================================================================
// Exhaustion
// =============================================================================

#[test]
fn test_sealed_goal_exhausts_every_strategy() {
    let maze = Maze::parse(SEALED).unwrap();
    let problem = PositionProblem::new(&maze);

    for strategy in Strategy::ALL {
        let plan = search(&problem, strategy, Some(&manhattan_heuristic));
        assert_eq!(plan.outcome, PlanOutcome::Exhausted, "{strategy}");
        assert!(!plan.reached_goal());
    }
}

#[test]
fn test_bfs_exhaustion_returns_last_partial_path() {
    let maze = Maze::parse(SEALED).unwrap();
    let problem = PositionProblem::new(&maze);

    // Pops: start, east cell, start again (already visited).
    let plan = breadth_first_search(&problem);
    assert_eq!(plan.actions, vec![Direction::East, Direction::West]);
    assert_eq!(plan.stats.popped, 3);
    assert_eq!(plan.stats.expanded, 2);
}

#[test]
fn test_expansion_budget() {
    let maze = Maze::parse(LOOPS).unwrap();
    let problem = PositionProblem::new(&maze);
    let engine = GraphSearch::new(
        SearchConfig::new(Strategy::UniformCost).with_max_expansions(5),
    );

    let plan = engine.search(&problem, &NullHeuristic);

    assert_eq!(plan.outcome, PlanOutcome::Exhausted);
    assert_eq!(plan.stats.expanded, 5);
    assert!(plan.into_solution().is_none());
}

#[test]
fn test_goal_at_start() {
    let maze = Maze::parse(FIELD).unwrap();
    let problem = PositionProblem::new(&maze).with_goal(maze.start());

    let plan = a_star_search(&problem, &manhattan_heuristic);
    assert!(plan.reached_goal());
    assert!(plan.is_empty());
    assert_eq!(plan.cost, 0.0);
}

#[test]
fn test_searches_are_independent() {
    let maze = Maze::parse(LOOPS).unwrap();
    let problem = PositionProblem::new(&maze);
    let engine = GraphSearch::with_strategy(Strategy::AStar);

    let first = engine.search(&problem, &manhattan_heuristic);
    let second = engine.search(&problem, &manhattan_heuristic);

    assert_eq!(first, second);
}
