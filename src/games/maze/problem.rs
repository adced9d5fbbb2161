//! Reaching a single goal cell in a maze.

use std::cell::Cell;

use crate::problem::{SearchProblem, Successor};

use super::layout::{Direction, Maze, Position};

/// Cost returned by `cost_of_actions` for a sequence that walks into a wall.
pub const ILLEGAL_PATH_COST: f64 = 999_999.0;

/// Find a path from the maze start to one goal cell.
///
/// Step cost defaults to 1 and can be replaced by a function of the cell
/// being entered.
pub struct PositionProblem<'a> {
    maze: &'a Maze,
    start: Position,
    goal: Option<Position>,
    cost_fn: Box<dyn Fn(Position) -> f64 + 'a>,
    expanded: Cell<u64>,
}

impl<'a> PositionProblem<'a> {
    /// Problem targeting the first goal cell of the maze.
    pub fn new(maze: &'a Maze) -> Self {
        Self {
            maze,
            start: maze.start(),
            goal: maze.goals().first().copied(),
            cost_fn: Box::new(|_| 1.0),
            expanded: Cell::new(0),
        }
    }

    pub fn with_start(mut self, start: Position) -> Self {
        self.start = start;
        self
    }

    pub fn with_goal(mut self, goal: Position) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Replace the unit step cost.
    pub fn with_cost_fn(mut self, cost_fn: impl Fn(Position) -> f64 + 'a) -> Self {
        self.cost_fn = Box::new(cost_fn);
        self
    }

    #[must_use]
    pub fn maze(&self) -> &Maze {
        self.maze
    }

    #[must_use]
    pub fn goal(&self) -> Option<Position> {
        self.goal
    }

    /// Number of states whose successors were requested.
    #[must_use]
    pub fn expanded(&self) -> u64 {
        self.expanded.get()
    }
}

impl SearchProblem for PositionProblem<'_> {
    type State = Position;
    type Action = Direction;

    fn start_state(&self) -> Position {
        self.start
    }

    fn is_goal_state(&self, state: &Position) -> bool {
        self.goal == Some(*state)
    }

    fn successors(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        self.expanded.set(self.expanded.get() + 1);
        self.maze
            .neighbors(*state)
            .map(|(direction, next)| Successor::new(next, direction, (self.cost_fn)(next)))
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Direction]) -> f64 {
        let mut pos = self.start;
        let mut cost = 0.0;
        for &direction in actions {
            match pos.step(direction).filter(|next| !self.maze.is_wall(*next)) {
                Some(next) => {
                    pos = next;
                    cost += (self.cost_fn)(next);
                }
                None => return ILLEGAL_PATH_COST,
            }
        }
        cost
    }
}

/// Manhattan distance to the goal. Consistent for unit step costs.
pub fn manhattan_heuristic(state: &Position, problem: &PositionProblem<'_>) -> f64 {
    problem
        .goal()
        .map_or(0.0, |goal| state.manhattan_distance(goal) as f64)
}

/// Straight-line distance to the goal.
pub fn euclidean_heuristic(state: &Position, problem: &PositionProblem<'_>) -> f64 {
    problem.goal().map_or(0.0, |goal| {
        let dx = state.x as f64 - goal.x as f64;
        let dy = state.y as f64 - goal.y as f64;
        (dx * dx + dy * dy).sqrt()
    })
}
