//! Grid maze layouts.

use serde::{Deserialize, Serialize};

use crate::core::{Result, SearchError};

/// Cell coordinates. `x` is the column, `y` the row; row 0 is the top line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Neighbor one step in `direction`, if it stays non-negative.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Position { x, y })
    }

    #[must_use]
    pub fn manhattan_distance(self, other: Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Movement on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Successor enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Column and row offsets.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    #[must_use]
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// Static maze: walls, a start cell and goal cells.
///
/// Text format, one row per line:
/// - `%` wall
/// - ` ` open cell
/// - `P` start (exactly one)
/// - `.` goal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    start: Position,
    goals: Vec<Position>,
}

impl Maze {
    /// Parse a maze from its text layout. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
            .filter(|(_, line)| !line.is_empty())
            .collect();

        let Some(&(first_line, first)) = rows.first() else {
            return Err(layout_error(1, 1, "layout is empty"));
        };
        let width = first.chars().count();

        let mut walls = Vec::with_capacity(width * rows.len());
        let mut start = None;
        let mut goals = Vec::new();

        for (y, &(line_no, line)) in rows.iter().enumerate() {
            let line_width = line.chars().count();
            if line_width != width {
                return Err(layout_error(
                    line_no,
                    line_width.min(width) + 1,
                    &format!("row has width {line_width}, expected {width}"),
                ));
            }

            for (x, c) in line.chars().enumerate() {
                let here = Position::new(x, y);
                match c {
                    '%' => walls.push(true),
                    ' ' => walls.push(false),
                    '.' => {
                        walls.push(false);
                        goals.push(here);
                    }
                    'P' => {
                        if start.is_some() {
                            return Err(layout_error(line_no, x + 1, "second start cell"));
                        }
                        walls.push(false);
                        start = Some(here);
                    }
                    other => {
                        return Err(layout_error(
                            line_no,
                            x + 1,
                            &format!("unknown cell '{other}'"),
                        ));
                    }
                }
            }
        }

        let start = start.ok_or_else(|| layout_error(first_line, 1, "no start cell 'P'"))?;

        Ok(Self {
            width,
            height: rows.len(),
            walls,
            start,
            goals,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    #[must_use]
    pub fn goals(&self) -> &[Position] {
        &self.goals
    }

    /// Whether `pos` is a wall. Cells outside the grid count as walls.
    #[must_use]
    pub fn is_wall(&self, pos: Position) -> bool {
        if pos.x >= self.width || pos.y >= self.height {
            return true;
        }
        self.walls[pos.y * self.width + pos.x]
    }

    /// Open neighbors of `pos` in [`Direction::ALL`] order.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::ALL.into_iter().filter_map(move |direction| {
            pos.step(direction)
                .filter(|next| !self.is_wall(*next))
                .map(|next| (direction, next))
        })
    }
}

fn layout_error(line: usize, column: usize, message: &str) -> SearchError {
    SearchError::InvalidLayout {
        line,
        column,
        message: message.to_string(),
    }
}
