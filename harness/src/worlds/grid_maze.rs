//! `GridMaze`: a text-layout maze with a pluggable step-cost model.
//!
//! Layout characters: `%` wall, `P` start, `.` goal, space open. Row 0 is
//! the top line; `North` moves up one row. Cells outside a ragged row are
//! walls. Successors are produced in North, South, East, West order.

use std::fmt;

use waypoint_search::{SearchProblem, Successor};

use super::WorldError;

/// A maze cell, addressed by row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Successor enumeration order.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        }
    }

    fn step(self, cell: Cell) -> Option<Cell> {
        let Cell { row, col } = cell;
        match self {
            Self::North => row.checked_sub(1).map(|row| Cell { row, col }),
            Self::South => Some(Cell { row: row + 1, col }),
            Self::East => Some(Cell { row, col: col + 1 }),
            Self::West => col.checked_sub(1).map(|col| Cell { row, col }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cost of stepping into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostModel {
    /// Every step costs 1.
    #[default]
    Unit,
    /// `2^(width - 1 - col)`: cheap on the east side.
    PreferEast,
    /// `2^col`: cheap on the west side.
    PreferWest,
}

impl CostModel {
    fn cost(self, target: Cell, width: usize) -> i64 {
        let exponent = match self {
            Self::Unit => return 1,
            Self::PreferEast => width.saturating_sub(1).saturating_sub(target.col),
            Self::PreferWest => target.col,
        };
        u32::try_from(exponent)
            .ok()
            .and_then(|e| 1i64.checked_shl(e))
            .filter(|c| *c > 0)
            .unwrap_or(i64::MAX)
    }
}

/// Maze parsed from a text layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMaze {
    walls: Vec<Vec<bool>>,
    start: Cell,
    goals: Vec<Cell>,
    width: usize,
    cost_model: CostModel,
}

impl GridMaze {
    /// Parse `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] for an unknown character or when the layout
    /// does not contain exactly one `P`.
    pub fn parse(layout: &str) -> Result<Self, WorldError> {
        let mut walls = Vec::new();
        let mut start = None;
        let mut goals = Vec::new();

        for (row, line) in layout.lines().enumerate() {
            let mut cells = Vec::new();
            for (col, ch) in line.chars().enumerate() {
                let here = Cell { row, col };
                match ch {
                    '%' | ' ' => {}
                    '.' => goals.push(here),
                    'P' => {
                        if start.replace(here).is_some() {
                            return Err(WorldError::MultipleStarts);
                        }
                    }
                    other => return Err(WorldError::UnknownTile { ch: other, row, col }),
                }
                cells.push(ch == '%');
            }
            walls.push(cells);
        }

        let start = start.ok_or(WorldError::MissingStart)?;
        let width = walls.iter().map(Vec::len).max().unwrap_or(0);
        Ok(Self {
            walls,
            start,
            goals,
            width,
            cost_model: CostModel::Unit,
        })
    }

    #[must_use]
    pub fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = cost_model;
        self
    }

    #[must_use]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[must_use]
    pub fn goals(&self) -> &[Cell] {
        &self.goals
    }

    #[must_use]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls
            .get(cell.row)
            .and_then(|r| r.get(cell.col))
            .map_or(true, |wall| *wall)
    }

    /// Where `direction` leads from `cell`, or `None` into a wall.
    #[must_use]
    pub fn step(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        direction.step(cell).filter(|next| !self.is_wall(*next))
    }

    /// Open maze of `side x side` cells inside a wall border, start in the
    /// top-left corner and goal in the bottom-right.
    #[must_use]
    pub fn open_room(side: usize) -> String {
        let border = "%".repeat(side + 2);
        let mut lines = vec![border.clone()];
        for r in 0..side {
            let mut line = String::from("%");
            for c in 0..side {
                line.push(match (r, c) {
                    (0, 0) => 'P',
                    _ if r + 1 == side && c + 1 == side => '.',
                    _ => ' ',
                });
            }
            line.push('%');
            lines.push(line);
        }
        lines.push(border);
        lines.join("\n")
    }
}

impl SearchProblem for GridMaze {
    type State = Cell;
    type Action = Direction;

    fn start_state(&self) -> Cell {
        self.start
    }

    fn is_goal(&self, state: &Cell) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &Cell) -> Vec<Successor<Cell, Direction>> {
        Direction::ALL
            .iter()
            .filter_map(|d| {
                self.step(*state, *d).map(|next| {
                    Successor::new(next, *d, self.cost_model.cost(next, self.width))
                })
            })
            .collect()
    }

    /// Walks the actions directly; `None` on walking into a wall.
    fn cost_of_actions(&self, actions: &[Direction]) -> Option<i64> {
        let mut cell = self.start;
        let mut total: i64 = 0;
        for d in actions {
            cell = self.step(cell, *d)?;
            total = total.checked_add(self.cost_model.cost(cell, self.width))?;
        }
        Some(total)
    }
}
