use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use super::direction::Direction;

/// (row, column) coordinate, 0-indexed from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Self::new(index / width, index % width)
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn in_bounds(self, bounds: (usize, usize)) -> bool {
        let (height, width) = bounds;
        self.row < height && self.col < width
    }

    pub fn move_in_direction(self, direction: Direction, bounds: (usize, usize)) -> Option<Self> {
        (self + direction.offset()).filter(|cell| cell.in_bounds(bounds))
    }

    /// in-bounds orthogonal neighbours, in `Direction::ALL` order
    pub fn neighbors(self, bounds: (usize, usize)) -> Vec<Self> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.move_in_direction(dir, bounds))
            .collect()
    }
}

impl Add<(isize, isize)> for Cell {
    type Output = Option<Self>;

    fn add(self, (dr, dc): (isize, isize)) -> Self::Output {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Self::new(row, col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Cell {
    type Err = String;

    /// parses `row,col`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| format!("expected `row,col`, got `{s}`"))?;

        let row = row
            .trim()
            .parse()
            .map_err(|e| format!("invalid row `{row}`: {e}"))?;
        let col = col
            .trim()
            .parse()
            .map_err(|e| format!("invalid column `{col}`: {e}"))?;

        Ok(Self::new(row, col))
    }
}
