use super::{cell::Cell, error::GridError, occupancy::Occupancy};

/// dense row-major occupancy map with fixed dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    grid: Vec<Occupancy>,
    rows: usize,
    cols: usize,
}

impl GridModel {
    /// all cells start free
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }

        Ok(Self {
            grid: vec![Occupancy::Free; rows * cols],
            rows,
            cols,
        })
    }

    pub fn square(size: usize) -> Result<Self, GridError> {
        Self::new(size, size)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.in_bounds(self.bounds())
    }

    pub fn check_bounds(&self, cell: Cell) -> Result<(), GridError> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get(&self, cell: Cell) -> Result<Occupancy, GridError> {
        self.check_bounds(cell)?;
        Ok(self.grid[cell.to_index(self.cols)])
    }

    pub fn is_blocked(&self, cell: Cell) -> Result<bool, GridError> {
        self.get(cell).map(Occupancy::is_blocked)
    }

    /// false for blocked and out-of-bounds cells alike
    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.get(cell).is_ok_and(|occupancy| !occupancy.is_blocked())
    }

    /// idempotent; out-of-bounds cells leave the grid untouched
    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) -> Result<(), GridError> {
        self.check_bounds(cell)?;
        let idx = cell.to_index(self.cols);
        self.grid[idx] = Occupancy::from_blocked(blocked);
        Ok(())
    }

    /// up/down/left/right cells inside the grid, regardless of occupancy
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        cell.neighbors(self.bounds())
    }

    pub fn walkable_neighbors(&self, cell: Cell) -> Vec<Cell> {
        self.neighbors(cell)
            .into_iter()
            .filter(|&neighbor| self.is_walkable(neighbor))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, Occupancy)> + '_ {
        self.grid
            .iter()
            .enumerate()
            .map(|(idx, &occupancy)| (Cell::from_index(idx, self.cols), occupancy))
    }

    pub fn blocked_count(&self) -> usize {
        self.grid.iter().filter(|o| o.is_blocked()).count()
    }
}
