use std::collections::HashSet;

use super::{cell::Cell, error::GridError, model::GridModel};

/// obstacle positions, indexed by obstacle identity
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObstacleSet {
    cells: Vec<Cell>,
}

impl ObstacleSet {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// first cell claimed by more than one obstacle
    pub fn first_duplicate(&self) -> Option<Cell> {
        let mut seen = HashSet::with_capacity(self.cells.len());
        self.cells.iter().copied().find(|&cell| !seen.insert(cell))
    }

    /// marks every obstacle cell blocked
    pub fn stamp(&self, grid: &mut GridModel) -> Result<(), GridError> {
        for &cell in &self.cells {
            grid.set_blocked(cell, true)?;
        }
        Ok(())
    }

    /// swaps in new positions and moves the grid's blocked cells with them
    pub fn commit(&mut self, next: Vec<Cell>, grid: &mut GridModel) -> Result<(), GridError> {
        for &cell in &next {
            grid.check_bounds(cell)?;
        }

        for &cell in &self.cells {
            grid.set_blocked(cell, false)?;
        }
        self.cells = next;
        self.stamp(grid)
    }

    /// every blocked cell belongs to exactly one obstacle and vice versa
    pub fn is_consistent_with(&self, grid: &GridModel) -> bool {
        self.first_duplicate().is_none()
            && grid.blocked_count() == self.cells.len()
            && self.cells.iter().all(|&cell| grid.is_blocked(cell) == Ok(true))
    }
}
