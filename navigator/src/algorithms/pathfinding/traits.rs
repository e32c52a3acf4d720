use thiserror::Error;

use crate::grid::{Cell, GridError, GridModel};

use super::path::Path;

pub trait PathfindingAlgorithm {
    /// shortest path from `start` (excluded) to `goal` (included)
    fn find_path(&self, grid: &GridModel, start: Cell, goal: Cell) -> Result<Path, SearchError>;

    fn name(&self) -> &'static str;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no path from {start} to {goal}")]
    Unreachable { start: Cell, goal: Cell },
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl SearchError {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }
}

/// shared entry checks: both endpoints must lie inside the grid
pub(super) fn check_endpoints(
    grid: &GridModel,
    start: Cell,
    goal: Cell,
) -> Result<(), SearchError> {
    grid.check_bounds(start)?;
    grid.check_bounds(goal)?;
    Ok(())
}
