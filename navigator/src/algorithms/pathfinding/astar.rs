use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::grid::{Cell, GridModel};

use super::{
    path::Path,
    traits::{PathfindingAlgorithm, SearchError, check_endpoints},
};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    f_score: usize,
    g_score: usize,
    cell: Cell,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| self.cell.row.cmp(&other.cell.row))
            .then_with(|| self.cell.col.cmp(&other.cell.col))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// per-call bookkeeping, dropped when the search returns; f lives on the frontier entries
#[derive(Default)]
struct SearchState {
    open_set: BinaryHeap<State>,
    came_from: HashMap<Cell, Cell>,
    g_scores: HashMap<Cell, usize>,
    closed_set: HashSet<Cell>,
}

impl SearchState {
    fn push(&mut self, cell: Cell, g_score: usize, goal: Cell) {
        let f_score = g_score + cell.manhattan_distance(goal);
        self.g_scores.insert(cell, g_score);
        self.open_set.push(State {
            f_score,
            g_score,
            cell,
        });
    }

    fn g_score(&self, cell: Cell) -> usize {
        self.g_scores.get(&cell).copied().unwrap_or(usize::MAX)
    }
}

/// A* over 4-connected unit-cost moves with the manhattan heuristic
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl PathfindingAlgorithm for AStar {
    fn find_path(&self, grid: &GridModel, start: Cell, goal: Cell) -> Result<Path, SearchError> {
        check_endpoints(grid, start, goal)?;

        if start == goal {
            return Ok(Path::empty());
        }

        let mut search = SearchState::default();
        search.push(start, 0, goal);

        while let Some(State { cell, g_score, .. }) = search.open_set.pop() {
            if cell == goal {
                log::trace!(
                    "a* reached {} at cost {} after closing {} cells",
                    goal,
                    g_score,
                    search.closed_set.len()
                );
                return Ok(Path::reconstruct(&search.came_from, start, goal));
            }

            if !search.closed_set.insert(cell) {
                continue;
            }

            // a blocked start has nowhere to expand from
            if !grid.is_walkable(cell) {
                continue;
            }

            if g_score > search.g_score(cell) {
                continue;
            }

            for neighbor in grid.walkable_neighbors(cell) {
                if search.closed_set.contains(&neighbor) {
                    continue;
                }

                let tentative_g = g_score + 1;
                if tentative_g < search.g_score(neighbor) {
                    search.came_from.insert(neighbor, cell);
                    search.push(neighbor, tentative_g, goal);
                }
            }
        }

        Err(SearchError::Unreachable { start, goal })
    }

    fn name(&self) -> &'static str {
        "A*"
    }
}
