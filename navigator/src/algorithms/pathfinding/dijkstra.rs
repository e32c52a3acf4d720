use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::grid::{Cell, GridModel};

use super::{
    path::Path,
    traits::{PathfindingAlgorithm, SearchError, check_endpoints},
};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: usize,
    cell: Cell,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| self.cell.row.cmp(&other.cell.row))
            .then_with(|| self.cell.col.cmp(&other.cell.col))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl PathfindingAlgorithm for Dijkstra {
    fn find_path(&self, grid: &GridModel, start: Cell, goal: Cell) -> Result<Path, SearchError> {
        check_endpoints(grid, start, goal)?;

        if start == goal {
            return Ok(Path::empty());
        }

        let mut heap = BinaryHeap::new();
        let mut distances: HashMap<Cell, usize> = HashMap::new();
        let mut came_from: HashMap<Cell, Cell> = HashMap::new();

        heap.push(State {
            cost: 0,
            cell: start,
        });
        distances.insert(start, 0);

        while let Some(State { cost, cell }) = heap.pop() {
            if cell == goal {
                return Ok(Path::reconstruct(&came_from, start, goal));
            }

            if !grid.is_walkable(cell) {
                continue;
            }

            if cost > *distances.get(&cell).unwrap_or(&usize::MAX) {
                continue;
            }

            for neighbor in grid.walkable_neighbors(cell) {
                let new_cost = cost + 1;
                let current_dist = distances.get(&neighbor).copied().unwrap_or(usize::MAX);

                if new_cost < current_dist {
                    distances.insert(neighbor, new_cost);
                    came_from.insert(neighbor, cell);
                    heap.push(State {
                        cost: new_cost,
                        cell: neighbor,
                    });
                }
            }
        }

        Err(SearchError::Unreachable { start, goal })
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_open_grid() {
        let grid = GridModel::square(4).unwrap();
        let path = Dijkstra
            .find_path(&grid, Cell::new(3, 0), Cell::new(0, 3))
            .unwrap();
        assert_eq!(path.len(), 6);
        assert!(path.is_contiguous_from(Cell::new(3, 0)));
    }

    #[test]
    fn test_middle_column_wall_is_unreachable() {
        let mut grid = GridModel::square(3).unwrap();
        for row in 0..3 {
            grid.set_blocked(Cell::new(row, 1), true).unwrap();
        }
        assert!(
            Dijkstra
                .find_path(&grid, Cell::new(0, 0), Cell::new(0, 2))
                .unwrap_err()
                .is_unreachable()
        );
    }
}
