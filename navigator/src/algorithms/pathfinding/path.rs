use std::collections::{HashMap, VecDeque};

use crate::grid::{Cell, Direction};

/// cells to visit after the start, ending at the goal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    cells: VecDeque<Cell>,
}

impl Path {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// walks predecessor links back from `goal`, then reverses
    pub(super) fn reconstruct(came_from: &HashMap<Cell, Cell>, start: Cell, goal: Cell) -> Self {
        let mut cells = Vec::new();
        let mut current = goal;

        while current != start {
            let Some(&prev) = came_from.get(&current) else {
                break;
            };
            cells.push(current);
            current = prev;
        }

        cells.reverse();
        Self::from_cells(cells)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn first(&self) -> Option<Cell> {
        self.cells.front().copied()
    }

    pub fn last(&self) -> Option<Cell> {
        self.cells.back().copied()
    }

    pub fn pop_front(&mut self) -> Option<Cell> {
        self.cells.pop_front()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// moves needed to follow the path from `start`; None on any non-adjacent hop
    pub fn directions_from(&self, start: Cell) -> Option<Vec<Direction>> {
        let mut current = start;
        self.iter()
            .map(|next| {
                let dir = Direction::between(current, next);
                current = next;
                dir
            })
            .collect()
    }

    pub fn is_contiguous_from(&self, start: Cell) -> bool {
        self.directions_from(start).is_some()
    }
}
