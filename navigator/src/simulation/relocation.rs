use std::collections::HashSet;

use rand::Rng;

use crate::grid::{Cell, Direction, GridError, GridModel, ObstacleSet};

/// stay put, or one orthogonal step
const MOVES: [Option<Direction>; 5] = [
    None,
    Some(Direction::Up),
    Some(Direction::Down),
    Some(Direction::Left),
    Some(Direction::Right),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelocationReport {
    pub moved: usize,
    pub stayed: usize,
    /// obstacles that ran out of attempts
    pub exhausted: usize,
}

/// moves each obstacle by at most one orthogonal step per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelocationRule {
    retry_budget: usize,
}

impl RelocationRule {
    pub fn new(retry_budget: usize) -> Self {
        Self { retry_budget }
    }

    /// Relocates every obstacle in registry order. Candidates that leave the grid, land on
    /// another obstacle or on a `reserved` cell are redrawn until the budget runs out, after
    /// which the obstacle keeps its cell. The grid only changes once all new positions are
    /// known.
    pub fn relocate<R: Rng>(
        &self,
        grid: &mut GridModel,
        obstacles: &mut ObstacleSet,
        reserved: &[Cell],
        rng: &mut R,
    ) -> Result<RelocationReport, GridError> {
        let bounds = grid.bounds();
        let mut occupied: HashSet<Cell> = obstacles.iter().collect();
        let mut next = Vec::with_capacity(obstacles.len());
        let mut report = RelocationReport::default();

        for current in obstacles.iter() {
            occupied.remove(&current);

            let accepted = (0..self.retry_budget).find_map(|_| {
                let candidate = match MOVES[rng.random_range(0..MOVES.len())] {
                    None => Some(current),
                    Some(dir) => current.move_in_direction(dir, bounds),
                }?;

                (!occupied.contains(&candidate) && !reserved.contains(&candidate))
                    .then_some(candidate)
            });

            let chosen = match accepted {
                Some(cell) if cell == current => {
                    report.stayed += 1;
                    cell
                }
                Some(cell) => {
                    report.moved += 1;
                    cell
                }
                None => {
                    report.exhausted += 1;
                    current
                }
            };

            occupied.insert(chosen);
            next.push(chosen);
        }

        obstacles.commit(next, grid)?;

        log::trace!(
            "relocation: {} moved, {} stayed, {} exhausted",
            report.moved,
            report.stayed,
            report.exhausted
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::simulation::Scenario;

    #[test]
    fn test_relocation_invariants_over_many_streams() {
        let start = Cell::new(0, 0);
        let goal = Cell::new(9, 9);
        let rule = RelocationRule::new(16);

        for seed in 0..100 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let scenario = Scenario::random(10, 30, start, goal, &mut rng).unwrap();
            let (mut grid, mut obstacles) = scenario.build().unwrap();

            for _ in 0..50 {
                let before = obstacles.clone();
                rule.relocate(&mut grid, &mut obstacles, &[start, goal], &mut rng)
                    .unwrap();

                assert_eq!(obstacles.len(), 30, "seed {seed}");
                assert!(obstacles.is_consistent_with(&grid), "seed {seed}");
                assert!(!obstacles.contains(start), "seed {seed}");
                assert!(!obstacles.contains(goal), "seed {seed}");
                for (old, new) in before.iter().zip(obstacles.iter()) {
                    assert!(old.manhattan_distance(new) <= 1, "seed {seed}: {old} -> {new}");
                }
            }
        }
    }

    #[test]
    fn test_boxed_in_obstacle_stays() {
        // the obstacle at (0, 0) is walled in by reserved cells
        let mut grid = GridModel::square(2).unwrap();
        let mut obstacles = ObstacleSet::new(vec![Cell::new(0, 0), Cell::new(1, 1)]);
        obstacles.stamp(&mut grid).unwrap();
        let reserved = [Cell::new(0, 1), Cell::new(1, 0)];
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        for _ in 0..20 {
            RelocationRule::new(4)
                .relocate(&mut grid, &mut obstacles, &reserved, &mut rng)
                .unwrap();
            assert_eq!(obstacles.as_slice(), &[Cell::new(0, 0), Cell::new(1, 1)]);
        }
    }

    #[test]
    fn test_zero_budget_keeps_everything() {
        let mut grid = GridModel::square(5).unwrap();
        let mut obstacles = ObstacleSet::new(vec![Cell::new(2, 2), Cell::new(3, 1)]);
        obstacles.stamp(&mut grid).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let report = RelocationRule::new(0)
            .relocate(&mut grid, &mut obstacles, &[], &mut rng)
            .unwrap();

        assert_eq!(
            report,
            RelocationReport {
                moved: 0,
                stayed: 0,
                exhausted: 2,
            }
        );
        assert_eq!(obstacles.as_slice(), &[Cell::new(2, 2), Cell::new(3, 1)]);
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let run = |seed| {
            let mut grid = GridModel::square(6).unwrap();
            let mut obstacles =
                ObstacleSet::new(vec![Cell::new(1, 1), Cell::new(2, 3), Cell::new(4, 4)]);
            obstacles.stamp(&mut grid).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            (0..10)
                .map(|_| {
                    RelocationRule::new(16)
                        .relocate(&mut grid, &mut obstacles, &[Cell::new(0, 0)], &mut rng)
                        .unwrap();
                    obstacles.clone()
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(run(42), run(42));
    }
}
