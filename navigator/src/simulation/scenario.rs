use rand::{Rng, seq::SliceRandom};

use crate::grid::{Cell, GridError, GridModel, ObstacleSet};

use super::error::ConfigError;

/// validated construction input for a navigation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    rows: usize,
    cols: usize,
    obstacles: Vec<Cell>,
    start: Cell,
    goal: Cell,
}

impl Scenario {
    /// explicit layout; `start == goal` is accepted and yields an immediate arrival
    pub fn new(
        rows: usize,
        cols: usize,
        obstacles: Vec<Cell>,
        start: Cell,
        goal: Cell,
    ) -> Result<Self, ConfigError> {
        let grid = GridModel::new(rows, cols)?;
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;

        let set = ObstacleSet::new(obstacles);
        for cell in set.iter() {
            grid.check_bounds(cell)?;
            if cell == start {
                return Err(ConfigError::ObstacleOnStart(cell));
            }
            if cell == goal {
                return Err(ConfigError::ObstacleOnGoal(cell));
            }
        }
        if let Some(cell) = set.first_duplicate() {
            return Err(ConfigError::DuplicateObstacle(cell));
        }

        Ok(Self {
            rows,
            cols,
            obstacles: set.as_slice().to_vec(),
            start,
            goal,
        })
    }

    /// start and goal picked by the user, obstacles scattered on distinct free cells
    pub fn random<R: Rng>(
        size: usize,
        obstacle_count: usize,
        start: Cell,
        goal: Cell,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let grid = GridModel::square(size)?;
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;
        if start == goal {
            return Err(ConfigError::StartIsGoal(start));
        }

        let mut candidates: Vec<Cell> = grid
            .iter()
            .map(|(cell, _)| cell)
            .filter(|&cell| cell != start && cell != goal)
            .collect();

        if obstacle_count > candidates.len() {
            return Err(ConfigError::TooManyObstacles {
                requested: obstacle_count,
                available: candidates.len(),
            });
        }

        candidates.shuffle(rng);
        candidates.truncate(obstacle_count);

        log::debug!(
            "scattered {} obstacles on a {}x{} grid",
            obstacle_count,
            size,
            size
        );

        Self::new(size, size, candidates, start, goal)
    }

    /// the four vertices become obstacles and the goal is their rounded centroid
    pub fn pillar(size: usize, start: Cell, vertices: &[Cell]) -> Result<Self, ConfigError> {
        let vertices: [Cell; 4] = vertices
            .try_into()
            .map_err(|_| ConfigError::PillarVertices(vertices.len()))?;

        let grid = GridModel::square(size)?;
        for vertex in vertices {
            grid.check_bounds(vertex)?;
        }

        let goal = pillar_center(&vertices);
        if start == goal {
            return Err(ConfigError::StartIsGoal(start));
        }

        log::debug!("pillar centre at {}", goal);

        Self::new(size, size, vertices.to_vec(), start, goal)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn obstacles(&self) -> &[Cell] {
        &self.obstacles
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// occupancy grid with every obstacle stamped in, plus the obstacle registry
    pub fn build(&self) -> Result<(GridModel, ObstacleSet), GridError> {
        let mut grid = GridModel::new(self.rows, self.cols)?;
        let obstacles = ObstacleSet::new(self.obstacles.clone());
        obstacles.stamp(&mut grid)?;
        Ok((grid, obstacles))
    }
}

/// mean of the vertices, each coordinate rounded half to even
pub fn pillar_center(vertices: &[Cell; 4]) -> Cell {
    let rows: usize = vertices.iter().map(|v| v.row).sum();
    let cols: usize = vertices.iter().map(|v| v.col).sum();
    Cell::new(round_quarter(rows), round_quarter(cols))
}

fn round_quarter(sum: usize) -> usize {
    let (quotient, remainder) = (sum / 4, sum % 4);
    match remainder {
        0 | 1 => quotient,
        3 => quotient + 1,
        _ if quotient % 2 == 0 => quotient,
        _ => quotient + 1,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_new_accepts_valid_layout() {
        let scenario = Scenario::new(
            3,
            3,
            vec![Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1)],
            Cell::new(0, 0),
            Cell::new(0, 2),
        )
        .unwrap();

        let (grid, obstacles) = scenario.build().unwrap();
        assert_eq!(grid.blocked_count(), 3);
        assert!(obstacles.is_consistent_with(&grid));
    }

    #[rstest]
    #[case::on_start(vec![Cell::new(0, 0)], ConfigError::ObstacleOnStart(Cell::new(0, 0)))]
    #[case::on_goal(vec![Cell::new(2, 2)], ConfigError::ObstacleOnGoal(Cell::new(2, 2)))]
    #[case::duplicate(
        vec![Cell::new(1, 1), Cell::new(1, 1)],
        ConfigError::DuplicateObstacle(Cell::new(1, 1))
    )]
    #[case::out_of_bounds(
        vec![Cell::new(3, 1)],
        ConfigError::Grid(GridError::OutOfBounds { cell: Cell::new(3, 1), rows: 3, cols: 3 })
    )]
    fn test_new_rejects_overlaps(#[case] obstacles: Vec<Cell>, #[case] expected: ConfigError) {
        assert_eq!(
            Scenario::new(3, 3, obstacles, Cell::new(0, 0), Cell::new(2, 2)),
            Err(expected)
        );
    }

    #[test]
    fn test_random_places_distinct_obstacles() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let start = Cell::new(0, 0);
            let goal = Cell::new(9, 9);
            let scenario = Scenario::random(10, 30, start, goal, &mut rng).unwrap();

            let (grid, obstacles) = scenario.build().unwrap();
            assert_eq!(obstacles.len(), 30);
            assert!(obstacles.is_consistent_with(&grid));
            assert!(!obstacles.contains(start));
            assert!(!obstacles.contains(goal));
        }
    }

    #[test]
    fn test_random_is_reproducible() {
        let build = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            Scenario::random(8, 12, Cell::new(0, 0), Cell::new(7, 7), &mut rng).unwrap()
        };
        assert_eq!(build(7), build(7));
    }

    #[test]
    fn test_random_rejects_overfull_grid() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            Scenario::random(2, 3, Cell::new(0, 0), Cell::new(1, 1), &mut rng),
            Err(ConfigError::TooManyObstacles {
                requested: 3,
                available: 2,
            })
        );
    }

    #[test]
    fn test_random_rejects_start_on_goal() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            Scenario::random(4, 2, Cell::new(1, 1), Cell::new(1, 1), &mut rng),
            Err(ConfigError::StartIsGoal(Cell::new(1, 1)))
        );
    }

    #[rstest]
    #[case::square([(2, 2), (2, 6), (6, 6), (6, 2)], Cell::new(4, 4))]
    #[case::half_rounds_down_to_even([(2, 2), (2, 3), (3, 3), (3, 2)], Cell::new(2, 2))]
    #[case::half_rounds_up_to_even([(3, 3), (3, 4), (4, 4), (4, 3)], Cell::new(4, 4))]
    #[case::quarters([(0, 0), (0, 1), (0, 0), (1, 0)], Cell::new(0, 0))]
    #[case::three_quarters([(1, 1), (1, 1), (1, 1), (0, 0)], Cell::new(1, 1))]
    fn test_pillar_center(#[case] vertices: [(usize, usize); 4], #[case] expected: Cell) {
        let vertices = vertices.map(|(row, col)| Cell::new(row, col));
        assert_eq!(pillar_center(&vertices), expected);
    }

    #[test]
    fn test_pillar_scenario() {
        let vertices = [
            Cell::new(2, 2),
            Cell::new(2, 6),
            Cell::new(6, 6),
            Cell::new(6, 2),
        ];
        let scenario = Scenario::pillar(10, Cell::new(0, 0), &vertices).unwrap();

        assert_eq!(scenario.goal(), Cell::new(4, 4));
        assert_eq!(scenario.obstacles(), &vertices);
    }

    #[test]
    fn test_pillar_rejects_collapsed_vertices() {
        let vertices = [Cell::new(3, 3); 4];
        assert_eq!(
            Scenario::pillar(10, Cell::new(0, 0), &vertices),
            Err(ConfigError::ObstacleOnGoal(Cell::new(3, 3)))
        );
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[case(5)]
    fn test_pillar_rejects_wrong_vertex_count(#[case] count: usize) {
        let vertices: Vec<Cell> = (0..count).map(|i| Cell::new(i + 1, 5)).collect();
        assert_eq!(
            Scenario::pillar(10, Cell::new(0, 0), &vertices),
            Err(ConfigError::PillarVertices(count))
        );
    }
}
