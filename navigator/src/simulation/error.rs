use thiserror::Error;

use crate::grid::{Cell, GridError};

/// rejected scenario layouts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("start and goal both at {0}")]
    StartIsGoal(Cell),
    #[error("obstacle placed on the start cell {0}")]
    ObstacleOnStart(Cell),
    #[error("obstacle placed on the goal cell {0}")]
    ObstacleOnGoal(Cell),
    #[error("two obstacles share cell {0}")]
    DuplicateObstacle(Cell),
    #[error("a pillar needs exactly 4 vertices, got {0}")]
    PillarVertices(usize),
    #[error("cannot place {requested} obstacles, only {available} free cells")]
    TooManyObstacles { requested: usize, available: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    #[error("path exhausted at {robot} before reaching goal {goal}")]
    PathExhausted { robot: Cell, goal: Cell },
    #[error(transparent)]
    Grid(#[from] GridError),
}
