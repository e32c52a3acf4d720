use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use navigator::grid::Cell;
use navigator::simulation::{SimulationConfig, config};

#[derive(Parser, Debug)]
#[command(name = "navigator")]
#[command(about = "Grid robot navigation among wandering obstacles")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Seed for obstacle placement and movement (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Rows and columns of the square grid
    #[arg(long, default_value_t = config::DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Movement ticks between obstacle relocations (0 = obstacles never move)
    #[arg(long, default_value_t = config::DEFAULT_RELOCATION_EVERY)]
    pub relocation_every: usize,

    /// Delay between moves in milliseconds (0 = no delay)
    #[arg(short, long, default_value_t = config::DEFAULT_STEP_DELAY.as_millis() as u64)]
    pub delay: u64,

    /// Attempts per obstacle before it stays in place for a tick
    #[arg(long, default_value_t = config::DEFAULT_RETRY_BUDGET)]
    pub retry_budget: usize,

    /// Movement ticks before the run is abandoned
    #[arg(long, default_value_t = config::DEFAULT_MAX_TICKS)]
    pub max_ticks: usize,

    /// Pathfinding algorithm used for every (re)plan
    #[arg(short, long, value_enum, default_value_t = PathfindingAlgorithm::AStar)]
    pub planner: PathfindingAlgorithm,

    /// Print the grid after every tick
    #[arg(short, long)]
    pub render: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn config(&self, obstacle_count: usize) -> SimulationConfig {
        SimulationConfig {
            grid_size: self.size,
            obstacle_count,
            relocation_every: self.relocation_every,
            step_delay: std::time::Duration::from_millis(self.delay),
            retry_budget: self.retry_budget,
            max_ticks: self.max_ticks,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a single simulation with the selected planner
    Run {
        #[command(subcommand)]
        scenario: ScenarioCommand,
    },

    /// Replay the same seeded scenario with every planner and compare
    Benchmark {
        #[command(subcommand)]
        scenario: ScenarioCommand,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ScenarioCommand {
    /// Obstacles scattered at random around a chosen start and goal
    Random {
        /// Robot start cell as ROW,COL
        #[arg(long, value_name = "ROW,COL")]
        start: Cell,

        /// Destination cell as ROW,COL
        #[arg(long, value_name = "ROW,COL")]
        goal: Cell,

        /// Number of obstacles to scatter
        #[arg(short, long, default_value_t = config::DEFAULT_OBSTACLE_COUNT)]
        obstacles: usize,
    },

    /// Four pillar vertices become obstacles; the goal is their centre
    Pillar {
        /// Robot start cell as ROW,COL
        #[arg(long, value_name = "ROW,COL")]
        start: Cell,

        /// Pillar vertex as ROW,COL (repeat four times)
        #[arg(long = "vertex", value_name = "ROW,COL", required = true)]
        vertices: Vec<Cell>,
    },
}

impl ScenarioCommand {
    pub fn obstacle_count(&self) -> usize {
        match self {
            Self::Random { obstacles, .. } => *obstacles,
            Self::Pillar { vertices, .. } => vertices.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PathfindingAlgorithm {
    /// A* algorithm with Manhattan distance heuristic
    #[value(name = "astar", alias = "a-star")]
    AStar,

    /// Dijkstra's shortest path algorithm
    Dijkstra,
}

impl PathfindingAlgorithm {
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::AStar, Self::Dijkstra].into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AStar => "A*",
            Self::Dijkstra => "Dijkstra",
        }
    }
}
