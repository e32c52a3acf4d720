use std::time::Duration;

pub const DEFAULT_GRID_SIZE: usize = 10;
pub const DEFAULT_OBSTACLE_COUNT: usize = 30;
/// 3 s between relocations at one movement tick per 0.5 s
pub const DEFAULT_RELOCATION_EVERY: usize = 6;
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_RETRY_BUDGET: usize = 16;
pub const DEFAULT_MAX_TICKS: usize = 1_000;

/// Simulation settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Rows and columns of the square grid
    pub grid_size: usize,
    /// Obstacles placed by the random scenario
    pub obstacle_count: usize,
    /// Movement ticks between obstacle relocations (0 disables relocation)
    pub relocation_every: usize,
    /// Wall-clock pause between movement ticks (presentation only)
    pub step_delay: Duration,
    /// Candidate cells tried per obstacle before it stays put
    pub retry_budget: usize,
    /// Movement ticks before a run is abandoned
    pub max_ticks: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            obstacle_count: DEFAULT_OBSTACLE_COUNT,
            relocation_every: DEFAULT_RELOCATION_EVERY,
            step_delay: DEFAULT_STEP_DELAY,
            retry_budget: DEFAULT_RETRY_BUDGET,
            max_ticks: DEFAULT_MAX_TICKS,
        }
    }
}

impl SimulationConfig {
    /// Run without pauses between ticks
    pub fn headless(mut self) -> Self {
        self.step_delay = Duration::ZERO;
        self
    }
}
