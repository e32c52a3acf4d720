use std::time::Duration;

use super::state::DriverState;

/// counters accumulated by a driver over its lifetime
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverStats {
    pub steps: usize,
    pub relocations: usize,
    /// length of every computed path, initial plan first
    pub path_lengths: Vec<usize>,
    pub planning_time: Duration,
}

impl DriverStats {
    pub fn replans(&self) -> usize {
        self.path_lengths.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub outcome: DriverState,
    pub steps: usize,
    pub relocations: usize,
    pub path_lengths: Vec<usize>,
    pub planning_time: Duration,
    pub total_time: Duration,
}

impl RunSummary {
    pub fn new(outcome: DriverState, stats: &DriverStats, total_time: Duration) -> Self {
        Self {
            outcome,
            steps: stats.steps,
            relocations: stats.relocations,
            path_lengths: stats.path_lengths.clone(),
            planning_time: stats.planning_time,
            total_time,
        }
    }

    pub fn replans(&self) -> usize {
        self.path_lengths.len().saturating_sub(1)
    }
}
