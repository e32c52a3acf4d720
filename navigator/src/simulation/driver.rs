use std::time::Instant;

use rand::Rng;

use crate::algorithms::pathfinding::{Path, PathfindingAlgorithm};
use crate::grid::{Cell, GridModel, ObstacleSet};

use super::{
    cadence::Cadence,
    error::{ConfigError, DriverError},
    relocation::RelocationRule,
    scenario::Scenario,
    state::DriverState,
    summary::{DriverStats, RunSummary},
};

/// Moves a robot towards a fixed goal while obstacles wander.
///
/// Every relocation tick replans from the robot's current cell; every movement tick advances
/// the robot one cell along the stored path. `Arrived` and `Stuck` are terminal and turn all
/// further ticks into no-ops.
pub struct NavigationDriver<P: PathfindingAlgorithm, R: Rng> {
    planner: P,
    rng: R,
    relocation: RelocationRule,
    grid: GridModel,
    obstacles: ObstacleSet,
    start: Cell,
    goal: Cell,
    robot: Cell,
    path: Path,
    state: DriverState,
    stats: DriverStats,
}

impl<P: PathfindingAlgorithm, R: Rng> NavigationDriver<P, R> {
    /// builds the grid from `scenario` and computes the initial plan
    pub fn new(
        planner: P,
        scenario: &Scenario,
        relocation: RelocationRule,
        rng: R,
    ) -> Result<Self, ConfigError> {
        let (grid, obstacles) = scenario.build()?;

        let mut driver = Self {
            planner,
            rng,
            relocation,
            grid,
            obstacles,
            start: scenario.start(),
            goal: scenario.goal(),
            robot: scenario.start(),
            path: Path::empty(),
            state: DriverState::AwaitingPath,
            stats: DriverStats::default(),
        };

        log::debug!(
            "planning {} -> {} with {}",
            driver.start,
            driver.goal,
            driver.planner.name()
        );
        driver.replan();

        Ok(driver)
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn robot(&self) -> Cell {
        self.robot
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn stats(&self) -> &DriverStats {
        &self.stats
    }

    /// moves every obstacle, then replans from the robot's current cell
    pub fn on_relocation_tick(&mut self) -> Result<DriverState, DriverError> {
        if self.state != DriverState::Navigating {
            return Ok(self.state);
        }

        let reserved = [self.start, self.goal, self.robot];
        self.relocation
            .relocate(&mut self.grid, &mut self.obstacles, &reserved, &mut self.rng)?;
        self.stats.relocations += 1;

        self.replan();
        Ok(self.state)
    }

    /// advances the robot one cell along the stored path
    pub fn on_movement_tick(&mut self) -> Result<DriverState, DriverError> {
        if self.state != DriverState::Navigating {
            return Ok(self.state);
        }

        let Some(next) = self.path.pop_front() else {
            if self.robot == self.goal {
                self.arrive();
                return Ok(self.state);
            }
            return Err(DriverError::PathExhausted {
                robot: self.robot,
                goal: self.goal,
            });
        };

        log::trace!("robot {} -> {}", self.robot, next);
        self.robot = next;
        self.stats.steps += 1;

        if self.robot == self.goal {
            self.arrive();
        }

        Ok(self.state)
    }

    /// one movement tick, preceded by a relocation tick when `cadence` says so
    pub fn tick(&mut self, cadence: &mut Cadence) -> Result<DriverState, DriverError> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        if cadence.advance() {
            self.on_relocation_tick()?;
        }
        self.on_movement_tick()
    }

    /// ticks until a terminal state or `max_ticks` movement ticks
    pub fn run(
        &mut self,
        cadence: &mut Cadence,
        max_ticks: usize,
    ) -> Result<RunSummary, DriverError> {
        let started = Instant::now();

        for _ in 0..max_ticks {
            if self.tick(cadence)?.is_terminal() {
                break;
            }
        }

        if !self.state.is_terminal() {
            log::warn!("gave up after {} ticks at {}", max_ticks, self.robot);
        }

        Ok(RunSummary::new(self.state, &self.stats, started.elapsed()))
    }

    fn replan(&mut self) {
        let planning_start = Instant::now();
        let result = self.planner.find_path(&self.grid, self.robot, self.goal);
        self.stats.planning_time += planning_start.elapsed();

        match result {
            Ok(path) => {
                log::debug!(
                    "{} planned {} steps from {}",
                    self.planner.name(),
                    path.len(),
                    self.robot
                );
                self.stats.path_lengths.push(path.len());
                self.path = path;
                self.state = DriverState::Navigating;

                if self.robot == self.goal {
                    self.arrive();
                }
            }
            Err(e) => {
                self.path = Path::empty();
                self.state = DriverState::Stuck;
                log::info!("no path found: {}", e);
            }
        }
    }

    fn arrive(&mut self) {
        self.state = DriverState::Arrived;
        log::info!("destination reached in {} steps", self.stats.steps);
    }
}
