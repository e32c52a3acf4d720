mod cli;
mod logging;
mod render;

use std::time::Instant;

use clap::Parser;
use eyre::Result;
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use navigator::algorithms::pathfinding::{self, PathfindingAlgorithm as Planner};
use navigator::simulation::{
    Cadence, NavigationDriver, RelocationRule, RunSummary, Scenario, SimulationConfig,
};

use cli::{Args, Command, PathfindingAlgorithm, ScenarioCommand};
use logging::Logger;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!("seed: {} (pass --seed {} to replay)", seed, seed);

    match &args.command {
        Command::Run { scenario } => {
            let config = args.config(scenario.obstacle_count());
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let scenario = build_scenario(scenario, &config, &mut rng)?;

            info!("navigating with {}", args.planner.name());
            let summary = simulate(args.planner, &scenario, &config, rng, args.render).await?;
            print_result(&summary);
        }
        Command::Benchmark { scenario } => {
            let config = args.config(scenario.obstacle_count()).headless();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let scenario = build_scenario(scenario, &config, &mut rng)?;

            run_benchmark(&scenario, &config, rng).await?;
        }
    }

    Ok(())
}

fn build_scenario(
    command: &ScenarioCommand,
    config: &SimulationConfig,
    rng: &mut ChaCha8Rng,
) -> Result<Scenario> {
    let scenario = match command {
        ScenarioCommand::Random { start, goal, .. } => {
            Scenario::random(config.grid_size, config.obstacle_count, *start, *goal, rng)?
        }
        ScenarioCommand::Pillar { start, vertices } => {
            Scenario::pillar(config.grid_size, *start, vertices)?
        }
    };

    debug!(
        "{}x{} grid: {} → {} with {} obstacles",
        scenario.rows(),
        scenario.cols(),
        scenario.start(),
        scenario.goal(),
        scenario.obstacles().len()
    );

    Ok(scenario)
}

async fn simulate(
    algorithm: PathfindingAlgorithm,
    scenario: &Scenario,
    config: &SimulationConfig,
    rng: ChaCha8Rng,
    render: bool,
) -> Result<RunSummary> {
    match algorithm {
        PathfindingAlgorithm::AStar => {
            drive(pathfinding::AStar, scenario, config, rng, render).await
        }
        PathfindingAlgorithm::Dijkstra => {
            drive(pathfinding::Dijkstra, scenario, config, rng, render).await
        }
    }
}

async fn drive<P: Planner>(
    planner: P,
    scenario: &Scenario,
    config: &SimulationConfig,
    rng: ChaCha8Rng,
    render: bool,
) -> Result<RunSummary> {
    let rule = RelocationRule::new(config.retry_budget);
    let mut driver = NavigationDriver::new(planner, scenario, rule, rng)?;
    let mut cadence = Cadence::new(config.relocation_every);

    if render {
        println!("{}\n", render::frame(&driver));
    }

    if !needs_tick_loop(config, render) {
        return Ok(driver.run(&mut cadence, config.max_ticks)?);
    }

    let started = Instant::now();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut ticks = 0;
    while !driver.state().is_terminal() && ticks < config.max_ticks {
        tokio::select! {
            _ = &mut ctrl_c => {
                warn!("interrupted at {}", driver.robot());
                break;
            }
            _ = tokio::time::sleep(config.step_delay) => {}
        }

        driver.tick(&mut cadence)?;
        ticks += 1;

        if render {
            println!("{}\n", render::frame(&driver));
        }
    }

    if !driver.state().is_terminal() && ticks >= config.max_ticks {
        warn!("gave up after {} ticks at {}", ticks, driver.robot());
    }

    Ok(RunSummary::new(
        driver.state(),
        driver.stats(),
        started.elapsed(),
    ))
}

/// pacing or per-tick frames need the interactive loop
fn needs_tick_loop(config: &SimulationConfig, render: bool) -> bool {
    render || !config.step_delay.is_zero()
}

async fn run_benchmark(
    scenario: &Scenario,
    config: &SimulationConfig,
    rng: ChaCha8Rng,
) -> Result<()> {
    info!("benchmarking planners");

    let mut completed_results = Vec::new();

    for algorithm in PathfindingAlgorithm::all() {
        info!("testing {}", algorithm.name());

        match simulate(algorithm, scenario, config, rng.clone(), false).await {
            Ok(summary) => {
                print_result(&summary);
                completed_results.push((algorithm.name(), summary));
            }
            Err(e) => {
                log::error!("{} failed: {}", algorithm.name(), e);
            }
        }
    }

    print_benchmark_summary(&completed_results);
    Ok(())
}

fn print_result(summary: &RunSummary) {
    info!(
        "{} after {} steps ({:?})",
        summary.outcome.status(),
        summary.steps,
        summary.total_time
    );
    debug!(
        "{} relocations, {} replans, planning: {:?}",
        summary.relocations,
        summary.replans(),
        summary.planning_time
    );
    debug!("path lengths: {:?}", summary.path_lengths);
}

fn print_benchmark_summary(results: &[(&str, RunSummary)]) {
    info!("\nbenchmark results:");
    info!(
        "{:<12} {:<20} {:>8} {:>8}  {:>12}  {:>12}",
        "planner", "outcome", "steps", "replans", "plan", "total"
    );
    info!("{:-<80}", "");

    for (name, summary) in results {
        info!(
            "{:<12} {:<20} {:>8} {:>8}  {:>12?}  {:>12?}",
            name,
            summary.outcome.status(),
            summary.steps,
            summary.replans(),
            summary.planning_time,
            summary.total_time,
        );
    }

    if let Some((name, summary)) = results.iter().min_by_key(|(_, s)| s.planning_time) {
        info!("\nfastest planning: {} ({:?})", name, summary.planning_time);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_rendering_without_delay_keeps_tick_loop() {
        let config = SimulationConfig::default().headless();
        assert!(needs_tick_loop(&config, true));
        assert!(!needs_tick_loop(&config, false));

        let paced = SimulationConfig {
            step_delay: Duration::from_millis(10),
            ..SimulationConfig::default()
        };
        assert!(needs_tick_loop(&paced, false));
    }
}
