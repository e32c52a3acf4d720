mod cadence;
pub mod config;
mod driver;
mod error;
mod relocation;
mod scenario;
mod state;
mod summary;

pub use cadence::Cadence;
pub use config::SimulationConfig;
pub use driver::NavigationDriver;
pub use error::{ConfigError, DriverError};
pub use relocation::{RelocationReport, RelocationRule};
pub use scenario::{Scenario, pillar_center};
pub use state::DriverState;
pub use summary::{DriverStats, RunSummary};
