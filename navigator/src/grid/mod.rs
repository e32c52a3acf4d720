mod cell;
mod direction;
mod error;
mod model;
mod obstacles;
mod occupancy;

pub use cell::Cell;
pub use direction::Direction;
pub use error::GridError;
pub use model::GridModel;
pub use obstacles::ObstacleSet;
pub use occupancy::Occupancy;
