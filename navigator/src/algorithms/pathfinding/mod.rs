mod astar;
mod dijkstra;
mod path;
pub mod traits;

pub use astar::AStar;
pub use dijkstra::Dijkstra;
pub use path::Path;
pub use traits::{PathfindingAlgorithm, SearchError};
