pub mod algorithms;
pub mod grid;
pub mod simulation;
