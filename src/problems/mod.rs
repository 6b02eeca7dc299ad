//! Concrete problems for the search engines: grid puzzles read from
//! character maps, and explicit weighted graphs.

mod dungeon;
mod graph;
pub mod grid;
mod parking;
mod parse_error;

pub use dungeon::{
    maze_distance_heuristic, strong_heuristic, weak_heuristic, DungeonLayout, DungeonProblem,
    DungeonState,
};
pub use graph::GraphProblem;
pub use grid::{euclidean_distance, manhattan_distance, Direction, Point};
pub use parking::{ParkingAction, ParkingProblem, ParkingState, FOREIGN_SLOT_COST};
pub use parse_error::ParseError;
