//! Recursive-division mazes and the random walkers that wander them.

pub mod agent;
pub mod config;
pub mod error;
pub mod grid;
pub mod maze;
pub mod random;
pub mod render;
pub mod simulation;
pub mod stats;
pub mod viewer;

pub use agent::{Agent, Direction, StepOutcome};
pub use config::{Cli, SimulationConfig};
pub use error::{ConfigError, MazeError, StatsError};
pub use grid::{Grid, Node, Tile};
pub use maze::generate_maze;
pub use random::RandomSource;
pub use simulation::{RunSummary, Simulation, TickReport};
pub use stats::{RunStatistics, save_statistics};
