use thiserror::Error;

use crate::grid::Node;

/// Errors raised while building a maze.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Division needs at least one interior cell on each axis.
    #[error("maze must be at least 3x3, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// A side is too long to address with `Node`'s `i32` coordinates.
    #[error("maze of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },
    /// Start or end cell lies outside the grid.
    #[error("cell {node} is outside a {width}x{height} grid")]
    OutOfBounds {
        node: Node,
        width: usize,
        height: usize,
    },
    /// Agents would spawn on, or walk towards, a wall.
    #[error("cell {node} is not open")]
    ClosedEndpoint { node: Node },
}

/// Errors raised by `SimulationConfig::validate`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
    #[error(transparent)]
    Maze(#[from] MazeError),
}

/// Errors raised while appending run statistics.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to open statistics file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write statistics row: {0}")]
    Csv(#[from] csv::Error),
}
