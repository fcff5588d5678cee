//! Error type of the maze library

use thiserror::Error;

use crate::grid::Position;

/// Precondition violations reported by grid, random source and solver.
///
/// Every failing operation leaves the grid untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// Grid requested with zero columns or rows
    #[error("invalid grid dimensions {num_cols}x{num_rows}, both must be at least 1")]
    InvalidDimensions { num_cols: usize, num_rows: usize },

    /// Coordinate outside of the grid
    #[error("position ({col}, {row}) is outside of the grid")]
    OutOfBounds { col: i64, row: i64 },

    /// Wall removal between cells that do not share a wall
    #[error("cells {a} and {b} are not adjacent")]
    NotAdjacent { a: Position, b: Position },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, MazeError>;
