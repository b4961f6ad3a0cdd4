use thiserror::Error;

use crate::maze::Coord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze size must be odd, got {size}")]
    EvenSize { size: usize },

    #[error("maze size {size} is outside the supported range {min}..={max}")]
    SizeOutOfRange { size: usize, min: usize, max: usize },

    #[error("grid has no cells")]
    EmptyGrid,

    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("coordinate {coord} is outside a {size}x{size} grid")]
    OutOfBounds { coord: Coord, size: usize },

    #[error("unknown cell symbol {symbol:?} at row {row}, column {col}")]
    UnknownCellSymbol { symbol: char, row: usize, col: usize },

    #[error("no saved maze named {name:?}")]
    UnknownSnapshot { name: String },
}

pub type Result<T> = std::result::Result<T, MazeError>;
