// error.rs - Precondition failures of the grid engine

use thiserror::Error;

use crate::grid::Position;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    /// The compact state of the grid would not fit in a `u64`.
    #[error("a {rows}x{cols} grid has more than {max} cells")]
    TooManyCells { rows: usize, cols: usize, max: usize },

    #[error("cell value must be 0 or 1, got {0}")]
    InvalidCellValue(u8),

    #[error("position {position:?} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("compact state {value:#b} needs more than {cells} bits")]
    CompactOverflow { value: u64, cells: usize },
}
