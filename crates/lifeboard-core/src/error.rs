//! Error types for the simulation core.

use lifeboard_db::StoreError;
use lifeboard_types::{BoardError, BoardId};

/// Which coordinate of a cell lookup was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    /// The row index.
    Row,
    /// The column index.
    Column,
}

impl core::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Row => f.write_str("row"),
            Self::Column => f.write_str("column"),
        }
    }
}

/// Errors produced by the rule engine and the simulation service.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// A neighbor count was requested outside the board.
    #[error("{coordinate} index {index} is out of range (board has {bound})")]
    OutOfRange {
        /// The offending coordinate.
        coordinate: Coordinate,
        /// The requested index.
        index: usize,
        /// The number of rows or columns on the board.
        bound: usize,
    },

    /// The board did not reach a fixed point within the attempt budget.
    #[error("board {id} didn't reach a stable state within {max_attempts} attempts")]
    NotStabilized {
        /// The board that kept changing.
        id: BoardId,
        /// The attempt budget that was exhausted.
        max_attempts: u32,
    },

    /// Every identifier has been handed out.
    #[error("board identifier space exhausted")]
    IdentifiersExhausted,

    /// A computed grid failed board validation.
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),

    /// The storage collaborator failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
