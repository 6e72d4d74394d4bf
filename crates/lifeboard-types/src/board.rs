//! The rectangular cell grid.
//!
//! A [`Board`] can only be built through [`Board::new`] (or deserialized,
//! which goes through the same checks), so every value of the type holds
//! these invariants:
//!
//! - at least one row and at least one column
//! - every row has the same length
//! - every cell is [`DEAD`] or [`ALIVE`]
//!
//! Stores and the simulation service rely on this and never re-validate.

use serde::{Deserialize, Serialize};

/// A single cell value. Only [`DEAD`] and [`ALIVE`] are valid.
pub type Cell = u8;

/// A dead cell.
pub const DEAD: Cell = 0;

/// A live cell.
pub const ALIVE: Cell = 1;

/// Reasons a raw grid was rejected as a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The grid has no rows.
    #[error("board has no rows")]
    NoRows,

    /// The first row has no cells.
    #[error("board has no columns")]
    NoColumns,

    /// A row's length differs from the first row's.
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A cell holds something other than 0 or 1.
    #[error("cell ({row}, {col}) has value {value}, expected 0 or 1")]
    InvalidCell {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The rejected value.
        value: Cell,
    },
}

/// A validated, rectangular Game of Life grid.
///
/// Serializes as a plain array of rows, e.g. `[[0,1,0],[0,0,1],[1,1,1]]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Board {
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Validate a raw grid and wrap it.
    ///
    /// # Errors
    ///
    /// Returns the first [`BoardError`] found, scanning rows top to bottom.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let expected = rows.first().map(Vec::len).ok_or(BoardError::NoRows)?;
        if expected == 0 {
            return Err(BoardError::NoColumns);
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(BoardError::Ragged {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
            if let Some((col, &value)) = cells
                .iter()
                .enumerate()
                .find(|&(_, &value)| value != DEAD && value != ALIVE)
            {
                return Err(BoardError::InvalidCell { row, col, value });
            }
        }

        Ok(Self { rows })
    }

    /// An all-dead board of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoRows`] or [`BoardError::NoColumns`] when
    /// either dimension is zero.
    pub fn dead(row_count: usize, col_count: usize) -> Result<Self, BoardError> {
        Self::new(vec![vec![DEAD; col_count]; row_count])
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (identical for every row).
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// The value at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Whether the cell at `(row, col)` is alive. Out-of-grid cells are dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Some(ALIVE)
    }

    /// Number of live cells on the whole board.
    pub fn population(&self) -> usize {
        self.rows
            .iter()
            .map(|cells| cells.iter().filter(|&&value| value == ALIVE).count())
            .sum()
    }

    /// Borrow the rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.rows
    }
}
