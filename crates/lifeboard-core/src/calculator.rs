//! Next-generation computation and fixed-point detection.
//!
//! The rule, for a cell with `n` live neighbors:
//!
//! | Current | `n` | Next |
//! |---------|-----|------|
//! | alive | < 2 | dead (underpopulation) |
//! | alive | 2 or 3 | alive |
//! | alive | > 3 | dead (overpopulation) |
//! | dead | 3 | alive (reproduction) |
//! | dead | otherwise | dead |
//!
//! Every generation is computed into a fresh grid; the input is never
//! touched.

use lifeboard_types::{ALIVE, Board, BoardState, Cell, DEAD};

use crate::error::SimulationError;
use crate::neighbors::count_alive_neighbors;

/// Applies the Game of Life rule to whole boards.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateCalculator;

impl StateCalculator {
    /// Create a calculator.
    pub const fn new() -> Self {
        Self
    }

    /// Compute the generation after `state`, keeping its identifier.
    ///
    /// # Errors
    ///
    /// Propagates [`SimulationError::OutOfRange`] from the neighbor count,
    /// which only happens if the board invariants were broken.
    pub fn next_state(&self, state: &BoardState) -> Result<BoardState, SimulationError> {
        let board = self.next_board(&state.board)?;
        Ok(BoardState::new(state.id, board))
    }

    /// Compute the generation after `board`.
    ///
    /// # Errors
    ///
    /// See [`next_state`](Self::next_state).
    pub fn next_board(&self, board: &Board) -> Result<Board, SimulationError> {
        let next = board
            .rows()
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, &cell)| {
                        let neighbors = count_alive_neighbors(board, row, col)?;
                        Ok(next_cell(cell, neighbors))
                    })
                    .collect::<Result<Vec<Cell>, SimulationError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Board::new(next)?)
    }

    /// Whether two boards have the same dimensions and identical cells.
    ///
    /// Identifiers play no part; this compares grids only.
    pub fn boards_equal(&self, a: &Board, b: &Board) -> bool {
        a.row_count() == b.row_count()
            && a.rows()
                .iter()
                .zip(b.rows())
                .all(|(row_a, row_b)| row_a.len() == row_b.len() && row_a == row_b)
    }
}

/// The rule for a single cell.
const fn next_cell(cell: Cell, neighbors: u8) -> Cell {
    match (cell, neighbors) {
        (ALIVE, 2 | 3) | (DEAD, 3) => ALIVE,
        (ALIVE, _) => DEAD,
        (other, _) => other,
    }
}
