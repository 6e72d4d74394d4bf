//! Live-neighbor counting.
//!
//! The neighborhood of a cell is the 3x3 block centered on it, clipped to
//! the board. There is no wraparound, so edge cells have five candidate
//! neighbors and corner cells three.

use lifeboard_types::Board;

use crate::error::{Coordinate, SimulationError};

/// Count the live cells around `(row, col)`, excluding the cell itself.
///
/// # Errors
///
/// Returns [`SimulationError::OutOfRange`] naming the row or column when
/// the coordinate lies outside the board. The row is checked first.
pub fn count_alive_neighbors(board: &Board, row: usize, col: usize) -> Result<u8, SimulationError> {
    let row_count = board.row_count();
    let col_count = board.col_count();

    if row >= row_count {
        return Err(SimulationError::OutOfRange {
            coordinate: Coordinate::Row,
            index: row,
            bound: row_count,
        });
    }
    if col >= col_count {
        return Err(SimulationError::OutOfRange {
            coordinate: Coordinate::Column,
            index: col,
            bound: col_count,
        });
    }

    let rows = row.saturating_sub(1)..=row.saturating_add(1).min(row_count.saturating_sub(1));
    let cols = col.saturating_sub(1)..=col.saturating_add(1).min(col_count.saturating_sub(1));

    let mut alive: u8 = 0;
    for r in rows {
        for c in cols.clone() {
            if (r, c) != (row, col) && board.is_alive(r, c) {
                alive = alive.saturating_add(1);
            }
        }
    }
    Ok(alive)
}
