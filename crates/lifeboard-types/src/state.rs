//! A board stamped with its identifier.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::board::Board;
use crate::ids::BoardId;

/// A [`Board`] plus the identifier it is stored under.
///
/// Every simulation step overwrites the state stored under the same
/// `id`; earlier generations are not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BoardState {
    /// Identifier assigned at upload time.
    #[ts(type = "number")]
    pub id: BoardId,
    /// The current generation's grid.
    #[ts(as = "Vec<Vec<u8>>")]
    pub board: Board,
}

impl BoardState {
    /// Pair a board with its identifier.
    pub const fn new(id: BoardId, board: Board) -> Self {
        Self { id, board }
    }
}
