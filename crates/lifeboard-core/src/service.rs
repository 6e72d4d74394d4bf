//! The simulation service.
//!
//! [`GameOfLifeService`] is the single entry point the HTTP layer talks
//! to. Every operation reads a [`BoardState`] from the store, works on a
//! private copy, and writes the result back under the same id. History is
//! not retained.
//!
//! Concurrent operations on the same id are not serialized: whichever
//! write lands last wins.

use std::sync::Arc;

use lifeboard_db::BoardStore;
use lifeboard_types::{Board, BoardId, BoardState};
use tracing::debug;

use crate::allocator::IdAllocator;
use crate::calculator::StateCalculator;
use crate::error::SimulationError;

/// Upload, step, and stabilize boards held in a [`BoardStore`].
#[derive(Debug)]
pub struct GameOfLifeService<S> {
    store: S,
    allocator: Arc<IdAllocator>,
    calculator: StateCalculator,
}

impl<S: BoardStore> GameOfLifeService<S> {
    /// Create a service over `store`, drawing ids from `allocator`.
    pub const fn new(store: S, allocator: Arc<IdAllocator>) -> Self {
        Self {
            store,
            allocator,
            calculator: StateCalculator::new(),
        }
    }

    /// The backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The shared id allocator.
    pub fn allocator(&self) -> &IdAllocator {
        &self.allocator
    }

    /// Assign a fresh id to `board`, persist it, and return the id.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::IdentifiersExhausted`] or
    /// [`SimulationError::Store`].
    pub async fn upload_board(&self, board: Board) -> Result<BoardId, SimulationError> {
        let state = self.allocator.stamp(board, &self.store).await?;
        self.store.save(&state).await?;
        debug!(
            board_id = %state.id,
            rows = state.board.row_count(),
            cols = state.board.col_count(),
            "Board uploaded"
        );
        Ok(state.id)
    }

    /// Advance the board one generation and persist it.
    ///
    /// Returns `None` when no board is stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Store`] if the load or save fails.
    pub async fn next_state(&self, id: BoardId) -> Result<Option<BoardState>, SimulationError> {
        let Some(current) = self.store.load(id).await? else {
            return Ok(None);
        };

        let next = self.calculator.next_state(&current)?;
        self.store.save(&next).await?;
        debug!(board_id = %id, population = next.board.population(), "Advanced one generation");
        Ok(Some(next))
    }

    /// Advance the board exactly `steps` generations and persist the result.
    ///
    /// With `steps == 0` the stored board is written back unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Store`] if the load or save fails.
    pub async fn states_away(
        &self,
        id: BoardId,
        steps: u32,
    ) -> Result<Option<BoardState>, SimulationError> {
        let Some(mut current) = self.store.load(id).await? else {
            return Ok(None);
        };

        for _ in 0..steps {
            current = self.calculator.next_state(&current)?;
        }

        self.store.save(&current).await?;
        debug!(board_id = %id, steps, population = current.board.population(), "Advanced generations");
        Ok(Some(current))
    }

    /// Advance the board until a generation equals its predecessor.
    ///
    /// Each attempt computes one generation and compares it with the
    /// previous one, so a board that is already a fixed point still uses up
    /// one attempt. The stable board is persisted on success; nothing is
    /// written on failure.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::NotStabilized`] when `max_attempts`
    /// generations pass without reaching a fixed point (always the case for
    /// oscillators), or [`SimulationError::Store`] if the load or save fails.
    pub async fn final_state(
        &self,
        id: BoardId,
        max_attempts: u32,
    ) -> Result<Option<BoardState>, SimulationError> {
        let Some(mut current) = self.store.load(id).await? else {
            return Ok(None);
        };

        for attempt in 1..=max_attempts {
            let next = self.calculator.next_state(&current)?;
            if self.calculator.boards_equal(&current.board, &next.board) {
                self.store.save(&next).await?;
                debug!(board_id = %id, attempt, "Board stabilized");
                return Ok(Some(next));
            }
            current = next;
        }

        Err(SimulationError::NotStabilized { id, max_attempts })
    }

    /// The stored board, without simulating.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Store`] if the load fails.
    pub async fn board(&self, id: BoardId) -> Result<Option<BoardState>, SimulationError> {
        Ok(self.store.load(id).await?)
    }

    /// Every stored board, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Store`] if the load fails.
    pub async fn boards(&self) -> Result<Vec<BoardState>, SimulationError> {
        let mut states = self.store.load_all().await?;
        states.sort_by_key(|state| state.id);
        Ok(states)
    }
}
