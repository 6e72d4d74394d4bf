//! The storage contract consumed by the simulation service.

use std::future::Future;

use lifeboard_types::{BoardId, BoardState};

use crate::error::StoreError;

/// Durable home for [`BoardState`] values keyed by [`BoardId`].
///
/// Implementations own the stored values; every read hands out an
/// independent copy, so callers may mutate what they get back without
/// touching the stored value.
pub trait BoardStore: Send + Sync {
    /// Insert or overwrite the state stored under `state.id`.
    ///
    /// Saving the same state twice leaves the store unchanged.
    fn save(&self, state: &BoardState) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Load the state stored under `id`, or `None` if there is none.
    fn load(
        &self,
        id: BoardId,
    ) -> impl Future<Output = Result<Option<BoardState>, StoreError>> + Send;

    /// Load every stored state. Order is unspecified.
    fn load_all(&self) -> impl Future<Output = Result<Vec<BoardState>, StoreError>> + Send;

    /// The highest identifier currently stored, or 0 when empty.
    fn last_assigned_id(&self) -> impl Future<Output = Result<u64, StoreError>> + Send;
}
