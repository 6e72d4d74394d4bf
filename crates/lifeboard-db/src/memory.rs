//! In-memory board store.
//!
//! Holds states in a [`BTreeMap`] behind a [`RwLock`]. Nothing survives a
//! restart; used by tests and by the `memory` storage backend.

use std::collections::BTreeMap;

use lifeboard_types::{BoardId, BoardState};
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store::BoardStore;

/// Process-local [`BoardStore`].
#[derive(Debug, Default)]
pub struct MemoryBoardStore {
    states: RwLock<BTreeMap<BoardId, BoardState>>,
}

impl MemoryBoardStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `states`.
    ///
    /// Later entries win when two share an identifier.
    pub fn with_states(states: impl IntoIterator<Item = BoardState>) -> Self {
        let map = states.into_iter().map(|state| (state.id, state)).collect();
        Self {
            states: RwLock::new(map),
        }
    }

    /// Number of stored states.
    pub async fn len(&self) -> usize {
        self.states.read().await.len()
    }

    /// Whether the store holds no states.
    pub async fn is_empty(&self) -> bool {
        self.states.read().await.is_empty()
    }
}

impl BoardStore for MemoryBoardStore {
    async fn save(&self, state: &BoardState) -> Result<(), StoreError> {
        self.states.write().await.insert(state.id, state.clone());
        Ok(())
    }

    async fn load(&self, id: BoardId) -> Result<Option<BoardState>, StoreError> {
        Ok(self.states.read().await.get(&id).cloned())
    }

    async fn load_all(&self) -> Result<Vec<BoardState>, StoreError> {
        Ok(self.states.read().await.values().cloned().collect())
    }

    async fn last_assigned_id(&self) -> Result<u64, StoreError> {
        Ok(self
            .states
            .read()
            .await
            .keys()
            .next_back()
            .map_or(0, |id| id.into_inner()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lifeboard_types::Board;

    use super::*;

    fn state(id: u64, rows: Vec<Vec<u8>>) -> BoardState {
        BoardState::new(BoardId::new(id), Board::new(rows).unwrap())
    }

    #[tokio::test]
    async fn save_then_load() {
        let store = MemoryBoardStore::new();
        let glider = state(1, vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 1, 1]]);
        store.save(&glider).await.unwrap();

        assert_eq!(store.load(BoardId::new(1)).await.unwrap(), Some(glider));
    }

    #[tokio::test]
    async fn load_missing_is_none() {
        let store = MemoryBoardStore::new();
        assert_eq!(store.load(BoardId::new(99)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_overwrites_same_id() {
        let store = MemoryBoardStore::new();
        store.save(&state(1, vec![vec![0, 1]])).await.unwrap();
        let updated = state(1, vec![vec![1, 1]]);
        store.save(&updated).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.load(BoardId::new(1)).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn load_all_returns_every_state() {
        let store = MemoryBoardStore::new();
        let a = state(1, vec![vec![0, 1]]);
        let b = state(2, vec![vec![1, 0]]);
        store.save(&a).await.unwrap();
        store.save(&b).await.unwrap();

        let all = store.load_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&a));
        assert!(all.contains(&b));
    }

    #[tokio::test]
    async fn last_assigned_id_is_max_or_zero() {
        let store = MemoryBoardStore::new();
        assert_eq!(store.last_assigned_id().await.unwrap(), 0);

        let store = MemoryBoardStore::with_states([
            state(1, vec![vec![0]]),
            state(5, vec![vec![1]]),
            state(2, vec![vec![0]]),
        ]);
        assert_eq!(store.last_assigned_id().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn loaded_copy_is_independent() {
        let store = MemoryBoardStore::with_states([state(1, vec![vec![1, 1]])]);
        let mut copy = store.load(BoardId::new(1)).await.unwrap().unwrap();
        copy.board = Board::dead(1, 2).unwrap();

        let stored = store.load(BoardId::new(1)).await.unwrap().unwrap();
        assert_eq!(stored.board.population(), 2);
    }
}
