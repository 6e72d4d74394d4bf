//! Upload identifier allocation.
//!
//! One [`IdAllocator`] exists per process. It remembers the last id it
//! handed out and advances by one per upload. The remembered value is
//! either seeded at startup from [`BoardStore::last_assigned_id`] or read
//! lazily from the store the first time an id is needed. Either way the
//! store is consulted at most once.
//!
//! The lock covers reading or initializing the counter, advancing it, and
//! stamping the board. Persisting the stamped board happens after the lock
//! is released.

use lifeboard_db::BoardStore;
use lifeboard_types::{Board, BoardId, BoardState};
use tokio::sync::Mutex;

use crate::error::SimulationError;

/// Hands out unique, gapless board identifiers.
#[derive(Debug, Default)]
pub struct IdAllocator {
    /// Last id handed out; `None` until initialized from storage.
    last: Mutex<Option<u64>>,
}

impl IdAllocator {
    /// An allocator that reads the starting point from storage on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// An allocator whose next id will be `last_assigned + 1`.
    pub fn seeded(last_assigned: u64) -> Self {
        Self {
            last: Mutex::new(Some(last_assigned)),
        }
    }

    /// The last id handed out, or `None` if the allocator was never used
    /// nor seeded.
    pub async fn last_assigned(&self) -> Option<u64> {
        *self.last.lock().await
    }

    /// Assign the next identifier to `board`.
    ///
    /// The returned state is not persisted.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Store`] if lazy initialization cannot read
    /// the store, or [`SimulationError::IdentifiersExhausted`] when the
    /// counter would overflow. Neither error advances the counter.
    pub async fn stamp<S: BoardStore>(
        &self,
        board: Board,
        store: &S,
    ) -> Result<BoardState, SimulationError> {
        let mut last = self.last.lock().await;

        let current = match *last {
            Some(value) => value,
            None => {
                let from_store = store.last_assigned_id().await?;
                tracing::debug!(last_assigned = from_store, "Id allocator initialized from storage");
                *last = Some(from_store);
                from_store
            }
        };

        let id = BoardId::new(current)
            .next()
            .ok_or(SimulationError::IdentifiersExhausted)?;
        *last = Some(id.into_inner());

        Ok(BoardState::new(id, board))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use lifeboard_db::{MemoryBoardStore, StoreError};

    use super::*;

    fn tiny() -> Board {
        Board::dead(1, 1).unwrap()
    }

    /// Wraps a memory store and counts `last_assigned_id` calls.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryBoardStore,
        lookups: AtomicUsize,
    }

    impl BoardStore for CountingStore {
        async fn save(&self, state: &BoardState) -> Result<(), StoreError> {
            self.inner.save(state).await
        }

        async fn load(&self, id: BoardId) -> Result<Option<BoardState>, StoreError> {
            self.inner.load(id).await
        }

        async fn load_all(&self) -> Result<Vec<BoardState>, StoreError> {
            self.inner.load_all().await
        }

        async fn last_assigned_id(&self) -> Result<u64, StoreError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.last_assigned_id().await
        }
    }

    #[tokio::test]
    async fn empty_store_starts_at_one() {
        let allocator = IdAllocator::new();
        let store = MemoryBoardStore::new();

        let first = allocator.stamp(tiny(), &store).await.unwrap();
        let second = allocator.stamp(tiny(), &store).await.unwrap();

        assert_eq!(first.id, BoardId::new(1));
        assert_eq!(second.id, BoardId::new(2));
        assert_eq!(allocator.last_assigned().await, Some(2));
    }

    #[tokio::test]
    async fn lazy_init_continues_from_stored_max() {
        let store = MemoryBoardStore::with_states([BoardState::new(BoardId::new(41), tiny())]);
        let allocator = IdAllocator::new();
        assert_eq!(allocator.last_assigned().await, None);

        let state = allocator.stamp(tiny(), &store).await.unwrap();
        assert_eq!(state.id, BoardId::new(42));
    }

    #[tokio::test]
    async fn storage_is_read_once() {
        let store = CountingStore::default();
        let allocator = IdAllocator::new();

        for _ in 0..5 {
            allocator.stamp(tiny(), &store).await.unwrap();
        }

        assert_eq!(store.lookups.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn seeded_allocator_never_reads_storage() {
        let store = CountingStore::default();
        let allocator = IdAllocator::seeded(10);

        let state = allocator.stamp(tiny(), &store).await.unwrap();

        assert_eq!(state.id, BoardId::new(11));
        assert_eq!(store.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn stamping_does_not_persist() {
        let store = MemoryBoardStore::new();
        let allocator = IdAllocator::new();
        allocator.stamp(tiny(), &store).await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn exhaustion_leaves_counter_unchanged() {
        let store = MemoryBoardStore::new();
        let allocator = IdAllocator::seeded(u64::MAX);

        let result = allocator.stamp(tiny(), &store).await;

        assert!(matches!(result, Err(SimulationError::IdentifiersExhausted)));
        assert_eq!(allocator.last_assigned().await, Some(u64::MAX));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_stamps_are_distinct_and_gapless() {
        let store = Arc::new(MemoryBoardStore::with_states([BoardState::new(
            BoardId::new(7),
            tiny(),
        )]));
        let allocator = Arc::new(IdAllocator::new());

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let store = Arc::clone(&store);
                let allocator = Arc::clone(&allocator);
                tokio::spawn(async move { allocator.stamp(tiny(), &*store).await.unwrap().id })
            })
            .collect();

        let mut ids = BTreeSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap().into_inner());
        }

        let expected: BTreeSet<u64> = (8..40).collect();
        assert_eq!(ids, expected);
    }
}
