//! Runtime-selected storage backend.
//!
//! The server picks a backend from configuration at startup. Wrapping the
//! three stores in one enum keeps the simulation service and the HTTP
//! layer generic over a single concrete type.

use lifeboard_types::{BoardId, BoardState};

use crate::error::StoreError;
use crate::file::FileBoardStore;
use crate::memory::MemoryBoardStore;
use crate::postgres::PgBoardStore;
use crate::store::BoardStore;

/// Any of the available [`BoardStore`] implementations.
#[derive(Debug)]
pub enum StoreBackend {
    /// Process-local map.
    Memory(MemoryBoardStore),
    /// Single JSON document on disk.
    File(FileBoardStore),
    /// `PostgreSQL` table.
    Postgres(PgBoardStore),
}

impl StoreBackend {
    /// Short name of the active backend, for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::File(_) => "file",
            Self::Postgres(_) => "postgres",
        }
    }
}

impl From<MemoryBoardStore> for StoreBackend {
    fn from(store: MemoryBoardStore) -> Self {
        Self::Memory(store)
    }
}

impl From<FileBoardStore> for StoreBackend {
    fn from(store: FileBoardStore) -> Self {
        Self::File(store)
    }
}

impl From<PgBoardStore> for StoreBackend {
    fn from(store: PgBoardStore) -> Self {
        Self::Postgres(store)
    }
}

impl BoardStore for StoreBackend {
    async fn save(&self, state: &BoardState) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.save(state).await,
            Self::File(store) => store.save(state).await,
            Self::Postgres(store) => store.save(state).await,
        }
    }

    async fn load(&self, id: BoardId) -> Result<Option<BoardState>, StoreError> {
        match self {
            Self::Memory(store) => store.load(id).await,
            Self::File(store) => store.load(id).await,
            Self::Postgres(store) => store.load(id).await,
        }
    }

    async fn load_all(&self) -> Result<Vec<BoardState>, StoreError> {
        match self {
            Self::Memory(store) => store.load_all().await,
            Self::File(store) => store.load_all().await,
            Self::Postgres(store) => store.load_all().await,
        }
    }

    async fn last_assigned_id(&self) -> Result<u64, StoreError> {
        match self {
            Self::Memory(store) => store.last_assigned_id().await,
            Self::File(store) => store.last_assigned_id().await,
            Self::Postgres(store) => store.last_assigned_id().await,
        }
    }
}
