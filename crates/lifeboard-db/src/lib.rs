//! Storage layer for the Lifeboard Game of Life service.
//!
//! The simulation service only ever talks to a [`BoardStore`]: save a
//! state, load one by id, load them all, and report the highest id
//! stored. Three backends implement it:
//!
//! ```text
//! BoardStore
//!     |
//!     +-- MemoryBoardStore  (process-local map, tests and ephemeral runs)
//!     +-- FileBoardStore    (single JSON document, rewritten on each save)
//!     +-- PgBoardStore      (PostgreSQL `board_states` table)
//! ```
//!
//! [`StoreBackend`] wraps whichever one the configuration selects so the
//! rest of the workspace stays monomorphic.
//!
//! # Modules
//!
//! - [`store`] -- The [`BoardStore`] trait
//! - [`memory`] -- In-memory backend
//! - [`file`] -- JSON file backend
//! - [`postgres`] -- `PostgreSQL` connection pool and backend
//! - [`backend`] -- Runtime-selected backend enum
//! - [`error`] -- Shared error types

pub mod backend;
pub mod error;
pub mod file;
pub mod memory;
pub mod postgres;
pub mod store;

// Re-export primary types for convenience.
pub use backend::StoreBackend;
pub use error::StoreError;
pub use file::FileBoardStore;
pub use memory::MemoryBoardStore;
pub use postgres::{BoardStateRow, PgBoardStore, PostgresConfig};
pub use store::BoardStore;
