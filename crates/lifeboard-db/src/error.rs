//! Error types for the storage layer.
//!
//! All backends report failures through [`StoreError`], which wraps the
//! underlying I/O, JSON, and [`sqlx`] errors.

/// Errors that can occur while reading or writing board states.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The file being accessed.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored record could not be turned back into a board state.
    #[error("corrupt record {id}: {reason}")]
    CorruptRecord {
        /// Raw identifier of the record.
        id: i64,
        /// What was wrong with it.
        reason: String,
    },

    /// An identifier does not fit the backend's key type.
    #[error("board id {0} exceeds the storage key range")]
    IdOutOfRange(u64),

    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
