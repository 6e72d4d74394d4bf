//! Error types for the server binary.
//!
//! [`DaemonError`] is the top-level error type that wraps every failure
//! mode during startup and serving.

/// Top-level error for the server binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum DaemonError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: lifeboard_core::ConfigError,
    },

    /// Opening or reading the board store failed.
    #[error("storage error: {source}")]
    Store {
        /// The underlying storage error.
        #[from]
        source: lifeboard_db::StoreError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: lifeboard_api::ServerError,
    },
}
