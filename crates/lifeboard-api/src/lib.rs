//! HTTP API for the Lifeboard Game of Life service.
//!
//! This crate exposes the simulation service over Axum:
//!
//! - [`router`] -- route table under `/api/game-of-life`, with CORS and
//!   request tracing
//! - [`handlers`] -- one handler per operation, generic over the
//!   [`BoardStore`](lifeboard_db::BoardStore) in use
//! - [`error`] -- [`ApiError`] and the uniform JSON error body
//! - [`state`] -- [`AppState`], shared by every request
//! - [`server`] -- bind, serve, and shut down on `Ctrl-C`
//!
//! Handlers never see a raw grid: uploads are validated into a
//! [`Board`](lifeboard_types::Board) before the service is called.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::{ApiError, ErrorBody};
pub use router::{API_PREFIX, build_router};
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
