//! Shared application state for the board API.
//!
//! [`AppState`] wraps the simulation service together with the request
//! limits and error-reporting policy the handlers need. It is shared
//! across requests behind an [`Arc`](std::sync::Arc).

use lifeboard_core::{GameOfLifeService, SimulationError, SimulationLimits};
use lifeboard_db::BoardStore;
use tracing::error;

use crate::error::ApiError;

/// Shared state for all request handlers.
#[derive(Debug)]
pub struct AppState<S> {
    /// The simulation service over the configured store.
    pub service: GameOfLifeService<S>,
    /// Upper bounds on `steps` and `max_attempts`.
    pub limits: SimulationLimits,
    /// Whether 500 responses carry the underlying error text.
    pub expose_error_detail: bool,
}

impl<S: BoardStore> AppState<S> {
    /// Create state with default limits and error detail hidden.
    pub fn new(service: GameOfLifeService<S>) -> Self {
        Self {
            service,
            limits: SimulationLimits::default(),
            expose_error_detail: false,
        }
    }

    /// Replace the request limits.
    #[must_use]
    pub fn with_limits(mut self, limits: SimulationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Choose whether 500 responses include the underlying error text.
    #[must_use]
    pub fn with_error_detail(mut self, expose: bool) -> Self {
        self.expose_error_detail = expose;
        self
    }

    /// Translate a service failure into a client-facing error.
    ///
    /// [`SimulationError::NotStabilized`] is the only failure the client
    /// caused; everything else is logged here and reported as a 500.
    pub fn reject(&self, err: SimulationError) -> ApiError {
        match err {
            SimulationError::NotStabilized { .. } => ApiError::NotStabilized(err.to_string()),
            other => {
                error!(error = %other, "Board request failed");
                ApiError::Internal {
                    detail: self.expose_error_detail.then(|| other.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lifeboard_core::IdAllocator;
    use lifeboard_db::{MemoryBoardStore, StoreError};
    use lifeboard_types::BoardId;

    use super::*;

    fn state() -> AppState<MemoryBoardStore> {
        AppState::new(GameOfLifeService::new(
            MemoryBoardStore::new(),
            Arc::new(IdAllocator::new()),
        ))
    }

    #[test]
    fn not_stabilized_keeps_message() {
        let err = state().reject(SimulationError::NotStabilized {
            id: BoardId::new(4),
            max_attempts: 3,
        });
        assert!(matches!(
            err,
            ApiError::NotStabilized(ref message)
                if message == "board 4 didn't reach a stable state within 3 attempts"
        ));
    }

    #[test]
    fn other_failures_hide_detail_by_default() {
        let err = state().reject(SimulationError::Store(StoreError::Config("boom".to_owned())));
        assert!(matches!(err, ApiError::Internal { detail: None }));
    }

    #[test]
    fn detail_is_exposed_when_enabled() {
        let err = state()
            .with_error_detail(true)
            .reject(SimulationError::IdentifiersExhausted);
        assert!(matches!(
            err,
            ApiError::Internal { detail: Some(ref d) } if d == "board identifier space exhausted"
        ));
    }
}
