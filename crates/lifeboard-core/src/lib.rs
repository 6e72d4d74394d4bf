//! Rule engine and simulation service for the Lifeboard Game of Life.
//!
//! Components, leaf first:
//!
//! - [`neighbors`] -- counts live cells around a coordinate, clipped at
//!   the board edges (no wraparound)
//! - [`calculator`] -- [`StateCalculator`] applies the classic rule to
//!   every cell and detects fixed points
//! - [`allocator`] -- [`IdAllocator`] hands out upload identifiers under a
//!   single lock
//! - [`service`] -- [`GameOfLifeService`] ties the calculator, the
//!   allocator, and a [`BoardStore`](lifeboard_db::BoardStore) together
//!   into the upload / next / N-away / final-state operations
//! - [`config`] -- YAML configuration for the whole service
//! - [`error`] -- [`SimulationError`]

pub mod allocator;
pub mod calculator;
pub mod config;
pub mod error;
pub mod neighbors;
pub mod service;

// Re-export primary types for convenience.
pub use allocator::IdAllocator;
pub use calculator::StateCalculator;
pub use config::{
    ConfigError, HttpConfig, LifeboardConfig, LoggingConfig, SimulationLimits, StorageConfig,
    StorageKind,
};
pub use error::{Coordinate, SimulationError};
pub use neighbors::count_alive_neighbors;
pub use service::GameOfLifeService;
