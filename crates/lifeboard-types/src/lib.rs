//! Shared type definitions for the Lifeboard Game of Life service.
//!
//! Every crate in the workspace exchanges boards through the types
//! defined here. [`BoardState`] flows downstream to `TypeScript` via
//! `ts-rs` so API clients share the wire shape.
//!
//! # Modules
//!
//! - [`ids`] -- Integer board identifier wrapper
//! - [`board`] -- The validated rectangular [`Board`] grid
//! - [`state`] -- [`BoardState`], a board stamped with its identifier

pub mod board;
pub mod ids;
pub mod state;

// Re-export all public types at crate root for convenience.
pub use board::{ALIVE, Board, BoardError, Cell, DEAD};
pub use ids::BoardId;
pub use state::BoardState;
