//! REST endpoint handlers for the board API.
//!
//! # Endpoints
//!
//! All paths are relative to `/api/game-of-life`.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/upload-board-state` | Store a new board, returns its id |
//! | `GET` | `/next-state/{id}` | Advance one generation |
//! | `GET` | `/states-away/{id}/{steps}` | Advance `steps` generations |
//! | `GET` | `/final-state/{id}/{max_attempts}` | Advance until stable |
//! | `GET` | `/boards` | List stored boards |
//! | `GET` | `/boards/{id}` | Fetch a stored board |
//!
//! Extractor rejections are taken as `Result` so malformed paths and
//! bodies come back in the same [`ErrorBody`](crate::error::ErrorBody)
//! shape as every other failure.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use lifeboard_db::BoardStore;
use lifeboard_types::{Board, BoardId, BoardState, Cell};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `POST /upload-board-state`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadBoardRequest {
    /// The initial grid, row by row.
    #[serde(default)]
    pub board: Option<Vec<Vec<Cell>>>,
}

/// Body of `GET /boards`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardList {
    /// Number of stored boards.
    pub count: usize,
    /// The boards, ordered by id.
    pub boards: Vec<BoardState>,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Malformed {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Malformed {
            status: axum::http::StatusCode::BAD_REQUEST,
            detail: rejection.body_text(),
        }
    }
}

// ---------------------------------------------------------------------------
// POST /upload-board-state
// ---------------------------------------------------------------------------

/// Validate and store a new board, returning its identifier.
pub async fn upload_board_state<S: BoardStore>(
    State(state): State<Arc<AppState<S>>>,
    body: Result<Json<Option<UploadBoardRequest>>, JsonRejection>,
) -> Result<Json<BoardId>, ApiError> {
    let Json(request) = body?;
    let rows = request
        .and_then(|request| request.board)
        .ok_or(ApiError::MissingBoard)?;
    let board = Board::new(rows)?;

    let id = state
        .service
        .upload_board(board)
        .await
        .map_err(|e| state.reject(e))?;

    info!(board_id = %id, "Board state uploaded");
    Ok(Json(id))
}

// ---------------------------------------------------------------------------
// GET /next-state/{id}
// ---------------------------------------------------------------------------

/// Advance the stored board one generation.
pub async fn next_state<S: BoardStore>(
    State(state): State<Arc<AppState<S>>>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<BoardState>, ApiError> {
    let Path(raw) = path?;
    let id = BoardId::new(raw);

    state
        .service
        .next_state(id)
        .await
        .map_err(|e| state.reject(e))?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

// ---------------------------------------------------------------------------
// GET /states-away/{id}/{steps}
// ---------------------------------------------------------------------------

/// Advance the stored board exactly `steps` generations.
pub async fn states_away<S: BoardStore>(
    State(state): State<Arc<AppState<S>>>,
    path: Result<Path<(u64, u32)>, PathRejection>,
) -> Result<Json<BoardState>, ApiError> {
    let Path((raw, steps)) = path?;
    let id = BoardId::new(raw);

    let limit = state.limits.max_steps;
    if steps > limit {
        return Err(ApiError::LimitExceeded {
            parameter: "steps",
            value: steps,
            limit,
        });
    }

    state
        .service
        .states_away(id, steps)
        .await
        .map_err(|e| state.reject(e))?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

// ---------------------------------------------------------------------------
// GET /final-state/{id}/{max_attempts}
// ---------------------------------------------------------------------------

/// Advance the stored board until it reaches a fixed point.
pub async fn final_state<S: BoardStore>(
    State(state): State<Arc<AppState<S>>>,
    path: Result<Path<(u64, u32)>, PathRejection>,
) -> Result<Json<BoardState>, ApiError> {
    let Path((raw, max_attempts)) = path?;
    let id = BoardId::new(raw);

    let limit = state.limits.max_attempts;
    if max_attempts > limit {
        return Err(ApiError::LimitExceeded {
            parameter: "max_attempts",
            value: max_attempts,
            limit,
        });
    }

    state
        .service
        .final_state(id, max_attempts)
        .await
        .map_err(|e| state.reject(e))?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

// ---------------------------------------------------------------------------
// GET /boards
// ---------------------------------------------------------------------------

/// List every stored board.
pub async fn list_boards<S: BoardStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<BoardList>, ApiError> {
    let boards = state.service.boards().await.map_err(|e| state.reject(e))?;
    Ok(Json(BoardList {
        count: boards.len(),
        boards,
    }))
}

// ---------------------------------------------------------------------------
// GET /boards/{id}
// ---------------------------------------------------------------------------

/// Fetch a stored board without simulating it.
pub async fn get_board<S: BoardStore>(
    State(state): State<Arc<AppState<S>>>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<BoardState>, ApiError> {
    let Path(raw) = path?;
    let id = BoardId::new(raw);

    state
        .service
        .board(id)
        .await
        .map_err(|e| state.reject(e))?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}
