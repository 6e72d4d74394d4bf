//! Error types for the board API.
//!
//! [`ApiError`] unifies every failure a request can hit into a single
//! enum that converts into an Axum response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! error response carries the same JSON body, [`ErrorBody`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lifeboard_types::{BoardError, BoardId};
use serde::{Deserialize, Serialize};

/// Message for an upload whose board is absent or `null`.
pub const MISSING_BOARD_MESSAGE: &str = "Board state can't be null.";

/// Message for an upload whose board is empty or not rectangular.
pub const INVALID_BOARD_MESSAGE: &str =
    "Board state is invalid. All rows should have the same number of columns.";

/// Message for an id with no stored board.
pub const NOT_FOUND_MESSAGE: &str = "Board state was not found.";

/// Message for any unexpected failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error has occurred.";

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// The HTTP status code, repeated in the body.
    pub status_code: u16,
    /// Human-readable summary.
    pub message: String,
    /// Extra context, when there is any worth sharing.
    pub detail: Option<String>,
}

/// Errors that can occur in the board API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The upload carried no board.
    #[error("board state is null")]
    MissingBoard,

    /// The uploaded grid failed validation.
    #[error("invalid board: {0}")]
    InvalidBoard(#[from] BoardError),

    /// No board is stored under the requested id.
    #[error("board {0} not found")]
    NotFound(BoardId),

    /// The board kept changing for the whole attempt budget.
    #[error("{0}")]
    NotStabilized(String),

    /// A numeric path parameter exceeded its configured upper bound.
    #[error("{parameter} must be at most {limit}, got {value}")]
    LimitExceeded {
        /// Name of the path parameter.
        parameter: &'static str,
        /// The requested value.
        value: u32,
        /// The configured maximum.
        limit: u32,
    },

    /// The request path or body could not be parsed.
    #[error("malformed request: {detail}")]
    Malformed {
        /// Status chosen by the extractor that rejected the request.
        status: StatusCode,
        /// The extractor's explanation.
        detail: String,
    },

    /// Something failed that the client cannot fix.
    #[error("internal error")]
    Internal {
        /// The underlying error text, present only when the server is
        /// configured to expose it.
        detail: Option<String>,
    },
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingBoard
            | Self::InvalidBoard(_)
            | Self::NotStabilized(_)
            | Self::LimitExceeded { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Malformed { status, .. } => *status,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The response body for this error.
    pub fn body(&self) -> ErrorBody {
        let (message, detail) = match self {
            Self::MissingBoard => (MISSING_BOARD_MESSAGE.to_owned(), None),
            Self::InvalidBoard(BoardError::InvalidCell { row, col, value }) => (
                format!("Board state is invalid. Cell ({row}, {col}) is {value}; cells must be 0 or 1."),
                None,
            ),
            Self::InvalidBoard(e) => (INVALID_BOARD_MESSAGE.to_owned(), Some(e.to_string())),
            Self::NotFound(_) => (NOT_FOUND_MESSAGE.to_owned(), None),
            Self::NotStabilized(message) => (message.clone(), None),
            Self::LimitExceeded { .. } => (self.to_string(), None),
            Self::Malformed { detail, .. } => {
                ("Request is malformed.".to_owned(), Some(detail.clone()))
            }
            Self::Internal { detail } => (INTERNAL_ERROR_MESSAGE.to_owned(), detail.clone()),
        };

        ErrorBody {
            status_code: self.status().as_u16(),
            message,
            detail,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), axum::Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_board_is_bad_request() {
        let err = ApiError::MissingBoard;
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.body(),
            ErrorBody {
                status_code: 400,
                message: MISSING_BOARD_MESSAGE.to_owned(),
                detail: None,
            }
        );
    }

    #[test]
    fn ragged_board_uses_shape_message() {
        let err = ApiError::from(BoardError::Ragged {
            row: 1,
            expected: 3,
            found: 2,
        });
        let body = err.body();
        assert_eq!(body.status_code, 400);
        assert_eq!(body.message, INVALID_BOARD_MESSAGE);
        assert_eq!(body.detail.as_deref(), Some("row 1 has 2 columns, expected 3"));
    }

    #[test]
    fn non_binary_cell_names_the_cell() {
        let err = ApiError::from(BoardError::InvalidCell {
            row: 0,
            col: 2,
            value: 7,
        });
        assert_eq!(
            err.body().message,
            "Board state is invalid. Cell (0, 2) is 7; cells must be 0 or 1."
        );
    }

    #[test]
    fn not_found_is_404() {
        let body = ApiError::NotFound(BoardId::new(3)).body();
        assert_eq!(body.status_code, 404);
        assert_eq!(body.message, NOT_FOUND_MESSAGE);
    }

    #[test]
    fn limit_exceeded_explains_bound() {
        let err = ApiError::LimitExceeded {
            parameter: "steps",
            value: 20,
            limit: 10,
        };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().message, "steps must be at most 10, got 20");
    }

    #[test]
    fn malformed_keeps_extractor_status() {
        let err = ApiError::Malformed {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            detail: "Expected request with `Content-Type: application/json`".to_owned(),
        };
        assert_eq!(err.body().status_code, 415);
    }

    #[test]
    fn internal_hides_detail_unless_given() {
        let hidden = ApiError::Internal { detail: None }.body();
        assert_eq!(hidden.status_code, 500);
        assert_eq!(hidden.message, INTERNAL_ERROR_MESSAGE);
        assert_eq!(hidden.detail, None);

        let shown = ApiError::Internal {
            detail: Some("disk full".to_owned()),
        }
        .body();
        assert_eq!(shown.detail.as_deref(), Some("disk full"));
    }
}
