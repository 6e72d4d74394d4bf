//! Axum router construction for the board API.
//!
//! Assembles all routes into a single [`Router`] with CORS and request
//! tracing enabled.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use lifeboard_db::BoardStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Prefix shared by every board route.
pub const API_PREFIX: &str = "/api/game-of-life";

/// Build the complete Axum router for the board API.
///
/// The router includes, under [`API_PREFIX`]:
/// - `POST /upload-board-state` -- store a new board
/// - `GET /next-state/{id}` -- one generation ahead
/// - `GET /states-away/{id}/{steps}` -- `steps` generations ahead
/// - `GET /final-state/{id}/{max_attempts}` -- first fixed point
/// - `GET /boards` -- list stored boards
/// - `GET /boards/{id}` -- single stored board
///
/// CORS allows any origin so browser clients on other hosts can call
/// the API directly.
pub fn build_router<S: BoardStore + 'static>(state: Arc<AppState<S>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route(
            "/upload-board-state",
            post(handlers::upload_board_state::<S>),
        )
        .route("/next-state/{id}", get(handlers::next_state::<S>))
        .route("/states-away/{id}/{steps}", get(handlers::states_away::<S>))
        .route(
            "/final-state/{id}/{max_attempts}",
            get(handlers::final_state::<S>),
        )
        .route("/boards", get(handlers::list_boards::<S>))
        .route("/boards/{id}", get(handlers::get_board::<S>));

    Router::new()
        .nest(API_PREFIX, api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
