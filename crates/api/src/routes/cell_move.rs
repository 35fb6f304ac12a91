//! Route definitions for cell move date/time plumbing.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::cell_move;
use crate::state::AppState;

/// Routes mounted at `/cell-moves`.
///
/// ```text
/// POST /occurrence        -> occurrence
/// GET  /search-window     -> search_window
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/occurrence", post(cell_move::occurrence))
        .route("/search-window", get(cell_move::search_window))
}
