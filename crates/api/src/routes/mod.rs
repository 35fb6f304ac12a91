pub mod cell_move;
pub mod health;
pub mod navigation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /cell-moves/occurrence        validate + assemble occurrence timestamp (POST)
/// /cell-moves/search-window     day boundaries for history searches (GET)
///
/// /navigation/return-link       resolve the "back to service" link (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cell-moves", cell_move::router())
        .nest("/navigation", navigation::router())
}
