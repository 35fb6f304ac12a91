//! Route definitions for cross-application navigation.

use axum::routing::get;
use axum::Router;

use crate::handlers::navigation;
use crate::state::AppState;

/// Routes mounted at `/navigation`.
///
/// ```text
/// GET /return-link        -> return_link
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/return-link", get(navigation::return_link))
}
