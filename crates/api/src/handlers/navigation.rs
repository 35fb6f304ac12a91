//! Handlers for cross-application navigation.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tower_sessions::Session;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::session;
use crate::state::AppState;

/// Where the "return" link on a finished workflow should point.
#[derive(Debug, Serialize)]
pub struct ReturnLink {
    /// The stored originating-service tag, if any.
    pub service: Option<String>,
    /// Resolved link target.
    pub url: String,
}

/// GET /api/v1/navigation/return-link
///
/// Resolve the session's `returnToService` marker against the configured
/// registry. Unknown or absent markers resolve to the default service URL;
/// this endpoint never fails.
pub async fn return_link(
    session: Session,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ReturnLink>>> {
    let service = session::return_to_service(&session).await;

    let url = service
        .as_deref()
        .and_then(|tag| state.config.return_services.get(tag))
        .cloned()
        .unwrap_or_else(|| state.config.default_service_url.clone());

    Ok(Json(DataResponse {
        data: ReturnLink { service, url },
    }))
}
