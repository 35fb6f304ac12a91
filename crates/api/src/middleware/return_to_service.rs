//! Middleware that makes the `returnToService` navigation marker durable.
//!
//! Screens in this service are reached from several external applications.
//! The first request of such a visit carries a `returnToService` query
//! parameter naming the origin; this gate copies it into the session so the
//! "return" link still points at the right place many pages later, after
//! the parameter is long gone from the URL.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, Request};
use axum::middleware::Next;
use axum::response::Response;
use serde::Deserialize;
use tower_sessions::Session;

use crate::session;

/// Query parameters the gate watches for.
#[derive(Debug, Deserialize)]
pub struct ReturnToServiceParams {
    #[serde(rename = "returnToService")]
    return_to_service: Option<String>,
}

/// Persist a non-empty `returnToService` query parameter into the session.
///
/// Always forwards to the inner service. The stored value is sticky: an
/// absent or empty parameter leaves any previously stored marker untouched,
/// and nothing in this gate ever clears it. Session expiry is the only way
/// back to the unset state.
pub async fn return_to_service_gate(
    session: Session,
    query: Result<Query<ReturnToServiceParams>, QueryRejection>,
    request: Request,
    next: Next,
) -> Response {
    // A query string we cannot deserialize is treated the same as an absent
    // parameter; this gate never rejects a request.
    if let Ok(Query(params)) = query {
        if let Some(marker) = params.return_to_service.filter(|m| !m.is_empty()) {
            tracing::debug!(marker = %marker, "Storing returnToService marker");
            session::set_return_to_service(&session, &marker).await;
        }
    }

    next.run(request).await
}
