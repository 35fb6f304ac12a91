//! Typed accessors for the per-browser session.
//!
//! The service stores exactly one key: the `returnToService` marker, an
//! opaque tag naming the external application a user arrived from. Handlers
//! and middleware go through these accessors so the key never appears as a
//! bare literal elsewhere.

use tower_sessions::Session;

/// Session key holding the originating-service marker.
pub const RETURN_TO_SERVICE_KEY: &str = "returnToService";

/// Read the stored originating-service marker, if any.
///
/// A failed session read is treated as "not set": the caller falls back to
/// the default return link, which is the same outcome a brand-new session
/// gets.
pub async fn return_to_service(session: &Session) -> Option<String> {
    match session.get::<String>(RETURN_TO_SERVICE_KEY).await {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "Failed to read returnToService from session");
            None
        }
    }
}

/// Store the originating-service marker verbatim.
///
/// A failed write is logged and swallowed; persisting the marker must never
/// fail the request it rode in on.
pub async fn set_return_to_service(session: &Session, marker: &str) {
    if let Err(err) = session.insert(RETURN_TO_SERVICE_KEY, marker).await {
        tracing::warn!(error = %err, "Failed to persist returnToService marker");
    }
}
