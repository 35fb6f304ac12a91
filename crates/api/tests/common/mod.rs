use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use cellmove_api::config::ServerConfig;
use cellmove_api::router::build_app_router;
use cellmove_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and a known return-link
/// registry (`prisonerProfile` -> `http://localhost:3001/prisoner`).
pub fn test_config() -> ServerConfig {
    let mut return_services = HashMap::new();
    return_services.insert(
        "prisonerProfile".to_string(),
        "http://localhost:3001/prisoner".to_string(),
    );

    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        return_services,
        default_service_url: "http://localhost:3001/".to_string(),
    }
}

/// Build the full application router with all middleware layers.
///
/// This goes through [`build_app_router`] so tests exercise the same stack
/// (session manager, return-to-service gate, request ID, timeout, CORS,
/// panic recovery) that production uses. Each call creates a fresh session
/// store; clone the returned router to make several requests against the
/// same store.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request build failed"),
    )
    .await
    .expect("request failed")
}

/// Send a GET request carrying a previously captured session cookie.
pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(COOKIE, cookie)
            .body(Body::empty())
            .expect("request build failed"),
    )
    .await
    .expect("request failed")
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request build failed"),
    )
    .await
    .expect("request failed")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is not valid JSON")
}

/// Extract the session cookie (`name=value`) from a response, if one was set.
pub fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or(v).to_string())
}
