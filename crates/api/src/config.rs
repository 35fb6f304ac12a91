use std::collections::HashMap;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Originating service tag -> return URL, parsed from `RETURN_SERVICES`.
    ///
    /// The tag set is open: tags arrive as opaque strings on the
    /// `returnToService` query parameter and are only meaningful if a
    /// deployment maps them here. Unknown tags fall back to
    /// [`Self::default_service_url`].
    pub return_services: HashMap<String, String>,
    /// Fallback "return" link when the session carries no known tag.
    pub default_service_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                            |
    /// |------------------------|----------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                          |
    /// | `PORT`                 | `3000`                                             |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                            |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                               |
    /// | `RETURN_SERVICES`      | `prisonerProfile=http://localhost:3001/prisoner`   |
    /// | `DEFAULT_SERVICE_URL`  | `http://localhost:3001/`                           |
    ///
    /// `RETURN_SERVICES` is a comma-separated list of `tag=url` pairs.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let return_services = parse_return_services(
            &std::env::var("RETURN_SERVICES")
                .unwrap_or_else(|_| "prisonerProfile=http://localhost:3001/prisoner".into()),
        );

        let default_service_url = std::env::var("DEFAULT_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:3001/".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            return_services,
            default_service_url,
        }
    }
}

/// Parse a comma-separated list of `tag=url` pairs.
///
/// Entries without an `=` are skipped with a warning rather than failing
/// startup; a missing mapping only means the fallback URL is used.
fn parse_return_services(raw: &str) -> HashMap<String, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match entry.split_once('=') {
            Some((tag, url)) if !tag.is_empty() && !url.is_empty() => {
                Some((tag.trim().to_string(), url.trim().to_string()))
            }
            _ => {
                tracing::warn!(entry, "Skipping malformed RETURN_SERVICES entry");
                None
            }
        })
        .collect()
}
