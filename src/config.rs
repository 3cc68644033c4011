//! Service configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Path suffix under which the backend mounts its API.
pub const API_SUFFIX: &str = "/api";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required env var {var}")]
    Missing { var: String },

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Public backend endpoint, without trailing slash.
    pub backend_endpoint: String,
    pub port: u16,
    pub timeouts: BackendTimeouts,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `PUBLIC_BACKEND_ENDPOINT`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_REQUEST_TIMEOUT_SECS`: default 30
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is missing or blank, or `PORT` is not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend_endpoint = parse_endpoint(std::env::var("PUBLIC_BACKEND_ENDPOINT").ok().as_deref())?;
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let timeouts = BackendTimeouts {
            request_secs: env_parse_u64("BACKEND_REQUEST_TIMEOUT_SECS", DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("BACKEND_CONNECT_TIMEOUT_SECS", DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { backend_endpoint, port, timeouts })
    }

    /// Base URL handed to the backend client: endpoint plus `/api`.
    #[must_use]
    pub fn backend_base_url(&self) -> String {
        format!("{}{API_SUFFIX}", self.backend_endpoint)
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_endpoint(raw: Option<&str>) -> Result<String, ConfigError> {
    let endpoint = raw.map(str::trim).unwrap_or_default();
    if endpoint.is_empty() {
        return Err(ConfigError::Missing { var: "PUBLIC_BACKEND_ENDPOINT".into() });
    }
    Ok(endpoint.trim_end_matches('/').to_string())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Parse(format!("invalid PORT: {value}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
