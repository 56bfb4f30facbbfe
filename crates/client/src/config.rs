//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `GREENBASKET_API_URL` - Base URL of the grocery API
//!   (default: `http://localhost:8080/api/v1`)
//! - `GREENBASKET_SESSION_FILE` - Path of the persisted session file
//!   (default: `$XDG_CONFIG_HOME/greenbasket/session.json`, falling back
//!   to `$HOME/.config/greenbasket/session.json`)
//! - `GREENBASKET_TIMEOUT_SECS` - Per-request timeout in seconds
//!   (default: transport default, no explicit timeout)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client application configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the grocery API, without a trailing slash.
    pub api_url: String,
    /// Path of the persisted session file.
    pub session_file: PathBuf,
    /// Per-request timeout, when configured.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid (the API
    /// URL fails to parse, or the timeout is not an integer).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = validate_api_url(&get_env_or_default(
            "GREENBASKET_API_URL",
            DEFAULT_API_URL,
        ))?;
        let session_file = std::env::var("GREENBASKET_SESSION_FILE")
            .map_or_else(|_| default_session_path(), PathBuf::from);
        let timeout = parse_timeout(std::env::var("GREENBASKET_TIMEOUT_SECS").ok())?;

        Ok(Self {
            api_url,
            session_file,
            timeout,
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            session_file: default_session_path(),
            timeout: None,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate and normalize the API base URL (no trailing slash).
fn validate_api_url(raw: &str) -> Result<String, ConfigError> {
    Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("GREENBASKET_API_URL".to_string(), e.to_string()))?;
    Ok(raw.trim_end_matches('/').to_string())
}

/// Parse the optional request timeout.
fn parse_timeout(raw: Option<String>) -> Result<Option<Duration>, ConfigError> {
    raw.map(|s| {
        s.parse::<u64>().map(Duration::from_secs).map_err(|e| {
            ConfigError::InvalidEnvVar("GREENBASKET_TIMEOUT_SECS".to_string(), e.to_string())
        })
    })
    .transpose()
}

/// Default location of the persisted session file.
///
/// Follows the XDG convention, with a working-directory fallback when no
/// home directory can be determined.
fn default_session_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| {
            std::env::var("HOME").map_or_else(
                |_| PathBuf::from(".greenbasket"),
                |home| PathBuf::from(home).join(".config"),
            )
        },
        PathBuf::from,
    );
    base.join("greenbasket").join("session.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_api_url_strips_trailing_slash() {
        let url = validate_api_url("http://localhost:8080/api/v1/").expect("valid url");
        assert_eq!(url, "http://localhost:8080/api/v1");
    }

    #[test]
    fn test_validate_api_url_rejects_garbage() {
        assert!(validate_api_url("not a url").is_err());
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(
            parse_timeout(Some("30".to_string())).expect("valid"),
            Some(Duration::from_secs(30))
        );
        assert_eq!(parse_timeout(None).expect("valid"), None);
        assert!(parse_timeout(Some("soon".to_string())).is_err());
    }

    #[test]
    fn test_default_session_path_ends_with_namespace() {
        let path = default_session_path();
        assert!(path.ends_with("greenbasket/session.json"));
    }
}
