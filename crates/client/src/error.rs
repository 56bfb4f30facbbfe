//! Uniform failure value for all API calls.
//!
//! Every call through [`crate::ApiClient`] returns either a payload or an
//! [`ApiError`] carrying the server-supplied message and status. Callers
//! are responsible for presenting the message; no failure is retried.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the API client, grouped by origin.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or transport failure - no response was obtained.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failure (401). By the time this value is returned
    /// the session has already been torn down and the session-expired
    /// hook has fired.
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Non-2xx response other than 401, carrying the server's message.
    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    /// A 2xx response whose body failed to deserialize.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// True for the authentication-failure variant.
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// The message to present to the user, or the given fallback when the
    /// failure carries no server-supplied text.
    #[must_use]
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            Self::Unauthorized { message } | Self::Api { message, .. } if !message.is_empty() => {
                message
            }
            _ => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Api {
            status: StatusCode::BAD_REQUEST,
            message: "Invalid product ID".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (400 Bad Request): Invalid product ID"
        );
    }

    #[test]
    fn test_is_auth() {
        let err = ApiError::Unauthorized {
            message: "Invalid or expired token".to_string(),
        };
        assert!(err.is_auth());

        let err = ApiError::Api {
            status: StatusCode::NOT_FOUND,
            message: "Not found".to_string(),
        };
        assert!(!err.is_auth());
    }

    #[test]
    fn test_user_message_fallback() {
        let err = ApiError::Api {
            status: StatusCode::BAD_REQUEST,
            message: String::new(),
        };
        assert_eq!(err.user_message("Failed to add to cart"), "Failed to add to cart");

        let err = ApiError::Api {
            status: StatusCode::BAD_REQUEST,
            message: "Insufficient stock".to_string(),
        };
        assert_eq!(err.user_message("Failed to add to cart"), "Insufficient stock");
    }
}
