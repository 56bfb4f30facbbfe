//! CLI error type.

use greenbasket_client::{ApiError, ConfigError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Message(String),
}

impl CliError {
    /// Wraps an API failure with a user-facing fallback, mirroring the
    /// `err.response?.data?.error || fallback` rendering of server errors.
    pub fn action(err: &ApiError, fallback: &str) -> Self {
        Self::Message(err.user_message(fallback).to_owned())
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        Self::Message(err.to_string())
    }
}
