//! Authentication endpoints.
//!
//! These return the payload and nothing more: pushing the user and token
//! into the session store is the view's decision, not the transport's.

use tracing::instrument;

use greenbasket_core::{AuthResponse, LoginRequest, RegisterRequest, User};

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Create an account. `POST /auth/register`
    ///
    /// # Errors
    ///
    /// Returns an error if the email is taken or the request fails.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/register", request).await
    }

    /// Authenticate with email and password. `POST /auth/login`
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the request
    /// fails.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/login", request).await
    }

    /// Fetch the authenticated user's profile. `GET /users/me`
    ///
    /// # Errors
    ///
    /// Returns an error if the session is invalid or the request fails.
    #[instrument(skip(self))]
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get("/users/me").await
    }
}
