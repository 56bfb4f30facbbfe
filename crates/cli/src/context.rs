//! Shared application context.
//!
//! Wires configuration, the persisted session, the cart store, and the API
//! client together. Every command receives an [`AppContext`] and pulls the
//! pieces it needs from it.

use std::sync::Arc;

use greenbasket_client::{ApiClient, CartStore, ClientConfig, FileStorage, SessionStore};

use crate::error::CliError;

pub struct AppContext {
    pub api: ApiClient,
    pub session: SessionStore,
    pub cart: CartStore,
}

impl AppContext {
    /// Builds the context from the environment: loads config, restores the
    /// persisted session from disk, and constructs the API client with a
    /// session-expired hook that tells the user to sign in again.
    pub fn from_env() -> Result<Self, CliError> {
        let config = ClientConfig::from_env()?;

        let storage = FileStorage::new(config.session_file.clone());
        let session = SessionStore::load(storage);
        session.check_auth();

        let cart = CartStore::new();

        let on_expired = Arc::new(|| {
            println!("Your session has expired. Please sign in again with `greenbasket login`.");
        });
        let api = ApiClient::with_expired_hook(&config, session.clone(), on_expired);

        Ok(Self { api, session, cart })
    }

    /// Requires a signed-in session before any network call is made.
    pub fn require_auth(&self) -> Result<(), CliError> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(CliError::Message(
                "You are not signed in. Run `greenbasket login` first.".to_owned(),
            ))
        }
    }

    /// Requires an admin session. Checked locally so non-admins never hit
    /// the back-office endpoints.
    pub fn require_admin(&self) -> Result<(), CliError> {
        self.require_auth()?;
        if self.session.is_admin() {
            Ok(())
        } else {
            Err(CliError::Message(
                "This command requires the admin role.".to_owned(),
            ))
        }
    }
}
