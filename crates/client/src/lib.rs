//! Greenbasket Client - API gateway and client-side state.
//!
//! This crate implements everything the views need to talk to the grocery
//! store API:
//!
//! - [`api::ApiClient`] - central outbound gateway. Attaches the bearer
//!   token when a session exists, converts failures into a uniform
//!   [`error::ApiError`], and on any 401 tears down the session and fires
//!   the configured session-expired hook before propagating the failure.
//! - [`session::SessionStore`] - the authenticated user and token, with a
//!   pluggable persistence adapter so the state transitions stay pure.
//! - [`cart::CartStore`] - the last-fetched cart snapshot with derived
//!   totals. Snapshots are replaced wholesale; the server is authoritative.
//! - [`validate`] - advisory client-side checks for the admin forms, run
//!   before a request leaves the client.
//!
//! # Example
//!
//! ```rust,ignore
//! use greenbasket_client::{ApiClient, ClientConfig, FileStorage, SessionStore};
//!
//! let config = ClientConfig::from_env()?;
//! let session = SessionStore::load(FileStorage::new(config.session_file.clone()));
//! let api = ApiClient::new(&config, session.clone());
//!
//! let auth = api.login(&credentials).await?;
//! session.set_auth(auth.user, &auth.token);
//! let cart = api.cart().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod config;
pub mod error;
pub mod session;
pub mod validate;

pub use api::{ApiClient, SessionExpiredHook};
pub use cart::CartStore;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use session::{SessionStore, storage::FileStorage, storage::MemoryStorage};
pub use validate::ValidationError;
