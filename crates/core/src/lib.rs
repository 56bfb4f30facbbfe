//! Greenbasket Core - Shared domain types.
//!
//! This crate provides the wire types exchanged with the grocery store API,
//! used across all Greenbasket components:
//! - `client` - API client, session and cart state
//! - `cli` - Terminal storefront and back-office
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Every type
//! here round-trips the JSON produced by the remote API, which serializes
//! money and quantities as plain numbers and empty collections as `null`.
//!
//! # Modules
//!
//! - [`types`] - IDs, users, catalog, cart snapshots, recipes, AI payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
