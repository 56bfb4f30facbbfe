//! Command implementations, one module per view.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod chef;
pub mod products;
pub mod recipes;
