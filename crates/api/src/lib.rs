//! Storefront API server library.
//!
//! Exposes the building blocks (config, state, error handling, auth
//! primitives, handlers, routes) so integration tests and the binary
//! entrypoint share exactly the same application.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
