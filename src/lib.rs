//! Notebook Server - notebook API gated by a shared bearer secret.
//!
//! The allow/deny logic lives in the `notebook-auth` crate. This crate wires
//! it into axum twice:
//! - [`auth::auth_middleware`] intercepts every request,
//! - [`auth::Authorized`] guards individual handlers.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod notebooks;
pub mod request_id;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
