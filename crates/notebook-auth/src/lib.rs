//! Notebook Auth: shared-secret bearer authentication for the Notebook Server.
//!
//! This crate holds the transport-agnostic decision logic:
//! - [`SecretProvider`] resolves the shared secret on every decision,
//! - [`Credential`] parses an `Authorization` header value,
//! - [`Gate`] classifies requests as exempt or protected and allows or denies
//!   them, either as an interceptor or as a per-operation guard.
//!
//! **Zero transport dependencies**. The HTTP crate maps [`AuthError`] to
//! status codes and headers.

pub mod credential;
pub mod error;
pub mod gate;
pub mod secret;

pub use credential::Credential;
pub use error::AuthError;
pub use gate::{Access, DEFAULT_EXEMPT_PATHS, Decision, ExemptionSet, Gate};
pub use secret::{DEFAULT_SECRET_VAR, EnvSecret, FixedSecret, SecretProvider, SwappableSecret};
