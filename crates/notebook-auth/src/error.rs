//! Authentication denial reasons.
//!
//! `AuthError` is transport-agnostic. Every variant maps to 401 with a
//! `Bearer` challenge; transports render it into their own wire format.

/// Challenge scheme advertised with every denial (`WWW-Authenticate`).
pub const BEARER_CHALLENGE: &str = "Bearer";

/// Why a request was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization` header was supplied.
    #[error("Missing authorization header")]
    MissingCredential,

    /// The header is not `<scheme> <token>` or the scheme is not `Bearer`.
    #[error("Invalid authentication scheme")]
    MalformedCredential,

    /// The token does not match the configured secret.
    #[error("Invalid password")]
    InvalidCredential,
}

impl AuthError {
    /// HTTP-equivalent status code. All denials share 401.
    pub fn status(&self) -> u16 {
        401
    }

    /// Machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingCredential => "missing_credential",
            AuthError::MalformedCredential => "malformed_credential",
            AuthError::InvalidCredential => "invalid_credential",
        }
    }

    /// Challenge scheme to send back to the caller.
    pub fn challenge(&self) -> &'static str {
        BEARER_CHALLENGE
    }
}
