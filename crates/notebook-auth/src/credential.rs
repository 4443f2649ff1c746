//! `Authorization` header parsing.

use crate::error::AuthError;

/// A credential presented with one request: `<scheme> <token>`.
///
/// Lives only for the duration of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    scheme: String,
    token: String,
}

impl Credential {
    /// Creates a credential from its parts.
    pub fn new(scheme: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            token: token.into(),
        }
    }

    /// Shorthand for a `Bearer` credential.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::new("Bearer", token)
    }

    /// Splits a header value once on the first space.
    ///
    /// A value without a space is malformed. The scheme is not checked here;
    /// see [`Credential::is_bearer`].
    pub fn parse(value: &str) -> Result<Self, AuthError> {
        let (scheme, token) = value
            .split_once(' ')
            .ok_or(AuthError::MalformedCredential)?;
        Ok(Self::new(scheme, token))
    }

    /// Parses an optional header value. An empty value counts as absent.
    pub fn from_header(value: Option<&str>) -> Result<Option<Self>, AuthError> {
        value.filter(|v| !v.is_empty()).map(Self::parse).transpose()
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether the scheme is `bearer`, case-insensitively.
    pub fn is_bearer(&self) -> bool {
        self.scheme.eq_ignore_ascii_case("bearer")
    }
}
