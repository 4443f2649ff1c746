//! The authentication gate.
//!
//! One evaluation routine backs two entry points:
//! - [`Gate::intercept`] runs before every request and honours the exemption set,
//! - [`Gate::authorize`] is called by a single protected operation with an
//!   already-extracted credential.
//!
//! Both consult the [`SecretProvider`] first: with no secret configured the
//! gate behaves as if it were not there.

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use crate::credential::Credential;
use crate::error::AuthError;
use crate::secret::SecretProvider;

/// Paths that bypass authentication unless the caller supplies its own list.
pub const DEFAULT_EXEMPT_PATHS: &[&str] = &["/", "/health", "/docs", "/openapi.json", "/redoc"];

/// Request paths that skip the gate. Exact string match, no normalization.
#[derive(Debug, Clone)]
pub struct ExemptionSet {
    paths: HashSet<String>,
}

impl ExemptionSet {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// An empty set: every path is protected.
    pub fn none() -> Self {
        Self {
            paths: HashSet::new(),
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Default for ExemptionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXEMPT_PATHS.iter().copied())
    }
}

/// Why a request was let through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No secret configured.
    Disabled,
    /// Path is in the exemption set.
    Exempt,
    /// Presented the correct secret.
    Authenticated,
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow(Access),
    Deny(AuthError),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow(_))
    }

    fn from_result(result: Result<(), AuthError>) -> Self {
        match result {
            Ok(()) => Decision::Allow(Access::Authenticated),
            Err(e) => Decision::Deny(e),
        }
    }
}

/// Stateless allow/deny engine. Cheap to clone.
#[derive(Clone)]
pub struct Gate {
    secret: Arc<dyn SecretProvider>,
    exempt: Arc<ExemptionSet>,
}

impl Gate {
    /// Creates a gate with the default exemption set.
    pub fn new(secret: impl SecretProvider + 'static) -> Self {
        Self::with_exemptions(secret, ExemptionSet::default())
    }

    pub fn with_exemptions(secret: impl SecretProvider + 'static, exempt: ExemptionSet) -> Self {
        Self {
            secret: Arc::new(secret),
            exempt: Arc::new(exempt),
        }
    }

    /// Whether a secret is currently configured.
    pub fn is_enabled(&self) -> bool {
        self.secret.current_secret().is_some()
    }

    pub fn exemptions(&self) -> &ExemptionSet {
        &self.exempt
    }

    /// Classifies a request by path and raw `Authorization` header value.
    pub fn evaluate(&self, path: &str, authorization: Option<&str>) -> Decision {
        let Some(secret) = self.secret.current_secret() else {
            return Decision::Allow(Access::Disabled);
        };

        if self.exempt.contains(path) {
            return Decision::Allow(Access::Exempt);
        }

        let result = Credential::from_header(authorization)
            .and_then(|credential| verify(&secret, credential.as_ref()));

        let decision = Decision::from_result(result);
        if let Decision::Deny(reason) = decision {
            tracing::debug!(path, reason = reason.code(), "request denied");
        }
        decision
    }

    /// Interceptor form: decides, then runs `next` only on ALLOW.
    ///
    /// `next`'s output is returned untouched. On DENY `next` is never called.
    pub async fn intercept<F, Fut, R>(
        &self,
        path: &str,
        authorization: Option<&str>,
        next: F,
    ) -> Result<R, AuthError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = R>,
    {
        match self.evaluate(path, authorization) {
            Decision::Allow(_) => Ok(next().await),
            Decision::Deny(reason) => Err(reason),
        }
    }

    /// Guard form: checks an already-extracted credential.
    ///
    /// Path exemption is the caller's business; a guarded operation is never
    /// exempt.
    pub fn authorize(&self, credential: Option<&Credential>) -> Result<(), AuthError> {
        let Some(secret) = self.secret.current_secret() else {
            return Ok(());
        };
        verify(&secret, credential)
    }

    /// Guard form over a raw header value.
    ///
    /// A malformed header is only rejected while a secret is configured. An
    /// empty header counts as missing.
    pub fn check(&self, authorization: Option<&str>) -> Result<(), AuthError> {
        let Some(secret) = self.secret.current_secret() else {
            return Ok(());
        };
        let credential = Credential::from_header(authorization)?;
        verify(&secret, credential.as_ref())
    }
}

fn verify(secret: &str, credential: Option<&Credential>) -> Result<(), AuthError> {
    let credential = credential.ok_or(AuthError::MissingCredential)?;
    if !credential.is_bearer() {
        return Err(AuthError::MalformedCredential);
    }
    // TODO: constant-time comparison (subtle) once timing hardening is agreed on
    if credential.token() != secret {
        return Err(AuthError::InvalidCredential);
    }
    Ok(())
}
