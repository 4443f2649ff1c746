//! Shared-secret sources.
//!
//! A [`SecretProvider`] is consulted on every decision, so a secret that is
//! added, changed or removed while the process runs takes effect on the next
//! request. An empty value counts as "no secret".

use std::sync::Arc;

use arc_swap::ArcSwapOption;

/// Default environment variable holding the shared secret.
pub const DEFAULT_SECRET_VAR: &str = "OPEN_NOTEBOOK_PASSWORD";

/// Resolves the current shared secret. `None` means authentication is disabled.
pub trait SecretProvider: Send + Sync {
    fn current_secret(&self) -> Option<String>;
}

impl<T: SecretProvider + ?Sized> SecretProvider for Arc<T> {
    fn current_secret(&self) -> Option<String> {
        (**self).current_secret()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Reads the secret from an environment variable on every call.
#[derive(Debug, Clone)]
pub struct EnvSecret {
    var: String,
}

impl EnvSecret {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the variable this provider reads.
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvSecret {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET_VAR)
    }
}

impl SecretProvider for EnvSecret {
    fn current_secret(&self) -> Option<String> {
        std::env::var(&self.var).ok().and_then(non_empty)
    }
}

/// A secret fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct FixedSecret(Option<String>);

impl FixedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(non_empty(secret.into()))
    }

    /// Authentication permanently disabled.
    pub fn disabled() -> Self {
        Self(None)
    }
}

impl SecretProvider for FixedSecret {
    fn current_secret(&self) -> Option<String> {
        self.0.clone()
    }
}

/// A secret held in shared memory that can be replaced at runtime.
///
/// Clones share the same slot. Reads are lock-free.
#[derive(Clone, Default)]
pub struct SwappableSecret {
    slot: Arc<ArcSwapOption<String>>,
}

impl SwappableSecret {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            slot: Arc::new(ArcSwapOption::from(
                initial.and_then(non_empty).map(Arc::new),
            )),
        }
    }

    /// Replaces the secret. An empty string disables authentication.
    pub fn set(&self, secret: impl Into<String>) {
        self.slot.store(non_empty(secret.into()).map(Arc::new));
    }

    /// Removes the secret, disabling authentication.
    pub fn clear(&self) {
        self.slot.store(None);
    }
}

impl SecretProvider for SwappableSecret {
    fn current_secret(&self) -> Option<String> {
        self.slot.load_full().map(|s| (*s).clone())
    }
}
