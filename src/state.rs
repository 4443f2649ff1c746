//! Shared application state: authentication gate, notebook store and server metadata.

use std::sync::Arc;
use std::time::Instant;

use notebook_auth::{EnvSecret, ExemptionSet, Gate};

use crate::config::Config;
use crate::notebooks::NotebookStore;

/// Shared application state, cloneable across handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    gate: Gate,
    notebooks: NotebookStore,
    cors_origins: Vec<String>,
    start_time: Instant,
}

impl AppState {
    /// Creates a new application state from config.
    ///
    /// The secret is read from `config.password_env` on every request.
    pub fn new(config: &Config) -> Self {
        let secret = EnvSecret::new(config.password_env.clone());
        let gate = if config.auth_exempt.is_empty() {
            Gate::new(secret)
        } else {
            Gate::with_exemptions(secret, ExemptionSet::new(config.auth_exempt.clone()))
        };

        Self::build(gate, config.cors_origins.clone())
    }

    /// Creates a state around an existing gate (for tests and embedding).
    pub fn with_gate(gate: Gate) -> Self {
        Self::build(gate, vec![])
    }

    fn build(gate: Gate, cors_origins: Vec<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                gate,
                notebooks: NotebookStore::new(),
                cors_origins,
                start_time: Instant::now(),
            }),
        }
    }

    /// Returns the authentication gate.
    pub fn gate(&self) -> &Gate {
        &self.inner.gate
    }

    /// Returns a reference to the notebook store.
    pub fn notebooks(&self) -> &NotebookStore {
        &self.inner.notebooks
    }

    /// Returns the configured CORS allowed origins.
    pub fn cors_origins(&self) -> &[String] {
        &self.inner.cors_origins
    }

    /// Returns the server uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.inner.start_time.elapsed().as_secs()
    }
}
