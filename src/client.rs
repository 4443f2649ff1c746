//! HTTP client for the Notebook Server API.
//!
//! Attaches `Authorization: Bearer <secret>` to every request when a shared
//! secret is configured, so callers never deal with the gate directly.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::notebooks::Notebook;

/// Environment variable with the server base URL.
pub const BASE_URL_VAR: &str = "API_BASE_URL";

/// Base URL used when neither an argument nor `API_BASE_URL` is given.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5055";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client-side failures.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server could not be reached (DNS, refused connection, timeout).
    #[error("Failed to connect to API: {0}")]
    Connection(String),

    /// The server answered with a non-success status.
    #[error("API request failed: {status} - {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The client could not be built (bad secret characters, TLS setup).
    #[error("invalid client configuration: {0}")]
    Config(String),
}

/// Client for the Notebook Server API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
    headers: HeaderMap,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client from the environment.
    ///
    /// The base URL falls back to `API_BASE_URL`, then to `http://127.0.0.1:5055`.
    /// The secret is taken from `OPEN_NOTEBOOK_PASSWORD` when set and non-empty.
    pub fn new(base_url: Option<&str>) -> Result<Self, ClientError> {
        let base_url = base_url.map_or_else(
            || std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            str::to_string,
        );
        let secret = std::env::var(notebook_auth::DEFAULT_SECRET_VAR).ok();
        Self::with_secret(&base_url, secret.as_deref())
    }

    /// Creates a client with an explicit secret (`None` sends no credential).
    pub fn with_secret(base_url: &str, secret: Option<&str>) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        if let Some(secret) = secret.filter(|s| !s.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {secret}"))
                .map_err(|e| ClientError::Config(format!("secret is not a valid header: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            headers,
            http,
        })
    }

    /// Overrides the default request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests carry a bearer credential.
    pub fn is_authenticated(&self) -> bool {
        self.headers.contains_key(AUTHORIZATION)
    }

    /// Sends a request and decodes the JSON response.
    ///
    /// `build` adds a body; the bearer header is merged in last so it always wins.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<T, ClientError> {
        let url = format!("{}{endpoint}", self.base_url);
        let request = build(self.http.request(method.clone(), url.as_str()))
            .headers(self.headers.clone())
            .timeout(self.timeout);

        let response = request.send().await.map_err(|e| {
            tracing::error!(%method, %url, error = %e, "request error");
            ClientError::Connection(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%method, %url, status = status.as_u16(), %body, "http error");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!(%method, %url, error = %e, "unexpected response body");
            ClientError::Decode(e.to_string())
        })
    }

    /// Lists notebooks, optionally filtered by archive state.
    pub async fn get_notebooks(
        &self,
        archived: Option<bool>,
        order_by: &str,
    ) -> Result<Vec<Notebook>, ClientError> {
        let mut params = vec![("order_by", order_by.to_string())];
        if let Some(archived) = archived {
            params.push(("archived", archived.to_string()));
        }
        let query = serde_urlencoded::to_string(&params)
            .map_err(|e| ClientError::Config(format!("invalid query: {e}")))?;
        self.request(Method::GET, &format!("/api/notebooks?{query}"), |req| req)
            .await
    }

    /// Creates a notebook.
    pub async fn create_notebook(
        &self,
        name: &str,
        description: &str,
    ) -> Result<Notebook, ClientError> {
        let body = json!({ "name": name, "description": description });
        self.request(Method::POST, "/api/notebooks", |req| req.json(&body))
            .await
    }
}
