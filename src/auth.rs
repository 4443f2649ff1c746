//! Bearer secret authentication: global middleware and per-handler guard.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::state::AppState;

/// Stands in for an `Authorization` value that is not visible ASCII. It has
/// no space, so the gate always reports it as malformed.
const UNREADABLE_CREDENTIAL: &str = "<unreadable>";

/// Raw `Authorization` header value.
fn authorization(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .map(|v| v.to_str().unwrap_or(UNREADABLE_CREDENTIAL))
}

/// Middleware that checks `Authorization: Bearer <secret>` on non-exempt paths.
///
/// When no secret is configured, all requests pass through.
pub async fn auth_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = req.uri().path().to_owned();
    let header = authorization(req.headers()).map(str::to_owned);

    state
        .gate()
        .intercept(&path, header.as_deref(), || next.run(req))
        .await
        .map_err(ApiError::from)
}

/// Per-handler guard. Adding it to a handler's arguments rejects the request
/// with 401 unless it carries the shared secret.
///
/// Ignores the exemption set: a guarded handler is always protected.
#[derive(Debug, Clone, Copy)]
pub struct Authorized;

impl FromRequestParts<AppState> for Authorized {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state.gate().check(authorization(&parts.headers))?;
        Ok(Authorized)
    }
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{StatusCode, header};
    use axum::routing::get;
    use notebook_auth::{FixedSecret, Gate};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    async fn guarded(_auth: Authorized) -> &'static str {
        "guarded"
    }

    /// Guard only, no middleware, mounted on an otherwise exempt path.
    fn guard_app(secret: FixedSecret) -> Router {
        Router::new()
            .route("/health", get(guarded))
            .with_state(AppState::with_gate(Gate::new(secret)))
    }

    async fn call(app: Router, auth: Option<&str>) -> (StatusCode, Option<String>, Vec<u8>) {
        let mut req = axum::http::Request::builder().uri("/health");
        if let Some(value) = auth {
            req = req.header(AUTHORIZATION, value);
        }
        let resp = app.oneshot(req.body(Body::empty()).unwrap()).await.unwrap();
        let status = resp.status();
        let challenge = resp
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec();
        (status, challenge, body)
    }

    #[tokio::test]
    async fn guard_protects_even_exempt_paths() {
        let (status, challenge, body) = call(guard_app(FixedSecret::new("s3cret")), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(challenge.as_deref(), Some("Bearer"));
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "missing_credential");
    }

    #[tokio::test]
    async fn guard_reasons() {
        let cases = [
            ("", "missing_credential"),
            ("Basic xyz", "malformed_credential"),
            ("Bearer", "malformed_credential"),
            ("Bearer nope", "invalid_credential"),
        ];
        for (header, code) in cases {
            let (status, _, body) =
                call(guard_app(FixedSecret::new("s3cret")), Some(header)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            let body: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(body["error"], code, "{header}");
        }
    }

    #[tokio::test]
    async fn guard_allows_correct_secret() {
        let (status, _, body) =
            call(guard_app(FixedSecret::new("s3cret")), Some("Bearer s3cret")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"guarded");
    }

    #[tokio::test]
    async fn guard_open_when_disabled() {
        let (status, _, _) = call(guard_app(FixedSecret::disabled()), Some("garbage")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[test]
    fn non_ascii_header_is_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            axum::http::HeaderValue::from_bytes(b"Bearer \xff").unwrap(),
        );
        let gate = Gate::new(FixedSecret::new("s3cret"));
        assert_eq!(
            gate.check(authorization(&headers)),
            Err(notebook_auth::AuthError::MalformedCredential)
        );
    }
}
