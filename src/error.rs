//! Error types for the API layer.
//!
//! Authentication denials arrive as `ApiError::Unauthorized` and keep their
//! reason code in the body, so callers can tell a missing header from a
//! malformed one or a wrong password.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use notebook_auth::AuthError;
use serde::Serialize;
use utoipa::ToSchema;

/// API error rendered as a JSON body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request was denied by the authentication gate.
    #[error(transparent)]
    Unauthorized(#[from] AuthError),

    /// Invalid request parameters or body.
    #[error("{0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("{0}")]
    NotFound(String),
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// Error code (e.g. "missing_credential", "invalid_credential", "not_found").
    pub(crate) error: String,
    /// Human-readable error detail, if available.
    pub(crate) detail: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, detail) = match &self {
            ApiError::Unauthorized(reason) => {
                let status =
                    StatusCode::from_u16(reason.status()).unwrap_or(StatusCode::UNAUTHORIZED);
                (status, reason.code(), Some(reason.to_string()))
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone())),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
        };

        let body = ErrorBody {
            error: error.to_string(),
            detail,
        };

        let mut response = (status, axum::Json(body)).into_response();
        if let ApiError::Unauthorized(reason) = &self {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(reason.challenge()),
            );
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denial_carries_challenge() {
        let response = ApiError::from(AuthError::InvalidCredential).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "Bearer");
    }

    #[test]
    fn other_errors_have_no_challenge() {
        let cases = [
            (ApiError::NotFound("notebook not found".into()), StatusCode::NOT_FOUND),
            (ApiError::BadRequest("name is required".into()), StatusCode::BAD_REQUEST),
        ];
        for (error, status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), status);
            assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
        }
    }
}
