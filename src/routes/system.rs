//! System, health and guard probe endpoints.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::auth::Authorized;
use crate::state::AppState;

use super::types::{HealthResponse, RootResponse, SecureResponse};

/// Service banner.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service info", body = RootResponse),
    ),
    tag = "System"
)]
pub async fn root() -> impl IntoResponse {
    Json(RootResponse {
        name: "Notebook Server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        docs: "/docs".to_string(),
    })
}

/// Check server health.
///
/// Always reachable: `/health` is in the default exemption set.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse),
    ),
    tag = "System"
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        auth_enabled: state.gate().is_enabled(),
        uptime_seconds: state.uptime_secs(),
    })
}

/// Guarded probe: succeeds only with the shared secret (or when auth is disabled).
#[utoipa::path(
    get,
    path = "/secure",
    responses(
        (status = 200, description = "Guard passed", body = SecureResponse),
        (status = 401, description = "Missing, malformed or wrong credential", body = crate::error::ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "System"
)]
pub async fn secure(_auth: Authorized) -> impl IntoResponse {
    Json(SecureResponse {
        message: "You passed the password check!".to_string(),
    })
}
