//! HTTP API routes for the Notebook Server.

mod notebooks;
mod system;
pub mod types;

use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use axum::{Json, Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_redoc::{Redoc, Servable as _};
use utoipa_scalar::{Scalar, Servable as _};

use crate::auth::auth_middleware;
use crate::error::ErrorBody;
use crate::request_id::{X_REQUEST_ID, request_id_middleware};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// OpenAPI
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notebook Server API",
        description = "HTTP API for notebooks.\n\nWhen a shared secret is configured, every request outside the exemption list (`/`, `/health`, `/docs`, `/openapi.json`, `/redoc`) must send `Authorization: Bearer <secret>`.",
        version = "0.1.0",
        license(name = "Apache-2.0"),
    ),
    paths(
        system::root,
        system::health,
        system::secure,
        notebooks::list_notebooks,
        notebooks::create_notebook,
        notebooks::get_notebook,
        notebooks::update_notebook,
        notebooks::delete_notebook,
    ),
    components(
        schemas(
            types::RootResponse, types::HealthResponse, types::SecureResponse,
            types::Notebook, types::CreateNotebookRequest, types::UpdateNotebookRequest,
            ErrorBody,
        )
    ),
    modifiers(&BearerScheme),
    tags(
        (name = "Notebooks", description = "Notebook management"),
        (name = "System", description = "System, health and auth probe endpoints"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by guarded paths.
struct BearerScheme;

impl Modify for BearerScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Builds the main application router.
///
/// The auth middleware wraps every route, docs included; exempt paths are
/// decided by the gate, not by routing. Each docs page is served in full at
/// its exact path so an exempt path is enough to reach it.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/secure", get(system::secure))
        .route(
            "/api/notebooks",
            get(notebooks::list_notebooks).post(notebooks::create_notebook),
        )
        .route(
            "/api/notebooks/{id}",
            get(notebooks::get_notebook)
                .put(notebooks::update_notebook)
                .delete(notebooks::delete_notebook),
        )
        .route("/openapi.json", get(openapi_json))
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors_layer(&state))
        .with_state(state)
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let origins = state.cors_origins();

    // No origins configured → no CORS headers (deny cross-origin by default).
    if origins.is_empty() {
        return CorsLayer::new();
    }

    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            X_REQUEST_ID.clone(),
        ])
        .expose_headers([X_REQUEST_ID.clone(), header::WWW_AUTHENTICATE]);

    if origins.len() == 1 && origins[0] == "*" {
        tracing::warn!("CORS configured with wildcard origin, all cross-origin requests allowed");
        base.allow_origin(tower_http::cors::Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(v) => Some(v),
                Err(_) => {
                    tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        base.allow_origin(parsed)
    }
}
