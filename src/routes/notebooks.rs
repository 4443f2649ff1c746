//! Notebook CRUD endpoints. Every handler carries the [`Authorized`] guard.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::auth::Authorized;
use crate::error::{ApiError, ErrorBody};
use crate::notebooks::{NotebookPatch, OrderBy};
use crate::state::AppState;

use super::types::{CreateNotebookRequest, ListNotebooksQuery, Notebook, UpdateNotebookRequest};

/// List notebooks.
#[utoipa::path(
    get,
    path = "/api/notebooks",
    params(ListNotebooksQuery),
    responses(
        (status = 200, description = "Notebooks", body = Vec<Notebook>),
        (status = 400, description = "Invalid order_by", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "Notebooks"
)]
pub async fn list_notebooks(
    _auth: Authorized,
    State(state): State<AppState>,
    Query(query): Query<ListNotebooksQuery>,
) -> Result<Json<Vec<Notebook>>, ApiError> {
    let order = query
        .order_by
        .as_deref()
        .map_or(Ok(OrderBy::default()), |s| s.parse::<OrderBy>())?;
    Ok(Json(state.notebooks().list(query.archived, order)))
}

/// Create a notebook.
#[utoipa::path(
    post,
    path = "/api/notebooks",
    request_body = CreateNotebookRequest,
    responses(
        (status = 201, description = "Notebook created", body = Notebook),
        (status = 400, description = "Blank name", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "Notebooks"
)]
pub async fn create_notebook(
    _auth: Authorized,
    State(state): State<AppState>,
    Json(req): Json<CreateNotebookRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let notebook = state.notebooks().create(&req.name, &req.description)?;
    Ok((StatusCode::CREATED, Json(notebook)))
}

/// Get one notebook.
#[utoipa::path(
    get,
    path = "/api/notebooks/{id}",
    params(("id" = Uuid, Path, description = "Notebook id")),
    responses(
        (status = 200, description = "Notebook", body = Notebook),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "Notebooks"
)]
pub async fn get_notebook(
    _auth: Authorized,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Notebook>, ApiError> {
    state
        .notebooks()
        .get(id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("notebook '{id}' not found")))
}

/// Update a notebook's name, description or archive flag.
#[utoipa::path(
    put,
    path = "/api/notebooks/{id}",
    params(("id" = Uuid, Path, description = "Notebook id")),
    request_body = UpdateNotebookRequest,
    responses(
        (status = 200, description = "Notebook updated", body = Notebook),
        (status = 400, description = "Blank name", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "Notebooks"
)]
pub async fn update_notebook(
    _auth: Authorized,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateNotebookRequest>,
) -> Result<Json<Notebook>, ApiError> {
    let patch = NotebookPatch {
        name: req.name,
        description: req.description,
        archived: req.archived,
    };
    state.notebooks().update(id, patch).map(Json)
}

/// Delete a notebook.
#[utoipa::path(
    delete,
    path = "/api/notebooks/{id}",
    params(("id" = Uuid, Path, description = "Notebook id")),
    responses(
        (status = 204, description = "Notebook deleted"),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "Notebooks"
)]
pub async fn delete_notebook(
    _auth: Authorized,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.notebooks().delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
