//! Request/response types for the Notebook Server HTTP API.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub use crate::notebooks::Notebook;

#[derive(Serialize, ToSchema)]
pub struct RootResponse {
    /// Service name.
    pub name: String,
    /// Server version.
    pub version: String,
    /// Location of the interactive API docs.
    pub docs: String,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server status ("ok").
    pub status: String,
    /// Server version.
    pub version: String,
    /// Whether a shared secret is currently configured.
    pub auth_enabled: bool,
    /// Server uptime in seconds.
    pub uptime_seconds: u64,
}

#[derive(Serialize, ToSchema)]
pub struct SecureResponse {
    /// Confirmation that the guard accepted the request.
    pub message: String,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListNotebooksQuery {
    /// Only archived (`true`) or only active (`false`) notebooks. Omit for all.
    #[serde(default)]
    pub archived: Option<bool>,
    /// Sort order: "<name|created|updated> [asc|desc]" (default "updated desc").
    #[serde(default)]
    pub order_by: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateNotebookRequest {
    /// Display name (must not be blank).
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateNotebookRequest {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
    /// Archive or unarchive the notebook.
    #[serde(default)]
    pub archived: Option<bool>,
}
