//! In-memory notebook store.
//!
//! This is the downstream application behind the authentication gate. It
//! knows nothing about credentials.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Notebook {
    /// Notebook identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Archived notebooks are hidden from `archived=false` listings.
    pub archived: bool,
    /// Creation time (UTC).
    pub created: DateTime<Utc>,
    /// Last modification time (UTC).
    pub updated: DateTime<Utc>,
}

/// Changes applied by [`NotebookStore::update`]. `None` fields are left alone.
#[derive(Debug, Default)]
pub struct NotebookPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub archived: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortField {
    Name,
    Created,
    Updated,
}

/// Listing order, parsed from `"<field> [asc|desc]"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    field: SortField,
    descending: bool,
}

impl Default for OrderBy {
    fn default() -> Self {
        Self {
            field: SortField::Updated,
            descending: true,
        }
    }
}

impl FromStr for OrderBy {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let field = match parts.next() {
            Some("name") => SortField::Name,
            Some("created") => SortField::Created,
            Some("updated") => SortField::Updated,
            Some(other) => {
                return Err(ApiError::BadRequest(format!(
                    "cannot order by '{other}' (expected name, created or updated)"
                )));
            }
            None => return Ok(Self::default()),
        };
        let descending = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            None | Some("asc") => false,
            Some("desc") => true,
            Some(other) => {
                return Err(ApiError::BadRequest(format!(
                    "invalid sort direction '{other}' (expected asc or desc)"
                )));
            }
        };
        if parts.next().is_some() {
            return Err(ApiError::BadRequest(format!("invalid order_by '{s}'")));
        }
        Ok(Self { field, descending })
    }
}

impl OrderBy {
    fn compare(&self, a: &Notebook, b: &Notebook) -> Ordering {
        let ord = match self.field {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Created => a.created.cmp(&b.created),
            SortField::Updated => a.updated.cmp(&b.updated),
        };
        if self.descending { ord.reverse() } else { ord }
    }
}

/// Thread-safe notebook registry.
#[derive(Default)]
pub struct NotebookStore {
    notebooks: DashMap<Uuid, Notebook>,
}

impl NotebookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a notebook. The name must not be blank.
    pub fn create(&self, name: &str, description: &str) -> Result<Notebook, ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::BadRequest("notebook name is required".to_string()));
        }

        let now = Utc::now();
        let notebook = Notebook {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.to_string(),
            archived: false,
            created: now,
            updated: now,
        };
        self.notebooks.insert(notebook.id, notebook.clone());
        tracing::info!(id = %notebook.id, name = %notebook.name, "notebook created");
        Ok(notebook)
    }

    pub fn get(&self, id: Uuid) -> Option<Notebook> {
        self.notebooks.get(&id).map(|entry| entry.value().clone())
    }

    /// Lists notebooks, optionally filtered by archive state.
    pub fn list(&self, archived: Option<bool>, order: OrderBy) -> Vec<Notebook> {
        let mut list: Vec<Notebook> = self
            .notebooks
            .iter()
            .filter(|entry| archived.is_none_or(|a| entry.archived == a))
            .map(|entry| entry.value().clone())
            .collect();
        list.sort_by(|a, b| order.compare(a, b));
        list
    }

    pub fn update(&self, id: Uuid, patch: NotebookPatch) -> Result<Notebook, ApiError> {
        let mut entry = self
            .notebooks
            .get_mut(&id)
            .ok_or_else(|| not_found(id))?;

        if let Some(name) = patch.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(ApiError::BadRequest("notebook name is required".to_string()));
            }
            entry.name = name.to_string();
        }
        if let Some(description) = patch.description {
            entry.description = description;
        }
        if let Some(archived) = patch.archived {
            entry.archived = archived;
        }
        entry.updated = Utc::now();
        Ok(entry.clone())
    }

    pub fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.notebooks
            .remove(&id)
            .map(|_| tracing::info!(%id, "notebook deleted"))
            .ok_or_else(|| not_found(id))
    }

    pub fn len(&self) -> usize {
        self.notebooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notebooks.is_empty()
    }
}

fn not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("notebook '{id}' not found"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_get() {
        let store = NotebookStore::new();
        let nb = store.create("  Research ", "notes").unwrap();
        assert_eq!(nb.name, "Research");
        assert!(!nb.archived);
        assert_eq!(store.get(nb.id).unwrap().description, "notes");
        assert!(store.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn blank_name_rejected() {
        let store = NotebookStore::new();
        assert!(matches!(store.create("   ", ""), Err(ApiError::BadRequest(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn list_filters_and_orders() {
        let store = NotebookStore::new();
        let b = store.create("beta", "").unwrap();
        store.create("alpha", "").unwrap();
        store.create("gamma", "").unwrap();
        store
            .update(
                b.id,
                NotebookPatch {
                    archived: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();

        let by_name: Vec<_> = store
            .list(None, "name asc".parse().unwrap())
            .into_iter()
            .map(|n| n.name)
            .collect();
        assert_eq!(by_name, ["alpha", "beta", "gamma"]);

        let active: Vec<_> = store
            .list(Some(false), "name desc".parse().unwrap())
            .into_iter()
            .map(|n| n.name)
            .collect();
        assert_eq!(active, ["gamma", "alpha"]);

        let archived = store.list(Some(true), OrderBy::default());
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].id, b.id);

        // Most recently updated first by default
        assert_eq!(store.list(None, OrderBy::default())[0].id, b.id);
    }

    #[test]
    fn order_by_parsing() {
        assert_eq!("".parse::<OrderBy>().unwrap(), OrderBy::default());
        assert_eq!("updated desc".parse::<OrderBy>().unwrap(), OrderBy::default());
        assert!("created".parse::<OrderBy>().is_ok());
        assert!("name DESC".parse::<OrderBy>().is_ok());
        assert!("size desc".parse::<OrderBy>().is_err());
        assert!("name sideways".parse::<OrderBy>().is_err());
        assert!("name asc extra".parse::<OrderBy>().is_err());
    }

    #[test]
    fn delete_missing_is_not_found() {
        let store = NotebookStore::new();
        let nb = store.create("x", "").unwrap();
        store.delete(nb.id).unwrap();
        assert!(matches!(store.delete(nb.id), Err(ApiError::NotFound(_))));
        assert_eq!(store.len(), 0);
    }
}
