//! Script entity model and DTOs.

use serde::{Deserialize, Serialize};
use slate_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A script row from the `scripts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Script {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub content: String,
    pub version: i32,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Valid script lifecycle statuses.
pub const VALID_SCRIPT_STATUSES: &[&str] = &["draft", "revised", "locked", "shooting"];

/// DTO for creating a script. Version starts at 1, status at `draft`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScript {
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub status: Option<String>,
}

/// DTO for updating a script. A content change bumps `version` in the
/// repository layer; all fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateScript {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
}
