//! Shot list and shot entity models and DTOs.

use serde::{Deserialize, Serialize};
use slate_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A shot list row from the `shot_lists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShotList {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A shot row from the `shots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Shot {
    pub id: DbId,
    pub shot_list_id: DbId,
    pub shot_number: String,
    pub description: Option<String>,
    pub shot_type: Option<String>,
    pub camera: Option<String>,
    pub lens: Option<String>,
    pub movement: Option<String>,
    pub status: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Valid shot capture statuses.
pub const VALID_SHOT_STATUSES: &[&str] = &["planned", "setup", "captured", "cut"];

/// DTO for creating a shot list.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShotList {
    pub title: String,
    pub description: Option<String>,
}

/// DTO for updating a shot list. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShotList {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// DTO for creating a shot. Status defaults to `planned`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShot {
    pub shot_number: String,
    pub description: Option<String>,
    pub shot_type: Option<String>,
    pub camera: Option<String>,
    pub lens: Option<String>,
    pub movement: Option<String>,
    pub status: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for updating a shot. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShot {
    pub shot_number: Option<String>,
    pub description: Option<String>,
    pub shot_type: Option<String>,
    pub camera: Option<String>,
    pub lens: Option<String>,
    pub movement: Option<String>,
    pub status: Option<String>,
    pub sort_order: Option<i32>,
}
