//! Storyboard frame entity model and DTOs.

use serde::{Deserialize, Serialize};
use slate_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A frame row from the `storyboard_frames` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoryboardFrame {
    pub id: DbId,
    pub project_id: DbId,
    pub frame_number: i32,
    pub scene: Option<String>,
    pub description: Option<String>,
    pub shot_type: Option<String>,
    pub image_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a storyboard frame.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStoryboardFrame {
    pub frame_number: i32,
    pub scene: Option<String>,
    pub description: Option<String>,
    pub shot_type: Option<String>,
    pub image_url: Option<String>,
    pub duration_secs: Option<i32>,
}

/// DTO for updating a storyboard frame. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStoryboardFrame {
    pub frame_number: Option<i32>,
    pub scene: Option<String>,
    pub description: Option<String>,
    pub shot_type: Option<String>,
    pub image_url: Option<String>,
    pub duration_secs: Option<i32>,
}
