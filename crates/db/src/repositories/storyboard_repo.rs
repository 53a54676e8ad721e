//! Repository for the `storyboard_frames` table.

use slate_core::types::DbId;
use sqlx::PgPool;

use crate::models::storyboard::{CreateStoryboardFrame, StoryboardFrame, UpdateStoryboardFrame};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, frame_number, scene, description, shot_type, image_url, \
     duration_secs, created_at, updated_at";

/// Provides CRUD operations for storyboard frames.
pub struct StoryboardRepo;

impl StoryboardRepo {
    /// Insert a new frame, returning the created row.
    ///
    /// Fails with a unique violation (`uq_storyboard_frames_project_number`)
    /// if the frame number is already taken within the project.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateStoryboardFrame,
    ) -> Result<StoryboardFrame, sqlx::Error> {
        let query = format!(
            "INSERT INTO storyboard_frames
                (project_id, frame_number, scene, description, shot_type, image_url, duration_secs)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StoryboardFrame>(&query)
            .bind(project_id)
            .bind(input.frame_number)
            .bind(&input.scene)
            .bind(&input.description)
            .bind(&input.shot_type)
            .bind(&input.image_url)
            .bind(input.duration_secs)
            .fetch_one(pool)
            .await
    }

    /// Find a frame by ID, scoped to its project.
    pub async fn find_by_id(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<StoryboardFrame>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM storyboard_frames WHERE id = $2 AND project_id = $1");
        sqlx::query_as::<_, StoryboardFrame>(&query)
            .bind(project_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's frames in frame-number order.
    pub async fn list(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<StoryboardFrame>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM storyboard_frames WHERE project_id = $1 ORDER BY frame_number"
        );
        sqlx::query_as::<_, StoryboardFrame>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a frame. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateStoryboardFrame,
    ) -> Result<Option<StoryboardFrame>, sqlx::Error> {
        let query = format!(
            "UPDATE storyboard_frames SET
                frame_number = COALESCE($3, frame_number),
                scene = COALESCE($4, scene),
                description = COALESCE($5, description),
                shot_type = COALESCE($6, shot_type),
                image_url = COALESCE($7, image_url),
                duration_secs = COALESCE($8, duration_secs)
             WHERE id = $2 AND project_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StoryboardFrame>(&query)
            .bind(project_id)
            .bind(id)
            .bind(input.frame_number)
            .bind(&input.scene)
            .bind(&input.description)
            .bind(&input.shot_type)
            .bind(&input.image_url)
            .bind(input.duration_secs)
            .fetch_optional(pool)
            .await
    }

    /// Delete a frame. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM storyboard_frames WHERE id = $2 AND project_id = $1")
            .bind(project_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
