//! Repository for the `shot_lists` and `shots` tables.

use slate_core::types::DbId;
use sqlx::PgPool;

use crate::models::shot_list::{
    CreateShot, CreateShotList, Shot, ShotList, UpdateShot, UpdateShotList,
};

/// Column list for shot list rows.
const COLUMNS: &str = "id, project_id, title, description, created_at, updated_at";

/// Column list for shot rows.
const SHOT_COLUMNS: &str = "id, shot_list_id, shot_number, description, shot_type, camera, \
     lens, movement, status, sort_order, created_at, updated_at";

/// Provides CRUD operations for shot lists and their shots.
pub struct ShotListRepo;

impl ShotListRepo {
    /// Insert a new shot list, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateShotList,
    ) -> Result<ShotList, sqlx::Error> {
        let query = format!(
            "INSERT INTO shot_lists (project_id, title, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShotList>(&query)
            .bind(project_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a shot list by ID, scoped to its project.
    pub async fn find_by_id(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<ShotList>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shot_lists WHERE id = $2 AND project_id = $1");
        sqlx::query_as::<_, ShotList>(&query)
            .bind(project_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's shot lists in creation order.
    pub async fn list(pool: &PgPool, project_id: DbId) -> Result<Vec<ShotList>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shot_lists WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, ShotList>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a shot list. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateShotList,
    ) -> Result<Option<ShotList>, sqlx::Error> {
        let query = format!(
            "UPDATE shot_lists SET
                title = COALESCE($3, title),
                description = COALESCE($4, description)
             WHERE id = $2 AND project_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShotList>(&query)
            .bind(project_id)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a shot list (and, via cascade, its shots).
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shot_lists WHERE id = $2 AND project_id = $1")
            .bind(project_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Shots
    // -----------------------------------------------------------------------

    /// Insert a new shot under a list, returning the created row.
    ///
    /// Fails with a unique violation (`uq_shots_list_number`) on a
    /// duplicate shot number within the list.
    pub async fn create_shot(
        pool: &PgPool,
        shot_list_id: DbId,
        input: &CreateShot,
    ) -> Result<Shot, sqlx::Error> {
        let query = format!(
            "INSERT INTO shots
                (shot_list_id, shot_number, description, shot_type, camera, lens, movement,
                 status, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, 'planned'), COALESCE($9, 0))
             RETURNING {SHOT_COLUMNS}"
        );
        sqlx::query_as::<_, Shot>(&query)
            .bind(shot_list_id)
            .bind(&input.shot_number)
            .bind(&input.description)
            .bind(&input.shot_type)
            .bind(&input.camera)
            .bind(&input.lens)
            .bind(&input.movement)
            .bind(&input.status)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// List a shot list's shots in sort order.
    pub async fn list_shots(pool: &PgPool, shot_list_id: DbId) -> Result<Vec<Shot>, sqlx::Error> {
        let query = format!(
            "SELECT {SHOT_COLUMNS} FROM shots WHERE shot_list_id = $1
             ORDER BY sort_order, shot_number"
        );
        sqlx::query_as::<_, Shot>(&query)
            .bind(shot_list_id)
            .fetch_all(pool)
            .await
    }

    /// Update a shot. Only non-`None` fields in `input` are applied.
    pub async fn update_shot(
        pool: &PgPool,
        shot_list_id: DbId,
        id: DbId,
        input: &UpdateShot,
    ) -> Result<Option<Shot>, sqlx::Error> {
        let query = format!(
            "UPDATE shots SET
                shot_number = COALESCE($3, shot_number),
                description = COALESCE($4, description),
                shot_type = COALESCE($5, shot_type),
                camera = COALESCE($6, camera),
                lens = COALESCE($7, lens),
                movement = COALESCE($8, movement),
                status = COALESCE($9, status),
                sort_order = COALESCE($10, sort_order)
             WHERE id = $2 AND shot_list_id = $1
             RETURNING {SHOT_COLUMNS}"
        );
        sqlx::query_as::<_, Shot>(&query)
            .bind(shot_list_id)
            .bind(id)
            .bind(&input.shot_number)
            .bind(&input.description)
            .bind(&input.shot_type)
            .bind(&input.camera)
            .bind(&input.lens)
            .bind(&input.movement)
            .bind(&input.status)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a shot. Returns `true` if a row was removed.
    pub async fn delete_shot(
        pool: &PgPool,
        shot_list_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shots WHERE id = $2 AND shot_list_id = $1")
            .bind(shot_list_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
