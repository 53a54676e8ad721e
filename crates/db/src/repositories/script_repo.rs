//! Repository for the `scripts` table.

use slate_core::types::DbId;
use sqlx::PgPool;

use crate::models::script::{CreateScript, Script, UpdateScript};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, content, version, status, created_at, updated_at";

/// Provides CRUD operations for scripts.
pub struct ScriptRepo;

impl ScriptRepo {
    /// Insert a new script at version 1, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateScript,
    ) -> Result<Script, sqlx::Error> {
        let query = format!(
            "INSERT INTO scripts (project_id, title, content, status)
             VALUES ($1, $2, $3, COALESCE($4, 'draft'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Script>(&query)
            .bind(project_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a script by ID, scoped to its project.
    pub async fn find_by_id(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<Script>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scripts WHERE id = $2 AND project_id = $1");
        sqlx::query_as::<_, Script>(&query)
            .bind(project_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's scripts, most recently updated first.
    pub async fn list(pool: &PgPool, project_id: DbId) -> Result<Vec<Script>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM scripts WHERE project_id = $1 ORDER BY updated_at DESC"
        );
        sqlx::query_as::<_, Script>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a script. A content change bumps the version counter.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateScript,
    ) -> Result<Option<Script>, sqlx::Error> {
        let query = format!(
            "UPDATE scripts SET
                title = COALESCE($3, title),
                content = COALESCE($4, content),
                status = COALESCE($5, status),
                version = version + CASE WHEN $4 IS NOT NULL AND $4 <> content THEN 1 ELSE 0 END
             WHERE id = $2 AND project_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Script>(&query)
            .bind(project_id)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a script. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scripts WHERE id = $2 AND project_id = $1")
            .bind(project_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
