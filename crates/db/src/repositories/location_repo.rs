//! Repository for the `locations` table.

use slate_core::types::DbId;
use sqlx::PgPool;

use crate::models::location::{CreateLocation, Location, UpdateLocation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, address, contact_name, contact_phone, \
     permit_status, notes, created_at, updated_at";

/// Provides CRUD operations for shooting locations.
pub struct LocationRepo;

impl LocationRepo {
    /// Insert a new location, returning the created row.
    ///
    /// If `permit_status` is `None` in the input, defaults to `pending`.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateLocation,
    ) -> Result<Location, sqlx::Error> {
        let query = format!(
            "INSERT INTO locations
                (project_id, name, address, contact_name, contact_phone, permit_status, notes)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'pending'), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(project_id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.contact_name)
            .bind(&input.contact_phone)
            .bind(&input.permit_status)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a location by ID, scoped to its project.
    pub async fn find_by_id(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $2 AND project_id = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(project_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's locations by name.
    pub async fn list(pool: &PgPool, project_id: DbId) -> Result<Vec<Location>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM locations WHERE project_id = $1 ORDER BY name, id");
        sqlx::query_as::<_, Location>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a location. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateLocation,
    ) -> Result<Option<Location>, sqlx::Error> {
        let query = format!(
            "UPDATE locations SET
                name = COALESCE($3, name),
                address = COALESCE($4, address),
                contact_name = COALESCE($5, contact_name),
                contact_phone = COALESCE($6, contact_phone),
                permit_status = COALESCE($7, permit_status),
                notes = COALESCE($8, notes)
             WHERE id = $2 AND project_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(project_id)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.contact_name)
            .bind(&input.contact_phone)
            .bind(&input.permit_status)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a location. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $2 AND project_id = $1")
            .bind(project_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
