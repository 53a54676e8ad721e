//! Repository for the `schedule_entries` table, including conflict lookup.

use chrono::NaiveDate;
use slate_core::schedule;
use slate_core::types::DbId;
use sqlx::PgPool;

use crate::models::schedule::{Assignment, CreateScheduleEntry, ScheduleEntry, UpdateScheduleEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, shoot_date, start_time, end_time, location, status, \
     crew, cast_members, equipment, notes, created_at, updated_at";

fn assignments_json(assignments: &[Assignment]) -> serde_json::Value {
    serde_json::to_value(assignments).unwrap_or_else(|_| serde_json::Value::Array(vec![]))
}

/// Provides CRUD operations and conflict detection for schedule entries.
pub struct ScheduleRepo;

impl ScheduleRepo {
    /// Insert a new schedule entry, returning the created row.
    ///
    /// Time strings are assumed already validated by the API boundary
    /// (`slate_core::schedule::validate_time_range`).
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateScheduleEntry,
    ) -> Result<ScheduleEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO schedule_entries
                (project_id, shoot_date, start_time, end_time, location, status,
                 crew, cast_members, equipment, notes)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'draft'), $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ScheduleEntry>(&query)
            .bind(project_id)
            .bind(input.shoot_date)
            .bind(&input.start_time)
            .bind(&input.end_time)
            .bind(&input.location)
            .bind(&input.status)
            .bind(assignments_json(&input.crew))
            .bind(assignments_json(&input.cast_members))
            .bind(assignments_json(&input.equipment))
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a schedule entry by ID, scoped to its project.
    pub async fn find_by_id(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<ScheduleEntry>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM schedule_entries WHERE id = $2 AND project_id = $1");
        sqlx::query_as::<_, ScheduleEntry>(&query)
            .bind(project_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's schedule entries ordered by date, then start time.
    pub async fn list(pool: &PgPool, project_id: DbId) -> Result<Vec<ScheduleEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM schedule_entries WHERE project_id = $1
             ORDER BY shoot_date, start_time, id"
        );
        sqlx::query_as::<_, ScheduleEntry>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a schedule entry. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateScheduleEntry,
    ) -> Result<Option<ScheduleEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE schedule_entries SET
                shoot_date = COALESCE($3, shoot_date),
                start_time = COALESCE($4, start_time),
                end_time = COALESCE($5, end_time),
                location = COALESCE($6, location),
                status = COALESCE($7, status),
                crew = COALESCE($8, crew),
                cast_members = COALESCE($9, cast_members),
                equipment = COALESCE($10, equipment),
                notes = COALESCE($11, notes)
             WHERE id = $2 AND project_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ScheduleEntry>(&query)
            .bind(project_id)
            .bind(id)
            .bind(input.shoot_date)
            .bind(&input.start_time)
            .bind(&input.end_time)
            .bind(&input.location)
            .bind(&input.status)
            .bind(input.crew.as_deref().map(assignments_json))
            .bind(input.cast_members.as_deref().map(assignments_json))
            .bind(input.equipment.as_deref().map(assignments_json))
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a schedule entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM schedule_entries WHERE id = $2 AND project_id = $1")
            .bind(project_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find all entries for `project_id` on `shoot_date` whose time interval
    /// overlaps `[start_time, end_time]` (inclusive boundaries: back-to-back
    /// entries are reported).
    ///
    /// Cancelled entries are skipped; `exclude_id` omits an entry's own row
    /// when checking an edit against itself. Results are sorted by start
    /// time (tie-break on id) for deterministic output.
    pub async fn find_conflicts(
        pool: &PgPool,
        project_id: DbId,
        shoot_date: NaiveDate,
        start_time: &str,
        end_time: &str,
        exclude_id: Option<DbId>,
    ) -> Result<Vec<ScheduleEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM schedule_entries
             WHERE project_id = $1 AND shoot_date = $2 AND status <> 'cancelled'
             ORDER BY start_time, id"
        );
        let candidates = sqlx::query_as::<_, ScheduleEntry>(&query)
            .bind(project_id)
            .bind(shoot_date)
            .fetch_all(pool)
            .await?;

        // Interval comparison happens in core on parsed minute values;
        // persisted times are already validated, so parse failures on
        // stored rows are treated as non-conflicting rather than fatal.
        let conflicts = candidates
            .into_iter()
            .filter(|entry| Some(entry.id) != exclude_id)
            .filter(|entry| {
                schedule::times_overlap(&entry.start_time, &entry.end_time, start_time, end_time)
                    .unwrap_or(false)
            })
            .collect();
        Ok(conflicts)
    }
}
