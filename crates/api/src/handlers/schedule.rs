//! Handlers for shooting-schedule entries, including conflict detection.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use slate_core::error::CoreError;
use slate_core::schedule::{validate_schedule_status, validate_time_range};
use slate_core::types::DbId;
use slate_db::models::schedule::{CreateScheduleEntry, ScheduleEntry, UpdateScheduleEntry};
use slate_db::repositories::ScheduleRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::project::ensure_project;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/schedule
pub async fn list(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ScheduleEntry>>>> {
    ensure_project(&state.pool, project_id).await?;
    let entries = ScheduleRepo::list(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/projects/{project_id}/schedule/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<ScheduleEntry>>> {
    ensure_project(&state.pool, project_id).await?;
    let entry = ScheduleRepo::find_by_id(&state.pool, project_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ScheduleEntry",
            id,
        }))?;
    Ok(Json(DataResponse { data: entry }))
}

/// POST /api/v1/projects/{project_id}/schedule
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateScheduleEntry>,
) -> AppResult<(StatusCode, Json<DataResponse<ScheduleEntry>>)> {
    ensure_project(&state.pool, project_id).await?;
    validate_time_range(&input.start_time, &input.end_time)?;
    if let Some(status) = input.status.as_deref() {
        validate_schedule_status(status)?;
    }

    let entry = ScheduleRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// PUT /api/v1/projects/{project_id}/schedule/{id}
///
/// When either end of the time range changes, the merged range (new value
/// where given, stored value otherwise) must still be valid.
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateScheduleEntry>,
) -> AppResult<Json<DataResponse<ScheduleEntry>>> {
    ensure_project(&state.pool, project_id).await?;
    if let Some(status) = input.status.as_deref() {
        validate_schedule_status(status)?;
    }

    if input.start_time.is_some() || input.end_time.is_some() {
        let current = ScheduleRepo::find_by_id(&state.pool, project_id, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "ScheduleEntry",
                id,
            }))?;
        let start = input.start_time.as_deref().unwrap_or(&current.start_time);
        let end = input.end_time.as_deref().unwrap_or(&current.end_time);
        validate_time_range(start, end)?;
    }

    let entry = ScheduleRepo::update(&state.pool, project_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ScheduleEntry",
            id,
        }))?;
    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/v1/projects/{project_id}/schedule/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ensure_project(&state.pool, project_id).await?;
    let deleted = ScheduleRepo::delete(&state.pool, project_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ScheduleEntry",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct ConflictQuery {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub exclude_id: Option<DbId>,
}

/// GET /api/v1/projects/{project_id}/schedule/conflicts
///
/// Returns the entries on `date` whose time range touches the queried
/// range. A shared boundary minute counts as a conflict, so back-to-back
/// entries are reported.
pub async fn conflicts(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Query(query): Query<ConflictQuery>,
) -> AppResult<Json<DataResponse<Vec<ScheduleEntry>>>> {
    ensure_project(&state.pool, project_id).await?;
    validate_time_range(&query.start_time, &query.end_time)?;

    let conflicts = ScheduleRepo::find_conflicts(
        &state.pool,
        project_id,
        query.date,
        &query.start_time,
        &query.end_time,
        query.exclude_id,
    )
    .await?;
    Ok(Json(DataResponse { data: conflicts }))
}
