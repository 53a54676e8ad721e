//! Handlers for a project's scripts.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use slate_core::error::CoreError;
use slate_core::types::DbId;
use slate_db::models::script::{CreateScript, Script, UpdateScript, VALID_SCRIPT_STATUSES};
use slate_db::repositories::ScriptRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::project::ensure_project;
use crate::response::DataResponse;
use crate::state::AppState;

fn validate_status(status: &str) -> Result<(), AppError> {
    if VALID_SCRIPT_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Invalid script status: {status}"
        )))
    }
}

/// GET /api/v1/projects/{project_id}/scripts
pub async fn list(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Script>>>> {
    ensure_project(&state.pool, project_id).await?;
    let scripts = ScriptRepo::list(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: scripts }))
}

/// GET /api/v1/projects/{project_id}/scripts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Script>>> {
    ensure_project(&state.pool, project_id).await?;
    let script = ScriptRepo::find_by_id(&state.pool, project_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Script",
            id,
        }))?;
    Ok(Json(DataResponse { data: script }))
}

/// POST /api/v1/projects/{project_id}/scripts
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateScript>,
) -> AppResult<(StatusCode, Json<DataResponse<Script>>)> {
    ensure_project(&state.pool, project_id).await?;
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".to_string()));
    }
    if let Some(status) = input.status.as_deref() {
        validate_status(status)?;
    }

    let script = ScriptRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: script })))
}

/// PUT /api/v1/projects/{project_id}/scripts/{id}
///
/// A content change bumps the version; metadata-only edits leave it
/// alone. The bump happens in the repository so it stays atomic with the
/// write.
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateScript>,
) -> AppResult<Json<DataResponse<Script>>> {
    ensure_project(&state.pool, project_id).await?;
    if let Some(status) = input.status.as_deref() {
        validate_status(status)?;
    }

    let script = ScriptRepo::update(&state.pool, project_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Script",
            id,
        }))?;
    Ok(Json(DataResponse { data: script }))
}

/// DELETE /api/v1/projects/{project_id}/scripts/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ensure_project(&state.pool, project_id).await?;
    let deleted = ScriptRepo::delete(&state.pool, project_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Script",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
