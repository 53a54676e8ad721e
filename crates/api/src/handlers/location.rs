//! Handlers for a project's shooting locations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use slate_core::error::CoreError;
use slate_core::types::DbId;
use slate_db::models::location::{CreateLocation, Location, UpdateLocation, VALID_PERMIT_STATUSES};
use slate_db::repositories::LocationRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::project::ensure_project;
use crate::response::DataResponse;
use crate::state::AppState;

fn validate_permit_status(status: &str) -> Result<(), AppError> {
    if VALID_PERMIT_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Invalid permit status: {status}"
        )))
    }
}

/// GET /api/v1/projects/{project_id}/locations
pub async fn list(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Location>>>> {
    ensure_project(&state.pool, project_id).await?;
    let locations = LocationRepo::list(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: locations }))
}

/// GET /api/v1/projects/{project_id}/locations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Location>>> {
    ensure_project(&state.pool, project_id).await?;
    let location = LocationRepo::find_by_id(&state.pool, project_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))?;
    Ok(Json(DataResponse { data: location }))
}

/// POST /api/v1/projects/{project_id}/locations
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateLocation>,
) -> AppResult<(StatusCode, Json<DataResponse<Location>>)> {
    ensure_project(&state.pool, project_id).await?;
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }
    if let Some(status) = input.permit_status.as_deref() {
        validate_permit_status(status)?;
    }

    let location = LocationRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: location })))
}

/// PUT /api/v1/projects/{project_id}/locations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateLocation>,
) -> AppResult<Json<DataResponse<Location>>> {
    ensure_project(&state.pool, project_id).await?;
    if let Some(status) = input.permit_status.as_deref() {
        validate_permit_status(status)?;
    }

    let location = LocationRepo::update(&state.pool, project_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))?;
    Ok(Json(DataResponse { data: location }))
}

/// DELETE /api/v1/projects/{project_id}/locations/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ensure_project(&state.pool, project_id).await?;
    let deleted = LocationRepo::delete(&state.pool, project_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
