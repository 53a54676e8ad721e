//! Handlers for shot lists and their shots.
//!
//! Shots hang off a shot list rather than the project directly, so every
//! shot handler first resolves the list within the project before touching
//! the shot itself.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use slate_core::error::CoreError;
use slate_core::types::DbId;
use slate_db::models::shot_list::{
    CreateShot, CreateShotList, Shot, ShotList, UpdateShot, UpdateShotList, VALID_SHOT_STATUSES,
};
use slate_db::repositories::ShotListRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::project::ensure_project;
use crate::response::DataResponse;
use crate::state::AppState;

fn validate_shot_status(status: &str) -> Result<(), AppError> {
    if VALID_SHOT_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!("Invalid shot status: {status}")))
    }
}

/// Resolve a shot list within a project, or 404.
async fn ensure_shot_list(
    pool: &slate_db::DbPool,
    project_id: DbId,
    list_id: DbId,
) -> Result<ShotList, AppError> {
    ensure_project(pool, project_id).await?;
    ShotListRepo::find_by_id(pool, project_id, list_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShotList",
            id: list_id,
        }))
}

// ---------------------------------------------------------------------------
// Shot lists
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{project_id}/shot-lists
pub async fn list(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ShotList>>>> {
    ensure_project(&state.pool, project_id).await?;
    let lists = ShotListRepo::list(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: lists }))
}

/// GET /api/v1/projects/{project_id}/shot-lists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<ShotList>>> {
    let shot_list = ensure_shot_list(&state.pool, project_id, id).await?;
    Ok(Json(DataResponse { data: shot_list }))
}

/// POST /api/v1/projects/{project_id}/shot-lists
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateShotList>,
) -> AppResult<(StatusCode, Json<DataResponse<ShotList>>)> {
    ensure_project(&state.pool, project_id).await?;
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".to_string()));
    }

    let shot_list = ShotListRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: shot_list })))
}

/// PUT /api/v1/projects/{project_id}/shot-lists/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateShotList>,
) -> AppResult<Json<DataResponse<ShotList>>> {
    ensure_project(&state.pool, project_id).await?;
    let shot_list = ShotListRepo::update(&state.pool, project_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShotList",
            id,
        }))?;
    Ok(Json(DataResponse { data: shot_list }))
}

/// DELETE /api/v1/projects/{project_id}/shot-lists/{id}
///
/// Shots cascade with the list.
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ensure_project(&state.pool, project_id).await?;
    let deleted = ShotListRepo::delete(&state.pool, project_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ShotList",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Shots
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{project_id}/shot-lists/{list_id}/shots
///
/// Shots come back ordered by sort order, then shot number.
pub async fn list_shots(
    State(state): State<AppState>,
    Path((project_id, list_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Vec<Shot>>>> {
    let shot_list = ensure_shot_list(&state.pool, project_id, list_id).await?;
    let shots = ShotListRepo::list_shots(&state.pool, shot_list.id).await?;
    Ok(Json(DataResponse { data: shots }))
}

/// POST /api/v1/projects/{project_id}/shot-lists/{list_id}/shots
pub async fn create_shot(
    State(state): State<AppState>,
    Path((project_id, list_id)): Path<(DbId, DbId)>,
    Json(input): Json<CreateShot>,
) -> AppResult<(StatusCode, Json<DataResponse<Shot>>)> {
    let shot_list = ensure_shot_list(&state.pool, project_id, list_id).await?;
    if input.shot_number.trim().is_empty() {
        return Err(AppError::BadRequest(
            "shot_number must not be empty".to_string(),
        ));
    }
    if let Some(status) = input.status.as_deref() {
        validate_shot_status(status)?;
    }

    let shot = ShotListRepo::create_shot(&state.pool, shot_list.id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: shot })))
}

/// PUT /api/v1/projects/{project_id}/shot-lists/{list_id}/shots/{id}
pub async fn update_shot(
    State(state): State<AppState>,
    Path((project_id, list_id, id)): Path<(DbId, DbId, DbId)>,
    Json(input): Json<UpdateShot>,
) -> AppResult<Json<DataResponse<Shot>>> {
    let shot_list = ensure_shot_list(&state.pool, project_id, list_id).await?;
    if let Some(status) = input.status.as_deref() {
        validate_shot_status(status)?;
    }

    let shot = ShotListRepo::update_shot(&state.pool, shot_list.id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shot", id }))?;
    Ok(Json(DataResponse { data: shot }))
}

/// DELETE /api/v1/projects/{project_id}/shot-lists/{list_id}/shots/{id}
pub async fn delete_shot(
    State(state): State<AppState>,
    Path((project_id, list_id, id)): Path<(DbId, DbId, DbId)>,
) -> AppResult<StatusCode> {
    let shot_list = ensure_shot_list(&state.pool, project_id, list_id).await?;
    let deleted = ShotListRepo::delete_shot(&state.pool, shot_list.id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Shot", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}
