//! Handlers for a project's storyboard frames.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use slate_core::error::CoreError;
use slate_core::types::DbId;
use slate_db::models::storyboard::{CreateStoryboardFrame, StoryboardFrame, UpdateStoryboardFrame};
use slate_db::repositories::StoryboardRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::project::ensure_project;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/storyboard
///
/// Frames come back ordered by frame number.
pub async fn list(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<StoryboardFrame>>>> {
    ensure_project(&state.pool, project_id).await?;
    let frames = StoryboardRepo::list(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: frames }))
}

/// GET /api/v1/projects/{project_id}/storyboard/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<StoryboardFrame>>> {
    ensure_project(&state.pool, project_id).await?;
    let frame = StoryboardRepo::find_by_id(&state.pool, project_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StoryboardFrame",
            id,
        }))?;
    Ok(Json(DataResponse { data: frame }))
}

/// POST /api/v1/projects/{project_id}/storyboard
///
/// Frame numbers are unique per project; a duplicate maps to 409.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateStoryboardFrame>,
) -> AppResult<(StatusCode, Json<DataResponse<StoryboardFrame>>)> {
    ensure_project(&state.pool, project_id).await?;
    if input.frame_number < 1 {
        return Err(AppError::BadRequest(
            "frame_number must be positive".to_string(),
        ));
    }

    let frame = StoryboardRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: frame })))
}

/// PUT /api/v1/projects/{project_id}/storyboard/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateStoryboardFrame>,
) -> AppResult<Json<DataResponse<StoryboardFrame>>> {
    ensure_project(&state.pool, project_id).await?;
    if let Some(frame_number) = input.frame_number {
        if frame_number < 1 {
            return Err(AppError::BadRequest(
                "frame_number must be positive".to_string(),
            ));
        }
    }

    let frame = StoryboardRepo::update(&state.pool, project_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StoryboardFrame",
            id,
        }))?;
    Ok(Json(DataResponse { data: frame }))
}

/// DELETE /api/v1/projects/{project_id}/storyboard/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ensure_project(&state.pool, project_id).await?;
    let deleted = StoryboardRepo::delete(&state.pool, project_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "StoryboardFrame",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
