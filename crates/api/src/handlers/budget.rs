//! Handlers for a project's budget: settings, categories, summary, and
//! explicit recomputation.
//!
//! Every mutation below ends with `BudgetRepo::recalculate_if_auto`, the
//! explicit recompute step that replaces the original system's implicit
//! save hooks. With `auto_calculate` off the stored summary goes stale
//! until `POST .../budget/recalculate`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use slate_core::budget::{is_over_warning_threshold, validate_amount, validate_category, BudgetSummary};
use slate_core::error::CoreError;
use slate_core::types::DbId;
use slate_db::models::budget::{
    Budget, BudgetCategory, BudgetSummaryView, CreateBudget, CreateBudgetCategory, UpdateBudget,
    UpdateBudgetCategory,
};
use slate_db::repositories::BudgetRepo;
use slate_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::handlers::project::ensure_project;
use crate::response::DataResponse;
use crate::state::AppState;

/// Look up a project's budget or fail with 404. Verifies the project
/// itself first so a missing project is reported as such.
pub(crate) async fn ensure_budget(pool: &DbPool, project_id: DbId) -> Result<Budget, AppError> {
    ensure_project(pool, project_id).await?;
    BudgetRepo::find_by_project(pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Budget",
            id: project_id,
        }))
}

/// POST /api/v1/projects/{project_id}/budget
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateBudget>,
) -> AppResult<(StatusCode, Json<DataResponse<Budget>>)> {
    ensure_project(&state.pool, project_id).await?;
    if let Some(threshold) = input.warning_threshold {
        validate_amount(threshold)?;
    }

    let budget = BudgetRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: budget })))
}

/// GET /api/v1/projects/{project_id}/budget
pub async fn get(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Budget>>> {
    let budget = ensure_budget(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: budget }))
}

/// PUT /api/v1/projects/{project_id}/budget
pub async fn update_settings(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<UpdateBudget>,
) -> AppResult<Json<DataResponse<Budget>>> {
    ensure_budget(&state.pool, project_id).await?;
    if let Some(threshold) = input.warning_threshold {
        validate_amount(threshold)?;
    }

    let budget = BudgetRepo::update_settings(&state.pool, project_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Budget",
            id: project_id,
        }))?;
    Ok(Json(DataResponse { data: budget }))
}

/// POST /api/v1/projects/{project_id}/budget/recalculate
///
/// Explicit recomputation, independent of the `auto_calculate` flag.
pub async fn recalculate(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Budget>>> {
    let budget = ensure_budget(&state.pool, project_id).await?;
    let budget = BudgetRepo::recalculate(&state.pool, budget.id).await?;
    Ok(Json(DataResponse { data: budget }))
}

/// GET /api/v1/projects/{project_id}/budget/summary
///
/// Returns the persisted summary plus the warning-threshold flag and the
/// per-category breakdown.
pub async fn summary(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<BudgetSummaryView>>> {
    let budget = ensure_budget(&state.pool, project_id).await?;
    let categories = BudgetRepo::list_categories(&state.pool, budget.id).await?;

    let summary = BudgetSummary {
        total_budgeted: budget.total_budgeted,
        total_spent: budget.total_spent,
        total_remaining: budget.total_remaining,
        percentage_used: budget.percentage_used,
        over_budget: budget.over_budget,
        over_budget_amount: budget.over_budget_amount,
    };
    let view = BudgetSummaryView {
        total_budgeted: summary.total_budgeted,
        total_spent: summary.total_spent,
        total_remaining: summary.total_remaining,
        percentage_used: summary.percentage_used,
        over_budget: summary.over_budget,
        over_budget_amount: summary.over_budget_amount,
        warning_threshold: budget.warning_threshold,
        over_warning_threshold: is_over_warning_threshold(&summary, budget.warning_threshold),
        categories,
    };
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{project_id}/budget/categories
pub async fn list_categories(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<BudgetCategory>>>> {
    let budget = ensure_budget(&state.pool, project_id).await?;
    let categories = BudgetRepo::list_categories(&state.pool, budget.id).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/projects/{project_id}/budget/categories
pub async fn create_category(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateBudgetCategory>,
) -> AppResult<(StatusCode, Json<DataResponse<BudgetCategory>>)> {
    let budget = ensure_budget(&state.pool, project_id).await?;
    validate_category(&input.name)?;
    validate_amount(input.budgeted)?;

    let category = BudgetRepo::create_category(&state.pool, budget.id, &input).await?;
    BudgetRepo::recalculate_if_auto(&state.pool, &budget).await?;
    // Re-fetch so the response reflects spent/remaining recomputed from any
    // pre-existing expenses in this category.
    let category = BudgetRepo::find_category(&state.pool, budget.id, category.id)
        .await?
        .unwrap_or(category);
    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// PUT /api/v1/projects/{project_id}/budget/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateBudgetCategory>,
) -> AppResult<Json<DataResponse<BudgetCategory>>> {
    let budget = ensure_budget(&state.pool, project_id).await?;
    if let Some(budgeted) = input.budgeted {
        validate_amount(budgeted)?;
    }

    let category = BudgetRepo::update_category(&state.pool, budget.id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BudgetCategory",
            id,
        }))?;
    BudgetRepo::recalculate_if_auto(&state.pool, &budget).await?;
    let category = BudgetRepo::find_category(&state.pool, budget.id, category.id)
        .await?
        .unwrap_or(category);
    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/projects/{project_id}/budget/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let budget = ensure_budget(&state.pool, project_id).await?;
    let deleted = BudgetRepo::delete_category(&state.pool, budget.id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "BudgetCategory",
            id,
        }));
    }
    BudgetRepo::recalculate_if_auto(&state.pool, &budget).await?;
    Ok(StatusCode::NO_CONTENT)
}
