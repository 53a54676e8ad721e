//! Handlers for a budget's expenses.
//!
//! Expense mutations are where money actually moves, so this module
//! enforces the full boundary: non-negative amounts, the closed category
//! set, and the `planned -> approved -> paid` status state machine. Every
//! mutation finishes with the conditional summary recompute.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use slate_core::budget::{
    expense_status, validate_amount, validate_category, validate_expense_status,
};
use slate_core::error::CoreError;
use slate_core::types::DbId;
use slate_db::models::expense::{CreateExpense, Expense, UpdateExpense};
use slate_db::repositories::{BudgetRepo, ExpenseRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::budget::ensure_budget;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/budget/expenses
pub async fn list(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Expense>>>> {
    let budget = ensure_budget(&state.pool, project_id).await?;
    let expenses = ExpenseRepo::list(&state.pool, budget.id).await?;
    Ok(Json(DataResponse { data: expenses }))
}

/// GET /api/v1/projects/{project_id}/budget/expenses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Expense>>> {
    let budget = ensure_budget(&state.pool, project_id).await?;
    let expense = ExpenseRepo::find_by_id(&state.pool, budget.id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id,
        }))?;
    Ok(Json(DataResponse { data: expense }))
}

/// POST /api/v1/projects/{project_id}/budget/expenses
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateExpense>,
) -> AppResult<(StatusCode, Json<DataResponse<Expense>>)> {
    let budget = ensure_budget(&state.pool, project_id).await?;
    validate_amount(input.amount)?;
    validate_category(&input.category)?;
    if let Some(status) = input.status.as_deref() {
        validate_expense_status(status)?;
    }

    let expense = ExpenseRepo::create(&state.pool, budget.id, &input).await?;
    BudgetRepo::recalculate_if_auto(&state.pool, &budget).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: expense })))
}

/// PUT /api/v1/projects/{project_id}/budget/expenses/{id}
///
/// A status change is validated against the expense state machine
/// relative to the currently stored status.
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateExpense>,
) -> AppResult<Json<DataResponse<Expense>>> {
    let budget = ensure_budget(&state.pool, project_id).await?;
    if let Some(amount) = input.amount {
        validate_amount(amount)?;
    }
    if let Some(category) = input.category.as_deref() {
        validate_category(category)?;
    }

    let current = ExpenseRepo::find_by_id(&state.pool, budget.id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id,
        }))?;

    if let Some(status) = input.status.as_deref() {
        validate_expense_status(status)?;
        if status != current.status {
            expense_status::validate_transition(&current.status, status)
                .map_err(CoreError::Conflict)?;
        }
    }

    let expense = ExpenseRepo::update(&state.pool, budget.id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id,
        }))?;
    BudgetRepo::recalculate_if_auto(&state.pool, &budget).await?;
    Ok(Json(DataResponse { data: expense }))
}

/// DELETE /api/v1/projects/{project_id}/budget/expenses/{id}
///
/// An expense is never deleted without the budget recalculation that
/// follows it.
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let budget = ensure_budget(&state.pool, project_id).await?;
    let deleted = ExpenseRepo::delete(&state.pool, budget.id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id,
        }));
    }
    BudgetRepo::recalculate_if_auto(&state.pool, &budget).await?;
    Ok(StatusCode::NO_CONTENT)
}
