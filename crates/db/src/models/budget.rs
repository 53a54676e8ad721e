//! Budget and budget category entity models and DTOs.
//!
//! The budget row carries denormalized summary fields written back by
//! `BudgetRepo::recalculate`; the category row mirrors the derived
//! per-category totals from `slate_core::budget`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use slate_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A budget row from the `budgets` table (one per project).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Budget {
    pub id: DbId,
    pub project_id: DbId,
    pub auto_calculate: bool,
    pub warning_threshold: Decimal,
    pub total_budgeted: Decimal,
    pub total_spent: Decimal,
    pub total_remaining: Decimal,
    pub percentage_used: Decimal,
    pub over_budget: bool,
    pub over_budget_amount: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A category row from the `budget_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BudgetCategory {
    pub id: DbId,
    pub budget_id: DbId,
    pub name: String,
    pub budgeted: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub percentage: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project's budget.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBudget {
    #[serde(default = "default_true")]
    pub auto_calculate: bool,
    /// Percentage at which the warning predicate fires. Defaults to 80.
    pub warning_threshold: Option<Decimal>,
}

/// DTO for updating budget settings. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBudget {
    pub auto_calculate: Option<bool>,
    pub warning_threshold: Option<Decimal>,
}

/// DTO for creating a budget category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBudgetCategory {
    pub name: String,
    pub budgeted: Decimal,
}

/// DTO for updating a budget category's planned amount.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBudgetCategory {
    pub budgeted: Option<Decimal>,
}

/// Summary payload returned by the summary endpoint: the persisted
/// denormalized totals plus the warning flag evaluated against the
/// budget's configured threshold.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetSummaryView {
    pub total_budgeted: Decimal,
    pub total_spent: Decimal,
    pub total_remaining: Decimal,
    pub percentage_used: Decimal,
    pub over_budget: bool,
    pub over_budget_amount: Decimal,
    pub warning_threshold: Decimal,
    pub over_warning_threshold: bool,
    pub categories: Vec<BudgetCategory>,
}

fn default_true() -> bool {
    true
}
