//! Expense entity model and DTOs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use slate_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An expense row from the `expenses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Expense {
    pub id: DbId,
    pub budget_id: DbId,
    pub expense_date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: Decimal,
    pub status: String,
    pub approved_by: Option<String>,
    pub paid_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an expense. Status defaults to `planned`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExpense {
    pub expense_date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: Decimal,
    pub status: Option<String>,
    pub approved_by: Option<String>,
    pub paid_by: Option<String>,
}

/// DTO for updating an expense. All fields are optional; a `status`
/// change is validated against the expense state machine.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExpense {
    pub expense_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub amount: Option<Decimal>,
    pub status: Option<String>,
    pub approved_by: Option<String>,
    pub paid_by: Option<String>,
}
