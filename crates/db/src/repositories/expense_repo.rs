//! Repository for the `expenses` table.

use slate_core::types::DbId;
use sqlx::PgPool;

use crate::models::expense::{CreateExpense, Expense, UpdateExpense};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, budget_id, expense_date, description, category, amount, status, \
     approved_by, paid_by, created_at, updated_at";

/// Provides CRUD operations for expenses.
pub struct ExpenseRepo;

impl ExpenseRepo {
    /// Insert a new expense, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `planned`.
    pub async fn create(
        pool: &PgPool,
        budget_id: DbId,
        input: &CreateExpense,
    ) -> Result<Expense, sqlx::Error> {
        let query = format!(
            "INSERT INTO expenses
                (budget_id, expense_date, description, category, amount, status, approved_by, paid_by)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'planned'), $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(budget_id)
            .bind(input.expense_date)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.amount)
            .bind(&input.status)
            .bind(&input.approved_by)
            .bind(&input.paid_by)
            .fetch_one(pool)
            .await
    }

    /// Find an expense by ID, scoped to its budget.
    pub async fn find_by_id(
        pool: &PgPool,
        budget_id: DbId,
        id: DbId,
    ) -> Result<Option<Expense>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM expenses WHERE id = $2 AND budget_id = $1");
        sqlx::query_as::<_, Expense>(&query)
            .bind(budget_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a budget's expenses, most recent date first.
    pub async fn list(pool: &PgPool, budget_id: DbId) -> Result<Vec<Expense>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM expenses WHERE budget_id = $1
             ORDER BY expense_date DESC, id DESC"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(budget_id)
            .fetch_all(pool)
            .await
    }

    /// Update an expense. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists under the budget.
    pub async fn update(
        pool: &PgPool,
        budget_id: DbId,
        id: DbId,
        input: &UpdateExpense,
    ) -> Result<Option<Expense>, sqlx::Error> {
        let query = format!(
            "UPDATE expenses SET
                expense_date = COALESCE($3, expense_date),
                description = COALESCE($4, description),
                category = COALESCE($5, category),
                amount = COALESCE($6, amount),
                status = COALESCE($7, status),
                approved_by = COALESCE($8, approved_by),
                paid_by = COALESCE($9, paid_by)
             WHERE id = $2 AND budget_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(budget_id)
            .bind(id)
            .bind(input.expense_date)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.amount)
            .bind(&input.status)
            .bind(&input.approved_by)
            .bind(&input.paid_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete an expense. Returns `true` if a row was removed.
    ///
    /// Callers are responsible for triggering budget recalculation
    /// afterwards; an expense is never deleted independently of that.
    pub async fn delete(pool: &PgPool, budget_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $2 AND budget_id = $1")
            .bind(budget_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
