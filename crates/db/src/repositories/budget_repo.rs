//! Repository for the `budgets` and `budget_categories` tables.
//!
//! Summary recomputation is an explicit, named operation
//! ([`BudgetRepo::recalculate`]) invoked by the API layer after expense or
//! category mutations, never an implicit save hook. The arithmetic itself
//! lives in `slate_core::budget`; this repo only maps rows in and out and
//! writes the derived fields back inside one transaction.

use slate_core::budget::{self, CategoryBudget, ExpenseLine};
use slate_core::types::DbId;
use sqlx::PgPool;

use crate::models::budget::{
    Budget, BudgetCategory, CreateBudget, CreateBudgetCategory, UpdateBudget,
    UpdateBudgetCategory,
};

/// Column list for budget rows.
const COLUMNS: &str = "id, project_id, auto_calculate, warning_threshold, total_budgeted, \
     total_spent, total_remaining, percentage_used, over_budget, over_budget_amount, \
     created_at, updated_at";

/// Column list for category rows.
const CATEGORY_COLUMNS: &str =
    "id, budget_id, name, budgeted, spent, remaining, percentage, created_at, updated_at";

/// Provides CRUD and summary recomputation for budgets and their categories.
pub struct BudgetRepo;

impl BudgetRepo {
    /// Insert a project's budget, returning the created row.
    ///
    /// Fails with a unique violation (`uq_budgets_project`) if the project
    /// already has one.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateBudget,
    ) -> Result<Budget, sqlx::Error> {
        let query = format!(
            "INSERT INTO budgets (project_id, auto_calculate, warning_threshold)
             VALUES ($1, $2, COALESCE($3, 80))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Budget>(&query)
            .bind(project_id)
            .bind(input.auto_calculate)
            .bind(input.warning_threshold)
            .fetch_one(pool)
            .await
    }

    /// Find a project's budget.
    pub async fn find_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<Budget>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM budgets WHERE project_id = $1");
        sqlx::query_as::<_, Budget>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Update budget settings (auto_calculate, warning_threshold).
    pub async fn update_settings(
        pool: &PgPool,
        project_id: DbId,
        input: &UpdateBudget,
    ) -> Result<Option<Budget>, sqlx::Error> {
        let query = format!(
            "UPDATE budgets SET
                auto_calculate = COALESCE($2, auto_calculate),
                warning_threshold = COALESCE($3, warning_threshold)
             WHERE project_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Budget>(&query)
            .bind(project_id)
            .bind(input.auto_calculate)
            .bind(input.warning_threshold)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Categories
    // -----------------------------------------------------------------------

    /// List a budget's categories in insertion order.
    pub async fn list_categories(
        pool: &PgPool,
        budget_id: DbId,
    ) -> Result<Vec<BudgetCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {CATEGORY_COLUMNS} FROM budget_categories WHERE budget_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, BudgetCategory>(&query)
            .bind(budget_id)
            .fetch_all(pool)
            .await
    }

    /// Find a single category. Scoped to its budget.
    pub async fn find_category(
        pool: &PgPool,
        budget_id: DbId,
        id: DbId,
    ) -> Result<Option<BudgetCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {CATEGORY_COLUMNS} FROM budget_categories WHERE id = $2 AND budget_id = $1"
        );
        sqlx::query_as::<_, BudgetCategory>(&query)
            .bind(budget_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a category, returning the created row.
    pub async fn create_category(
        pool: &PgPool,
        budget_id: DbId,
        input: &CreateBudgetCategory,
    ) -> Result<BudgetCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO budget_categories (budget_id, name, budgeted, remaining)
             VALUES ($1, $2, $3, $3)
             RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, BudgetCategory>(&query)
            .bind(budget_id)
            .bind(&input.name)
            .bind(input.budgeted)
            .fetch_one(pool)
            .await
    }

    /// Update a category's planned amount. Scoped to its budget.
    pub async fn update_category(
        pool: &PgPool,
        budget_id: DbId,
        id: DbId,
        input: &UpdateBudgetCategory,
    ) -> Result<Option<BudgetCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE budget_categories SET budgeted = COALESCE($3, budgeted)
             WHERE id = $2 AND budget_id = $1
             RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, BudgetCategory>(&query)
            .bind(budget_id)
            .bind(id)
            .bind(input.budgeted)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category. Returns `true` if a row was removed.
    pub async fn delete_category(
        pool: &PgPool,
        budget_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM budget_categories WHERE id = $2 AND budget_id = $1")
                .bind(budget_id)
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Summary recomputation
    // -----------------------------------------------------------------------

    /// Recompute and persist all derived budget fields.
    ///
    /// Loads the budget's categories and expenses, runs the pure
    /// aggregators from `slate_core::budget`, then writes per-category
    /// totals and the overall summary back in a single transaction.
    /// Idempotent: repeated calls without intervening mutation leave the
    /// rows unchanged.
    pub async fn recalculate(pool: &PgPool, budget_id: DbId) -> Result<Budget, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let category_rows = sqlx::query_as::<_, BudgetCategory>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM budget_categories WHERE budget_id = $1 ORDER BY id"
        ))
        .bind(budget_id)
        .fetch_all(&mut *tx)
        .await?;

        let expense_rows = sqlx::query_as::<_, (String, rust_decimal::Decimal, String)>(
            "SELECT category, amount, status FROM expenses WHERE budget_id = $1",
        )
        .bind(budget_id)
        .fetch_all(&mut *tx)
        .await?;

        let categories: Vec<CategoryBudget> = category_rows
            .iter()
            .map(|c| CategoryBudget {
                name: c.name.clone(),
                budgeted: c.budgeted,
            })
            .collect();
        let expenses: Vec<ExpenseLine> = expense_rows
            .into_iter()
            .map(|(category, amount, status)| ExpenseLine {
                category,
                amount,
                status,
            })
            .collect();

        let totals = budget::aggregate_categories(&categories, &expenses);
        let summary = budget::summarize(&totals, &expenses);

        for (row, derived) in category_rows.iter().zip(&totals) {
            sqlx::query(
                "UPDATE budget_categories SET spent = $2, remaining = $3, percentage = $4
                 WHERE id = $1",
            )
            .bind(row.id)
            .bind(derived.spent)
            .bind(derived.remaining)
            .bind(derived.percentage)
            .execute(&mut *tx)
            .await?;
        }

        let budget = sqlx::query_as::<_, Budget>(&format!(
            "UPDATE budgets SET
                total_budgeted = $2,
                total_spent = $3,
                total_remaining = $4,
                percentage_used = $5,
                over_budget = $6,
                over_budget_amount = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(budget_id)
        .bind(summary.total_budgeted)
        .bind(summary.total_spent)
        .bind(summary.total_remaining)
        .bind(summary.percentage_used)
        .bind(summary.over_budget)
        .bind(summary.over_budget_amount)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(budget)
    }

    /// Recalculate only when the budget's `auto_calculate` flag is set.
    ///
    /// Called by the API layer after every expense/category mutation; with
    /// the flag off the stored summary goes stale until the explicit
    /// recalculate endpoint is hit.
    pub async fn recalculate_if_auto(pool: &PgPool, budget: &Budget) -> Result<Budget, sqlx::Error> {
        if budget.auto_calculate {
            Self::recalculate(pool, budget.id).await
        } else {
            Ok(budget.clone())
        }
    }
}
